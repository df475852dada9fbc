use super::{DSD_CHUNK_SIZE, DsfHeader, FMT_CHUNK_SIZE, HEADER_SIZE};
use crate::error::Result;

use std::io::Write;

use byteorder::{ByteOrder, LittleEndian};

const FMT_START: usize = DSD_CHUNK_SIZE as usize;
const DATA_START: usize = (DSD_CHUNK_SIZE + FMT_CHUNK_SIZE) as usize;

impl DsfHeader {
	/// Encode the header in its on-disk layout
	///
	/// This is the exact inverse of [`DsfHeader::parse`]. No field is recomputed, a parsed header
	/// is encoded byte-identical.
	pub fn as_bytes(&self) -> [u8; HEADER_SIZE as usize] {
		let mut bytes = [0; HEADER_SIZE as usize];

		let dsd = &self.dsd;
		let out = &mut bytes[..FMT_START];
		out[..4].copy_from_slice(&dsd.tag);
		LittleEndian::write_u64(&mut out[4..12], dsd.chunk_length);
		LittleEndian::write_u64(&mut out[12..20], dsd.file_size);
		LittleEndian::write_u64(&mut out[20..28], dsd.metadata_offset);

		let fmt = &self.fmt;
		let out = &mut bytes[FMT_START..DATA_START];
		out[..4].copy_from_slice(&fmt.tag);
		LittleEndian::write_u64(&mut out[4..12], fmt.chunk_length);
		LittleEndian::write_u32(&mut out[12..16], fmt.format_version);
		LittleEndian::write_u32(&mut out[16..20], fmt.format_id);
		LittleEndian::write_u32(&mut out[20..24], fmt.channel_type);
		LittleEndian::write_u32(&mut out[24..28], fmt.channel_count);
		LittleEndian::write_u32(&mut out[28..32], fmt.sample_rate);
		LittleEndian::write_u32(&mut out[32..36], fmt.bits_per_sample);
		LittleEndian::write_u64(&mut out[36..44], fmt.sample_count);
		LittleEndian::write_u32(&mut out[44..48], fmt.block_size);
		LittleEndian::write_u32(&mut out[48..52], fmt.reserved);

		let data = &self.data;
		let out = &mut bytes[DATA_START..];
		out[..4].copy_from_slice(&data.tag);
		LittleEndian::write_u64(&mut out[4..12], data.chunk_length);

		bytes
	}

	/// Write the header, see [`DsfHeader::as_bytes`]
	///
	/// # Errors
	///
	/// * [`std::io::Error`]
	pub fn write_to<W>(&self, writer: &mut W) -> Result<()>
	where
		W: Write,
	{
		writer.write_all(&self.as_bytes())?;
		Ok(())
	}
}
