use super::{DataChunk, DsdChunk, DsfHeader, FmtChunk, HEADER_SIZE};
use crate::error::Result;
use crate::macros::err;

use std::io::{ErrorKind as IoErrorKind, Read};

use byteorder::{LittleEndian, ReadBytesExt};

impl DsfHeader {
	/// Read the fixed 92 byte header
	///
	/// This is a purely structural decode, none of the fields are checked. See
	/// [`DsfHeader::validate`].
	///
	/// The reader is expected to be positioned at the start of the file.
	///
	/// # Errors
	///
	/// * [`ErrorKind::TruncatedHeader`](crate::error::ErrorKind::TruncatedHeader) if the reader
	///   ends before the full header
	/// * [`std::io::Error`]
	///
	/// # Examples
	///
	/// ```rust
	/// use dsfchan::error::ErrorKind;
	/// use dsfchan::header::DsfHeader;
	///
	/// let err = DsfHeader::parse(&mut &b"DSD "[..]).unwrap_err();
	/// assert!(matches!(err.kind(), ErrorKind::TruncatedHeader));
	/// ```
	pub fn parse<R>(reader: &mut R) -> Result<Self>
	where
		R: Read,
	{
		let mut header = [0; HEADER_SIZE as usize];
		match reader.read_exact(&mut header) {
			Ok(()) => {},
			Err(e) if e.kind() == IoErrorKind::UnexpectedEof => err!(TruncatedHeader),
			Err(e) => return Err(e.into()),
		}

		let reader = &mut &header[..];

		let dsd = read_dsd_chunk(reader)?;
		let fmt = read_fmt_chunk(reader)?;
		let data = read_data_chunk(reader)?;

		Ok(Self { dsd, fmt, data })
	}
}

fn read_tag<R>(reader: &mut R) -> Result<[u8; 4]>
where
	R: Read,
{
	let mut tag = [0; 4];
	reader.read_exact(&mut tag)?;
	Ok(tag)
}

fn read_dsd_chunk<R>(reader: &mut R) -> Result<DsdChunk>
where
	R: Read,
{
	Ok(DsdChunk {
		tag: read_tag(reader)?,
		chunk_length: reader.read_u64::<LittleEndian>()?,
		file_size: reader.read_u64::<LittleEndian>()?,
		metadata_offset: reader.read_u64::<LittleEndian>()?,
	})
}

fn read_fmt_chunk<R>(reader: &mut R) -> Result<FmtChunk>
where
	R: Read,
{
	Ok(FmtChunk {
		tag: read_tag(reader)?,
		chunk_length: reader.read_u64::<LittleEndian>()?,
		format_version: reader.read_u32::<LittleEndian>()?,
		format_id: reader.read_u32::<LittleEndian>()?,
		channel_type: reader.read_u32::<LittleEndian>()?,
		channel_count: reader.read_u32::<LittleEndian>()?,
		sample_rate: reader.read_u32::<LittleEndian>()?,
		bits_per_sample: reader.read_u32::<LittleEndian>()?,
		sample_count: reader.read_u64::<LittleEndian>()?,
		block_size: reader.read_u32::<LittleEndian>()?,
		reserved: reader.read_u32::<LittleEndian>()?,
	})
}

fn read_data_chunk<R>(reader: &mut R) -> Result<DataChunk>
where
	R: Read,
{
	Ok(DataChunk {
		tag: read_tag(reader)?,
		chunk_length: reader.read_u64::<LittleEndian>()?,
	})
}
