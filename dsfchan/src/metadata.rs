//! The optional metadata region trailing the audio payload
//!
//! DSF files point at their metadata (in practice an ID3v2 tag) with an absolute offset stored in
//! the `DSD ` chunk. The region runs from that offset to the end of the file. Its contents are
//! never interpreted, only carried over.

use crate::config::ParseOptions;
use crate::error::Result;
use crate::header::{DsfHeader, HEADER_SIZE};
use crate::macros::{err, parse_mode_choice};

use std::io::{self, Read, Seek, SeekFrom, Write};

/// The location of an opaque metadata region
///
/// The region is never held in memory, see [`MetadataRegion::copy_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetadataRegion {
	offset: u64,
	len: u64,
}

impl MetadataRegion {
	/// The absolute offset of the region
	pub fn offset(&self) -> u64 {
		self.offset
	}

	/// Length of the region in bytes
	pub fn len(&self) -> u64 {
		self.len
	}

	/// Copy the region verbatim from `reader` to `writer`
	///
	/// The region is streamed through a small fixed buffer, its size has no effect on memory use.
	/// The reader is left at the end of the region.
	///
	/// # Errors
	///
	/// * [`std::io::Error`], including the reader ending before the region does
	pub fn copy_to<R, W>(&self, reader: &mut R, writer: &mut W) -> Result<()>
	where
		R: Read + Seek,
		W: Write,
	{
		reader.seek(SeekFrom::Start(self.offset))?;

		let copied = io::copy(&mut reader.by_ref().take(self.len), writer)?;
		if copied != self.len {
			return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
		}

		Ok(())
	}
}

/// Locate the metadata region described by `header`, if there is one
///
/// When the header has no metadata offset, nothing is read and the reader isn't moved. Otherwise
/// the reader is checked to actually hold the full region, and is left at the start of the audio
/// payload ([`HEADER_SIZE`]), regardless of where it was before.
///
/// # Errors
///
/// * [`ErrorKind::CorruptMetadataPointer`](crate::error::ErrorKind::CorruptMetadataPointer) if
///   the offset is not before the end of the file, or with
///   [`ParsingMode::Strict`](crate::config::ParsingMode::Strict), if it points into the header
///   or audio payload
/// * [`std::io::Error`], including the reader ending before the region does
pub fn locate_metadata<R>(
	reader: &mut R,
	header: &DsfHeader,
	parse_options: ParseOptions,
) -> Result<Option<MetadataRegion>>
where
	R: Read + Seek,
{
	let Some(offset) = header.metadata_offset() else {
		log::debug!("No metadata region present");
		return Ok(None);
	};

	let file_size = header.dsd.file_size;
	let len = match file_size.checked_sub(offset) {
		Some(len) if len > 0 => len,
		_ => err!(CorruptMetadataPointer { offset, file_size }),
	};

	if offset < header.payload_end() {
		let parse_mode = parse_options.parsing_mode;
		parse_mode_choice!(
			parse_mode,
			STRICT: err!(CorruptMetadataPointer { offset, file_size }),
			BESTATTEMPT: log::warn!(
				"Metadata offset {offset} points inside the audio data (ends at {}), copying anyway",
				header.payload_end()
			),
		);
	}

	let stream_len = reader.seek(SeekFrom::End(0))?;
	reader.seek(SeekFrom::Start(HEADER_SIZE))?;

	if stream_len < file_size {
		log::debug!("Metadata region ends at {file_size}, but the input is only {stream_len} bytes");
		return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
	}

	log::debug!("Found {len} bytes of metadata at offset {offset}");

	Ok(Some(MetadataRegion { offset, len }))
}
