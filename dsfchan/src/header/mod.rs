//! The fixed DSF header
//!
//! A DSF file opens with three chunks laid out back to back, little-endian and without padding:
//!
//! | Chunk  | Offset | Size |
//! |--------|--------|------|
//! | `DSD ` | 0      | 28   |
//! | `fmt ` | 28     | 52   |
//! | `data` | 80     | 12   |
//!
//! The audio payload follows immediately at offset 92. An optional metadata region (usually an
//! ID3v2 tag) may follow the payload, located through [`DsdChunk::metadata_offset`].

mod properties;
mod read;
mod validate;
mod write;

pub use properties::DsfProperties;

/// Size of a single channel block in bytes
pub const BLOCK_SIZE: usize = 4096;
/// Size of a left/right block pair in bytes
pub const BLOCK_PAIR_SIZE: usize = 2 * BLOCK_SIZE;

/// Size of the `DSD ` chunk
pub const DSD_CHUNK_SIZE: u64 = 28;
/// Size of the `fmt ` chunk
pub const FMT_CHUNK_SIZE: u64 = 52;
/// Size of the `data` chunk header, excluding the payload
pub const DATA_CHUNK_HEADER_SIZE: u64 = 12;
/// Size of the full fixed header, the absolute offset of the audio payload
pub const HEADER_SIZE: u64 = DSD_CHUNK_SIZE + FMT_CHUNK_SIZE + DATA_CHUNK_HEADER_SIZE;

/// Every supported sample rate is a multiple of this (DSD64)
pub const BASE_SAMPLE_RATE: u32 = 2_822_400;

/// The outer `DSD ` chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DsdChunk {
	/// Chunk tag, `"DSD "` in a valid file
	pub tag: [u8; 4],
	/// Chunk length, [`DSD_CHUNK_SIZE`] in a valid file
	pub chunk_length: u64,
	/// Total size of the file in bytes
	pub file_size: u64,
	/// Absolute offset of the metadata region, `0` if there is none
	pub metadata_offset: u64,
}

/// The `fmt ` chunk, describing the audio format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FmtChunk {
	/// Chunk tag, `"fmt "` in a valid file
	pub tag: [u8; 4],
	/// Chunk length, [`FMT_CHUNK_SIZE`] in a valid file
	pub chunk_length: u64,
	/// Format version, always `1`
	pub format_version: u32,
	/// Format ID, `0` for DSD raw
	pub format_id: u32,
	/// Channel type, `2` for stereo
	pub channel_type: u32,
	/// Number of channels
	pub channel_count: u32,
	/// Sampling frequency in Hz
	pub sample_rate: u32,
	/// Bits per sample, `1` or `8`
	pub bits_per_sample: u32,
	/// Number of samples per channel
	pub sample_count: u64,
	/// Block size per channel, [`BLOCK_SIZE`] in a valid file
	pub block_size: u32,
	/// Reserved, always `0`
	pub reserved: u32,
}

/// The `data` chunk header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataChunk {
	/// Chunk tag, `"data"` in a valid file
	pub tag: [u8; 4],
	/// Length of the chunk, including this 12 byte header and the payload
	pub chunk_length: u64,
}

impl DataChunk {
	/// Length of the audio payload
	///
	/// Returns `None` if the chunk length is too small to even cover its own header.
	pub fn payload_len(&self) -> Option<u64> {
		self.chunk_length.checked_sub(DATA_CHUNK_HEADER_SIZE)
	}
}

/// The three fixed chunks opening a DSF file
///
/// A header is decoded with [`DsfHeader::parse`], checked with [`DsfHeader::validate`], and echoed
/// unchanged with [`DsfHeader::write_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DsfHeader {
	/// The `DSD ` chunk
	pub dsd: DsdChunk,
	/// The `fmt ` chunk
	pub fmt: FmtChunk,
	/// The `data` chunk header
	pub data: DataChunk,
}

impl DsfHeader {
	/// The absolute offset of the metadata region, if the file has one
	pub fn metadata_offset(&self) -> Option<u64> {
		match self.dsd.metadata_offset {
			0 => None,
			offset => Some(offset),
		}
	}

	/// Length of the audio payload, see [`DataChunk::payload_len`]
	pub fn payload_len(&self) -> Option<u64> {
		self.data.payload_len()
	}

	/// The number of complete left/right block pairs in the payload
	pub fn block_pairs(&self) -> u64 {
		self.payload_len().unwrap_or(0) / BLOCK_PAIR_SIZE as u64
	}

	/// The number of payload bytes past the last complete block pair
	pub fn trailing_payload_bytes(&self) -> u64 {
		self.payload_len().unwrap_or(0) % BLOCK_PAIR_SIZE as u64
	}

	/// The absolute offset one past the last payload byte
	pub fn payload_end(&self) -> u64 {
		HEADER_SIZE.saturating_add(self.payload_len().unwrap_or(0))
	}

	/// The audio properties described by the `fmt ` chunk
	pub fn properties(&self) -> DsfProperties {
		DsfProperties::from(&self.fmt)
	}
}
