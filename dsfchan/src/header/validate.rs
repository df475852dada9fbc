use super::{
	BASE_SAMPLE_RATE, BLOCK_SIZE, DATA_CHUNK_HEADER_SIZE, DSD_CHUNK_SIZE, DsfHeader,
	FMT_CHUNK_SIZE, FmtChunk,
};
use crate::error::{ChunkKind, Result};
use crate::macros::err;

impl DsfHeader {
	/// Verify the header describes a supported file
	///
	/// Supported files are stereo, DSD raw, 1 or 8 bits per sample, with 4096 byte blocks.
	///
	/// The checks are performed in a fixed order and the first failure is reported:
	///
	/// 1. `DSD ` tag
	/// 2. `DSD ` chunk length
	/// 3. `fmt ` tag
	/// 4. `fmt ` chunk length
	/// 5. Format profile (version, format ID, sample rate, bits per sample, block size, reserved)
	/// 6. `data` tag
	/// 7. Channel layout
	/// 8. `data` chunk length covers at least its own header
	///
	/// # Errors
	///
	/// * [`ErrorKind::InvalidTag`](crate::error::ErrorKind::InvalidTag)
	/// * [`ErrorKind::InvalidChunkLength`](crate::error::ErrorKind::InvalidChunkLength)
	/// * [`ErrorKind::UnsupportedFormatProfile`](crate::error::ErrorKind::UnsupportedFormatProfile)
	/// * [`ErrorKind::UnsupportedChannelLayout`](crate::error::ErrorKind::UnsupportedChannelLayout)
	pub fn validate(&self) -> Result<()> {
		verify_tag(ChunkKind::Dsd, self.dsd.tag)?;
		if self.dsd.chunk_length != DSD_CHUNK_SIZE {
			err!(InvalidChunkLength(ChunkKind::Dsd, self.dsd.chunk_length));
		}

		verify_tag(ChunkKind::Fmt, self.fmt.tag)?;
		if self.fmt.chunk_length != FMT_CHUNK_SIZE {
			err!(InvalidChunkLength(ChunkKind::Fmt, self.fmt.chunk_length));
		}

		if let Some(field) = format_profile_violation(&self.fmt) {
			err!(UnsupportedFormatProfile(field));
		}

		verify_tag(ChunkKind::Data, self.data.tag)?;

		if self.fmt.channel_type != 2 || self.fmt.channel_count != 2 {
			err!(UnsupportedChannelLayout(self.fmt.channel_count));
		}

		if self.data.chunk_length < DATA_CHUNK_HEADER_SIZE {
			err!(InvalidChunkLength(ChunkKind::Data, self.data.chunk_length));
		}

		log::debug!(
			"Header verified: {} Hz, {} bit, {} block pairs",
			self.fmt.sample_rate,
			self.fmt.bits_per_sample,
			self.block_pairs()
		);

		Ok(())
	}
}

fn verify_tag(chunk: ChunkKind, found: [u8; 4]) -> Result<()> {
	if &found != chunk.tag() {
		err!(InvalidTag(chunk, found));
	}

	Ok(())
}

// All of these are reported as a single profile error, naming the first field that failed
fn format_profile_violation(fmt: &FmtChunk) -> Option<&'static str> {
	if fmt.format_version != 1 {
		return Some("format version");
	}

	if fmt.format_id != 0 {
		return Some("format ID");
	}

	if fmt.sample_rate % BASE_SAMPLE_RATE != 0 {
		return Some("sample rate");
	}

	if fmt.bits_per_sample != 1 && fmt.bits_per_sample != 8 {
		return Some("bits per sample");
	}

	if fmt.block_size as usize != BLOCK_SIZE {
		return Some("block size");
	}

	if fmt.reserved != 0 {
		return Some("reserved field");
	}

	None
}
