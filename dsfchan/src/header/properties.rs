use super::FmtChunk;
use crate::util::math::RoundedDivision;

use std::time::Duration;

/// Audio properties read from the `fmt ` chunk
///
/// These are informational only, the sample count is never checked against the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DsfProperties {
	pub(crate) sample_rate: u32,
	pub(crate) channels: u32,
	pub(crate) bits_per_sample: u32,
	pub(crate) sample_count: u64,
}

impl DsfProperties {
	/// Sample rate (Hz), 2822400 for DSD64, 5644800 for DSD128, etc.
	pub fn sample_rate(&self) -> u32 {
		self.sample_rate
	}

	/// Number of channels
	pub fn channels(&self) -> u32 {
		self.channels
	}

	/// Bits per sample
	pub fn bits_per_sample(&self) -> u32 {
		self.bits_per_sample
	}

	/// Total samples per channel
	pub fn sample_count(&self) -> u64 {
		self.sample_count
	}

	/// Duration
	pub fn duration(&self) -> Duration {
		if self.sample_rate == 0 {
			return Duration::ZERO;
		}

		let rate = u64::from(self.sample_rate);
		let secs = self.sample_count / rate;
		let nanos = (self.sample_count % rate) * 1_000_000_000 / rate;

		Duration::new(secs, nanos as u32)
	}

	/// Audio bitrate (kbps)
	pub fn bitrate(&self) -> u32 {
		let bits_per_second = u128::from(self.sample_rate)
			* u128::from(self.bits_per_sample)
			* u128::from(self.channels);

		u32::try_from(bits_per_second.div_round(1000)).unwrap_or(u32::MAX)
	}
}

impl From<&FmtChunk> for DsfProperties {
	fn from(fmt: &FmtChunk) -> Self {
		Self {
			sample_rate: fmt.sample_rate,
			channels: fmt.channel_count,
			bits_per_sample: fmt.bits_per_sample,
			sample_count: fmt.sample_count,
		}
	}
}
