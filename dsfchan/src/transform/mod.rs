//! Channel operations on the block-interleaved audio payload
//!
//! DSF stores its audio as a sequence of 4096 byte blocks, alternating between the left and right
//! channel. Every operation here works on one left/right pair at a time and produces a pair of the
//! same size, so the payload is never held in memory as a whole.

mod block;

pub use block::{BlockPair, BlockPairs, transform_blocks};

use crate::error::{DsfError, ErrorKind};

use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A channel operation, applied identically to every block pair of a file
///
/// Inversion is a plain bitwise complement of every byte, regardless of the bits per sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
	/// Emit `(right, left)`
	SwapChannels,
	/// Emit `(left, left)`
	IsolateLeft,
	/// Emit `(right, right)`
	IsolateRight,
	/// Emit `(!left, right)`
	InvertLeft,
	/// Emit `(left, !right)`
	InvertRight,
	/// Emit `(!left, !right)`
	InvertBoth,
}

impl Operation {
	/// Every operation, in display order
	pub const ALL: [Operation; 6] = [
		Self::SwapChannels,
		Self::IsolateLeft,
		Self::IsolateRight,
		Self::InvertLeft,
		Self::InvertRight,
		Self::InvertBoth,
	];

	/// The keyword used to select the operation on the command line
	///
	/// # Examples
	///
	/// ```rust
	/// use dsfchan::transform::Operation;
	///
	/// assert_eq!(Operation::InvertLeft.keyword(), "linvert");
	/// assert_eq!("linvert".parse::<Operation>().unwrap(), Operation::InvertLeft);
	/// ```
	pub const fn keyword(self) -> &'static str {
		match self {
			Self::SwapChannels => "swapch",
			Self::IsolateLeft => "lisolate",
			Self::IsolateRight => "risolate",
			Self::InvertLeft => "linvert",
			Self::InvertRight => "rinvert",
			Self::InvertBoth => "invert",
		}
	}

	/// A one line description of the operation
	pub const fn description(self) -> &'static str {
		match self {
			Self::SwapChannels => "Swaps left and right channel data",
			Self::IsolateLeft => "Isolates left channel; copies data to right channel",
			Self::IsolateRight => "Isolates right channel; copies data to left channel",
			Self::InvertLeft => "Inverts left channel phase",
			Self::InvertRight => "Inverts right channel phase",
			Self::InvertBoth => "Inverts left and right channel phase",
		}
	}

	/// Progress text shown while the operation runs
	pub const fn feedback(self) -> &'static str {
		match self {
			Self::SwapChannels => "Swapping channel order",
			Self::IsolateLeft => "Isolating left channel",
			Self::IsolateRight => "Isolating right channel",
			Self::InvertLeft => "Inverting left channel",
			Self::InvertRight => "Inverting right channel",
			Self::InvertBoth => "Inverting phase",
		}
	}
}

impl Display for Operation {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.keyword())
	}
}

impl FromStr for Operation {
	type Err = DsfError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|op| op.keyword() == s)
			.ok_or_else(|| DsfError::new(ErrorKind::UnknownOperation(s.to_owned())))
	}
}
