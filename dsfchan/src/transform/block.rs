use super::Operation;
use crate::error::Result;
use crate::header::{BLOCK_PAIR_SIZE, BLOCK_SIZE};

use std::io::{Read, Write};

/// One left block followed by one right block
///
/// Operations are applied in place, after which [`BlockPair::as_bytes`] holds the output pair.
pub struct BlockPair {
	data: Box<[u8; BLOCK_PAIR_SIZE]>,
}

impl BlockPair {
	/// Create a zeroed block pair
	pub fn new() -> Self {
		Self {
			data: Box::new([0; BLOCK_PAIR_SIZE]),
		}
	}

	/// The left channel block
	pub fn left(&self) -> &[u8] {
		&self.data[..BLOCK_SIZE]
	}

	/// The right channel block
	pub fn right(&self) -> &[u8] {
		&self.data[BLOCK_SIZE..]
	}

	/// Both blocks, left first
	pub fn as_bytes(&self) -> &[u8] {
		&self.data[..]
	}

	/// Both blocks, left first
	pub fn as_bytes_mut(&mut self) -> &mut [u8] {
		&mut self.data[..]
	}

	/// Apply `operation` in place
	///
	/// # Examples
	///
	/// ```rust
	/// use dsfchan::transform::{BlockPair, Operation};
	///
	/// let mut pair = BlockPair::new();
	/// pair.as_bytes_mut()[0] = 0x0F;
	///
	/// pair.apply(Operation::SwapChannels);
	/// assert_eq!(pair.left()[0], 0);
	/// assert_eq!(pair.right()[0], 0x0F);
	/// ```
	pub fn apply(&mut self, operation: Operation) {
		let (left, right) = self.data.split_at_mut(BLOCK_SIZE);

		match operation {
			Operation::SwapChannels => left.swap_with_slice(right),
			Operation::IsolateLeft => right.copy_from_slice(left),
			Operation::IsolateRight => left.copy_from_slice(right),
			Operation::InvertLeft => invert(left),
			Operation::InvertRight => invert(right),
			Operation::InvertBoth => {
				invert(left);
				invert(right);
			},
		}
	}
}

impl Default for BlockPair {
	fn default() -> Self {
		Self::new()
	}
}

fn invert(block: &mut [u8]) {
	for byte in block {
		*byte = !*byte;
	}
}

/// Reads a fixed number of block pairs, one at a time, into a single reused buffer
pub struct BlockPairs<R> {
	reader: R,
	remaining: u64,
	pair: BlockPair,
}

impl<R> BlockPairs<R>
where
	R: Read,
{
	/// Read `count` block pairs from `reader`
	pub fn new(reader: R, count: u64) -> Self {
		Self {
			reader,
			remaining: count,
			pair: BlockPair::new(),
		}
	}

	/// The number of block pairs not yet read
	pub fn remaining(&self) -> u64 {
		self.remaining
	}

	/// Read the next block pair
	///
	/// Returns `None` once `count` pairs have been read. The returned pair is overwritten by
	/// the next call.
	///
	/// # Errors
	///
	/// * [`std::io::Error`], including the reader ending before `count` pairs
	pub fn next_pair(&mut self) -> Result<Option<&mut BlockPair>> {
		if self.remaining == 0 {
			return Ok(None);
		}

		self.reader.read_exact(self.pair.as_bytes_mut())?;
		self.remaining -= 1;

		Ok(Some(&mut self.pair))
	}

	/// Take back the reader
	pub fn into_inner(self) -> R {
		self.reader
	}
}

/// Stream `count` block pairs from `reader` to `writer`, applying `operation` to each
///
/// Pairs are written strictly in the order they are read. Only a single pair is held in memory
/// at any time. Returns the number of pairs written.
///
/// # Errors
///
/// * [`std::io::Error`], including the reader ending before `count` pairs
pub fn transform_blocks<R, W>(
	reader: &mut R,
	writer: &mut W,
	operation: Operation,
	count: u64,
) -> Result<u64>
where
	R: Read,
	W: Write,
{
	let mut pairs = BlockPairs::new(reader, count);
	let mut written = 0;

	while let Some(pair) = pairs.next_pair()? {
		pair.apply(operation);
		writer.write_all(pair.as_bytes())?;

		written += 1;
		log::trace!("Wrote block pair {written}/{count}");
	}

	Ok(written)
}
