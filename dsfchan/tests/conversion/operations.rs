use crate::util;

use dsfchan::header::{BLOCK_SIZE, HEADER_SIZE};
use dsfchan::transform::Operation;

// L blocks all 0x00, R blocks all 0xFF, two pairs
fn silence_and_ones() -> Vec<u8> {
	let header = util::header(2, 0);
	util::build(
		&header,
		&[[0x00; BLOCK_SIZE], [0xFF; BLOCK_SIZE], [0x00; BLOCK_SIZE], [0xFF; BLOCK_SIZE]],
		&[],
	)
}

fn blocks_of(bytes: &[u8]) -> Vec<u8> {
	util::payload(bytes, 2)
		.chunks(BLOCK_SIZE)
		.map(|block| {
			assert!(block.iter().all(|b| *b == block[0]), "block isn't uniform");
			block[0]
		})
		.collect()
}

#[test_log::test]
fn swapch_scenario() {
	let output = util::convert(&silence_and_ones(), Operation::SwapChannels);
	assert_eq!(blocks_of(&output), [0xFF, 0x00, 0xFF, 0x00]);
}

#[test_log::test]
fn linvert_scenario() {
	let output = util::convert(&silence_and_ones(), Operation::InvertLeft);
	assert_eq!(blocks_of(&output), [0xFF, 0xFF, 0xFF, 0xFF]);
}

#[test_log::test]
fn every_operation_scenario() {
	let expected = [
		(Operation::SwapChannels, [0xFF, 0x00, 0xFF, 0x00]),
		(Operation::IsolateLeft, [0x00, 0x00, 0x00, 0x00]),
		(Operation::IsolateRight, [0xFF, 0xFF, 0xFF, 0xFF]),
		(Operation::InvertLeft, [0xFF, 0xFF, 0xFF, 0xFF]),
		(Operation::InvertRight, [0x00, 0x00, 0x00, 0x00]),
		(Operation::InvertBoth, [0xFF, 0x00, 0xFF, 0x00]),
	];

	let input = silence_and_ones();
	for (op, blocks) in expected {
		assert_eq!(blocks_of(&util::convert(&input, op)), blocks, "{op}");
	}
}

#[test_log::test]
fn pairs_keep_stream_order() {
	let input = util::file(3, &[]);
	let output = util::convert(&input, Operation::IsolateRight);

	let blocks = util::payload(&output, 3).chunks(BLOCK_SIZE).collect::<Vec<_>>();
	assert_eq!(blocks.len(), 6);
	for (pair, chunk) in blocks.chunks(2).enumerate() {
		let right = util::block(pair as u8 * 2 + 1);
		assert_eq!(chunk[0], &right[..]);
		assert_eq!(chunk[1], &right[..]);
	}
}

#[test_log::test]
fn swap_twice_is_identity() {
	let input = util::file(4, b"ID3 metadata");
	let once = util::convert(&input, Operation::SwapChannels);
	assert_ne!(once, input);

	let twice = util::convert(&once, Operation::SwapChannels);
	assert_eq!(twice, input);
}

#[test_log::test]
fn invert_twice_is_identity() {
	let input = util::file(4, b"ID3 metadata");
	let once = util::convert(&input, Operation::InvertBoth);
	assert_ne!(once, input);

	let twice = util::convert(&once, Operation::InvertBoth);
	assert_eq!(twice, input);
}

#[test_log::test]
fn isolate_is_idempotent() {
	for op in [Operation::IsolateLeft, Operation::IsolateRight] {
		let input = util::file(3, &[]);
		let once = util::convert(&input, op);
		let twice = util::convert(&once, op);
		assert_eq!(once, twice, "{op}");
	}
}

#[test_log::test]
fn header_is_preserved() {
	let input = util::file(2, b"tag");

	for op in Operation::ALL {
		let output = util::convert(&input, op);
		assert_eq!(output.len(), input.len(), "{op}");
		assert_eq!(
			output[..HEADER_SIZE as usize],
			input[..HEADER_SIZE as usize],
			"{op}"
		);
	}
}

#[test_log::test]
fn empty_payload() {
	let input = util::file(0, &[]);

	for op in Operation::ALL {
		assert_eq!(util::convert(&input, op), input, "{op}");
	}
}

#[test_log::test]
fn eight_bit_files() {
	let mut header = util::header(1, 0);
	header.fmt.bits_per_sample = 8;
	header.fmt.sample_rate *= 2;

	let input = util::build(&header, &[util::block(1), util::block(2)], &[]);
	let output = util::convert(&input, Operation::InvertRight);

	let right = util::block(2).map(|b| !b);
	assert_eq!(&output[HEADER_SIZE as usize + BLOCK_SIZE..], &right[..]);
}
