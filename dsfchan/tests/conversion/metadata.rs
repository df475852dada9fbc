use crate::util;

use dsfchan::config::{ParseOptions, ParsingMode};
use dsfchan::error::ErrorKind;
use dsfchan::header::HEADER_SIZE;
use dsfchan::transform::Operation;

use std::io::Cursor;

const TAG: &[u8] = b"ID3\x04\x00\x00\x00\x00\x00\x0ATIT2\x00\x00\x00\x02\x00\x00\x03X";

#[test_log::test]
fn preserved_for_every_operation() {
	let input = util::file(3, TAG);

	for op in Operation::ALL {
		let output = util::convert(&input, op);
		assert_eq!(&output[output.len() - TAG.len()..], TAG, "{op}");
	}
}

#[test_log::test]
fn gap_before_metadata_is_dropped() {
	// Junk between the payload and the metadata region isn't part of either
	let mut header = util::header(1, TAG.len() as u64);
	header.dsd.metadata_offset += 5;
	header.dsd.file_size += 5;

	let mut input = util::build(&header, &[util::block(0), util::block(1)], b"junk!");
	input.extend_from_slice(TAG);

	let output = util::convert(&input, Operation::SwapChannels);

	let payload_end = header.payload_end() as usize;
	assert_eq!(output.len(), payload_end + TAG.len());
	assert_eq!(&output[payload_end..], TAG);
}

#[test_log::test]
fn summary_reports_metadata() {
	let input = util::file(1, TAG);

	let mut output = Vec::new();
	let summary = dsfchan::convert(
		&mut Cursor::new(&input),
		&mut output,
		Operation::InvertBoth,
		ParseOptions::new(),
	)
	.unwrap();

	assert_eq!(summary.metadata_len(), TAG.len() as u64);
	assert_eq!(summary.block_pairs(), 1);
	assert_eq!(summary.operation(), Operation::InvertBoth);
	assert_eq!(summary.header().dsd.metadata_offset, summary.header().payload_end());
}

#[test_log::test]
fn corrupt_pointer_writes_nothing() {
	let mut header = util::header(1, TAG.len() as u64);
	header.dsd.metadata_offset = header.dsd.file_size;

	let input = util::build(&header, &[util::block(0), util::block(1)], TAG);

	let mut output = Vec::new();
	let err = dsfchan::convert(
		&mut Cursor::new(&input),
		&mut output,
		Operation::SwapChannels,
		ParseOptions::new(),
	)
	.unwrap_err();

	assert!(matches!(
		err.kind(),
		ErrorKind::CorruptMetadataPointer { .. }
	));
	assert!(output.is_empty());
}

#[test_log::test]
fn pointer_into_header_strict() {
	let mut header = util::header(1, TAG.len() as u64);
	header.dsd.metadata_offset = HEADER_SIZE - 4;

	let input = util::build(&header, &[util::block(0), util::block(1)], TAG);

	let mut output = Vec::new();
	let err = dsfchan::convert(
		&mut Cursor::new(&input),
		&mut output,
		Operation::SwapChannels,
		ParseOptions::new().parsing_mode(ParsingMode::Strict),
	)
	.unwrap_err();

	assert!(matches!(
		err.kind(),
		ErrorKind::CorruptMetadataPointer { .. }
	));
	assert!(output.is_empty());

	// Relaxed mode copies whatever the pointer covers
	let mut output = Vec::new();
	let summary = dsfchan::convert(
		&mut Cursor::new(&input),
		&mut output,
		Operation::SwapChannels,
		ParseOptions::new().parsing_mode(ParsingMode::Relaxed),
	)
	.unwrap();

	assert_eq!(summary.metadata_len(), header.dsd.file_size - (HEADER_SIZE - 4));
	assert_eq!(&output[output.len() - TAG.len()..], TAG);
}

#[test_log::test]
fn large_metadata() {
	// Well past any sensible in-memory buffer, e.g. a tag with high resolution cover art
	let tag = vec![0x42; 17 * 1024 * 1024];
	let input = util::file(1, &tag);

	let output = util::convert(&input, Operation::SwapChannels);
	assert_eq!(output.len(), input.len());
	assert!(output.ends_with(&tag));
}
