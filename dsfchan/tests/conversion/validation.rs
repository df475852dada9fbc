use crate::util;

use dsfchan::config::ParseOptions;
use dsfchan::error::{ChunkKind, DsfError, Endpoint, ErrorKind};
use dsfchan::header::{DsfHeader, HEADER_SIZE};
use dsfchan::transform::Operation;

use std::fs;

// Write `input` to a temporary file, convert it, and check that the output file was created but
// left empty
fn rejected(input: &[u8]) -> DsfError {
	let dir = tempfile::tempdir().unwrap();
	let input_path = dir.path().join("in.dsf");
	let output_path = dir.path().join("out.dsf");
	fs::write(&input_path, input).unwrap();

	let err = dsfchan::convert_path(
		&input_path,
		&output_path,
		Operation::SwapChannels,
		ParseOptions::new(),
	)
	.unwrap_err();

	let output = fs::metadata(&output_path).unwrap();
	assert_eq!(output.len(), 0, "output was written for a rejected file ({err})");

	err
}

fn rejected_header(modify: impl FnOnce(&mut DsfHeader)) -> DsfError {
	let mut header = util::header(2, 0);
	modify(&mut header);

	let blocks = (0..4).map(util::block).collect::<Vec<_>>();
	rejected(&util::build(&header, &blocks, &[]))
}

#[test_log::test]
fn dsd_tag() {
	let err = rejected_header(|h| h.dsd.tag = *b"RIFF");
	assert!(matches!(
		err.kind(),
		ErrorKind::InvalidTag(ChunkKind::Dsd, tag) if tag == b"RIFF"
	));
}

#[test_log::test]
fn dsd_chunk_length() {
	let err = rejected_header(|h| h.dsd.chunk_length = 30);
	assert!(matches!(
		err.kind(),
		ErrorKind::InvalidChunkLength(ChunkKind::Dsd, 30)
	));
}

#[test_log::test]
fn fmt_tag() {
	let err = rejected_header(|h| h.fmt.tag = *b"FMT ");
	assert!(matches!(
		err.kind(),
		ErrorKind::InvalidTag(ChunkKind::Fmt, _)
	));
}

#[test_log::test]
fn fmt_chunk_length() {
	let err = rejected_header(|h| h.fmt.chunk_length = 48);
	assert!(matches!(
		err.kind(),
		ErrorKind::InvalidChunkLength(ChunkKind::Fmt, 48)
	));
}

#[test_log::test]
fn format_profile() {
	let cases: [(fn(&mut DsfHeader), &str); 6] = [
		(|h| h.fmt.format_version = 2, "format version"),
		(|h| h.fmt.format_id = 1, "format ID"),
		(|h| h.fmt.sample_rate = 44_100, "sample rate"),
		(|h| h.fmt.bits_per_sample = 16, "bits per sample"),
		(|h| h.fmt.block_size = 2048, "block size"),
		(|h| h.fmt.reserved = 1, "reserved field"),
	];

	for (modify, field) in cases {
		let err = rejected_header(modify);
		assert!(
			matches!(err.kind(), ErrorKind::UnsupportedFormatProfile(f) if *f == field),
			"expected a {field} error, got {err}"
		);
	}
}

#[test_log::test]
fn data_tag() {
	let err = rejected_header(|h| h.data.tag = *b"DATA");
	assert!(matches!(
		err.kind(),
		ErrorKind::InvalidTag(ChunkKind::Data, _)
	));
}

#[test_log::test]
fn channel_layout() {
	let err = rejected_header(|h| {
		h.fmt.channel_type = 1;
		h.fmt.channel_count = 1;
	});
	assert!(matches!(err.kind(), ErrorKind::UnsupportedChannelLayout(1)));

	// The channel type has to agree as well
	let err = rejected_header(|h| h.fmt.channel_type = 7);
	assert!(matches!(err.kind(), ErrorKind::UnsupportedChannelLayout(2)));
}

#[test_log::test]
fn first_failure_wins() {
	let err = rejected_header(|h| {
		h.fmt.tag = *b"XXXX";
		h.fmt.channel_count = 6;
		h.data.tag = *b"YYYY";
	});
	assert!(matches!(
		err.kind(),
		ErrorKind::InvalidTag(ChunkKind::Fmt, _)
	));

	let err = rejected_header(|h| {
		h.fmt.bits_per_sample = 4;
		h.data.tag = *b"YYYY";
	});
	assert!(matches!(
		err.kind(),
		ErrorKind::UnsupportedFormatProfile("bits per sample")
	));
}

#[test_log::test]
fn truncated_header() {
	let input = util::file(1, &[]);

	let err = rejected(&input[..HEADER_SIZE as usize - 1]);
	assert!(matches!(err.kind(), ErrorKind::TruncatedHeader));

	let err = rejected(&[]);
	assert!(matches!(err.kind(), ErrorKind::TruncatedHeader));
}

#[test_log::test]
fn missing_input() {
	let dir = tempfile::tempdir().unwrap();
	let output_path = dir.path().join("out.dsf");

	let err = dsfchan::convert_path(
		dir.path().join("missing.dsf"),
		&output_path,
		Operation::InvertBoth,
		ParseOptions::new(),
	)
	.unwrap_err();

	assert!(matches!(
		err.kind(),
		ErrorKind::OpenFailure(Endpoint::Input, _)
	));
	assert!(err.to_string().starts_with("Error opening input file"));

	// The input is opened first, so the output is never created
	assert!(!output_path.exists());
}

#[test_log::test]
fn unwritable_output() {
	let dir = tempfile::tempdir().unwrap();
	let input_path = dir.path().join("in.dsf");
	fs::write(&input_path, util::file(1, &[])).unwrap();

	let err = dsfchan::convert_path(
		&input_path,
		dir.path().join("no_such_dir").join("out.dsf"),
		Operation::InvertBoth,
		ParseOptions::new(),
	)
	.unwrap_err();

	assert!(matches!(
		err.kind(),
		ErrorKind::OpenFailure(Endpoint::Output, _)
	));
}

#[test_log::test]
fn payload_shorter_than_declared() {
	// The header promises 2 pairs, the file only holds 1
	let header = util::header(2, 0);
	let input = util::build(&header, &[util::block(0), util::block(1)], &[]);

	let mut output = Vec::new();
	let err = dsfchan::convert(
		&mut std::io::Cursor::new(&input),
		&mut output,
		Operation::SwapChannels,
		ParseOptions::new(),
	)
	.unwrap_err();

	assert!(matches!(err.kind(), ErrorKind::Io(_)));
}
