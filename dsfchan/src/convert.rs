//! The full conversion: validate, transform, and rewrite a DSF file

use crate::config::ParseOptions;
use crate::error::{DsfError, Endpoint, ErrorKind, Result};
use crate::header::DsfHeader;
use crate::macros::{err, parse_mode_choice};
use crate::metadata::locate_metadata;
use crate::transform::{Operation, transform_blocks};

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Seek, Write};
use std::path::Path;

/// What a successful conversion did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionSummary {
	pub(crate) operation: Operation,
	pub(crate) header: DsfHeader,
	pub(crate) block_pairs: u64,
	pub(crate) ignored_bytes: u64,
	pub(crate) metadata_len: u64,
}

impl ConversionSummary {
	/// The operation applied to every block pair
	pub fn operation(&self) -> Operation {
		self.operation
	}

	/// The header, as read from the input and written to the output
	pub fn header(&self) -> &DsfHeader {
		&self.header
	}

	/// The number of block pairs written
	pub fn block_pairs(&self) -> u64 {
		self.block_pairs
	}

	/// Payload bytes past the last complete block pair, which were not written
	pub fn ignored_bytes(&self) -> u64 {
		self.ignored_bytes
	}

	/// Length of the metadata region copied to the output, `0` if there was none
	pub fn metadata_len(&self) -> u64 {
		self.metadata_len
	}
}

/// Apply `operation` to a DSF file read from `reader`, writing the result to `writer`
///
/// The reader is rewound before the header is read. The output consists of:
///
/// 1. The header, unchanged
/// 2. Every complete block pair of the payload, transformed
/// 3. The metadata region, unchanged, if the input has one
///
/// Nothing is written until the header has been validated and the metadata region located. If an
/// error occurs after that, the output is left incomplete.
///
/// Neither the payload nor the metadata region is ever held in memory as a whole.
///
/// # Errors
///
/// * Any error from [`DsfHeader::parse`], [`DsfHeader::validate`], or [`locate_metadata`]
/// * [`ErrorKind::IncompletePayload`](crate::error::ErrorKind::IncompletePayload) with
///   [`ParsingMode::Strict`](crate::config::ParsingMode::Strict), if the payload doesn't end on
///   a block pair boundary
/// * [`std::io::Error`], including the input ending before the declared payload does
///
/// # Examples
///
/// ```rust,no_run
/// use dsfchan::config::ParseOptions;
/// use dsfchan::transform::Operation;
///
/// use std::fs::File;
///
/// # fn main() -> dsfchan::error::Result<()> {
/// let mut input = File::open("in.dsf")?;
/// let mut output = Vec::new();
///
/// let summary = dsfchan::convert(
/// 	&mut input,
/// 	&mut output,
/// 	Operation::InvertBoth,
/// 	ParseOptions::new(),
/// )?;
/// println!("Inverted {} block pairs", summary.block_pairs());
/// # Ok(()) }
/// ```
pub fn convert<R, W>(
	reader: &mut R,
	writer: &mut W,
	operation: Operation,
	parse_options: ParseOptions,
) -> Result<ConversionSummary>
where
	R: Read + Seek,
	W: Write,
{
	convert_with(reader, writer, operation, parse_options, |_| {})
}

/// Same as [`convert`], calling `on_validated` once the input has been accepted
///
/// `on_validated` runs after every check on the header and metadata pointer has passed, and before
/// anything is written. It is not called for rejected inputs.
///
/// # Errors
///
/// See [`convert`]
///
/// # Examples
///
/// ```rust,no_run
/// use dsfchan::config::ParseOptions;
/// use dsfchan::transform::Operation;
///
/// use std::fs::File;
///
/// # fn main() -> dsfchan::error::Result<()> {
/// let mut input = File::open("in.dsf")?;
/// let mut output = File::create("out.dsf")?;
///
/// dsfchan::convert_with(
/// 	&mut input,
/// 	&mut output,
/// 	Operation::SwapChannels,
/// 	ParseOptions::new(),
/// 	|header| println!("Swapping {} block pairs", header.block_pairs()),
/// )?;
/// # Ok(()) }
/// ```
pub fn convert_with<R, W, F>(
	reader: &mut R,
	writer: &mut W,
	operation: Operation,
	parse_options: ParseOptions,
	on_validated: F,
) -> Result<ConversionSummary>
where
	R: Read + Seek,
	W: Write,
	F: FnOnce(&DsfHeader),
{
	reader.rewind()?;

	let header = DsfHeader::parse(reader)?;
	header.validate()?;

	let block_pairs = header.block_pairs();
	let ignored_bytes = header.trailing_payload_bytes();
	if ignored_bytes != 0 {
		let parse_mode = parse_options.parsing_mode;
		parse_mode_choice!(
			parse_mode,
			STRICT: err!(IncompletePayload(ignored_bytes)),
			BESTATTEMPT: log::warn!(
				"Audio data ends with an incomplete block pair, dropping {ignored_bytes} bytes"
			),
		);
	}

	let metadata = locate_metadata(reader, &header, parse_options)?;

	on_validated(&header);

	log::debug!("Applying `{operation}` to {block_pairs} block pairs");

	header.write_to(writer)?;
	transform_blocks(reader, writer, operation, block_pairs)?;

	let mut metadata_len = 0;
	if let Some(metadata) = metadata {
		metadata.copy_to(reader, writer)?;
		metadata_len = metadata.len();
	}

	writer.flush()?;

	Ok(ConversionSummary {
		operation,
		header,
		block_pairs,
		ignored_bytes,
		metadata_len,
	})
}

/// Apply `operation` to the DSF file at `input`, writing the result to `output`
///
/// The input is opened first, then the output is created (or truncated). Both files are closed
/// before returning, whether or not the conversion succeeded. See [`convert`].
///
/// # Errors
///
/// * [`ErrorKind::OpenFailure`](crate::error::ErrorKind::OpenFailure) if either file can't be
///   opened
/// * Any error from [`convert`]
pub fn convert_path<P, Q>(
	input: P,
	output: Q,
	operation: Operation,
	parse_options: ParseOptions,
) -> Result<ConversionSummary>
where
	P: AsRef<Path>,
	Q: AsRef<Path>,
{
	convert_path_with(input, output, operation, parse_options, |_| {})
}

/// Same as [`convert_path`], see [`convert_with`] for `on_validated`
///
/// # Errors
///
/// See [`convert_path`]
pub fn convert_path_with<P, Q, F>(
	input: P,
	output: Q,
	operation: Operation,
	parse_options: ParseOptions,
	on_validated: F,
) -> Result<ConversionSummary>
where
	P: AsRef<Path>,
	Q: AsRef<Path>,
	F: FnOnce(&DsfHeader),
{
	let input = File::open(input)
		.map_err(|e| DsfError::new(ErrorKind::OpenFailure(Endpoint::Input, e)))?;
	let output = File::create(output)
		.map_err(|e| DsfError::new(ErrorKind::OpenFailure(Endpoint::Output, e)))?;

	let mut reader = BufReader::new(input);
	let mut writer = BufWriter::new(output);

	convert_with(&mut reader, &mut writer, operation, parse_options, on_validated)
}
