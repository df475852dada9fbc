//! Contains the errors that can arise within dsfchan
//!
//! The primary error is [`DsfError`]. The type of error is determined by [`ErrorKind`],
//! which can be extended at any time.

use std::fmt::{Debug, Display, Formatter};

/// Alias for `Result<T, DsfError>`
pub type Result<T> = std::result::Result<T, DsfError>;

/// The chunks making up the fixed DSF header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChunkKind {
	/// The outer `"DSD "` chunk
	Dsd,
	/// The `"fmt "` chunk
	Fmt,
	/// The `"data"` chunk header
	Data,
}

impl ChunkKind {
	/// The 4-byte tag that must open the chunk
	///
	/// # Examples
	///
	/// ```rust
	/// use dsfchan::error::ChunkKind;
	///
	/// assert_eq!(ChunkKind::Fmt.tag(), b"fmt ");
	/// ```
	pub const fn tag(self) -> &'static [u8; 4] {
		match self {
			Self::Dsd => b"DSD ",
			Self::Fmt => b"fmt ",
			Self::Data => b"data",
		}
	}
}

impl Display for ChunkKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Dsd => write!(f, "DSD"),
			Self::Fmt => write!(f, "fmt"),
			Self::Data => write!(f, "data"),
		}
	}
}

/// The side of a conversion a file belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
	/// The file being read
	Input,
	/// The file being written
	Output,
}

impl Display for Endpoint {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Input => write!(f, "input"),
			Self::Output => write!(f, "output"),
		}
	}
}

/// The types of errors that can occur
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
	// Conversion setup
	/// Unable to open the input or output file
	OpenFailure(Endpoint, std::io::Error),
	/// An operation keyword that isn't in [`Operation::ALL`](crate::transform::Operation::ALL)
	UnknownOperation(String),

	// Header related errors
	/// Fewer bytes were available than the fixed header size
	TruncatedHeader,
	/// A chunk didn't start with its expected tag, contains the tag that was found instead
	InvalidTag(ChunkKind, [u8; 4]),
	/// A chunk declared an invalid length, contains the declared length
	InvalidChunkLength(ChunkKind, u64),
	/// The fmt chunk describes a profile other than 1-bit/8-bit DSD raw with 4096 byte blocks
	///
	/// Contains the name of the first offending field.
	UnsupportedFormatProfile(&'static str),
	/// Anything other than a plain stereo layout, contains the declared channel count
	UnsupportedChannelLayout(u32),

	// Body related errors
	/// The metadata offset doesn't point at a usable region of the file
	CorruptMetadataPointer {
		/// The absolute offset stored in the DSD chunk
		offset: u64,
		/// The file size stored in the DSD chunk
		file_size: u64,
	},
	/// The payload doesn't end on a block pair boundary, contains the number of leftover bytes
	///
	/// This is only raised with [`ParsingMode::Strict`](crate::config::ParsingMode::Strict).
	IncompletePayload(u64),

	// Conversions for external errors
	/// Represents all cases of [`std::io::Error`].
	Io(std::io::Error),
}

/// Errors that could occur within dsfchan
pub struct DsfError {
	pub(crate) kind: ErrorKind,
}

impl DsfError {
	/// Create a `DsfError` from an [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use dsfchan::error::{DsfError, ErrorKind};
	///
	/// let truncated = DsfError::new(ErrorKind::TruncatedHeader);
	/// ```
	#[must_use]
	pub const fn new(kind: ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use dsfchan::error::{DsfError, ErrorKind};
	///
	/// let truncated = DsfError::new(ErrorKind::TruncatedHeader);
	/// if let ErrorKind::TruncatedHeader = truncated.kind() {
	/// 	println!("Where's the rest of the header?");
	/// }
	/// ```
	pub fn kind(&self) -> &ErrorKind {
		&self.kind
	}
}

impl std::error::Error for DsfError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self.kind {
			ErrorKind::OpenFailure(_, ref err) | ErrorKind::Io(ref err) => Some(err),
			_ => None,
		}
	}
}

impl Debug for DsfError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.kind)
	}
}

impl From<std::io::Error> for DsfError {
	fn from(input: std::io::Error) -> Self {
		Self {
			kind: ErrorKind::Io(input),
		}
	}
}

impl Display for DsfError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.kind {
			// Conversions
			ErrorKind::Io(ref err) => write!(f, "{err}"),

			ErrorKind::OpenFailure(endpoint, ref err) => {
				write!(f, "Error opening {endpoint} file: {err}")
			},
			ErrorKind::UnknownOperation(ref keyword) => {
				write!(f, "Invalid operation '{keyword}'")
			},

			// Header
			ErrorKind::TruncatedHeader => write!(f, "Incomplete DSF header"),
			ErrorKind::InvalidTag(chunk, ref found) => write!(
				f,
				"Invalid header for {chunk} chunk '{}'",
				found.escape_ascii()
			),
			ErrorKind::InvalidChunkLength(chunk, length) => {
				write!(f, "Invalid length for {chunk} chunk {length}")
			},
			ErrorKind::UnsupportedFormatProfile(field) => {
				write!(f, "Invalid DSF file (unsupported {field})")
			},
			ErrorKind::UnsupportedChannelLayout(channels) => {
				write!(f, "Invalid number of channels {channels}")
			},

			// Body
			ErrorKind::CorruptMetadataPointer { offset, file_size } => write!(
				f,
				"Invalid metadata offset {offset} for a file of {file_size} bytes"
			),
			ErrorKind::IncompletePayload(leftover) => write!(
				f,
				"Audio data ends with an incomplete block pair ({leftover} bytes left over)"
			),
		}
	}
}
