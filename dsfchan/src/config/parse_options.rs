/// The parsing strictness mode
///
/// This can be set with [`ParseOptions::parsing_mode`].
///
/// # Examples
///
/// ```rust,no_run
/// use dsfchan::config::{ParseOptions, ParsingMode};
/// use dsfchan::transform::Operation;
///
/// # fn main() -> dsfchan::error::Result<()> {
/// // Refuse anything with a ragged payload or a stray metadata pointer
/// let parse_options = ParseOptions::new().parsing_mode(ParsingMode::Strict);
/// dsfchan::convert_path("in.dsf", "out.dsf", Operation::SwapChannels, parse_options)?;
/// # Ok(()) }
/// ```
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Default)]
#[non_exhaustive]
pub enum ParsingMode {
	/// Will eagerly error on invalid input
	///
	/// ## Examples of behavior
	///
	/// * Audio data that doesn't end on a block pair boundary - The conversion fails before any audio is written
	/// * A metadata offset pointing into the header or audio data - The conversion fails
	Strict,
	/// Default mode, less eager to error on recoverably malformed input
	///
	/// ## Examples of behavior
	///
	/// * Audio data that doesn't end on a block pair boundary - The leftover bytes are dropped and a warning is logged
	/// * A metadata offset pointing into the audio data - The region is copied as-is and a warning is logged
	#[default]
	BestAttempt,
	/// Least eager to error, may produce invalid/partial output
	///
	/// Same as [`ParsingMode::BestAttempt`], without any warnings.
	Relaxed,
}

/// Options to control how dsfchan reads a file
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct ParseOptions {
	pub(crate) parsing_mode: ParsingMode,
}

impl Default for ParseOptions {
	/// The default implementation for `ParseOptions`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// ParseOptions {
	/// 	parsing_mode: ParsingMode::BestAttempt,
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}

impl ParseOptions {
	/// Default parsing mode
	pub const DEFAULT_PARSING_MODE: ParsingMode = ParsingMode::BestAttempt;

	/// Creates a new `ParseOptions`, alias for `Default` implementation
	///
	/// See also: [`ParseOptions::default`]
	///
	/// # Examples
	///
	/// ```rust
	/// use dsfchan::config::ParseOptions;
	///
	/// let parse_options = ParseOptions::new();
	/// ```
	#[must_use]
	pub const fn new() -> Self {
		Self {
			parsing_mode: Self::DEFAULT_PARSING_MODE,
		}
	}

	/// The parsing mode to use, see [`ParsingMode`] for details
	///
	/// # Examples
	///
	/// ```rust
	/// use dsfchan::config::{ParseOptions, ParsingMode};
	///
	/// // By default, `parsing_mode` is ParsingMode::BestAttempt. Here, we need absolute correctness.
	/// let parse_options = ParseOptions::new().parsing_mode(ParsingMode::Strict);
	/// ```
	pub fn parsing_mode(&mut self, parsing_mode: ParsingMode) -> Self {
		self.parsing_mode = parsing_mode;
		*self
	}
}
