//! Various configuration options to control dsfchan

mod parse_options;

pub use parse_options::{ParseOptions, ParsingMode};
