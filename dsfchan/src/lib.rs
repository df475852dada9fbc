//! Validation and channel operations for DSF (DSD Stream File) containers
//!
//! DSF stores stereo DSD audio as a fixed 92 byte header, a payload of interleaved 4096 byte
//! channel blocks, and an optional trailing metadata region. This crate checks the header against
//! the supported profile (stereo, DSD raw, 1 or 8 bits per sample) and rewrites the payload with
//! one of six channel [`Operation`]s, leaving the header and metadata untouched.
//!
//! # Examples
//!
//! ## Converting a file
//!
//! ```rust,no_run
//! use dsfchan::config::ParseOptions;
//! use dsfchan::transform::Operation;
//!
//! # fn main() -> dsfchan::error::Result<()> {
//! let summary = dsfchan::convert_path(
//! 	"in.dsf",
//! 	"out.dsf",
//! 	Operation::SwapChannels,
//! 	ParseOptions::new(),
//! )?;
//!
//! println!("Swapped {} block pairs", summary.block_pairs());
//! # Ok(()) }
//! ```
//!
//! ## Inspecting a header
//!
//! ```rust,no_run
//! use dsfchan::header::DsfHeader;
//!
//! use std::fs::File;
//!
//! # fn main() -> dsfchan::error::Result<()> {
//! let mut file = File::open("in.dsf")?;
//!
//! let header = DsfHeader::parse(&mut file)?;
//! header.validate()?;
//!
//! let properties = header.properties();
//! println!("{} Hz, {:?}", properties.sample_rate(), properties.duration());
//! # Ok(()) }
//! ```

pub mod config;
pub mod convert;
pub mod error;
pub mod header;
pub(crate) mod macros;
pub mod metadata;
pub mod transform;
mod util;

pub use crate::convert::{
	ConversionSummary, convert, convert_path, convert_path_with, convert_with,
};
pub use crate::header::DsfHeader;
pub use crate::transform::Operation;
