//! Shared plumbing for the `dsfswap` and `dsfutil` tools
//!
//! Both tools run a single conversion and exit. A malformed command line is answered with usage
//! text and a successful exit; any conversion failure is reported on stderr with exit status `1`.

use dsfchan::config::ParseOptions;
use dsfchan::error::{DsfError, ErrorKind};
use dsfchan::transform::Operation;

use std::path::Path;
use std::process;

use structopt::StructOpt;
use structopt::clap::ErrorKind as ClapErrorKind;

/// The name the program was invoked as, falling back to `default`
pub fn program_name(default: &str) -> String {
	std::env::args().next().unwrap_or_else(|| default.to_owned())
}

/// Parse the command line
///
/// `--help` and `--version` are handled as usual. Any other parse failure, such as a wrong number
/// of arguments, calls `usage` and exits with status `0`.
pub fn parse_args<T, F>(usage: F) -> T
where
	T: StructOpt,
	F: FnOnce(),
{
	match T::from_args_safe() {
		Ok(args) => args,
		Err(e) if matches!(e.kind, ClapErrorKind::HelpDisplayed | ClapErrorKind::VersionDisplayed) => {
			e.exit()
		},
		Err(e) => {
			log::debug!("Invalid command line: {}", e.message);
			usage();
			process::exit(0);
		},
	}
}

/// Print an error and exit with status `1`
///
/// Failures to open a file are printed as-is, everything else is prefixed with `Error: `.
pub fn fail(error: &DsfError) -> ! {
	if matches!(error.kind(), ErrorKind::OpenFailure(..)) {
		eprintln!("{error}");
	} else {
		eprintln!("Error: {error}.");
	}

	process::exit(1);
}

/// Apply `operation` to `input`, writing to `output`, then exit
///
/// Prints the operation's feedback line once the input has been accepted, and `Done!` once
/// finished.
pub fn run(operation: Operation, input: &Path, output: &Path) -> ! {
	let result = dsfchan::convert_path_with(input, output, operation, ParseOptions::new(), |_| {
		println!(
			"{} in {} - saving to {}...",
			operation.feedback(),
			input.display(),
			output.display()
		);
	});

	match result {
		Ok(summary) => {
			log::info!(
				"Wrote {} block pairs and {} bytes of metadata",
				summary.block_pairs(),
				summary.metadata_len()
			);
			if summary.ignored_bytes() > 0 {
				log::warn!(
					"{} bytes at the end of the audio data were not written",
					summary.ignored_bytes()
				);
			}

			println!("Done!");
			process::exit(0);
		},
		Err(e) => fail(&e),
	}
}
