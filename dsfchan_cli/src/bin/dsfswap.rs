#![allow(missing_docs)]

use dsfchan::transform::Operation;

use structopt::StructOpt;

use std::path::PathBuf;

#[derive(Debug, StructOpt)]
#[structopt(name = "dsfswap", about = "Swaps the left and right channels of a DSF file")]
struct Opt {
	#[structopt(parse(from_os_str))]
	input: PathBuf,

	#[structopt(parse(from_os_str))]
	output: PathBuf,
}

fn main() {
	env_logger::init();

	let opt: Opt = dsfchan_cli::parse_args(|| {
		println!(
			"Usage: {} input.dsf output.dsf",
			dsfchan_cli::program_name("dsfswap")
		);
	});

	dsfchan_cli::run(Operation::SwapChannels, &opt.input, &opt.output);
}
