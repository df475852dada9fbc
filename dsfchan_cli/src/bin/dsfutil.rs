#![allow(missing_docs)]

use dsfchan::transform::Operation;

use structopt::StructOpt;

use std::path::PathBuf;

#[derive(Debug, StructOpt)]
#[structopt(name = "dsfutil", about = "Channel operations on DSF files")]
struct Opt {
	operation: String,

	#[structopt(parse(from_os_str))]
	input: PathBuf,

	#[structopt(parse(from_os_str))]
	output: PathBuf,
}

fn usage() {
	println!(
		"Usage: {} operation input.dsf output.dsf\n\nValid operations:",
		dsfchan_cli::program_name("dsfutil")
	);
	for op in Operation::ALL {
		println!("\t- {}:\t{}", op.keyword(), op.description());
	}
}

fn main() {
	env_logger::init();

	let opt: Opt = dsfchan_cli::parse_args(usage);

	let operation = match opt.operation.parse::<Operation>() {
		Ok(operation) => operation,
		Err(e) => dsfchan_cli::fail(&e),
	};

	dsfchan_cli::run(operation, &opt.input, &opt.output);
}
