#![no_main]

use std::io::{Cursor, sink};

use dsfchan::config::ParseOptions;
use dsfchan::transform::Operation;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: Vec<u8>| {
	let Some(selector) = data.first() else {
		return;
	};
	let operation = Operation::ALL[usize::from(*selector) % Operation::ALL.len()];

	let _ = dsfchan::convert(
		&mut Cursor::new(&data[1..]),
		&mut sink(),
		operation,
		ParseOptions::new(),
	);
});
