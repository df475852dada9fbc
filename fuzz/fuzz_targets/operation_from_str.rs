#![no_main]

use libfuzzer_sys::fuzz_target;
use dsfchan::transform::Operation;

fuzz_target!(|data: &str| {
	if let Ok(operation) = data.parse::<Operation>() {
		assert_eq!(operation.keyword(), data);
	}
});
