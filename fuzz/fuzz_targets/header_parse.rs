#![no_main]

use libfuzzer_sys::fuzz_target;
use dsfchan::header::DsfHeader;

fuzz_target!(|data: &[u8]| {
	if let Ok(header) = DsfHeader::parse(&mut &data[..]) {
		let _ = header.validate();
		let _ = header.properties().bitrate();
	}
});
