#![no_main]
use libfuzzer_sys::fuzz_target;
use tcset_core::{InputPolicy, parse_lenient, parse_number};

fuzz_target!(|data: &str| {
    let v = parse_lenient(data);
    assert!(v.is_finite());
    if let Ok(s) = parse_number("fuzz", data, InputPolicy::Strict) {
        assert!(s.is_finite());
        // Anything the strict reader accepts reads the same leniently
        assert_eq!(s, parse_lenient(data.trim()));
    }
});
