//! Fuzz target for grade value parsing (`a/b`, integers, decimals).

#![no_main]

use libfuzzer_sys::fuzz_target;
use rivet_io::codec::fuzz_parse_rational;

fuzz_target!(|data: &[u8]| {
    if data.len() > 4096 {
        return;
    }

    if let Ok(text) = std::str::from_utf8(data) {
        let _ = fuzz_parse_rational(text);
    }
});
