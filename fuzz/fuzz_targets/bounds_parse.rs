//! Fuzz target for `--bounds` output parsing.
//!
//! Feeds arbitrary bytes to the bounds parser, checking for panics, crashes,
//! or hangs.

#![no_main]

use libfuzzer_sys::fuzz_target;
use rivet_io::codec::io_bounds::from_bounds_slice;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    let _ = from_bounds_slice(data);
});
