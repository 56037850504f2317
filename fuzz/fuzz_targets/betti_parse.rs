//! Fuzz target for `--betti` output parsing.
//!
//! Feeds arbitrary bytes to the Betti section parser, checking for panics,
//! crashes, or hangs.

#![no_main]

use libfuzzer_sys::fuzz_target;
use rivet_io::codec::io_betti::from_betti_slice;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    let _ = from_betti_slice(data);
});
