//! Fuzz target for `--barcodes` output parsing.

#![no_main]

use libfuzzer_sys::fuzz_target;
use rivet_io::codec::io_slices::from_slices_slice;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    let _ = from_slices_slice(data);
});
