//! Fuzz target for reading point cloud input files back.
//!
//! Non-UTF-8 input is skipped; the reader only accepts text.

#![no_main]

use libfuzzer_sys::fuzz_target;
use rivet_io::codec::io_point_cloud::from_point_cloud_str;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    if let Ok(text) = std::str::from_utf8(data) {
        let _ = from_point_cloud_str(text);
    }
});
