#![no_main]

use libfuzzer_sys::fuzz_target;
use mzconvert::mzxml::{decode_peaks, mz_pairs_to_table, PeakEncoding};

fuzz_target!(|data: &[u8]| {
    let Some((&selector, text)) = data.split_first() else {
        return;
    };
    let Ok(text) = std::str::from_utf8(text) else {
        return;
    };

    let compression = if selector & 1 == 0 { "none" } else { "zlib" };
    let precision = if selector & 2 == 0 { "32" } else { "64" };
    let byte_order = if selector & 4 == 0 { "network" } else { "little" };
    let Ok(encoding) = PeakEncoding::from_attributes(Some(compression), Some(precision), Some(byte_order)) else {
        return;
    };

    if let Ok(values) = decode_peaks(text, &encoding) {
        let table = mz_pairs_to_table(&values);
        assert_eq!(table.mz().len(), table.intensity().len());
    }
});
