#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    // Malformed input must surface as an error, never as a panic
    if let Ok(mut streamer) = mzconvert::mzxml::MzXmlStreamer::new(Cursor::new(data)) {
        for _ in 0..100 {
            match streamer.next_scan() {
                Ok(Some(scan)) => {
                    let mz = scan.peaks().mz();
                    assert!(!mz.iter().any(|v| v.is_nan()));
                    assert!(mz.windows(2).all(|w| w[0] <= w[1]));
                    assert_eq!(mz.len(), scan.peaks().intensity().len());
                }
                Ok(None) | Err(_) => break,
            }
        }
    }
});
