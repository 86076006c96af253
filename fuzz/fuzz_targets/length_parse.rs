//! Fuzz target for unit-tagged length parsing.

#![no_main]

use libfuzzer_sys::fuzz_target;
use passfoto::geo::Length;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // anything that parses must survive a display round trip
    if let Ok(length) = text.parse::<Length>() {
        let again: Length = length.to_string().parse().unwrap();
        assert_eq!(again, length);
    }
});
