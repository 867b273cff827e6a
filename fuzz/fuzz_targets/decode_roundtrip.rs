#![no_main]

// Harness: decode arbitrary text; anything that decodes must re-encode to a
// string that decodes to the same clock.

use libfuzzer_sys::fuzz_target;
use hlc_core::codec::{decode, encode};

fuzz_target!(|input: &str| {
    if let Ok(clock) = decode(input) {
        let re = encode(&clock);
        assert_eq!(decode(&re), Ok(clock));
    }
});
