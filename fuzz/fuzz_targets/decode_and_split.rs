#![no_main]

use fetch::http::headers::util::decode_and_split;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: String| {
    let values = decode_and_split(&input);
    assert!(!values.is_empty());
});
