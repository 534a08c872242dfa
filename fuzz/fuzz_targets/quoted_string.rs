#![no_main]

use fetch::http::headers::util::{collect_http_quoted_string, collect_http_quoted_string_value};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (String, usize)| {
    let (input, start) = input;
    let start = start % (input.len() + 1);

    let mut raw_position = start;
    let raw = collect_http_quoted_string(&input, &mut raw_position);

    let mut value_position = start;
    let value = collect_http_quoted_string_value(&input, &mut value_position);

    assert_eq!(raw.is_some(), value.is_some());
    assert_eq!(raw_position, value_position);
    assert!(raw_position <= input.len());
});
