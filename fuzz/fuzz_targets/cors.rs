#![no_main]

use fetch::http::headers::{
    HeaderList, cors_unsafe_request_header_names, is_cors_safelisted_request_header,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|headers: Vec<(String, String)>| {
    for (name, value) in &headers {
        let _ = is_cors_safelisted_request_header(name, value);
    }

    let list: HeaderList = headers.into_iter().collect();
    let names = cors_unsafe_request_header_names(&list);
    assert!(names.windows(2).all(|pair| pair[0] < pair[1]));
});
