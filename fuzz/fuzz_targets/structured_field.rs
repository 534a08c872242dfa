#![no_main]

use fetch::http::headers::structured::{StructuredField, StructuredFieldKind};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (u8, String)| {
    let (kind, input) = input;
    let kind = match kind % 3 {
        0 => StructuredFieldKind::Item,
        1 => StructuredFieldKind::List,
        _ => StructuredFieldKind::Dictionary,
    };

    if let Ok(field) = StructuredField::parse(&input, kind)
        && let Ok(serialized) = field.serialize()
    {
        let reparsed = StructuredField::parse(&serialized, kind);
        assert_eq!(reparsed.ok().as_ref(), Some(&field));
    }
});
