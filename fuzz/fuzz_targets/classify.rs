#![no_main]

//! Fuzz target for classification totality: any byte soup classifies to a
//! category without panicking, and variant prefixes stay transparent.

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let category = classort_engine::classify(text);
    assert!(category.ordinal() <= classort_types::Category::Custom.ordinal());

    let prefixed = format!("sm:dark:{text}");
    assert_eq!(classort_engine::classify(&prefixed), category);

    let _ = classort_engine::classify_argument(text);
    let _ = classort_engine::sort_class_string(text);
});
