#![allow(dead_code)]

use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};
use qrschema::schema::{Entry, SchemaDocument};

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// File-name-like labels, including the odd characters real names carry.
pub fn entry_name_strategy() -> BoxedStrategy<String> {
    prop_oneof![
        "[a-z0-9_-]{1,12}\\.png",
        "[A-Za-z0-9 ._-]{1,24}",
        any::<String>(),
    ]
    .boxed()
}

/// Arbitrary payload text: URLs, empty strings, control characters, unicode.
pub fn payload_strategy() -> BoxedStrategy<String> {
    prop_oneof![
        Just(String::new()),
        "https://[a-z]{1,10}\\.example/[a-z0-9/]{0,20}",
        any::<String>(),
    ]
    .boxed()
}

pub fn arb_entry() -> BoxedStrategy<Entry> {
    (entry_name_strategy(), payload_strategy())
        .prop_map(|(name, data)| Entry { name, data })
        .boxed()
}

pub fn arb_document(max_entries: usize) -> BoxedStrategy<SchemaDocument> {
    proptest::collection::vec(arb_entry(), 0..=max_entries)
        .prop_map(SchemaDocument::from)
        .boxed()
}
