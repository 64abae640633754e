// common/mod.rs - Shared fixture for integration tests.
//
// Builds one property table per test binary from the UCD excerpts in
// testdata/ucd. The excerpts are real-format fragments of the Unicode 16
// data files, trimmed to the codepoints the tests exercise.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::OnceLock;

use unicol::loader::load_from_directory;
use unicol::table::CodepointPropertiesTable;

pub fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata/ucd")
}

pub fn fixture_table() -> &'static CodepointPropertiesTable {
    static TABLE: OnceLock<CodepointPropertiesTable> = OnceLock::new();
    TABLE.get_or_init(|| load_from_directory(fixture_dir()).expect("fixture UCD data must load"))
}
