//! Locating block files for tests.
//!
//! The 100×100 reference block is not checked in. Tests that want it call
//! [`require_test_file!`](crate::require_test_file) and skip when it is
//! missing.

use std::path::{Path, PathBuf};

use isoline_common::Sample;

use crate::fixtures::samples_to_block;

/// File name of the reference terrain block.
pub const REFERENCE_BLOCK: &str = "data100.block";

/// Environment variable naming an extra directory to search first.
pub const TEST_DATA_ENV: &str = "TEST_DATA_DIR";

/// Directories searched for block files, in order: `$TEST_DATA_DIR`, then
/// `crates/elevation/testdata`, then `testdata` at the workspace root.
pub fn search_dirs() -> Vec<PathBuf> {
    // This crate lives at <root>/crates/test-utils.
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");

    std::env::var_os(TEST_DATA_ENV)
        .map(PathBuf::from)
        .into_iter()
        .chain([root.join("crates/elevation/testdata"), root.join("testdata")])
        .collect()
}

/// First existing `name` in [`search_dirs`].
pub fn find_test_file(name: &str) -> Option<PathBuf> {
    search_dirs()
        .into_iter()
        .map(|dir| dir.join(name))
        .find(|path| path.is_file())
}

/// Fresh temporary directory, removed on drop.
pub fn temp_test_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temporary test directory")
}

/// Write `samples` as a block file named `name` inside `dir`.
pub fn write_block_file(dir: &Path, name: &str, samples: &[Sample]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, samples_to_block(samples)).expect("write block file");
    path
}
