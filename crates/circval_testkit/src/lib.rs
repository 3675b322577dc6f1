//! Shared test helpers for workspace crates.

use std::path::{Path, PathBuf};

/// Workspace root: two levels above this crate's manifest directory.
pub fn workspace_root() -> PathBuf {
	let crate_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	crate_dir
		.ancestors()
		.nth(2)
		.map_or_else(|| crate_dir.to_path_buf(), Path::to_path_buf)
}

/// Resolve a checked-in fixture under `<workspace>/fixtures`, panicking if it is missing.
pub fn fixture_path(name: &str) -> PathBuf {
	let path = workspace_root().join("fixtures").join(name);
	assert!(path.is_file(), "fixture {name} missing at {}", path.display());
	path
}

/// Read and parse a JSON fixture under `<workspace>/fixtures`.
pub fn fixture_json(name: &str) -> serde_json::Value {
	let path = fixture_path(name);
	let bytes = std::fs::read(&path).unwrap_or_else(|err| panic!("fixture {name} reads: {err}"));
	serde_json::from_slice(&bytes).unwrap_or_else(|err| panic!("fixture {name} is json: {err}"))
}
