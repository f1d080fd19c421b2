//! Contract fixture loader.
//!
//! Loads golden files from `contracts/http/` for contract assertion tests.

use std::path::{Path, PathBuf};

use serde_json::Value;

/// Load a JSON fixture file relative to the workspace root.
///
/// # Example
/// ```no_run
/// use fieldsales_testing::fixture::Fixture;
/// let val = Fixture::load("contracts/http/invoice/upload_success.json");
/// ```
pub struct Fixture;

impl Fixture {
    /// Load and parse a fixture JSON file at `workspace_root/path`.
    ///
    /// Panics if the file is missing or invalid JSON.
    pub fn load(relative_path: &str) -> Value {
        let full_path = workspace_root().join(relative_path);
        let contents = std::fs::read_to_string(&full_path)
            .unwrap_or_else(|e| panic!("fixture not found at {}: {}", full_path.display(), e));
        serde_json::from_str(&contents)
            .unwrap_or_else(|e| panic!("invalid JSON in fixture {}: {}", relative_path, e))
    }

    /// Assert that `actual` carries every key of the fixture with the same
    /// value. Keys whose fixture value is the string `"*"` only need to exist.
    pub fn assert_matches(actual: &Value, relative_path: &str) {
        let expected = Self::load(relative_path);
        let Value::Object(expected) = expected else {
            panic!("fixture {relative_path} must be a JSON object");
        };
        for (key, want) in &expected {
            let got = actual
                .get(key)
                .unwrap_or_else(|| panic!("missing key `{key}` (contract {relative_path})"));
            if want != "*" {
                assert_eq!(got, want, "key `{key}` differs from contract {relative_path}");
            }
        }
    }
}

// Walk up from the crate dir to the directory holding `contracts/`.
fn workspace_root() -> PathBuf {
    let start = std::env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| std::env::current_dir().unwrap());
    start
        .ancestors()
        .find(|a| a.join("contracts").is_dir())
        .map(Path::to_path_buf)
        .unwrap_or(start)
}
