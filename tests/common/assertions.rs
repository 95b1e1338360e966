//! Custom assertion macros for CLI and scenario tests.
//!
//! These macros provide descriptive failure messages to aid debugging.

use std::path::Path;

/// List all files in a directory recursively (for debugging)
pub fn list_all_files(dir: &Path) -> Vec<String> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(list_all_files(&path));
            } else {
                files.push(path.display().to_string());
            }
        }
    }
    files
}

/// Assert that a command succeeded, printing its output otherwise.
///
/// # Example
/// ```ignore
/// assert_success!(env.run(&["compile", "home"]));
/// ```
#[macro_export]
macro_rules! assert_success {
    ($result:expr) => {{
        let result = $result;
        assert!(
            result.success,
            "Expected success, got exit code {}.\nOutput:\n{}",
            result.exit_code,
            result.combined_output()
        );
        result
    }};
}

/// Assert that the cache root holds exactly `$count` artifacts.
///
/// # Example
/// ```ignore
/// assert_compiled!(env, 2);
/// ```
#[macro_export]
macro_rules! assert_compiled {
    ($env:expr, $count:expr) => {
        let files = $env.cached_files();
        assert_eq!(
            files.len(),
            $count,
            "Expected {} compiled artifacts under {:?}, found:\n  {}",
            $count,
            $env.cache_root(),
            files.join("\n  ")
        );
    };
}

/// Assert that combined output contains a string.
///
/// # Example
/// ```ignore
/// assert_output_contains!(result, "Compile Complete");
/// ```
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $needle:expr) => {
        let output = $result.combined_output();
        assert!(
            output.contains($needle),
            "Expected output to contain '{}'.\nOutput:\n{}",
            $needle,
            output
        );
    };
}
