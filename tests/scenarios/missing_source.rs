//! Scenario: Missing Source
//!
//! Journey: A render asks for a template that does not exist.
//!
//! Success Criteria:
//! - Compiling fails with a source-not-found error naming the path
//! - Nothing is created under the cache root

use viewc::{CacheRoot, Compiler, LocalFs, ViewCompiler, ViewError};

use crate::common::*;
use crate::assert_output_contains;

/// SCENARIO: library compile of a missing template
#[test]
fn scenario_missing_source_creates_nothing() {
    let env = TestEnv::builder().build();
    let missing = env.project_path("views/missing.tpl");
    let compiler = ViewCompiler::new(LocalFs::new(), CacheRoot::new(env.cache_root()).unwrap());

    let err = compiler.compile(&missing).unwrap_err();

    assert!(matches!(err, ViewError::SourceNotFound { ref path } if *path == missing));
    assert!(!env.cache_root().exists());

    let err = compiler.is_expired(&missing).unwrap_err();
    assert!(err.is_source_not_found());
}

/// SCENARIO: `viewc compile missing` exits non-zero and reports the template
#[test]
fn scenario_cli_missing_template_fails() {
    let env = TestEnv::builder().with_template("home.tpl", "X").build();

    let result = env.run(&["compile", "home", "missing"]);

    assert!(!result.success);
    assert_eq!(result.exit_code, 1);
    assert_output_contains!(result, "template source not found");
    assert_output_contains!(result, "1 compiled, 0 up-to-date, 1 failed");
    assert_eq!(env.cached_files().len(), 1);
}
