//! Scenario: First Compile
//!
//! Journey: A template is rendered for the first time with an empty cache.
//!
//! Steps:
//! 1. `views/home.tpl` exists, the cache root does not
//! 2. The template is compiled
//! 3. The artifact is reused from then on
//!
//! Success Criteria:
//! - Cache root and artifact are created
//! - Artifact content is derived from the source
//! - The artifact is not expired right after compiling

use std::path::Path;

use viewc::{CacheRoot, CompileOutcome, Compiler, LocalFs, ViewCompiler};

use crate::common::*;
use crate::{assert_compiled, assert_output_contains, assert_success};

/// SCENARIO: library compile on local disk
#[test]
fn scenario_first_compile_creates_artifact() {
    let env = TestEnv::builder().with_template("home.tpl", "X").build();
    let source = env.project_path("views/home.tpl");

    let compiler = ViewCompiler::new(LocalFs::new(), CacheRoot::new(env.cache_root()).unwrap());
    assert!(!env.cache_root().exists());

    compiler.compile(&source).unwrap();

    let artifact = compiler.compiled_path(&source).unwrap();
    assert!(artifact.starts_with(env.cache_root()));
    assert_eq!(std::fs::read(&artifact).unwrap(), b"X");
    assert!(!compiler.is_expired(&source).unwrap());
}

/// SCENARIO: second render reuses the artifact
#[test]
fn scenario_second_render_is_fresh() {
    let env = TestEnv::builder().with_template("home.tpl", "X").build();
    let source = env.project_path("views/home.tpl");
    let compiler = ViewCompiler::new(LocalFs::new(), CacheRoot::new(env.cache_root()).unwrap());

    let first = compiler.ensure_compiled(&source).unwrap();
    let second = compiler.ensure_compiled(&source).unwrap();

    assert!(matches!(first, CompileOutcome::Compiled(_)));
    assert!(matches!(second, CompileOutcome::Fresh(_)));
    assert_eq!(first.path(), second.path());
}

/// SCENARIO: `viewc compile` from the command line
#[test]
fn scenario_cli_compile_then_status() {
    let env = TestEnv::builder()
        .with_template("home.tpl", HOME_TEMPLATE)
        .with_template("users/card.tpl", USER_CARD_TEMPLATE)
        .build();

    let result = assert_success!(env.run(&["compile", "home", "users/card"]));
    assert_output_contains!(result, "2 compiled, 0 up-to-date, 0 failed");
    assert_compiled!(env, 2);

    let status = assert_success!(env.run(&["status", "--json"]));
    let json = status.json();
    let states: Vec<&str> = json["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["state"].as_str().unwrap())
        .collect();
    assert_eq!(states, vec!["fresh", "fresh"]);

    assert!(Path::new(json["entries"][0]["artifact"].as_str().unwrap()).exists());
}
