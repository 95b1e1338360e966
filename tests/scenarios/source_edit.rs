//! Scenario: Source Edit
//!
//! Journey: An author edits a template that already has a compiled artifact.
//!
//! Success Criteria:
//! - The artifact reports expired once the source is newer
//! - Recompiling replaces the artifact with content from the new source
//! - Equal modification times count as fresh

use std::path::Path;
use std::time::Duration;

use viewc::{CacheRoot, Compiler, LocalFs, MemoryFs, ViewCompiler};

use crate::common::*;
use crate::assert_success;

/// SCENARIO: edit detected through mtimes on local disk
#[test]
fn scenario_edit_expires_artifact() {
    let env = TestEnv::builder().with_template("home.tpl", "X").build();
    let source = env.project_path("views/home.tpl");
    let compiler = ViewCompiler::new(LocalFs::new(), CacheRoot::new(env.cache_root()).unwrap());

    compiler.compile(&source).unwrap();
    assert!(!compiler.is_expired(&source).unwrap());

    env.write_project_file("views/home.tpl", "Y");
    env.touch_project_file("views/home.tpl", 10);

    assert!(compiler.is_expired(&source).unwrap());
    compiler.compile(&source).unwrap();

    let artifact = compiler.compiled_path(&source).unwrap();
    assert_eq!(std::fs::read(artifact).unwrap(), b"Y");
    assert!(!compiler.is_expired(&source).unwrap());
}

/// SCENARIO: same-tick edit counts as fresh
#[test]
fn scenario_equal_mtimes_are_fresh() {
    let fs = MemoryFs::new();
    let compiler = ViewCompiler::new(fs.clone(), CacheRoot::new("/app/cache").unwrap());
    let source = Path::new("/app/views/home.tpl");

    fs.insert(source, "X");
    compiler.compile(source).unwrap();

    // clock did not move, so source and artifact share a timestamp
    fs.insert(source, "X2");
    assert!(!compiler.is_expired(source).unwrap());

    fs.advance(Duration::from_secs(1));
    fs.insert(source, "Y");
    assert!(compiler.is_expired(source).unwrap());
}

/// SCENARIO: `viewc compile` recompiles only what changed
#[test]
fn scenario_cli_recompiles_only_edited_template() {
    let env = TestEnv::builder()
        .with_template("home.tpl", HOME_TEMPLATE)
        .with_template("about.tpl", "about")
        .build();

    assert_success!(env.run(&["compile", "--all"]));

    env.write_project_file("views/about.tpl", "about v2");
    env.touch_project_file("views/about.tpl", 10);

    let result = assert_success!(env.run(&["compile", "--all", "--json"]));
    let json = result.json();
    let entries = json["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 2);

    for entry in entries {
        let expected = if entry["name"] == "about.tpl" {
            "compiled"
        } else {
            "fresh"
        };
        assert_eq!(entry["status"], expected, "entry: {}", entry);
    }
}

/// SCENARIO: `--force` recompiles fresh artifacts too
#[test]
fn scenario_cli_force_recompiles() {
    let env = TestEnv::builder().with_template("home.tpl", "X").build();

    assert_success!(env.run(&["compile", "home"]));
    let result = assert_success!(env.run(&["compile", "home", "--force", "--json"]));

    assert_eq!(result.json()["entries"][0]["status"], "compiled");
}
