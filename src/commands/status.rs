//! Status command handler
//!
//! Reports the cache state of each template without compiling anything.

use std::path::Path;

use anyhow::Result;

use viewc::application::Compiler;
use viewc::domain::ports::FileStore;
use viewc::presentation::factory::{create_compiler, create_finder, ConcreteCompiler};
use viewc::presentation::output::{
    render_json, render_status_text, to_utc, ArtifactState, Failure, StatusEntry, StatusReport,
};
use viewc::presentation::OutputFormat;
use viewc::{ViewError, ViewResult};

use super::{select_templates, CommandContext};

/// Execute the status command
pub fn cmd_status(ctx: &CommandContext, names: Vec<String>) -> Result<bool> {
    let compiler = create_compiler(&ctx.config)?;
    let finder = create_finder(&ctx.config);

    let mut report = StatusReport::default();
    for selection in select_templates(&ctx.config, names)? {
        let result = match selection.source {
            Some(source) => Ok(source),
            None => finder.find(&selection.name),
        }
        .and_then(|source| inspect(&compiler, &selection.name, &source));

        match result {
            Ok(entry) => report.entries.push(entry),
            Err(e) => report.failures.push(Failure {
                name: selection.name,
                error: e.to_string(),
            }),
        }
    }

    match ctx.format {
        OutputFormat::Json => println!("{}", render_json(&report)),
        OutputFormat::Text => print!("{}", render_status_text(&report, ctx.unicode)),
    }
    Ok(report.failures.is_empty())
}

fn inspect(compiler: &ConcreteCompiler, name: &str, source: &Path) -> ViewResult<StatusEntry> {
    let store = compiler.store();
    let source_modified = store
        .last_modified(source)
        .map_err(|e| ViewError::source_read(source, e))?;

    let mut entry = StatusEntry {
        name: name.to_string(),
        source: source.to_path_buf(),
        artifact: None,
        state: ArtifactState::PassThrough,
        source_modified: Some(to_utc(source_modified)),
        artifact_modified: None,
    };

    if !compiler.cache_root().is_enabled() {
        return Ok(entry);
    }

    let artifact = compiler.compiled_path(source)?;
    entry.state = if !store.exists(&artifact) {
        ArtifactState::Missing
    } else if compiler.is_expired(source)? {
        ArtifactState::Stale
    } else {
        ArtifactState::Fresh
    };
    entry.artifact_modified = store.last_modified(&artifact).ok().map(to_utc);
    entry.artifact = Some(artifact);
    Ok(entry)
}
