//! Path command handler

use anyhow::Result;

use viewc::application::Compiler;
use viewc::presentation::factory::{create_compiler, create_finder};
use viewc::presentation::output::{render_json, render_path_text};
use viewc::presentation::OutputFormat;

use super::CommandContext;

/// Print where the compiled artifact for `name` lives
///
/// Fails with an invalid-configuration error when caching is disabled.
pub fn cmd_path(ctx: &CommandContext, name: &str) -> Result<bool> {
    let compiler = create_compiler(&ctx.config)?;
    let source = create_finder(&ctx.config).find(name)?;
    let artifact = compiler.compiled_path(&source)?;

    match ctx.format {
        OutputFormat::Json => println!(
            "{}",
            render_json(&serde_json::json!({
                "name": name,
                "source": source,
                "artifact": artifact,
            }))
        ),
        OutputFormat::Text => print!("{}", render_path_text(&artifact)),
    }
    Ok(true)
}
