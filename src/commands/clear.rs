//! Clear command handler

use anyhow::Result;

use viewc::application::Compiler;
use viewc::presentation::factory::create_compiler;
use viewc::presentation::output::{render_clear_text, render_json};
use viewc::presentation::OutputFormat;

use super::CommandContext;

/// Execute the clear command
pub fn cmd_clear(ctx: &CommandContext) -> Result<bool> {
    let compiler = create_compiler(&ctx.config)?;
    compiler.clear()?;

    let root = compiler.cache_root().path();
    match ctx.format {
        OutputFormat::Json => println!(
            "{}",
            render_json(&serde_json::json!({
                "cleared": root.is_some(),
                "cache_root": root,
            }))
        ),
        OutputFormat::Text => print!("{}", render_clear_text(root, ctx.unicode)),
    }
    Ok(true)
}
