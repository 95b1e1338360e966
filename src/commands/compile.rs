//! Compile command handler

use anyhow::Result;

use viewc::application::{CompileOutcome, Compiler};
use viewc::presentation::factory::{create_compiler, create_finder};
use viewc::presentation::output::{
    render_compile_text, render_json, CompileEntry, CompileReport, Failure,
};
use viewc::presentation::OutputFormat;
use viewc::ViewResult;

use super::{select_templates, CommandContext};

/// Execute the compile command
///
/// Returns `false` when at least one template failed.
pub fn cmd_compile(ctx: &CommandContext, names: Vec<String>, force: bool) -> Result<bool> {
    let compiler = create_compiler(&ctx.config)?;
    let finder = create_finder(&ctx.config);

    let mut report = CompileReport::default();
    for selection in select_templates(&ctx.config, names)? {
        let result = match selection.source {
            Some(source) => Ok(source),
            None => finder.find(&selection.name),
        }
        .and_then(|source| {
            let outcome = compile_one(&compiler, &source, force)?;
            Ok((source, outcome))
        });

        match result {
            Ok((source, outcome)) => report.entries.push(CompileEntry {
                name: selection.name,
                source,
                outcome,
            }),
            Err(e) => {
                tracing::warn!(name = %selection.name, error = %e, "compile failed");
                report.failures.push(Failure {
                    name: selection.name,
                    error: e.to_string(),
                });
            }
        }
    }

    match ctx.format {
        OutputFormat::Json => println!("{}", render_json(&report)),
        OutputFormat::Text => print!(
            "{}",
            render_compile_text(&report, ctx.unicode, ctx.verbose)
        ),
    }
    Ok(report.is_success())
}

fn compile_one<C: Compiler>(
    compiler: &C,
    source: &std::path::Path,
    force: bool,
) -> ViewResult<CompileOutcome> {
    if !force || !compiler.cache_root().is_enabled() {
        return compiler.ensure_compiled(source);
    }

    compiler.compile(source)?;
    Ok(CompileOutcome::Compiled(compiler.compiled_path(source)?))
}
