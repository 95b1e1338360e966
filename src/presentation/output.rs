//! Output Rendering
//!
//! Reports built by the command handlers, rendered as text or JSON.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Local, Utc};
use serde::Serialize;

use crate::application::CompileOutcome;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Icons for output rendering
struct Icons {
    check: &'static str,
    cross: &'static str,
    write: &'static str,
    skip: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            cross: "✗",
            write: "→",
            skip: "○",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            cross: "[FAIL]",
            write: "->",
            skip: "[ ]",
        }
    }

    fn for_terminal(unicode: bool) -> Self {
        if unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

/// A template the compile command handled
#[derive(Debug, Clone, Serialize)]
pub struct CompileEntry {
    pub name: String,
    pub source: PathBuf,
    #[serde(flatten)]
    pub outcome: CompileOutcome,
}

/// A template the command could not handle
#[derive(Debug, Clone, Serialize)]
pub struct Failure {
    pub name: String,
    pub error: String,
}

/// Result of `viewc compile`
#[derive(Debug, Clone, Default, Serialize)]
pub struct CompileReport {
    pub entries: Vec<CompileEntry>,
    pub failures: Vec<Failure>,
}

impl CompileReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn compiled_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.outcome.was_compiled())
            .count()
    }
}

/// Cache state of one template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactState {
    Fresh,
    Stale,
    Missing,
    PassThrough,
}

impl ArtifactState {
    pub fn label(&self) -> &'static str {
        match self {
            ArtifactState::Fresh => "fresh",
            ArtifactState::Stale => "stale",
            ArtifactState::Missing => "missing",
            ArtifactState::PassThrough => "pass-through",
        }
    }
}

/// One row of `viewc status`
#[derive(Debug, Clone, Serialize)]
pub struct StatusEntry {
    pub name: String,
    pub source: PathBuf,
    pub artifact: Option<PathBuf>,
    pub state: ArtifactState,
    pub source_modified: Option<DateTime<Utc>>,
    pub artifact_modified: Option<DateTime<Utc>>,
}

/// Result of `viewc status`
#[derive(Debug, Clone, Default, Serialize)]
pub struct StatusReport {
    pub entries: Vec<StatusEntry>,
    pub failures: Vec<Failure>,
}

impl StatusReport {
    pub fn stale_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.state, ArtifactState::Stale | ArtifactState::Missing))
            .count()
    }
}

pub fn to_utc(time: SystemTime) -> DateTime<Utc> {
    DateTime::<Utc>::from(time)
}

fn local_time(time: &DateTime<Utc>) -> String {
    time.with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

pub fn render_compile_text(report: &CompileReport, unicode: bool, verbose: u8) -> String {
    let icons = Icons::for_terminal(unicode);
    let mut out = String::new();

    let compiled = report.compiled_count();
    let fresh = report.entries.len() - compiled;

    if report.is_success() {
        let _ = writeln!(out, "{} Compile Complete", icons.check);
    } else {
        let _ = writeln!(out, "{} Compile Failed", icons.cross);
    }
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "  {} compiled, {} up-to-date, {} failed",
        compiled,
        fresh,
        report.failures.len()
    );

    for entry in &report.entries {
        match &entry.outcome {
            CompileOutcome::Compiled(path) => {
                let _ = writeln!(
                    out,
                    "    {} {} -> {}",
                    icons.write,
                    entry.name,
                    path.display()
                );
            }
            other if verbose > 0 => {
                let _ = writeln!(
                    out,
                    "    {} {} ({})",
                    icons.skip,
                    entry.name,
                    other.label()
                );
            }
            _ => {}
        }
    }

    for failure in &report.failures {
        let _ = writeln!(out, "    {} {}: {}", icons.cross, failure.name, failure.error);
    }
    out
}

pub fn render_status_text(report: &StatusReport, unicode: bool) -> String {
    let icons = Icons::for_terminal(unicode);
    let mut out = String::new();

    if report.entries.is_empty() && report.failures.is_empty() {
        let _ = writeln!(out, "No templates found");
        return out;
    }

    let width = report
        .entries
        .iter()
        .map(|e| e.name.len())
        .max()
        .unwrap_or(0);

    for entry in &report.entries {
        let icon = match entry.state {
            ArtifactState::Fresh | ArtifactState::PassThrough => icons.check,
            ArtifactState::Stale | ArtifactState::Missing => icons.skip,
        };
        let mut line = format!(
            "{} {:<width$}  {:<12}",
            icon,
            entry.name,
            entry.state.label(),
            width = width
        );
        if let Some(modified) = &entry.source_modified {
            let _ = write!(line, "  source {}", local_time(modified));
        }
        let _ = writeln!(out, "{}", line.trim_end());
    }

    for failure in &report.failures {
        let _ = writeln!(out, "{} {}: {}", icons.cross, failure.name, failure.error);
    }
    out
}

pub fn render_path_text(path: &Path) -> String {
    format!("{}\n", path.display())
}

pub fn render_clear_text(cache_root: Option<&Path>, unicode: bool) -> String {
    let icons = Icons::for_terminal(unicode);
    match cache_root {
        Some(root) => format!("{} Cleared {}\n", icons.check, root.display()),
        None => format!("{} Cache disabled, nothing to clear\n", icons.skip),
    }
}

/// Pretty JSON for any report
pub fn render_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}
