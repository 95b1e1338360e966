//! viewc CLI - template compiler with a compiled-artifact cache
//!
//! Usage: viewc <COMMAND>
//!
//! Commands:
//!   compile  Compile templates whose cached artifact is missing or stale
//!   status   Show whether cached artifacts are fresh
//!   path     Print the artifact path for a template
//!   clear    Remove every compiled artifact

mod commands;

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

use viewc::config::{Config, LogLevel};
use viewc::presentation::{Cli, Commands};

use commands::CommandContext;

/// Handle for applying the configured log level once the config is loaded
struct LogControl {
    handle: reload::Handle<EnvFilter, Registry>,
    /// `RUST_LOG` or `-v` already chose the filter
    pinned: bool,
}

impl LogControl {
    fn apply_config_level(&self, level: LogLevel) {
        if self.pinned {
            return;
        }
        if let Err(e) = self.handle.reload(EnvFilter::new(level.as_str())) {
            eprintln!("Warning: failed to apply log level: {}", e);
        }
    }
}

/// Filter precedence: `RUST_LOG`, then `-v` count, then `log.level` from config
fn init_tracing(verbose: u8) -> LogControl {
    let (filter, pinned) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, true),
        Err(_) => match verbose {
            0 => (EnvFilter::new(LogLevel::default().as_str()), false),
            1 => (EnvFilter::new("info"), true),
            2 => (EnvFilter::new("debug"), true),
            _ => (EnvFilter::new("trace"), true),
        },
    };

    let (filter, handle) = reload::Layer::new(filter);
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(std::io::stderr().is_terminal())
                .with_writer(std::io::stderr),
        )
        .init();

    LogControl { handle, pinned }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let log = init_tracing(cli.verbose);

    let project_dir = std::env::current_dir()?;
    let (config, warnings) = Config::discover(&project_dir, cli.config.as_deref())?;
    log.apply_config_level(config.log.level);

    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    let ctx = CommandContext::new(config, cli.json, cli.verbose);
    let ok = match cli.command {
        Commands::Compile { names, force, .. } => commands::cmd_compile(&ctx, names, force)?,
        Commands::Status { names } => commands::cmd_status(&ctx, names)?,
        Commands::Path { name } => commands::cmd_path(&ctx, &name)?,
        Commands::Clear => commands::cmd_clear(&ctx)?,
    };

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}
