//! `userdeck` — browse a remote users collection in the terminal.
//!
//! Built on [ratatui](https://ratatui.rs). Fetches `GET {base_url}/users`
//! once at startup, lists the records, opens any one in a detail overlay,
//! and removes records from the in-memory list on request. Nothing is
//! ever written back to the server.
//!
//! Logs are written to a file (default `<temp dir>/userdeck.log`) to avoid
//! corrupting the terminal UI.
//!
//! Entry point: CLI argument parsing, tracing setup, panic hooks, and app launch.

mod action;
mod app;
mod component;
mod event;
mod screens;
mod theme;
mod tui;
mod widgets;

use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

use userdeck_config::Config;

use crate::app::App;

/// Terminal browser for a remote users collection.
#[derive(Parser, Debug)]
#[command(name = "userdeck", version, about)]
struct Cli {
    /// API root serving `/users` (e.g., https://jsonplaceholder.typicode.com)
    #[arg(short = 'u', long, env = "USERDECK_URL")]
    url: Option<Url>,

    /// Config file path (defaults to the platform config directory)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Request timeout in seconds (default: wait indefinitely)
    #[arg(long)]
    timeout: Option<u64>,

    /// Do not capture the mouse; keyboard only
    #[arg(long)]
    no_mouse: bool,

    /// Write the effective configuration to the config file and exit
    #[arg(long)]
    init_config: bool,

    /// Log file path (defaults to <temp dir>/userdeck.log)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(userdeck_config::config_path)
    }

    /// Layer CLI flags over the file + env config.
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(ref url) = self.url {
            config.api.base_url = url.to_string();
        }
        if let Some(secs) = self.timeout {
            config.api.timeout_secs = Some(secs);
        }
        if self.no_mouse {
            config.ui.mouse = false;
        }
    }
}

/// Set up file-based tracing. We MUST NOT log to stdout/stderr — that would
/// corrupt the TUI output. Returns a guard that must be held for the
/// lifetime of the application to ensure logs are flushed.
fn setup_tracing(cli: &Cli) -> WorkerGuard {
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "userdeck={log_level},userdeck_core={log_level},userdeck_api={log_level},userdeck_config={log_level}"
        ))
    });

    let log_file = cli
        .log_file
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("userdeck.log"));
    let temp_dir = std::env::temp_dir();
    let log_dir = log_file.parent().unwrap_or(temp_dir.as_path());
    let log_filename = log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("userdeck.log"));

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true),
        )
        .init();

    guard
}

fn write_config(config: &Config, path: &Path) -> Result<()> {
    userdeck_config::save_config(config, path)?;
    println!("wrote {}", path.display());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Install panic/error hooks BEFORE entering the terminal
    tui::install_hooks()?;

    // Tracing to file — hold the guard so logs flush on exit
    let _log_guard = setup_tracing(&cli);

    // Priority: CLI flags > env > config file > defaults
    let config_path = cli.config_path();
    let mut config = userdeck_config::load_config_from(&config_path)?;
    cli.apply_overrides(&mut config);

    if cli.init_config {
        return write_config(&config, &config_path);
    }

    let source = config.source_config()?.build_client()?;

    info!(
        url = %source.base_url(),
        config = %config_path.display(),
        "starting userdeck"
    );

    let mut app = App::new(config.ui);
    app.run(source).await?;

    Ok(())
}
