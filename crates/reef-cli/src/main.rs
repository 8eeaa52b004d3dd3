//! Reef - an ocean-themed portfolio for the terminal
//!
//! A single-view terminal portfolio with:
//! - Accordion sections with reveal-on-scroll
//! - Ocean and circuit-board animated backdrops
//! - Mouse and keyboard navigation
//! - Content overrides from ~/.reef/portfolio.toml

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use reef_core::paths;

mod tui;

/// Reef - terminal portfolio
#[derive(Parser)]
#[command(name = "reef")]
#[command(about = "An ocean-themed portfolio for the terminal", long_about = None)]
struct Cli {
    /// Portfolio content file (defaults to ~/.reef/portfolio.toml, then
    /// the built-in data)
    content: Option<PathBuf>,

    /// Theme to start with (overrides ~/.reef/config.toml)
    #[arg(short, long)]
    theme: Option<String>,

    /// Disable decorative animations
    #[arg(long)]
    no_animations: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List available themes
    Themes,
}

/// Restore terminal state - called on panic or unexpected exit
fn restore_terminal() {
    use crossterm::{
        event::DisableMouseCapture,
        execute,
        terminal::{disable_raw_mode, LeaveAlternateScreen},
    };
    let _ = disable_raw_mode();
    let _ = execute!(std::io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // The themes listing prints to stdout and never enters the TUI
    if matches!(cli.command, Some(Commands::Themes)) {
        for (name, theme) in tui::themes::ThemeRegistry::new().list() {
            println!("{:<10} {}", name, theme.display_name);
        }
        return Ok(());
    }

    // Set up panic hook to restore terminal state
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    // Initialize logging to file (not stdout/stderr which would mess up the TUI)
    let log_dir = paths::logs_dir();
    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        eprintln!("Failed to create log directory: {}", e);
    }

    #[cfg(unix)]
    let null_device = "/dev/null";
    #[cfg(windows)]
    let null_device = "NUL";

    let log_file = match std::fs::File::create(log_dir.join("reef.log")) {
        Ok(file) => file,
        Err(e) => {
            eprintln!(
                "Failed to create log file: {}, falling back to null device",
                e
            );
            std::fs::File::create(null_device)?
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();

    let mut app = tui::App::new(
        cli.content.as_deref(),
        cli.theme.as_deref(),
        cli.no_animations,
    )?;
    app.run().await
}
