use anyhow::{Context, Result};
use clap::Parser;
use commands::lookup::{lookup_once, run_interactive, OutputOptions};
use log::info;
use models::settings::Settings;
use services::kick_service::KickService;
use services::lookup_service::{LookupState, LookupWidget};
use services::{diagnostic_logger, settings_service};
use std::path::PathBuf;

mod commands;
mod models;
mod services;
mod utils;

/// Look up a Kick streamer: followers, live status and viewer count.
#[derive(Parser, Debug)]
#[command(name = "KickLookup", version, about)]
struct Cli {
    /// Username to look up. Omit to start an interactive prompt.
    username: Option<String>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Override the API base URL (default https://kick.com)
    #[arg(long, value_name = "URL")]
    api_base: Option<String>,

    /// Settings file (defaults to <config dir>/KickLookup/settings.json)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Show diagnostic logging
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors, even if the settings enable diagnostics
    #[arg(short, long)]
    quiet: bool,

    /// Save the effective settings to the settings file and exit
    #[arg(long)]
    write_config: bool,
}

impl Cli {
    fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(api_base) = &self.api_base {
            settings.api_base = api_base.clone();
        }
        if let Some(timeout) = self.timeout {
            settings.request_timeout_secs = Some(timeout);
        }
        if self.verbose {
            settings.diagnostics_enabled = true;
        }
        if self.quiet {
            settings.diagnostics_enabled = false;
        }
    }
}

async fn run(cli: Cli) -> Result<bool> {
    let settings_path = match &cli.config {
        Some(path) => path.clone(),
        None => settings_service::default_settings_path()?,
    };

    let mut settings = settings_service::load_settings_or_default(&settings_path);
    cli.apply_overrides(&mut settings);
    diagnostic_logger::set_diagnostics_enabled(settings.diagnostics_enabled);

    if cli.write_config {
        settings_service::save_settings(&settings_path, &settings)?;
        println!("Settings written to {}", settings_path.display());
        return Ok(true);
    }

    if diagnostic_logger::is_diagnostics_enabled() {
        info!("[Main] Settings file: {}", settings_path.display());
    }
    info!("[Main] Using API base {}", settings.api_base);

    let service = KickService::new(&settings)?;
    let widget = LookupWidget::new(service);
    let options = OutputOptions {
        json: cli.json,
        default_avatar_url: settings.default_avatar_url.clone(),
    };
    let mut stdout = std::io::stdout();

    match &cli.username {
        Some(username) => {
            let state = lookup_once(&widget, username, &options, &mut stdout).await?;
            Ok(matches!(state, LookupState::Success { .. }))
        }
        None => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            run_interactive(&widget, stdin, &options, &mut stdout)
                .await
                .context("Interactive session failed")?;
            Ok(true)
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Settings may raise the level later; start quiet unless asked
    diagnostic_logger::init_logging(cli.verbose);

    match run(cli).await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(2);
        }
    }
}
