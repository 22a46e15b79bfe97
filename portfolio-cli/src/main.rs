//! Headless driver for the portfolio page.
//!
//! Reads an interaction script, plays it against the page in real time and
//! prints a snapshot for every `dump` plus one at the end.

mod paths;
mod script;

use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use pagedom::Document;
use portfolio::prefs::{JsonFileBackend, PreferenceError};
use portfolio::site;
use portfolio::{ConfigError, Page, PageConfig, Runtime};
use simplelog::{Config, LevelFilter, WriteLogger};
use thiserror::Error;
use tokio::sync::mpsc;

use crate::script::ScriptError;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Interaction script; read from stdin when omitted
    #[arg(value_name = "SCRIPT")]
    script: Option<PathBuf>,

    /// Page configuration (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Preference store (JSON)
    #[arg(long, value_name = "FILE")]
    prefs: Option<PathBuf>,

    /// Keep preferences in memory only
    #[arg(long, conflicts_with = "prefs")]
    ephemeral: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("config: {0}")]
    Config(#[from] ConfigError),
    #[error("preferences: {0}")]
    Prefs(#[from] PreferenceError),
    #[error("script: {0}")]
    Script(#[from] ScriptError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

fn init_logging() {
    paths::rotate_logs();
    let Some(path) = paths::log_file() else { return };
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    match File::create(&path) {
        Ok(file) => {
            let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), file);
        }
        Err(e) => eprintln!("logging disabled: {e}"),
    }
}

fn load_config(cli: &Cli) -> Result<PageConfig, ConfigError> {
    if let Some(path) = &cli.config {
        return PageConfig::load(path);
    }
    match paths::config_file() {
        Some(path) if path.exists() => PageConfig::load(path),
        _ => Ok(PageConfig::default()),
    }
}

fn build_page(cli: &Cli, config: PageConfig) -> Result<Page<Document>, PreferenceError> {
    let page = Page::new(site::portfolio_document(), config);
    if cli.ephemeral {
        return Ok(page);
    }
    match cli.prefs.clone().or_else(paths::preferences_file) {
        Some(path) => {
            info!("preferences at {}", path.display());
            Ok(page.with_preferences(JsonFileBackend::open(path)?))
        }
        None => Ok(page),
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = load_config(&cli)?;
    let source = match &cli.script {
        Some(path) => fs::read_to_string(path)?,
        None => io::read_to_string(io::stdin())?,
    };
    let steps = script::parse(&source)?;
    info!("{} step(s) to play", steps.len());

    let page = build_page(&cli, config)?;
    let runtime = Runtime::new(page).on_snapshot(|snapshot| println!("{snapshot}\n"));

    let (tx, rx) = mpsc::channel(32);
    let (page, ()) = tokio::join!(runtime.run(rx), script::feed(steps, tx));

    println!("{}", page.snapshot());
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
