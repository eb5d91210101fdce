#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod paths;
mod script;

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use flexi_logger::{Cleanup, Criterion, Duplicate, FileSpec, Logger, LoggerHandle, Naming};
use shipyard_edit::{Catalog, Dispatch, EditorOptions, EditorSession, Inventory, TracePresentation};

/// Ticks a single event may spend in routines before the run is aborted
const MAX_TICKS_PER_EVENT: usize = 1024;

#[derive(Parser, Debug)]
#[command(version, about = "Replay editor input against a ship layout and print the result", long_about = None)]
pub struct Args {
    /// Part catalog (TOML)
    #[arg(long, value_name = "FILE")]
    catalog: PathBuf,

    /// Starting inventory (TOML); empty when omitted
    #[arg(long, value_name = "FILE")]
    inventory: Option<PathBuf>,

    /// Editor options (TOML); defaults to options.toml in the config directory
    #[arg(long, value_name = "FILE")]
    options: Option<PathBuf>,

    /// Input script, one event per line; reads stdin when omitted
    #[arg(long, value_name = "FILE")]
    script: Option<PathBuf>,

    /// Write the resulting inventory here
    #[arg(long, value_name = "FILE")]
    save: Option<PathBuf>,

    /// Log to stderr only instead of the rotating log file
    #[clap(long, default_value_t = false)]
    log_stderr: bool,
}

fn start_logger(stderr_only: bool) -> Option<LoggerHandle> {
    let logger = match Logger::try_with_env_or_str("info") {
        Ok(logger) => logger,
        Err(err) => {
            eprintln!("Invalid log specification: {err}");
            return None;
        }
    };
    let started = if stderr_only {
        logger.log_to_stderr().start()
    } else if let Some(log_dir) = paths::config_dir() {
        logger
            .log_to_file(FileSpec::default().directory(&log_dir).basename("shipyard").suffix("log").suppress_timestamp())
            .rotate(Criterion::Size(64 * 1024), Naming::Numbers, Cleanup::KeepLogFiles(3))
            .duplicate_to_stderr(Duplicate::Warn)
            .start()
    } else {
        eprintln!("Failed to create log file");
        logger.log_to_stderr().start()
    };
    match started {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("Failed to start logger: {err}");
            None
        }
    }
}

fn load_options(path: Option<&Path>) -> Result<EditorOptions> {
    if let Some(path) = path {
        return EditorOptions::load(path).with_context(|| format!("loading options from {}", path.display()));
    }
    let Some(path) = paths::default_options_path() else {
        return Ok(EditorOptions::default());
    };
    if !path.exists() {
        let options = EditorOptions::default();
        if let Err(err) = options.store(&path) {
            log::warn!("Could not write default options to {}: {err}", path.display());
        }
        return Ok(options);
    }
    Ok(EditorOptions::load_or_default(&path))
}

fn read_script(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path).with_context(|| format!("reading script {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text).context("reading script from stdin")?;
            Ok(text)
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let options = load_options(args.options.as_deref())?;
    let catalog = Catalog::load(&args.catalog).with_context(|| format!("loading catalog {}", args.catalog.display()))?;
    log::info!("Loaded {} part definitions", catalog.len());

    let inventory = match &args.inventory {
        Some(path) => {
            let text = std::fs::read_to_string(path).with_context(|| format!("reading inventory {}", path.display()))?;
            Inventory::load(&text, &catalog).with_context(|| format!("parsing inventory {}", path.display()))?
        }
        None => Inventory::new(),
    };

    let events = script::parse(&read_script(args.script.as_deref())?)?;
    let presentation = TracePresentation::new(options.lerp_frames);
    let mut session = EditorSession::new(catalog, inventory, options, presentation);

    let mut rejected = 0;
    for (i, event) in events.iter().enumerate() {
        if session.dispatch(*event) == Dispatch::Rejected {
            rejected += 1;
        }
        if !session.run_until_idle(MAX_TICKS_PER_EVENT) {
            bail!("event {} ({event:?}) did not settle after {MAX_TICKS_PER_EVENT} ticks", i + 1);
        }
    }
    log::info!("Replayed {} events, {rejected} rejected", events.len());

    let snapshot = session.snapshot();
    println!("{}", serde_json::to_string_pretty(&snapshot).context("serializing snapshot")?);

    if let Some(path) = &args.save {
        let text = session.inventory().to_toml()?;
        std::fs::write(path, text).with_context(|| format!("writing inventory {}", path.display()))?;
        log::info!("Saved inventory to {}", path.display());
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _logger = start_logger(args.log_stderr);
    log::info!("Starting shipyard {}", env!("CARGO_PKG_VERSION"));

    let result = run(&args);
    if let Err(err) = &result {
        log::error!("{err:#}");
    }
    result
}
