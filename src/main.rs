//! Dog Walker CLI — main entry point.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  StdConsole    JsonFileStore / InMemoryStore   SystemClock     │
//! │  (Console)     (RecordStore)                   (Clock)         │
//! │  LogEventSink                                                  │
//! │  (EventSink)                                                   │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │              Session (pure logic)                      │    │
//! │  │  FSM · prompt · forms · status engine                  │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use dogwalker::adapters::console::StdConsole;
use dogwalker::adapters::json_file::JsonFileStore;
use dogwalker::adapters::log_sink::LogEventSink;
use dogwalker::adapters::memory::InMemoryStore;
use dogwalker::adapters::time::SystemClock;
use dogwalker::app::ports::RecordStore;
use dogwalker::app::service::{Io, Session};
use dogwalker::config::AppConfig;
use dogwalker::seed;

#[derive(Debug, Parser)]
#[command(name = "dogwalker", version, about = "Keep track of your dogs' walks and meals")]
struct Cli {
    /// JSON config file (missing file = defaults).
    #[arg(long, default_value = "dogwalker.json")]
    config: PathBuf,

    /// Record store file; overrides `store_path` from the config.
    #[arg(long)]
    store: Option<PathBuf>,

    /// Keep records in memory only for this session.
    #[arg(long, conflicts_with = "store")]
    memory: bool,

    /// Print dog names without colour.
    #[arg(long)]
    no_color: bool,

    /// Do not create the demo dogs in an empty store.
    #[arg(long)]
    no_seed: bool,

    /// Log at info level instead of warn (RUST_LOG still wins).
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(store) = &self.store {
            config.store_path.clone_from(store);
        }
        if self.no_color {
            config.color = false;
        }
        if self.no_seed {
            config.seed_when_empty = false;
        }
        config
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── 1. Logging (stderr) ───────────────────────────────────
    let default_level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    // ── 2. Configuration ──────────────────────────────────────
    let config = AppConfig::load(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    let config = cli.apply(config);
    config.validate()?;
    info!("Dog Walker v{}", env!("CARGO_PKG_VERSION"));

    // ── 3. Store + session ────────────────────────────────────
    if cli.memory {
        info!("Using in-memory store");
        run_session(&mut InMemoryStore::new(), &config)
    } else {
        let mut store = JsonFileStore::open(&config.store_path)
            .with_context(|| format!("opening store {}", config.store_path.display()))?;
        info!("Using store {}", store.path().display());
        run_session(&mut store, &config)
    }
}

fn run_session(store: &mut impl RecordStore, config: &AppConfig) -> Result<()> {
    let clock = SystemClock::new();
    if config.seed_when_empty {
        if let Err(e) = seed::seed_if_empty(store, &clock) {
            warn!("Seeding failed ({}), continuing with an empty store", e);
        }
    }

    let mut console = StdConsole::stdio();
    let mut sink = LogEventSink::new();
    let mut io = Io::new(store, &mut console, &clock, &mut sink);

    let mut session = Session::new(config);
    let state = session.run(&mut io)?;
    info!(
        "Session ended in {:?} after {} commands",
        state,
        session.commands_handled()
    );
    Ok(())
}
