//! ringq - interactive fixed-capacity queue
//!
//! Parses arguments, loads configuration and runs a session on stdin or a
//! script file.

use std::fs::File;
use std::io::{self, BufReader};
use std::num::NonZeroUsize;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use crate::config::Config;
use crate::errors::RingqError;
use crate::observability::telemetry::{init_tracing, init_tracing_verbose};
use crate::session::{Session, SessionOptions};

#[derive(Parser, Debug)]
#[command(name = "ringq")]
#[command(about = "Fixed-capacity ring buffer queue with an interactive command menu")]
#[command(version)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Queue capacity (overrides the config file)
    #[arg(long, value_name = "N")]
    pub capacity: Option<usize>,

    /// Read commands from a file instead of stdin
    #[arg(short, long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Do not print the command menu at startup
    #[arg(long)]
    pub no_menu: bool,

    /// Quiet mode (no menu, no prompts)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug logging on stderr)
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Cli {
    /// Fold CLI flags over the loaded configuration.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(capacity) = self.capacity {
            config.queue.capacity = capacity;
        }
        if self.no_color {
            config.ui.color = false;
        }
        if self.no_menu || self.quiet {
            config.ui.show_menu = false;
        }
    }

    pub fn session_options(&self, config: &Config) -> Result<SessionOptions> {
        let capacity = NonZeroUsize::new(config.queue.capacity).ok_or_else(|| {
            RingqError::Config("queue capacity must be greater than zero".into())
        })?;
        Ok(SessionOptions {
            capacity,
            prompts: !self.quiet,
            show_menu: config.ui.show_menu,
        })
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        init_tracing_verbose();
    } else {
        init_tracing();
    }

    let mut config = Config::load(cli.config.as_deref())?;
    cli.apply_to(&mut config);
    config.validate()?;
    if !config.ui.color {
        colored::control::set_override(false);
    }
    debug!(?config, "Effective configuration");

    let mut session = Session::new(cli.session_options(&config)?);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .map_err(RingqError::from)
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            session.run(BufReader::new(file), &mut out)?;
        }
        None => session.run(io::stdin().lock(), &mut out)?,
    }
    Ok(())
}
