mod render;
mod session;

pub use session::*;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

/// Despesas - Expense Tracker
#[derive(Parser)]
#[command(name = "despesas")]
#[command(about = "Track expenses in memory: add, remove, filter by category and sum")]
#[command(version)]
pub struct Cli {
    /// Read session commands from this file instead of stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Currency symbol shown before amounts
    #[arg(short = 's', long, default_value = "R$")]
    pub currency_symbol: String,

    /// Enable verbose (debug) logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        init_tracing(self.verbose);

        let config = SessionConfig {
            currency_symbol: self.currency_symbol,
        };
        let mut session = Session::new(config);

        let input: Box<dyn BufRead> = match &self.input {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("Failed to open input file: {}", path.display()))?;
                Box::new(BufReader::new(file))
            }
            None => Box::new(io::stdin().lock()),
        };

        session.run(input, io::stdout().lock())
    }
}

/// Install the global subscriber. `RUST_LOG` wins over the verbose flag.
/// Logs go to stderr so they never mix with rendered output.
pub fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "despesas=debug"
    } else {
        "despesas=warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    // A subscriber may already be installed (e.g. by tests).
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
