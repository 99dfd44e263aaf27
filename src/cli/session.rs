use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::render::{write_balance, write_expense_line, write_view};
use crate::application::{ExpenseTracker, LedgerView, NewExpense};
use crate::domain::ExpenseId;
use crate::io::{export_view, ExportFormat};

/// Settings that shape how a session renders.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub currency_symbol: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "R$".to_string(),
        }
    }
}

// One command line inside a session.
#[derive(Parser)]
#[command(name = "despesas", no_binary_name = true)]
#[command(about = "Expense tracker commands")]
struct SessionLine {
    #[command(subcommand)]
    command: SessionCommand,
}

#[derive(Subcommand)]
enum SessionCommand {
    /// Add an expense
    Add {
        /// What the money was spent on
        description: String,

        /// Amount (e.g., "50.00", "50" or "50,00")
        #[arg(allow_negative_numbers = true)]
        amount: String,

        /// Category (e.g., "Comida", "Lazer")
        #[arg(short, long)]
        category: String,
    },

    /// Remove an expense by id
    Remove {
        /// Expense id as shown by `list`
        id: ExpenseId,
    },

    /// Show only one category (omit to show all)
    Filter {
        /// Category name, or "Todas" for every category
        category: Option<String>,
    },

    /// List the visible expenses and their balance
    List,

    /// Show the balance of the visible expenses
    Total,

    /// List the categories available for filtering
    Categories,

    /// Export the visible expenses to CSV or JSON
    Export {
        /// Format: csv, json
        format: String,

        /// Output file (session output if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// A line-oriented session driving an [`ExpenseTracker`].
///
/// Each command runs to completion before the next line is read. Mistakes in
/// a line (bad syntax, invalid expense) are reported on the output and the
/// session goes on; only I/O failures end it early.
pub struct Session {
    tracker: ExpenseTracker,
    config: SessionConfig,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            tracker: ExpenseTracker::new(),
            config,
        }
    }

    pub fn tracker(&self) -> &ExpenseTracker {
        &self.tracker
    }

    /// Read commands from `input` until it ends or a `quit` is seen.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<()> {
        for line in input.lines() {
            let line = line.context("Failed to read session input")?;
            if self.execute(&line, &mut out)? == LoopControl::Exit {
                break;
            }
        }
        out.flush()?;
        Ok(())
    }

    /// Execute a single command line.
    pub fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> Result<LoopControl> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(LoopControl::Continue);
        }
        debug!(line = trimmed, "executing");

        let words = match shell_words::split(trimmed) {
            Ok(words) => words,
            Err(err) => {
                warn!(%err, "unparsable line");
                writeln!(out, "error: {}", err)?;
                return Ok(LoopControl::Continue);
            }
        };

        let command = match SessionLine::try_parse_from(words) {
            Ok(parsed) => parsed.command,
            Err(err) => {
                if !matches!(
                    err.kind(),
                    ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
                ) {
                    warn!(kind = ?err.kind(), "invalid command");
                }
                write!(out, "{}", err)?;
                return Ok(LoopControl::Continue);
            }
        };

        self.dispatch(command, out)
    }

    fn dispatch<W: Write>(&mut self, command: SessionCommand, out: &mut W) -> Result<LoopControl> {
        let symbol = self.config.currency_symbol.as_str();

        match command {
            SessionCommand::Add {
                description,
                amount,
                category,
            } => match self
                .tracker
                .add_expense(NewExpense::new(description, amount, category))
            {
                Ok(expense) => write_expense_line(out, "Added", &expense, symbol)?,
                Err(err) => {
                    warn!(%err, "expense rejected");
                    writeln!(out, "error: {}", err)?;
                }
            },

            SessionCommand::Remove { id } => match self.tracker.remove_expense(id) {
                Ok(expense) => write_expense_line(out, "Removed", &expense, symbol)?,
                Err(err) => writeln!(out, "error: {}", err)?,
            },

            SessionCommand::Filter { category } => {
                self.tracker.set_filter(category.as_deref().unwrap_or(""));
                writeln!(out, "Filter: {}", self.tracker.filter())?;
            }

            SessionCommand::List => write_view(out, &self.tracker.view(), symbol)?,

            SessionCommand::Total => write_balance(out, &self.tracker.balance(), symbol)?,

            SessionCommand::Categories => {
                for category in self.tracker.categories() {
                    writeln!(out, "{}", category)?;
                }
            }

            SessionCommand::Export { format, output } => {
                let format: ExportFormat = match format.parse() {
                    Ok(format) => format,
                    Err(err) => {
                        writeln!(out, "error: {}", err)?;
                        return Ok(LoopControl::Continue);
                    }
                };
                let view = self.tracker.view();

                match output {
                    Some(path) => match export_to_file(&view, format, &path) {
                        Ok(count) => writeln!(
                            out,
                            "Exported {} expense(s) as {} to {}",
                            count,
                            format,
                            path.display()
                        )?,
                        Err(err) => {
                            warn!(path = %path.display(), "export failed");
                            writeln!(out, "error: {:#}", err)?;
                        }
                    },
                    None => {
                        export_view(&view, format, &mut *out)?;
                    }
                }
            }

            SessionCommand::Quit => return Ok(LoopControl::Exit),
        }

        Ok(LoopControl::Continue)
    }
}

/// Export target failures are the user's to fix; they never end the session.
fn export_to_file(view: &LedgerView, format: ExportFormat, path: &Path) -> Result<usize> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    export_view(view, format, BufWriter::new(file))
        .with_context(|| format!("Failed to write output file: {}", path.display()))
}
