use anyhow::Result;
use clap::Parser;
use despesas::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
