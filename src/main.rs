use std::io;

use anyhow::Result;
use clap::Parser;

use teller::cli::Session;
use teller::config::{init_logging, Settings};
use teller::storage::AccountRepository;

#[derive(Parser)]
#[command(
    name = "teller",
    version,
    about = "Interactive single-process banking ledger",
    long_about = "Teller opens customer accounts, takes deposits and withdrawals, \
                  and prints account statements from an interactive console. \
                  Accounts live in memory and are gone when the program exits."
)]
struct Cli {
    #[command(flatten)]
    settings: Settings,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.settings)?;

    let repository = AccountRepository::new();
    let stdin = io::stdin();
    let stdout = io::stdout();

    Session::new(stdin.lock(), stdout.lock(), &repository, &cli.settings).run()?;

    Ok(())
}
