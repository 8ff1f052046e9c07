use anyhow::{bail, Result};
use std::env;
use std::path::Path;
use tracing::info;

// Use library instead of local modules
use bank_transfers::{init_cli_logging, load_transfers, registry, AppConfig, BankTransfer};

fn main() -> Result<()> {
    let config = AppConfig::from_env()?;
    init_cli_logging(&config);

    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        None | Some("last") => run_query(false)?,
        Some("all") => run_query(true)?,
        Some("check") => match args.get(2) {
            Some(path) => run_check(Path::new(path))?,
            None => bail!("Usage: bank-transfers check <transfers.json>"),
        },
        Some(other) => bail!("Unknown command: {} (expected last, all or check)", other),
    }

    Ok(())
}

fn run_query(all: bool) -> Result<()> {
    let registry = registry::init()?;
    let transfers = if all { registry.all() } else { registry.last() };

    println!("🏦 Bank Transfers v{}", bank_transfers::VERSION);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for transfer in transfers {
        print_transfer(transfer);
    }

    Ok(())
}

fn print_transfer(transfer: &BankTransfer) {
    println!("\n{}", transfer);
    println!(
        "   {} → {}",
        transfer.origin().paper_format(),
        transfer.destination().paper_format()
    );
}

fn run_check(path: &Path) -> Result<()> {
    info!("Checking transfer document {}", path.display());

    let transfers = load_transfers(path)?;
    println!("✓ {} valid transfer(s) in {}", transfers.len(), path.display());

    Ok(())
}
