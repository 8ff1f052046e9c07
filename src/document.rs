// 📄 Transfer Documents - JSON files in the API response shape
//
// Parsing goes through the entities' own validation, so a document either
// yields fully valid transfers or the first violation found. Nothing is stored.

use crate::entities::BankTransfer;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse a JSON array of transfers
pub fn parse_transfers(json: &str) -> Result<Vec<BankTransfer>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Load and validate transfers from a JSON file
pub fn load_transfers(path: &Path) -> Result<Vec<BankTransfer>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_transfers(&content).with_context(|| format!("Invalid transfer document {}", path.display()))
}
