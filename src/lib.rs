// Bank Transfers - Core Library
// Exposes all modules for use in CLI, API server, and tests

pub mod error;
pub mod entities;
pub mod registry;
pub mod document;
pub mod config;
pub mod logging;

#[cfg(feature = "server")]
pub mod api;

// Re-export commonly used types
pub use error::{ValidationError, ValidationResult};
pub use entities::{
    Bban, BbanParts, Iban, IbanParts, BankTransfer, BankTransferParts,
    MAX_ACCOUNT_LEN, MIN_EXECUTION_DELAY_HOURS,
};
pub use registry::TransferRegistry;
pub use document::{load_transfers, parse_transfers};
pub use config::AppConfig;
pub use logging::{init_cli_logging, init_logging};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
