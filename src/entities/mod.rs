// Entity Models - value objects for bank transfers
//
// Each entity:
// - is validated once, at construction, and immutable afterwards
// - defines identity explicitly (never derived memberwise)
// - deserializes through the same validation as its constructor

pub mod bban;
pub mod iban;
pub mod bank_transfer;

pub use bban::{Bban, BbanParts, MAX_ACCOUNT_LEN};
pub use iban::{Iban, IbanParts};
pub use bank_transfer::{BankTransfer, BankTransferParts, MIN_EXECUTION_DELAY_HOURS};
