// 🏦 BBAN Entity - Basic Bank Account Number
//
// Domestic account identifier: bank / counter / account / key codes.
//
// Identity is (bank, account). Counter and key are carried along but do NOT
// take part in equality or hashing.

use crate::error::{require, ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Longest account number a BBAN may carry, in characters
pub const MAX_ACCOUNT_LEN: usize = 11;

// ============================================================================
// BBAN
// ============================================================================

/// Basic Bank Account Number
///
/// Invariants:
/// - every field is present
/// - the account number is at most 11 characters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "BbanParts")]
pub struct Bban {
    bank: String,
    counter: String,
    account: String,
    key: String,
}

impl Bban {
    /// Create a BBAN from bank code, counter code, account number and key
    pub fn new(
        bank: impl Into<String>,
        counter: impl Into<String>,
        account: impl Into<String>,
        key: impl Into<String>,
    ) -> ValidationResult<Self> {
        BbanParts {
            bank: Some(bank.into()),
            counter: Some(counter.into()),
            account: Some(account.into()),
            key: Some(key.into()),
        }
        .try_into()
    }

    pub fn bank(&self) -> &str {
        &self.bank
    }

    pub fn counter(&self) -> &str {
        &self.counter
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Identity key: (bank, account)
    fn identity(&self) -> (&str, &str) {
        (&self.bank, &self.account)
    }
}

impl PartialEq for Bban {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for Bban {}

impl Hash for Bban {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl fmt::Display for Bban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{bank={}, counter={}, account={}, key={}}}",
            self.bank, self.counter, self.account, self.key
        )
    }
}

// ============================================================================
// UNVALIDATED PARTS (deserialization boundary)
// ============================================================================

/// A BBAN as it arrives from outside, with any field possibly missing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BbanParts {
    pub bank: Option<String>,
    pub counter: Option<String>,
    pub account: Option<String>,
    pub key: Option<String>,
}

impl TryFrom<BbanParts> for Bban {
    type Error = ValidationError;

    fn try_from(parts: BbanParts) -> ValidationResult<Self> {
        let bank = require(parts.bank, "bank")?;
        let counter = require(parts.counter, "counter")?;
        let account = require(parts.account, "account")?;
        if account.chars().count() > MAX_ACCOUNT_LEN {
            return Err(ValidationError::invalid(
                "account",
                "account must not exceed 11 chars",
            ));
        }
        let key = require(parts.key, "key")?;

        Ok(Bban {
            bank,
            counter,
            account,
            key,
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
