// 🌍 IBAN Entity - International Bank Account Number
//
// Country code + check key + BBAN.
// Identity is the BBAN alone: country and key are excluded from equality.

use super::bban::{Bban, BbanParts};
use crate::error::{require, ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// International Bank Account Number
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "IbanParts")]
pub struct Iban {
    country: String,
    key: String,
    bban: Bban,
}

impl Iban {
    /// Create an IBAN from country code, IBAN key and BBAN
    pub fn new(
        country: impl Into<String>,
        key: impl Into<String>,
        bban: Bban,
    ) -> ValidationResult<Self> {
        Ok(Iban {
            country: country.into(),
            key: key.into(),
            bban,
        })
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn bban(&self) -> &Bban {
        &self.bban
    }

    /// Compact form used for display in clients
    ///
    /// Example: "FR3330002005502134567893625"
    pub fn electronic_format(&self) -> String {
        self.format_with("")
    }

    /// Human-readable form, parts separated by spaces
    ///
    /// Example: "FR33 30002 00550 21345678936 25"
    pub fn paper_format(&self) -> String {
        self.format_with(" ")
    }

    fn format_with(&self, separator: &str) -> String {
        let bban = &self.bban;
        let prefix = format!("{}{}", self.country, self.key);
        [
            prefix.as_str(),
            bban.bank(),
            bban.counter(),
            bban.account(),
            bban.key(),
        ]
        .join(separator)
    }
}

impl PartialEq for Iban {
    fn eq(&self, other: &Self) -> bool {
        self.bban == other.bban
    }
}

impl Eq for Iban {}

impl Hash for Iban {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bban.hash(state);
    }
}

impl fmt::Display for Iban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{country={}, key={}, bban={}}}",
            self.country, self.key, self.bban
        )
    }
}

/// An IBAN as it arrives from outside
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IbanParts {
    pub country: Option<String>,
    pub key: Option<String>,
    pub bban: Option<BbanParts>,
}

impl TryFrom<IbanParts> for Iban {
    type Error = ValidationError;

    fn try_from(parts: IbanParts) -> ValidationResult<Self> {
        let country = require(parts.country, "country")?;
        let key = require(parts.key, "key")?;
        let bban = require(parts.bban, "bban")?.try_into()?;
        Ok(Iban { country, key, bban })
    }
}
