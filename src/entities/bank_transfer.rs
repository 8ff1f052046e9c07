// 💸 Bank Transfer Entity
//
// The transfer of an amount from one account to another, with a request date
// and an optional execution date.
//
// Invariants (checked once, before anything is assigned):
// - every field is present except the execution date
// - the execution date, when present, is at least 24h after the request date
// - the amount is strictly positive
// - origin and destination accounts are not equal (IBAN identity)

use super::iban::Iban;
use crate::error::{require, ValidationError, ValidationResult};
use chrono::{Duration, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum delay between request and execution
pub const MIN_EXECUTION_DELAY_HOURS: i64 = 24;

/// ISO-8601 local date-time, the same layout used on the wire
const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

// ============================================================================
// BANK TRANSFER
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "BankTransferParts")]
pub struct BankTransfer {
    amount: Decimal,
    request_date: NaiveDateTime,
    execution_date: Option<NaiveDateTime>,
    origin: Iban,
    destination: Iban,
}

impl BankTransfer {
    /// Create a transfer of `amount` from `origin` to `destination`
    ///
    /// Errors, in the order they are checked:
    /// - execution date less than 24h after the request date
    /// - origin and destination are the same account
    /// - amount is zero or negative
    pub fn new(
        amount: Decimal,
        request_date: NaiveDateTime,
        execution_date: Option<NaiveDateTime>,
        origin: Iban,
        destination: Iban,
    ) -> ValidationResult<Self> {
        BankTransferParts {
            amount: Some(amount),
            request_date: Some(request_date),
            execution_date,
            origin: Some(origin),
            destination: Some(destination),
        }
        .try_into()
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn request_date(&self) -> NaiveDateTime {
        self.request_date
    }

    /// Execution date, if the transfer has been scheduled
    pub fn execution_date(&self) -> Option<NaiveDateTime> {
        self.execution_date
    }

    pub fn origin(&self) -> &Iban {
        &self.origin
    }

    pub fn destination(&self) -> &Iban {
        &self.destination
    }
}

impl fmt::Display for BankTransfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let execution = match self.execution_date {
            Some(date) => date.format(DATE_FORMAT).to_string(),
            None => "null".to_string(),
        };
        write!(
            f,
            "{{amount={}, requestDate={}, executionDate={}, origin={}, destination={}}}",
            self.amount,
            self.request_date.format(DATE_FORMAT),
            execution,
            self.origin,
            self.destination
        )
    }
}

// ============================================================================
// VALIDATION
// ============================================================================

/// A transfer as it arrives from outside, with any field possibly missing
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankTransferParts {
    pub amount: Option<Decimal>,
    pub request_date: Option<NaiveDateTime>,
    pub execution_date: Option<NaiveDateTime>,
    pub origin: Option<Iban>,
    pub destination: Option<Iban>,
}

impl TryFrom<BankTransferParts> for BankTransfer {
    type Error = ValidationError;

    fn try_from(parts: BankTransferParts) -> ValidationResult<Self> {
        let request_date = check_dates(parts.request_date, parts.execution_date)?;
        let (origin, destination) = check_accounts(parts.origin, parts.destination)?;
        let amount = check_amount(parts.amount)?;

        Ok(BankTransfer {
            amount,
            request_date,
            execution_date: parts.execution_date,
            origin,
            destination,
        })
    }
}

fn check_dates(
    request: Option<NaiveDateTime>,
    execution: Option<NaiveDateTime>,
) -> ValidationResult<NaiveDateTime> {
    let request = require(request, "requestDate")?;
    if let Some(execution) = execution {
        // Past the representable range nothing can be late enough
        let too_soon = match request.checked_add_signed(Duration::hours(MIN_EXECUTION_DELAY_HOURS)) {
            Some(floor) => execution < floor,
            None => true,
        };
        if too_soon {
            return Err(ValidationError::invalid(
                "executionDate",
                "execution date must be at least 24h after request date",
            ));
        }
    }
    Ok(request)
}

fn check_accounts(
    origin: Option<Iban>,
    destination: Option<Iban>,
) -> ValidationResult<(Iban, Iban)> {
    let destination = require(destination, "destination")?;
    let origin = require(origin, "origin")?;
    if origin == destination {
        return Err(ValidationError::invalid(
            "destination",
            "accounts must not be equal",
        ));
    }
    Ok((origin, destination))
}

fn check_amount(amount: Option<Decimal>) -> ValidationResult<Decimal> {
    let amount = require(amount, "amount")?;
    if amount <= Decimal::ZERO {
        return Err(ValidationError::invalid("amount", "amount must be positive"));
    }
    Ok(amount)
}

// ============================================================================
// TESTS
// ============================================================================
