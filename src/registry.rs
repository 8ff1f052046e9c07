// 📚 Transfer Registry - fixed, pre-populated set of transfers
//
// Seeded exactly once at startup, never mutated afterwards.
// Readers only ever get shared slices, so no locking is needed after init.

use crate::entities::{Bban, BankTransfer, Iban};
use crate::error::ValidationResult;
use chrono::{Duration, Local, NaiveDateTime};
use once_cell::sync::OnceCell;
use rust_decimal::Decimal;
use tracing::{debug, info};

// ============================================================================
// REGISTRY
// ============================================================================

/// Ordered, read-only sequence of transfers
///
/// "Last" is the first record in insertion order. It is NOT recomputed from
/// request dates.
#[derive(Debug, Clone)]
pub struct TransferRegistry {
    transfers: Vec<BankTransfer>,
}

impl TransferRegistry {
    /// Create registry with the two synthetic transfers, relative to `now`
    pub fn seeded(now: NaiveDateTime) -> ValidationResult<Self> {
        let mut registry = TransferRegistry {
            transfers: Vec::with_capacity(2),
        };
        registry.register_default_transfers(now)?;
        Ok(registry)
    }

    fn register_default_transfers(&mut self, now: NaiveDateTime) -> ValidationResult<()> {
        let first_request = now;
        let second_request = now - Duration::days(2);

        let origin = Iban::new("FR", "33", Bban::new("30002", "00550", "21345678936", "25")?)?;
        let destination = Iban::new("GB", "44", Bban::new("30001", "00551", "11345678936", "45")?)?;

        // 1. 1000.50, requested now
        self.transfers.push(BankTransfer::new(
            Decimal::new(100050, 2),
            first_request,
            Some(first_request + Duration::days(2)),
            origin.clone(),
            destination.clone(),
        )?);

        // 2. 2500.80, requested two days ago
        self.transfers.push(BankTransfer::new(
            Decimal::new(250080, 2),
            second_request,
            Some(second_request + Duration::days(2)),
            origin,
            destination,
        )?);

        Ok(())
    }

    /// Singleton slice holding the first-inserted transfer
    ///
    /// # Panics
    /// If the registry is empty. A seeded registry never is.
    pub fn last(&self) -> &[BankTransfer] {
        assert!(
            !self.transfers.is_empty(),
            "transfer registry must be seeded before it is queried"
        );
        debug!("Serving last transfer");
        &self.transfers[..1]
    }

    /// Every transfer, in insertion order
    pub fn all(&self) -> &[BankTransfer] {
        debug!(count = self.transfers.len(), "Serving all transfers");
        &self.transfers
    }

    pub fn count(&self) -> usize {
        self.transfers.len()
    }
}

// ============================================================================
// PROCESS-WIDE INSTANCE
// ============================================================================

static REGISTRY: OnceCell<TransferRegistry> = OnceCell::new();

/// Seed the process-wide registry (once) and return it
///
/// Concurrent callers block until the first one finishes seeding; every
/// later call returns the same instance.
pub fn init() -> ValidationResult<&'static TransferRegistry> {
    REGISTRY.get_or_try_init(|| {
        let registry = TransferRegistry::seeded(Local::now().naive_local())?;
        info!(count = registry.count(), "Transfer registry seeded");
        Ok(registry)
    })
}

/// The process-wide registry, if `init` has run
pub fn global() -> Option<&'static TransferRegistry> {
    REGISTRY.get()
}

// ============================================================================
// TESTS
// ============================================================================
