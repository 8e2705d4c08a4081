//! In-memory payment gateway

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use ticket_purchase_core::{CollaboratorError, TicketPaymentService};

/// Payment gateway that keeps track of the amount charged per account
#[derive(Default)]
pub struct PaymentLedger {
    /// Map from account id to the total amount charged
    charged: DashMap<i64, u64>,
    /// Number of payments made so far
    payments: AtomicU64,
}

impl PaymentLedger {
    /// Create a new, empty [`PaymentLedger`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the total amount charged to `account_id`.
    pub fn charged(&self, account_id: i64) -> u64 {
        self.charged.get(&account_id).map_or(0, |amount| *amount)
    }

    /// Get the number of payments made.
    pub fn payments(&self) -> u64 {
        self.payments.load(Ordering::Relaxed)
    }
}

impl TicketPaymentService for PaymentLedger {
    fn make_payment(&self, account_id: i64, amount: u64) -> Result<(), CollaboratorError> {
        let mut total = self.charged.entry(account_id).or_insert(0);
        *total = total
            .checked_add(amount)
            .ok_or_else(|| format!("amount charged to account {account_id} overflows"))?;
        self.payments.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}
