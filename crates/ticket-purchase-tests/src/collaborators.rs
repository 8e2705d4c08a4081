//! Collaborators recording every call they receive

use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;
use ticket_purchase_core::{CollaboratorError, SeatReservationService, TicketPaymentService};

/// Error returned by a collaborator configured to fail
#[derive(Debug, Error)]
#[error("{0} is unavailable")]
pub struct Unavailable(pub &'static str);

/// A call to one of the collaborators
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Call {
    Payment { account_id: i64, amount: u64 },
    Reservation { account_id: i64, seats: u64 },
}

/// Calls to both collaborators in the order they were made
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<Call>>>);

impl CallLog {
    fn push(&self, call: Call) {
        self.0.lock().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.lock().clone()
    }

    pub fn payments(&self) -> Vec<(i64, u64)> {
        self.0
            .lock()
            .iter()
            .filter_map(|call| match *call {
                Call::Payment { account_id, amount } => Some((account_id, amount)),
                _ => None,
            })
            .collect()
    }

    pub fn reservations(&self) -> Vec<(i64, u64)> {
        self.0
            .lock()
            .iter()
            .filter_map(|call| match *call {
                Call::Reservation { account_id, seats } => Some((account_id, seats)),
                _ => None,
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.lock().is_empty()
    }
}

pub struct RecordingPaymentService {
    log: CallLog,
    fail: bool,
}

impl RecordingPaymentService {
    pub fn new(log: CallLog, fail: bool) -> Self {
        Self { log, fail }
    }
}

impl TicketPaymentService for RecordingPaymentService {
    fn make_payment(&self, account_id: i64, amount: u64) -> Result<(), CollaboratorError> {
        self.log.push(Call::Payment { account_id, amount });
        if self.fail {
            return Err(Unavailable("payment gateway").into());
        }
        Ok(())
    }
}

pub struct RecordingSeatService {
    log: CallLog,
    fail: bool,
}

impl RecordingSeatService {
    pub fn new(log: CallLog, fail: bool) -> Self {
        Self { log, fail }
    }
}

impl SeatReservationService for RecordingSeatService {
    fn reserve_seat(&self, account_id: i64, seats: u64) -> Result<(), CollaboratorError> {
        self.log.push(Call::Reservation { account_id, seats });
        if self.fail {
            return Err(Unavailable("seat booking").into());
        }
        Ok(())
    }
}
