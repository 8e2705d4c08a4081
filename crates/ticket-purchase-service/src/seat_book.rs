//! In-memory seat booking system

use parking_lot::Mutex;
use ticket_purchase_core::{CollaboratorError, SeatReservationService};

/// A single seat reservation
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SeatReservation {
    /// Account the seats are reserved for
    pub account_id: i64,
    /// Number of reserved seats
    pub seats: u64,
}

/// Seat booking system that records reservations in the order they arrive
#[derive(Default)]
pub struct SeatBook {
    reservations: Mutex<Vec<SeatReservation>>,
}

impl SeatBook {
    /// Create a new [`SeatBook`] without reservations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of seats reserved for `account_id`.
    pub fn reserved(&self, account_id: i64) -> u64 {
        self.reservations
            .lock()
            .iter()
            .filter(|r| r.account_id == account_id)
            .map(|r| r.seats)
            .sum()
    }

    /// Get a snapshot of all reservations.
    pub fn reservations(&self) -> Vec<SeatReservation> {
        self.reservations.lock().clone()
    }
}

impl SeatReservationService for SeatBook {
    fn reserve_seat(&self, account_id: i64, seats: u64) -> Result<(), CollaboratorError> {
        self.reservations
            .lock()
            .push(SeatReservation { account_id, seats });
        Ok(())
    }
}
