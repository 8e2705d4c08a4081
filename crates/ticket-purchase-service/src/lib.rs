//! :ticket: Implementation of the ticket purchase service.
//!
//! The [purchase rules][rules] decide whether a purchase is valid and what it
//! costs. The [`TicketServiceImpl`] applies them and talks to the payment
//! gateway and the seat booking system. [`PaymentLedger`] and [`SeatBook`]
//! are in-memory stand-ins for these two collaborators.

use ticket_purchase_core::{Config, SeatReservationService, TicketPaymentService};

mod ledger;
mod purchase;
pub mod rules;
mod seat_book;

pub use ledger::PaymentLedger;
pub use purchase::TicketServiceImpl;
pub use seat_book::{SeatBook, SeatReservation};

/// Entrypoint of the purchase service
///
/// Builds a [`TicketServiceImpl`] that uses `payment` and `seats` as
/// collaborators.
pub fn launch<P, S>(config: &Config, payment: P, seats: S) -> TicketServiceImpl<P, S>
where
    P: TicketPaymentService,
    S: SeatReservationService,
{
    TicketServiceImpl::new(*config, payment, seats)
}
