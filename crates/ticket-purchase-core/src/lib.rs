//! 🏗 Infrastructure for purchasing tickets: ticket requests, errors and the
//! interfaces of the purchase service and its collaborators.
#![warn(missing_docs)]

mod error;
mod request;
mod service;

use serde::Deserialize;

pub use error::{CollaboratorError, ParseTicketError, PurchaseError, PurchaseRejected};
pub use request::{parse_ticket_lines, TicketType, TicketTypeRequest};
pub use service::{SeatReservationService, TicketPaymentService, TicketService};

/// Default maximum number of tickets in a single purchase
pub const MAX_TICKETS_PER_PURCHASE: u32 = 20;

/// Configuration of the ticket purchase service
#[derive(Clone, Copy, Deserialize, Debug)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    /// Maximum number of tickets (of all types) in a single purchase
    pub max_tickets: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_tickets: MAX_TICKETS_PER_PURCHASE,
        }
    }
}
