use thiserror::Error;

use crate::TicketType;

/// Error reported by a collaborator (payment gateway or seat reservation)
pub type CollaboratorError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Reason for rejecting a purchase
///
/// Only the first rule a purchase violates is reported.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Error)]
pub enum PurchaseRejected {
    /// The account id is missing or not positive
    #[error("Account id must be defined and be greater than 0")]
    InvalidAccount,
    /// The purchase does not contain any ticket requests
    #[error("At least one ticket request must be specified")]
    NoTicketRequests,
    /// No adult ticket with a positive quantity was requested
    #[error("Tickets can not be purchased without an adult ticket")]
    NoAdultTickets,
    /// More infants than adults were requested
    #[error("There are not enough adults for infants to sit on")]
    NotEnoughAdults,
    /// The purchase contains more tickets than allowed
    #[error("Number of tickets to purchase exceeds {max}")]
    TooManyTickets {
        /// Maximum number of tickets per purchase
        max: u32,
    },
}

/// Error returned by [`TicketService::purchase_tickets()`][crate::TicketService::purchase_tickets]
///
/// Collaborator errors are passed through as they are.
#[derive(Debug, Error)]
pub enum PurchaseError {
    /// The purchase violates a purchase rule
    #[error(transparent)]
    Rejected(#[from] PurchaseRejected),
    /// The payment gateway failed
    #[error(transparent)]
    Payment(CollaboratorError),
    /// The seat reservation failed (the payment has already been made)
    #[error(transparent)]
    Reservation(CollaboratorError),
}

impl PurchaseError {
    /// Get the rejection reason if the purchase was rejected by a rule
    pub fn rejection(&self) -> Option<PurchaseRejected> {
        match self {
            PurchaseError::Rejected(reason) => Some(*reason),
            _ => None,
        }
    }
}

/// Error parsing a ticket line
#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum ParseTicketError {
    /// The line is empty
    #[error("empty ticket line")]
    Empty,
    /// The ticket type is not known
    #[error("unknown ticket type `{0}`")]
    UnknownType(String),
    /// The line ends after the ticket type
    #[error("missing quantity for {0} tickets")]
    MissingQuantity(TicketType),
    /// The quantity is not a non-negative integer
    #[error("invalid ticket quantity `{0}`")]
    InvalidQuantity(String),
    /// There is something after the quantity
    #[error("unexpected `{0}` after ticket quantity")]
    TrailingInput(String),
}
