//! Purchase rules and the totals they are based on
//!
//! All functions only look at the sums across all requests, so the order of
//! the requests and how they are split up does not matter.

use ticket_purchase_core::{Config, PurchaseRejected, TicketType, TicketTypeRequest};

/// Sum of the quantities of all requests of type `ticket_type`
pub fn total_of_type(requests: &[TicketTypeRequest], ticket_type: TicketType) -> u64 {
    requests
        .iter()
        .filter(|r| r.ticket_type() == ticket_type)
        .map(|r| u64::from(r.quantity()))
        .sum()
}

/// Total number of tickets across all requests
pub fn total_tickets(requests: &[TicketTypeRequest]) -> u64 {
    requests.iter().map(|r| u64::from(r.quantity())).sum()
}

/// Whether at least one adult ticket is requested
pub fn has_adult_ticket(requests: &[TicketTypeRequest]) -> bool {
    requests
        .iter()
        .any(|r| r.ticket_type() == TicketType::Adult && r.quantity() > 0)
}

/// Whether every infant can sit on the lap of a different adult
pub fn enough_adults_for_infants(requests: &[TicketTypeRequest]) -> bool {
    total_of_type(requests, TicketType::Adult) >= total_of_type(requests, TicketType::Infant)
}

/// Amount to pay for all requests
pub fn total_payment(requests: &[TicketTypeRequest]) -> u64 {
    requests
        .iter()
        .map(|r| r.ticket_type().price() * u64::from(r.quantity()))
        .sum()
}

/// Number of seats to reserve (infants do not get one)
pub fn total_seats(requests: &[TicketTypeRequest]) -> u64 {
    requests
        .iter()
        .filter(|r| r.ticket_type().occupies_seat())
        .map(|r| u64::from(r.quantity()))
        .sum()
}

/// Check a purchase against all rules
///
/// The rules are checked in a fixed order and the first violated one is
/// returned. On success, the validated account id is returned.
pub fn validate(
    config: &Config,
    account_id: Option<i64>,
    requests: &[TicketTypeRequest],
) -> Result<i64, PurchaseRejected> {
    let account_id = match account_id {
        Some(id) if id >= 1 => id,
        _ => return Err(PurchaseRejected::InvalidAccount),
    };
    if requests.is_empty() {
        return Err(PurchaseRejected::NoTicketRequests);
    }
    if !has_adult_ticket(requests) {
        return Err(PurchaseRejected::NoAdultTickets);
    }
    if !enough_adults_for_infants(requests) {
        return Err(PurchaseRejected::NotEnoughAdults);
    }
    if total_tickets(requests) > u64::from(config.max_tickets) {
        return Err(PurchaseRejected::TooManyTickets {
            max: config.max_tickets,
        });
    }
    Ok(account_id)
}
