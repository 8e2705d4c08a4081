//! Implementation of the ticket purchase

use ticket_purchase_core::{
    Config, PurchaseError, SeatReservationService, TicketPaymentService, TicketService,
    TicketTypeRequest,
};
use tracing::{debug, error, info, warn};

use crate::rules;

/// Validates purchases and hands valid ones to the payment gateway and the
/// seat booking system
pub struct TicketServiceImpl<P, S> {
    config: Config,
    payment: P,
    seats: S,
}

impl<P, S> TicketServiceImpl<P, S>
where
    P: TicketPaymentService,
    S: SeatReservationService,
{
    /// Create a new [`TicketServiceImpl`].
    pub fn new(config: Config, payment: P, seats: S) -> Self {
        Self {
            config,
            payment,
            seats,
        }
    }

    /// Get the configuration
    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the payment gateway
    #[inline]
    pub fn payment_service(&self) -> &P {
        &self.payment
    }

    /// Get the seat booking system
    #[inline]
    pub fn seat_service(&self) -> &S {
        &self.seats
    }
}

impl<P, S> TicketService for TicketServiceImpl<P, S>
where
    P: TicketPaymentService,
    S: SeatReservationService,
{
    fn purchase_tickets(
        &self,
        account_id: Option<i64>,
        requests: &[TicketTypeRequest],
    ) -> Result<(), PurchaseError> {
        let account_id = match rules::validate(&self.config, account_id, requests) {
            Ok(id) => id,
            Err(reason) => {
                warn!(?account_id, %reason, "purchase rejected");
                return Err(reason.into());
            }
        };

        let amount = rules::total_payment(requests);
        debug!(account_id, amount, "making payment");
        self.payment
            .make_payment(account_id, amount)
            .map_err(|e| {
                error!(account_id, amount, error = %e, "payment failed");
                PurchaseError::Payment(e)
            })?;

        // The payment is not reverted if the reservation fails.
        let seats = rules::total_seats(requests);
        debug!(account_id, seats, "reserving seats");
        self.seats.reserve_seat(account_id, seats).map_err(|e| {
            error!(account_id, seats, error = %e, "seat reservation failed after payment");
            PurchaseError::Reservation(e)
        })?;

        info!(account_id, amount, seats, "tickets purchased");
        Ok(())
    }
}
