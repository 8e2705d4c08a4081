use std::sync::Arc;

use crate::error::{CollaboratorError, PurchaseError};
use crate::TicketTypeRequest;

/// Interface of the payment gateway
pub trait TicketPaymentService {
    /// Charge `amount` to the account `account_id`
    ///
    /// This method may be called concurrently from different threads.
    fn make_payment(&self, account_id: i64, amount: u64) -> Result<(), CollaboratorError>;
}

/// Interface of the seat booking system
pub trait SeatReservationService {
    /// Reserve `seats` seats for the account `account_id`
    ///
    /// This method may be called concurrently from different threads.
    fn reserve_seat(&self, account_id: i64, seats: u64) -> Result<(), CollaboratorError>;
}

/// Interface for purchasing tickets
pub trait TicketService {
    /// Purchase the requested tickets for the account `account_id`
    ///
    /// The purchase is validated first. Only if it is valid, the payment is
    /// made and afterwards the seats are reserved. Nothing is undone if the
    /// seat reservation fails.
    fn purchase_tickets(
        &self,
        account_id: Option<i64>,
        requests: &[TicketTypeRequest],
    ) -> Result<(), PurchaseError>;
}

macro_rules! forward_impls {
    ($($ptr:ty),*) => {$(
        impl<T: TicketPaymentService + ?Sized> TicketPaymentService for $ptr {
            #[inline]
            fn make_payment(&self, account_id: i64, amount: u64) -> Result<(), CollaboratorError> {
                (**self).make_payment(account_id, amount)
            }
        }

        impl<T: SeatReservationService + ?Sized> SeatReservationService for $ptr {
            #[inline]
            fn reserve_seat(&self, account_id: i64, seats: u64) -> Result<(), CollaboratorError> {
                (**self).reserve_seat(account_id, seats)
            }
        }

        impl<T: TicketService + ?Sized> TicketService for $ptr {
            #[inline]
            fn purchase_tickets(
                &self,
                account_id: Option<i64>,
                requests: &[TicketTypeRequest],
            ) -> Result<(), PurchaseError> {
                (**self).purchase_tickets(account_id, requests)
            }
        }
    )*};
}

forward_impls!(&T, Box<T>, Arc<T>);
