use std::sync::Arc;
use std::thread;

use ticket_purchase_core::{Config, PurchaseRejected, TicketService};
use ticket_purchase_service::{PaymentLedger, SeatBook, SeatReservation};
use util::{adult, child, infant};

mod util;

#[test]
fn ledger_and_seat_book_record_purchases() {
    let service = ticket_purchase_service::launch(&Config::default(), PaymentLedger::new(), SeatBook::new());

    service
        .purchase_tickets(Some(1), &[infant(2), adult(2), child(3)])
        .unwrap();
    service.purchase_tickets(Some(1), &[adult(1)]).unwrap();
    service.purchase_tickets(Some(2), &[adult(1)]).unwrap();
    let err = service
        .purchase_tickets(Some(3), &[child(1)])
        .unwrap_err();
    assert_eq!(err.rejection(), Some(PurchaseRejected::NoAdultTickets));

    let ledger = service.payment_service();
    assert_eq!(ledger.charged(1), 90);
    assert_eq!(ledger.charged(2), 20);
    assert_eq!(ledger.charged(3), 0);
    assert_eq!(ledger.payments(), 3);

    let seats = service.seat_service();
    assert_eq!(seats.reserved(1), 6);
    assert_eq!(seats.reserved(2), 1);
    assert_eq!(seats.reserved(3), 0);
    assert_eq!(
        seats.reservations(),
        [
            SeatReservation {
                account_id: 1,
                seats: 5
            },
            SeatReservation {
                account_id: 1,
                seats: 1
            },
            SeatReservation {
                account_id: 2,
                seats: 1
            },
        ]
    );
}

#[test]
fn shared_collaborators_across_threads() {
    let ledger = Arc::new(PaymentLedger::new());
    let seats = Arc::new(SeatBook::new());
    let service = ticket_purchase_service::launch(&Config::default(), ledger.clone(), seats.clone());

    thread::scope(|s| {
        for _ in 0..8 {
            s.spawn(|| {
                for _ in 0..100 {
                    service.purchase_tickets(Some(9), &[adult(1), child(1)]).unwrap();
                }
            });
        }
    });

    assert_eq!(ledger.charged(9), 800 * 30);
    assert_eq!(ledger.payments(), 800);
    assert_eq!(seats.reserved(9), 1_600);
    assert_eq!(seats.reservations().len(), 800);
}
