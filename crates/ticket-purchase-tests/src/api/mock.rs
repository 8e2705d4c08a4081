//! Mock API implementation directly using the `ticket-purchase-service` crate

use std::sync::Arc;

use ticket_purchase_core::TicketService;
use tokio::task::{self, JoinHandle};
use tracing::debug;

use super::{Api, RequestMsg, Response};

pub struct MockService<T> {
    service: Arc<T>,
    join_handles: Vec<JoinHandle<()>>,
}

pub fn start<T>(threads: u16, service: T) -> (MockService<T>, Api)
where
    T: TicketService + Send + Sync + 'static,
{
    let service = Arc::new(service);

    let it = (0..threads as usize).map(|worker| {
        let (sender, receiver) = flume::bounded::<RequestMsg>(65536);
        let service = service.clone();
        let handle = task::spawn_blocking(move || {
            let service = &*service;
            for msg in receiver.into_iter() {
                debug!(worker, account_id = ?msg.account_id, "handling purchase");
                let result = service.purchase_tickets(msg.account_id, &msg.requests);
                // The test may have stopped waiting for the answer.
                let _ = msg.response_channel.send(Response { worker, result });
            }
        });
        (sender, handle)
    });
    let (senders, join_handles) = it.unzip();

    let mock_service = MockService {
        service,
        join_handles,
    };
    (mock_service, Api::new(senders))
}

impl<T> MockService<T> {
    pub fn service(&self) -> &T {
        &self.service
    }

    pub async fn shutdown(self) {
        for handle in self.join_handles {
            handle.await.unwrap()
        }
    }
}
