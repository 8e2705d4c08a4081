use std::sync::Arc;

use eyre::Result;
use flume::Sender;
use ticket_purchase_core::{PurchaseError, PurchaseRejected, TicketTypeRequest};
use tokio::sync::oneshot;

pub mod mock;

struct RequestMsg {
    account_id: Option<i64>,
    requests: Vec<TicketTypeRequest>,
    response_channel: oneshot::Sender<Response>,
}

struct Response {
    worker: usize,
    result: Result<(), PurchaseError>,
}

pub struct Api {
    /// One channel per worker thread
    channels: Arc<Vec<Sender<RequestMsg>>>,

    my_channel: Sender<RequestMsg>,
    my_index: usize,
}

impl Api {
    fn new(channels: Vec<Sender<RequestMsg>>) -> Self {
        let my_channel = channels[0].clone();
        Self {
            channels: Arc::new(channels),
            my_channel,
            my_index: 0,
        }
    }
}

impl Clone for Api {
    fn clone(&self) -> Self {
        let my_index = (self.my_index + 1) % self.channels.len();
        Self {
            channels: self.channels.clone(),
            my_channel: self.channels[my_index].clone(),
            my_index,
        }
    }
}

impl Api {
    /// Purchase `requests` for `account_id` on one of the worker threads
    pub async fn purchase(
        &self,
        account_id: Option<i64>,
        requests: &[TicketTypeRequest],
    ) -> Result<ApiResponse> {
        let (sender, receiver) = oneshot::channel();
        let msg = RequestMsg {
            account_id,
            requests: requests.to_vec(),
            response_channel: sender,
        };
        self.my_channel.send_async(msg).await?;
        let Response { worker, result } = receiver.await?;
        Ok(ApiResponse { worker, result })
    }

    /// Index of the worker thread this handle sends its purchases to
    pub fn worker(&self) -> usize {
        self.my_index
    }
}

pub struct ApiResponse {
    /// Index of the worker thread that processed the purchase
    pub worker: usize,
    pub result: Result<(), PurchaseError>,
}

impl ApiResponse {
    /// Get the rejection reason, failing if the purchase was not rejected
    pub fn rejected(self) -> Result<PurchaseRejected> {
        match self.result {
            Ok(()) => Err(eyre::eyre!(
                "Purchase succeeded when it shall have been rejected."
            )),
            Err(PurchaseError::Rejected(reason)) => Ok(reason),
            Err(e) => Err(eyre::eyre!("Purchase failed in a collaborator: {e}")),
        }
    }
}
