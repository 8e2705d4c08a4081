use eyre::{eyre, Result};
use ticket_purchase_core::Config;
use ticket_purchase_service::TicketServiceImpl;

mod api;
mod collaborators;
pub use api::{Api, ApiResponse};
pub use collaborators::{
    Call, CallLog, RecordingPaymentService, RecordingSeatService, Unavailable,
};

/// Purchase service under test
pub type Service = TicketServiceImpl<RecordingPaymentService, RecordingSeatService>;

pub struct TestCtxBuilder {
    /// Maximum number of tickets per purchase
    pub max_tickets: u32,
    /// Count of worker threads processing purchases
    pub worker_threads: u16,
    /// Whether the payment gateway rejects every payment
    pub failing_payment: bool,
    /// Whether the seat booking rejects every reservation
    pub failing_reservation: bool,
}

impl TestCtxBuilder {
    /// Create a new test context builder initialized with environment defaults
    pub fn from_env() -> Result<Self> {
        let worker_threads = match std::env::var("TP_WORKER_THREADS") {
            Ok(v) => v
                .parse()
                .map_err(|e| eyre!("TP_WORKER_THREADS must be a decimal u16: {e}"))?,
            Err(std::env::VarError::NotPresent) => 2,
            Err(e) => return Err(e.into()),
        };
        if worker_threads == 0 {
            return Err(eyre!("TP_WORKER_THREADS must not be 0"));
        }

        Ok(TestCtxBuilder {
            max_tickets: Config::default().max_tickets,
            worker_threads,
            failing_payment: false,
            failing_reservation: false,
        })
    }

    /// Set the maximum number of tickets per purchase
    pub fn with_max_tickets(mut self, max_tickets: u32) -> Self {
        self.max_tickets = max_tickets;
        self
    }

    /// Set the number of worker threads to use
    pub fn with_worker_threads(mut self, threads: u16) -> Self {
        assert_ne!(threads, 0);
        self.worker_threads = threads;
        self
    }

    /// Let every payment fail
    pub fn with_failing_payment(mut self) -> Self {
        self.failing_payment = true;
        self
    }

    /// Let every seat reservation fail
    pub fn with_failing_reservation(mut self) -> Self {
        self.failing_reservation = true;
        self
    }

    /// Get the [`ticket_purchase_core::Config`] for launching the purchase service
    fn config(&self) -> Config {
        Config {
            max_tickets: self.max_tickets,
        }
    }

    /// Build the test context
    pub async fn build(self) -> Result<TestCtx> {
        let calls = CallLog::default();
        let payment = RecordingPaymentService::new(calls.clone(), self.failing_payment);
        let seats = RecordingSeatService::new(calls.clone(), self.failing_reservation);
        let service = ticket_purchase_service::launch(&self.config(), payment, seats);

        let (mock, api) = api::mock::start(self.worker_threads, service);

        Ok(TestCtx {
            api,
            calls,
            mock,
            max_tickets: self.max_tickets,
            worker_threads: self.worker_threads,
            drop_bomb: DropBomb,
        })
    }
}

/// Test context
pub struct TestCtx {
    /// API allowing to interact with the purchase service
    pub api: Api,
    /// Calls the purchase service made to its collaborators
    pub calls: CallLog,
    mock: api::mock::MockService<Service>,
    /// Maximum number of tickets per purchase
    pub max_tickets: u32,
    /// Number of worker threads
    pub worker_threads: u16,

    drop_bomb: DropBomb,
}

impl TestCtx {
    /// Get the purchase service under test
    pub fn service(&self) -> &Service {
        self.mock.service()
    }

    /// Shut down the worker threads and finish the test
    pub async fn finish(self) {
        std::mem::forget(self.drop_bomb);
        drop(self.api);
        self.mock.shutdown().await;
    }
}

struct DropBomb;

impl Drop for DropBomb {
    fn drop(&mut self) {
        eprintln!("@TestAuthor: You should call `ctx.finish().await` to shut the purchase service down");
    }
}
