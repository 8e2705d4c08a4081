//! Server exposing the ticket purchase service over HTTP

#![warn(missing_docs)]

mod http;

use std::error::Error;
use std::thread;

use ticket_purchase_core::Config;
use ticket_purchase_service::{PaymentLedger, SeatBook, TicketServiceImpl};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Purchase service as served by this binary
pub type Service = TicketServiceImpl<PaymentLedger, SeatBook>;

/// Command line options
#[derive(Debug)]
struct Opts {
    /// Configuration of the purchase service
    config: Config,

    /// Port for the HTTP server to listen on
    port: u16,
    /// Host for the HTTP server to listen on
    host: String,
    /// Number of HTTP worker threads
    threads: u32,
}

fn exit_with(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

impl Opts {
    fn from_args() -> Self {
        let mut opts = Opts {
            port: 8686,
            host: String::from("127.0.0.1"),
            config: Config::default(),
            threads: 8,
        };
        let mut max_tickets = None;

        let mut option: Option<String> = None;
        for arg in std::env::args().skip(1) {
            if let Some(opt) = option {
                match opt.as_str() {
                    "-port" => {
                        opts.port = arg
                            .parse()
                            .unwrap_or_else(|_| exit_with("-port takes a decimal u16"))
                    }
                    "-host" => opts.host = arg,
                    "-threads" => {
                        opts.threads = arg
                            .parse()
                            .unwrap_or_else(|_| exit_with("-threads takes a decimal u32"))
                    }
                    "-max-tickets" => {
                        max_tickets = Some(
                            arg.parse()
                                .unwrap_or_else(|_| exit_with("-max-tickets takes a decimal u32")),
                        )
                    }
                    "-config" => {
                        opts.config = load_config(&arg).unwrap_or_else(|e| {
                            exit_with(format_args!("could not load config {arg}: {e}"))
                        })
                    }
                    _ => exit_with(format_args!("ignoring unknown option {opt}")),
                }
                option = None;
            } else {
                option = Some(arg);
            }
        }
        if let Some(opt) = option {
            exit_with(format_args!("ignoring leftover option {opt}"));
        }
        if let Some(max_tickets) = max_tickets {
            opts.config.max_tickets = max_tickets;
        }

        opts
    }
}

/// Read a [`Config`] from the TOML file at `path`
fn load_config(path: &str) -> Result<Config, Box<dyn Error + Send + Sync>> {
    let contents = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

fn http_loop(server: &tiny_http::Server, service: &Service) {
    loop {
        match server.recv() {
            Ok(rq) => http::handle(rq, service),
            Err(e) => {
                tracing::error!(error = %e, "HTTP receive failed");
                return;
            }
        }
    }
}

fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let opts = Opts::from_args();

    let server = tiny_http::Server::http((opts.host.as_str(), opts.port))?;
    let service = ticket_purchase_service::launch(&opts.config, PaymentLedger::new(), SeatBook::new());
    info!(host = %opts.host, port = opts.port, config = ?opts.config, "listening");

    thread::scope(|s| {
        for i in 0..opts.threads {
            let spawned = thread::Builder::new()
                .name(format!("http_{i}"))
                .spawn_scoped(s, || http_loop(&server, &service));
            if let Err(e) = spawned {
                tracing::error!(error = %e, "could not spawn HTTP thread");
            }
        }
    });

    Ok(())
}
