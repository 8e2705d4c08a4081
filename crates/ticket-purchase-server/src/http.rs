//! 🏗 HTTP front end of the purchase service

use std::io::Read;

use ticket_purchase_core::{parse_ticket_lines, PurchaseError, TicketService};
use tiny_http::{Header, Method, Response};
use tracing::{info_span, warn};
use uuid::Uuid;

use crate::Service;

const HELP: &str = "🦀 could not find the service you are looking for!

Valid requests are:
  POST /api/purchase
  GET  /api/account/payments
  GET  /api/account/seats";

/// Largest request body accepted, far more than any valid purchase needs
const MAX_BODY_LEN: u64 = 64 * 1024;

/// Requests understood by the server
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Endpoint {
    Purchase,
    Payments,
    Seats,
}

/// Handle a single HTTP request
pub fn handle(mut rq: tiny_http::Request, service: &Service) {
    let request_id = Uuid::new_v4();
    let span = info_span!("request", id = %request_id, method = ?rq.method(), url = rq.url());
    let _guard = span.enter();

    let path = rq.url().split_once('?').map_or(rq.url(), |(path, _query)| path);
    let endpoint = match (rq.method(), path) {
        (Method::Options, _) => return respond(rq, Response::empty(204), request_id),
        (Method::Post, "/api/purchase") => Endpoint::Purchase,
        (Method::Get, "/api/account/payments") => Endpoint::Payments,
        (Method::Get, "/api/account/seats") => Endpoint::Seats,
        (Method::Get, _) | (Method::Post, _) => {
            let res = Response::from_string(HELP).with_status_code(404);
            return respond(rq, res, request_id);
        }
        _ => return respond(rq, Response::empty(405), request_id),
    };

    let account_id = rq
        .headers()
        .iter()
        .find(|hdr| hdr.field.equiv("x-account-id"))
        .and_then(|hdr| hdr.value.as_str().trim().parse::<i64>().ok());

    let res = match endpoint {
        Endpoint::Purchase => {
            let mut body = String::with_capacity(rq.body_length().unwrap_or(64).min(4096));
            let read = rq
                .as_reader()
                .take(MAX_BODY_LEN + 1)
                .read_to_string(&mut body);
            let err = match read {
                Err(e) => Some(format!("Could not read request body: {e}")),
                Ok(len) if len as u64 > MAX_BODY_LEN => {
                    Some(format!("Request body exceeds {MAX_BODY_LEN} bytes"))
                }
                Ok(_) => None,
            };
            if let Some(err) = err {
                return respond(rq, Response::from_string(err).with_status_code(400), request_id);
            }
            purchase(service, account_id, &body)
        }
        Endpoint::Payments | Endpoint::Seats => match account_id {
            None => Response::from_string("No account id provided!").with_status_code(400),
            Some(id) => {
                let value = if endpoint == Endpoint::Payments {
                    service.payment_service().charged(id)
                } else {
                    service.seat_service().reserved(id)
                };
                Response::from_string(value.to_string()).with_status_code(200)
            }
        },
    };
    respond(rq, res, request_id)
}

/// Parse the ticket lines in `body` and purchase them
fn purchase(
    service: &Service,
    account_id: Option<i64>,
    body: &str,
) -> Response<std::io::Cursor<Vec<u8>>> {
    let requests = match parse_ticket_lines(body) {
        Ok(requests) => requests,
        Err(e) => return Response::from_string(e.to_string()).with_status_code(400),
    };
    match service.purchase_tickets(account_id, &requests) {
        Ok(()) => Response::from_string("OK").with_status_code(200),
        Err(e @ PurchaseError::Rejected(_)) => {
            Response::from_string(e.to_string()).with_status_code(400)
        }
        Err(e) => Response::from_string(e.to_string()).with_status_code(500),
    }
}

/// Add HTTP headers (CORS, X-Request-Id) to `res` and send it
fn respond<R: Read>(rq: tiny_http::Request, mut res: Response<R>, request_id: Uuid) {
    for (field, value) in [
        ("Access-Control-Request-Method", "*"),
        ("Access-Control-Allow-Origin", "*"),
        ("Access-Control-Allow-Headers", "*"),
        ("Access-Control-Expose-Headers", "*"),
    ] {
        add_header(&mut res, field, value);
    }
    add_header(&mut res, "X-Request-Id", &request_id.hyphenated().to_string());

    if let Err(e) = rq.respond(res) {
        warn!(error = %e, "HTTP response failed");
    }
}

fn add_header<R: Read>(res: &mut Response<R>, field: &str, value: &str) {
    match Header::from_bytes(field.as_bytes(), value.as_bytes()) {
        Ok(hdr) => res.add_header(hdr),
        Err(()) => warn!(field, "invalid response header"),
    }
}
