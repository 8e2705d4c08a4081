use ticket_purchase_core::{TicketType, TicketTypeRequest};

#[allow(unused)]
pub fn adult(quantity: u32) -> TicketTypeRequest {
    TicketTypeRequest::new(TicketType::Adult, quantity)
}

#[allow(unused)]
pub fn child(quantity: u32) -> TicketTypeRequest {
    TicketTypeRequest::new(TicketType::Child, quantity)
}

#[allow(unused)]
pub fn infant(quantity: u32) -> TicketTypeRequest {
    TicketTypeRequest::new(TicketType::Infant, quantity)
}
