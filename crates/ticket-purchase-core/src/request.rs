use std::fmt;
use std::str::FromStr;

use crate::error::ParseTicketError;

/// Type of a ticket
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(u8)]
pub enum TicketType {
    /// Ticket for an adult
    ///
    /// Every purchase needs at least one of these.
    Adult,

    /// Ticket for a child, occupies its own seat
    Child,

    /// Ticket for an infant
    ///
    /// Infants sit on an adult's lap, so they do not get a seat. Each adult
    /// can hold at most one infant.
    Infant,
}

impl TicketType {
    /// All ticket types in declaration order
    pub const ALL: [TicketType; 3] = [TicketType::Adult, TicketType::Child, TicketType::Infant];

    /// Price of a single ticket of this type
    #[inline]
    pub const fn price(self) -> u64 {
        match self {
            TicketType::Adult => 20,
            TicketType::Child => 10,
            TicketType::Infant => 0,
        }
    }

    /// Whether a ticket of this type needs a seat of its own
    #[inline]
    pub const fn occupies_seat(self) -> bool {
        match self {
            TicketType::Adult | TicketType::Child => true,
            TicketType::Infant => false,
        }
    }

    /// Upper-case name, as accepted by [`FromStr`]
    pub const fn name(self) -> &'static str {
        match self {
            TicketType::Adult => "ADULT",
            TicketType::Child => "CHILD",
            TicketType::Infant => "INFANT",
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TicketType {
    type Err = ParseTicketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TicketType::ALL
            .into_iter()
            .find(|ty| ty.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseTicketError::UnknownType(s.to_owned()))
    }
}

/// A request for `quantity` tickets of one [`TicketType`]
///
/// 📌 Hint: A purchase may contain several requests of the same type. All
/// purchase rules look at the sums across the whole purchase.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TicketTypeRequest {
    ticket_type: TicketType,
    quantity: u32,
}

impl TicketTypeRequest {
    /// Create a new request
    #[inline]
    pub const fn new(ticket_type: TicketType, quantity: u32) -> Self {
        Self {
            ticket_type,
            quantity,
        }
    }

    /// Get the requested ticket type
    #[inline]
    pub const fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    /// Get the number of requested tickets
    #[inline]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }
}

impl fmt::Display for TicketTypeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ticket_type, self.quantity)
    }
}

/// Parse a ticket line such as `ADULT 2`
impl FromStr for TicketTypeRequest {
    type Err = ParseTicketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let ticket_type: TicketType = tokens.next().ok_or(ParseTicketError::Empty)?.parse()?;
        let quantity = tokens
            .next()
            .ok_or(ParseTicketError::MissingQuantity(ticket_type))?;
        // `u32::from_str` also takes a leading `+`
        let invalid = || ParseTicketError::InvalidQuantity(quantity.to_owned());
        if !quantity.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let quantity = quantity.parse::<u32>().map_err(|_| invalid())?;
        if let Some(extra) = tokens.next() {
            return Err(ParseTicketError::TrailingInput(extra.to_owned()));
        }
        Ok(Self::new(ticket_type, quantity))
    }
}

/// Parse one [`TicketTypeRequest`] per non-empty line of `s`
///
/// The order of the lines is kept.
pub fn parse_ticket_lines(s: &str) -> Result<Vec<TicketTypeRequest>, ParseTicketError> {
    s.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::parse::<TicketTypeRequest>)
        .collect()
}
