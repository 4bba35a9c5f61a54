use crate::repository::{self, TicketStatus};
use serde::Serialize;
use time::{Date, OffsetDateTime};

#[derive(Debug, Serialize)]
pub struct Ticket {
    pub id: String,
    pub status: TicketStatus,
    pub visitors: Vec<Visitor>,
    #[serde(with = "crate::dto::visit_date_format")]
    pub visit_date: Date,
    #[serde(with = "time::serde::rfc3339")]
    pub booking_date: OffsetDateTime,
    pub total_price: f64,
    /// Token the client renders as a QR code.
    pub qr_token: Option<String>,
    /// Canonical JSON mirror of the signed payload, for display
    /// without decoding the token.
    pub qr_payload: Option<String>,
}

///
/// Visitor as exposed over the API. The stored landmark vector and
/// biometric digest never leave the service, only the fact that a
/// digest exists does.
///
#[derive(Debug, Serialize)]
pub struct Visitor {
    pub name: String,
    pub age: Option<u8>,
    pub photo: Option<String>,
    pub has_biometric: bool,
}

impl From<repository::Ticket> for Ticket {
    fn from(value: repository::Ticket) -> Self {
        Self {
            id: value._id.to_hex(),
            status: value.status,
            visitors: value.visitors.into_iter().map(Visitor::from).collect(),
            visit_date: value.visit_date,
            booking_date: value.booking_date,
            total_price: value.total_price,
            qr_token: value.qr_token,
            qr_payload: value.qr_payload,
        }
    }
}

impl From<repository::Visitor> for Visitor {
    fn from(value: repository::Visitor) -> Self {
        Self {
            name: value.name,
            age: value.age,
            photo: value.photo,
            has_biometric: value.biometric_hash.is_some(),
        }
    }
}
