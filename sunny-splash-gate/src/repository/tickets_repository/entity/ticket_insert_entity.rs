use crate::repository::tickets_repository::dto::{PaymentReference, TicketStatus, Visitor};
use bson::{DateTime, Uuid};
use serde::Serialize;

#[derive(Serialize)]
pub struct TicketInsertEntity<'a> {
    pub user_id: Uuid,

    pub visitors: &'a [Visitor],

    pub booking_date: DateTime,
    pub visit_date: DateTime,

    pub status: TicketStatus,
    pub total_price: f64,

    pub payment: &'a PaymentReference,

    /// Always inserted as null. The token is signed after the
    /// record exists because its payload carries the record id.
    pub qr_token: Option<&'a str>,
    pub qr_payload: Option<&'a str>,
}
