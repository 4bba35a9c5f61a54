use crate::repository::tickets_repository::dto::{PaymentReference, TicketStatus, Visitor};
use bson::{oid::ObjectId, DateTime, Uuid};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct TicketFindEntity {
    pub _id: ObjectId,

    pub user_id: Uuid,

    pub visitors: Vec<Visitor>,

    pub booking_date: DateTime,
    pub visit_date: DateTime,

    pub status: TicketStatus,
    pub total_price: f64,

    pub payment: PaymentReference,

    pub qr_token: Option<String>,
    pub qr_payload: Option<String>,
}
