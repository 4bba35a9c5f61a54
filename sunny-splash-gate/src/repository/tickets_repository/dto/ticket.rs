use super::{PaymentReference, TicketStatus, Visitor};
use crate::repository::tickets_repository::entity::TicketFindEntity;
use bson::oid::ObjectId;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

pub struct Ticket {
    pub _id: ObjectId,

    pub user_id: Uuid,

    pub visitors: Vec<Visitor>,

    pub booking_date: OffsetDateTime,
    pub visit_date: Date,

    pub status: TicketStatus,
    pub total_price: f64,

    pub payment: PaymentReference,

    pub qr_token: Option<String>,
    pub qr_payload: Option<String>,
}

impl From<TicketFindEntity> for Ticket {
    fn from(value: TicketFindEntity) -> Self {
        Self {
            _id: value._id,
            user_id: value.user_id.into(),
            visitors: value.visitors,
            booking_date: value.booking_date.into(),
            visit_date: OffsetDateTime::from(value.visit_date).date(),
            status: value.status,
            total_price: value.total_price,
            payment: value.payment,
            qr_token: value.qr_token,
            qr_payload: value.qr_payload,
        }
    }
}
