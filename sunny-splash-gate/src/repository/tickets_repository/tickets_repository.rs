use super::{PaymentReference, Ticket, TicketStatus, Visitor};
use crate::repository;
use axum::async_trait;
use bson::oid::ObjectId;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsRepository: Send + Sync {
    async fn insert(
        &self,
        user_id: Uuid,
        visitors: &[Visitor],
        visit_date: Date,
        total_price: f64,
        payment: &PaymentReference,
        booking_date: OffsetDateTime,
    ) -> Result<ObjectId, repository::Error>;

    async fn find(&self, id: ObjectId) -> Result<Option<Ticket>, repository::Error>;

    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Ticket>, repository::Error>;

    ///
    /// Stores the signed token and its payload mirror, but only if
    /// the ticket has no token yet. A retried signing attempt must
    /// never replace an already persisted token.
    ///
    /// ### Errors
    /// - [repository::Error::NoDocumentUpdated] when the ticket
    ///   does not exist or already carries a token
    ///
    async fn set_qr_token(
        &self,
        id: ObjectId,
        qr_token: &str,
        qr_payload: &str,
    ) -> Result<(), repository::Error>;

    ///
    /// Atomic conditional status transition. The update applies
    /// only when the current status is one of `allowed_from`, so
    /// two concurrent transitions can never both succeed.
    ///
    /// The external admission system is expected to rely on the
    /// same guarantee when it marks tickets completed.
    ///
    /// ### Errors
    /// - [repository::Error::NoDocumentUpdated] when the ticket
    ///   does not exist or its status is not in `allowed_from`
    ///
    async fn update_status(
        &self,
        id: ObjectId,
        allowed_from: &[TicketStatus],
        to: TicketStatus,
    ) -> Result<(), repository::Error>;
}
