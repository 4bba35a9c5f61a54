use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsService: Send + Sync {
    async fn book_ticket(
        &self,
        user_id: Uuid,
        booking: input::BookTicket,
    ) -> Result<output::Ticket, Error>;

    async fn find_ticket(&self, user_id: Uuid, ticket_id: &str) -> Result<output::Ticket, Error>;

    async fn find_user_tickets(&self, user_id: Uuid) -> Result<Vec<output::Ticket>, Error>;

    async fn cancel_ticket(&self, user_id: Uuid, ticket_id: &str)
        -> Result<output::Ticket, Error>;
}
