use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VerificationService: Send + Sync {
    async fn verify_ticket(
        &self,
        scan: input::VerifyTicket,
    ) -> Result<output::Verification, Error>;
}
