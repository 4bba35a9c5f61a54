use super::{VerificationService, VerificationServiceConfig};
use crate::{
    dto::{input, output},
    error::Error,
    repository::{TicketStatus, TicketsRepository},
};
use axum::async_trait;
use bson::oid::ObjectId;
use std::sync::Arc;

const REASON_NOT_FOUND: &str = "not found";
const REASON_CANCELLED: &str = "cancelled";
const REASON_ALREADY_USED: &str = "already used";

pub struct VerificationServiceImpl {
    config: VerificationServiceConfig,
    repository: Arc<dyn TicketsRepository>,
}

impl VerificationServiceImpl {
    pub fn new(config: VerificationServiceConfig, repository: Arc<dyn TicketsRepository>) -> Self {
        Self { config, repository }
    }
}

#[async_trait]
impl VerificationService for VerificationServiceImpl {
    ///
    /// Verifies a scanned QR token and decides whether to grant
    /// entry. Rejections are part of the normal outcome, not
    /// errors: whatever the token contains, the scanning operator
    /// gets back a decision with a reason.
    ///
    /// Cryptographic checks run before any database lookup, so a
    /// forged token reveals nothing about stored tickets.
    ///
    /// ### Errors
    /// - [Error::Database] when the ticket lookup fails
    ///
    async fn verify_ticket(
        &self,
        scan: input::VerifyTicket,
    ) -> Result<output::Verification, Error> {
        tracing::info!("verifying scanned ticket");

        let payload = match qr_protocol::decode_token(&scan.qr_token, &self.config.qr_secret) {
            Ok(payload) => payload,
            Err(reason) => {
                tracing::warn!(%reason, "rejected scanned token");
                return Ok(output::Verification::rejected(reason.to_string()));
            }
        };

        let Ok(id) = ObjectId::parse_str(&payload.ticket_id) else {
            tracing::warn!(ticket_id = payload.ticket_id, "token names no known ticket");
            return Ok(output::Verification::rejected(REASON_NOT_FOUND));
        };
        let Some(ticket) = self.repository.find(id).await? else {
            tracing::warn!(%id, "token names no known ticket");
            return Ok(output::Verification::rejected(REASON_NOT_FOUND));
        };

        match ticket.status {
            TicketStatus::Cancelled => {
                tracing::warn!(%id, "rejected cancelled ticket");
                Ok(output::Verification::rejected_for_ticket(
                    REASON_CANCELLED,
                    ticket.into(),
                ))
            }
            TicketStatus::Completed => {
                tracing::warn!(%id, "rejected already used ticket");
                Ok(output::Verification::rejected_for_ticket(
                    REASON_ALREADY_USED,
                    ticket.into(),
                ))
            }
            TicketStatus::Booked | TicketStatus::Pending => {
                tracing::info!(%id, "granted entry");
                let has_biometric = ticket
                    .visitors
                    .iter()
                    .any(|visitor| visitor.biometric_hash.is_some());

                Ok(output::Verification::valid(output::VerifiedEntry {
                    reference: payload.reference,
                    ticket_id: payload.ticket_id,
                    visit_date: payload.visit_date,
                    visitors: payload.visitors,
                    total_price: payload.total_price,
                    status: ticket.status,
                    issued_at: payload.issued_at,
                    park: payload.park,
                    has_biometric,
                }))
            }
        }
    }
}
