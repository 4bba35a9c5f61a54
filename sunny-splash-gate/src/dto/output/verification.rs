use super::Ticket;
use crate::repository::TicketStatus;
use serde::Serialize;
use time::{Date, OffsetDateTime};

///
/// Tagged outcome of a gate scan.
///
/// Every scan produces one of these, even for garbage input - the
/// scanning operator always gets a decision, never an error page.
///
#[derive(Debug, Serialize)]
pub struct Verification {
    pub valid: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// Persisted record, attached when a structurally valid ticket
    /// is rejected for its status so staff can review it. The
    /// stored token and payload mirror are redacted: a scanner
    /// account must not receive a re-renderable token for someone
    /// else's ticket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket: Option<Ticket>,

    /// Redacted entry view, attached when entry is granted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<VerifiedEntry>,
}

impl Verification {
    pub fn valid(entry: VerifiedEntry) -> Self {
        Self {
            valid: true,
            reason: None,
            ticket: None,
            entry: Some(entry),
        }
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            reason: Some(reason.into()),
            ticket: None,
            entry: None,
        }
    }

    pub fn rejected_for_ticket(reason: impl Into<String>, ticket: Ticket) -> Self {
        let ticket = Ticket {
            qr_token: None,
            qr_payload: None,
            ..ticket
        };

        Self {
            valid: false,
            reason: Some(reason.into()),
            ticket: Some(ticket),
            entry: None,
        }
    }
}

///
/// What the gate display shows on successful verification. Built
/// from the signed payload plus the persisted status - never from
/// the secret, the raw signature or stored landmark vectors.
///
#[derive(Debug, Serialize)]
pub struct VerifiedEntry {
    #[serde(rename = "ref")]
    pub reference: String,
    pub ticket_id: String,
    #[serde(with = "crate::dto::visit_date_format")]
    pub visit_date: Date,
    pub visitors: u32,
    pub total_price: f64,
    pub status: TicketStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub issued_at: OffsetDateTime,
    pub park: String,
    pub has_biometric: bool,
}
