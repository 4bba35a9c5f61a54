use serde::{Deserialize, Serialize};
use strum::AsRefStr;

///
/// Lifecycle of a ticket.
///
/// `pending -> booked` on payment confirmation,
/// `booked -> completed` on gate entry (set by the admission
/// system, not this service), `booked/pending -> cancelled` on
/// cancellation. `completed` and `cancelled` are terminal.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TicketStatus {
    Booked,
    Pending,
    Completed,
    Cancelled,
}
