use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct VerifyTicket {
    pub qr_token: String,
}
