use qr_protocol::Secret;

pub struct TicketsServiceConfig {
    /// Park identifier embedded in every signed QR payload.
    pub park: String,

    pub qr_secret: Secret,
    pub payment_secret: Secret,
}
