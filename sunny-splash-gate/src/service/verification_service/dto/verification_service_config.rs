use qr_protocol::Secret;

pub struct VerificationServiceConfig {
    pub qr_secret: Secret,
}
