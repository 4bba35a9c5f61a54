#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("secret cannot be empty")]
    EmptySecret,

    #[error("payload serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

///
/// Reason why a scanned token was rejected.
///
/// Rejection of an untrusted token is an expected outcome,
/// not a failure of the verifying process, so callers receive
/// it as a value instead of propagating it as an error.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    /// Token is not base64 encoded JSON.
    #[error("malformed token")]
    MalformedToken,

    /// Envelope or payload is missing required fields
    /// or contains fields of the wrong type.
    #[error("malformed payload")]
    MalformedPayload,

    /// Signature does not match the payload.
    #[error("tampered")]
    Tampered,
}
