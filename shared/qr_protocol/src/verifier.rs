use crate::{error::TokenError, mac::verify_hex_hmac, payload::QrPayload, secret::Secret};
use base64::{prelude::BASE64_STANDARD, Engine};
use serde::Deserialize;
use serde_json::Value;

///
/// Decodes a scanned QR token and verifies its signature.
///
/// Checks run in strict order and short circuit on the first
/// failure:
/// 1. base64 + JSON decode ([TokenError::MalformedToken])
/// 2. envelope contains `payload` and `sig`, payload has every
///    required field with the right type
///    ([TokenError::MalformedPayload])
/// 3. signature matches the canonical payload serialization,
///    compared in constant time ([TokenError::Tampered])
///
/// Which part of a tampered token mismatched is intentionally not
/// reported. Cross checking the decoded payload against the
/// persisted ticket record is the caller's responsibility.
///
pub fn decode_token(token: &str, secret: &Secret) -> Result<QrPayload, TokenError> {
    let json = BASE64_STANDARD
        .decode(token)
        .map_err(|_| TokenError::MalformedToken)?;
    let envelope =
        serde_json::from_slice::<Value>(&json).map_err(|_| TokenError::MalformedToken)?;

    let payload_value = envelope.get("payload").ok_or(TokenError::MalformedPayload)?;
    let sig = envelope
        .get("sig")
        .and_then(Value::as_str)
        .ok_or(TokenError::MalformedPayload)?;
    let payload = QrPayload::deserialize(payload_value)
        .map_err(|_| TokenError::MalformedPayload)?;

    let canonical = payload
        .canonical_json()
        .map_err(|_| TokenError::MalformedPayload)?;
    if !verify_hex_hmac(secret, canonical.as_bytes(), sig) {
        return Err(TokenError::Tampered);
    }

    Ok(payload)
}
