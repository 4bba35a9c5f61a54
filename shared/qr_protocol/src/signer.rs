use crate::{error::Error, mac::hex_hmac, payload::QrPayload, secret::Secret};
use base64::{prelude::BASE64_STANDARD, Engine};
use serde::Serialize;
use time::{Date, OffsetDateTime};

///
/// Signed QR token together with the payload it was derived from.
///
/// The payload is returned so callers can persist it next to the
/// token for administrative display without decoding the token.
/// `payload_json` is the exact canonical serialization the
/// signature covers. Both must be stored together, exactly once.
///
#[derive(Debug, Clone)]
pub struct SignedQr {
    pub token: String,
    pub payload: QrPayload,
    pub payload_json: String,
}

#[derive(Serialize)]
struct EnvelopeSer<'a> {
    payload: &'a QrPayload,
    sig: &'a str,
}

///
/// Builds the QR payload for a ticket, signs it with HMAC-SHA256
/// and wraps both into the base64 token embedded in the QR code.
///
/// `issued_at` is an argument instead of being read from the
/// clock, so signing is a pure function of its inputs: identical
/// inputs always produce a byte identical token.
///
#[allow(clippy::too_many_arguments)]
pub fn sign_ticket(
    ticket_id: &str,
    user_id: &str,
    visit_date: Date,
    visitors: u32,
    total_price: f64,
    park: &str,
    issued_at: OffsetDateTime,
    secret: &Secret,
) -> Result<SignedQr, Error> {
    let payload = QrPayload {
        reference: derive_reference(ticket_id),
        ticket_id: ticket_id.to_string(),
        user_id: user_id.to_string(),
        visit_date,
        visitors,
        total_price,
        park: park.to_string(),
        issued_at,
    };

    let canonical = payload.canonical_json()?;
    let sig = hex_hmac(secret, canonical.as_bytes());

    let envelope = serde_json::to_string(&EnvelopeSer {
        payload: &payload,
        sig: &sig,
    })?;
    let token = BASE64_STANDARD.encode(envelope);

    Ok(SignedQr {
        token,
        payload,
        payload_json: canonical,
    })
}

/// Last 6 characters of the ticket id, uppercased.
fn derive_reference(ticket_id: &str) -> String {
    let chars = ticket_id.chars().collect::<Vec<_>>();
    let tail = chars.len().saturating_sub(6);

    chars[tail..].iter().collect::<String>().to_uppercase()
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::Value;
    use time::macros::{date, datetime};

    fn sign(secret: &Secret) -> SignedQr {
        sign_ticket(
            "abc123def456",
            "user_1",
            date!(2025 - 07 - 01),
            2,
            1499.0,
            "sunny-splash",
            datetime!(2025-06-30 12:30:00 UTC),
            secret,
        )
        .unwrap()
    }

    #[test]
    fn reference_derived_from_ticket_id() {
        let secret = Secret::new("qr secret").unwrap();

        let signed = sign(&secret);

        assert_eq!(signed.payload.reference, "DEF456");
    }

    #[test]
    fn reference_of_short_ticket_id() {
        assert_eq!(derive_reference("ab12"), "AB12");
        assert_eq!(derive_reference(""), "");
    }

    #[test]
    fn deterministic_given_identical_inputs() {
        let secret = Secret::new("qr secret").unwrap();

        let first = sign(&secret);
        let second = sign(&secret);

        assert_eq!(first.token, second.token);
    }

    #[test]
    fn token_wire_format() {
        let secret = Secret::new("qr secret").unwrap();

        let signed = sign(&secret);

        let json = BASE64_STANDARD.decode(signed.token).unwrap();
        let envelope = serde_json::from_slice::<Value>(&json).unwrap();

        let payload = envelope.get("payload").unwrap();
        assert_eq!(
            payload.get("ref").unwrap().as_str().unwrap(),
            "DEF456"
        );
        assert_eq!(
            payload.get("issuedAt").unwrap().as_str().unwrap(),
            "2025-06-30T12:30:00Z"
        );

        let sig = envelope.get("sig").unwrap().as_str().unwrap();
        assert_eq!(sig.len(), 64);
        assert!(sig.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
