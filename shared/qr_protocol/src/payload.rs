use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

time::serde::format_description!(visit_date_format, Date, "[year]-[month]-[day]");

///
/// Fields mirrored into the QR code of a ticket.
///
/// The signature covers the serialized form of this struct, so the
/// declaration order below is the canonical key order of the wire
/// format. Reordering or renaming fields invalidates every token
/// already issued.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QrPayload {
    /// Last 6 characters of the ticket id, uppercased. Short
    /// reference shown to gate staff and printed on receipts.
    #[serde(rename = "ref")]
    pub reference: String,

    #[serde(rename = "ticketId")]
    pub ticket_id: String,

    #[serde(rename = "userId")]
    pub user_id: String,

    #[serde(rename = "visitDate", with = "visit_date_format")]
    pub visit_date: Date,

    pub visitors: u32,

    #[serde(rename = "totalPrice")]
    pub total_price: f64,

    pub park: String,

    /// Captured when the ticket was signed, not when it is decoded.
    #[serde(rename = "issuedAt", with = "time::serde::rfc3339")]
    pub issued_at: OffsetDateTime,
}

impl QrPayload {
    ///
    /// Serializes the payload to the exact string the signature
    /// is computed over. Signer and verifier must both use this
    /// form, byte for byte.
    ///
    pub(crate) fn canonical_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use time::macros::{date, datetime};

    fn payload() -> QrPayload {
        QrPayload {
            reference: "DEF456".to_string(),
            ticket_id: "abc123def456".to_string(),
            user_id: "bfa8580b-7fd2-49a5-90c9-45ea2ac77c0e".to_string(),
            visit_date: date!(2025 - 07 - 01),
            visitors: 2,
            total_price: 1499.0,
            park: "sunny-splash".to_string(),
            issued_at: datetime!(2025-06-30 12:30:00 UTC),
        }
    }

    #[test]
    fn canonical_key_order() {
        let json = payload().canonical_json().unwrap();

        let keys = [
            "\"ref\"",
            "\"ticketId\"",
            "\"userId\"",
            "\"visitDate\"",
            "\"visitors\"",
            "\"totalPrice\"",
            "\"park\"",
            "\"issuedAt\"",
        ];
        let positions = keys.map(|key| json.find(key).unwrap());

        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn visit_date_iso_format() {
        let json = payload().canonical_json().unwrap();

        assert!(json.contains("\"visitDate\":\"2025-07-01\""));
    }

    #[test]
    fn round_trip_preserves_fields() {
        let payload = payload();

        let json = payload.canonical_json().unwrap();
        let decoded = serde_json::from_str::<QrPayload>(&json).unwrap();

        assert_eq!(decoded, payload);
    }

    #[test]
    fn missing_field_rejected() {
        let json = r#"{
            "ref": "DEF456",
            "ticketId": "abc123def456",
            "visitDate": "2025-07-01",
            "visitors": 2,
            "totalPrice": 1499.0,
            "park": "sunny-splash",
            "issuedAt": "2025-06-30T12:30:00Z"
        }"#;

        assert!(serde_json::from_str::<QrPayload>(json).is_err());
    }

    #[test]
    fn wrong_field_type_rejected() {
        let json = r#"{
            "ref": "DEF456",
            "ticketId": "abc123def456",
            "userId": "user_1",
            "visitDate": "2025-07-01",
            "visitors": "two",
            "totalPrice": 1499.0,
            "park": "sunny-splash",
            "issuedAt": "2025-06-30T12:30:00Z"
        }"#;

        assert!(serde_json::from_str::<QrPayload>(json).is_err());
    }
}
