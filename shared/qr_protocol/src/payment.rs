use crate::{mac::verify_hex_hmac, secret::Secret};

///
/// Checks that a payment confirmation really originates from the
/// payment gateway.
///
/// The gateway signs `"{order_id}|{payment_id}"` with the shared
/// key secret and sends the hex encoded HMAC-SHA256 alongside the
/// confirmation. Separator and field order are the gateway's own
/// convention and cannot change without breaking compatibility.
///
/// Untrusted input never causes an error. Missing fields or a
/// signature that is not valid hex yield `false`.
///
pub fn verify_payment(
    order_id: &str,
    payment_id: &str,
    claimed_signature: &str,
    secret: &Secret,
) -> bool {
    if order_id.is_empty() || payment_id.is_empty() || claimed_signature.is_empty() {
        return false;
    }

    let message = format!("{order_id}|{payment_id}");

    verify_hex_hmac(secret, message.as_bytes(), claimed_signature)
}
