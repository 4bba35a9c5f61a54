#![cfg(feature = "test_utils")]

use crate::{mac::hex_hmac, secret::Secret};

///
/// Computes the signature the payment gateway attaches to a captured
/// payment. Lets consuming services test their booking flow without
/// talking to the gateway.
///
pub fn sign_payment(order_id: &str, payment_id: &str, secret: &Secret) -> String {
    hex_hmac(secret, format!("{order_id}|{payment_id}").as_bytes())
}
