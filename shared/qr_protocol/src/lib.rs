mod biometric;
mod error;
mod mac;
mod payload;
mod payment;
mod secret;
mod signer;
mod test;
mod verifier;

pub use biometric::reduce_landmarks;
pub use error::{Error, TokenError};
pub use payload::QrPayload;
pub use payment::verify_payment;
pub use secret::Secret;
pub use signer::{sign_ticket, SignedQr};
#[cfg(feature = "test_utils")]
pub use test::sign_payment;
pub use verifier::decode_token;
