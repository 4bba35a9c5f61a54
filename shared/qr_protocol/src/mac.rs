use crate::secret::Secret;
use hmac::{Hmac, Mac};
use sha2::Sha256;

pub(crate) type HmacSha256 = Hmac<Sha256>;

pub(crate) fn hex_hmac(secret: &Secret, message: &[u8]) -> String {
    let mut mac = secret.mac();
    mac.update(message);

    hex::encode(mac.finalize().into_bytes())
}

///
/// Compares `claimed_hex` against the HMAC of `message` without
/// leaking the position of the first mismatching byte.
///
/// Returns `false` for anything that is not valid hex.
///
pub(crate) fn verify_hex_hmac(secret: &Secret, message: &[u8], claimed_hex: &str) -> bool {
    let Ok(claimed) = hex::decode(claimed_hex) else {
        return false;
    };

    let mut mac = secret.mac();
    mac.update(message);

    mac.verify_slice(&claimed).is_ok()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn verify_matches_own_signature() {
        let secret = Secret::new("some secret").unwrap();

        let signature = hex_hmac(&secret, b"message");

        assert_eq!(signature.len(), 64);
        assert!(verify_hex_hmac(&secret, b"message", &signature));
    }

    #[test]
    fn verify_different_message() {
        let secret = Secret::new("some secret").unwrap();

        let signature = hex_hmac(&secret, b"message");

        assert!(!verify_hex_hmac(&secret, b"other message", &signature));
    }

    #[test]
    fn verify_different_secret() {
        let secret = Secret::new("some secret").unwrap();
        let other_secret = Secret::new("other secret").unwrap();

        let signature = hex_hmac(&secret, b"message");

        assert!(!verify_hex_hmac(&other_secret, b"message", &signature));
    }

    #[test]
    fn verify_claim_not_hex() {
        let secret = Secret::new("some secret").unwrap();

        assert!(!verify_hex_hmac(&secret, b"message", "that's not hex"));
    }
}
