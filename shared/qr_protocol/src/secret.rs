use crate::{error::Error, mac::HmacSha256};
use hmac::Mac;

///
/// Shared secret used for HMAC signing and verification.
///
/// Construction fails on an empty value, so every function taking
/// a [Secret] is guaranteed a usable key. Configuration problems
/// surface once, at startup, instead of on every request.
///
#[derive(Clone)]
pub struct Secret {
    mac: HmacSha256,
}

impl Secret {
    pub fn new(value: impl AsRef<[u8]>) -> Result<Self, Error> {
        let value = value.as_ref();
        if value.is_empty() {
            return Err(Error::EmptySecret);
        }

        let mac = HmacSha256::new_from_slice(value).map_err(|_| Error::EmptySecret)?;

        Ok(Self { mac })
    }

    pub(crate) fn mac(&self) -> HmacSha256 {
        self.mac.clone()
    }
}
