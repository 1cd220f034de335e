use super::Kdf;
use crate::{
    crypto::key_derivation::{KdfInput, KdfOutput, KeyDerivation},
    error::KdfError,
};

impl KeyDerivation for Kdf {
    fn derive(&self, key: &[u8], input: &KdfInput) -> Result<KdfOutput, KdfError> {
        let key = ring::hmac::Key::new(ring::hmac::HMAC_SHA256, key);
        let tag = ring::hmac::sign(&key, input.as_ref());

        KdfOutput::try_from(tag.as_ref()).map_err(|_| {
            log::error!("Unexpected HMAC tag length of {} bytes", tag.as_ref().len());
            KdfError::Backend(format!("HMAC tag with {} bytes", tag.as_ref().len()))
        })
    }
}
