use super::Kdf;
use crate::{
    crypto::key_derivation::{KdfInput, KdfOutput, KeyDerivation, KDF_OUTPUT_LEN},
    error::KdfError,
};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

impl KeyDerivation for Kdf {
    fn derive(&self, key: &[u8], input: &KdfInput) -> Result<KdfOutput, KdfError> {
        let mut mac = HmacSha256::new_from_slice(key)?;
        mac.update(input.as_ref());

        let mut output = [0_u8; KDF_OUTPUT_LEN];
        output.copy_from_slice(&mac.finalize().into_bytes());
        Ok(output)
    }
}

impl From<hmac::digest::InvalidLength> for KdfError {
    fn from(error: hmac::digest::InvalidLength) -> Self {
        log::error!("Cannot initialize HMAC: {error}");
        KdfError::Backend(error.to_string())
    }
}
