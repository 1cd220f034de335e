use super::Kdf;
use crate::{
    crypto::key_derivation::{KdfInput, KdfOutput, KeyDerivation},
    error::KdfError,
};

impl KeyDerivation for Kdf {
    fn derive(&self, key: &[u8], input: &KdfInput) -> Result<KdfOutput, KdfError> {
        let tag = hmac_sha256(key, input.as_ref()).map_err(|err: openssl::error::ErrorStack| {
            log::debug!("Key derivation failed, OpenSSL error stack: {err}");
            KdfError::Backend(err.to_string())
        })?;

        KdfOutput::try_from(tag.as_slice()).map_err(|_| {
            log::error!("Unexpected HMAC tag length of {} bytes", tag.len());
            KdfError::Backend(format!("HMAC tag with {} bytes", tag.len()))
        })
    }
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Result<Vec<u8>, openssl::error::ErrorStack> {
    let pkey = openssl::pkey::PKey::hmac(key)?;
    let mut signer = openssl::sign::Signer::new(openssl::hash::MessageDigest::sha256(), &pkey)?;
    signer.update(data)?;
    signer.sign_to_vec()
}
