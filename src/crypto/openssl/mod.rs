//! OpenSSL backend implementation of the AKMA KDF.

mod key_derivation;

/// HMAC-SHA-256 key derivation using the OpenSSL library.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Kdf;
