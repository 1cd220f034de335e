//! Ring backend implementation of the AKMA KDF.

mod key_derivation;

/// HMAC-SHA-256 key derivation using the ring library.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Kdf;
