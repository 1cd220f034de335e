//! RustCrypto backend implementation of the AKMA KDF.
//!
//! This module uses pure Rust implementations from the RustCrypto project.

mod key_derivation;

/// HMAC-SHA-256 key derivation using RustCrypto libraries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Kdf;
