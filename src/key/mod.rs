//! AKMA key hierarchy as of [TS 33.535 Annex A](https://www.3gpp.org/ftp/Specs/archive/33_series/33.535/)

/// K_AKMA and A-KID derivation
pub mod anchor_key;
/// K_AF derivation
pub mod application_key;

pub use anchor_key::AnchorKey;
pub use application_key::ApplicationKey;

// Type aliases for the selected crypto backend
cfg_if::cfg_if! {
    if #[cfg(all(feature = "ring", not(feature = "openssl"), not(feature = "rust-crypto")))] {
        /// Key derivation implementation using the ring crypto backend.
        pub type Kdf = crate::crypto::ring::Kdf;
    } else if #[cfg(all(feature = "openssl", not(feature = "ring"), not(feature = "rust-crypto")))] {
        /// Key derivation implementation using the OpenSSL crypto backend.
        pub type Kdf = crate::crypto::openssl::Kdf;
    } else if #[cfg(all(feature = "rust-crypto", not(feature = "ring"), not(feature = "openssl")))] {
        /// Key derivation implementation using the RustCrypto crypto backend.
        pub type Kdf = crate::crypto::rust_crypto::Kdf;
    }
}

/// K_AKMA and A-KID deriver using the configured crypto backend.
pub type AkmaKeyDeriver = anchor_key::AkmaKeyDeriver<Kdf>;
/// K_AF deriver using the configured crypto backend.
pub type ApplicationKeyDeriver = application_key::ApplicationKeyDeriver<Kdf>;
