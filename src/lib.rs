//! # AKMA key derivation
//! This library implements the key hierarchy of Authentication and Key Management for Applications (AKMA)
//! as of [3GPP TS 33.535 Annex A](https://www.3gpp.org/ftp/Specs/archive/33_series/33.535/):
//!
//! ```txt
//!   K_AUSF ──KDF(0x80, "AKMA", SUPI)──> K_AKMA ──KDF(0x82, AF_ID)──> K_AF
//!      └────KDF(0x81, "A-TID", SUPI)──> A-TID ──> A-KID = hex(A-TID) || RID @ MCC || MNC
//! ```
//!
//! The KDF is the HMAC-SHA-256 based construction of TS 33.220 Annex B.2.
//! Both derivers are pure functions of their inputs, hold no state and can be shared between threads.
//!
//! ```
//! use akma::key::{AkmaKeyDeriver, ApplicationKeyDeriver};
//!
//! let kausf = [0u8; 32];
//! let (kakma, a_kid) = AkmaKeyDeriver::default()
//!     .derive(kausf, "001010000000001", "0001", "001", "01")
//!     .unwrap();
//! assert!(a_kid.to_string().ends_with("0001@00101"));
//!
//! let kaf = ApplicationKeyDeriver::default()
//!     .derive(&kakma, "akma-af.example.org")
//!     .unwrap();
//! assert_eq!(kaf.as_bytes().len(), 32);
//! ```
//!
//! # Optional features
//!
//! Optional features configure the crypto library used for the HMAC-SHA-256 computation.
//! Be aware that those features are mutually exclusive, if multiple are configured `akma` issues a compiler error.
//!
//! - **`ring`** *(enabled by default)*: Uses the [ring](https://crates.io/crates/ring) library which allows compilation to Wasm32.
//! - **`openssl`**: Uses the [rust-openssl](https://crates.io/crates/openssl) crate, which provides bindings to OpenSSL.
//!   Per default the OpenSSL library is locally compiled and then statically linked. The build process requires a C compiler,
//!   `perl` (and `perl-core`), and `make`. For further options see the [openssl crate documentation](https://docs.rs/openssl/0.10.55/openssl/).
//! - **`rust-crypto`**: Uses the pure Rust [hmac](https://crates.io/crates/hmac) and [sha2](https://crates.io/crates/sha2) crates.

#![deny(clippy::missing_panics_doc)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
#![warn(
    // missing_docs,
    clippy::doc_markdown,
    clippy::semicolon_if_nothing_returned,
    clippy::single_match_else,
    clippy::inconsistent_struct_constructor,
    clippy::map_unwrap_or,
    clippy::match_same_arms
)]

mod crypto;
mod util;

/// error definitions
pub mod error;
/// derivation of K_AKMA, A-KID and K_AF
pub mod key;
/// AKMA Key Identifier as of TS 33.535 6.1
pub mod key_id;

pub use crypto::key_derivation::{
    FunctionCode, KdfInput, KdfOutput, KeyDerivation, KDF_OUTPUT_LEN,
};

#[cfg(test)]
pub mod test_vectors;
