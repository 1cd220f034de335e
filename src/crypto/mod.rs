pub mod key_derivation;
#[cfg(test)]
pub(crate) mod stand_in;

cfg_if::cfg_if! {
if #[cfg(all(feature = "ring", not(feature = "openssl"), not(feature = "rust-crypto")))] {
    pub(crate) mod ring;
} else if #[cfg(all(feature = "openssl", not(feature = "ring"), not(feature = "rust-crypto")))] {
    pub(crate) mod openssl;
} else if #[cfg(all(feature = "rust-crypto", not(feature = "ring"), not(feature = "openssl")))] {
    pub(crate) mod rust_crypto;
} else {
    compile_error!("Exactly one crypto backend (ring, openssl or rust-crypto) has to be configured.");
    mod ring;
}
}
