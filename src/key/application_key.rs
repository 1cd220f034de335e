use std::fmt;

use crate::{
    crypto::key_derivation::{kdf, FunctionCode, KdfOutput, KeyDerivation},
    error::{AkmaError, DerivationStep, Result},
};

/// Application function key (K_AF)
// key material is only copied explicitly
#[allow(missing_copy_implementations)]
#[derive(Clone, PartialEq, Eq)]
pub struct ApplicationKey(KdfOutput);

impl ApplicationKey {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for ApplicationKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for ApplicationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApplicationKey(<{} bytes>)", self.0.len())
    }
}

/// Derives K_AF from K_AKMA as of [TS 33.535 Annex A.4](https://www.3gpp.org/ftp/Specs/archive/33_series/33.535/)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ApplicationKeyDeriver<D> {
    kdf: D,
}

impl<D> ApplicationKeyDeriver<D>
where
    D: KeyDerivation,
{
    pub fn new(kdf: D) -> Self {
        Self { kdf }
    }

    /// Derives `K_AF = KDF(K_AKMA, 0x82, AF_ID)`.
    ///
    /// The AF_ID is treated as opaque, usually it is the FQDN of the AF followed by the Ua* security protocol identifier.
    pub fn derive<K, A>(&self, kakma: K, af_id: A) -> Result<ApplicationKey>
    where
        K: AsRef<[u8]>,
        A: AsRef<[u8]>,
    {
        kdf(
            &self.kdf,
            kakma.as_ref(),
            FunctionCode::ApplicationKey,
            &[af_id.as_ref()],
        )
        .map(ApplicationKey)
        .map_err(|source| AkmaError::KeyDerivation {
            step: DerivationStep::ApplicationKey,
            source,
        })
    }
}
