use std::fmt;

use crate::{
    crypto::key_derivation::{kdf, FunctionCode, KdfOutput, KeyDerivation},
    error::{AkmaError, DerivationStep, Result},
    key_id::AKeyId,
};

/// P0 of the K_AKMA derivation, see TS 33.535 A.2
pub const AKMA_LABEL: &[u8] = b"AKMA";
/// P0 of the A-TID derivation, see TS 33.535 A.3
pub const A_TID_LABEL: &[u8] = b"A-TID";

/// AKMA anchor key (K_AKMA)
// key material is only copied explicitly
#[allow(missing_copy_implementations)]
#[derive(Clone, PartialEq, Eq)]
pub struct AnchorKey(KdfOutput);

impl AnchorKey {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<KdfOutput> for AnchorKey {
    fn from(key: KdfOutput) -> Self {
        Self(key)
    }
}

impl AsRef<[u8]> for AnchorKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for AnchorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AnchorKey(<{} bytes>)", self.0.len())
    }
}

/// Derives K_AKMA and the A-KID from K_AUSF as of [TS 33.535 Annex A.2 and A.3](https://www.3gpp.org/ftp/Specs/archive/33_series/33.535/).
///
/// The deriver is generic over the KDF implementation `D`, see [`crate::key::AkmaKeyDeriver`]
/// for the one bound to the configured crypto backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AkmaKeyDeriver<D> {
    kdf: D,
}

impl<D> AkmaKeyDeriver<D>
where
    D: KeyDerivation,
{
    pub fn new(kdf: D) -> Self {
        Self { kdf }
    }

    /// Derives
    /// - `K_AKMA = KDF(K_AUSF, 0x80, "AKMA", SUPI)`
    /// - `A-TID = KDF(K_AUSF, 0x81, "A-TID", SUPI)`
    ///
    /// and assembles the A-KID from the A-TID, the routing indicator and the realm `MCC || MNC`.
    /// Neither the SUPI nor the network identifiers are validated.
    /// If one of both KDF invocations fails, an error naming the failing step is returned.
    pub fn derive<K, S>(
        &self,
        kausf: K,
        supi: S,
        routing_indicator: &str,
        mcc: &str,
        mnc: &str,
    ) -> Result<(AnchorKey, AKeyId)>
    where
        K: AsRef<[u8]>,
        S: AsRef<[u8]>,
    {
        let kausf = kausf.as_ref();
        let supi = supi.as_ref();

        let kakma = kdf(&self.kdf, kausf, FunctionCode::AnchorKey, &[AKMA_LABEL, supi]).map_err(
            |source| AkmaError::KeyDerivation {
                step: DerivationStep::AnchorKey,
                source,
            },
        )?;

        let a_tid = kdf(&self.kdf, kausf, FunctionCode::ATid, &[A_TID_LABEL, supi]).map_err(
            |source| AkmaError::KeyDerivation {
                step: DerivationStep::ATid,
                source,
            },
        )?;

        Ok((
            AnchorKey(kakma),
            AKeyId::new(a_tid, routing_indicator, mcc, mnc),
        ))
    }
}
