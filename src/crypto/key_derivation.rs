use crate::error::KdfError;

/// Output length of the HMAC-SHA-256 based KDF in bytes
pub const KDF_OUTPUT_LEN: usize = 32;

/// Output of a single KDF invocation
pub type KdfOutput = [u8; KDF_OUTPUT_LEN];

/// The keyed KDF of [TS 33.220 B.2](https://www.3gpp.org/ftp/Specs/archive/33_series/33.220/),
/// i.e. `HMAC-SHA-256(Key, S)` over an already encoded input string `S`.
///
/// Implemented by each crypto backend. The derivers take it as a value, so tests
/// can substitute recording or failing implementations.
pub trait KeyDerivation {
    fn derive(&self, key: &[u8], input: &KdfInput) -> Result<KdfOutput, KdfError>;
}

impl<D> KeyDerivation for &D
where
    D: KeyDerivation + ?Sized,
{
    fn derive(&self, key: &[u8], input: &KdfInput) -> Result<KdfOutput, KdfError> {
        (**self).derive(key, input)
    }
}

/// FC values of the AKMA key hierarchy as of TS 33.535 Annex A
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FunctionCode {
    /// K_AKMA derivation (A.2)
    AnchorKey = 0x80,
    /// A-TID derivation (A.3)
    ATid = 0x81,
    /// K_AF derivation (A.4)
    ApplicationKey = 0x82,
}

/// The KDF input string `S = FC || P0 || L0 || ... || Pn || Ln`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KdfInput(Vec<u8>);

impl KdfInput {
    pub fn new(fc: FunctionCode) -> Self {
        Self(vec![fc as u8])
    }

    /// Appends `P || L` with `L` being the length of `P` as 2 octets in network order.
    /// Empty parameters are kept with a length of `0x0000`.
    pub fn with_parameter<P>(mut self, parameter: P) -> Result<Self, KdfError>
    where
        P: AsRef<[u8]>,
    {
        let parameter = parameter.as_ref();
        let len = u16::try_from(parameter.len()).map_err(|_| {
            log::debug!(
                "Cannot encode KDF parameter of {} bytes, at most {} are allowed",
                parameter.len(),
                u16::MAX
            );
            KdfError::ParameterTooLong(parameter.len())
        })?;

        self.0.reserve(parameter.len() + 2);
        self.0.extend_from_slice(parameter);
        self.0.extend_from_slice(&len.to_be_bytes());

        Ok(self)
    }

    pub fn function_code(&self) -> u8 {
        self.0[0]
    }
}

impl AsRef<[u8]> for KdfInput {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Encodes the parameters for the given function code and invokes the KDF
pub fn kdf<D>(
    kdf: &D,
    key: &[u8],
    fc: FunctionCode,
    parameters: &[&[u8]],
) -> Result<KdfOutput, KdfError>
where
    D: KeyDerivation + ?Sized,
{
    let input = parameters
        .iter()
        .try_fold(KdfInput::new(fc), |input, parameter| {
            input.with_parameter(parameter)
        })?;

    kdf.derive(key, &input)
}
