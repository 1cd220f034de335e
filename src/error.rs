use std::fmt;

/// Represents either success(T) or an failure ([`AkmaError`])
pub type Result<T> = std::result::Result<T, AkmaError>;

/// Represents an error which has occured in the akma library
#[derive(PartialEq, Eq, Debug, thiserror::Error)]
pub enum AkmaError {
    /// The KDF primitive failed while deriving the output of the given step
    #[error("{step} derivation failed: {source}")]
    KeyDerivation {
        /// which of the KDF invocations failed
        step: DerivationStep,
        /// the underlying failure of the KDF primitive
        source: KdfError,
    },
}

impl AkmaError {
    /// Returns the derivation step which failed
    pub fn step(&self) -> DerivationStep {
        match self {
            AkmaError::KeyDerivation { step, .. } => *step,
        }
    }
}

/// Failure of the KDF primitive itself, see [TS 33.220 B.2](https://www.3gpp.org/ftp/Specs/archive/33_series/33.220/)
#[derive(PartialEq, Eq, Debug, Clone, thiserror::Error)]
pub enum KdfError {
    /// A parameter does not fit into the 2 octet length field of the KDF input string
    #[error("KDF parameter with {0} bytes exceeds the maximum encodable length")]
    ParameterTooLong(usize),

    /// The crypto backend could not compute the HMAC
    #[error("{0}")]
    Backend(String),
}

/// The individual KDF invocations of the AKMA key hierarchy
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DerivationStep {
    /// K_AKMA from K_AUSF
    AnchorKey,
    /// A-TID from K_AUSF
    ATid,
    /// K_AF from K_AKMA
    ApplicationKey,
}

impl fmt::Display for DerivationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DerivationStep::AnchorKey => "AKMA anchor key",
            DerivationStep::ATid => "A-TID",
            DerivationStep::ApplicationKey => "application function key",
        };
        f.write_str(name)
    }
}
