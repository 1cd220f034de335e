use std::fmt;

use crate::crypto::key_derivation::KdfOutput;

/// AKMA Key Identifier (A-KID) as of [TS 33.535 6.1](https://www.3gpp.org/ftp/Specs/archive/33_series/33.535/).
///
/// It is a NAI of the form `username@realm` with:
/// ```txt
/// +----------------+---------------------+---+-----------+
/// | hex(A-TID)     | Routing Indicator   | @ | MCC | MNC |
/// +----------------+---------------------+---+-----------+
/// ```
/// where the A-TID is rendered as lowercase hex without separators.
/// The A-KID is not secret.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AKeyId {
    a_tid: KdfOutput,
    routing_indicator: String,
    realm: String,
}

impl AKeyId {
    /// Assembles an A-KID from the derived A-TID and the home network identifiers.
    /// The identifiers are used verbatim, no validation takes place.
    pub fn new<R>(a_tid: KdfOutput, routing_indicator: R, mcc: &str, mnc: &str) -> Self
    where
        R: Into<String>,
    {
        Self {
            a_tid,
            routing_indicator: routing_indicator.into(),
            realm: [mcc, mnc].concat(),
        }
    }

    /// AKMA Temporary UE Identifier
    pub fn a_tid(&self) -> &[u8] {
        &self.a_tid
    }

    pub fn routing_indicator(&self) -> &str {
        &self.routing_indicator
    }

    /// MCC directly followed by the MNC
    pub fn realm(&self) -> &str {
        &self.realm
    }

    /// The part of the A-KID in front of the `@`
    pub fn username(&self) -> String {
        let mut username = hex::encode(self.a_tid);
        username.push_str(&self.routing_indicator);
        username
    }
}

impl fmt::Display for AKeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.username(), self.realm)
    }
}

impl From<AKeyId> for String {
    fn from(a_kid: AKeyId) -> Self {
        a_kid.to_string()
    }
}
