//! KDF stand-ins to observe and break the derivers in tests.

use std::cell::RefCell;

use super::key_derivation::{FunctionCode, KdfInput, KdfOutput, KeyDerivation};
use crate::{error::KdfError, key::Kdf};

/// Delegates to the configured backend and records every encoded input
#[derive(Debug, Default)]
pub struct RecordingKdf {
    inputs: RefCell<Vec<KdfInput>>,
}

impl RecordingKdf {
    pub fn inputs(&self) -> Vec<KdfInput> {
        self.inputs.borrow().clone()
    }
}

impl KeyDerivation for RecordingKdf {
    fn derive(&self, key: &[u8], input: &KdfInput) -> Result<KdfOutput, KdfError> {
        self.inputs.borrow_mut().push(input.clone());
        Kdf::default().derive(key, input)
    }
}

/// Fails whenever it is invoked with the given function code
#[derive(Clone, Copy, Debug)]
pub struct FailingKdf {
    fail_on: FunctionCode,
}

impl FailingKdf {
    pub const REASON: &'static str = "injected failure";

    pub fn new(fail_on: FunctionCode) -> Self {
        Self { fail_on }
    }
}

impl KeyDerivation for FailingKdf {
    fn derive(&self, key: &[u8], input: &KdfInput) -> Result<KdfOutput, KdfError> {
        if input.function_code() == self.fail_on as u8 {
            return Err(KdfError::Backend(Self::REASON.into()));
        }

        Kdf::default().derive(key, input)
    }
}
