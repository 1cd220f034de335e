use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::Deserialize;

/// Reference values of the AKMA key hierarchy, computed with an independent HMAC-SHA-256 implementation
#[derive(Deserialize, Debug)]
pub struct AkmaTest {
    pub name: String,
    #[serde(with = "hex")]
    pub kausf: Vec<u8>,
    pub supi: String,
    pub routing_indicator: String,
    pub mcc: String,
    pub mnc: String,
    pub af_id: String,
    #[serde(with = "hex")]
    pub kakma: Vec<u8>,
    pub a_kid: String,
    #[serde(with = "hex")]
    pub kaf: Vec<u8>,
}

lazy_static! {
    static ref AKMA_TEST_VECTORS: HashMap<String, AkmaTest> = {
        let tests: Vec<AkmaTest> = serde_json::from_str(include_str!("akma.json"))
            .expect("Failed to parse AKMA test vectors");
        tests
            .into_iter()
            .map(|test| (test.name.clone(), test))
            .collect()
    };
}

#[allow(clippy::missing_panics_doc)]
pub fn get_akma_test_vector(name: &str) -> &'static AkmaTest {
    AKMA_TEST_VECTORS
        .get(name)
        .unwrap_or_else(|| panic!("No AKMA test vector named {name}"))
}
