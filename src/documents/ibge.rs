//! IBGE municipality code validation.
//!
//! Municipality codes are 7 digits: two for the state, four for the
//! municipality, and a mod-10 check digit computed with alternating 1/2
//! weights whose products are digit-folded before summing. A small set of
//! historically assigned codes fails the rule and is accepted by literal
//! match.

use crate::core::BrazilConfig;
use crate::core::checksum::{ChecksumSpec, ResiduePolicy, parse_digits};

/// Codes assigned outside the check-digit rule. Sorted for binary search.
static IBGE_EXCEPTIONS: &[&str] = &[
    "2201919", // Bom Princípio do Piauí (PI)
    "2201988", // Brejo do Piauí (PI)
    "2202251", // Canavieira (PI)
    "2611533", // Quixaba (PE)
    "3117836", // Cônego Marinho (MG)
    "3152131", // Ponto Chique (MG)
    "4305871", // Coronel Barros (RS)
    "5203939", // Buriti de Goiás (GO)
    "5203962", // Buritinópolis (GO)
];

const IBGE_DV: ChecksumSpec = ChecksumSpec {
    modulus: 10,
    weights: &[2, 1],
    fold_products: true,
    policy: ResiduePolicy::Mod10Complement,
};

/// Validator for IBGE municipality codes.
#[derive(Debug, Clone)]
pub struct IbgeValidator {
    length: usize,
}

impl IbgeValidator {
    /// Build a validator from the supplied configuration.
    pub fn new(config: &BrazilConfig) -> Self {
        Self {
            length: config.ibge_length,
        }
    }

    /// Municipality codes carry no display mask; formatting trims only.
    pub fn format(&self, code: &str) -> String {
        code.trim().to_string()
    }

    /// Municipality codes carry no display mask; unformatting trims only.
    pub fn unformat(&self, code: &str) -> String {
        code.trim().to_string()
    }

    /// Check a municipality code's trailing digit, consulting the
    /// exception table first.
    pub fn is_valid(&self, code: &str) -> bool {
        let code = code.trim();
        if code.chars().count() != self.length {
            return false;
        }
        if IBGE_EXCEPTIONS.binary_search(&code).is_ok() {
            return true;
        }
        match parse_digits(code) {
            Some(digits) => IBGE_DV.verify(&digits),
            None => false,
        }
    }
}

impl Default for IbgeValidator {
    fn default() -> Self {
        Self::new(&BrazilConfig::default())
    }
}
