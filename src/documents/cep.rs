//! CEP (Código de Endereçamento Postal) formatting and shape checks.
//!
//! CEPs carry no check digit; validity is purely a length-and-digits
//! shape check.

use crate::core::BrazilConfig;
use crate::core::checksum::parse_digits;
use crate::core::mask::{self, apply_mask, strip_mask};

/// Display mask for a CEP: `#####-###`.
pub const CEP_MASK: &str = "#####-###";

const CEP_CONTROL_CHARS: &str = ".-";

/// Formatter and shape validator for CEP postal codes.
#[derive(Debug, Clone)]
pub struct CepValidator {
    length: usize,
}

impl CepValidator {
    /// Build a validator from the supplied configuration.
    pub fn new(config: &BrazilConfig) -> Self {
        Self {
            length: config.cep_length,
        }
    }

    /// Format a numeric CEP as `#####-###`.
    ///
    /// Input that already contains the dash separator is returned
    /// unchanged, as is blank input. Short input produces the partial
    /// prefix the mask engine could fill.
    pub fn format(&self, cep: &str) -> String {
        if cep.trim().is_empty() || cep.contains(mask::DASH) {
            return cep.to_string();
        }
        apply_mask(cep.trim(), CEP_MASK, CEP_CONTROL_CHARS)
    }

    /// Strip the CEP mask separators.
    pub fn unformat(&self, cep: &str) -> String {
        strip_mask(cep, CEP_CONTROL_CHARS)
    }

    /// A CEP is valid when it is exactly eight digits after unformatting.
    pub fn is_valid(&self, cep: &str) -> bool {
        let unformatted = self.unformat(cep);
        match parse_digits(unformatted.trim()) {
            Some(digits) => digits.len() == self.length,
            None => false,
        }
    }
}

impl Default for CepValidator {
    fn default() -> Self {
        Self::new(&BrazilConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_raw_cep() {
        let cep = CepValidator::default();
        assert_eq!(cep.format("01310100"), "01310-100");
    }

    #[test]
    fn format_is_idempotent() {
        let cep = CepValidator::default();
        assert_eq!(cep.format("01310-100"), "01310-100");
    }

    #[test]
    fn unformat_strips_separators() {
        let cep = CepValidator::default();
        assert_eq!(cep.unformat("01310-100"), "01310100");
        assert_eq!(cep.unformat("01.310-100"), "01310100");
    }

    #[test]
    fn valid_shapes() {
        let cep = CepValidator::default();
        assert!(cep.is_valid("01310100"));
        assert!(cep.is_valid("01310-100"));
    }

    #[test]
    fn invalid_shapes() {
        let cep = CepValidator::default();
        assert!(!cep.is_valid("0131010"));
        assert!(!cep.is_valid("013101000"));
        assert!(!cep.is_valid("01310-10a"));
        assert!(!cep.is_valid(""));
    }
}
