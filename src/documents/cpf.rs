//! CPF (Cadastro de Pessoas Físicas) validation and formatting.

use crate::core::BrazilConfig;
use crate::core::checksum::{ChecksumSpec, ResiduePolicy, parse_digits};
use crate::core::mask::{self, apply_mask, left_pad_zeros, strip_mask};

/// Display mask for a full-width CPF: `###.###.###-##`.
pub const CPF_MASK: &str = "###.###.###-##";

const CPF_CONTROL_CHARS: &str = ".-";

/// First check digit: weights 2..=10 over the 9 base digits.
const CPF_DV1: ChecksumSpec = ChecksumSpec {
    modulus: 11,
    weights: &[2, 3, 4, 5, 6, 7, 8, 9, 10],
    fold_products: false,
    policy: ResiduePolicy::Mod11ZeroFloor,
};

/// Second check digit: weights 2..=11 over the base digits plus DV1.
const CPF_DV2: ChecksumSpec = ChecksumSpec {
    modulus: 11,
    weights: &[2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
    fold_products: false,
    policy: ResiduePolicy::Mod11ZeroFloor,
};

/// Validator and formatter for CPF numbers.
#[derive(Debug, Clone)]
pub struct CpfValidator {
    length: usize,
}

impl CpfValidator {
    /// Build a validator from the supplied configuration.
    pub fn new(config: &BrazilConfig) -> Self {
        Self {
            length: config.cpf_length,
        }
    }

    /// Format a numeric CPF as `###.###.###-##`, zero-padding the payload
    /// to full width first.
    ///
    /// Input that already contains the mask's dot separator is returned
    /// unchanged, as is blank input.
    pub fn format(&self, cpf: &str) -> String {
        if cpf.trim().is_empty() || cpf.contains(mask::DOT) {
            return cpf.to_string();
        }
        apply_mask(&left_pad_zeros(cpf, self.length), CPF_MASK, CPF_CONTROL_CHARS)
    }

    /// Strip the CPF mask separators.
    pub fn unformat(&self, cpf: &str) -> String {
        strip_mask(cpf, CPF_CONTROL_CHARS)
    }

    /// Check both CPF verification digits.
    ///
    /// Accepts raw or formatted input. Sequences of eleven identical
    /// digits satisfy the arithmetic but are registry-reserved and
    /// rejected.
    pub fn is_valid(&self, cpf: &str) -> bool {
        let unformatted = self.unformat(cpf);
        let Some(digits) = parse_digits(unformatted.trim()) else {
            return false;
        };
        if digits.len() != self.length {
            return false;
        }
        if digits.iter().all(|&d| d == digits[0]) {
            return false;
        }
        CPF_DV1.verify(&digits[..self.length - 1]) && CPF_DV2.verify(&digits)
    }
}

impl Default for CpfValidator {
    fn default() -> Self {
        Self::new(&BrazilConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_raw_cpf() {
        let cpf = CpfValidator::default();
        assert_eq!(cpf.format("12345678909"), "123.456.789-09");
    }

    #[test]
    fn format_zero_pads_short_input() {
        let cpf = CpfValidator::default();
        assert_eq!(cpf.format("345678909"), "003.456.789-09");
    }

    #[test]
    fn format_is_idempotent() {
        let cpf = CpfValidator::default();
        let formatted = cpf.format("12345678909");
        assert_eq!(cpf.format(&formatted), formatted);
    }

    #[test]
    fn unformat_strips_separators() {
        let cpf = CpfValidator::default();
        assert_eq!(cpf.unformat("123.456.789-09"), "12345678909");
    }

    #[test]
    fn valid_cpfs() {
        let cpf = CpfValidator::default();
        assert!(cpf.is_valid("12345678909"));
        assert!(cpf.is_valid("52998224725"));
        assert!(cpf.is_valid("123.456.789-09"));
    }

    #[test]
    fn wrong_check_digit_rejected() {
        let cpf = CpfValidator::default();
        assert!(!cpf.is_valid("12345678900"));
        assert!(!cpf.is_valid("52998224726"));
    }

    #[test]
    fn repeated_digit_sequences_rejected() {
        let cpf = CpfValidator::default();
        assert!(!cpf.is_valid("00000000000"));
        assert!(!cpf.is_valid("11111111111"));
        assert!(!cpf.is_valid("99999999999"));
    }

    #[test]
    fn wrong_length_rejected() {
        let cpf = CpfValidator::default();
        assert!(!cpf.is_valid("1234567890"));
        assert!(!cpf.is_valid("123456789090"));
        assert!(!cpf.is_valid(""));
    }

    #[test]
    fn non_digit_content_rejected() {
        let cpf = CpfValidator::default();
        assert!(!cpf.is_valid("1234567890a"));
        assert!(!cpf.is_valid("abc.def.ghi-jk"));
    }
}
