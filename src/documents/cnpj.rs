//! CNPJ (Cadastro Nacional da Pessoa Jurídica) validation and formatting.

use crate::core::BrazilConfig;
use crate::core::checksum::{ChecksumSpec, ResiduePolicy, parse_digits};
use crate::core::mask::{self, apply_mask, left_pad_zeros, strip_mask};

/// Display mask for a full-width CNPJ: `##.###.###/####-##`.
pub const CNPJ_MASK: &str = "##.###.###/####-##";

const CNPJ_CONTROL_CHARS: &str = "./-";

/// Both CNPJ check digits use the cyclic 2..=9 weight sequence, the same
/// scheme the fiscal access keys use.
const CNPJ_DV: ChecksumSpec = ChecksumSpec {
    modulus: 11,
    weights: &[2, 3, 4, 5, 6, 7, 8, 9],
    fold_products: false,
    policy: ResiduePolicy::Mod11ZeroFloor,
};

/// Validator and formatter for CNPJ numbers.
#[derive(Debug, Clone)]
pub struct CnpjValidator {
    length: usize,
}

impl CnpjValidator {
    /// Build a validator from the supplied configuration.
    pub fn new(config: &BrazilConfig) -> Self {
        Self {
            length: config.cnpj_length,
        }
    }

    /// Format a numeric CNPJ as `##.###.###/####-##`, zero-padding the
    /// payload to full width first.
    ///
    /// Input that already contains the mask's dot separator is returned
    /// unchanged, as is blank input.
    pub fn format(&self, cnpj: &str) -> String {
        if cnpj.trim().is_empty() || cnpj.contains(mask::DOT) {
            return cnpj.to_string();
        }
        apply_mask(
            &left_pad_zeros(cnpj, self.length),
            CNPJ_MASK,
            CNPJ_CONTROL_CHARS,
        )
    }

    /// Strip the CNPJ mask separators.
    pub fn unformat(&self, cnpj: &str) -> String {
        strip_mask(cnpj, CNPJ_CONTROL_CHARS)
    }

    /// Check both CNPJ verification digits.
    ///
    /// Accepts raw or formatted input. Sequences of fourteen identical
    /// digits satisfy the arithmetic but are registry-reserved and
    /// rejected.
    pub fn is_valid(&self, cnpj: &str) -> bool {
        let unformatted = self.unformat(cnpj);
        let Some(digits) = parse_digits(unformatted.trim()) else {
            return false;
        };
        if digits.len() != self.length {
            return false;
        }
        if digits.iter().all(|&d| d == digits[0]) {
            return false;
        }
        CNPJ_DV.verify(&digits[..self.length - 1]) && CNPJ_DV.verify(&digits)
    }
}

impl Default for CnpjValidator {
    fn default() -> Self {
        Self::new(&BrazilConfig::default())
    }
}
