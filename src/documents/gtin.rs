//! GTIN/CEAN barcode validation.
//!
//! GTINs (Global Trade Item Numbers, the cEAN field of an NFe item) come
//! in four widths: GTIN-8 (EAN-8), GTIN-12 (UPC), GTIN-13 (EAN) and
//! GTIN-14 (DUN-14). All share one checksum: alternating 3/1 weights from
//! the rightmost payload digit, closed by `(1000 - sum) % 10`.

use crate::core::BrazilConfig;
use crate::core::checksum::{ChecksumSpec, ResiduePolicy, parse_digits};

/// Digit counts of the four GTIN structures.
pub const GTIN_LENGTHS: &[usize] = &[8, 12, 13, 14];

const GTIN_DV: ChecksumSpec = ChecksumSpec {
    modulus: 10,
    weights: &[3, 1],
    fold_products: false,
    policy: ResiduePolicy::Mod10Complement,
};

/// Validator for GTIN/CEAN barcodes.
#[derive(Debug, Clone, Default)]
pub struct GtinValidator;

impl GtinValidator {
    /// Build a validator from the supplied configuration.
    ///
    /// GTIN widths are fixed by the GS1 structures rather than
    /// configurable; the config parameter keeps the constructor shape
    /// uniform with the other validators.
    pub fn new(_config: &BrazilConfig) -> Self {
        Self
    }

    /// Barcodes carry no display mask; formatting trims only.
    pub fn format(&self, gtin: &str) -> String {
        gtin.trim().to_string()
    }

    /// Barcodes carry no display mask; unformatting trims only.
    pub fn unformat(&self, gtin: &str) -> String {
        gtin.trim().to_string()
    }

    /// Check a barcode's trailing digit.
    ///
    /// Only the four GS1 widths are accepted. All-zero codes are
    /// placeholder fillers, not real item numbers, and are rejected even
    /// though the arithmetic holds for them.
    pub fn is_valid(&self, gtin: &str) -> bool {
        let gtin = gtin.trim();
        if !GTIN_LENGTHS.contains(&gtin.chars().count()) {
            return false;
        }
        let Some(digits) = parse_digits(gtin) else {
            return false;
        };
        if digits.iter().all(|&d| d == 0) {
            return false;
        }
        GTIN_DV.verify(&digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gtin13_valid() {
        let gtin = GtinValidator::default();
        assert!(gtin.is_valid("4006381333931"));
    }

    #[test]
    fn altering_the_check_digit_invalidates() {
        let gtin = GtinValidator::default();
        for digit in 0..=9u8 {
            if digit == 1 {
                continue;
            }
            let candidate = format!("400638133393{digit}");
            assert!(!gtin.is_valid(&candidate), "{candidate}");
        }
    }

    #[test]
    fn all_four_widths_validate() {
        let gtin = GtinValidator::default();
        assert!(gtin.is_valid("90311017")); // GTIN-8
        assert!(gtin.is_valid("036000291452")); // GTIN-12 (UPC-A)
        assert!(gtin.is_valid("4006381333931")); // GTIN-13
        assert!(gtin.is_valid("18412345678902")); // GTIN-14
    }

    #[test]
    fn unsupported_widths_rejected() {
        let gtin = GtinValidator::default();
        assert!(!gtin.is_valid("9031101")); // 7
        assert!(!gtin.is_valid("4006381333")); // 10
        assert!(!gtin.is_valid("400638133393931")); // 15
        assert!(!gtin.is_valid(""));
    }

    #[test]
    fn all_zero_codes_rejected() {
        let gtin = GtinValidator::default();
        assert!(!gtin.is_valid("00000000"));
        assert!(!gtin.is_valid("000000000000"));
        assert!(!gtin.is_valid("0000000000000"));
        assert!(!gtin.is_valid("00000000000000"));
    }

    #[test]
    fn non_digit_content_rejected() {
        let gtin = GtinValidator::default();
        assert!(!gtin.is_valid("40063813339a1"));
        assert!(!gtin.is_valid("4006381-333931"));
    }
}
