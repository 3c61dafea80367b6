//! BACEN country code validation.
//!
//! The Central Bank of Brazil assigns each country a 2–4 digit code whose
//! last digit is a mod-11 check digit (e.g. 1058 for Brazil). A handful
//! of administratively assigned codes do not satisfy the arithmetic and
//! are accepted by literal match instead.

use crate::core::BrazilConfig;
use crate::core::checksum::{ChecksumSpec, ResiduePolicy, parse_digits};

/// Codes assigned outside the check-digit rule. Sorted for binary search.
static BACEN_EXCEPTIONS: &[&str] = &[
    "1504", // Canal do Panamá
    "1508", // Zona Livre de Colón
    "3595", // Ilha de Man
    "4525", // Lebuan
    "4985", // Montenegro
    "6781", // Sérvia
    "7370", // Timor Leste
];

const BACEN_DV: ChecksumSpec = ChecksumSpec {
    modulus: 11,
    weights: &[2, 3, 4],
    fold_products: false,
    policy: ResiduePolicy::Mod11ZeroFloor,
};

/// Validator for BACEN country codes.
#[derive(Debug, Clone)]
pub struct BacenValidator {
    min_length: usize,
    max_length: usize,
}

impl BacenValidator {
    /// Build a validator from the supplied configuration.
    pub fn new(config: &BrazilConfig) -> Self {
        Self {
            min_length: config.bacen_min_length,
            max_length: config.bacen_max_length,
        }
    }

    /// Country codes carry no display mask; formatting trims only.
    pub fn format(&self, code: &str) -> String {
        code.trim().to_string()
    }

    /// Country codes carry no display mask; unformatting trims only.
    pub fn unformat(&self, code: &str) -> String {
        code.trim().to_string()
    }

    /// Check a country code's trailing digit, consulting the exception
    /// table first.
    pub fn is_valid(&self, code: &str) -> bool {
        let code = code.trim();
        let len = code.chars().count();
        if len < self.min_length || len > self.max_length {
            return false;
        }
        if BACEN_EXCEPTIONS.binary_search(&code).is_ok() {
            return true;
        }
        match parse_digits(code) {
            Some(digits) => BACEN_DV.verify(&digits),
            None => false,
        }
    }
}

impl Default for BacenValidator {
    fn default() -> Self {
        Self::new(&BrazilConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brazil_validates_via_algorithm() {
        let bacen = BacenValidator::default();
        assert!(bacen.is_valid("1058"));
    }

    #[test]
    fn other_known_codes() {
        let bacen = BacenValidator::default();
        assert!(bacen.is_valid("2496")); // Estados Unidos
        assert!(bacen.is_valid("1619")); // Chile
        assert!(bacen.is_valid("0639")); // Argentina
    }

    #[test]
    fn exception_codes_accepted_without_recomputation() {
        let bacen = BacenValidator::default();
        for code in super::BACEN_EXCEPTIONS {
            assert!(bacen.is_valid(code), "{code}");
        }
    }

    #[test]
    fn exception_codes_fail_the_generic_rule() {
        // The table exists precisely because these codes break the
        // arithmetic; guard against one silently becoming regular.
        let digits: Vec<u8> = "1504".chars().map(|c| c as u8 - b'0').collect();
        assert!(!BACEN_DV.verify(&digits));
    }

    #[test]
    fn wrong_check_digit_rejected() {
        let bacen = BacenValidator::default();
        assert!(!bacen.is_valid("1059"));
        assert!(!bacen.is_valid("2497"));
    }

    #[test]
    fn out_of_range_lengths_rejected() {
        let bacen = BacenValidator::default();
        assert!(!bacen.is_valid("1"));
        assert!(!bacen.is_valid("10588"));
        assert!(!bacen.is_valid(""));
    }

    #[test]
    fn non_digit_content_rejected() {
        let bacen = BacenValidator::default();
        assert!(!bacen.is_valid("10a8"));
    }

    #[test]
    fn exception_table_is_sorted() {
        let mut sorted = BACEN_EXCEPTIONS.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, BACEN_EXCEPTIONS);
    }
}
