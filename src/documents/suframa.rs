//! SUFRAMA state registration (IE) validation.
//!
//! Registrations from the Manaus Free Trade Zone come in two widths:
//! model A (8 digits) and model B (9 digits), each with its own weight
//! sequence over the payload ahead of the single check digit. The width
//! selects the model; no other lengths exist.

use crate::core::BrazilConfig;
use crate::core::checksum::{ChecksumSpec, ResiduePolicy, parse_digits};
use crate::core::mask::{self, apply_mask, strip_mask};

/// Display mask for a model B registration: `##.####.###`.
pub const SUFRAMA_MASK: &str = "##.####.###";

const SUFRAMA_CONTROL_CHARS: &str = ".-";

/// Model A: weights 8..2 over the 7 payload digits.
const SUFRAMA_MODEL_A: ChecksumSpec = ChecksumSpec {
    modulus: 11,
    weights: &[2, 3, 4, 5, 6, 7, 8],
    fold_products: false,
    policy: ResiduePolicy::Mod11TensOnly,
};

/// Model B: weights 9..2 over the 8 payload digits.
const SUFRAMA_MODEL_B: ChecksumSpec = ChecksumSpec {
    modulus: 11,
    weights: &[2, 3, 4, 5, 6, 7, 8, 9],
    fold_products: false,
    policy: ResiduePolicy::Mod11TensOnly,
};

/// Validator for SUFRAMA IE registrations, models A and B.
#[derive(Debug, Clone)]
pub struct SuframaValidator {
    model_a_length: usize,
    model_b_length: usize,
}

impl SuframaValidator {
    /// Build a validator from the supplied configuration.
    pub fn new(config: &BrazilConfig) -> Self {
        Self {
            model_a_length: config.suframa_model_a_length,
            model_b_length: config.suframa_model_b_length,
        }
    }

    /// Format a 9-digit (model B) registration as `##.####.###`.
    ///
    /// Other widths have no published mask and pass through unchanged,
    /// as does input already carrying the dot separator.
    pub fn format(&self, suframa: &str) -> String {
        let trimmed = suframa.trim();
        if trimmed.is_empty() || suframa.contains(mask::DOT) {
            return suframa.to_string();
        }
        if trimmed.chars().count() == self.model_b_length {
            apply_mask(trimmed, SUFRAMA_MASK, SUFRAMA_CONTROL_CHARS)
        } else {
            suframa.to_string()
        }
    }

    /// Strip the registration mask separators.
    pub fn unformat(&self, suframa: &str) -> String {
        strip_mask(suframa, SUFRAMA_CONTROL_CHARS)
    }

    /// Check the registration's check digit under the model its width
    /// selects. Widths other than the two models are invalid.
    pub fn is_valid(&self, suframa: &str) -> bool {
        let unformatted = self.unformat(suframa);
        let Some(digits) = parse_digits(unformatted.trim()) else {
            return false;
        };
        let spec = if digits.len() == self.model_a_length {
            SUFRAMA_MODEL_A
        } else if digits.len() == self.model_b_length {
            SUFRAMA_MODEL_B
        } else {
            return false;
        };
        spec.verify(&digits)
    }
}

impl Default for SuframaValidator {
    fn default() -> Self {
        Self::new(&BrazilConfig::default())
    }
}
