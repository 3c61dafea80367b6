//! Brazilian phone number formatting and shape checks.
//!
//! Four layouts are recognized, dispatched on digit count: landline and
//! mobile, each with or without the two-digit area code (DDD).

use crate::core::BrazilConfig;
use crate::core::checksum::parse_digits;
use crate::core::mask::{self, apply_mask, strip_mask};

/// Landline without area code: `####-####` (8 digits).
pub const PHONE_MASK: &str = "####-####";
/// Mobile without area code: `#####-####` (9 digits).
pub const CELL_PHONE_MASK: &str = "#####-####";
/// Landline with area code: `(##)####-####` (10 digits).
pub const PHONE_DDD_MASK: &str = "(##)####-####";
/// Mobile with area code: `(##)#####-####` (11 digits).
pub const CELL_PHONE_DDD_MASK: &str = "(##)#####-####";

const PHONE_CONTROL_CHARS: &str = "()- ";

/// Formatter and shape validator for Brazilian phone numbers.
#[derive(Debug, Clone, Default)]
pub struct PhoneValidator;

impl PhoneValidator {
    /// Build a validator from the supplied configuration.
    ///
    /// Phone layouts are structural (8–11 digits) rather than
    /// configurable; the config parameter keeps the constructor shape
    /// uniform with the other validators.
    pub fn new(_config: &BrazilConfig) -> Self {
        Self
    }

    /// Format a phone number according to its digit count.
    ///
    /// `1333481341` becomes `(13)3348-1341`, `997843354` becomes
    /// `99784-3354`. Counts other than 8–11 are returned unchanged, as
    /// is input already carrying separators.
    pub fn format(&self, phone: &str) -> String {
        if phone.trim().is_empty()
            || phone.contains('(')
            || phone.contains(mask::DASH)
        {
            return phone.to_string();
        }
        let digits = phone.trim();
        let mask = match digits.chars().count() {
            8 => PHONE_MASK,
            9 => CELL_PHONE_MASK,
            10 => PHONE_DDD_MASK,
            11 => CELL_PHONE_DDD_MASK,
            _ => return digits.to_string(),
        };
        apply_mask(digits, mask, PHONE_CONTROL_CHARS)
    }

    /// Strip parentheses, dashes and spaces.
    pub fn unformat(&self, phone: &str) -> String {
        strip_mask(phone, PHONE_CONTROL_CHARS)
    }

    /// A phone number is valid when its unformatted digit count matches
    /// one of the four recognized layouts.
    pub fn is_valid(&self, phone: &str) -> bool {
        let unformatted = self.unformat(phone);
        match parse_digits(unformatted.trim()) {
            Some(digits) => matches!(digits.len(), 8..=11),
            None => false,
        }
    }
}
