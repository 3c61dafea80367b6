//! Decimal-exact installment splitting for boletos and payment plans.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::core::FiscoError;

/// Split `total` into `count` installments of two decimal places.
///
/// The per-installment amount is `total / count` rounded half-up; the
/// first `count - 1` installments carry that amount and the last absorbs
/// the rounding remainder, so the returned amounts always sum to `total`
/// exactly — no cent is lost or gained.
///
/// A zero `count` is a caller mistake and yields
/// [`FiscoError::InvalidArgument`].
///
/// ```rust
/// use fisco::installment::split_installments;
/// use rust_decimal_macros::dec;
///
/// let parts = split_installments(3, dec!(100)).unwrap();
/// assert_eq!(parts, vec![dec!(33.33), dec!(33.33), dec!(33.34)]);
/// ```
pub fn split_installments(count: u32, total: Decimal) -> Result<Vec<Decimal>, FiscoError> {
    if count == 0 {
        return Err(FiscoError::InvalidArgument(
            "installment count must be at least 1".into(),
        ));
    }
    let count_dec = Decimal::from(count);
    let per_installment = (total / count_dec)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let mut installments = vec![per_installment; (count - 1) as usize];
    installments.push(total - per_installment * Decimal::from(count - 1));
    Ok(installments)
}
