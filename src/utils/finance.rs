use crate::constants::{EFFECT_CREDIT, EFFECT_DEBIT};

/// Applies a price effect to an unsigned amount.
///
/// The API sends amounts as magnitudes and carries the sign in a companion
/// `*-effect` field. `Debit` yields a negative amount and `Credit` a positive
/// one; `None`, the empty string or any other text leaves the amount as sent.
///
/// # Examples
/// ```
/// use tastytrade_model::utils::finance::signed_amount;
///
/// assert_eq!(signed_amount(12.5, "Debit"), -12.5);
/// assert_eq!(signed_amount(12.5, "Credit"), 12.5);
/// assert_eq!(signed_amount(12.5, "None"), 12.5);
/// ```
#[must_use]
pub fn signed_amount(value: f64, effect: &str) -> f64 {
    match effect {
        EFFECT_DEBIT => -value.abs(),
        EFFECT_CREDIT => value.abs(),
        _ => value,
    }
}

/// Sums amounts after applying their effects
pub fn net_amount<'a, I>(amounts: I) -> f64
where
    I: IntoIterator<Item = (f64, &'a str)>,
{
    amounts
        .into_iter()
        .map(|(value, effect)| signed_amount(value, effect))
        .sum()
}
