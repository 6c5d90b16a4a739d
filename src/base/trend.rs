use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Percentage change from the second-to-last to the last entry of a series
/// ordered by ascending period.
///
/// Returns `None` if there are fewer than two entries or if the earlier
/// period's total is exactly zero.
pub fn mom_growth<K>(series: &[(K, Decimal)]) -> Option<f64> {
    let [.., (_, prev), (_, last)] = series else {
        return None;
    };
    if prev.is_zero() {
        return None;
    }
    ((*last - *prev) / *prev * Decimal::ONE_HUNDRED).to_f64()
}
