//! Mathematical utility functions
//!
//! Percentage calculation utilities with proper zero-division handling.

/// Calculate percentage safely for u64 values, returning 0.0 if total is zero.
///
/// **Precision Note**: Large u64 values (>2^53) may lose precision when cast to f64.
/// This is acceptable for percentage display purposes where sub-percentage precision
/// is not critical.
///
/// # Examples
/// ```
/// use ops_by_hive::utils::math::safe_percentage_u64;
///
/// assert_eq!(safe_percentage_u64(50, 100), 50.0);
/// assert_eq!(safe_percentage_u64(50, 0), 0.0);  // Zero-division guard
/// ```
#[inline]
pub fn safe_percentage_u64(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        (part as f64 / total as f64) * 100.0
    }
}

/// Ratio of two floats as a percentage, no zero guard
///
/// Used for the fee "cost intensity" metric (USD per operation × 100) where the
/// denominator is a validated operation count.
#[inline]
pub fn ratio_percentage(numerator: f64, denominator: f64) -> f64 {
    (numerator / denominator) * 100.0
}
