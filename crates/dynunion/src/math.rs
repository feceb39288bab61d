//! Stateless numeric helpers

/// Largest integral value not greater than `x`.
///
/// Accepts anything losslessly convertible to `f64`.
///
/// ```
/// assert_eq!(dynunion::math::floor(2.7), 2.0);
/// assert_eq!(dynunion::math::floor(-2.1), -3.0);
/// assert_eq!(dynunion::math::floor(7u32), 7.0);
/// ```
pub fn floor(x: impl Into<f64>) -> f64 {
    x.into().floor()
}
