//! Display and Debug implementations for Value

use std::fmt;

use super::*;

/// Canonical decimal text of a number.
///
/// Integral values print without a fraction, `NaN` and the infinities print
/// as `NaN`, `Infinity` and `-Infinity`, negative zero prints as `0`, and
/// magnitudes at or above `1e21` or below `1e-6` switch to exponent form
/// (`1e+21`, `1.5e-7`). This is the text a number is compared as when it
/// meets a string.
pub fn number_to_text(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let scientific = format!("{:e}", n);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if (-6..21).contains(&exponent) {
        format!("{}", n)
    } else if exponent < 0 {
        format!("{}e{}", mantissa, exponent)
    } else {
        format!("{}e+{}", mantissa, exponent)
    }
}

impl<L: Alternatives> fmt::Debug for Value<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.slot {
            None => write!(f, "{}", UNDEFINED),
            Some(alts) => alts.debug(f),
        }
    }
}

impl<L: Alternatives> fmt::Display for Value<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Display is the loose textual form, Debug quotes strings
        match &self.slot {
            None => write!(f, "{}", UNDEFINED),
            Some(alts) => alts.render(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Alts;

    #[test]
    fn test_number_text_integral() {
        assert_eq!(number_to_text(5.0), "5");
        assert_eq!(number_to_text(-42.0), "-42");
        assert_eq!(number_to_text(-0.0), "0");
        assert_eq!(number_to_text(1e20), "100000000000000000000");
    }

    #[test]
    fn test_number_text_fractional() {
        assert_eq!(number_to_text(0.5), "0.5");
        assert_eq!(number_to_text(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(number_to_text(0.000001), "0.000001");
    }

    #[test]
    fn test_number_text_exponent() {
        assert_eq!(number_to_text(1e21), "1e+21");
        assert_eq!(number_to_text(1.5e-7), "1.5e-7");
        assert_eq!(number_to_text(-2.5e30), "-2.5e+30");
    }

    #[test]
    fn test_number_text_special() {
        assert_eq!(number_to_text(f64::NAN), "NaN");
        assert_eq!(number_to_text(f64::INFINITY), "Infinity");
        assert_eq!(number_to_text(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_display_vs_debug_for_strings() {
        let v = Value::<Alts![String]>::text("hi");
        assert_eq!(format!("{}", v), "hi");
        assert_eq!(format!("{:?}", v), "\"hi\"");
    }

    #[test]
    fn test_undefined_renders_literal() {
        let v = Value::<Alts![f64]>::new();
        assert_eq!(v.to_string(), "undefined");
        assert_eq!(format!("{:?}", v), "undefined");
    }
}
