//! Loose equality between values and scalars
//!
//! Comparison unwraps the active alternative into a [`Primitive`] and applies
//! [`loose_eq`]. Nothing here can fail: pairings without a rule compare
//! unequal, and an undefined value is unequal to everything, itself included.

use super::display::number_to_text;
use super::{Alternatives, Value};

/// The comparable view of an active alternative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive<'a> {
    /// A boolean payload
    Boolean(bool),
    /// A number payload
    Number(f64),
    /// A string payload
    Text(&'a str),
    /// A compound payload, identified by the address of its shared storage
    Object(usize),
}

/// Loose equality of two primitives.
///
/// - same kind: ordinary equality (`NaN` is unequal to itself)
/// - number and string: the number's canonical text equals the string; the
///   string is never parsed, so `NaN` equals the text `"NaN"`
/// - boolean and number: the boolean equals the number's truthiness
/// - compound payloads: equal only when they share storage
/// - anything else: unequal
pub fn loose_eq(a: Primitive<'_>, b: Primitive<'_>) -> bool {
    use Primitive::*;

    match (a, b) {
        (Boolean(x), Boolean(y)) => x == y,
        (Number(x), Number(y)) => x == y,
        (Text(x), Text(y)) => x == y,
        (Number(n), Text(s)) | (Text(s), Number(n)) => number_to_text(n) == s,
        (Boolean(b), Number(n)) | (Number(n), Boolean(b)) => b == (n != 0.0),
        (Object(x), Object(y)) => x == y,
        _ => false,
    }
}

impl<L: Alternatives, R: Alternatives> PartialEq<Value<R>> for Value<L> {
    fn eq(&self, other: &Value<R>) -> bool {
        match (self.primitive(), other.primitive()) {
            (Some(a), Some(b)) => loose_eq(a, b),
            _ => false,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// Scalar comparisons, both operand orders
// ═══════════════════════════════════════════════════════════════════

macro_rules! impl_scalar_eq {
    ($scalar:ty, |$s:ident| $primitive:expr) => {
        impl<L: Alternatives> PartialEq<$scalar> for Value<L> {
            fn eq(&self, other: &$scalar) -> bool {
                let $s = other;
                self.primitive()
                    .map_or(false, |active| loose_eq(active, $primitive))
            }
        }

        impl<L: Alternatives> PartialEq<Value<L>> for $scalar {
            fn eq(&self, other: &Value<L>) -> bool {
                other == self
            }
        }
    };
}

impl_scalar_eq!(f64, |n| Primitive::Number(*n));
impl_scalar_eq!(bool, |b| Primitive::Boolean(*b));
impl_scalar_eq!(str, |s| Primitive::Text(s));
impl_scalar_eq!(&str, |s| Primitive::Text(s));
impl_scalar_eq!(String, |s| Primitive::Text(s.as_str()));
