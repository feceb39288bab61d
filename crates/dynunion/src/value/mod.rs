//! Value representation for loosely-typed runtime values

mod alternatives;
mod compound;
mod display;
mod equality;
mod impls;
mod kind;
mod refs;
mod resolve;

pub use alternatives::{Append, Here, Inject, Nil, Or, Select, There};
pub use compound::Sequence;
pub use display::number_to_text;
pub use equality::{loose_eq, Primitive};
pub use kind::{Alternatives, Kind};
pub use refs::Shared;
pub use resolve::{Absent, Element, Many, Merge, One, Payload, Referenced, Resolved, Shape};

/// Kind name reported for a value with no active alternative
pub const UNDEFINED: &str = "undefined";

/// A dynamic value over the alternative list `L`.
///
/// A value holds at most one alternative of `L` at a time. With none it is
/// *undefined*, which is also its default state. The alternative list is
/// spelled with the `Alts!` macro:
///
/// ```
/// use dynunion::{Alts, Shared, Value};
///
/// type Scalar = Value<Alts![bool, f64, String]>;
///
/// let mut v = Scalar::new();
/// assert!(!v.is_truthy());
///
/// v.set_text("5");
/// assert!(v == 5.0_f64);
///
/// v.set(0.0_f64);
/// assert!(!v.is_truthy());
/// assert_eq!(v.to_string(), "0");
///
/// let cell = Shared::new(1.5);
/// let r = Value::<Alts![Shared<f64>]>::from_kind(cell.clone());
/// cell.replace(2.5);
/// assert_eq!(r.referent(), Ok(2.5));
/// ```
#[derive(Clone)]
pub struct Value<L> {
    /// Active alternative, `None` while undefined
    slot: Option<L>,
}

impl<L> Value<L> {
    /// Create an undefined value
    pub const fn undefined() -> Self {
        Self { slot: None }
    }

    /// Wrap an already-built alternative list
    pub fn from_alts(alts: L) -> Self {
        Self { slot: Some(alts) }
    }

    /// Unwrap into the alternative list, `None` if undefined
    pub fn into_alts(self) -> Option<L> {
        self.slot
    }

    /// Borrow the alternative list, `None` if undefined
    pub fn alts(&self) -> Option<&L> {
        self.slot.as_ref()
    }

    /// Re-tag the active alternative into another list
    pub fn map_alts<M>(self, f: impl FnOnce(L) -> M) -> Value<M> {
        Value {
            slot: self.slot.map(f),
        }
    }

    /// Check if no alternative is active
    pub fn is_undefined(&self) -> bool {
        self.slot.is_none()
    }
}

impl<L> Default for Value<L> {
    fn default() -> Self {
        Self::undefined()
    }
}

impl<L> From<Option<L>> for Value<L> {
    fn from(slot: Option<L>) -> Self {
        Self { slot }
    }
}
