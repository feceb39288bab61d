//! Type-level alternative lists
//!
//! A `Value` is parameterised by a list of the kinds it may hold, spelled as
//! nested `Or<Head, Tail>` terminated by `Nil`. The `Alts!` macro builds the
//! nesting:
//!
//! ```
//! use dynunion::{Alts, Nil, Or};
//!
//! let _: Option<Alts![bool, f64]> = None::<Or<bool, Or<f64, Nil>>>;
//! ```
//!
//! At runtime an `Or` is just the active payload tagged by its position, so
//! every operation over a list is a recursive match on `Head`/`Tail`.

use std::marker::PhantomData;

/// Terminator of an alternative list. Uninhabited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nil {}

/// An alternative list: either the head kind is active or one in the tail.
#[derive(Debug, Clone)]
pub enum Or<H, T> {
    /// The first kind of the list is active
    Head(H),
    /// Some kind further down the list is active
    Tail(T),
}

/// Position marker: the kind sits at the head of the list.
pub struct Here;

/// Position marker: the kind sits somewhere in the tail.
pub struct There<I>(PhantomData<I>);

/// Build the alternative list type for a set of kinds.
///
/// `Alts![bool, f64, String]` expands to
/// `Or<bool, Or<f64, Or<String, Nil>>>`.
#[macro_export]
macro_rules! Alts {
    () => { $crate::Nil };
    ($head:ty $(,)?) => { $crate::Or<$head, $crate::Nil> };
    ($head:ty, $($tail:ty),+ $(,)?) => { $crate::Or<$head, $crate::Alts![$($tail),+]> };
}

// ═══════════════════════════════════════════════════════════════════
// Injection and selection by kind
// ═══════════════════════════════════════════════════════════════════

/// Place a kind into the list at its position `I`.
///
/// The position is inferred at the call site, so a kind can be injected as
/// long as it occurs exactly once in the list.
pub trait Inject<K, I> {
    /// Wrap `kind` into the list
    fn inject(kind: K) -> Self;
}

impl<K, T> Inject<K, Here> for Or<K, T> {
    fn inject(kind: K) -> Self {
        Or::Head(kind)
    }
}

impl<H, T, K, I> Inject<K, There<I>> for Or<H, T>
where
    T: Inject<K, I>,
{
    fn inject(kind: K) -> Self {
        Or::Tail(T::inject(kind))
    }
}

/// Borrow the payload of a kind if it is the active one.
pub trait Select<K, I> {
    /// Shared borrow of the payload, `None` when another kind is active
    fn select(&self) -> Option<&K>;

    /// Mutable borrow of the payload, `None` when another kind is active
    fn select_mut(&mut self) -> Option<&mut K>;
}

impl<K, T> Select<K, Here> for Or<K, T> {
    fn select(&self) -> Option<&K> {
        match self {
            Or::Head(kind) => Some(kind),
            Or::Tail(_) => None,
        }
    }

    fn select_mut(&mut self) -> Option<&mut K> {
        match self {
            Or::Head(kind) => Some(kind),
            Or::Tail(_) => None,
        }
    }
}

impl<H, T, K, I> Select<K, There<I>> for Or<H, T>
where
    T: Select<K, I>,
{
    fn select(&self) -> Option<&K> {
        match self {
            Or::Head(_) => None,
            Or::Tail(tail) => tail.select(),
        }
    }

    fn select_mut(&mut self) -> Option<&mut K> {
        match self {
            Or::Head(_) => None,
            Or::Tail(tail) => tail.select_mut(),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// Concatenation
// ═══════════════════════════════════════════════════════════════════

/// Concatenate two alternative lists positionally.
///
/// Used by the resolver to splice nested alternative sets into one list
/// without needing to know the kinds involved.
pub trait Append<R> {
    /// `Self` followed by `R`
    type Output;

    /// Embed a left-hand alternative into the concatenation
    fn append_left(self) -> Self::Output;

    /// Embed a right-hand alternative into the concatenation
    fn append_right(right: R) -> Self::Output;

    /// Recover which side an alternative of the concatenation came from
    fn split(joined: Self::Output) -> Result<Self, R>
    where
        Self: Sized;
}

impl<R> Append<R> for Nil {
    type Output = R;

    fn append_left(self) -> R {
        match self {}
    }

    fn append_right(right: R) -> R {
        right
    }

    fn split(joined: R) -> Result<Self, R> {
        Err(joined)
    }
}

impl<H, T, R> Append<R> for Or<H, T>
where
    T: Append<R>,
{
    type Output = Or<H, T::Output>;

    fn append_left(self) -> Self::Output {
        match self {
            Or::Head(head) => Or::Head(head),
            Or::Tail(tail) => Or::Tail(tail.append_left()),
        }
    }

    fn append_right(right: R) -> Self::Output {
        Or::Tail(T::append_right(right))
    }

    fn split(joined: Self::Output) -> Result<Self, R> {
        match joined {
            Or::Head(head) => Ok(Or::Head(head)),
            Or::Tail(tail) => T::split(tail).map(Or::Tail),
        }
    }
}
