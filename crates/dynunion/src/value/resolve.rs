//! Compile-time resolution of dereference and index result types
//!
//! Every kind reports the *shape* of what it dereferences to and what it
//! indexes to:
//!
//! - [`Absent`]: the kind does not support the operation
//! - [`One<K>`]: the result is a plain `K`
//! - [`Many<A>`]: the result is a `Value<A>`
//!
//! Folding [`Merge`] over an alternative list combines those shapes. Two
//! `One`s become a `Many` over both kinds, and a `Many` absorbs further kinds
//! by list concatenation. A payload that is itself a `Value<A>` reports
//! `Many<A>`, so nested alternative sets are spliced into the result instead
//! of producing a `Value` inside a `Value`.
//!
//! Kinds are concatenated, not deduplicated: two sequences of `f64` index to
//! a `Value` listing `f64` twice.
//!
//! A list with no reference alternative resolves its dereference shape to
//! [`Absent`], which is not [`Resolved`], so the accessor is rejected:
//!
//! ```compile_fail
//! use dynunion::{Alts, Value};
//!
//! let v = Value::<Alts![bool, f64]>::number(1.0);
//! let _ = v.referent();
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::alternatives::{Append, Nil, Or};
use super::kind::{Alternatives, Kind};
use super::{Sequence, Shared, Value};

/// A resolved accessor shape.
pub trait Shape {
    /// The concrete type an accessor of this shape returns
    type Out;
}

/// Accessor not supported.
pub enum Absent {}

/// Accessor returns a plain `K`.
pub struct One<K>(PhantomData<K>);

/// Accessor returns a `Value<A>`.
pub struct Many<A>(PhantomData<A>);

impl Shape for Absent {
    type Out = Nil;
}

impl<K> Shape for One<K> {
    type Out = K;
}

impl<A> Shape for Many<A> {
    type Out = Value<A>;
}

/// Shapes whose accessor is actually callable.
///
/// The accessors on `Value` require this bound, so dereferencing a value
/// without any reference alternative does not compile.
pub trait Resolved: Shape {}

impl<K> Resolved for One<K> {}

impl<A> Resolved for Many<A> {}

/// Type of `value.referent()` for a `Value<L>`.
pub type Referenced<L> = <<L as Alternatives>::RefShape as Shape>::Out;

/// Type of `value.element(i)` for a `Value<L>`.
pub type Element<L> = <<L as Alternatives>::ElemShape as Shape>::Out;

// ═══════════════════════════════════════════════════════════════════
// Merging shapes
// ═══════════════════════════════════════════════════════════════════

/// Combine the shape of one alternative with the shape of the rest.
///
/// `widen_*` embeds a result of either side into the merged result;
/// `narrow_*` goes the other way and fails when the merged result holds a
/// kind that side cannot produce.
pub trait Merge<B: Shape>: Shape {
    /// Merged shape
    type Output: Shape;

    /// Embed a left-hand result
    fn widen_left(out: Self::Out) -> <Self::Output as Shape>::Out;

    /// Embed a right-hand result
    fn widen_right(out: B::Out) -> <Self::Output as Shape>::Out;

    /// Project back onto the left-hand side
    fn narrow_left(out: <Self::Output as Shape>::Out) -> Option<Self::Out>;

    /// Project back onto the right-hand side
    fn narrow_right(out: <Self::Output as Shape>::Out) -> Option<B::Out>;
}

impl<B: Shape> Merge<B> for Absent {
    type Output = B;

    fn widen_left(out: Nil) -> B::Out {
        match out {}
    }

    fn widen_right(out: B::Out) -> B::Out {
        out
    }

    fn narrow_left(_out: B::Out) -> Option<Nil> {
        None
    }

    fn narrow_right(out: B::Out) -> Option<B::Out> {
        Some(out)
    }
}

impl<K> Merge<Absent> for One<K> {
    type Output = One<K>;

    fn widen_left(out: K) -> K {
        out
    }

    fn widen_right(out: Nil) -> K {
        match out {}
    }

    fn narrow_left(out: K) -> Option<K> {
        Some(out)
    }

    fn narrow_right(_out: K) -> Option<Nil> {
        None
    }
}

impl<A> Merge<Absent> for Many<A> {
    type Output = Many<A>;

    fn widen_left(out: Value<A>) -> Value<A> {
        out
    }

    fn widen_right(out: Nil) -> Value<A> {
        match out {}
    }

    fn narrow_left(out: Value<A>) -> Option<Value<A>> {
        Some(out)
    }

    fn narrow_right(_out: Value<A>) -> Option<Nil> {
        None
    }
}

impl<K, K2> Merge<One<K2>> for One<K> {
    type Output = Many<Or<K, Or<K2, Nil>>>;

    fn widen_left(out: K) -> Value<Or<K, Or<K2, Nil>>> {
        Value::from_alts(Or::Head(out))
    }

    fn widen_right(out: K2) -> Value<Or<K, Or<K2, Nil>>> {
        Value::from_alts(Or::Tail(Or::Head(out)))
    }

    fn narrow_left(out: Value<Or<K, Or<K2, Nil>>>) -> Option<K> {
        match out.into_alts()? {
            Or::Head(kind) => Some(kind),
            Or::Tail(_) => None,
        }
    }

    fn narrow_right(out: Value<Or<K, Or<K2, Nil>>>) -> Option<K2> {
        match out.into_alts()? {
            Or::Tail(Or::Head(kind)) => Some(kind),
            _ => None,
        }
    }
}

impl<K, A> Merge<Many<A>> for One<K> {
    type Output = Many<Or<K, A>>;

    fn widen_left(out: K) -> Value<Or<K, A>> {
        Value::from_alts(Or::Head(out))
    }

    fn widen_right(out: Value<A>) -> Value<Or<K, A>> {
        out.map_alts(Or::Tail)
    }

    fn narrow_left(out: Value<Or<K, A>>) -> Option<K> {
        match out.into_alts()? {
            Or::Head(kind) => Some(kind),
            Or::Tail(_) => None,
        }
    }

    fn narrow_right(out: Value<Or<K, A>>) -> Option<Value<A>> {
        match out.into_alts() {
            None => Some(Value::undefined()),
            Some(Or::Head(_)) => None,
            Some(Or::Tail(rest)) => Some(Value::from_alts(rest)),
        }
    }
}

impl<A, K> Merge<One<K>> for Many<A>
where
    A: Append<Or<K, Nil>>,
{
    type Output = Many<<A as Append<Or<K, Nil>>>::Output>;

    fn widen_left(out: Value<A>) -> Value<A::Output> {
        out.map_alts(<A as Append<Or<K, Nil>>>::append_left)
    }

    fn widen_right(out: K) -> Value<A::Output> {
        Value::from_alts(<A as Append<Or<K, Nil>>>::append_right(Or::Head(out)))
    }

    fn narrow_left(out: Value<A::Output>) -> Option<Value<A>> {
        match out.into_alts() {
            None => Some(Value::undefined()),
            Some(joined) => <A as Append<Or<K, Nil>>>::split(joined)
                .ok()
                .map(Value::from_alts),
        }
    }

    fn narrow_right(out: Value<A::Output>) -> Option<K> {
        match <A as Append<Or<K, Nil>>>::split(out.into_alts()?) {
            Err(Or::Head(kind)) => Some(kind),
            _ => None,
        }
    }
}

impl<A, B> Merge<Many<B>> for Many<A>
where
    A: Append<B>,
{
    type Output = Many<<A as Append<B>>::Output>;

    fn widen_left(out: Value<A>) -> Value<A::Output> {
        out.map_alts(<A as Append<B>>::append_left)
    }

    fn widen_right(out: Value<B>) -> Value<A::Output> {
        out.map_alts(<A as Append<B>>::append_right)
    }

    fn narrow_left(out: Value<A::Output>) -> Option<Value<A>> {
        match out.into_alts() {
            None => Some(Value::undefined()),
            Some(joined) => <A as Append<B>>::split(joined).ok().map(Value::from_alts),
        }
    }

    fn narrow_right(out: Value<A::Output>) -> Option<Value<B>> {
        match out.into_alts() {
            None => Some(Value::undefined()),
            Some(joined) => <A as Append<B>>::split(joined).err().map(Value::from_alts),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// Payloads: what a reference points at or a sequence stores
// ═══════════════════════════════════════════════════════════════════

/// A type that can sit behind a `Shared` or inside a `Sequence`.
///
/// Plain kinds resolve to `One<Self>`; a nested `Value<A>` resolves to
/// `Many<A>`, which is what lets the resolver splice it.
pub trait Payload: Clone {
    /// Shape this payload contributes
    type Shape: Shape;

    /// Convert into the accessor result
    fn into_out(self) -> <Self::Shape as Shape>::Out;

    /// Convert an accessor result back into a stored payload
    fn from_out(out: <Self::Shape as Shape>::Out) -> Self;

    /// Native text of the payload
    fn render_payload(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Debug text of the payload
    fn debug_payload(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

macro_rules! kind_payload {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Payload for $ty {
                type Shape = One<$ty>;

                fn into_out(self) -> $ty {
                    self
                }

                fn from_out(out: $ty) -> Self {
                    out
                }

                fn render_payload(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    Kind::render(self, f)
                }

                fn debug_payload(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    Kind::debug(self, f)
                }
            }
        )*
    };
}

kind_payload!(bool, f64, String);

impl<V: Payload> Payload for Shared<V> {
    type Shape = One<Shared<V>>;

    fn into_out(self) -> Self {
        self
    }

    fn from_out(out: Self) -> Self {
        out
    }

    fn render_payload(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Kind::render(self, f)
    }

    fn debug_payload(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Kind::debug(self, f)
    }
}

impl<V: Payload> Payload for Sequence<V> {
    type Shape = One<Sequence<V>>;

    fn into_out(self) -> Self {
        self
    }

    fn from_out(out: Self) -> Self {
        out
    }

    fn render_payload(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Kind::render(self, f)
    }

    fn debug_payload(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Kind::debug(self, f)
    }
}

impl<A: Alternatives> Payload for Value<A> {
    type Shape = Many<A>;

    fn into_out(self) -> Self {
        self
    }

    fn from_out(out: Self) -> Self {
        out
    }

    fn render_payload(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }

    fn debug_payload(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
