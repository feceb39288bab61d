//! Per-kind behaviour and its recursion over alternative lists

use std::fmt;

use super::display::number_to_text;
use super::equality::Primitive;
use super::resolve::{Absent, Merge, Payload, Shape};
use super::{Nil, Or, Sequence, Shared};
use crate::error::{AccessError, Result};

/// A kind that may be stored as one alternative of a `Value`.
///
/// Implemented for the scalar kinds (`bool`, `f64`, `String`) and the two
/// compound kinds (`Shared<V>`, `Sequence<V>`).
pub trait Kind: Clone {
    /// Name used in diagnostics
    const NAME: &'static str;

    /// Whether this kind supports positional element access
    const INDEXABLE: bool = false;

    /// What dereferencing this kind yields
    type RefShape: Shape;

    /// What indexing this kind yields
    type ElemShape: Shape;

    /// Boolean interpretation of the payload
    fn truthy(&self) -> bool;

    /// Comparable view of the payload for loose equality
    fn primitive(&self) -> Primitive<'_>;

    /// Native textual form
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Detailed form for `Debug`
    fn debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f)
    }

    /// The referent, if this kind is a reference
    fn referent(&self) -> Option<<Self::RefShape as Shape>::Out> {
        None
    }

    /// The element at `index`, if this kind is a sequence
    fn element(&self, _index: usize) -> Option<Result<<Self::ElemShape as Shape>::Out>> {
        None
    }

    /// Overwrite the element at `index`, if this kind is a sequence
    fn set_element(
        &self,
        _index: usize,
        _element: <Self::ElemShape as Shape>::Out,
    ) -> Option<Result<()>> {
        None
    }
}

impl Kind for bool {
    const NAME: &'static str = "boolean";

    type RefShape = Absent;
    type ElemShape = Absent;

    fn truthy(&self) -> bool {
        *self
    }

    fn primitive(&self) -> Primitive<'_> {
        Primitive::Boolean(*self)
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl Kind for f64 {
    const NAME: &'static str = "number";

    type RefShape = Absent;
    type ElemShape = Absent;

    fn truthy(&self) -> bool {
        *self != 0.0
    }

    fn primitive(&self) -> Primitive<'_> {
        Primitive::Number(*self)
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&number_to_text(*self))
    }
}

impl Kind for String {
    const NAME: &'static str = "string";

    type RefShape = Absent;
    type ElemShape = Absent;

    fn truthy(&self) -> bool {
        !self.is_empty()
    }

    fn primitive(&self) -> Primitive<'_> {
        Primitive::Text(self.as_str())
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }

    fn debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl<V: Payload> Kind for Shared<V> {
    const NAME: &'static str = "shared";

    type RefShape = V::Shape;
    type ElemShape = Absent;

    fn truthy(&self) -> bool {
        true
    }

    fn primitive(&self) -> Primitive<'_> {
        Primitive::Object(self.address())
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.read().render_payload(f)
    }

    fn debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "&")?;
        self.read().debug_payload(f)
    }

    fn referent(&self) -> Option<<V::Shape as Shape>::Out> {
        Some(self.get().into_out())
    }
}

impl<V: Payload> Kind for Sequence<V> {
    const NAME: &'static str = "sequence";
    const INDEXABLE: bool = true;

    type RefShape = Absent;
    type ElemShape = V::Shape;

    fn truthy(&self) -> bool {
        true
    }

    fn primitive(&self) -> Primitive<'_> {
        Primitive::Object(self.address())
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.read().iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            item.render_payload(f)?;
        }
        Ok(())
    }

    fn debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.read().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            item.debug_payload(f)?;
        }
        write!(f, "]")
    }

    fn element(&self, index: usize) -> Option<Result<<V::Shape as Shape>::Out>> {
        Some(self.get(index).map(Payload::into_out))
    }

    fn set_element(&self, index: usize, element: <V::Shape as Shape>::Out) -> Option<Result<()>> {
        Some(self.set(index, V::from_out(element)).map(drop))
    }
}

// ═══════════════════════════════════════════════════════════════════
// Dispatch over a whole list
// ═══════════════════════════════════════════════════════════════════

/// A list of kinds a `Value` may hold, with the resolved accessor shapes.
///
/// `RefShape` and `ElemShape` are folded over the list at compile time: each
/// kind contributes its own shape and `Merge` combines them, so the
/// dereference and index results of any combination are computed without a
/// hand-written case per combination.
pub trait Alternatives: Clone {
    /// Merged dereference shape of every kind in the list
    type RefShape: Shape;

    /// Merged index shape of every kind in the list
    type ElemShape: Shape;

    /// Name of the active kind
    fn kind_name(&self) -> &'static str;

    /// Whether the active kind supports element access
    fn indexable(&self) -> bool;

    /// Truthiness of the active kind
    fn truthy(&self) -> bool;

    /// Comparable view of the active kind
    fn primitive(&self) -> Primitive<'_>;

    /// Native text of the active kind
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Debug text of the active kind
    fn debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Referent of the active kind, `None` if it is not a reference
    fn referent(&self) -> Option<<Self::RefShape as Shape>::Out>;

    /// Element of the active kind, `None` if it is not a sequence
    fn element(&self, index: usize) -> Option<Result<<Self::ElemShape as Shape>::Out>>;

    /// Store an element into the active kind, `None` if it is not a sequence
    fn set_element(
        &self,
        index: usize,
        element: <Self::ElemShape as Shape>::Out,
    ) -> Option<Result<()>>;
}

impl Alternatives for Nil {
    type RefShape = Absent;
    type ElemShape = Absent;

    fn kind_name(&self) -> &'static str {
        match *self {}
    }

    fn indexable(&self) -> bool {
        match *self {}
    }

    fn truthy(&self) -> bool {
        match *self {}
    }

    fn primitive(&self) -> Primitive<'_> {
        match *self {}
    }

    fn render(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }

    fn debug(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }

    fn referent(&self) -> Option<Nil> {
        match *self {}
    }

    fn element(&self, _index: usize) -> Option<Result<Nil>> {
        match *self {}
    }

    fn set_element(&self, _index: usize, _element: Nil) -> Option<Result<()>> {
        match *self {}
    }
}

impl<H, T> Alternatives for Or<H, T>
where
    H: Kind,
    T: Alternatives,
    H::RefShape: Merge<T::RefShape>,
    H::ElemShape: Merge<T::ElemShape>,
{
    type RefShape = <H::RefShape as Merge<T::RefShape>>::Output;
    type ElemShape = <H::ElemShape as Merge<T::ElemShape>>::Output;

    fn kind_name(&self) -> &'static str {
        match self {
            Or::Head(_) => H::NAME,
            Or::Tail(tail) => tail.kind_name(),
        }
    }

    fn indexable(&self) -> bool {
        match self {
            Or::Head(_) => H::INDEXABLE,
            Or::Tail(tail) => tail.indexable(),
        }
    }

    fn truthy(&self) -> bool {
        match self {
            Or::Head(head) => head.truthy(),
            Or::Tail(tail) => tail.truthy(),
        }
    }

    fn primitive(&self) -> Primitive<'_> {
        match self {
            Or::Head(head) => head.primitive(),
            Or::Tail(tail) => tail.primitive(),
        }
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Or::Head(head) => head.render(f),
            Or::Tail(tail) => tail.render(f),
        }
    }

    fn debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Or::Head(head) => head.debug(f),
            Or::Tail(tail) => tail.debug(f),
        }
    }

    fn referent(&self) -> Option<<Self::RefShape as Shape>::Out> {
        match self {
            Or::Head(head) => head
                .referent()
                .map(<H::RefShape as Merge<T::RefShape>>::widen_left),
            Or::Tail(tail) => tail
                .referent()
                .map(<H::RefShape as Merge<T::RefShape>>::widen_right),
        }
    }

    fn element(&self, index: usize) -> Option<Result<<Self::ElemShape as Shape>::Out>> {
        match self {
            Or::Head(head) => head
                .element(index)
                .map(|found| found.map(<H::ElemShape as Merge<T::ElemShape>>::widen_left)),
            Or::Tail(tail) => tail
                .element(index)
                .map(|found| found.map(<H::ElemShape as Merge<T::ElemShape>>::widen_right)),
        }
    }

    fn set_element(
        &self,
        index: usize,
        element: <Self::ElemShape as Shape>::Out,
    ) -> Option<Result<()>> {
        match self {
            Or::Head(head) => {
                if !H::INDEXABLE {
                    return None;
                }
                match <H::ElemShape as Merge<T::ElemShape>>::narrow_left(element) {
                    Some(element) => head.set_element(index, element),
                    None => Some(Err(AccessError::element_mismatch(index, H::NAME))),
                }
            }
            Or::Tail(tail) => {
                if !tail.indexable() {
                    return None;
                }
                match <H::ElemShape as Merge<T::ElemShape>>::narrow_right(element) {
                    Some(element) => tail.set_element(index, element),
                    None => Some(Err(AccessError::element_mismatch(index, tail.kind_name()))),
                }
            }
        }
    }
}
