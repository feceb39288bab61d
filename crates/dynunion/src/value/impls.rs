//! Value operations: constructors, assignment, extractors, truthiness, accessors

use super::*;
use crate::error::{AccessError, Result};

// ═══════════════════════════════════════════════════════════════════
// Convenience Constructors
// ═══════════════════════════════════════════════════════════════════

impl<L: Alternatives> Value<L> {
    /// Create an undefined value
    pub fn new() -> Self {
        Self::undefined()
    }

    /// Create a value holding `kind`
    pub fn from_kind<K, I>(kind: K) -> Self
    where
        L: Inject<K, I>,
    {
        Self::from_alts(L::inject(kind))
    }

    /// Create a number value
    pub fn number<N: Into<f64>, I>(n: N) -> Self
    where
        L: Inject<f64, I>,
    {
        Self::from_kind::<f64, I>(n.into())
    }

    /// Create a string value
    pub fn text<S: Into<String>, I>(s: S) -> Self
    where
        L: Inject<String, I>,
    {
        Self::from_kind::<String, I>(s.into())
    }

    /// Create a value holding a fresh shared referent
    pub fn shared<V, I>(referent: V) -> Self
    where
        L: Inject<Shared<V>, I>,
    {
        Self::from_kind(Shared::new(referent))
    }

    /// Create a value holding a fresh sequence
    pub fn sequence<V, It, I>(items: It) -> Self
    where
        It: IntoIterator<Item = V>,
        L: Inject<Sequence<V>, I>,
    {
        Self::from_kind(items.into_iter().collect::<Sequence<V>>())
    }

    // ═══════════════════════════════════════════════════════════════════
    // Assignment
    // ═══════════════════════════════════════════════════════════════════

    /// Install `kind` as the active alternative, dropping the previous one
    pub fn set<K, I>(&mut self, kind: K) -> &mut Self
    where
        L: Inject<K, I>,
    {
        let previous = self.kind_name();
        self.slot = Some(L::inject(kind));
        tracing::trace!(from = previous, to = self.kind_name(), "replaced value alternative");
        self
    }

    /// Install a number alternative
    pub fn set_number<N: Into<f64>, I>(&mut self, n: N) -> &mut Self
    where
        L: Inject<f64, I>,
    {
        self.set::<f64, I>(n.into())
    }

    /// Install a string alternative
    pub fn set_text<S: Into<String>, I>(&mut self, s: S) -> &mut Self
    where
        L: Inject<String, I>,
    {
        self.set::<String, I>(s.into())
    }

    /// Drop the active alternative, leaving the value undefined
    pub fn clear(&mut self) {
        if let Some(previous) = self.slot.take() {
            tracing::trace!(from = previous.kind_name(), "cleared value alternative");
        }
    }

    /// Move the value out, leaving undefined in its place
    pub fn take(&mut self) -> Self {
        Self {
            slot: self.slot.take(),
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Predicates and Extractors
    // ═══════════════════════════════════════════════════════════════════

    /// Name of the active kind ("undefined" when none)
    pub fn kind_name(&self) -> &'static str {
        self.slot.as_ref().map_or(UNDEFINED, Alternatives::kind_name)
    }

    /// Boolean interpretation: undefined is false, booleans are themselves,
    /// numbers are true when nonzero, strings when nonempty, compound kinds
    /// always
    pub fn is_truthy(&self) -> bool {
        self.slot.as_ref().map_or(false, Alternatives::truthy)
    }

    /// Comparable view of the active kind, `None` if undefined
    pub fn primitive(&self) -> Option<Primitive<'_>> {
        self.slot.as_ref().map(Alternatives::primitive)
    }

    /// Borrow the payload if `K` is the active kind
    pub fn get<K, I>(&self) -> Option<&K>
    where
        L: Select<K, I>,
    {
        self.slot.as_ref().and_then(|alts| alts.select())
    }

    /// Mutably borrow the payload if `K` is the active kind
    pub fn get_mut<K, I>(&mut self) -> Option<&mut K>
    where
        L: Select<K, I>,
    {
        self.slot.as_mut().and_then(|alts| alts.select_mut())
    }

    /// Extract a number payload
    pub fn as_f64<I>(&self) -> Option<f64>
    where
        L: Select<f64, I>,
    {
        self.get::<f64, I>().copied()
    }

    /// Extract a boolean payload
    pub fn as_bool<I>(&self) -> Option<bool>
    where
        L: Select<bool, I>,
    {
        self.get::<bool, I>().copied()
    }

    /// Extract a string payload
    pub fn as_str<I>(&self) -> Option<&str>
    where
        L: Select<String, I>,
    {
        self.get::<String, I>().map(String::as_str)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Accessors
    // ═══════════════════════════════════════════════════════════════════

    /// Dereference the active shared alternative.
    ///
    /// The result type merges the referent types of every `Shared` kind in
    /// `L`; see [`Referenced`].
    ///
    /// # Errors
    ///
    /// Returns `InvalidAccess` if the active alternative is not a reference.
    pub fn referent(&self) -> Result<Referenced<L>>
    where
        L::RefShape: Resolved,
    {
        let alts = self.active("dereference")?;
        alts.referent()
            .ok_or_else(|| AccessError::invalid("dereference", alts.kind_name()))
    }

    /// Read the element at `index` of the active sequence alternative.
    ///
    /// The result type merges the element types of every `Sequence` kind in
    /// `L`, splicing nested value alternatives; see [`Element`].
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `index` is past the end, and
    /// `InvalidAccess` if the active alternative is not a sequence.
    pub fn element(&self, index: usize) -> Result<Element<L>>
    where
        L::ElemShape: Resolved,
    {
        let alts = self.active("index")?;
        alts.element(index)
            .unwrap_or_else(|| Err(AccessError::invalid("index", alts.kind_name())))
    }

    /// Overwrite the element at `index` of the active sequence alternative.
    ///
    /// The write goes into the shared buffer, so every alias of the sequence
    /// observes it.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `index` is past the end,
    /// `ElementMismatch` if the active sequence cannot store the element's
    /// kind, and `InvalidAccess` if the active alternative is not a sequence.
    pub fn set_element(&self, index: usize, element: Element<L>) -> Result<()>
    where
        L::ElemShape: Resolved,
    {
        let alts = self.active("index")?;
        alts.set_element(index, element)
            .unwrap_or_else(|| Err(AccessError::invalid("index", alts.kind_name())))
    }

    fn active(&self, operation: &'static str) -> Result<&L> {
        self.slot
            .as_ref()
            .ok_or_else(|| AccessError::invalid(operation, UNDEFINED))
    }
}

impl<L: Alternatives> From<&Value<L>> for bool {
    fn from(value: &Value<L>) -> Self {
        value.is_truthy()
    }
}
