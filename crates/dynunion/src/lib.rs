//! # dynunion
//!
//! Loosely-typed, JavaScript-like values for statically typed Rust code.
//!
//! A [`Value<L>`] holds either nothing (*undefined*) or exactly one of the
//! kinds listed in `L`: booleans, numbers, strings, shared references and
//! ordered sequences. Every value supports the same truthiness, loose
//! equality and text rendering regardless of which kind is active.
//!
//! ## Architecture
//!
//! - **Alternative lists**: `L` is a type-level list built with [`Alts!`]
//! - **Resolver**: dereference and index result types ([`Referenced`],
//!   [`Element`]) are computed from `L` at compile time, splicing nested
//!   value alternatives instead of wrapping a value inside a value
//! - **Equality**: [`loose_eq`] coerces numbers to their canonical text when
//!   they meet strings; undefined is never equal to anything
//! - **Formatting**: `Display` renders the active kind's native text
//!
//! ## Example
//!
//! ```
//! use dynunion::{Alts, Sequence, Value};
//!
//! type Item = Value<Alts![f64, String]>;
//! type List = Value<Alts![bool, Sequence<Item>]>;
//!
//! let list = List::sequence(vec![Item::number(1.0), Item::text("two")]);
//!
//! // Indexing a sequence of values yields the inner value type directly.
//! let second: Item = list.element(1).unwrap();
//! assert!(second == "two");
//! assert_eq!(list.to_string(), "1,two");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bulk;
pub mod error;
pub mod math;
pub mod value;

// Re-export main types
pub use error::{AccessError, Result};
pub use value::{
    loose_eq, number_to_text, Absent, Alternatives, Append, Element, Here, Inject, Kind, Many,
    Merge, Nil, One, Or, Payload, Primitive, Referenced, Resolved, Select, Sequence, Shape,
    Shared, There, Value, UNDEFINED,
};

/// dynunion version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
