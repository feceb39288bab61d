//! Bulk vector exchange entry points
//!
//! A family of plain functions over `Vec<T>` for moving raw runs of a single
//! primitive type in and out of the crate. They sit beside the value model,
//! not inside it: nothing here produces or consumes a `Value`.
//!
//! Each element type gets its own module stamped out by [`bulk_vector!`]:
//!
//! ```
//! use dynunion::bulk::float64;
//!
//! let mut v = float64::create_sized_vector(2);
//! float64::push_back(&mut v, 3.5);
//! float64::set(&mut v, 0, 1.0).unwrap();
//! assert_eq!(float64::size(&v), 3);
//! assert_eq!(float64::get(&v, 2), Ok(3.5));
//! assert!(float64::get(&v, 3).is_err());
//! ```

/// Stamp out a module of vector entry points for one element type.
///
/// `bulk_vector!(f64, float64)` defines `mod float64` with
/// `create_vector`, `create_sized_vector`, `push_back`, `get`, `set` and
/// `size`. Positional access is bounds-checked.
#[macro_export]
macro_rules! bulk_vector {
    ($elem:ty, $suffix:ident) => {
        #[doc = concat!("Vector entry points for `", stringify!($elem), "` elements")]
        pub mod $suffix {
            /// Element type of this family
            pub type Elem = $elem;

            /// Create an empty vector
            pub fn create_vector() -> Vec<Elem> {
                Vec::new()
            }

            /// Create a vector of `size` default elements
            pub fn create_sized_vector(size: usize) -> Vec<Elem> {
                let mut vector = Vec::with_capacity(size);
                vector.resize_with(size, Elem::default);
                vector
            }

            /// Append an element
            pub fn push_back(vector: &mut Vec<Elem>, value: Elem) {
                vector.push(value);
            }

            /// Copy of the element at `index`
            pub fn get(vector: &[Elem], index: usize) -> $crate::Result<Elem> {
                vector
                    .get(index)
                    .copied()
                    .ok_or($crate::AccessError::IndexOutOfBounds {
                        index,
                        len: vector.len(),
                    })
            }

            /// Overwrite the element at `index`
            pub fn set(vector: &mut [Elem], index: usize, value: Elem) -> $crate::Result<()> {
                let len = vector.len();
                match vector.get_mut(index) {
                    Some(slot) => {
                        *slot = value;
                        Ok(())
                    }
                    None => Err($crate::AccessError::IndexOutOfBounds { index, len }),
                }
            }

            /// Number of elements
            pub fn size(vector: &[Elem]) -> usize {
                vector.len()
            }
        }
    };
}

bulk_vector!(f64, float64);
bulk_vector!(f32, float32);
bulk_vector!(i32, int32);
bulk_vector!(i64, int64);
bulk_vector!(u8, uint8);
bulk_vector!(bool, boolean);
