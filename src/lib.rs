//! Insertion-ordered maps and sets with a tiny per-instance footprint.
//!
//! [OrderedSmallMap] and [OrderedSmallSet] are meant for programs that keep very many collections
//! with very few elements each. Lookups are linear scans, so they are slow for large collections,
//! but an empty instance owns no heap storage at all, and elements only need `Eq`.
//!
//! ```
//! use small_collections::{smallmap, smallset};
//!
//! let mut map = smallmap! { "a" => 1, "b" => 2 };
//! assert_eq!(map.insert("a", 3), Some(1));
//! assert_eq!(map.len(), 2);
//!
//! let set = smallset! { "x", "y", "x" };
//! assert_eq!(set.len(), 2);
//! ```
#[macro_use]
mod macros;

mod cursor;
mod scan;

pub mod small_map;
pub mod small_set;

pub use cursor::CursorError;
pub use small_map::{Cursor, OrderedSmallMap};
pub use small_set::{OrderedSmallSet, SetCursor};
