//! An ordered map and set based on an AVL tree.
//!
//! The tree is height-balanced: after every insertion or removal the heights
//! of any node's subtrees differ by at most one, so `insert`, `remove`, and
//! lookup all run in O(log n) time regardless of the order in which items were
//! inserted.
//!
//! Ordering is controlled by a comparator from the `compare` crate, which
//! defaults to the natural order of the keys.

pub mod map;
pub mod set;

mod node;

#[cfg(feature = "ordered_iter")]
mod ordered_iter;

#[cfg(feature = "quickcheck")]
mod quickcheck;

pub use self::map::Map;
pub use self::set::Set;
