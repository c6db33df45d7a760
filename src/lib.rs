//! # Poly Collections
//!
//! Generic fixed-capacity and adaptive container types for code that wants
//! predictable memory layout and cheap membership checks without committing
//! upfront to either an array or a hash-based representation.
//!
//! This crate provides `FixedVec`, `FlatMultiSet` and `PolySet`.
//!
//! ## Key Features
//!
//! * **Bounded Storage:** `FixedVec` keeps up to `N` elements inline with no heap allocation;
//!   overflow, underflow and out-of-range access are reported as `FixedVecError`, never panics.
//! * **One-Way Promotion:** `PolySet` starts as a bounded inline array (linear scans beat hashing
//!   at small sizes) and irreversibly promotes itself to a hash-set when an insert would exceed `N`,
//!   behind one uniform membership and iteration interface.
//! * **Lazy Flattening:** `FlatMultiSet` stores each distinct element once with its multiplicity
//!   and iterates the logical repeated sequence without ever materializing it.
//! * **Consistent Hashing:** all hash-backed storage uses `FnvBuildHasher` for fast hashing on
//!   small keys.
//!
//! ## Examples
//!
//! ### PolySet
//!
//! ```rust
//! use poly_collections::PolySet;
//!
//! // Threshold 2: up to two elements live inline.
//! let mut set: PolySet<&str, 2> = PolySet::new();
//!
//! set.insert("x");
//! set.insert("y");
//! assert!(!set.is_promoted());
//! assert!(set.contains("x"));
//!
//! // Third distinct element -> promotes to hash storage, once and for all.
//! set.insert("z");
//! assert!(set.is_promoted());
//! assert_eq!(set.len(), 3);
//! ```
//!
//! ### FlatMultiSet
//!
//! ```rust
//! use poly_collections::FlatMultiSet;
//!
//! let mut bag: FlatMultiSet<&str> = FlatMultiSet::new();
//! bag.insert("a");
//! bag.insert("a");
//! bag.insert("b");
//!
//! assert_eq!(bag.count("a"), 2);
//! assert_eq!(bag.len(), 3);          // sum of multiplicities
//! assert_eq!(bag.distinct_len(), 2); // distinct elements
//!
//! // Iteration expands counts lazily: "a", "a", "b" in some map order.
//! assert_eq!(bag.iter().count(), 3);
//! ```
//!
//! ### FixedVec
//!
//! ```rust
//! use poly_collections::{FixedVec, FixedVecError};
//!
//! let mut vec: FixedVec<i32, 3> = FixedVec::new();
//! vec.push(1).unwrap();
//! vec.push(2).unwrap();
//! vec.push(3).unwrap();
//!
//! assert_eq!(vec.push(4), Err(FixedVecError::CapacityExceeded));
//! assert_eq!(vec.erase(&2), 1);
//! assert_eq!(vec.as_slice(), &[1, 3]);
//! ```

// --- Module Declarations ---

pub mod multiset;
pub mod set;
pub mod vec;

// --- Re-exports ---

pub use multiset::FlatMultiSet;
pub use set::PolySet;
pub use vec::{FixedVec, FixedVecError};
