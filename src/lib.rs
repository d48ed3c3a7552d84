//! Sequential containers behind one list contract.
//!
//! This crate provides two generic list implementations with identical
//! external behavior and identical error conditions, exposed through the
//! shared [`List`] trait:
//!
//! ```text
//! ArrayList<T>   - contiguous buffer, doubling growth, shift-based splice
//! LinkedList<T>  - slab-arena nodes, sentinel-keyed links, O(1) end ops
//! ```
//!
//! # Design Philosophy
//!
//! The linked list stores its nodes in an arena ([`slab::Slab`]) and wires
//! them together with plain index keys instead of aliasing pointers. The
//! arena owns every node; `head`, `tail`, `next`, and `prev` are keys with
//! a sentinel for "no node". That keeps the whole structure in safe code
//! apart from the contiguous buffer, where uninitialized capacity past the
//! logical length is the point.
//!
//! Both containers validate indices before mutating anything: a failed
//! call returns a typed error and leaves the list exactly as it was.
//!
//! # Quick Start
//!
//! ```
//! use listkit::{ArrayList, List};
//!
//! let mut list = ArrayList::new();
//! list.push_back(3);
//! list.push_back(1);
//! list.push_back(2);
//!
//! list.sort_by(|a, b| a.cmp(b));
//!
//! assert_eq!(list.get(0), Ok(&1));
//! assert_eq!(list.len(), 3);
//! ```
//!
//! Code generic over the trait runs on either container:
//!
//! ```
//! use listkit::{ArrayList, LinkedList, List};
//!
//! fn total(list: &impl List<u32>) -> u32 {
//!     (0..list.len()).map(|i| *list.get(i).unwrap()).sum()
//! }
//!
//! let mut array = ArrayList::new();
//! let mut linked = LinkedList::new();
//! for v in [1, 2, 3] {
//!     array.push_back(v);
//!     linked.push_back(v);
//! }
//!
//! assert_eq!(total(&array), 6);
//! assert_eq!(total(&linked), 6);
//! ```
//!
//! # Picking a Container
//!
//! | Concern | [`ArrayList`] | [`LinkedList`] |
//! |---------|---------------|----------------|
//! | append | amortized O(1) | O(1) |
//! | prepend | O(n) shift | O(1) |
//! | indexed get | O(1) | O(min(i, n-i)) walk |
//! | insert/remove at `i` | O(n) shift | walk + O(1) splice |
//! | sort | bubble sort, early exit | insertion sort over the chain |
//!
//! # Error Handling
//!
//! Two error types, both plain values with diagnostic fields:
//!
//! - [`OutOfBounds`] — index outside the operation's valid range, carrying
//!   the offending index and the length at call time.
//! - [`Empty`] — endpoint access on an empty list.
//!
//! These signal contract violations by the caller; operations never
//! partially apply before reporting one.

#![warn(missing_docs)]

pub mod array;
pub mod error;
pub mod linked;
pub mod list;

pub use array::ArrayList;
pub use error::{Empty, OutOfBounds};
pub use linked::LinkedList;
pub use list::List;
