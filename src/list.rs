//! Shared list contract.
//!
//! Both containers in this crate satisfy [`List`]: identical external
//! behavior and identical error conditions, differing only in cost.
//!
//! # Implementors
//!
//! | Type | push_back | insert/remove at `i` | get(`i`) | endpoints |
//! |------|-----------|----------------------|----------|-----------|
//! | [`ArrayList`](crate::ArrayList) | amortized O(1) | O(n) shift | O(1) | O(1) |
//! | [`LinkedList`](crate::LinkedList) | O(1) | O(min(i, n-i)) locate + O(1) splice | O(min(i, n-i)) | O(1) |
//!
//! # Example
//!
//! Code written against the trait runs on either container:
//!
//! ```
//! use listkit::{ArrayList, LinkedList, List};
//!
//! fn fill<L: List<u32>>(list: &mut L) {
//!     for v in [3, 1, 2] {
//!         list.push_back(v);
//!     }
//!     list.sort_by(|a, b| a.cmp(b));
//! }
//!
//! let mut array = ArrayList::new();
//! let mut linked = LinkedList::new();
//! fill(&mut array);
//! fill(&mut linked);
//!
//! assert_eq!(array.get(0), Ok(&1));
//! assert_eq!(linked.get(0), Ok(&1));
//! ```

use core::cmp::Ordering;

use crate::error::{Empty, OutOfBounds};

/// A sequential container with indexed access.
///
/// Errors are returned, never panicked: every fallible operation validates
/// its arguments before touching the container, so a failing call leaves
/// the list unchanged.
pub trait List<T> {
    /// Appends a value at the end of the list.
    fn push_back(&mut self, value: T);

    /// Inserts a value at the front of the list.
    ///
    /// Equivalent to `insert(0, value)`, which is valid for any length.
    fn push_front(&mut self, value: T);

    /// Inserts a value at `index`, shifting later elements one position
    /// toward the back.
    ///
    /// `index == len()` appends.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] if `index > len()`.
    fn insert(&mut self, index: usize, value: T) -> Result<(), OutOfBounds>;

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] if `index >= len()`.
    fn get(&self, index: usize) -> Result<&T, OutOfBounds>;

    /// Returns a reference to the first element.
    ///
    /// # Errors
    ///
    /// Returns [`Empty`] if the list is empty.
    fn first(&self) -> Result<&T, Empty>;

    /// Returns a reference to the last element.
    ///
    /// # Errors
    ///
    /// Returns [`Empty`] if the list is empty.
    fn last(&self) -> Result<&T, Empty>;

    /// Removes and returns the element at `index`, shifting later elements
    /// one position toward the front.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] if `index >= len()`.
    fn remove(&mut self, index: usize) -> Result<T, OutOfBounds>;

    /// Removes all elements. Does not shrink any backing allocation.
    fn clear(&mut self);

    /// Sorts the list in place into non-decreasing order under `compare`.
    ///
    /// The comparator is supplied per call, not stored.
    fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
        Self: Sized;

    /// Returns the number of elements in the list.
    fn len(&self) -> usize;

    /// Returns `true` if the list contains no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
