//! Growable contiguous list.
//!
//! Elements live in a single heap buffer with a logical length. Appends are
//! amortized O(1): when the buffer is full its capacity doubles and the
//! initialized prefix is moved across. Mid-list insertion and removal shift
//! the tail of the prefix by one slot.
//!
//! # Buffer Invariant
//!
//! Slots `[0, len)` are initialized, slots `[len, capacity)` are not.
//! Every operation validates its index before mutating, so a failed call
//! leaves the list untouched.
//!
//! # Example
//!
//! ```
//! use listkit::ArrayList;
//!
//! let mut list: ArrayList<&str> = ArrayList::new();
//! list.push_back("A");
//! list.push_back("C");
//! list.insert(1, "B").unwrap();
//!
//! assert_eq!(list.get(1), Ok(&"B"));
//! assert_eq!(list.len(), 3);
//!
//! let removed = list.remove(0).unwrap();
//! assert_eq!(removed, "A");
//! assert_eq!(list.first(), Ok(&"B"));
//! ```

use core::cmp::Ordering;
use core::fmt;
use core::mem::MaybeUninit;
use core::ptr;

use crate::error::{Empty, OutOfBounds};
use crate::list::List;

/// Capacity used by [`ArrayList::new`], and the capacity a zero-capacity
/// list grows to on its first append.
pub const DEFAULT_CAPACITY: usize = 10;

/// A growable array-backed list.
///
/// Capacity strictly doubles on overflow and never shrinks. The backing
/// buffer is uninitialized memory past `len`; values moved out by `remove`
/// or dropped by `clear` vacate their slots rather than leaving stale
/// copies behind.
pub struct ArrayList<T> {
    buf: Box<[MaybeUninit<T>]>,
    len: usize,
}

impl<T> ArrayList<T> {
    /// Creates an empty list with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty list with exactly `capacity` slots.
    ///
    /// A capacity of zero is legal; the first append grows the buffer to
    /// the default capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Box::new_uninit_slice(capacity),
            len: 0,
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list contains no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the allocated capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Appends a value at the end of the list.
    ///
    /// Grows the buffer first if it is full.
    pub fn push_back(&mut self, value: T) {
        if self.len == self.buf.len() {
            self.grow();
        }
        self.buf[self.len].write(value);
        self.len += 1;
    }

    /// Inserts a value at the front of the list. O(n).
    pub fn push_front(&mut self, value: T) {
        // Index 0 is valid for every length.
        let _ = self.insert(0, value);
    }

    /// Inserts a value at `index`, shifting `[index, len)` one slot toward
    /// the back. `index == len` appends.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), OutOfBounds> {
        if index > self.len {
            return Err(OutOfBounds {
                index,
                len: self.len,
            });
        }
        if self.len == self.buf.len() {
            self.grow();
        }

        // Safety: index <= len < capacity, so both the source range
        // [index, len) and the destination range [index + 1, len + 1) are
        // in bounds. The vacated slot is overwritten before len is bumped.
        unsafe {
            let p = self.buf.as_mut_ptr().add(index);
            ptr::copy(p, p.add(1), self.len - index);
        }
        self.buf[index].write(value);
        self.len += 1;
        Ok(())
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] if `index >= len`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T, OutOfBounds> {
        if index >= self.len {
            return Err(OutOfBounds {
                index,
                len: self.len,
            });
        }
        // Safety: slots [0, len) are initialized.
        Ok(unsafe { self.buf[index].assume_init_ref() })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] if `index >= len`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, OutOfBounds> {
        if index >= self.len {
            return Err(OutOfBounds {
                index,
                len: self.len,
            });
        }
        // Safety: slots [0, len) are initialized.
        Ok(unsafe { self.buf[index].assume_init_mut() })
    }

    /// Returns a reference to the first element.
    ///
    /// # Errors
    ///
    /// Returns [`Empty`] if the list is empty.
    #[inline]
    pub fn first(&self) -> Result<&T, Empty> {
        self.get(0).map_err(|_| Empty)
    }

    /// Returns a mutable reference to the first element.
    ///
    /// # Errors
    ///
    /// Returns [`Empty`] if the list is empty.
    #[inline]
    pub fn first_mut(&mut self) -> Result<&mut T, Empty> {
        self.get_mut(0).map_err(|_| Empty)
    }

    /// Returns a reference to the last element.
    ///
    /// # Errors
    ///
    /// Returns [`Empty`] if the list is empty.
    #[inline]
    pub fn last(&self) -> Result<&T, Empty> {
        if self.len == 0 {
            return Err(Empty);
        }
        self.get(self.len - 1).map_err(|_| Empty)
    }

    /// Returns a mutable reference to the last element.
    ///
    /// # Errors
    ///
    /// Returns [`Empty`] if the list is empty.
    #[inline]
    pub fn last_mut(&mut self) -> Result<&mut T, Empty> {
        if self.len == 0 {
            return Err(Empty);
        }
        self.get_mut(self.len - 1).map_err(|_| Empty)
    }

    /// Removes and returns the element at `index`, shifting `[index + 1,
    /// len)` one slot toward the front.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] if `index >= len`.
    pub fn remove(&mut self, index: usize) -> Result<T, OutOfBounds> {
        if index >= self.len {
            return Err(OutOfBounds {
                index,
                len: self.len,
            });
        }

        // Safety: index < len, so the slot is initialized and the shifted
        // range [index + 1, len) is in bounds. After the copy the trailing
        // slot at len - 1 holds a duplicate that is no longer reachable
        // once len is decremented.
        unsafe {
            let p = self.buf.as_mut_ptr().add(index);
            let value = p.read().assume_init();
            ptr::copy(p.add(1), p, self.len - index - 1);
            self.len -= 1;
            Ok(value)
        }
    }

    /// Drops all elements. Capacity is unchanged.
    pub fn clear(&mut self) {
        let len = self.len;
        self.len = 0;
        // Safety: slots [0, len) were initialized; len is reset first so
        // the buffer is consistent even if a destructor panics.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.as_mut_ptr() as *mut T,
                len,
            ));
        }
    }

    /// Sorts the list in place with an adjacent-swap (bubble) sort.
    ///
    /// Each pass bubbles the largest remaining element to the end of the
    /// unsorted prefix; a pass with no swaps terminates the sort early.
    /// O(n²) worst case, O(n) on already-sorted input. Stable.
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let items = self.as_mut_slice();
        if items.len() < 2 {
            return;
        }

        for pass in 0..items.len() - 1 {
            let mut swapped = false;
            for j in 0..items.len() - 1 - pass {
                if compare(&items[j], &items[j + 1]) == Ordering::Greater {
                    items.swap(j, j + 1);
                    swapped = true;
                }
            }
            if !swapped {
                break;
            }
        }
    }

    #[inline]
    fn as_slice(&self) -> &[T] {
        // Safety: slots [0, len) are initialized.
        unsafe { core::slice::from_raw_parts(self.buf.as_ptr() as *const T, self.len) }
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        // Safety: slots [0, len) are initialized.
        unsafe { core::slice::from_raw_parts_mut(self.buf.as_mut_ptr() as *mut T, self.len) }
    }

    /// Doubles the capacity, moving the initialized prefix into the new
    /// buffer. Zero capacity promotes to the default instead, since zero
    /// doubled is a fixpoint.
    fn grow(&mut self) {
        let new_capacity = match self.buf.len() {
            0 => DEFAULT_CAPACITY,
            n => n * 2,
        };
        let mut new_buf = Box::new_uninit_slice(new_capacity);

        // Safety: both buffers hold at least len slots; the moves are
        // bitwise, and the old buffer never drops its (now moved-out)
        // contents because MaybeUninit has no destructor.
        unsafe {
            ptr::copy_nonoverlapping(self.buf.as_ptr(), new_buf.as_mut_ptr(), self.len);
        }
        self.buf = new_buf;
    }
}

impl<T> Drop for ArrayList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T> List<T> for ArrayList<T> {
    #[inline]
    fn push_back(&mut self, value: T) {
        ArrayList::push_back(self, value);
    }

    #[inline]
    fn push_front(&mut self, value: T) {
        ArrayList::push_front(self, value);
    }

    #[inline]
    fn insert(&mut self, index: usize, value: T) -> Result<(), OutOfBounds> {
        ArrayList::insert(self, index, value)
    }

    #[inline]
    fn get(&self, index: usize) -> Result<&T, OutOfBounds> {
        ArrayList::get(self, index)
    }

    #[inline]
    fn first(&self) -> Result<&T, Empty> {
        ArrayList::first(self)
    }

    #[inline]
    fn last(&self) -> Result<&T, Empty> {
        ArrayList::last(self)
    }

    #[inline]
    fn remove(&mut self, index: usize) -> Result<T, OutOfBounds> {
        ArrayList::remove(self, index)
    }

    #[inline]
    fn clear(&mut self) {
        ArrayList::clear(self);
    }

    #[inline]
    fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        ArrayList::sort_by(self, compare);
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }
}
