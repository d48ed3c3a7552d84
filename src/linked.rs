//! Doubly-linked list over a slab arena.
//!
//! Nodes live in a [`slab::Slab`] and reference their neighbors by arena
//! key instead of by pointer, which sidesteps ownership cycles entirely:
//! the arena owns every node, and `head`/`tail`/`next`/`prev` are plain
//! indices with a sentinel for "no node". Removed slots are reused by the
//! slab's free list.
//!
//! End operations are O(1). Indexed operations locate their node by
//! walking from whichever endpoint is closer, then splice in O(1).
//!
//! # Example
//!
//! ```
//! use listkit::LinkedList;
//!
//! let mut list = LinkedList::new();
//! list.push_back("B");
//! list.push_front("A");
//! list.push_back("C");
//!
//! assert_eq!(list.first(), Ok(&"A"));
//! assert_eq!(list.last(), Ok(&"C"));
//!
//! let removed = list.remove(1).unwrap();
//! assert_eq!(removed, "B");
//! assert_eq!(list.len(), 2);
//! ```

use core::cmp::Ordering;
use core::fmt;
use core::mem;

use slab::Slab;

use crate::error::{Empty, OutOfBounds};
use crate::list::List;

/// Sentinel key for "no node". Slab keys are dense indices, so `usize::MAX`
/// is unreachable for any list that fits in memory.
const NONE: usize = usize::MAX;

/// A node in the arena: one value plus neighbor keys.
#[derive(Debug)]
struct Node<T> {
    value: T,
    next: usize,
    prev: usize,
}

/// A doubly-linked list with arena-allocated nodes.
///
/// The list tracks `head`, `tail`, and length; the arena owns the nodes.
/// Chain invariant: when the list is non-empty, `nodes[head].prev` and
/// `nodes[tail].next` are the sentinel and the next/prev chain visits
/// exactly `len` live slots.
pub struct LinkedList<T> {
    nodes: Slab<Node<T>>,
    head: usize,
    tail: usize,
    len: usize,
}

impl<T> LinkedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            head: NONE,
            tail: NONE,
            len: 0,
        }
    }

    /// Creates an empty list with arena space for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            head: NONE,
            tail: NONE,
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

    /// Appends a value at the end of the list. O(1).
    pub fn push_back(&mut self, value: T) {
        let key = self.nodes.insert(Node {
            value,
            next: NONE,
            prev: self.tail,
        });

        if self.tail != NONE {
            self.nodes[self.tail].next = key;
        } else {
            self.head = key;
        }
        self.tail = key;
        self.len += 1;
    }

    /// Inserts a value at the front of the list. O(1).
    pub fn push_front(&mut self, value: T) {
        let key = self.nodes.insert(Node {
            value,
            next: self.head,
            prev: NONE,
        });

        if self.head != NONE {
            self.nodes[self.head].prev = key;
        } else {
            self.tail = key;
        }
        self.head = key;
        self.len += 1;
    }

    /// Inserts a value at `index`, splicing a new node before the node
    /// currently at that position. `index == len` appends.
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
        if index == self.len {
            self.push_back(value);
            return Ok(());
        }

        let at = self.node_at(index);
        let prev = self.nodes[at].prev;
        let key = self.nodes.insert(Node {
            value,
            next: at,
            prev,
        });

        if prev != NONE {
            self.nodes[prev].next = key;
        } else {
            self.head = key;
        }
        self.nodes[at].prev = key;
        self.len += 1;
        Ok(())
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&T, OutOfBounds> {
        if index >= self.len {
            return Err(OutOfBounds {
                index,
                len: self.len,
            });
        }
        let key = self.node_at(index);
        Ok(&self.nodes[key].value)
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] if `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, OutOfBounds> {
        if index >= self.len {
            return Err(OutOfBounds {
                index,
                len: self.len,
            });
        }
        let key = self.node_at(index);
        Ok(&mut self.nodes[key].value)
    }

    /// Returns a reference to the first element. O(1).
    ///
    /// # Errors
    ///
    /// Returns [`Empty`] if the list is empty.
    #[inline]
    pub fn first(&self) -> Result<&T, Empty> {
        if self.head == NONE {
            return Err(Empty);
        }
        Ok(&self.nodes[self.head].value)
    }

    /// Returns a mutable reference to the first element. O(1).
    ///
    /// # Errors
    ///
    /// Returns [`Empty`] if the list is empty.
    #[inline]
    pub fn first_mut(&mut self) -> Result<&mut T, Empty> {
        if self.head == NONE {
            return Err(Empty);
        }
        Ok(&mut self.nodes[self.head].value)
    }

    /// Returns a reference to the last element. O(1).
    ///
    /// # Errors
    ///
    /// Returns [`Empty`] if the list is empty.
    #[inline]
    pub fn last(&self) -> Result<&T, Empty> {
        if self.tail == NONE {
            return Err(Empty);
        }
        Ok(&self.nodes[self.tail].value)
    }

    /// Returns a mutable reference to the last element. O(1).
    ///
    /// # Errors
    ///
    /// Returns [`Empty`] if the list is empty.
    #[inline]
    pub fn last_mut(&mut self) -> Result<&mut T, Empty> {
        if self.tail == NONE {
            return Err(Empty);
        }
        Ok(&mut self.nodes[self.tail].value)
    }

    /// Removes and returns the element at `index`, unlinking its node from
    /// both neighbors and releasing the slot for reuse.
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

        let key = self.node_at(index);
        let node = self.nodes.remove(key);

        if node.prev != NONE {
            self.nodes[node.prev].next = node.next;
        } else {
            self.head = node.next;
        }
        if node.next != NONE {
            self.nodes[node.next].prev = node.prev;
        } else {
            self.tail = node.prev;
        }

        self.len -= 1;
        Ok(node.value)
    }

    /// Drops all elements and resets both endpoints. Arena slots become
    /// available for reuse; the arena's allocation is kept.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = NONE;
        self.tail = NONE;
        self.len = 0;
    }

    /// Sorts the list in place with an insertion sort over the node chain.
    ///
    /// Values are moved between node slots rather than relinking node
    /// identities: each element walks backward past greater predecessors
    /// one adjacent swap at a time until it reaches its position. The link
    /// structure never changes during a sort. No-op when `len <= 1`.
    /// O(n²) worst case, O(n) on already-sorted input. Stable.
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if self.len <= 1 {
            return;
        }

        let mut current = self.nodes[self.head].next;
        while current != NONE {
            let next = self.nodes[current].next;

            // Walk the current value backward while its predecessor
            // compares greater.
            let mut slot = current;
            loop {
                let prev = self.nodes[slot].prev;
                if prev == NONE {
                    break;
                }
                if compare(&self.nodes[prev].value, &self.nodes[slot].value) != Ordering::Greater {
                    break;
                }
                let (a, b) = self
                    .nodes
                    .get2_mut(prev, slot)
                    .expect("linked neighbors must be live");
                mem::swap(&mut a.value, &mut b.value);
                slot = prev;
            }

            current = next;
        }
    }

    /// Returns the arena key of the node at `index`.
    ///
    /// Walks from `head` when the index is in the front half, from `tail`
    /// otherwise. The caller must have validated `index < len`.
    fn node_at(&self, index: usize) -> usize {
        debug_assert!(index < self.len);

        if index < self.len / 2 {
            let mut key = self.head;
            for _ in 0..index {
                key = self.nodes[key].next;
            }
            key
        } else {
            let mut key = self.tail;
            for _ in index..self.len - 1 {
                key = self.nodes[key].prev;
            }
            key
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_list();
        let mut key = self.head;
        while key != NONE {
            let node = &self.nodes[key];
            out.entry(&node.value);
            key = node.next;
        }
        out.finish()
    }
}

impl<T> List<T> for LinkedList<T> {
    #[inline]
    fn push_back(&mut self, value: T) {
        LinkedList::push_back(self, value);
    }

    #[inline]
    fn push_front(&mut self, value: T) {
        LinkedList::push_front(self, value);
    }

    #[inline]
    fn insert(&mut self, index: usize, value: T) -> Result<(), OutOfBounds> {
        LinkedList::insert(self, index, value)
    }

    #[inline]
    fn get(&self, index: usize) -> Result<&T, OutOfBounds> {
        LinkedList::get(self, index)
    }

    #[inline]
    fn first(&self) -> Result<&T, Empty> {
        LinkedList::first(self)
    }

    #[inline]
    fn last(&self) -> Result<&T, Empty> {
        LinkedList::last(self)
    }

    #[inline]
    fn remove(&mut self, index: usize) -> Result<T, OutOfBounds> {
        LinkedList::remove(self, index)
    }

    #[inline]
    fn clear(&mut self) {
        LinkedList::clear(self);
    }

    #[inline]
    fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        LinkedList::sort_by(self, compare);
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Checks the chain invariant in both directions.
    fn assert_chain<T>(list: &LinkedList<T>) {
        if list.len == 0 {
            assert_eq!(list.head, NONE);
            assert_eq!(list.tail, NONE);
            return;
        }

        assert_eq!(list.nodes[list.head].prev, NONE);
        assert_eq!(list.nodes[list.tail].next, NONE);

        let mut forward = 0;
        let mut key = list.head;
        let mut last_seen = NONE;
        while key != NONE {
            forward += 1;
            last_seen = key;
            key = list.nodes[key].next;
        }
        assert_eq!(forward, list.len);
        assert_eq!(last_seen, list.tail);

        let mut backward = 0;
        let mut key = list.tail;
        while key != NONE {
            backward += 1;
            key = list.nodes[key].prev;
        }
        assert_eq!(backward, list.len);
    }

    #[test]
    fn new_is_empty() {
        let list: LinkedList<u64> = LinkedList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_chain(&list);
    }

    #[test]
    fn push_back_preserves_order() {
        let mut list = LinkedList::new();
        list.push_back("A");
        list.push_back("B");
        list.push_back("C");

        assert_eq!(list.get(0), Ok(&"A"));
        assert_eq!(list.get(1), Ok(&"B"));
        assert_eq!(list.get(2), Ok(&"C"));
        assert_eq!(list.len(), 3);
        assert_chain(&list);
    }

    #[test]
    fn push_front_updates_endpoints() {
        let mut list = LinkedList::new();
        list.push_front(3);
        list.push_front(2);
        list.push_front(1);

        assert_eq!(list.first(), Ok(&1));
        assert_eq!(list.last(), Ok(&3));
        assert_eq!(list.get(1), Ok(&2));
        assert_chain(&list);
    }

    #[test]
    fn sole_node_is_both_endpoints() {
        let mut list = LinkedList::new();
        list.push_back(42);

        assert_eq!(list.first(), Ok(&42));
        assert_eq!(list.last(), Ok(&42));
        assert_chain(&list);
    }

    #[test]
    fn insert_at_head_middle_and_end() {
        let mut list = LinkedList::new();
        list.push_back(2);
        list.push_back(4);

        list.insert(0, 1).unwrap();
        list.insert(2, 3).unwrap();
        list.insert(4, 5).unwrap();

        for (i, v) in [1, 2, 3, 4, 5].iter().enumerate() {
            assert_eq!(list.get(i), Ok(v));
        }
        assert_eq!(list.first(), Ok(&1));
        assert_eq!(list.last(), Ok(&5));
        assert_chain(&list);
    }

    #[test]
    fn insert_at_len_appends() {
        let mut list = LinkedList::new();
        list.insert(0, 1).unwrap();
        list.insert(1, 2).unwrap();

        assert_eq!(list.last(), Ok(&2));
        assert_chain(&list);
    }

    #[test]
    fn insert_past_len_fails() {
        let mut list = LinkedList::new();
        list.push_back(1);

        let err = list.insert(2, 9).unwrap_err();
        assert_eq!(err, OutOfBounds { index: 2, len: 1 });
        assert_eq!(list.len(), 1);
        assert_chain(&list);
    }

    #[test]
    fn get_traverses_both_halves() {
        let mut list = LinkedList::new();
        for i in 0..10 {
            list.push_back(i);
        }

        // Front half walks from head, back half from tail
        assert_eq!(list.get(1), Ok(&1));
        assert_eq!(list.get(4), Ok(&4));
        assert_eq!(list.get(5), Ok(&5));
        assert_eq!(list.get(9), Ok(&9));
    }

    #[test]
    fn get_out_of_range_fails() {
        let list: LinkedList<u64> = LinkedList::new();
        assert_eq!(list.get(0), Err(OutOfBounds { index: 0, len: 0 }));
    }

    #[test]
    fn first_and_last_on_empty_fail() {
        let list: LinkedList<u64> = LinkedList::new();
        assert_eq!(list.first(), Err(Empty));
        assert_eq!(list.last(), Err(Empty));
    }

    #[test]
    fn remove_head_relinks() {
        let mut list = LinkedList::new();
        list.push_back(1);
        list.push_back(2);
        list.push_back(3);

        assert_eq!(list.remove(0), Ok(1));
        assert_eq!(list.first(), Ok(&2));
        assert_eq!(list.len(), 2);
        assert_chain(&list);
    }

    #[test]
    fn remove_middle_relinks() {
        let mut list = LinkedList::new();
        list.push_back(1);
        list.push_back(2);
        list.push_back(3);

        assert_eq!(list.remove(1), Ok(2));
        assert_eq!(list.get(0), Ok(&1));
        assert_eq!(list.get(1), Ok(&3));
        assert_chain(&list);
    }

    #[test]
    fn remove_tail_relinks() {
        let mut list = LinkedList::new();
        list.push_back(1);
        list.push_back(2);
        list.push_back(3);

        assert_eq!(list.remove(2), Ok(3));
        assert_eq!(list.last(), Ok(&2));
        assert_chain(&list);
    }

    #[test]
    fn remove_last_element_resets_endpoints() {
        let mut list = LinkedList::new();
        list.push_back(1);

        assert_eq!(list.remove(0), Ok(1));
        assert!(list.is_empty());
        assert_eq!(list.first(), Err(Empty));
        assert_chain(&list);
    }

    #[test]
    fn remove_out_of_range_fails() {
        let mut list = LinkedList::new();
        list.push_back(1);

        let err = list.remove(1).unwrap_err();
        assert_eq!(err, OutOfBounds { index: 1, len: 1 });
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn clear_then_reuse() {
        let mut list = LinkedList::new();
        list.push_back(1);
        list.push_back(2);

        list.clear();
        assert!(list.is_empty());
        assert_chain(&list);

        list.push_back(3);
        assert_eq!(list.first(), Ok(&3));
        assert_eq!(list.last(), Ok(&3));
        assert_chain(&list);
    }

    #[test]
    fn sort_ascending() {
        let mut list = LinkedList::new();
        for v in [3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5] {
            list.push_back(v);
        }

        list.sort_by(|a, b| a.cmp(b));

        let expected = [1, 1, 2, 3, 3, 4, 5, 5, 5, 6, 9];
        for (i, v) in expected.iter().enumerate() {
            assert_eq!(list.get(i), Ok(v));
        }
        assert_chain(&list);
    }

    #[test]
    fn sort_keeps_link_structure() {
        let mut list = LinkedList::new();
        for v in [3, 2, 1] {
            list.push_back(v);
        }
        let head_before = list.head;
        let tail_before = list.tail;

        list.sort_by(|a, b| a.cmp(b));

        // Values moved between slots; the chain itself is untouched.
        assert_eq!(list.head, head_before);
        assert_eq!(list.tail, tail_before);
        assert_eq!(list.get(0), Ok(&1));
        assert_eq!(list.get(2), Ok(&3));
        assert_chain(&list);
    }

    #[test]
    fn sort_already_sorted_is_noop() {
        let mut list = LinkedList::new();
        for v in 1..=5 {
            list.push_back(v);
        }

        list.sort_by(|a, b| a.cmp(b));

        for (i, v) in (1..=5).enumerate() {
            assert_eq!(list.get(i), Ok(&v));
        }
    }

    #[test]
    fn sort_empty_and_single() {
        let mut list: LinkedList<u64> = LinkedList::new();
        list.sort_by(|a, b| a.cmp(b));
        assert!(list.is_empty());

        list.push_back(7);
        list.sort_by(|a, b| a.cmp(b));
        assert_eq!(list.first(), Ok(&7));
    }

    #[test]
    fn sort_is_stable() {
        let mut list = LinkedList::new();
        for pair in [(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd')] {
            list.push_back(pair);
        }

        list.sort_by(|a, b| a.0.cmp(&b.0));

        assert_eq!(list.get(0), Ok(&(0, 'b')));
        assert_eq!(list.get(1), Ok(&(0, 'd')));
        assert_eq!(list.get(2), Ok(&(1, 'a')));
        assert_eq!(list.get(3), Ok(&(1, 'c')));
    }

    #[test]
    fn slot_reuse_after_remove() {
        let mut list = LinkedList::new();
        list.push_back(1);
        list.push_back(2);
        list.remove(0).unwrap();
        list.push_back(3);

        assert_eq!(list.get(0), Ok(&2));
        assert_eq!(list.get(1), Ok(&3));
        // Arena reuses the freed slot instead of growing
        assert_eq!(list.nodes.len(), 2);
        assert_chain(&list);
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut list = LinkedList::new();
        list.push_back(1);
        list.push_back(2);

        *list.get_mut(1).unwrap() = 20;
        *list.first_mut().unwrap() = 10;

        assert_eq!(list.get(0), Ok(&10));
        assert_eq!(list.get(1), Ok(&20));
    }

    #[test]
    fn debug_formats_in_list_order() {
        let mut list = LinkedList::new();
        list.push_front(2);
        list.push_front(1);
        list.push_back(3);
        assert_eq!(format!("{:?}", list), "[1, 2, 3]");
    }
}
