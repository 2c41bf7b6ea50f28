/*
   Forward List: A singly linked list with a before-the-head sentinel
   position that supports O(1) inserts and removes after any cursor.
   Nodes are stored in a slot arena so the list recycles memory
   instead of deallocating on every remove operation.

   Copyright 2021 "Rahul Singh <rsingh@arrsingh.com>"

   Licensed under the Apache License, Version 2.0 (the "License");
   you may not use this file except in compliance with the License.
   You may obtain a copy of the License at

       http://www.apache.org/licenses/LICENSE-2.0

   Unless required by applicable law or agreed to in writing, software
   distributed under the License is distributed on an "AS IS" BASIS,
   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
   See the License for the specific language governing permissions and
   limitations under the License.
*/

use crate::forwardlist::{
    arena::Arena, arena::Entry, cursor::Cursor, cursor::Pos, iter::IntoIter, iter::Iter,
    iter::IterMut,
};
use core::cmp::Ordering;
use core::mem;
use core::sync::atomic::{AtomicUsize, Ordering::Relaxed};
use thiserror::Error;

macro_rules! nid_inc {
    ($nid: expr) => {{
        let nid = $nid;
        $nid += 1;
        nid
    }};
}

/// The error returned when an operation's precondition is violated.
///
/// The list never panics on misuse and never touches invalid memory:
/// popping from an empty list, inserting after the end position,
/// dereferencing the sentinel, or using a cursor whose node has been
/// removed are all reported through this type.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// The cursor does not address a position this operation accepts.
    /// The cursor is stale, belongs to another list, or references
    /// the end (or a missing successor) where a node is required.
    #[error("cursor does not address a valid position in this list")]
    InvalidCursor,
    /// The list has no elements to remove.
    #[error("the list is empty")]
    EmptyList,
}

/// A singly linked list that owns its nodes and supports inserting
/// and removing after any position in constant time.
///
/// Positions are addressed with a [`Cursor`]: a copyable handle
/// carrying the id of the list and the id of the node it was created
/// for. A sentinel position before the first element, obtained from
/// [`before_front()`](SingleLinkedList::before_front), makes
/// inserting a new front element the same operation as inserting
/// after any other position. Using a cursor whose node has been
/// removed, or a cursor from a different list, is a checked error
/// ([`ListError::InvalidCursor`]), never undefined behavior.
///
/// Nodes live in an internal slot arena. Removed slots are recycled
/// on the next insert, and
/// [`with_capacity`](SingleLinkedList::with_capacity) pre-allocates
/// slots so that pushes up to the capacity perform no allocation.
/// Capacity is
/// retained by [`clear()`](SingleLinkedList::clear) and released when
/// the list is dropped.
///
/// The list is a value type: it implements `Clone` (deep,
/// order-preserving copy), `PartialEq`/`Eq` (same length,
/// elementwise-equal), and `PartialOrd`/`Ord` (lexicographic; a
/// strict prefix sorts first).
///
/// # Getting Started
///
/// To get started add the lattix dependency to Cargo.toml and the use
/// declaration in your source.
///
/// ```text
/// [dependencies]
/// lattix = "0.1.0"
/// ```
///
/// ```
/// use lattix::lists::SingleLinkedList;
///
/// let mut list = SingleLinkedList::<u8>::with_capacity(10);
/// for i in 0..10 {
///     list.push_front(i);
/// }
///
/// for e in list.iter() {
///     println!("{}", e);
/// }
/// ```
#[derive(Debug)]
pub struct SingleLinkedList<T> {
    cid: usize,
    nid: usize,
    pub(super) head: Option<usize>,
    len: usize,
    pub(super) arena: Arena<T>,
}

static LIST_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn inc_cid() -> usize {
    LIST_COUNTER.fetch_add(1, Relaxed) + 1
}

impl<'a, T> IntoIterator for &'a SingleLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SingleLinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for SingleLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<T> SingleLinkedList<T> {
    /// Creates an empty list.
    ///
    /// # Examples
    ///
    /// ```
    /// use lattix::lists::SingleLinkedList;
    /// let list = SingleLinkedList::<u8>::new();
    /// assert!(list.is_empty());
    /// ```
    pub fn new() -> SingleLinkedList<T> {
        SingleLinkedList {
            cid: inc_cid(),
            nid: 0,
            head: None,
            len: 0,
            arena: Arena::new(0),
        }
    }

    /// Creates an empty list with the specified capacity. Pushes up
    /// to the capacity perform no allocation; past it, the list
    /// allocates as needed. The list does not release slots when
    /// elements are removed; they are recycled by later inserts.
    ///
    /// # Examples
    ///
    /// ```
    /// use lattix::lists::SingleLinkedList;
    /// let mut list = SingleLinkedList::<u8>::with_capacity(10);
    /// for i in 0..10 {
    ///     // All these are pushed without any allocations
    ///     list.push_front(i);
    /// }
    ///
    /// assert_eq!(list.len(), 10);
    /// assert_eq!(list.capacity(), 10);
    ///
    /// // This push allocates a new slot
    /// list.push_front(10);
    /// assert_eq!(list.len(), 11);
    /// assert_eq!(list.capacity(), 11);
    /// ```
    pub fn with_capacity(capacity: usize) -> SingleLinkedList<T> {
        SingleLinkedList {
            cid: inc_cid(),
            nid: 0,
            head: None,
            len: 0,
            arena: Arena::new(capacity),
        }
    }

    /// Returns the number of elements in the list.
    ///
    /// This method should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use lattix::lists::SingleLinkedList;
    /// let mut list = SingleLinkedList::<u8>::new();
    /// assert_eq!(list.len(), 0);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list is empty and false otherwise.
    ///
    /// This method should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use lattix::lists::SingleLinkedList;
    /// let mut list = SingleLinkedList::<u8>::new();
    /// assert_eq!(list.is_empty(), true);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.is_empty(), false);
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the list can hold before new
    /// memory is allocated.
    ///
    /// # Examples
    /// ```
    /// use lattix::lists::SingleLinkedList;
    /// let list = SingleLinkedList::<u8>::with_capacity(10);
    /// assert_eq!(list.capacity(), 10);
    /// ```
    pub fn capacity(&self) -> usize {
        self.len + self.arena.free_len()
    }

    /// Returns a forward iterator over the list.
    ///
    /// # Examples
    /// ```
    /// use lattix::lists::SingleLinkedList;
    /// let mut list = SingleLinkedList::<u8>::new();
    /// list.push_front(1);
    /// list.push_front(2);
    /// list.push_front(3);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&3));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Returns a forward iterator over the list with mutable
    /// references that allows the elements to be modified.
    ///
    /// # Examples
    /// ```
    /// use lattix::lists::SingleLinkedList;
    /// let mut list = SingleLinkedList::<u8>::new();
    /// list.push_front(1);
    /// list.push_front(2);
    /// list.push_front(3);
    ///
    /// for e in list.iter_mut() {
    ///     *e += 100;
    /// }
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&103));
    /// assert_eq!(iter.next(), Some(&102));
    /// assert_eq!(iter.next(), Some(&101));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Returns a reference to the front of the list or `None` if the
    /// list is empty.
    ///
    /// This method should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use lattix::lists::SingleLinkedList;
    /// let mut list = SingleLinkedList::<u8>::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    pub fn front(&self) -> Option<&T> {
        self.head
            .and_then(|idx| self.arena.get(idx))
            .map(|entry| &entry.val)
    }

    /// Returns a mutable reference to the front of the list or `None`
    /// if the list is empty.
    ///
    /// This method should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use lattix::lists::SingleLinkedList;
    /// let mut list = SingleLinkedList::<u8>::new();
    /// list.push_front(1);
    ///
    /// match list.front_mut() {
    ///     None => {}
    ///     Some(x) => *x = 5,
    /// }
    /// assert_eq!(list.front(), Some(&5));
    /// ```
    pub fn front_mut(&mut self) -> Option<&mut T> {
        match self.head {
            Some(idx) => self.arena.get_mut(idx).map(|entry| &mut entry.val),
            None => None,
        }
    }

    /// Adds an element to the front of the list and returns a cursor
    /// to it.
    ///
    /// This operation should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use lattix::lists::SingleLinkedList;
    /// let mut list = SingleLinkedList::<u8>::new();
    /// let cursor = list.push_front(1);
    /// list.push_front(2);
    ///
    /// assert_eq!(list.front(), Some(&2));
    /// assert_eq!(list.get(&cursor), Ok(&1));
    /// ```
    pub fn push_front(&mut self, elem: T) -> Cursor<T> {
        let idx = self.link_after(None, elem);
        self.cursor_at(idx)
    }

    /// Removes and returns the element at the front of the list, or
    /// [`ListError::EmptyList`] if the list is empty.
    ///
    /// This operation should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use lattix::lists::{ListError, SingleLinkedList};
    /// let mut list = SingleLinkedList::<u8>::new();
    /// list.push_front(1);
    /// list.push_front(2);
    ///
    /// assert_eq!(list.pop_front(), Ok(2));
    /// assert_eq!(list.pop_front(), Ok(1));
    /// assert_eq!(list.pop_front(), Err(ListError::EmptyList));
    /// ```
    pub fn pop_front(&mut self) -> Result<T, ListError> {
        let idx = self.head.ok_or(ListError::EmptyList)?;
        let entry = self.arena.release(idx);
        self.head = entry.next;
        self.len -= 1;
        Ok(entry.val)
    }

    /// Removes and drops all the elements from this list. This has no
    /// effect on the allocated capacity of the list.
    ///
    /// This method should complete in *O*(*n*) time and is a no-op on
    /// an empty list.
    ///
    /// # Examples
    /// ```
    /// use lattix::lists::SingleLinkedList;
    /// let mut list = SingleLinkedList::<u8>::with_capacity(10);
    /// list.push_front(1);
    /// list.push_front(2);
    /// list.push_front(3);
    ///
    /// assert_eq!(list.len(), 3);
    /// assert_eq!(list.capacity(), 10);
    ///
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.capacity(), 10);
    /// ```
    pub fn clear(&mut self) {
        while let Some(idx) = self.head {
            let entry = self.arena.release(idx);
            self.head = entry.next;
        }
        self.len = 0;
    }

    /// Exchanges the entire contents of the two lists without moving
    /// any elements.
    ///
    /// Cursors follow their elements: a cursor obtained from `self`
    /// before the swap addresses its node in `other` afterwards, and
    /// vice versa.
    ///
    /// This operation should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use lattix::lists::SingleLinkedList;
    /// let mut a: SingleLinkedList<u8> = [1, 2].into_iter().collect();
    /// let mut b: SingleLinkedList<u8> = [3].into_iter().collect();
    ///
    /// a.swap(&mut b);
    /// assert!(a.iter().eq(&[3]));
    /// assert!(b.iter().eq(&[1, 2]));
    /// ```
    pub fn swap(&mut self, other: &mut SingleLinkedList<T>) {
        mem::swap(self, other);
    }

    /// Returns `true` if the list contains an element equal to the
    /// given value.
    ///
    /// This operation should complete in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use lattix::lists::SingleLinkedList;
    /// let mut list = SingleLinkedList::<u8>::new();
    ///
    /// list.push_front(0);
    /// list.push_front(1);
    /// list.push_front(2);
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Returns a cursor to the sentinel position before the first
    /// element. This cursor is always valid for this list, whether
    /// the list is empty or not, and is the only position from which
    /// [`insert_after`](SingleLinkedList::insert_after) adds a new
    /// front element or
    /// [`erase_after`](SingleLinkedList::erase_after) removes the
    /// current front element. It cannot be dereferenced.
    ///
    /// # Examples
    /// ```
    /// use lattix::lists::SingleLinkedList;
    /// let mut list = SingleLinkedList::<u8>::new();
    /// let at = list.before_front();
    /// let at = list.insert_after(&at, 1).unwrap();
    /// list.insert_after(&at, 2).unwrap();
    ///
    /// assert!(list.iter().eq(&[1, 2]));
    /// ```
    pub fn before_front(&self) -> Cursor<T> {
        Cursor::before_front(self.cid)
    }

    /// Returns a cursor to the first element of the list, or the end
    /// cursor if the list is empty.
    ///
    /// # Examples
    /// ```
    /// use lattix::lists::SingleLinkedList;
    /// let mut list = SingleLinkedList::<u8>::new();
    /// assert_eq!(list.front_cursor(), list.end_cursor());
    ///
    /// list.push_front(1);
    /// assert_eq!(list.get(&list.front_cursor()), Ok(&1));
    /// ```
    pub fn front_cursor(&self) -> Cursor<T> {
        match self.head {
            Some(idx) => self.cursor_at(idx),
            None => Cursor::end(self.cid),
        }
    }

    /// Returns the cursor one past the last element. The end cursor
    /// cannot be dereferenced, inserted after, or advanced.
    pub fn end_cursor(&self) -> Cursor<T> {
        Cursor::end(self.cid)
    }

    /// Returns a cursor to the position one step after the specified
    /// cursor: the first element for the sentinel position, the next
    /// element for a node, or the end cursor past the last element.
    /// Advancing the end cursor (or a stale or foreign cursor) is
    /// [`ListError::InvalidCursor`].
    ///
    /// This method should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use lattix::lists::{ListError, SingleLinkedList};
    /// let list: SingleLinkedList<u8> = [1, 2].into_iter().collect();
    ///
    /// let first = list.front_cursor();
    /// let second = list.next_cursor(&first).unwrap();
    /// assert_eq!(list.get(&second), Ok(&2));
    ///
    /// let end = list.next_cursor(&second).unwrap();
    /// assert_eq!(end, list.end_cursor());
    /// assert_eq!(list.next_cursor(&end), Err(ListError::InvalidCursor));
    /// ```
    pub fn next_cursor(&self, cursor: &Cursor<T>) -> Result<Cursor<T>, ListError> {
        match cursor.pos {
            Pos::BeforeFront if cursor.cid == self.cid => Ok(self.front_cursor()),
            Pos::Node { .. } => {
                let idx = self.resolve(cursor).ok_or(ListError::InvalidCursor)?;
                Ok(match self.next_of(idx) {
                    Some(next) => self.cursor_at(next),
                    None => Cursor::end(self.cid),
                })
            }
            _ => Err(ListError::InvalidCursor),
        }
    }

    /// Returns true if a node follows the specified cursor and false
    /// if it addresses the last element (or the sentinel of an empty
    /// list).
    ///
    /// This method should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use lattix::lists::SingleLinkedList;
    /// let mut list = SingleLinkedList::<u8>::new();
    /// let c1 = list.push_front(1);
    /// let c2 = list.push_front(2);
    ///
    /// assert_eq!(list.has_next(&c2), Ok(true));
    /// assert_eq!(list.has_next(&c1), Ok(false));
    /// ```
    pub fn has_next(&self, cursor: &Cursor<T>) -> Result<bool, ListError> {
        match cursor.pos {
            Pos::BeforeFront if cursor.cid == self.cid => Ok(self.head.is_some()),
            Pos::Node { .. } => {
                let idx = self.resolve(cursor).ok_or(ListError::InvalidCursor)?;
                Ok(self.next_of(idx).is_some())
            }
            _ => Err(ListError::InvalidCursor),
        }
    }

    /// Returns a reference to the element the cursor addresses.
    /// Dereferencing the sentinel or end position, or a stale or
    /// foreign cursor, is [`ListError::InvalidCursor`].
    ///
    /// This method should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use lattix::lists::{ListError, SingleLinkedList};
    /// let mut list = SingleLinkedList::<u8>::new();
    /// let cursor = list.push_front(1);
    ///
    /// assert_eq!(list.get(&cursor), Ok(&1));
    ///
    /// list.pop_front().unwrap();
    /// // once the element is popped the cursor becomes invalid
    /// assert_eq!(list.get(&cursor), Err(ListError::InvalidCursor));
    /// ```
    pub fn get(&self, cursor: &Cursor<T>) -> Result<&T, ListError> {
        let idx = self.resolve(cursor).ok_or(ListError::InvalidCursor)?;
        match self.arena.get(idx) {
            Some(entry) => Ok(&entry.val),
            None => Err(ListError::InvalidCursor),
        }
    }

    /// Returns a mutable reference to the element the cursor
    /// addresses.
    ///
    /// This method should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use lattix::lists::SingleLinkedList;
    /// let mut list = SingleLinkedList::<u8>::new();
    /// let cursor = list.push_front(1);
    ///
    /// match list.get_mut(&cursor) {
    ///     Err(_) => {}
    ///     Ok(x) => *x = 100,
    /// }
    ///
    /// assert_eq!(list.get(&cursor), Ok(&100));
    /// ```
    pub fn get_mut(&mut self, cursor: &Cursor<T>) -> Result<&mut T, ListError> {
        let idx = self.resolve(cursor).ok_or(ListError::InvalidCursor)?;
        match self.arena.get_mut(idx) {
            Some(entry) => Ok(&mut entry.val),
            None => Err(ListError::InvalidCursor),
        }
    }

    /// Adds an element immediately after the position the cursor
    /// addresses and returns a cursor to the new element. The cursor
    /// must be the sentinel position or a live node of this list;
    /// inserting after the end position is
    /// [`ListError::InvalidCursor`].
    ///
    /// Inserting after
    /// [`before_front()`](SingleLinkedList::before_front) is
    /// equivalent to [`push_front`](SingleLinkedList::push_front).
    ///
    /// This operation should complete in *O*(*1*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use lattix::lists::SingleLinkedList;
    /// let mut list = SingleLinkedList::<u8>::new();
    ///
    /// list.push_front(0);
    /// let middle = list.push_front(1);
    /// list.push_front(2);
    /// list.insert_after(&middle, 100).unwrap();
    ///
    /// assert!(list.iter().eq(&[2, 1, 100, 0]));
    /// ```
    pub fn insert_after(&mut self, cursor: &Cursor<T>, elem: T) -> Result<Cursor<T>, ListError> {
        let prev = self.resolve_insertion_point(cursor)?;
        let idx = self.link_after(prev, elem);
        Ok(self.cursor_at(idx))
    }

    /// Removes and returns the element immediately after the position
    /// the cursor addresses. If no element follows the cursor, or the
    /// cursor is the end position, stale, or foreign, this method
    /// returns [`ListError::InvalidCursor`].
    ///
    /// This operation should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use lattix::lists::{ListError, SingleLinkedList};
    /// let mut list = SingleLinkedList::<u8>::new();
    ///
    /// list.push_front(1);
    /// list.push_front(2);
    /// let cursor = list.push_front(3);
    /// assert_eq!(list.remove_after(&cursor), Ok(2));
    /// assert_eq!(list.remove_after(&cursor), Ok(1));
    /// assert_eq!(list.remove_after(&cursor), Err(ListError::InvalidCursor));
    /// ```
    pub fn remove_after(&mut self, cursor: &Cursor<T>) -> Result<T, ListError> {
        let prev = self.resolve_insertion_point(cursor)?;
        let target = match prev {
            None => self.head,
            Some(p) => self.next_of(p),
        }
        .ok_or(ListError::InvalidCursor)?;

        let entry = self.arena.release(target);
        match prev {
            None => self.head = entry.next,
            Some(p) => {
                if let Some(prev_entry) = self.arena.get_mut(p) {
                    prev_entry.next = entry.next;
                }
            }
        }
        self.len -= 1;
        Ok(entry.val)
    }

    /// Removes and drops the element immediately after the position
    /// the cursor addresses and returns a cursor to the node that now
    /// follows it, or the end cursor if it was the last element.
    ///
    /// Erasing after
    /// [`before_front()`](SingleLinkedList::before_front) removes the
    /// current front element.
    ///
    /// This operation should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use lattix::lists::SingleLinkedList;
    /// let mut list: SingleLinkedList<u8> = [1, 2, 3].into_iter().collect();
    ///
    /// let before = list.before_front();
    /// let next = list.erase_after(&before).unwrap();
    /// assert_eq!(list.get(&next), Ok(&2));
    ///
    /// // erasing after the first element removes the last one
    /// let end = list.erase_after(&next).unwrap();
    /// assert_eq!(end, list.end_cursor());
    /// assert!(list.iter().eq(&[2]));
    /// ```
    pub fn erase_after(&mut self, cursor: &Cursor<T>) -> Result<Cursor<T>, ListError> {
        self.remove_after(cursor)?;
        self.next_cursor(cursor)
    }

    ////////////////////
    //Private Helpers
    ////////////////////

    /// Returns the slot index of the node a cursor addresses, or None
    /// if the cursor is invalid. The container id (cid) of the cursor
    /// is checked against the list itself so that cursors cannot be
    /// used across lists. If the container id matches then the node
    /// id (nid) is checked against the node id stored in the slot.
    /// The slot index always stays in bounds of the arena it came
    /// from, but its contents change as elements are inserted and
    /// removed; when they have changed, the node id no longer matches
    /// and the cursor is reported invalid.
    fn resolve(&self, cursor: &Cursor<T>) -> Option<usize> {
        if cursor.cid != self.cid {
            return None;
        }
        match cursor.pos {
            Pos::Node { idx, nid } => match self.arena.get(idx) {
                Some(entry) if entry.nid == nid => Some(idx),
                _ => None,
            },
            _ => None,
        }
    }

    /// Resolves a cursor to the node after which an insert or remove
    /// takes place: `None` for the sentinel position (the operation
    /// applies at the head link) or the slot index of a live node.
    fn resolve_insertion_point(&self, cursor: &Cursor<T>) -> Result<Option<usize>, ListError> {
        match cursor.pos {
            Pos::BeforeFront if cursor.cid == self.cid => Ok(None),
            Pos::Node { .. } => {
                let idx = self.resolve(cursor).ok_or(ListError::InvalidCursor)?;
                Ok(Some(idx))
            }
            _ => Err(ListError::InvalidCursor),
        }
    }

    fn next_of(&self, idx: usize) -> Option<usize> {
        self.arena.get(idx).and_then(|entry| entry.next)
    }

    fn cursor_at(&self, idx: usize) -> Cursor<T> {
        match self.arena.get(idx) {
            Some(entry) => Cursor::node(self.cid, idx, entry.nid),
            None => Cursor::end(self.cid),
        }
    }

    /// Links a new node after `prev` (or at the head link when `prev`
    /// is `None`) and returns its slot index.
    fn link_after(&mut self, prev: Option<usize>, elem: T) -> usize {
        let nid = nid_inc!(self.nid);
        let next = match prev {
            None => self.head,
            Some(p) => self.next_of(p),
        };
        let idx = self.arena.acquire(Entry {
            val: elem,
            nid,
            next,
        });
        match prev {
            None => self.head = Some(idx),
            Some(p) => {
                if let Some(prev_entry) = self.arena.get_mut(p) {
                    prev_entry.next = Some(idx);
                }
            }
        }
        self.len += 1;
        idx
    }
}

impl<T> Default for SingleLinkedList<T> {
    fn default() -> Self {
        SingleLinkedList::new()
    }
}

impl<T: Clone> Clone for SingleLinkedList<T> {
    /// Deep copies every element in order. The copy is built into a
    /// fresh list and returned whole, so a failure partway through
    /// the copy never leaves a half-written list behind.
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> FromIterator<T> for SingleLinkedList<T> {
    /// Builds a list from an ordered sequence of values, preserving
    /// the input order.
    ///
    /// # Examples
    /// ```
    /// use lattix::lists::SingleLinkedList;
    /// let list: SingleLinkedList<u8> = [1, 2, 3].into_iter().collect();
    /// assert!(list.iter().eq(&[1, 2, 3]));
    /// ```
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> SingleLinkedList<T> {
        let mut list = SingleLinkedList::new();
        let mut last = None;
        for elem in iter {
            last = Some(list.link_after(last, elem));
        }
        list
    }
}

impl<T> Extend<T> for SingleLinkedList<T> {
    /// Appends the values at the back of the list, preserving their
    /// order. Finding the current back takes *O*(*n*) time; each
    /// append after that is *O*(*1*).
    ///
    /// # Examples
    /// ```
    /// use lattix::lists::SingleLinkedList;
    /// let mut list: SingleLinkedList<u8> = [1, 2].into_iter().collect();
    /// list.extend([3, 4]);
    /// assert!(list.iter().eq(&[1, 2, 3, 4]));
    /// ```
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut last = None;
        let mut cur = self.head;
        while let Some(idx) = cur {
            last = Some(idx);
            cur = self.next_of(idx);
        }
        for elem in iter {
            last = Some(self.link_after(last, elem));
        }
    }
}

impl<T: PartialEq> PartialEq for SingleLinkedList<T> {
    /// Two lists are equal iff they have the same length and
    /// elementwise-equal values in order. *O*(*n*).
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SingleLinkedList<T> {}

impl<T: PartialOrd> PartialOrd for SingleLinkedList<T> {
    /// Lexicographic comparison of the element sequences: the first
    /// mismatching element decides, and a list that is a strict
    /// prefix of another sorts first. `>`, `<=` and `>=` follow from
    /// this ordering.
    ///
    /// # Examples
    /// ```
    /// use lattix::lists::SingleLinkedList;
    /// let a: SingleLinkedList<u8> = [1, 2].into_iter().collect();
    /// let b: SingleLinkedList<u8> = [1, 2, 3].into_iter().collect();
    /// assert!(a < b);
    /// ```
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for SingleLinkedList<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    macro_rules! assert_empty {
        ($ll:ident) => {
            assert!($ll.head.is_none());
            assert_eq!($ll.len(), 0);
            assert!($ll.is_empty());
        };
    }

    macro_rules! assert_elements {
        ($ll:ident, $($val:literal),+) => {
            assert!($ll.iter().eq(&[$($val),+]));
        };
    }

    #[test]
    fn test_new() {
        let ll1 = SingleLinkedList::<u8>::new();
        let ll2 = SingleLinkedList::<u8>::new();
        assert!(ll1.cid < ll2.cid);
        assert_empty!(ll1);
        assert_eq!(ll1.capacity(), 0);
    }

    #[test]
    fn test_push_front() {
        let mut ll = SingleLinkedList::<u8>::new();
        let first = ll.push_front(11);
        assert_eq!(ll.front(), Some(&11));
        assert_eq!(ll.get(&first), Ok(&11));
        assert_eq!(ll.len(), 1);

        let second = ll.push_front(12);
        assert_eq!(ll.front(), Some(&12));
        assert_eq!(ll.len(), 2);
        assert_eq!(ll.get(&second), Ok(&12));
        assert_eq!(ll.get(&first), Ok(&11));
        assert_elements!(ll, 12, 11);
    }

    #[test]
    fn test_pop_front() {
        let mut ll = SingleLinkedList::<u8>::new();
        assert_eq!(ll.pop_front(), Err(ListError::EmptyList));

        ll.push_front(11);
        ll.push_front(12);
        ll.push_front(13);
        assert_eq!(ll.pop_front(), Ok(13));
        assert_eq!(ll.pop_front(), Ok(12));
        assert_eq!(ll.pop_front(), Ok(11));
        assert_empty!(ll);
        assert_eq!(ll.pop_front(), Err(ListError::EmptyList));
    }

    #[test]
    fn test_push_pop_restores_sequence() {
        let mut ll: SingleLinkedList<u8> = [1, 2, 3].into_iter().collect();
        ll.push_front(0);
        assert_eq!(ll.len(), 4);
        assert_eq!(ll.pop_front(), Ok(0));
        assert_eq!(ll.len(), 3);
        assert_elements!(ll, 1, 2, 3);
    }

    #[test]
    fn test_insert_after_sentinel_is_push_front() {
        let mut pushed = SingleLinkedList::<u8>::new();
        pushed.push_front(2);
        pushed.push_front(1);

        let mut inserted = SingleLinkedList::<u8>::new();
        let before = inserted.before_front();
        inserted.insert_after(&before, 2).unwrap();
        inserted.insert_after(&before, 1).unwrap();

        assert_eq!(inserted, pushed);
        assert_eq!(inserted.front(), Some(&1));
    }

    #[test]
    fn test_insert_after_middle_and_back() {
        let mut ll: SingleLinkedList<u8> = [1, 2, 3].into_iter().collect();
        let first = ll.front_cursor();
        let middle = ll.insert_after(&first, 10).unwrap();
        assert_elements!(ll, 1, 10, 2, 3);
        assert_eq!(ll.get(&middle), Ok(&10));

        // walk to the last element and append after it
        let mut last = ll.front_cursor();
        while ll.has_next(&last).unwrap() {
            last = ll.next_cursor(&last).unwrap();
        }
        let back = ll.insert_after(&last, 20).unwrap();
        assert_elements!(ll, 1, 10, 2, 3, 20);
        assert_eq!(ll.has_next(&back), Ok(false));
        assert_eq!(ll.len(), 5);
    }

    #[test]
    fn test_insert_after_rejects_end_and_foreign() {
        let mut ll = SingleLinkedList::<u8>::new();
        let end = ll.end_cursor();
        assert_eq!(ll.insert_after(&end, 1), Err(ListError::InvalidCursor));

        let mut other = SingleLinkedList::<u8>::new();
        let foreign = other.push_front(1);
        assert_eq!(ll.insert_after(&foreign, 1), Err(ListError::InvalidCursor));
        assert_eq!(
            ll.insert_after(&other.before_front(), 1),
            Err(ListError::InvalidCursor)
        );
        assert_empty!(ll);

        let detached = Cursor::<u8>::default();
        assert_eq!(ll.get(&detached), Err(ListError::InvalidCursor));
        assert_eq!(ll.insert_after(&detached, 1), Err(ListError::InvalidCursor));
    }

    #[test]
    fn test_remove_after() {
        let mut ll: SingleLinkedList<u8> = [1, 2, 3].into_iter().collect();
        let first = ll.front_cursor();
        assert_eq!(ll.remove_after(&first), Ok(2));
        assert_elements!(ll, 1, 3);
        assert_eq!(ll.remove_after(&first), Ok(3));
        assert_eq!(ll.remove_after(&first), Err(ListError::InvalidCursor));
        assert_eq!(ll.len(), 1);

        let before = ll.before_front();
        assert_eq!(ll.remove_after(&before), Ok(1));
        assert_empty!(ll);
        assert_eq!(ll.remove_after(&before), Err(ListError::InvalidCursor));
    }

    #[test]
    fn test_erase_after_returns_following() {
        let mut ll: SingleLinkedList<u8> = [1, 2, 3].into_iter().collect();
        let before = ll.before_front();
        let next = ll.erase_after(&before).unwrap();
        assert_eq!(ll.get(&next), Ok(&2));
        assert_elements!(ll, 2, 3);

        // erasing after the element preceding the last one removes
        // the last element and yields the end cursor
        let end = ll.erase_after(&next).unwrap();
        assert_eq!(end, ll.end_cursor());
        assert_elements!(ll, 2);

        let end = ll.erase_after(&before).unwrap();
        assert_eq!(end, ll.end_cursor());
        assert_empty!(ll);
        assert_eq!(ll.erase_after(&before), Err(ListError::InvalidCursor));
    }

    #[test]
    fn test_cursor_invalidation_on_slot_reuse() {
        let mut ll = SingleLinkedList::<u8>::with_capacity(4);
        let stale = ll.push_front(12);
        assert_eq!(ll.pop_front(), Ok(12));

        // the reused slot must not revive the old cursor
        let fresh = ll.push_front(200);
        assert_eq!(ll.get(&stale), Err(ListError::InvalidCursor));
        assert_eq!(ll.get(&fresh), Ok(&200));
        assert_eq!(ll.next_cursor(&stale), Err(ListError::InvalidCursor));
        assert_eq!(ll.has_next(&stale), Err(ListError::InvalidCursor));
    }

    #[test]
    fn test_clear() {
        let mut ll = SingleLinkedList::<u8>::with_capacity(10);
        let cursor = ll.push_front(0);
        ll.push_front(1);
        ll.push_front(2);
        assert_eq!(ll.len(), 3);
        assert_eq!(ll.capacity(), 10);

        ll.clear();
        assert_empty!(ll);
        assert_eq!(ll.capacity(), 10);
        assert_eq!(ll.get(&cursor), Err(ListError::InvalidCursor));

        // clearing an empty list is a no-op
        ll.clear();
        assert_empty!(ll);
    }

    #[test]
    fn test_capacity_reuse() {
        let mut ll = SingleLinkedList::<u8>::with_capacity(4);
        for i in 0..4 {
            ll.push_front(i);
        }
        assert_eq!(ll.capacity(), 4);

        ll.pop_front().unwrap();
        ll.pop_front().unwrap();
        assert_eq!(ll.len(), 2);
        assert_eq!(ll.capacity(), 4);

        ll.push_front(10);
        ll.push_front(11);
        assert_eq!(ll.len(), 4);
        assert_eq!(ll.capacity(), 4);

        ll.push_front(12);
        assert_eq!(ll.len(), 5);
        assert_eq!(ll.capacity(), 5);
    }

    #[test]
    fn test_iter() {
        let mut ll = SingleLinkedList::<u8>::with_capacity(10);
        for i in 0..10 {
            ll.push_front(i);
        }

        let mut iter = ll.iter();
        assert_eq!(iter.len(), 10);
        let mut count = 9;
        while let Some(val) = iter.next() {
            assert_eq!(*val, count);
            if count > 0 {
                count -= 1;
            }
        }

        for val in ll.iter_mut() {
            *val += 1;
        }

        let mut count = 9;
        for val in &ll {
            assert_eq!(*val, count + 1);
            if count > 0 {
                count -= 1;
            }
        }

        for val in &mut ll {
            *val -= 1;
        }

        let drained: Vec<u8> = ll.into_iter().collect();
        assert_eq!(drained, vec![9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_eq_reflexive_and_clone_independent() {
        let ll: SingleLinkedList<u8> = [1, 2, 3].into_iter().collect();
        assert_eq!(ll, ll);

        let mut copy = ll.clone();
        assert_eq!(copy, ll);
        assert_eq!(copy.len(), 3);

        // mutating the copy must not affect the original
        if let Some(x) = copy.front_mut() {
            *x = 100;
        }
        copy.push_front(0);
        assert_ne!(copy, ll);
        assert_elements!(ll, 1, 2, 3);
    }

    #[test]
    fn test_assignment_by_clone() {
        let rhs: SingleLinkedList<u8> = [4, 5].into_iter().collect();
        let mut lhs: SingleLinkedList<u8> = [1, 2, 3].into_iter().collect();
        lhs = rhs.clone();
        assert_eq!(lhs, rhs);

        lhs.push_front(0);
        assert_elements!(rhs, 4, 5);

        // self assignment leaves the list unchanged
        lhs = lhs.clone();
        assert_elements!(lhs, 0, 4, 5);
    }

    #[test]
    fn test_lexicographic_order() {
        let ab: SingleLinkedList<u8> = [1, 2].into_iter().collect();
        let abc: SingleLinkedList<u8> = [1, 2, 3].into_iter().collect();
        let ac: SingleLinkedList<u8> = [1, 3].into_iter().collect();
        let abx: SingleLinkedList<u8> = [1, 2, 9].into_iter().collect();

        // a strict prefix sorts first
        assert!(ab < abc);
        assert!(abc > ab);
        assert!(ab <= abc);

        // the first mismatch decides, regardless of length
        assert!(ac > abx);
        assert!(abx < ac);

        let abc2: SingleLinkedList<u8> = [1, 2, 3].into_iter().collect();
        assert_eq!(abc, abc2);
        assert!(!(abc < abc2));
        assert!(!(abc > abc2));
        assert!(abc <= abc2);
        assert!(abc >= abc2);

        let empty = SingleLinkedList::<u8>::new();
        assert!(empty < ab);
        assert_eq!(empty.cmp(&empty), core::cmp::Ordering::Equal);
    }

    #[test]
    fn test_swap() {
        let mut a: SingleLinkedList<u8> = [1, 2].into_iter().collect();
        let mut b: SingleLinkedList<u8> = [3, 4, 5].into_iter().collect();
        let cursor = a.front_cursor();

        a.swap(&mut b);
        assert_elements!(a, 3, 4, 5);
        assert_elements!(b, 1, 2);
        assert_eq!(a.len(), 3);
        assert_eq!(b.len(), 2);

        // the cursor follows its element into the other list object
        assert_eq!(b.get(&cursor), Ok(&1));
        assert_eq!(a.get(&cursor), Err(ListError::InvalidCursor));
    }

    #[test]
    fn test_from_iter_and_extend() {
        let ll: SingleLinkedList<u8> = (1..=3).collect();
        assert_elements!(ll, 1, 2, 3);

        let mut ll = SingleLinkedList::<u8>::new();
        ll.extend([1, 2]);
        assert_elements!(ll, 1, 2);
        ll.extend([3, 4]);
        assert_elements!(ll, 1, 2, 3, 4);
        assert_eq!(ll.len(), 4);
    }

    #[test]
    fn test_next_cursor_walk() {
        let ll: SingleLinkedList<u8> = [1, 2, 3].into_iter().collect();
        let mut collected = Vec::new();
        let mut cursor = ll.before_front();
        loop {
            cursor = ll.next_cursor(&cursor).unwrap();
            match ll.get(&cursor) {
                Ok(val) => collected.push(*val),
                Err(_) => break,
            }
        }
        assert_eq!(cursor, ll.end_cursor());
        assert_eq!(collected, vec![1, 2, 3]);
        assert_eq!(ll.next_cursor(&cursor), Err(ListError::InvalidCursor));
    }

    #[test]
    fn test_contains() {
        let ll: SingleLinkedList<u8> = [0, 1, 2].into_iter().collect();
        assert!(ll.contains(&0));
        assert!(ll.contains(&2));
        assert!(!ll.contains(&10));
    }

    #[test]
    fn test_debug() {
        let ll: SingleLinkedList<u8> = [1, 2].into_iter().collect();
        let out = format!("{:?}", ll);
        assert!(out.contains("SingleLinkedList"));
    }
}
