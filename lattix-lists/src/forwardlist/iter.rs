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
use crate::forwardlist::list::SingleLinkedList;

/// A forward iterator over the elements of the
/// [`SingleLinkedList`](SingleLinkedList).
///
/// This struct is created by the
/// [`.iter()`](SingleLinkedList#method.iter) method of the
/// [`SingleLinkedList`](SingleLinkedList). Iteration is single step,
/// front to back, and can be restarted at any time with a fresh call
/// to `.iter()`.
///
/// # Examples
/// ```
/// use lattix::lists::SingleLinkedList;
///
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
#[derive(Debug)]
pub struct Iter<'a, T> {
    list: &'a SingleLinkedList<T>,
    cursor: Option<usize>,
    remaining: usize,
}

/// A forward iterator over the elements of the [`SingleLinkedList`]
/// with mutable references that allows the element to be modified.
///
/// This struct is created by the
/// [`.iter_mut()`](SingleLinkedList#method.iter_mut) method of the
/// [`SingleLinkedList`](SingleLinkedList).
///
/// # Examples
/// ```
/// use lattix::lists::SingleLinkedList;
///
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
#[derive(Debug)]
pub struct IterMut<'a, T> {
    list: &'a mut SingleLinkedList<T>,
    cursor: Option<usize>,
    remaining: usize,
}

/// A draining iterator over the elements of the
/// [`SingleLinkedList`].
///
/// This struct is created by the `into_iter()` method of the
/// [`SingleLinkedList`](SingleLinkedList). Elements are yielded front
/// to back by popping them off the list.
#[derive(Debug)]
pub struct IntoIter<T> {
    list: SingleLinkedList<T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(list: &'a SingleLinkedList<T>) -> Iter<'a, T> {
        Iter {
            cursor: list.head,
            remaining: list.len(),
            list,
        }
    }
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(list: &'a mut SingleLinkedList<T>) -> IterMut<'a, T> {
        IterMut {
            cursor: list.head,
            remaining: list.len(),
            list,
        }
    }
}

impl<T> IntoIter<T> {
    pub(crate) fn new(list: SingleLinkedList<T>) -> IntoIter<T> {
        IntoIter { list }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        let idx = self.cursor?;
        let entry = self.list.arena.get(idx)?;
        self.cursor = entry.next;
        self.remaining -= 1;
        Some(&entry.val)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;
    fn next(&mut self) -> Option<&'a mut T> {
        let idx = self.cursor?;
        let entry = self.list.arena.get_mut(idx)?;
        self.cursor = entry.next;
        self.remaining -= 1;
        // Every slot index is visited at most once, so the reference
        // handed out here cannot alias a previously yielded element.
        let val: *mut T = &mut entry.val;
        unsafe { Some(&mut *val) }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        self.list.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> ExactSizeIterator for IntoIter<T> {}
