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

use core::fmt;
use core::marker::PhantomData;

/// The position a cursor addresses: the sentinel before the first
/// element, a node identified by slot index and node id, or the
/// position one past the last element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Pos {
    BeforeFront,
    Node { idx: usize, nid: usize },
    End,
}

/// A cursor addressing a position in a
/// [`SingleLinkedList`](super::list::SingleLinkedList).
///
/// A cursor holds no reference into the list. It carries the id of
/// the list it was obtained from and the id of the node it addresses,
/// and can be copied and passed around by value regardless of the
/// lifetime of the list. Once the element the cursor addresses is
/// removed, the cursor becomes invalid. Passing an invalid cursor
/// into a list method is safe: every method that accepts a cursor
/// returns [`ListError::InvalidCursor`](super::list::ListError) for
/// cursors that are stale, belong to another list, or address the end
/// where a node is required.
///
/// Two cursors compare equal iff they address the same position of
/// the same list, regardless of the element values.
pub struct Cursor<T> {
    pub(super) cid: usize,
    pub(super) pos: Pos,
    marker: PhantomData<fn() -> T>,
}

impl<T> Cursor<T> {
    pub(super) fn before_front(cid: usize) -> Cursor<T> {
        Cursor {
            cid,
            pos: Pos::BeforeFront,
            marker: PhantomData,
        }
    }

    pub(super) fn node(cid: usize, idx: usize, nid: usize) -> Cursor<T> {
        Cursor {
            cid,
            pos: Pos::Node { idx, nid },
            marker: PhantomData,
        }
    }

    pub(super) fn end(cid: usize) -> Cursor<T> {
        Cursor {
            cid,
            pos: Pos::End,
            marker: PhantomData,
        }
    }
}

impl<T> Clone for Cursor<T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<T> Copy for Cursor<T> {}

impl<T> PartialEq for Cursor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cid == other.cid && self.pos == other.pos
    }
}

impl<T> Eq for Cursor<T> {}

impl<T> fmt::Debug for Cursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("cid", &self.cid)
            .field("pos", &self.pos)
            .finish()
    }
}

/// A detached cursor that addresses no list. Any list method rejects
/// it as invalid.
impl<T> Default for Cursor<T> {
    fn default() -> Self {
        Cursor::end(0)
    }
}
