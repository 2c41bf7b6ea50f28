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
use core::mem;

/// An occupied node: the element, the node id it was created with and
/// the index of the next node in the list (or `None` at the back).
#[derive(Debug)]
pub(super) struct Entry<T> {
    pub(super) val: T,
    pub(super) nid: usize,
    pub(super) next: Option<usize>,
}

#[derive(Debug)]
enum Slot<T> {
    Occupied(Entry<T>),
    Vacant { next_free: Option<usize> },
}

/// A slab of node slots. Released slots are chained into an intrusive
/// free list and handed back out on the next acquire, so a
/// steady-state list never reallocates. A slot index stays stable for
/// the lifetime of the arena; whether it still holds the node a
/// cursor was created for is decided by the node id stored in the
/// entry.
#[derive(Debug)]
pub(super) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<usize>,
    free_len: usize,
}

impl<T> Arena<T> {
    pub(super) fn new(capacity: usize) -> Arena<T> {
        let mut arena = Arena {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            free_len: 0,
        };
        for _ in 0..capacity {
            let idx = arena.slots.len();
            arena.slots.push(Slot::Vacant {
                next_free: arena.free_head,
            });
            arena.free_head = Some(idx);
            arena.free_len += 1;
        }
        arena
    }

    pub(super) fn free_len(&self) -> usize {
        self.free_len
    }

    /// Returns the entry at `idx`, or `None` if the index is out of
    /// bounds or the slot is on the free list.
    pub(super) fn get(&self, idx: usize) -> Option<&Entry<T>> {
        match self.slots.get(idx) {
            Some(Slot::Occupied(entry)) => Some(entry),
            _ => None,
        }
    }

    pub(super) fn get_mut(&mut self, idx: usize) -> Option<&mut Entry<T>> {
        match self.slots.get_mut(idx) {
            Some(Slot::Occupied(entry)) => Some(entry),
            _ => None,
        }
    }

    /// Stores the entry in a recycled slot if one is free, otherwise
    /// in a newly allocated slot. Returns the slot index.
    pub(super) fn acquire(&mut self, entry: Entry<T>) -> usize {
        match self.free_head {
            Some(idx) => {
                match mem::replace(&mut self.slots[idx], Slot::Occupied(entry)) {
                    Slot::Vacant { next_free } => {
                        self.free_head = next_free;
                        self.free_len -= 1;
                    }
                    Slot::Occupied(_) => panic!("free list points at an occupied slot"),
                }
                idx
            }
            None => {
                self.slots.push(Slot::Occupied(entry));
                self.slots.len() - 1
            }
        }
    }

    /// Removes and returns the entry at `idx` and pushes the slot
    /// onto the free list. This method will panic if the slot is
    /// already vacant.
    pub(super) fn release(&mut self, idx: usize) -> Entry<T> {
        let slot = mem::replace(
            &mut self.slots[idx],
            Slot::Vacant {
                next_free: self.free_head,
            },
        );
        match slot {
            Slot::Occupied(entry) => {
                self.free_head = Some(idx);
                self.free_len += 1;
                entry
            }
            Slot::Vacant { .. } => panic!("cannot release a vacant slot"),
        }
    }
}
