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

//! A singly linked list that owns its nodes and addresses positions
//! through copyable, validity-checked cursors. A sentinel position
//! before the first element makes inserting at the front the same
//! operation as inserting after any other position.
//!
//! Unlike `std::collections::LinkedList`, this list supports constant
//! time inserts and removes after any position in the list, and using
//! a cursor whose node has been removed is a checked error rather
//! than undefined behavior.

pub mod arena;
pub mod cursor;
pub mod iter;
pub mod list;
