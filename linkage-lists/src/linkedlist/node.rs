/*
   Linkage: A doubly linked list that vends stable entry handles and
   allows for O(1) inserts and removes at either end and at any
   previously obtained entry, without a traversal

   Copyright 2026 "The Linkage Project Developers"

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

use std::ptr;

#[derive(Debug, PartialEq, Eq)]
pub(super) struct InternalNode<T> {
    pub(super) val: T,
    pub(super) fl_node: bool,
    pub(super) eid: usize,
    pub(super) prev: *mut InternalNode<T>,
    pub(super) next: *mut InternalNode<T>,
}

/// A handle to a single element of the
/// [`LinkedList`](../struct.LinkedList.html).
///
/// This struct wraps a raw pointer to memory but does not implement
/// the `Deref` trait so the pointer cannot be dereferenced directly.
/// An entry can be used only by methods of the list that vended it.
/// Entries can be copied and passed around by value regardless of the
/// lifetime of the list. Once the element that an entry refers to
/// leaves the list, by any path, the entry becomes stale. Passing a
/// stale entry into the list is safe since every method that accepts
/// a reference to an entry returns `None` if the entry is stale.
#[derive(Debug, PartialEq, Eq, Copy)]
pub struct Entry<T> {
    pub(super) cid: usize,
    pub(super) eid: usize,
    pub(super) ptr: *mut InternalNode<T>,
}

impl<T> Clone for Entry<T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<T> Default for Entry<T> {
    fn default() -> Self {
        Self {
            cid: 0,
            eid: 0,
            ptr: ptr::null_mut(),
        }
    }
}

impl<T> InternalNode<T> {
    pub(super) fn new(val: T, eid: usize) -> InternalNode<T> {
        InternalNode {
            val,
            fl_node: false,
            eid,
            next: ptr::null_mut(),
            prev: ptr::null_mut(),
        }
    }
}

impl<T> Entry<T> {
    pub(super) fn new(cid: usize, eid: usize, ptr: *mut InternalNode<T>) -> Entry<T> {
        Entry { cid, eid, ptr }
    }
}
