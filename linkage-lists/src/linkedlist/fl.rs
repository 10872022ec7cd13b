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
use crate::linkedlist::node::InternalNode;
extern crate alloc;

use alloc::{alloc::alloc, alloc::dealloc, alloc::Layout};
use core::ptr;

/// The node pool. Freed nodes are chained into a LIFO stack through
/// their `next` pointers and handed back out on the next insert, so
/// the list never allocates or deallocates per element. Memory is
/// returned to the allocator only when the pool is dropped.
#[derive(Debug)]
pub(super) struct FreeList<T> {
    capacity: usize,
    len: usize,
    top: *mut InternalNode<T>,
}

impl<T> Drop for FreeList<T> {
    fn drop(&mut self) {
        let layout = Layout::new::<InternalNode<T>>();
        let mut cur = self.top;
        while !cur.is_null() {
            unsafe {
                let next = (*cur).next;
                dealloc(cur as *mut u8, layout);
                cur = next;
            }
        }
    }
}

impl<T> FreeList<T> {
    pub(super) fn new(capacity: usize) -> FreeList<T> {
        let mut fl = FreeList {
            capacity,
            len: 0,
            top: ptr::null_mut(),
        };
        fl.alloc(capacity);
        fl
    }

    pub(super) fn len(&self) -> usize {
        self.len
    }

    fn alloc(&mut self, size: usize) {
        let layout = Layout::new::<InternalNode<T>>();

        let mut count: usize = 0;
        unsafe {
            while count < size {
                let ptr: *mut InternalNode<T> = alloc(layout) as *mut InternalNode<T>;
                self.push(ptr);
                count += 1;
            }
        }
    }

    fn push(&mut self, ptr: *mut InternalNode<T>) {
        unsafe {
            (*ptr).next = self.top;
            (*ptr).prev = ptr::null_mut();
        }
        self.top = ptr;
        self.len += 1;
    }

    fn pop(&mut self) -> *mut InternalNode<T> {
        if self.top.is_null() {
            return ptr::null_mut();
        }
        let ptr = self.top;
        unsafe {
            self.top = (*ptr).next;
            (*ptr).next = ptr::null_mut();
        }
        self.len -= 1;
        ptr
    }

    /// Returns the node's value and parks the slot on the free
    /// stack. The slot is flagged so that stale entries pointing at
    /// it fail validation before its entry id is ever compared.
    pub(super) fn release(&mut self, ptr: *mut InternalNode<T>) -> T {
        unsafe {
            let node = ptr::read(ptr);
            (*ptr).fl_node = true;
            self.push(ptr);
            node.val
        }
    }

    pub(super) fn acquire(&mut self, val: T, eid: usize) -> *mut InternalNode<T> {
        let mut ptr = self.pop();
        if ptr.is_null() {
            self.grow();
            ptr = self.pop();
            if ptr.is_null() {
                panic!("alloc failed on acquire");
            }
        }

        let node = InternalNode::new(val, eid);
        unsafe {
            ptr::write(ptr, node);
        }
        ptr
    }

    fn grow(&mut self) {
        if self.capacity == 0 {
            self.alloc(1);
        } else {
            self.alloc(self.capacity);
            self.capacity *= 2;
        }
    }
}
