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

//! A doubly linked list that owns its elements and hands out a
//! stable [`Entry`](node::Entry) handle for every one of them. The
//! list allows pushing and popping elements at either end in
//! constant time with an API in the spirit of
//! `std::collections::LinkedList`.
//!
//! In contrast to `std::collections::LinkedList`, however, any
//! element whose entry handle was previously captured can be removed
//! from the middle of the list in constant time, and a handle whose
//! element has already left the list is safely inert.
//!
pub mod fl;
pub mod iter;
pub mod list;
pub mod node;
