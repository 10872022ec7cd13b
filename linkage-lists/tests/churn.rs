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

//! Randomized churn against a `VecDeque` model. Every operation is
//! mirrored on the model; removals go through entries captured at
//! insertion time, some of which have long since gone stale.

use linkage::lists::linkedlist::Entry;
use linkage::lists::LinkedList;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

const OPS: usize = 10_000;

#[test]
fn churn_matches_vecdeque_model() {
    let mut rng = StdRng::seed_from_u64(0x11CA6E);
    let mut list = LinkedList::<u64>::with_capacity(16);
    let mut model = VecDeque::<u64>::new();
    let mut handles: Vec<(u64, Entry<u64>)> = Vec::new();
    let mut next_val: u64 = 0;

    for _ in 0..OPS {
        match rng.random_range(0..5u8) {
            0 => {
                let v = next_val;
                next_val += 1;
                handles.push((v, list.push(v)));
                model.push_back(v);
            }
            1 => {
                let v = next_val;
                next_val += 1;
                handles.push((v, list.unshift(v)));
                model.push_front(v);
            }
            2 => {
                assert_eq!(list.shift(), model.pop_front());
            }
            3 => {
                assert_eq!(list.pop(), model.pop_back());
            }
            _ => {
                if handles.is_empty() {
                    continue;
                }
                let idx = rng.random_range(0..handles.len());
                let (v, entry) = handles[idx];
                match list.remove(&entry) {
                    Some(removed) => {
                        assert_eq!(removed, v);
                        let pos = model
                            .iter()
                            .position(|&m| m == v)
                            .expect("value missing from model");
                        assert_eq!(model.remove(pos), Some(v));
                    }
                    None => {
                        // stale entry: the element must be long gone
                        assert!(model.iter().all(|&m| m != v));
                    }
                }
            }
        }

        assert_eq!(list.len(), model.len());
        assert_eq!(list.peek(), model.front());
        assert_eq!(list.peek_back(), model.back());
    }

    let drained: Vec<u64> = list.iter().copied().collect();
    let expected: Vec<u64> = model.iter().copied().collect();
    assert_eq!(drained, expected);

    let mut reversed: Vec<u64> = list.iter().reverse().copied().collect();
    reversed.reverse();
    assert_eq!(reversed, expected);
}

#[test]
fn churn_entries_stay_consistent() {
    let mut rng = StdRng::seed_from_u64(0xD0_0D1E);
    let mut list = LinkedList::<u64>::new();
    let mut live: Vec<(u64, Entry<u64>)> = Vec::new();

    for v in 0..512u64 {
        live.push((v, list.push(v)));
    }

    // remove half the elements in random order through their entries
    while list.len() > 256 {
        let idx = rng.random_range(0..live.len());
        let (v, entry) = live.swap_remove(idx);
        assert_eq!(list.remove(&entry), Some(v));
    }

    // every surviving entry still resolves to its own value
    for (v, entry) in &live {
        assert_eq!(list.get(entry), Some(v));
    }

    // and the survivors appear in insertion order
    let values: Vec<u64> = list.iter().copied().collect();
    let mut sorted = values.clone();
    sorted.sort_unstable();
    assert_eq!(values, sorted);
}
