// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-flight request coalescing.
//!
//! At most one computation runs per key; concurrent callers with an equal
//! key block on the same slot and receive a clone of the leader's result.
//! The slot is removed when the leader finishes, and also when it panics, so
//! a failed computation never wedges later callers; they simply recompute.

use parking_lot::{Condvar, Mutex};
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

/// Keyed map of in-flight computations.
pub struct Inflight<K, V> {
    slots: Mutex<HashMap<K, Arc<Slot<V>>>>,
}

enum State<V> {
    Pending,
    Done(V),
    /// The leader panicked before producing a value.
    Poisoned,
}

struct Slot<V> {
    state: Mutex<State<V>>,
    ready: Condvar,
}

enum Role<V> {
    Leader(Arc<Slot<V>>),
    Follower(Arc<Slot<V>>),
}

impl<K, V> Inflight<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Run `compute` for `key`, coalescing with any concurrent call.
    ///
    /// The first caller for a key becomes the leader and runs `compute`;
    /// everyone else arriving while it runs blocks and receives a clone of
    /// the leader's value. If the leader panics, its slot is cleared and
    /// blocked followers race to become the next leader.
    pub fn run<F>(&self, key: K, compute: F) -> V
    where
        F: FnOnce() -> V,
    {
        let mut compute = Some(compute);
        loop {
            match self.claim(&key) {
                Role::Leader(slot) => {
                    let cleanup = Cleanup {
                        inflight: self,
                        key: &key,
                        slot: &slot,
                    };
                    // The closure is consumed exactly once; a retry loop only
                    // re-enters as a follower after losing the leader claim.
                    let compute = compute
                        .take()
                        .expect("leader claimed twice for one run call");
                    let value = compute();
                    *slot.state.lock() = State::Done(value.clone());
                    slot.ready.notify_all();
                    drop(cleanup);
                    return value;
                }
                Role::Follower(slot) => {
                    let mut state = slot.state.lock();
                    while matches!(*state, State::Pending) {
                        slot.ready.wait(&mut state);
                    }
                    match &*state {
                        State::Done(value) => return value.clone(),
                        // Leader died; retry from the top.
                        State::Poisoned => continue,
                        State::Pending => unreachable!(),
                    }
                }
            }
        }
    }

    /// Number of computations currently in flight.
    pub fn pending(&self) -> usize {
        self.slots.lock().len()
    }

    fn claim(&self, key: &K) -> Role<V> {
        let mut slots = self.slots.lock();
        if let Some(slot) = slots.get(key) {
            Role::Follower(Arc::clone(slot))
        } else {
            let slot = Arc::new(Slot {
                state: Mutex::new(State::Pending),
                ready: Condvar::new(),
            });
            slots.insert(key.clone(), Arc::clone(&slot));
            Role::Leader(slot)
        }
    }

    fn release(&self, key: &K) {
        self.slots.lock().remove(key);
    }
}

impl<K, V> Default for Inflight<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Removes the leader's slot on scope exit. If the leader never stored a
/// value (it panicked), the slot is poisoned so followers stop waiting.
struct Cleanup<'a, K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    inflight: &'a Inflight<K, V>,
    key: &'a K,
    slot: &'a Arc<Slot<V>>,
}

impl<K, V> Drop for Cleanup<'_, K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn drop(&mut self) {
        self.inflight.release(self.key);
        let mut state = self.slot.state.lock();
        if matches!(*state, State::Pending) {
            *state = State::Poisoned;
            self.slot.ready.notify_all();
        }
    }
}
