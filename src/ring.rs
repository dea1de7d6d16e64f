//! Fixed-capacity ring buffer.
//!
//! The rolling evidence windows (transitions, micro-expressions) keep the
//! last N entries. Eviction reuses slots through index arithmetic instead
//! of shifting the whole tail on every push.

/// Fixed-capacity FIFO over a pre-sized slot vector.
///
/// `head` marks the oldest slot once the buffer has wrapped; before that
/// the slots are already in insertion order.
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    slots: Vec<T>,
    capacity: usize,
    head: usize,
}

impl<T> RingBuffer<T> {
    /// Creates an empty ring holding at most `capacity` entries.
    ///
    /// A zero capacity is pinned to one slot so `push` stays total.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
            head: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Appends `value`, returning the evicted oldest entry once full.
    pub fn push(&mut self, value: T) -> Option<T> {
        if self.slots.len() < self.capacity {
            self.slots.push(value);
            None
        } else {
            let evicted = std::mem::replace(&mut self.slots[self.head], value);
            self.head = (self.head + 1) % self.capacity;
            Some(evicted)
        }
    }

    /// Oldest live entry.
    pub fn front(&self) -> Option<&T> {
        if self.slots.len() < self.capacity {
            self.slots.first()
        } else {
            self.slots.get(self.head)
        }
    }

    /// Newest live entry.
    pub fn back(&self) -> Option<&T> {
        if self.slots.len() < self.capacity {
            self.slots.last()
        } else {
            self.slots.get((self.head + self.capacity - 1) % self.capacity)
        }
    }

    /// Iterates oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let split = if self.slots.len() < self.capacity {
            0
        } else {
            self.head
        };
        self.slots[split..].iter().chain(self.slots[..split].iter())
    }
}

impl<T: Clone> RingBuffer<T> {
    /// Snapshot in oldest-to-newest order.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}
