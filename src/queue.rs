use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Min-priority queue ordered by an explicit comparator.
///
/// `pop` always returns the element that compares `Less` than (or equal to)
/// every other element under `cmp`.
pub struct PriorityQueue<T> {
    heap: BinaryHeap<Entry<T>>,
    cmp: fn(&T, &T) -> Ordering,
}

struct Entry<T> {
    value: T,
    cmp: fn(&T, &T) -> Ordering,
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap
        (self.cmp)(&other.value, &self.value)
    }
}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PriorityQueue<T> {
    pub fn new(cmp: fn(&T, &T) -> Ordering) -> Self {
        Self {
            heap: BinaryHeap::new(),
            cmp,
        }
    }

    pub fn push(&mut self, value: T) {
        self.heap.push(Entry {
            value,
            cmp: self.cmp,
        });
    }

    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|entry| entry.value)
    }

    pub fn peek(&self) -> Option<&T> {
        self.heap.peek().map(|entry| &entry.value)
    }

    pub fn size(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T> Extend<T> for PriorityQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}
