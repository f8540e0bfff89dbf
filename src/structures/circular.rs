//! Fixed-capacity circular FIFO buffer

use super::StructureError;

/// Smallest capacity a buffer is ever built with.
const MIN_CAPACITY: usize = 1;

/// A FIFO queue over fixed storage.
///
/// Logical element `i` (counted from the front) lives in physical slot
/// `(front + i) % capacity`. Appending to a full buffer is an error; callers
/// that want growth call [`grow`](Self::grow) first.
#[derive(Debug, Clone)]
pub struct BoundedCircularBuffer<T> {
    items: Vec<Option<T>>,
    front: usize,
    length: usize,
}

impl<T> BoundedCircularBuffer<T> {
    /// Create an empty buffer. A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        Self { items: empty_slots(capacity.max(MIN_CAPACITY)), front: 0, length: 0 }
    }

    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn is_full(&self) -> bool {
        self.length == self.capacity()
    }

    /// Physical slot of logical position `logical`.
    fn slot(&self, logical: usize) -> usize {
        (self.front + logical) % self.capacity()
    }

    /// Insert at the rear.
    pub fn append(&mut self, item: T) -> Result<(), StructureError> {
        if self.is_full() {
            return Err(StructureError::CapacityExceeded { capacity: self.capacity() });
        }
        let rear = self.slot(self.length);
        self.items[rear] = Some(item);
        self.length += 1;
        Ok(())
    }

    /// Remove and return the front item.
    pub fn serve(&mut self) -> Result<T, StructureError> {
        if self.is_empty() {
            return Err(StructureError::Underflow);
        }
        let item = self.items[self.front].take().ok_or(StructureError::Underflow)?;
        self.front = self.slot(1);
        self.length -= 1;
        Ok(item)
    }

    /// Reverse the logical order in place by swapping symmetric pairs.
    pub fn reverse(&mut self) {
        let len = self.length;
        for i in 0..len / 2 {
            let a = self.slot(i);
            let b = self.slot(len - 1 - i);
            self.items.swap(a, b);
        }
    }

    /// Item at logical position `index`.
    pub fn get(&self, index: usize) -> Result<&T, StructureError> {
        self.check_index(index)?;
        self.items[self.slot(index)].as_ref().ok_or(StructureError::IndexOutOfRange { index, len: self.length })
    }

    /// Replace the item at logical position `index`, returning the old one.
    pub fn set(&mut self, index: usize, item: T) -> Result<T, StructureError> {
        self.check_index(index)?;
        let slot = self.slot(index);
        self.items[slot]
            .replace(item)
            .ok_or(StructureError::IndexOutOfRange { index, len: self.length })
    }

    fn check_index(&self, index: usize) -> Result<(), StructureError> {
        if index >= self.length {
            return Err(StructureError::IndexOutOfRange { index, len: self.length });
        }
        Ok(())
    }

    /// Move the live items into storage of `new_capacity` slots, front first.
    ///
    /// Does nothing if `new_capacity` is not larger than the current capacity.
    pub fn grow(&mut self, new_capacity: usize) {
        if new_capacity <= self.capacity() {
            return;
        }
        let mut items = empty_slots(new_capacity);
        for (i, slot) in items.iter_mut().enumerate().take(self.length) {
            let from = (self.front + i) % self.items.len();
            *slot = self.items[from].take();
        }
        self.items = items;
        self.front = 0;
    }

    /// Drop every item. Capacity is kept.
    pub fn clear(&mut self) {
        self.items.iter_mut().for_each(|slot| *slot = None);
        self.front = 0;
        self.length = 0;
    }

    /// Iterate front to back.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.length).filter_map(move |i| self.items[self.slot(i)].as_ref())
    }
}

fn empty_slots<T>(capacity: usize) -> Vec<Option<T>> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}
