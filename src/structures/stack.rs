//! LIFO stack with a hard capacity

use super::StructureError;

#[derive(Debug, Clone)]
pub struct BoundedStack<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> BoundedStack<T> {
    /// Storage is allocated lazily; only the bound is fixed up front.
    pub fn new(capacity: usize) -> Self {
        Self { items: Vec::new(), capacity }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn push(&mut self, item: T) -> Result<(), StructureError> {
        if self.is_full() {
            return Err(StructureError::CapacityExceeded { capacity: self.capacity });
        }
        self.items.push(item);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<T, StructureError> {
        self.items.pop().ok_or(StructureError::Underflow)
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_lifo() {
        let mut stack = BoundedStack::new(3);
        stack.push('a').unwrap();
        stack.push('b').unwrap();
        assert_eq!(stack.peek(), Some(&'b'));
        assert_eq!(stack.pop(), Ok('b'));
        assert_eq!(stack.pop(), Ok('a'));
        assert_eq!(stack.pop(), Err(StructureError::Underflow));
    }

    #[test]
    fn test_push_when_full() {
        let mut stack = BoundedStack::new(2);
        stack.push(1).unwrap();
        stack.push(2).unwrap();
        assert!(stack.is_full());
        assert_eq!(stack.push(3), Err(StructureError::CapacityExceeded { capacity: 2 }));
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn test_zero_capacity_is_always_full() {
        let mut stack = BoundedStack::new(0);
        assert!(stack.is_full());
        assert!(stack.push(1).is_err());
    }

    #[test]
    fn test_clear() {
        let mut stack = BoundedStack::new(4);
        stack.push(1).unwrap();
        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(stack.capacity(), 4);
    }
}
