use crate::error::{SearchError, SearchResult};

/// Fixed-capacity LIFO stack backed by a preallocated array.
///
/// Used as the explicit frontier of the depth-first search, so overflows and
/// underflows are reported as errors instead of growing or panicking.
#[derive(Debug, Clone)]
pub struct ArrayStack<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> ArrayStack<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
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

    pub fn push(&mut self, item: T) -> SearchResult<()> {
        if self.items.len() == self.capacity {
            return Err(SearchError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.items.push(item);
        Ok(())
    }

    pub fn pop(&mut self) -> SearchResult<T> {
        self.items.pop().ok_or(SearchError::EmptyStack)
    }

    pub fn peek(&self) -> SearchResult<&T> {
        self.items.last().ok_or(SearchError::EmptyStack)
    }

    /// Mutable access to the top item, used to advance the frame being expanded.
    pub fn peek_mut(&mut self) -> SearchResult<&mut T> {
        self.items.last_mut().ok_or(SearchError::EmptyStack)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
