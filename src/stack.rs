//! Generic capacity-limited LIFO container.
//!
//! Every column on the board is one of these: cascades, cells and
//! foundations differ only in the capacity they are constructed with.
//! Insertion and removal happen only at the logical top, and a failed
//! operation never mutates the stack.

use crate::error::StackError;

/// An ordered sequence with a fixed maximum size set at construction.
///
/// The capacity is immutable for the life of the stack. There is no
/// default construction path: every usable instance is built through
/// [`BoundedStack::new`] with an explicit positive capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedStack<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> BoundedStack<T> {
    /// Create an empty stack holding at most `capacity` items.
    pub fn new(capacity: usize) -> Result<Self, StackError> {
        if capacity == 0 {
            return Err(StackError::InvalidCapacity { capacity });
        }
        Ok(BoundedStack {
            items: Vec::with_capacity(capacity),
            capacity,
        })
    }

    /// Maximum number of items this stack can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of items currently in the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the stack holds no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True if the stack cannot accept any more items.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    /// Append `value` as the new top of the stack.
    pub fn push(&mut self, value: T) -> Result<(), StackError> {
        if self.is_full() {
            return Err(StackError::Full);
        }
        self.items.push(value);
        Ok(())
    }

    /// Borrow the top of the stack without removing it.
    pub fn peek(&self) -> Result<&T, StackError> {
        self.items.last().ok_or(StackError::Empty)
    }

    /// Remove and return the top of the stack.
    pub fn pop(&mut self) -> Result<T, StackError> {
        self.items.pop().ok_or(StackError::Empty)
    }

    /// Iterate the contents from oldest-inserted (bottom) to top.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Clone> BoundedStack<T> {
    /// Independent copy of the contents, ordered bottom to top.
    ///
    /// Mutating the returned sequence has no effect on the stack. This
    /// is the getter a view layer renders from.
    pub fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }
}
