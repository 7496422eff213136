//! Fixed-capacity ring buffer.
//!
//! Layout:
//!   slots : Box<[Option<T>]>  circular backing storage, length C
//!   head  : usize             index of the oldest element (next to pop)
//!   tail  : usize             index of the next free slot (next push)
//!   len   : usize             current occupancy
//!
//! Transitions:
//!   push(x): slots[tail] = x,  tail = (tail+1) mod C,  len += 1
//!   pop():   slots[head] = _,  head = (head+1) mod C,  len -= 1
//!   full  iff len == C
//!   empty iff len == 0
//!
//! `head == tail` holds both when empty and when full, so traversal is
//! driven by the remaining count, never by comparing positions.

use std::fmt;
use std::iter::FusedIterator;
use std::num::NonZeroUsize;

use tracing::trace;

use crate::errors::QueueError;

/// Capacity used when none is configured.
pub const DEFAULT_CAPACITY: usize = 64;

const DEFAULT_NONZERO: NonZeroUsize = match NonZeroUsize::new(DEFAULT_CAPACITY) {
    Some(n) => n,
    None => panic!("DEFAULT_CAPACITY must be non-zero"),
};

/// [`DEFAULT_CAPACITY`] as a [`NonZeroUsize`].
pub const fn default_capacity() -> NonZeroUsize {
    DEFAULT_NONZERO
}

/// A FIFO queue over a preallocated block of `capacity` slots.
///
/// Misuse fails explicitly: pushing onto a full buffer returns
/// [`QueueError::Full`] and never overwrites the oldest element; popping or
/// peeking an empty buffer returns [`QueueError::Empty`]. A failed call
/// leaves the buffer unchanged.
#[derive(Clone)]
pub struct RingBuffer<T> {
    slots: Box<[Option<T>]>,
    head: usize,
    tail: usize,
    len: usize,
}

impl<T> RingBuffer<T> {
    /// Allocate storage for exactly `capacity` elements.
    pub fn new(capacity: NonZeroUsize) -> Self {
        let slots: Box<[Option<T>]> = (0..capacity.get()).map(|_| None).collect();
        Self {
            slots,
            head: 0,
            tail: 0,
            len: 0,
        }
    }

    /// Like [`RingBuffer::new`] for callers holding a plain `usize`.
    pub fn with_capacity(capacity: usize) -> Result<Self, QueueError> {
        NonZeroUsize::new(capacity)
            .map(Self::new)
            .ok_or(QueueError::ZeroCapacity)
    }

    /// Append `value` at the tail.
    ///
    /// On a full buffer `value` is dropped and nothing else changes.
    pub fn push(&mut self, value: T) -> Result<(), QueueError> {
        if self.is_full() {
            trace!(capacity = self.capacity(), "push rejected: full");
            return Err(QueueError::Full {
                capacity: self.capacity(),
            });
        }

        self.slots[self.tail] = Some(value);
        self.tail = self.advance(self.tail);
        self.len += 1;
        trace!(len = self.len, head = self.head, tail = self.tail, "pushed");
        Ok(())
    }

    /// Remove the oldest element without returning it.
    ///
    /// Read it with [`RingBuffer::front`] first if the value is needed.
    pub fn pop(&mut self) -> Result<(), QueueError> {
        if self.is_empty() {
            trace!("pop rejected: empty");
            return Err(QueueError::Empty);
        }

        self.slots[self.head] = None;
        self.head = self.advance(self.head);
        self.len -= 1;
        trace!(len = self.len, head = self.head, tail = self.tail, "popped");
        Ok(())
    }

    /// The oldest element.
    pub fn front(&self) -> Result<&T, QueueError> {
        if self.is_empty() {
            return Err(QueueError::Empty);
        }
        self.slots[self.head].as_ref().ok_or(QueueError::Empty)
    }

    /// Drop every element and rewind to the initial state. Storage is kept.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.head = 0;
        self.tail = 0;
        self.len = 0;
        trace!(capacity = self.capacity(), "cleared");
    }

    /// Number of stored elements.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Elements oldest first. Each call starts again from the head.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: &self.slots,
            pos: self.head,
            remaining: self.len,
        }
    }

    #[inline]
    fn advance(&self, idx: usize) -> usize {
        let next = idx + 1;
        if next == self.capacity() {
            0
        } else {
            next
        }
    }
}

impl<T> Default for RingBuffer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_NONZERO)
    }
}

impl<T: fmt::Debug> fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingBuffer")
            .field("capacity", &self.capacity())
            .field("elements", &DebugElements(self))
            .finish()
    }
}

struct DebugElements<'a, T>(&'a RingBuffer<T>);

impl<T: fmt::Debug> fmt::Debug for DebugElements<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

/// Two buffers are equal when they have the same capacity and hold the same
/// elements in the same order, regardless of where those sit in storage.
impl<T: PartialEq> PartialEq for RingBuffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.capacity() == other.capacity()
            && self.len == other.len
            && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for RingBuffer<T> {}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator returned by [`RingBuffer::iter`].
#[derive(Clone)]
pub struct Iter<'a, T> {
    slots: &'a [Option<T>],
    pos: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.slots[self.pos].as_ref();
        self.pos += 1;
        if self.pos == self.slots.len() {
            self.pos = 0;
        }
        self.remaining -= 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
