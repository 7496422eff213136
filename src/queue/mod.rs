//! Bounded FIFO storage.

pub mod ring_buffer;

pub use ring_buffer::{default_capacity, Iter, RingBuffer, DEFAULT_CAPACITY};
