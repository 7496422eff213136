//! ringq - a fixed-capacity FIFO queue
//!
//! The core is [`RingBuffer`], a bounded ring buffer that refuses to push
//! when full and to pop or peek when empty instead of overwriting or
//! panicking. Around it sits a small interactive [`Session`] that exposes
//! the queue through a numbered command menu.
//!
//! # Quick Start
//!
//! ```
//! use ringq::RingBuffer;
//!
//! let mut queue = RingBuffer::with_capacity(4)?;
//! for v in 1..=4 {
//!     queue.push(v)?;
//! }
//! assert!(queue.push(5).is_err());
//! queue.pop()?;
//! queue.push(5)?;
//! assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4, 5]);
//! # Ok::<(), ringq::QueueError>(())
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod observability;
pub mod output;
pub mod queue;
pub mod session;

pub use errors::{QueueError, RingqError};
pub use queue::RingBuffer;
pub use session::{Session, SessionOptions};
