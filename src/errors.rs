use thiserror::Error;

/// The central error type for ringq.
///
/// Queue misuse and bad input are recoverable and get rendered by the
/// session loop; configuration and I/O failures end the process.
#[derive(Error, Debug)]
pub enum RingqError {
    #[error("Queue error: {0}")]
    Queue(#[from] QueueError),

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Failures raised by [`RingBuffer`](crate::queue::RingBuffer) and the
/// session that owns it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    #[error("queue hasn't been initialized")]
    Uninitialized,

    #[error("queue is full, cannot push to it (capacity {capacity})")]
    Full { capacity: usize },

    #[error("queue is empty, nothing to pop")]
    Empty,

    #[error("queue capacity must be greater than zero")]
    ZeroCapacity,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("expected an integer, got '{token}'")]
    ExpectedInteger { token: String },

    #[error("element count cannot be negative ({count})")]
    NegativeCount { count: i64 },
}

impl RingqError {
    /// Whether the session loop can report this error and keep going.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, RingqError::Queue(_) | RingqError::Input(_))
    }
}

pub type Result<T> = std::result::Result<T, RingqError>;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_CONFIG_ERROR: u8 = 2;
pub const EXIT_IO_ERROR: u8 = 3;

/// Determine the appropriate process exit code for an error.
pub fn get_exit_code(e: &anyhow::Error) -> u8 {
    if let Some(ringq_err) = e.downcast_ref::<RingqError>() {
        return match ringq_err {
            RingqError::Config(_) => EXIT_CONFIG_ERROR,
            RingqError::Io(_) => EXIT_IO_ERROR,
            _ => EXIT_ERROR,
        };
    }

    // Direct enum unwraps fallback
    if e.downcast_ref::<std::io::Error>().is_some() {
        return EXIT_IO_ERROR;
    }

    EXIT_ERROR
}
