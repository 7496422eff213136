//! Interactive queue session.
//!
//! A [`Session`] owns at most one queue and turns menu commands read from a
//! token stream into queue operations. The queue does not exist until the
//! `new` command runs; until then every other queue command is refused with
//! [`QueueError::Uninitialized`]. Refused operations and bad input are
//! reported on the output and the loop keeps going.

pub mod command;
pub mod scanner;

use std::io::{BufRead, Write};
use std::num::NonZeroUsize;

use tracing::{debug, info};

use crate::errors::{InputError, QueueError, Result, RingqError};
use crate::observability::telemetry::{command_span, record_recovered, sanitize_for_log};
use crate::output;
use crate::queue::{default_capacity, RingBuffer};

pub use command::{Command, UnknownCommand};
pub use scanner::TokenScanner;

/// Whether the loop should keep reading commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Capacity of the queue created by `new`
    pub capacity: NonZeroUsize,
    /// Print prompts before reading input
    pub prompts: bool,
    /// Print the menu when the session starts
    pub show_menu: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            prompts: true,
            show_menu: true,
        }
    }
}

#[derive(Debug)]
pub struct Session {
    queue: Option<RingBuffer<i64>>,
    options: SessionOptions,
    steps: usize,
}

impl Session {
    pub fn new(options: SessionOptions) -> Self {
        Self {
            queue: None,
            options,
            steps: 0,
        }
    }

    pub fn is_created(&self) -> bool {
        self.queue.is_some()
    }

    pub fn queue(&self) -> Option<&RingBuffer<i64>> {
        self.queue.as_ref()
    }

    /// Number of commands dispatched so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Drive the session until `exit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        let mut scanner = TokenScanner::new(input);
        if self.options.show_menu {
            output::menu(out)?;
        }

        loop {
            if self.options.prompts {
                output::prompt(out, "Select an option: ")?;
            }
            let Some(token) = scanner.next_token()? else {
                debug!("End of input");
                break;
            };
            if self.step(&token, &mut scanner, out)? == Flow::Exit {
                break;
            }
        }

        info!(steps = self.steps, "Session finished");
        Ok(())
    }

    /// Dispatch one command token, reading any payload from `scanner`.
    ///
    /// Recoverable failures are rendered to `out` and yield
    /// [`Flow::Continue`]; only I/O and other fatal errors are returned.
    pub fn step<R: BufRead, W: Write>(
        &mut self,
        token: &str,
        scanner: &mut TokenScanner<R>,
        out: &mut W,
    ) -> Result<Flow> {
        self.steps += 1;
        let span = command_span(token, self.steps);
        let _enter = span.enter();

        let command = match token.parse::<Command>() {
            Ok(command) => command,
            Err(UnknownCommand(unknown)) => {
                debug!(token = sanitize_for_log(&unknown).as_str(), "Unknown command");
                if self.queue.is_none() {
                    output::error(out, "queue not created")?;
                } else {
                    output::line(out, "Invalid command, try again.")?;
                }
                return Ok(Flow::Continue);
            }
        };

        match self.execute(command, scanner, out) {
            Ok(flow) => Ok(flow),
            Err(e) if e.is_recoverable() => {
                record_recovered(&e.to_string());
                self.report(&e, out)?;
                Ok(Flow::Continue)
            }
            Err(e) => Err(e),
        }
    }

    /// Run a parsed command against the session's queue.
    pub fn execute<R: BufRead, W: Write>(
        &mut self,
        command: Command,
        scanner: &mut TokenScanner<R>,
        out: &mut W,
    ) -> Result<Flow> {
        if !command.allowed_before_create() && self.queue.is_none() {
            return Err(QueueError::Uninitialized.into());
        }

        match command {
            Command::New => {
                if self.queue.is_none() {
                    self.queue = Some(RingBuffer::new(self.options.capacity));
                    info!(capacity = self.options.capacity.get(), "Queue created");
                } else {
                    debug!("Queue already created, keeping contents");
                }
            }
            Command::Init => return self.init(scanner, out),
            Command::Pop => {
                let queue = self.queue_mut()?;
                if queue.is_empty() {
                    output::notice(out, "Cannot pop, queue is empty.")?;
                    return Ok(Flow::Continue);
                }
                let value = *queue.front()?;
                queue.pop()?;
                output::line(out, format_args!("Popped element: {}", value))?;
            }
            Command::Push => {
                if self.queue_mut()?.is_full() {
                    output::notice(out, "Cannot push, queue is full.")?;
                    return Ok(Flow::Continue);
                }
                if self.options.prompts {
                    output::prompt(out, "To be pushed: ")?;
                }
                let Some(value) = scanner.next_integer()? else {
                    return Ok(Flow::Exit);
                };
                self.queue_mut()?.push(value)?;
            }
            Command::PrintAll => {
                let queue = self.queue_mut()?;
                output::line(out, "Elements in queue (in pushing order):")?;
                output::elements(out, queue.iter())?;
            }
            Command::Clear => self.queue_mut()?.clear(),
            Command::IsFull => {
                let full = self.queue_mut()?.is_full();
                output::predicate(out, full, "full")?;
            }
            Command::IsEmpty => {
                let empty = self.queue_mut()?.is_empty();
                output::predicate(out, empty, "empty")?;
            }
            Command::Help => output::menu(out)?,
            Command::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    /// Read a count and that many values, pushing each in order.
    ///
    /// A count that does not fit in the free space is refused before any
    /// value is read. The batch is pushed only once every value parsed; a
    /// bad value leaves the queue untouched and drops the rest of its line.
    fn init<R: BufRead, W: Write>(
        &mut self,
        scanner: &mut TokenScanner<R>,
        out: &mut W,
    ) -> Result<Flow> {
        if self.options.prompts {
            output::line(out, "Input the number of element:")?;
        }
        let Some(count) = scanner.next_integer()? else {
            return Ok(Flow::Exit);
        };
        if count < 0 {
            return Err(InputError::NegativeCount { count }.into());
        }

        let queue = self.queue_mut()?;
        let free = queue.capacity() - queue.len();
        let wanted = usize::try_from(count).unwrap_or(usize::MAX);
        if wanted > free {
            return Err(QueueError::Full {
                capacity: queue.capacity(),
            }
            .into());
        }

        let mut batch = Vec::with_capacity(wanted);
        for i in 1..=wanted {
            if self.options.prompts {
                output::prompt(out, &format!("The {}-th element: ", i))?;
            }
            match scanner.next_integer() {
                Ok(Some(value)) => batch.push(value),
                Ok(None) => return Ok(Flow::Exit),
                Err(e) => {
                    let dropped = scanner.discard_line();
                    debug!(read = batch.len(), dropped, "Init aborted");
                    return Err(e);
                }
            }
        }

        let queue = self.queue_mut()?;
        for value in batch {
            queue.push(value)?;
        }
        debug!(pushed = wanted, "Init finished");
        Ok(Flow::Continue)
    }

    fn queue_mut(&mut self) -> Result<&mut RingBuffer<i64>> {
        self.queue
            .as_mut()
            .ok_or(RingqError::Queue(QueueError::Uninitialized))
    }

    fn report<W: Write>(&self, err: &RingqError, out: &mut W) -> Result<()> {
        match err {
            RingqError::Queue(QueueError::Uninitialized) => {
                output::error(out, "queue not created")?
            }
            RingqError::Queue(QueueError::Full { .. }) => {
                output::notice(out, "Cannot push, queue is full.")?
            }
            RingqError::Queue(QueueError::Empty) => {
                output::notice(out, "Cannot pop, queue is empty.")?
            }
            RingqError::Queue(e) => output::error(out, e)?,
            RingqError::Input(e) => output::error(out, e)?,
            other => output::error(out, other)?,
        }
        Ok(())
    }
}
