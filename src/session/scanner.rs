//! Whitespace-delimited token reader over any `BufRead`.
//!
//! Tokens may be spread across lines or packed on one line, so
//! `4 17` answers both the command and the value prompt.

use std::collections::VecDeque;
use std::io::BufRead;

use crate::errors::{InputError, RingqError};

pub struct TokenScanner<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenScanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` at end of input.
    pub fn next_token(&mut self) -> std::io::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
        Ok(self.pending.pop_front())
    }

    /// Next token parsed as an integer. The token is consumed even when it
    /// does not parse.
    pub fn next_integer(&mut self) -> Result<Option<i64>, RingqError> {
        match self.next_token()? {
            None => Ok(None),
            Some(token) => token
                .parse::<i64>()
                .map(Some)
                .map_err(|_| RingqError::from(InputError::ExpectedInteger { token })),
        }
    }

    /// Drop the tokens left on the current line. Returns how many were dropped.
    pub fn discard_line(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        dropped
    }
}
