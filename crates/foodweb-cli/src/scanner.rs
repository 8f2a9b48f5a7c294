//! Whitespace-delimited token input.
//!
//! The interactive protocol is token oriented: names, indices and
//! command characters may be separated by any whitespace, including
//! newlines, so line-based reading is the wrong shape. The scanner
//! buffers one line at a time and hands out tokens.

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Reads whitespace-delimited tokens from any buffered reader.
pub struct Scanner<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Scanner<R> {
    /// Wraps a reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Returns the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Parses the next token as an integer.
    ///
    /// Returns `None` at end of input or if the token is not an
    /// integer; callers treat that as an out-of-range index so input
    /// exhaustion ends the loop they are in.
    pub fn next_int(&mut self) -> io::Result<Option<i64>> {
        Ok(self.next_token()?.and_then(|t| t.parse().ok()))
    }
}
