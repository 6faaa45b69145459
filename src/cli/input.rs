//! Whitespace token reader for interactive input
//!
//! Tokens are read across line boundaries, so `add` followed by six values
//! may be typed on one line or several. There is no quoting: a value ends at
//! the first whitespace.

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Splits a line-oriented reader into whitespace-delimited tokens
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    /// Wrap a buffered reader
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` at end of input
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }

    /// Next `N` tokens, or `None` if input ends first
    pub fn next_tokens<const N: usize>(&mut self) -> io::Result<Option<[String; N]>> {
        let mut tokens = Vec::with_capacity(N);
        while tokens.len() < N {
            match self.next_token()? {
                Some(token) => tokens.push(token),
                None => return Ok(None),
            }
        }
        Ok(tokens.try_into().ok())
    }
}
