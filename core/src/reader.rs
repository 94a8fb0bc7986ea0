//! Line based numeric input.
//!
//! The reader takes the first whitespace delimited token of the next non-blank
//! line and drops whatever else was typed on that line, so a malformed entry is
//! never replayed into the following prompt. Lines are read as raw bytes, so
//! input that is not valid UTF-8 is rejected like any other malformed token.

use std::io::{BufRead, Write};

use boundcast_common::error::{ParseError, ReadError};
use tracing::{debug, trace};

/// Tokens that end the session instead of being parsed.
pub const QUIT_WORDS: &[&str] = &["q", "quit", "exit"];

pub struct InputReader<R> {
    input: R,
    line: Vec<u8>,
}

impl<R: BufRead> InputReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            line: Vec::new(),
        }
    }

    /// Writes `prompt` to `out`, then blocks until a token arrives and parses it.
    pub fn read_number<W: Write>(&mut self, prompt: &str, out: &mut W) -> Result<f64, ReadError> {
        write!(out, "{prompt}")?;
        out.flush()?;

        let token = self.next_token()?;
        if is_quit_word(&token) {
            debug!(%token, "quit requested");
            return Err(ReadError::Quit);
        }

        Ok(parse_number(&token)?)
    }

    fn next_token(&mut self) -> Result<String, ReadError> {
        loop {
            self.line.clear();
            if self.input.read_until(b'\n', &mut self.line)? == 0 {
                return Err(ReadError::Closed);
            }

            let Ok(line) = std::str::from_utf8(&self.line) else {
                let lossy = String::from_utf8_lossy(&self.line);
                let token = lossy.split_whitespace().next().unwrap_or_default().to_owned();
                debug!(%token, "input is not valid UTF-8");
                return Err(ParseError { token }.into());
            };

            if let Some(token) = line.split_whitespace().next() {
                trace!(line = line.trim_end(), "read line");
                return Ok(token.to_owned());
            }
        }
    }
}

/// Parses a single token as an `f64` literal.
pub fn parse_number(token: &str) -> Result<f64, ParseError> {
    token.parse::<f64>().map_err(|_| ParseError {
        token: token.to_owned(),
    })
}

fn is_quit_word(token: &str) -> bool {
    QUIT_WORDS.iter().any(|word| token.eq_ignore_ascii_case(word))
}
