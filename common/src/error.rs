//! # Error Model
//!
//! Both recoverable failures of a round live here:
//! * [`ParseError`] when a token is not a number.
//! * [`RangeError`] when a number does not fit in an `i32`.
//!
//! [`ReadError`] wraps everything that can stop a read, including the
//! non-error ways a session ends (quit command, end of input).

use std::io;

use thiserror::Error;

/// The token could not be parsed as a floating point literal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{token}' is not a valid number")]
pub struct ParseError {
    pub token: String,
}

/// The value lies outside `[i32::MIN, i32::MAX]`.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("{} is out of bounds for i32", display_value(.value))]
pub struct RangeError {
    pub value: f64,
}

/// Magnitude from which values are printed in exponent form.
const EXPONENT_THRESHOLD: f64 = 1e15;

fn display_value(value: &f64) -> String {
    if value.is_finite() && value.abs() >= EXPONENT_THRESHOLD {
        format!("{value:e}")
    } else {
        value.to_string()
    }
}

impl RangeError {
    /// Follow-up line telling the user which values are accepted.
    pub fn hint() -> String {
        format!(
            "Please enter a value between {} and {}.",
            i32::MIN,
            i32::MAX
        )
    }
}

#[derive(Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The user typed one of the quit words.
    #[error("quit requested")]
    Quit,

    /// End of input was reached before a token arrived.
    #[error("input stream closed")]
    Closed,

    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}
