//! User facing lines printed by a round.

use std::fmt::Display;
use std::io::{self, Write};

use colored::*;

pub const FIRST_PROMPT: &str = "Enter the first number: ";
pub const SECOND_PROMPT: &str = "Enter the second number: ";
pub const PAUSE_NOTICE: &str = "Press any key to continue...";

pub fn results<W: Write>(out: &mut W, first: i32, second: i32, max: i32) -> io::Result<()> {
    writeln!(out, "Values of safely casted f64 to i32: {first}, {second}")?;
    writeln!(out, "Bigger value: {}", max.to_string().green().bold())
}

/// Writes `Error: <message>`.
pub fn error<W: Write, M: Display>(err: &mut W, message: M) -> io::Result<()> {
    writeln!(err, "{} {}", "Error:".red().bold(), message)
}

pub fn notice<W: Write, M: Display>(err: &mut W, message: M) -> io::Result<()> {
    writeln!(err, "{}", message.to_string().yellow())
}

pub fn pause_notice<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "{}", PAUSE_NOTICE.dimmed())?;
    out.flush()
}
