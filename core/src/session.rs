//! The interactive round loop.
//!
//! A round prompts for two numbers, casts both to `i32` and reports the bigger
//! one. Any malformed or out of range entry aborts the round with a message on
//! the error stream and the next round starts from the first number again.
//!
//! Clearing the screen and waiting for a key are terminal specific, so the
//! session only talks to them through the [`Terminal`] trait.

use std::fmt;
use std::io::{self, BufRead, Write};

use boundcast_common::config::Config;
use boundcast_common::error::{RangeError, ReadError};
use tracing::{debug, info};

use crate::caster::{cast_to_i32, max_of};
use crate::reader::InputReader;
use crate::report;

/// Terminal side effects a session needs.
pub trait Terminal {
    fn clear_screen(&mut self) -> io::Result<()>;

    /// Blocks until a single key is pressed.
    ///
    /// Any mode change made to capture the key must be undone before returning,
    /// on success and on failure alike.
    fn wait_for_key(&mut self) -> io::Result<()>;
}

impl<T: Terminal + ?Sized> Terminal for &mut T {
    fn clear_screen(&mut self) -> io::Result<()> {
        (**self).clear_screen()
    }

    fn wait_for_key(&mut self) -> io::Result<()> {
        (**self).wait_for_key()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    First,
    Second,
}

impl Operand {
    pub fn prompt(self) -> &'static str {
        match self {
            Operand::First => report::FIRST_PROMPT,
            Operand::Second => report::SECOND_PROMPT,
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::First => f.write_str("first"),
            Operand::Second => f.write_str("second"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Both numbers were accepted.
    Reported { first: i32, second: i32, max: i32 },
    /// A number was malformed or out of range.
    Rejected,
    /// The user quit or the input ended.
    Finished,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub reported: usize,
    pub rejected: usize,
}

enum Interrupt {
    Rejected,
    Finished,
    Io(io::Error),
}

impl From<io::Error> for Interrupt {
    fn from(err: io::Error) -> Self {
        Interrupt::Io(err)
    }
}

pub struct Session<R, O, E, T> {
    reader: InputReader<R>,
    out: O,
    err: E,
    terminal: T,
    cfg: Config,
    summary: Summary,
}

impl<R, O, E, T> Session<R, O, E, T>
where
    R: BufRead,
    O: Write,
    E: Write,
    T: Terminal,
{
    pub fn new(input: R, out: O, err: E, terminal: T, cfg: Config) -> Self {
        Self {
            reader: InputReader::new(input),
            out,
            err,
            terminal,
            cfg,
            summary: Summary::default(),
        }
    }

    /// Runs rounds until the user quits or the input ends.
    ///
    /// Only I/O failures are returned as errors. The counts gathered so far stay
    /// available through [`Session::summary`] either way.
    pub fn run(&mut self) -> io::Result<Summary> {
        info!(cfg = ?self.cfg, "session started");

        loop {
            match self.round()? {
                RoundOutcome::Reported { .. } => self.summary.reported += 1,
                RoundOutcome::Rejected => self.summary.rejected += 1,
                RoundOutcome::Finished => break,
            }
            self.pause()?;
        }

        info!(
            reported = self.summary.reported,
            rejected = self.summary.rejected,
            "session finished"
        );
        Ok(self.summary)
    }

    /// Plays a single round without pausing afterwards.
    pub fn round(&mut self) -> io::Result<RoundOutcome> {
        self.clear()?;

        let operands = self
            .read_operand(Operand::First)
            .and_then(|first| Ok((first, self.read_operand(Operand::Second)?)));

        let (first, second) = match operands {
            Ok(pair) => pair,
            Err(Interrupt::Rejected) => return Ok(RoundOutcome::Rejected),
            Err(Interrupt::Finished) => {
                writeln!(self.out)?;
                return Ok(RoundOutcome::Finished);
            }
            Err(Interrupt::Io(err)) => return Err(err),
        };

        let max = max_of(first, second);
        debug!(first, second, max, "round complete");

        self.clear()?;
        report::results(&mut self.out, first, second, max)?;
        Ok(RoundOutcome::Reported { first, second, max })
    }

    pub fn summary(&self) -> Summary {
        self.summary
    }

    fn read_operand(&mut self, operand: Operand) -> Result<i32, Interrupt> {
        let value = match self.reader.read_number(operand.prompt(), &mut self.out) {
            Ok(value) => value,
            Err(ReadError::Parse(parse)) => {
                info!(%operand, token = %parse.token, "malformed input");
                self.clear()?;
                report::error(
                    &mut self.err,
                    format!("Invalid input for the {operand} number."),
                )?;
                return Err(Interrupt::Rejected);
            }
            Err(ReadError::Quit | ReadError::Closed) => return Err(Interrupt::Finished),
            Err(ReadError::Io(err)) => return Err(Interrupt::Io(err)),
        };

        match cast_to_i32(value) {
            Ok(cast) => Ok(cast),
            Err(range) => {
                info!(%operand, value, "value out of bounds");
                self.clear()?;
                report::error(&mut self.err, range)?;
                report::notice(&mut self.err, RangeError::hint())?;
                Err(Interrupt::Rejected)
            }
        }
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.cfg.clear_screen {
            self.terminal.clear_screen()?;
        }
        Ok(())
    }

    fn pause(&mut self) -> io::Result<()> {
        if !self.cfg.pause {
            return Ok(());
        }
        report::pause_notice(&mut self.out)?;
        self.terminal.wait_for_key()
    }
}
