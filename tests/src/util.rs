use std::io::{self, Cursor};

use boundcast_common::config::Config;
use boundcast_core::session::{Session, Summary, Terminal};

/// Records every terminal call in the order it happened.
#[derive(Default)]
pub struct RecordingTerminal {
    pub calls: Vec<&'static str>,
}

impl Terminal for RecordingTerminal {
    fn clear_screen(&mut self) -> io::Result<()> {
        self.calls.push("clear");
        Ok(())
    }

    fn wait_for_key(&mut self) -> io::Result<()> {
        self.calls.push("key");
        Ok(())
    }
}

pub struct Transcript {
    pub summary: Summary,
    pub stdout: String,
    pub stderr: String,
    pub terminal: Vec<&'static str>,
}

/// Plays a whole session over `input` and captures everything it produced.
pub fn play(input: &str, cfg: Config) -> anyhow::Result<Transcript> {
    play_bytes(input.as_bytes(), cfg)
}

/// Same as [`play`] for input that may not be valid UTF-8.
pub fn play_bytes(input: &[u8], cfg: Config) -> anyhow::Result<Transcript> {
    colored::control::set_override(false);

    let mut stdout: Vec<u8> = Vec::new();
    let mut stderr: Vec<u8> = Vec::new();
    let mut terminal = RecordingTerminal::default();

    let summary = Session::new(
        Cursor::new(input.to_vec()),
        &mut stdout,
        &mut stderr,
        &mut terminal,
        cfg,
    )
    .run()?;

    Ok(Transcript {
        summary,
        stdout: String::from_utf8(stdout)?,
        stderr: String::from_utf8(stderr)?,
        terminal: terminal.calls,
    })
}

pub fn quiet() -> Config {
    Config {
        clear_screen: false,
        pause: false,
    }
}
