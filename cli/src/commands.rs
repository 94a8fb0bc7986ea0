use boundcast_common::config::Config;
use clap::{ArgAction, Parser};

#[derive(Parser)]
#[command(name = "boundcast")]
#[command(version)]
#[command(about = "Casts pairs of numbers to i32 and reports the bigger one.")]
#[command(
    long_about = "Prompts for two numbers, checks that both fit in a 32-bit signed integer, \
                  truncates them toward zero and prints the bigger one. Type 'q' or press \
                  Ctrl+D to leave."
)]
pub struct CommandLine {
    /// Never clear the screen between rounds
    #[arg(long)]
    pub no_clear: bool,
    /// Do not wait for a key press after each round
    #[arg(long)]
    pub no_pause: bool,
    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Flags win, then the screen and the key prompt are only touched on a real terminal.
    pub fn to_config(&self, stdin_is_tty: bool, stdout_is_tty: bool) -> Config {
        Config {
            clear_screen: !self.no_clear && stdout_is_tty,
            pause: !self.no_pause && stdin_is_tty && stdout_is_tty,
        }
    }
}
