mod commands;
mod terminal;

use std::io::{self, ErrorKind, IsTerminal};

use anyhow::Context;
use boundcast_core::session::Session;
use commands::CommandLine;
use terminal::{console::Console, logging, print};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);
    if commands.no_color {
        colored::control::set_override(false);
    }

    let cfg = commands.to_config(io::stdin().is_terminal(), io::stdout().is_terminal());
    let mut session = Session::new(io::stdin().lock(), io::stdout(), io::stderr(), Console::new(), cfg);

    let summary = match session.run() {
        Ok(summary) => summary,
        Err(err) if err.kind() == ErrorKind::Interrupted => {
            info!("interrupted at key prompt");
            println!();
            session.summary()
        }
        Err(err) => return Err(err).context("interactive session failed"),
    };

    print::summary(&summary);
    Ok(())
}
