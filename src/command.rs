//! The interactive command loop.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::{actions, AuthorizedClient, Result, Terminal, Transport};

pub const MENU: &str = "Type \"tweet\" or \"show\" or type \"exit\"\n";
pub const SELECT_PROMPT: &str = "Select> ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Tweet,
    Show,
    Exit,
}

impl Command {
    /// Exact, case-sensitive match. Anything else is not a command.
    pub fn parse(line: &str) -> Option<Command> {
        match line {
            "tweet" => Some(Command::Tweet),
            "show" => Some(Command::Show),
            "exit" => Some(Command::Exit),
            _ => None,
        }
    }
}

/// Prompts for commands until `exit`. Unknown input just re-prompts.
///
/// Returns `Ok(())` on `exit`; any action failure or end of input ends the
/// loop with that error.
pub async fn run<T, R, W>(client: &AuthorizedClient<T>, terminal: &mut Terminal<R, W>) -> Result<()>
where
    T: Transport,
    R: BufRead,
    W: Write,
{
    loop {
        terminal.print(MENU)?;
        let line = terminal.prompt(SELECT_PROMPT)?;
        match Command::parse(&line) {
            Some(Command::Tweet) => actions::tweet(client, terminal).await?,
            Some(Command::Show) => actions::show_timeline(client, terminal).await?,
            Some(Command::Exit) => return Ok(()),
            None => debug!(input = %line, "ignoring unknown command"),
        }
    }
}
