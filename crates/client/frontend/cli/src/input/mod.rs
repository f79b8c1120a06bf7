//! Input processing for the CLI client.
//!
//! This module owns the word-to-command mapping so the rest of the
//! application never deals with raw text.

use duel_core::{Action, Tier};
use thiserror::Error;

pub mod provider;
pub use provider::{CliActionProvider, CommandReader};

/// Key reference shown by `help`.
pub const COMMAND_HELP: &str = "\
commands:
  attack1 | a1 | 1   attack with power 1
  attack2 | a2 | 2   attack with power 2
  attack3 | a3 | 3   attack with power 3
  guard   | g        guard (reflects the opponent's attack)
  pass    | p        do nothing
  help    | h | ?    show this list
  quit    | q        leave the match";

/// High-level outcome of one line of input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Submit the decoded game action to the runtime.
    Act(Action),
    Help,
    /// Leave the match.
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    #[error("no command entered")]
    Empty,

    #[error("unrecognized command `{0}`")]
    Unknown(String),
}

/// Parses one line of input. Case and surrounding whitespace are ignored.
pub fn parse_command(input: &str) -> Result<Command, ParseCommandError> {
    let word = input.trim();
    if word.is_empty() {
        return Err(ParseCommandError::Empty);
    }

    let command = match word.to_ascii_lowercase().as_str() {
        "attack1" | "a1" | "1" => Command::Act(Action::Offense(Tier::One)),
        "attack2" | "a2" | "2" => Command::Act(Action::Offense(Tier::Two)),
        "attack3" | "a3" | "3" => Command::Act(Action::Offense(Tier::Three)),
        "guard" | "g" => Command::Act(Action::Defense),
        "pass" | "p" => Command::Act(Action::NoOp),
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" => Command::Quit,
        _ => return Err(ParseCommandError::Unknown(word.to_owned())),
    };

    Ok(command)
}
