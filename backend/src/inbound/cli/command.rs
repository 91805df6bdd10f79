//! Line commands understood by the terminal client.

use std::str::FromStr;

use crate::domain::TodoId;

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the title input.
    Title(String),
    /// Submit the form as it stands.
    Submit,
    /// Set the title input, then submit.
    Add(String),
    /// Delete a todo by id.
    Remove(TodoId),
    /// Flip a cached todo's completion flag.
    Toggle(TodoId),
    /// Refresh the cache from the store.
    List,
    /// Print the command summary.
    Help,
    /// End the session.
    Quit,
}

/// Reasons an input line is not a command.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandParseError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}'; type 'help'")]
    Unknown(String),
    #[error("'{command}' needs a todo id")]
    MissingId { command: &'static str },
    #[error("'{value}' is not a todo id")]
    InvalidId { value: String },
}

pub const HELP: &str = "\
commands:
  title <text>   set the title input
  submit         submit the form
  add <text>     set the title and submit
  rm <id>        remove a todo
  toggle <id>    flip a todo's completion
  ls             reload the list
  quit           leave";

fn parse_id(command: &'static str, rest: &str) -> Result<TodoId, CommandParseError> {
    if rest.trim().is_empty() {
        return Err(CommandParseError::MissingId { command });
    }
    rest.parse().map_err(|_| CommandParseError::InvalidId {
        value: rest.trim().to_owned(),
    })
}

impl FromStr for Command {
    type Err = CommandParseError;

    /// Arguments after `title` and `add` are taken verbatim, minus the single
    /// separating space, so leading whitespace reaches the title rule.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        let (verb, rest) = match trimmed.split_once(' ') {
            Some((verb, rest)) => (verb, rest),
            None => (trimmed.trim_end(), ""),
        };
        match verb {
            "" => Err(CommandParseError::Empty),
            "title" => Ok(Self::Title(rest.to_owned())),
            "submit" => Ok(Self::Submit),
            "add" => Ok(Self::Add(rest.to_owned())),
            "rm" | "remove" => parse_id("rm", rest).map(Self::Remove),
            "toggle" | "t" => parse_id("toggle", rest).map(Self::Toggle),
            "ls" | "list" => Ok(Self::List),
            "help" | "?" => Ok(Self::Help),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            other => Err(CommandParseError::Unknown(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("title buy milk", Command::Title("buy milk".to_owned()))]
    #[case("title", Command::Title(String::new()))]
    #[case("title   padded", Command::Title("  padded".to_owned()))]
    #[case("add eggs\n", Command::Add("eggs".to_owned()))]
    #[case("submit", Command::Submit)]
    #[case("  rm 2", Command::Remove(TodoId::new(2)))]
    #[case("toggle 1 ", Command::Toggle(TodoId::new(1)))]
    #[case("ls", Command::List)]
    #[case("q", Command::Quit)]
    fn parses_commands(#[case] line: &str, #[case] expected: Command) {
        assert_eq!(line.parse::<Command>(), Ok(expected));
    }

    #[rstest]
    #[case("", CommandParseError::Empty)]
    #[case("   ", CommandParseError::Empty)]
    #[case("rm", CommandParseError::MissingId { command: "rm" })]
    #[case("toggle x", CommandParseError::InvalidId { value: "x".to_owned() })]
    #[case("fly", CommandParseError::Unknown("fly".to_owned()))]
    fn rejects_bad_lines(#[case] line: &str, #[case] expected: CommandParseError) {
        assert_eq!(line.parse::<Command>(), Err(expected));
    }
}
