use std::str::FromStr;

use investment_planner_core::investments::{InvestmentField, InvestmentPlanner};
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  list                    reload investments from the backend
  show                    print the screen
  set <field> <value>     change a form field
                          fields: investmentName, initialInvestmentAmount,
                                  investmentStartDate, currentValue, investorId
  edit <id>               load an investment into the form
  delete <id>             delete an investment
  submit                  create or update from the form
  help                    show this help
  quit                    exit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    List,
    Show,
    Set(InvestmentField, String),
    Edit(i64),
    Delete(i64),
    Submit,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}'")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("unknown field '{0}'")]
    UnknownField(String),
    #[error("invalid id '{0}'")]
    InvalidId(String),
}

/// What the event loop does after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Render,
    Help,
    Quit,
}

fn parse_id(raw: &str, usage: &'static str) -> Result<i64, CommandError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(CommandError::Usage(usage));
    }
    raw.parse().map_err(|_| CommandError::InvalidId(raw.to_string()))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, CommandError> {
        let line = line.trim_start();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest),
            None => (line.trim_end(), ""),
        };

        match verb {
            "" => Err(CommandError::Empty),
            "list" | "reload" => Ok(Command::List),
            "show" => Ok(Command::Show),
            "submit" => Ok(Command::Submit),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            "edit" => parse_id(rest, "edit <id>").map(Command::Edit),
            "delete" => parse_id(rest, "delete <id>").map(Command::Delete),
            "set" => {
                let rest = rest.trim_start();
                let (name, value) = rest
                    .split_once(char::is_whitespace)
                    .unwrap_or((rest.trim_end(), ""));
                if name.is_empty() {
                    return Err(CommandError::Usage("set <field> <value>"));
                }
                let field = name
                    .parse::<InvestmentField>()
                    .map_err(|_| CommandError::UnknownField(name.to_string()))?;
                Ok(Command::Set(field, value.trim_end_matches(['\r', '\n']).to_string()))
            }
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Applies one command to the planner.
pub async fn execute(planner: &mut InvestmentPlanner, command: Command) -> Flow {
    match command {
        Command::List => planner.load().await,
        Command::Show => {}
        Command::Set(field, value) => planner.set_field(field, &value),
        Command::Edit(id) => planner.edit(id).await,
        Command::Delete(id) => planner.delete(id).await,
        Command::Submit => {
            if !planner.submit().await {
                tracing::warn!(
                    "Submit is disabled, invalid fields: {:?}",
                    planner.draft().invalid_fields()
                );
            }
        }
        Command::Help => return Flow::Help,
        Command::Quit => return Flow::Quit,
    }
    Flow::Render
}
