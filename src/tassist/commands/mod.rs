//! The command set and its execution contract.
//!
//! Each command kind lives in its own module with its command word, usage
//! string, parser and execution logic side by side. [`Command`] is the
//! closed sum of all of them with one uniform `execute` operation; parse
//! failures are [`ParseError`](crate::error::ParseError)s, execution
//! failures are [`CommandError`]s, and neither ever leaves the model
//! half-mutated.

use crate::error::CommandError;
use crate::model::Model;

pub mod add;
pub mod clear;
pub mod delete;
pub mod edit;
pub mod exit;
pub mod find;
pub mod github;
pub mod help;
pub mod list;

/// Feedback handed back to the presentation layer after an execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    feedback: String,
    show_help: bool,
    exit: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            show_help: false,
            exit: false,
        }
    }

    pub fn with_help(feedback: impl Into<String>) -> Self {
        Self {
            show_help: true,
            ..Self::new(feedback)
        }
    }

    pub fn with_exit(feedback: impl Into<String>) -> Self {
        Self {
            exit: true,
            ..Self::new(feedback)
        }
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    pub fn is_show_help(&self) -> bool {
        self.show_help
    }

    pub fn is_exit(&self) -> bool {
        self.exit
    }
}

/// One fully parsed, ready-to-execute command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(add::AddCommand),
    Edit(edit::EditCommand),
    Delete(delete::DeleteCommand),
    Find(find::FindCommand),
    Github(github::GithubCommand),
    List,
    Clear,
    Help,
    Exit,
}

impl Command {
    pub fn execute<M: Model>(&self, model: &mut M) -> Result<CommandResult, CommandError> {
        match self {
            Command::Add(command) => command.execute(model),
            Command::Edit(command) => command.execute(model),
            Command::Delete(command) => command.execute(model),
            Command::Find(command) => command.execute(model),
            Command::Github(command) => command.execute(model),
            Command::List => list::execute(model),
            Command::Clear => clear::execute(model),
            Command::Help => Ok(help::execute()),
            Command::Exit => Ok(exit::execute()),
        }
    }

    /// Whether a successful execution changed person data (and so should be
    /// persisted by the front-end).
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Command::Add(_)
                | Command::Edit(_)
                | Command::Delete(_)
                | Command::Github(_)
                | Command::Clear
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mutation_classification() {
        assert!(Command::Clear.is_mutation());
        assert!(!Command::List.is_mutation());
        assert!(!Command::Help.is_mutation());
        assert!(!Command::Exit.is_mutation());
    }

    #[test]
    fn help_and_exit_set_their_flags() {
        let mut model = crate::model::manager::ModelManager::default();

        let help = Command::Help.execute(&mut model).unwrap();
        assert!(help.is_show_help());
        assert!(!help.is_exit());

        let exit = Command::Exit.execute(&mut model).unwrap();
        assert!(exit.is_exit());
        assert!(!exit.is_show_help());
    }
}
