use super::{Command, CommandResult};
use crate::error::{CommandError, ParseError};
use crate::model::{Model, PersonPredicate};

pub const COMMAND_WORD: &str = "find";

pub const MESSAGE_USAGE: &str = "find: Finds all persons whose names contain any of the \
    specified keywords (case-insensitive) and displays them as a list with index numbers.\n\
    Parameters: KEYWORD [MORE_KEYWORDS]...\n\
    Example: find alice bob charlie";

/// Narrows the displayed list to persons whose names match any keyword.
/// A pure query: person data is never touched, and an empty result is a
/// success, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    keywords: Vec<String>,
}

impl FindCommand {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    pub fn execute<M: Model>(&self, model: &mut M) -> Result<CommandResult, CommandError> {
        model.update_filter(PersonPredicate::NameContainsKeywords(self.keywords.clone()));
        Ok(CommandResult::new(format!(
            "{} persons listed!",
            model.filtered_persons().len()
        )))
    }
}

pub fn parse(args: &str) -> Result<Command, ParseError> {
    let trimmed = args.trim();
    if trimmed.is_empty() {
        return Err(ParseError::InvalidFormat {
            usage: MESSAGE_USAGE,
        });
    }
    let keywords = trimmed.split_whitespace().map(str::to_string).collect();
    Ok(Command::Find(FindCommand::new(keywords)))
}
