use super::CommandResult;
use crate::error::CommandError;
use crate::model::{Model, PersonPredicate};

pub const COMMAND_WORD: &str = "list";

pub const MESSAGE_SUCCESS: &str = "Listed all persons";

/// Resets the displayed list to show everyone. Pure query, no arguments.
pub fn execute<M: Model>(model: &mut M) -> Result<CommandResult, CommandError> {
    model.update_filter(PersonPredicate::All);
    Ok(CommandResult::new(MESSAGE_SUCCESS))
}
