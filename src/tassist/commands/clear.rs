use super::CommandResult;
use crate::error::CommandError;
use crate::model::Model;

pub const COMMAND_WORD: &str = "clear";

pub const MESSAGE_SUCCESS: &str = "TAssist has been cleared!";

/// Replaces the entire person collection with an empty one. Always succeeds.
pub fn execute<M: Model>(model: &mut M) -> Result<CommandResult, CommandError> {
    model.set_persons(Vec::new());
    Ok(CommandResult::new(MESSAGE_SUCCESS))
}
