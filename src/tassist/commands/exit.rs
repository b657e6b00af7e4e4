use super::CommandResult;

pub const COMMAND_WORD: &str = "exit";

pub const MESSAGE_EXIT_ACKNOWLEDGEMENT: &str = "Exiting TAssist as requested ...";

pub fn execute() -> CommandResult {
    CommandResult::with_exit(MESSAGE_EXIT_ACKNOWLEDGEMENT)
}
