use super::CommandResult;

pub const COMMAND_WORD: &str = "help";

pub const MESSAGE_USAGE: &str = "help: Shows program usage instructions.\nExample: help";

pub const MESSAGE_SHOWING_HELP: &str = "Opened help window.";

pub fn execute() -> CommandResult {
    CommandResult::with_help(MESSAGE_SHOWING_HELP)
}

/// The full usage overview the front-end prints when a result asks for help.
pub fn usage_overview() -> String {
    [
        super::add::MESSAGE_USAGE,
        super::edit::MESSAGE_USAGE,
        super::delete::MESSAGE_USAGE,
        super::find::MESSAGE_USAGE,
        super::github::MESSAGE_USAGE,
        "list: Shows all persons.\nExample: list",
        "clear: Removes all persons.\nExample: clear",
        MESSAGE_USAGE,
        "exit: Exits the program.\nExample: exit",
    ]
    .join("\n\n")
}
