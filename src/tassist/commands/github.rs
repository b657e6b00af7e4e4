use super::{Command, CommandResult};
use crate::error::{CommandError, ParseError};
use crate::index::Index;
use crate::model::Model;
use crate::parser::parse_index;
use crate::parser::tokenizer::{tokenize, PREFIX_GITHUB};
use crate::person::fields::Github;

pub const COMMAND_WORD: &str = "github";

pub const MESSAGE_USAGE: &str = "github: Updates the Github username of the person identified \
    by the index number used in the displayed person list.\n\
    Parameters: INDEX (must be a positive integer) g/GITHUB_USERNAME\n\
    Example: github 1 g/johndoe";

pub const MESSAGE_EMPTY: &str = "Github username cannot be empty";

/// Replaces one person's github field, leaving every other field untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct GithubCommand {
    index: Index,
    github: Github,
}

impl GithubCommand {
    pub fn new(index: Index, github: Github) -> Self {
        Self { index, github }
    }

    pub fn execute<M: Model>(&self, model: &mut M) -> Result<CommandResult, CommandError> {
        let filtered = model.filtered_persons();
        let target = filtered
            .get(self.index.zero_based())
            .ok_or(CommandError::InvalidIndex)?;

        let edited = target.with_github(self.github.clone());
        model.set_person(target, edited.clone());
        Ok(CommandResult::new(format!(
            "Updated Github of person: {}",
            edited
        )))
    }
}

pub fn parse(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(args, &[PREFIX_GITHUB]);
    let index = parse_index(map.preamble(), MESSAGE_USAGE)?;

    // A missing g/ is a shape problem; a g/ with nothing behind it gets its
    // own, more specific error.
    let github = match map.value(PREFIX_GITHUB) {
        None => {
            return Err(ParseError::InvalidFormat {
                usage: MESSAGE_USAGE,
            })
        }
        Some("") => return Err(ParseError::Empty(MESSAGE_EMPTY)),
        Some(value) => Github::new(value)?,
    };

    Ok(Command::Github(GithubCommand::new(index, github)))
}
