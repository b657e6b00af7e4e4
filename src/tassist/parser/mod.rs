//! Turns one line of user input into an executable [`Command`].
//!
//! The top-level entry point is [`parse_command`]: it splits off the command
//! word and hands the remaining argument text to that command's own parser.
//! Shared helpers for the pieces every index-based or tag-bearing parser
//! needs live here too.

use std::collections::BTreeSet;

use crate::commands::{add, clear, delete, edit, exit, find, github, help, list, Command};
use crate::error::ParseError;
use crate::index::Index;
use crate::person::fields::Tag;

pub mod tokenizer;

/// Parses a full input line: `<commandWord> [arguments]`.
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::InvalidFormat {
            usage: help::MESSAGE_USAGE,
        });
    }
    let (word, args) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (trimmed, ""),
    };

    match word {
        add::COMMAND_WORD => add::parse(args),
        edit::COMMAND_WORD => edit::parse(args),
        delete::COMMAND_WORD => delete::parse(args),
        find::COMMAND_WORD => find::parse(args),
        github::COMMAND_WORD => github::parse(args),
        list::COMMAND_WORD => Ok(Command::List),
        clear::COMMAND_WORD => Ok(Command::Clear),
        help::COMMAND_WORD => Ok(Command::Help),
        exit::COMMAND_WORD => Ok(Command::Exit),
        _ => Err(ParseError::UnknownCommand),
    }
}

/// Parses an index out of a command's preamble, failing with that command's
/// usage string when the preamble is not a positive integer.
pub(crate) fn parse_index(preamble: &str, usage: &'static str) -> Result<Index, ParseError> {
    preamble
        .parse::<Index>()
        .map_err(|_| ParseError::InvalidFormat { usage })
}

/// Parses `t/` values for an add: every value must be a valid tag.
pub(crate) fn parse_tags(values: &[String]) -> Result<BTreeSet<Tag>, ParseError> {
    values.iter().map(|value| Tag::new(value)).collect()
}

/// Parses `t/` values for an edit.
///
/// No `t/` at all means "leave tags unchanged". A single empty `t/` is the
/// clear-all sentinel and yields an empty set. Anything else must parse as
/// ordinary tags. The sentinel exists only for tags, the one multi-valued
/// field in the grammar.
pub(crate) fn parse_tags_for_edit(
    values: &[String],
) -> Result<Option<BTreeSet<Tag>>, ParseError> {
    if values.is_empty() {
        return Ok(None);
    }
    if values.len() == 1 && values[0].is_empty() {
        return Ok(Some(BTreeSet::new()));
    }
    parse_tags(values).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_by_command_word() {
        assert_eq!(parse_command("list"), Ok(Command::List));
        assert_eq!(parse_command("clear"), Ok(Command::Clear));
        assert_eq!(parse_command("help"), Ok(Command::Help));
        assert_eq!(parse_command("exit"), Ok(Command::Exit));
        assert_eq!(parse_command("  list  "), Ok(Command::List));
    }

    #[test]
    fn unknown_word_is_rejected() {
        assert_eq!(parse_command("frobnicate 1"), Err(ParseError::UnknownCommand));
        // command words are case-sensitive
        assert_eq!(parse_command("List"), Err(ParseError::UnknownCommand));
    }

    #[test]
    fn empty_input_points_at_help() {
        assert_eq!(
            parse_command("   "),
            Err(ParseError::InvalidFormat {
                usage: help::MESSAGE_USAGE
            })
        );
    }

    #[test]
    fn tags_for_edit_distinguishes_absent_empty_and_present() {
        assert_eq!(parse_tags_for_edit(&[]), Ok(None));
        assert_eq!(
            parse_tags_for_edit(&["".to_string()]),
            Ok(Some(BTreeSet::new()))
        );

        let parsed = parse_tags_for_edit(&["friends".to_string()]).unwrap().unwrap();
        assert!(parsed.contains(&Tag::new("friends").unwrap()));

        // an empty tag mixed with real ones is not the sentinel, just invalid
        assert!(parse_tags_for_edit(&["friends".to_string(), "".to_string()]).is_err());
    }
}
