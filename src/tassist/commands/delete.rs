use super::{Command, CommandResult};
use crate::error::{CommandError, ParseError};
use crate::index::Index;
use crate::model::Model;
use crate::parser::parse_index;

pub const COMMAND_WORD: &str = "delete";

pub const MESSAGE_USAGE: &str = "delete: Deletes the person identified by the index number used \
    in the displayed person list.\n\
    Parameters: INDEX (must be a positive integer)\n\
    Example: delete 1";

/// Removes the person at the given index of the currently displayed list.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteCommand {
    index: Index,
}

impl DeleteCommand {
    pub fn new(index: Index) -> Self {
        Self { index }
    }

    pub fn execute<M: Model>(&self, model: &mut M) -> Result<CommandResult, CommandError> {
        let filtered = model.filtered_persons();
        let target = filtered
            .get(self.index.zero_based())
            .ok_or(CommandError::InvalidIndex)?;

        model.delete_person(target);
        Ok(CommandResult::new(format!("Deleted Person: {}", target)))
    }
}

pub fn parse(args: &str) -> Result<Command, ParseError> {
    let index = parse_index(args.trim(), MESSAGE_USAGE)?;
    Ok(Command::Delete(DeleteCommand::new(index)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::manager::fixtures;
    use crate::model::{Model, PersonPredicate};

    #[test]
    fn parse_accepts_a_positive_integer() {
        assert_eq!(
            parse("1"),
            Ok(Command::Delete(DeleteCommand::new(
                Index::from_one_based(1).unwrap()
            )))
        );
        assert_eq!(parse(" 3 "), parse("3"));
    }

    #[test]
    fn parse_rejects_everything_else() {
        for args in ["", "0", "-1", "abc", "1 1"] {
            assert_eq!(
                parse(args),
                Err(ParseError::InvalidFormat {
                    usage: MESSAGE_USAGE
                }),
                "args: {:?}",
                args
            );
        }
    }

    #[test]
    fn execute_removes_and_reports_the_person() {
        let mut model = fixtures::typical_model();
        let result = match parse("1").unwrap() {
            Command::Delete(command) => command.execute(&mut model).unwrap(),
            _ => unreachable!(),
        };

        assert!(result.feedback().starts_with("Deleted Person: Alice Pauline"));
        assert_eq!(model.filtered_persons().len(), 2);
    }

    #[test]
    fn execute_rejects_out_of_bounds_index() {
        let mut model = fixtures::typical_model();
        let command = DeleteCommand::new(Index::from_one_based(4).unwrap());
        assert_eq!(command.execute(&mut model), Err(CommandError::InvalidIndex));
        assert_eq!(model.filtered_persons().len(), 3);
    }

    #[test]
    fn index_resolves_against_the_filtered_list() {
        let mut model = fixtures::typical_model();
        model.update_filter(PersonPredicate::NameContainsKeywords(vec![
            "benson".to_string(),
        ]));

        DeleteCommand::new(Index::from_one_based(1).unwrap())
            .execute(&mut model)
            .unwrap();

        model.update_filter(PersonPredicate::All);
        let remaining = model.filtered_persons();
        assert_eq!(remaining.len(), 2);
        assert!(!remaining.iter().any(|p| p.is_same_person(&fixtures::benson())));
    }
}
