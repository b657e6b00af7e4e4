use super::{Command, CommandResult};
use crate::error::{CommandError, ParseError};
use crate::model::Model;
use crate::parser::parse_tags;
use crate::parser::tokenizer::{
    tokenize, PREFIX_CLASS, PREFIX_EMAIL, PREFIX_GITHUB, PREFIX_NAME, PREFIX_PHONE,
    PREFIX_PROGRESS, PREFIX_STUDENT_ID, PREFIX_TAG,
};
use crate::person::fields::{ClassGroup, Email, Github, Name, Phone, Progress, StudentId};
use crate::person::Person;

pub const COMMAND_WORD: &str = "add";

pub const MESSAGE_USAGE: &str = "add: Adds a person to TAssist.\n\
    Parameters: n/NAME p/PHONE e/EMAIL s/STUDENTID [g/GITHUB] [c/CLASS] [t/TAG]... [pr/PROGRESS]\n\
    Example: add n/John Doe p/98765432 e/johnd@example.com s/A0000000B t/friends t/owesMoney pr/50";

/// Adds one person to the list, refusing duplicates.
#[derive(Debug, Clone, PartialEq)]
pub struct AddCommand {
    person: Person,
}

impl AddCommand {
    pub fn new(person: Person) -> Self {
        Self { person }
    }

    pub fn execute<M: Model>(&self, model: &mut M) -> Result<CommandResult, CommandError> {
        if model.has_person(&self.person) {
            return Err(CommandError::DuplicatePerson);
        }
        model.add_person(self.person.clone());
        Ok(CommandResult::new(format!(
            "New person added: {}",
            self.person
        )))
    }
}

pub fn parse(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(
        args,
        &[
            PREFIX_NAME,
            PREFIX_PHONE,
            PREFIX_EMAIL,
            PREFIX_STUDENT_ID,
            PREFIX_GITHUB,
            PREFIX_CLASS,
            PREFIX_TAG,
            PREFIX_PROGRESS,
        ],
    );

    let required = [PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_STUDENT_ID];
    if !map.preamble().is_empty() || required.iter().any(|prefix| map.value(*prefix).is_none()) {
        return Err(ParseError::InvalidFormat {
            usage: MESSAGE_USAGE,
        });
    }
    map.verify_no_duplicates(&[
        PREFIX_NAME,
        PREFIX_PHONE,
        PREFIX_EMAIL,
        PREFIX_STUDENT_ID,
        PREFIX_GITHUB,
        PREFIX_CLASS,
        PREFIX_PROGRESS,
    ])?;

    let name = Name::new(map.value(PREFIX_NAME).unwrap_or_default())?;
    let phone = Phone::new(map.value(PREFIX_PHONE).unwrap_or_default())?;
    let email = Email::new(map.value(PREFIX_EMAIL).unwrap_or_default())?;
    let student_id = StudentId::new(map.value(PREFIX_STUDENT_ID).unwrap_or_default())?;
    let github = map.value(PREFIX_GITHUB).map(Github::new).transpose()?;
    let class_group = map.value(PREFIX_CLASS).map(ClassGroup::new).transpose()?;
    let progress = match map.value(PREFIX_PROGRESS) {
        Some(value) => Progress::new(value)?,
        None => Progress::default(),
    };
    let tags = parse_tags(map.all_values(PREFIX_TAG))?;

    Ok(Command::Add(AddCommand::new(Person::new(
        name,
        phone,
        email,
        student_id,
        github,
        class_group,
        progress,
        tags,
    ))))
}
