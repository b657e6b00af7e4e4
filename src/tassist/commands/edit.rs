use std::collections::BTreeSet;

use super::{Command, CommandResult};
use crate::error::{CommandError, ParseError};
use crate::index::Index;
use crate::model::Model;
use crate::parser::tokenizer::{
    tokenize, PREFIX_CLASS, PREFIX_EMAIL, PREFIX_GITHUB, PREFIX_NAME, PREFIX_PHONE,
    PREFIX_PROGRESS, PREFIX_STUDENT_ID, PREFIX_TAG,
};
use crate::parser::{parse_index, parse_tags_for_edit};
use crate::person::fields::{ClassGroup, Email, Github, Name, Phone, Progress, StudentId, Tag};
use crate::person::Person;

pub const COMMAND_WORD: &str = "edit";

pub const MESSAGE_USAGE: &str = "edit: Edits the details of the person identified by the index \
    number used in the displayed person list. Existing values will be overwritten by the input \
    values.\n\
    Parameters: INDEX (must be a positive integer) [n/NAME] [p/PHONE] [e/EMAIL] [s/STUDENTID] \
    [g/GITHUB] [c/CLASS] [pr/PROGRESS] [t/TAG]...\n\
    Example: edit 1 p/91234567 e/johndoe@example.com";

/// The fields an edit supplies; everything left `None` keeps its prior value.
///
/// `tags: Some(empty set)` is the clear-all sentinel produced by a single
/// empty `t/`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditPersonDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub student_id: Option<StudentId>,
    pub github: Option<Github>,
    pub class_group: Option<ClassGroup>,
    pub progress: Option<Progress>,
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditPersonDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.student_id.is_some()
            || self.github.is_some()
            || self.class_group.is_some()
            || self.progress.is_some()
            || self.tags.is_some()
    }

    /// New person with this descriptor overlaid on `target`.
    fn apply_to(&self, target: &Person) -> Person {
        Person::new(
            self.name.clone().unwrap_or_else(|| target.name().clone()),
            self.phone.clone().unwrap_or_else(|| target.phone().clone()),
            self.email.clone().unwrap_or_else(|| target.email().clone()),
            self.student_id
                .clone()
                .unwrap_or_else(|| target.student_id().clone()),
            self.github.clone().or_else(|| target.github().cloned()),
            self.class_group
                .clone()
                .or_else(|| target.class_group().cloned()),
            self.progress.unwrap_or_else(|| target.progress()),
            self.tags.clone().unwrap_or_else(|| target.tags().clone()),
        )
    }
}

/// Overlays the supplied fields onto the person at the given index of the
/// currently displayed list.
#[derive(Debug, Clone, PartialEq)]
pub struct EditCommand {
    index: Index,
    descriptor: EditPersonDescriptor,
}

impl EditCommand {
    pub fn new(index: Index, descriptor: EditPersonDescriptor) -> Self {
        Self { index, descriptor }
    }

    pub fn execute<M: Model>(&self, model: &mut M) -> Result<CommandResult, CommandError> {
        let filtered = model.filtered_persons();
        let target = filtered
            .get(self.index.zero_based())
            .ok_or(CommandError::InvalidIndex)?;

        let edited = self.descriptor.apply_to(target);
        if !target.is_same_person(&edited) && model.has_person(&edited) {
            return Err(CommandError::DuplicatePerson);
        }

        model.set_person(target, edited.clone());
        Ok(CommandResult::new(format!("Edited Person: {}", edited)))
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

    let index = parse_index(map.preamble(), MESSAGE_USAGE)?;
    map.verify_no_duplicates(&[
        PREFIX_NAME,
        PREFIX_PHONE,
        PREFIX_EMAIL,
        PREFIX_STUDENT_ID,
        PREFIX_GITHUB,
        PREFIX_CLASS,
        PREFIX_PROGRESS,
    ])?;

    let descriptor = EditPersonDescriptor {
        name: map.value(PREFIX_NAME).map(Name::new).transpose()?,
        phone: map.value(PREFIX_PHONE).map(Phone::new).transpose()?,
        email: map.value(PREFIX_EMAIL).map(Email::new).transpose()?,
        student_id: map.value(PREFIX_STUDENT_ID).map(StudentId::new).transpose()?,
        github: map.value(PREFIX_GITHUB).map(Github::new).transpose()?,
        class_group: map.value(PREFIX_CLASS).map(ClassGroup::new).transpose()?,
        progress: map.value(PREFIX_PROGRESS).map(Progress::new).transpose()?,
        tags: parse_tags_for_edit(map.all_values(PREFIX_TAG))?,
    };

    if !descriptor.is_any_field_edited() {
        return Err(ParseError::NothingToEdit);
    }

    Ok(Command::Edit(EditCommand::new(index, descriptor)))
}
