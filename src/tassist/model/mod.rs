//! The mutable person list behind the command layer.
//!
//! Commands never touch a raw collection: they hold a capability-limited
//! [`Model`] handle that exposes exactly the queries and mutations the
//! command set needs. [`manager::ModelManager`] is the in-memory
//! implementation used by both the binary and the tests.

use crate::person::Person;

pub mod manager;

/// The active filter on the displayed person list.
///
/// A closed enum rather than a boxed closure so that commands holding a
/// predicate compare structurally in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonPredicate {
    All,
    /// Case-insensitive whole-word match of any keyword against the name.
    NameContainsKeywords(Vec<String>),
}

impl PersonPredicate {
    pub fn test(&self, person: &Person) -> bool {
        match self {
            PersonPredicate::All => true,
            PersonPredicate::NameContainsKeywords(keywords) => keywords.iter().any(|keyword| {
                person
                    .name()
                    .as_str()
                    .split_whitespace()
                    .any(|word| word.eq_ignore_ascii_case(keyword))
            }),
        }
    }
}

/// Operations the command layer may perform against the person list.
pub trait Model {
    /// Whether a person identified as the same (see
    /// [`Person::is_same_person`]) already exists.
    fn has_person(&self, person: &Person) -> bool;

    fn add_person(&mut self, person: Person);

    /// Replaces `target` (matched by full equality) with `edited`.
    fn set_person(&mut self, target: &Person, edited: Person);

    fn delete_person(&mut self, target: &Person);

    /// Replaces the whole collection.
    fn set_persons(&mut self, persons: Vec<Person>);

    /// Snapshot of the persons passing the current filter, in backing order.
    /// Index-based commands resolve against exactly this view.
    fn filtered_persons(&self) -> Vec<Person>;

    fn update_filter(&mut self, predicate: PersonPredicate);
}
