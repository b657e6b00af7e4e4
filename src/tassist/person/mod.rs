//! The person entity and its validated field types.

use std::collections::BTreeSet;
use std::fmt;

pub mod fields;

use self::fields::{ClassGroup, Email, Github, Name, Phone, Progress, StudentId, Tag};

/// An immutable record for one student.
///
/// Name, phone, email and student id are always present; github and class are
/// absent until set. Edits never mutate in place: commands build a new
/// `Person` and ask the model to swap it in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: Name,
    phone: Phone,
    email: Email,
    student_id: StudentId,
    github: Option<Github>,
    class_group: Option<ClassGroup>,
    progress: Progress,
    tags: BTreeSet<Tag>,
}

impl Person {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        student_id: StudentId,
        github: Option<Github>,
        class_group: Option<ClassGroup>,
        progress: Progress,
        tags: BTreeSet<Tag>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            student_id,
            github,
            class_group,
            progress,
            tags,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn student_id(&self) -> &StudentId {
        &self.student_id
    }

    pub fn github(&self) -> Option<&Github> {
        self.github.as_ref()
    }

    pub fn class_group(&self) -> Option<&ClassGroup> {
        self.class_group.as_ref()
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Identity for duplicate detection: the student id is the uniqueness
    /// key. Two records with the same id are the same person even when every
    /// other field differs; full structural equality is `==`.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.student_id == other.student_id
    }

    /// Copy of this person with only the github field replaced.
    pub fn with_github(&self, github: Github) -> Person {
        Person {
            github: Some(github),
            ..self.clone()
        }
    }
}

impl fmt::Display for Person {
    /// The fixed label order used by every success message.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Student ID: {}; Github: {}; Class: {}; Progress: {}; Tags: ",
            self.name,
            self.phone,
            self.email,
            self.student_id,
            self.github.as_ref().map(Github::as_str).unwrap_or("-"),
            self.class_group.as_ref().map(ClassGroup::as_str).unwrap_or("-"),
            self.progress,
        )?;
        for tag in &self.tags {
            write!(f, "{}", tag)?;
        }
        Ok(())
    }
}
