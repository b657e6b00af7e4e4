//! Validated field value types.
//!
//! Each type wraps a single person attribute and enforces its format at
//! construction. An instance can therefore never hold an invalid value, and
//! the rest of the pipeline works with the types instead of raw strings.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use crate::error::ParseError;

/// A person's name: alphanumeric characters and spaces, not blank.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Name(String);

static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").unwrap());

impl Name {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Names should only contain alphanumeric characters and spaces, and it should not be blank";

    pub fn new(value: &str) -> Result<Self, ParseError> {
        if NAME_RE.is_match(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(ParseError::Field(Self::MESSAGE_CONSTRAINTS))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A phone number: digits only, at least 3 of them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{3,}$").unwrap());

impl Phone {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Phone numbers should only contain numbers, and it should be at least 3 digits long";

    pub fn new(value: &str) -> Result<Self, ParseError> {
        if PHONE_RE.is_match(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(ParseError::Field(Self::MESSAGE_CONSTRAINTS))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An email address of the form `local-part@domain`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    // local part: alphanumeric plus +_.- but must start and end alphanumeric;
    // domain: dot-separated labels, hyphens only inside, last label >= 2 chars
    Regex::new(
        r"^[A-Za-z0-9]([A-Za-z0-9+_.-]*[A-Za-z0-9])?@([A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?\.)*[A-Za-z0-9][A-Za-z0-9-]*[A-Za-z0-9]$",
    )
    .unwrap()
});

impl Email {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Emails should be of the format local-part@domain. The local-part may contain \
         alphanumeric characters and +_.- (not at the start or end); the domain is made of \
         labels separated by periods, each starting and ending alphanumerically, with the \
         final label at least 2 characters long";

    pub fn new(value: &str) -> Result<Self, ParseError> {
        if EMAIL_RE.is_match(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(ParseError::Field(Self::MESSAGE_CONSTRAINTS))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A matriculation number: `A`, seven digits, one uppercase letter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StudentId(String);

static STUDENT_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^A\d{7}[A-Z]$").unwrap());

impl StudentId {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Student IDs should begin with 'A', followed by 7 digits and an uppercase letter, e.g. A0000000B";

    pub fn new(value: &str) -> Result<Self, ParseError> {
        if STUDENT_ID_RE.is_match(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(ParseError::Field(Self::MESSAGE_CONSTRAINTS))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A GitHub username.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Github(String);

static GITHUB_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]([A-Za-z0-9-]{0,37}[A-Za-z0-9])?$").unwrap());

impl Github {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Github usernames may only contain alphanumeric characters and single hyphens, cannot \
         begin or end with a hyphen, and must be at most 39 characters long";

    pub fn new(value: &str) -> Result<Self, ParseError> {
        if GITHUB_RE.is_match(value) && !value.contains("--") {
            Ok(Self(value.to_string()))
        } else {
            Err(ParseError::Field(Self::MESSAGE_CONSTRAINTS))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Github {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A tutorial or lab group, e.g. `T01` or `L08`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassGroup(String);

static CLASS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]\d{2}$").unwrap());

impl ClassGroup {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Classes should be an uppercase letter followed by 2 digits, e.g. T01 or L08";

    pub fn new(value: &str) -> Result<Self, ParseError> {
        if CLASS_RE.is_match(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(ParseError::Field(Self::MESSAGE_CONSTRAINTS))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClassGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A tag attached to a person: a single alphanumeric word.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(String);

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").unwrap());

impl Tag {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Tags names should be alphanumeric";

    pub fn new(value: &str) -> Result<Self, ParseError> {
        if TAG_RE.is_match(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(ParseError::Field(Self::MESSAGE_CONSTRAINTS))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

/// Course progress as a whole-number percentage, 0 to 100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Progress(u8);

impl Progress {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Progress should be a whole number between 0 and 100";

    pub fn new(value: &str) -> Result<Self, ParseError> {
        if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
            return Err(ParseError::Field(Self::MESSAGE_CONSTRAINTS));
        }
        match value.parse::<u8>() {
            Ok(n) => Self::from_value(n),
            Err(_) => Err(ParseError::Field(Self::MESSAGE_CONSTRAINTS)),
        }
    }

    pub fn from_value(value: u8) -> Result<Self, ParseError> {
        if value <= 100 {
            Ok(Self(value))
        } else {
            Err(ParseError::Field(Self::MESSAGE_CONSTRAINTS))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_accepts_alphanumeric_and_spaces() {
        assert!(Name::new("John Doe").is_ok());
        assert!(Name::new("peter the 2nd").is_ok());
        assert!(Name::new("").is_err());
        assert!(Name::new(" leading space").is_err());
        assert!(Name::new("R@chel").is_err());
    }

    #[test]
    fn phone_requires_three_digits() {
        assert!(Phone::new("911").is_ok());
        assert!(Phone::new("98765432").is_ok());
        assert!(Phone::new("91").is_err());
        assert!(Phone::new("9011p041").is_err());
        assert!(Phone::new("9312 1534").is_err());
    }

    #[test]
    fn email_format() {
        assert!(Email::new("johnd@example.com").is_ok());
        assert!(Email::new("a@bc").is_ok());
        assert!(Email::new("peter_jack@very-long-domain.example.com").is_ok());
        assert!(Email::new("peterjack@").is_err());
        assert!(Email::new("@example.com").is_err());
        assert!(Email::new("peterjack@example.c").is_err());
        assert!(Email::new(".peter@example.com").is_err());
        assert!(Email::new("peter jack@example.com").is_err());
    }

    #[test]
    fn student_id_format() {
        assert!(StudentId::new("A0000000B").is_ok());
        assert!(StudentId::new("A1234567X").is_ok());
        assert!(StudentId::new("B1234567X").is_err());
        assert!(StudentId::new("A123456X").is_err());
        assert!(StudentId::new("A1234567x").is_err());
        assert!(StudentId::new("").is_err());
    }

    #[test]
    fn github_username_rules() {
        assert!(Github::new("johndoe").is_ok());
        assert!(Github::new("john-doe-2").is_ok());
        assert!(Github::new("a").is_ok());
        assert!(Github::new("-johndoe").is_err());
        assert!(Github::new("johndoe-").is_err());
        assert!(Github::new("john--doe").is_err());
        assert!(Github::new("").is_err());
        assert!(Github::new(&"a".repeat(40)).is_err());
        assert!(Github::new(&"a".repeat(39)).is_ok());
    }

    #[test]
    fn class_group_format() {
        assert!(ClassGroup::new("T01").is_ok());
        assert!(ClassGroup::new("L08").is_ok());
        assert!(ClassGroup::new("t01").is_err());
        assert!(ClassGroup::new("T1").is_err());
        assert!(ClassGroup::new("T001").is_err());
    }

    #[test]
    fn tag_is_one_alphanumeric_word() {
        assert!(Tag::new("friends").is_ok());
        assert!(Tag::new("owesMoney").is_ok());
        assert!(Tag::new("").is_err());
        assert!(Tag::new("two words").is_err());
        assert!(Tag::new("#star").is_err());
    }

    #[test]
    fn progress_range() {
        assert_eq!(Progress::new("0").unwrap().value(), 0);
        assert_eq!(Progress::new("100").unwrap().value(), 100);
        assert!(Progress::new("101").is_err());
        assert!(Progress::new("255").is_err());
        assert!(Progress::new("-1").is_err());
        assert!(Progress::new("50%").is_err());
        assert!(Progress::new("").is_err());
    }
}
