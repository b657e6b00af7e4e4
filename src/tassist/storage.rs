//! JSON persistence for the person list.
//!
//! Persons are written through a raw mirror struct and revalidated field by
//! field on the way back in, so a hand-edited or corrupted data file
//! surfaces as a typed error instead of smuggling invalid values past the
//! field types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

use crate::error::{Result, TassistError};
use crate::person::fields::{ClassGroup, Email, Github, Name, Phone, Progress, StudentId, Tag};
use crate::person::Person;

#[derive(Debug, Serialize, Deserialize)]
struct PersonRecord {
    name: String,
    phone: String,
    email: String,
    student_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    class_group: Option<String>,
    #[serde(default)]
    progress: u8,
    #[serde(default)]
    tags: Vec<String>,
}

impl From<&Person> for PersonRecord {
    fn from(person: &Person) -> Self {
        Self {
            name: person.name().as_str().to_string(),
            phone: person.phone().as_str().to_string(),
            email: person.email().as_str().to_string(),
            student_id: person.student_id().as_str().to_string(),
            github: person.github().map(|g| g.as_str().to_string()),
            class_group: person.class_group().map(|c| c.as_str().to_string()),
            progress: person.progress().value(),
            tags: person.tags().iter().map(|t| t.as_str().to_string()).collect(),
        }
    }
}

impl TryFrom<PersonRecord> for Person {
    type Error = TassistError;

    fn try_from(record: PersonRecord) -> Result<Person> {
        let tags = record
            .tags
            .iter()
            .map(|tag| Tag::new(tag))
            .collect::<std::result::Result<BTreeSet<_>, _>>()?;
        Ok(Person::new(
            Name::new(&record.name)?,
            Phone::new(&record.phone)?,
            Email::new(&record.email)?,
            StudentId::new(&record.student_id)?,
            record.github.as_deref().map(Github::new).transpose()?,
            record.class_group.as_deref().map(ClassGroup::new).transpose()?,
            Progress::from_value(record.progress)?,
            tags,
        ))
    }
}

/// Reads the person list from `path`. A missing file is an empty list, not
/// an error; a present but invalid file is an error.
pub fn load(path: &Path) -> Result<Vec<Person>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let data = std::fs::read_to_string(path)?;
    let records: Vec<PersonRecord> = serde_json::from_str(&data)?;
    records.into_iter().map(Person::try_from).collect()
}

pub fn save(path: &Path, persons: &[Person]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let records: Vec<PersonRecord> = persons.iter().map(PersonRecord::from).collect();
    let data = serde_json::to_string_pretty(&records)?;
    std::fs::write(path, data)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::manager::fixtures;

    #[test]
    fn round_trips_typical_persons() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tassist.json");
        let persons = fixtures::typical_persons();

        save(&path, &persons).unwrap();
        let loaded = load(&path).unwrap();

        assert_eq!(loaded, persons);
    }

    #[test]
    fn missing_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load(&dir.path().join("nope.json")).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn invalid_field_in_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tassist.json");
        std::fs::write(
            &path,
            r#"[{"name": "John Doe", "phone": "98765432", "email": "johnd@example.com", "student_id": "not-an-id"}]"#,
        )
        .unwrap();

        assert!(load(&path).is_err());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tassist.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            load(&path),
            Err(TassistError::Serialization(_))
        ));
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("dir").join("tassist.json");
        save(&path, &[]).unwrap();
        assert!(path.exists());
    }
}
