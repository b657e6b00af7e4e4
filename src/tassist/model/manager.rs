use super::{Model, PersonPredicate};
use crate::person::Person;

/// In-memory [`Model`] implementation: the canonical person list plus the
/// currently applied filter predicate.
#[derive(Debug)]
pub struct ModelManager {
    persons: Vec<Person>,
    filter: PersonPredicate,
}

impl ModelManager {
    pub fn new(persons: Vec<Person>) -> Self {
        Self {
            persons,
            filter: PersonPredicate::All,
        }
    }

    /// The full backing list, regardless of filter. Used by the storage
    /// layer when saving; commands only ever see the filtered view.
    pub fn persons(&self) -> &[Person] {
        &self.persons
    }
}

impl Default for ModelManager {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Model for ModelManager {
    fn has_person(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p.is_same_person(person))
    }

    fn add_person(&mut self, person: Person) {
        self.persons.push(person);
        // a freshly added person should be visible
        self.filter = PersonPredicate::All;
    }

    fn set_person(&mut self, target: &Person, edited: Person) {
        if let Some(position) = self.persons.iter().position(|p| p == target) {
            self.persons[position] = edited;
        }
    }

    fn delete_person(&mut self, target: &Person) {
        if let Some(position) = self.persons.iter().position(|p| p == target) {
            self.persons.remove(position);
        }
    }

    fn set_persons(&mut self, persons: Vec<Person>) {
        self.persons = persons;
    }

    fn filtered_persons(&self) -> Vec<Person> {
        self.persons
            .iter()
            .filter(|p| self.filter.test(p))
            .cloned()
            .collect()
    }

    fn update_filter(&mut self, predicate: PersonPredicate) {
        self.filter = predicate;
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::person::fields::{ClassGroup, Email, Github, Name, Phone, Progress, StudentId, Tag};
    use std::collections::BTreeSet;

    pub fn build_person(name: &str, phone: &str, email: &str, student_id: &str) -> Person {
        Person::new(
            Name::new(name).unwrap(),
            Phone::new(phone).unwrap(),
            Email::new(email).unwrap(),
            StudentId::new(student_id).unwrap(),
            None,
            None,
            Progress::default(),
            BTreeSet::new(),
        )
    }

    pub fn alice() -> Person {
        build_person("Alice Pauline", "94351253", "alice@example.com", "A0111111B")
    }

    pub fn benson() -> Person {
        let mut tags = BTreeSet::new();
        tags.insert(Tag::new("friends").unwrap());
        tags.insert(Tag::new("owesMoney").unwrap());
        Person::new(
            Name::new("Benson Meier").unwrap(),
            Phone::new("98765432").unwrap(),
            Email::new("johnd@example.com").unwrap(),
            StudentId::new("A0222222C").unwrap(),
            Some(Github::new("benson-m").unwrap()),
            Some(ClassGroup::new("T01").unwrap()),
            Progress::new("50").unwrap(),
            tags,
        )
    }

    pub fn carl() -> Person {
        build_person("Carl Kurz", "95352563", "heinz@example.com", "A0333333D")
    }

    pub fn typical_persons() -> Vec<Person> {
        vec![alice(), benson(), carl()]
    }

    pub fn typical_model() -> ModelManager {
        ModelManager::new(typical_persons())
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{alice, benson, build_person, typical_model};
    use super::*;

    #[test]
    fn has_person_uses_same_person_identity() {
        let model = typical_model();
        // same student id, every other field different
        let impostor = build_person("Someone Else", "999", "x@yz.com", "A0111111B");
        assert!(model.has_person(&impostor));

        let stranger = build_person("Alice Pauline", "94351253", "alice@example.com", "A0999999Z");
        assert!(!model.has_person(&stranger));
    }

    #[test]
    fn set_person_replaces_in_place() {
        let mut model = typical_model();
        let target = alice();
        let edited = build_person("Alice Edited", "94351253", "alice@example.com", "A0111111B");
        model.set_person(&target, edited.clone());

        let filtered = model.filtered_persons();
        assert_eq!(filtered[0], edited);
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn delete_person_removes_only_the_target() {
        let mut model = typical_model();
        model.delete_person(&benson());
        let filtered = model.filtered_persons();
        assert_eq!(filtered.len(), 2);
        assert!(!filtered.iter().any(|p| p.is_same_person(&benson())));
    }

    #[test]
    fn filtered_view_respects_predicate_and_backing_order() {
        let mut model = typical_model();
        model.update_filter(PersonPredicate::NameContainsKeywords(vec![
            "alice".to_string(),
            "carl".to_string(),
        ]));
        let filtered = model.filtered_persons();
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].name().as_str(), "Alice Pauline");
        assert_eq!(filtered[1].name().as_str(), "Carl Kurz");
    }

    #[test]
    fn add_person_resets_filter_to_show_all() {
        let mut model = typical_model();
        model.update_filter(PersonPredicate::NameContainsKeywords(vec![
            "alice".to_string(),
        ]));
        assert_eq!(model.filtered_persons().len(), 1);

        model.add_person(build_person("Dan Roe", "123456", "dan@example.com", "A0444444E"));
        assert_eq!(model.filtered_persons().len(), 4);
    }
}
