//! Structural splitting of raw argument text.
//!
//! The tokenizer knows nothing about field formats: it only slices the input
//! into an unprefixed preamble plus one ordered value list per recognized
//! prefix. Validation of the values happens in the command parsers.

use std::collections::HashMap;
use std::fmt;

use crate::error::ParseError;

/// Marker introducing a field value in raw argument text, e.g. `n/`.
///
/// Each command declares the prefixes of its grammar as data and hands them
/// to [`tokenize`]; the scanning algorithm itself is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(marker: &'static str) -> Self {
        Self(marker)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_PHONE: Prefix = Prefix::new("p/");
pub const PREFIX_EMAIL: Prefix = Prefix::new("e/");
pub const PREFIX_STUDENT_ID: Prefix = Prefix::new("s/");
pub const PREFIX_GITHUB: Prefix = Prefix::new("g/");
pub const PREFIX_CLASS: Prefix = Prefix::new("c/");
pub const PREFIX_TAG: Prefix = Prefix::new("t/");
pub const PREFIX_PROGRESS: Prefix = Prefix::new("pr/");

/// The result of one [`tokenize`] call: a trimmed preamble plus, for each
/// prefix that occurred, its values in input order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Last value given for the prefix, if any. An empty value after a
    /// prefix is recorded as `""`, so `Some("")` and `None` are distinct.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// All values given for the prefix, in input order.
    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values
            .get(&prefix)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Fails if any of the given single-valued prefixes occurred more than
    /// once, naming every offender.
    pub fn verify_no_duplicates(&self, prefixes: &[Prefix]) -> Result<(), ParseError> {
        let duplicated: Vec<&str> = prefixes
            .iter()
            .filter(|prefix| self.all_values(**prefix).len() > 1)
            .map(|prefix| prefix.as_str())
            .collect();
        if duplicated.is_empty() {
            Ok(())
        } else {
            Err(ParseError::DuplicatePrefixes(duplicated.join(" ")))
        }
    }
}

/// Splits `args` against the expected `prefixes` in a single left-to-right
/// pass.
///
/// A prefix is recognized only where it starts a whitespace-delimited token;
/// the same marker inside a value is literal text. Everything before the
/// first recognized prefix is the preamble, and each span between a prefix
/// and the next one (or the end of input) is that prefix's value. Both are
/// trimmed; an empty span is kept as an empty value.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut hits: Vec<(usize, Prefix)> = Vec::new();
    for &prefix in prefixes {
        let mut from = 0;
        while let Some(found) = args[from..].find(prefix.as_str()) {
            let pos = from + found;
            let token_start = pos == 0 || args[..pos].ends_with(char::is_whitespace);
            if token_start {
                hits.push((pos, prefix));
            }
            from = pos + prefix.as_str().len();
        }
    }
    hits.sort_by_key(|(pos, _)| *pos);

    let preamble_end = hits.first().map(|(pos, _)| *pos).unwrap_or(args.len());
    let mut map = ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (i, (pos, prefix)) in hits.iter().enumerate() {
        let value_start = pos + prefix.as_str().len();
        let value_end = hits.get(i + 1).map(|(next, _)| *next).unwrap_or(args.len());
        let value = args[value_start..value_end].trim().to_string();
        map.values.entry(*prefix).or_default().push(value);
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_preamble_and_values() {
        let map = tokenize("1 n/John Doe p/98765432", &[PREFIX_NAME, PREFIX_PHONE]);
        assert_eq!(map.preamble(), "1");
        assert_eq!(map.value(PREFIX_NAME), Some("John Doe"));
        assert_eq!(map.value(PREFIX_PHONE), Some("98765432"));
    }

    #[test]
    fn repeated_prefix_preserves_order() {
        let map = tokenize("t/friends t/owesMoney", &[PREFIX_TAG]);
        assert_eq!(map.preamble(), "");
        assert_eq!(map.all_values(PREFIX_TAG), ["friends", "owesMoney"]);
        // value() resolves to the last occurrence
        assert_eq!(map.value(PREFIX_TAG), Some("owesMoney"));
    }

    #[test]
    fn prefix_inside_a_value_is_literal() {
        let map = tokenize("n/subject: a/b testing p/123", &[PREFIX_NAME, PREFIX_PHONE]);
        assert_eq!(map.value(PREFIX_NAME), Some("subject: a/b testing"));
        assert_eq!(map.value(PREFIX_PHONE), Some("123"));
    }

    #[test]
    fn unexpected_prefix_like_tokens_stay_in_the_value() {
        // x/ is not in the expected set, so it belongs to the name value
        let map = tokenize("n/John x/oops p/123", &[PREFIX_NAME, PREFIX_PHONE]);
        assert_eq!(map.value(PREFIX_NAME), Some("John x/oops"));
    }

    #[test]
    fn empty_value_is_recorded_not_dropped() {
        let map = tokenize("1 t/", &[PREFIX_TAG]);
        assert_eq!(map.value(PREFIX_TAG), Some(""));

        let map = tokenize("1 t/ n/John", &[PREFIX_TAG, PREFIX_NAME]);
        assert_eq!(map.value(PREFIX_TAG), Some(""));
        assert_eq!(map.value(PREFIX_NAME), Some("John"));
    }

    #[test]
    fn absent_prefix_yields_none() {
        let map = tokenize("n/John", &[PREFIX_NAME, PREFIX_PHONE]);
        assert_eq!(map.value(PREFIX_PHONE), None);
        assert!(map.all_values(PREFIX_PHONE).is_empty());
    }

    #[test]
    fn input_without_prefixes_is_all_preamble() {
        let map = tokenize("  some free text  ", &[PREFIX_NAME]);
        assert_eq!(map.preamble(), "some free text");
        assert_eq!(map.value(PREFIX_NAME), None);
    }

    #[test]
    fn prefix_at_start_of_input_means_empty_preamble() {
        let map = tokenize("n/John Doe", &[PREFIX_NAME]);
        assert_eq!(map.preamble(), "");
        assert_eq!(map.value(PREFIX_NAME), Some("John Doe"));
    }

    #[test]
    fn overlapping_markers_do_not_confuse_the_scan() {
        // pr/ and p/ share a first character; only token starts count
        let map = tokenize("p/98765432 pr/50", &[PREFIX_PHONE, PREFIX_PROGRESS]);
        assert_eq!(map.value(PREFIX_PHONE), Some("98765432"));
        assert_eq!(map.value(PREFIX_PROGRESS), Some("50"));
    }

    #[test]
    fn duplicate_check_names_every_offending_prefix() {
        let map = tokenize(
            "n/John n/Jane p/123 p/456 e/a@bc",
            &[PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL],
        );
        assert!(map
            .verify_no_duplicates(&[PREFIX_EMAIL])
            .is_ok());
        let err = map
            .verify_no_duplicates(&[PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL])
            .unwrap_err();
        assert_eq!(err, ParseError::DuplicatePrefixes("n/ p/".to_string()));
    }
}
