use std::fmt;
use std::str::FromStr;

/// A 1-based position into the currently displayed person list.
///
/// Parsing only checks that the text is a positive integer; whether the index
/// actually falls inside the list is checked at execution time, against the
/// filtered view current at that moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Index(usize);

impl Index {
    pub fn from_one_based(value: usize) -> Option<Self> {
        if value == 0 {
            None
        } else {
            Some(Self(value))
        }
    }

    pub fn one_based(&self) -> usize {
        self.0
    }

    pub fn zero_based(&self) -> usize {
        self.0 - 1
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Index {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Digits only: no signs, no surrounding whitespace.
        if !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()) {
            if let Ok(n) = s.parse::<usize>() {
                if let Some(index) = Index::from_one_based(n) {
                    return Ok(index);
                }
            }
        }
        Err(format!("Index is not a non-zero unsigned integer: {}", s))
    }
}
