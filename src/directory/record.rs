//! Record definitions
//!
//! The employee record and the keys it is ordered by.

use std::cmp::Ordering;
use std::fmt;

/// A single employee
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub salary: u32,
}

impl Record {
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        email: impl Into<String>,
        salary: u32,
    ) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            email: email.into(),
            salary,
        }
    }

    /// Owned copy of the by-name key
    pub fn full_name(&self) -> FullName {
        FullName::new(&self.name, &self.surname)
    }

    /// Compare this record's by-name key against (name, surname)
    ///
    /// Surname first, ties broken by name. Plain byte order on both.
    pub fn cmp_name(&self, name: &str, surname: &str) -> Ordering {
        cmp_full_name(&self.name, &self.surname, name, surname)
    }

    /// Compare this record's email against `email`
    pub fn cmp_email(&self, email: &str) -> Ordering {
        self.email.as_str().cmp(email)
    }
}

/// By-name ordering on borrowed parts
pub(crate) fn cmp_full_name(name: &str, surname: &str, other_name: &str, other_surname: &str) -> Ordering {
    surname.cmp(other_surname).then_with(|| name.cmp(other_name))
}

/// (name, surname) pair handed back by traversal queries
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FullName {
    pub name: String,
    pub surname: String,
}

impl FullName {
    pub fn new(name: impl Into<String>, surname: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
        }
    }
}

impl Ord for FullName {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_full_name(&self.name, &self.surname, &other.name, &other.surname)
    }
}

impl PartialOrd for FullName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.surname)
    }
}

/// Inclusive, 0-indexed range of salary positions a record occupies
///
/// `min` counts records paid strictly less; `max` adds the records paid
/// the same amount, minus one for the record itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rank {
    pub min: usize,
    pub max: usize,
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}
