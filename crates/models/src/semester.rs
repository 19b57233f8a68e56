use serde::Serialize;
use std::{
    cmp::Ordering,
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};
use strum::{AsRefStr, EnumIter, EnumString};

/// Academic terms in calendar order within an academic year
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    EnumString,
    EnumIter,
    AsRefStr,
)]
pub enum Term {
    Fall,
    Spring,
    Summer,
}

impl Term {
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }
}

/// A "Term Year" label such as `Fall 2023`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Semester {
    pub term: Term,
    pub year: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemesterParseError(pub String);

impl Display for SemesterParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "not a \"Term Year\" semester: {:?}", self.0)
    }
}

impl std::error::Error for SemesterParseError {}

impl FromStr for Semester {
    type Err = SemesterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || SemesterParseError(s.to_owned());

        let mut parts = s.split_whitespace();
        let (Some(term), Some(year), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(err());
        };

        Ok(Semester {
            term: term.parse().map_err(|_| err())?,
            year: year.parse().map_err(|_| err())?,
        })
    }
}

impl Display for Semester {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} {}", self.term.as_str(), self.year)
    }
}

impl Ord for Semester {
    fn cmp(&self, other: &Self) -> Ordering {
        self.year
            .cmp(&other.year)
            .then_with(|| self.term.cmp(&other.term))
    }
}

impl PartialOrd for Semester {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Sort key for a semester label. Labels with a readable year order by year,
/// then term with unrecognized terms first, then the raw text. They come
/// before labels without a year, which order lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum SemesterKey<'a> {
    Dated {
        year: u16,
        term: Option<Term>,
        label: &'a str,
    },
    Raw(&'a str),
}

impl<'a> SemesterKey<'a> {
    fn of(label: &'a str) -> Self {
        let mut parts = label.split_whitespace();
        let (Some(term), Some(year), None) = (parts.next(), parts.next(), parts.next()) else {
            return SemesterKey::Raw(label);
        };

        match year.parse() {
            Ok(year) => SemesterKey::Dated {
                year,
                term: term.parse().ok(),
                label,
            },
            Err(_) => SemesterKey::Raw(label),
        }
    }
}

/// Compares two semester labels chronologically
pub fn compare_semesters(a: &str, b: &str) -> Ordering {
    SemesterKey::of(a).cmp(&SemesterKey::of(b))
}

/// Sorts items chronologically by the semester label `label` extracts
pub fn sort_by_semester<T>(items: &mut [T], label: impl Fn(&T) -> &str) {
    items.sort_by(|a, b| compare_semesters(label(a), label(b)));
}
