use serde::{Serialize, Serializer};
use std::fmt;

use super::normalizer::{field_or_placeholder, normalize_status, parse_salary, week_or_placeholder};
use super::table::RowRef;

/// Display token substituted for any missing value in API output.
pub const PLACEHOLDER: &str = "—";

pub(crate) mod columns {
    pub const NAME: &str = "MIT Name";
    pub const TRAINING_SITE: &str = "Training Site";
    pub const LOCATION: &str = "Location";
    pub const LEVEL: &str = "Level";
    pub const WEEK: &str = "Week";
    pub const STATUS: &str = "Status";
    pub const SALARY: &str = "Salary";

    pub const JOB_TITLE: &str = "Job Title";
    pub const ACCOUNT: &str = "Account";
    pub const CITY: &str = "City";
    pub const STATE: &str = "State";
    pub const VERTICAL: &str = "VERT";
}

/// Training week of a candidate. Unknown weeks never satisfy a week threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Week {
    Numeric(f64),
    Unknown,
}

impl Week {
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Numeric(weeks) => Some(weeks),
            Self::Unknown => None,
        }
    }

    pub fn is_after(self, threshold: f64) -> bool {
        self.value().is_some_and(|weeks| weeks > threshold)
    }

    pub fn is_within(self, threshold: f64) -> bool {
        self.value().is_some_and(|weeks| weeks <= threshold)
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Numeric(weeks) if weeks.fract() == 0.0 => write!(f, "{weeks:.0}"),
            Self::Numeric(weeks) => write!(f, "{weeks}"),
            Self::Unknown => f.write_str(PLACEHOLDER),
        }
    }
}

impl Serialize for Week {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Self::Numeric(weeks) if weeks.fract() == 0.0 && weeks.abs() < i64::MAX as f64 => {
                serializer.serialize_i64(weeks as i64)
            }
            Self::Numeric(weeks) => serializer.serialize_f64(weeks),
            Self::Unknown => serializer.serialize_str(PLACEHOLDER),
        }
    }
}

/// One roster row after normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateRecord {
    pub name: String,
    pub training_site: String,
    pub location: String,
    pub level: String,
    pub week: Week,
    /// Trimmed and lowercased; [`PLACEHOLDER`] when the sheet leaves it blank.
    pub status: String,
    pub salary: f64,
}

impl CandidateRecord {
    pub fn from_row(row: &RowRef<'_>) -> Self {
        let status = row
            .get(columns::STATUS)
            .map(normalize_status)
            .filter(|status| !status.is_empty())
            .unwrap_or_else(|| PLACEHOLDER.to_string());

        Self {
            name: field_or_placeholder(row.get(columns::NAME)),
            training_site: field_or_placeholder(row.get(columns::TRAINING_SITE)),
            location: field_or_placeholder(row.get(columns::LOCATION)),
            level: field_or_placeholder(row.get(columns::LEVEL)),
            week: week_or_placeholder(row.cell(columns::WEEK)),
            status,
            salary: parse_salary(row.cell(columns::SALARY)),
        }
    }
}

/// One open position from the jobs export. Every field is display text and is served as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobPosting {
    pub job_title: String,
    pub account: String,
    pub city: String,
    pub state: String,
    pub vertical: String,
    pub salary: String,
}

impl JobPosting {
    pub fn from_row(row: &RowRef<'_>) -> Self {
        Self {
            job_title: field_or_placeholder(row.get(columns::JOB_TITLE)),
            account: field_or_placeholder(row.get(columns::ACCOUNT)),
            city: field_or_placeholder(row.get(columns::CITY)),
            state: field_or_placeholder(row.get(columns::STATE)),
            vertical: field_or_placeholder(row.get(columns::VERTICAL)),
            salary: field_or_placeholder(row.get(columns::SALARY)),
        }
    }
}
