//! Job listing records supplied by the data source

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A job listing as supplied by the data source. Immutable for scoring.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub company: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub location: String,

    /// Free text such as "₹8-12 LPA"
    #[serde(default, deserialize_with = "null_as_empty")]
    pub salary: String,

    /// Educational prerequisites, matched case-insensitively
    #[serde(default, deserialize_with = "null_as_empty")]
    pub requirement: String,

    /// Sector identifier ("tech", "healthcare", "bfsi", ...)
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sector: String,

    #[serde(default, alias = "is_hot")]
    pub is_hot: bool,
}

impl Job {
    pub fn new(title: impl Into<String>, company: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            company: company.into(),
            ..Self::default()
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_salary(mut self, salary: impl Into<String>) -> Self {
        self.salary = salary.into();
        self
    }

    pub fn with_requirement(mut self, requirement: impl Into<String>) -> Self {
        self.requirement = requirement.into();
        self
    }

    pub fn with_sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = sector.into();
        self
    }

    pub fn hot(mut self, is_hot: bool) -> Self {
        self.is_hot = is_hot;
        self
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.company.is_empty() {
            write!(f, "{}", self.title)
        } else {
            write!(f, "{} @ {}", self.title, self.company)
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
