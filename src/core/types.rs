use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::{Error, Result};

/// Stable identifier of a task on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Task priority. Variant order is the ranking order (`Low < Medium < High`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "PriorityRepr")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn all() -> &'static [Priority] {
        &[Priority::Low, Priority::Medium, Priority::High]
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => match other.parse::<u64>() {
                Ok(level) => Priority::try_from(level),
                Err(_) => Err(Error::validation(format!("unknown priority '{s}'"))),
            },
        }
    }
}

impl TryFrom<u64> for Priority {
    type Error = Error;

    fn try_from(level: u64) -> Result<Self> {
        match level {
            1 => Ok(Priority::Low),
            2 => Ok(Priority::Medium),
            3 => Ok(Priority::High),
            _ => Err(Error::validation(format!(
                "priority level {level} out of range 1..=3"
            ))),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PriorityRepr {
    Level(u64),
    Name(String),
}

impl TryFrom<PriorityRepr> for Priority {
    type Error = Error;

    fn try_from(repr: PriorityRepr) -> Result<Self> {
        match repr {
            PriorityRepr::Level(level) => Priority::try_from(level),
            PriorityRepr::Name(name) => name.parse(),
        }
    }
}

/// A task record as loaded from the task file or created on the board.
///
/// `revenue` and `time_taken` are `None` when the source value was not a
/// well-formed number (missing, `null`, a boolean, or non-numeric text).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub priority: Priority,
    #[serde(default, deserialize_with = "deserialize_lenient_number")]
    pub revenue: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient_number")]
    pub time_taken: Option<f64>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn new(
        id: TaskId,
        title: impl Into<String>,
        priority: Priority,
        revenue: f64,
        time_taken: f64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            priority,
            revenue: Some(revenue),
            time_taken: Some(time_taken),
            created_at: Utc::now(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_title(&self.title)
    }
}

pub(crate) fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(Error::validation("task title must not be empty"));
    }
    Ok(())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LenientNumber {
    Number(f64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

/// Accepts JSON numbers and numeric strings; anything else becomes `None`.
fn deserialize_lenient_number<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match LenientNumber::deserialize(deserializer)? {
        LenientNumber::Number(n) => Some(n),
        LenientNumber::Text(s) => s.trim().parse::<f64>().ok(),
        LenientNumber::Other(_) => None,
    })
}
