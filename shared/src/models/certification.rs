use crate::error::{Result, SharedError};
use crate::numeric::parse_numeric;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Track a certification belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CertificationCategory {
    #[serde(rename = "Web Dev")]
    WebDev,
    #[serde(rename = "QA")]
    Qa,
    #[serde(rename = "SA")]
    Sa,
}

impl CertificationCategory {
    pub const ALL: [CertificationCategory; 3] = [
        CertificationCategory::WebDev,
        CertificationCategory::Qa,
        CertificationCategory::Sa,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CertificationCategory::WebDev => "Web Dev",
            CertificationCategory::Qa => "QA",
            CertificationCategory::Sa => "SA",
        }
    }
}

impl fmt::Display for CertificationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CertificationCategory {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| SharedError::Validation(format!("Unknown certification category: {}", s)))
    }
}

/// Raw value typed into the "completed" field, either text from an input
/// element or a number from a JSON client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompletedInput {
    Number(f64),
    Text(String),
}

impl From<&str> for CompletedInput {
    fn from(value: &str) -> Self {
        CompletedInput::Text(value.to_string())
    }
}

impl From<f64> for CompletedInput {
    fn from(value: f64) -> Self {
        CompletedInput::Number(value)
    }
}

/// Number of completed certifications, or `Cleared` while the field is
/// being edited and holds no number yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completed {
    Count(u32),
    Cleared,
}

impl Completed {
    /// Coerces raw input. Empty text clears the field; anything else becomes a
    /// number, malformed input reads as zero, negatives clamp to zero and
    /// fractions are truncated.
    pub fn from_input(input: &CompletedInput) -> Self {
        match input {
            CompletedInput::Text(text) if text.is_empty() => Completed::Cleared,
            CompletedInput::Text(text) => Self::from_number(coerce_number(text)),
            CompletedInput::Number(num) => Self::from_number(*num),
        }
    }

    fn from_number(num: f64) -> Self {
        if !num.is_finite() || num <= 0.0 {
            return Completed::Count(0);
        }
        // `as` saturates at u32::MAX
        Completed::Count(num.trunc() as u32)
    }

    pub fn count(&self) -> Option<u32> {
        match self {
            Completed::Count(n) => Some(*n),
            Completed::Cleared => None,
        }
    }
}

fn coerce_number(text: &str) -> f64 {
    parse_numeric(text).unwrap_or(0.0)
}

impl fmt::Display for Completed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Completed::Count(n) => write!(f, "{}", n),
            Completed::Cleared => Ok(()),
        }
    }
}

impl Serialize for Completed {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Completed::Count(n) => serializer.serialize_u32(*n),
            Completed::Cleared => serializer.serialize_str(""),
        }
    }
}

impl<'de> Deserialize<'de> for Completed {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let input = CompletedInput::deserialize(deserializer)?;
        Ok(Completed::from_input(&input))
    }
}

/// An applicant's certification progress row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CertificationRecord {
    pub id: u32,
    pub name: String,
    pub email: String,
    #[serde(rename = "appliedDate")]
    pub applied_date: String,
    pub category: CertificationCategory,
    pub completed: Completed,
}

impl CertificationRecord {
    pub fn new(
        id: u32,
        name: &str,
        email: &str,
        applied_date: &str,
        category: CertificationCategory,
        completed: u32,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
            applied_date: applied_date.to_string(),
            category,
            completed: Completed::Count(completed),
        }
    }
}
