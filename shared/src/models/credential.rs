use serde::{Deserialize, Serialize};

/// A credential earned by a certification applicant
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Credential {
    pub title: String,
    pub issuer: String,
    /// Display date, e.g. "Jun 2024"
    pub date: String,
    pub desc: String,
}

impl Credential {
    pub fn new(title: &str, issuer: &str, date: &str, desc: &str) -> Self {
        Self {
            title: title.to_string(),
            issuer: issuer.to_string(),
            date: date.to_string(),
            desc: desc.to_string(),
        }
    }
}
