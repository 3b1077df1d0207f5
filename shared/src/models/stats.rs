use serde::{Deserialize, Serialize};

/// Headline figure shown above the analytics tables
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatCard {
    pub label: String,
    pub value: String,
    pub sub: String,
}

impl StatCard {
    pub fn new(label: &str, value: &str, sub: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
            sub: sub.to_string(),
        }
    }
}
