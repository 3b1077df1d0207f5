use serde::{Deserialize, Serialize};
use std::fmt;

use crate::numeric::parse_numeric;

/// Rate at or above which an applicant counts as actively engaged
pub const ACTIVE_ENGAGEMENT_THRESHOLD: f64 = 50.0;

/// Parses a percentage-like value such as `"40%"`, `" 89 "`, `"12.5"` or `"0x40%"`.
///
/// Absent, malformed and non-finite input all read as `0.0`. Only the first
/// `%` is stripped, so `"40%%"` is malformed.
pub fn parse_percent(value: Option<&str>) -> f64 {
    let Some(raw) = value else {
        return 0.0;
    };
    match parse_numeric(&raw.replacen('%', "", 1)) {
        Some(num) if num.is_finite() => num,
        _ => 0.0,
    }
}

/// Engagement classification. Always derived from the stored rate, never persisted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EngagementStatus {
    #[serde(rename = "ACTIVE")]
    Active,
    #[serde(rename = "LOW ENGAGEMENT")]
    LowEngagement,
}

impl EngagementStatus {
    pub fn from_rate(rate: f64) -> Self {
        if rate >= ACTIVE_ENGAGEMENT_THRESHOLD {
            EngagementStatus::Active
        } else {
            EngagementStatus::LowEngagement
        }
    }

    pub fn classify(value: Option<&str>) -> Self {
        Self::from_rate(parse_percent(value))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EngagementStatus::Active => "ACTIVE",
            EngagementStatus::LowEngagement => "LOW ENGAGEMENT",
        }
    }
}

impl fmt::Display for EngagementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recent applicant with their engagement rate
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EngagementRecord {
    pub name: String,
    pub email: String,
    #[serde(rename = "appliedDate")]
    pub applied_date: String,
    pub department: String,
    #[serde(rename = "engagementRate")]
    pub engagement_rate: String,
}

impl EngagementRecord {
    pub fn new(name: &str, email: &str, applied_date: &str, department: &str, rate: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            applied_date: applied_date.to_string(),
            department: department.to_string(),
            engagement_rate: rate.to_string(),
        }
    }

    pub fn rate(&self) -> f64 {
        parse_percent(Some(&self.engagement_rate))
    }

    pub fn status(&self) -> EngagementStatus {
        EngagementStatus::from_rate(self.rate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some("40%"), 40.0)]
    #[case(Some("89%"), 89.0)]
    #[case(Some(" 50 % "), 50.0)]
    #[case(Some("%75"), 75.0)]
    #[case(Some("12.5%"), 12.5)]
    #[case(Some("0x40%"), 64.0)]
    #[case(Some(""), 0.0)]
    #[case(Some("abc"), 0.0)]
    #[case(Some("40%%"), 0.0)]
    #[case(Some("inf"), 0.0)]
    #[case(Some("NaN"), 0.0)]
    #[case(None, 0.0)]
    fn test_parse_percent(#[case] input: Option<&str>, #[case] expected: f64) {
        assert_eq!(parse_percent(input), expected);
    }

    #[rstest]
    #[case(Some("49.9%"), EngagementStatus::LowEngagement)]
    #[case(Some("50%"), EngagementStatus::Active)]
    #[case(Some("89%"), EngagementStatus::Active)]
    #[case(Some("0x40%"), EngagementStatus::Active)]
    #[case(Some("0b11%"), EngagementStatus::LowEngagement)]
    #[case(Some("garbage"), EngagementStatus::LowEngagement)]
    #[case(None, EngagementStatus::LowEngagement)]
    fn test_classify(#[case] input: Option<&str>, #[case] expected: EngagementStatus) {
        assert_eq!(EngagementStatus::classify(input), expected);
    }

    #[test]
    fn test_status_derived_from_record() {
        let low = EngagementRecord::new("Tyson Ngo", "tyson@gmail.com", "30 Jun 2024", "ML Intern", "40%");
        let high = EngagementRecord::new("Jason Susanto", "jsPRX@gmail.com", "30 Jun 2024", "ML Intern", "89%");
        assert_eq!(low.status(), EngagementStatus::LowEngagement);
        assert_eq!(high.status(), EngagementStatus::Active);
    }

    #[test]
    fn test_record_uses_camel_case_fields() {
        let record = EngagementRecord::new("Tyson Ngo", "tyson@gmail.com", "30 Jun 2024", "ML Intern", "40%");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["appliedDate"], "30 Jun 2024");
        assert_eq!(json["engagementRate"], "40%");
        assert!(json.get("status").is_none());
    }

    proptest! {
        #[test]
        fn prop_classify_matches_threshold(rate in -1000.0f64..1000.0) {
            let text = format!("{}%", rate);
            let expected = if rate >= 50.0 {
                EngagementStatus::Active
            } else {
                EngagementStatus::LowEngagement
            };
            prop_assert_eq!(EngagementStatus::classify(Some(&text)), expected);
        }

        #[test]
        fn prop_malformed_is_low_engagement(text in "[a-zA-Z ]{1,12}") {
            prop_assume!(text.trim().parse::<f64>().is_err());
            prop_assert_eq!(EngagementStatus::classify(Some(&text)), EngagementStatus::LowEngagement);
        }
    }
}
