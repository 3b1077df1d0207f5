use serde::{Deserialize, Serialize};
use std::fmt;

/// Membership status shown in the active-users table
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum UserStatus {
    #[serde(rename = "ACTIVE")]
    Active,
    #[serde(rename = "INACTIVE")]
    Inactive,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "ACTIVE",
            UserStatus::Inactive => "INACTIVE",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An alumni member listed as a platform user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActiveUser {
    pub name: String,
    pub company: String,
    pub phone: String,
    pub email: String,
    pub country: String,
    pub status: UserStatus,
}

impl ActiveUser {
    pub fn new(
        name: &str,
        company: &str,
        phone: &str,
        email: &str,
        country: &str,
        status: UserStatus,
    ) -> Self {
        Self {
            name: name.to_string(),
            company: company.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
            country: country.to_string(),
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_serializes_uppercase() {
        let user = ActiveUser::new(
            "Jerome Bell",
            "Google",
            "(63) 938-555-0129",
            "jerome@google.com",
            "Japan",
            UserStatus::Active,
        );
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["status"], "ACTIVE");
        assert_eq!(user.status, UserStatus::Active);
    }

    #[test]
    fn test_status_deserializes() {
        let status: UserStatus = serde_json::from_str("\"INACTIVE\"").unwrap();
        assert_eq!(status, UserStatus::Inactive);
        assert_eq!(status.to_string(), "INACTIVE");
    }
}
