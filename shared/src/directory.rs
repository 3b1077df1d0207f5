use std::collections::HashMap;

use crate::models::{
    alumni::{ActiveUser, UserStatus},
    certification::{CertificationCategory, CertificationRecord},
    credential::Credential,
    engagement::EngagementRecord,
    stats::StatCard,
};

/// Source of the records shown on the dashboard.
///
/// Views and handlers only see record shapes, so a remote source can replace
/// the in-memory one without touching the filter or edit logic.
pub trait DirectoryRepository: Send + Sync {
    fn stat_cards(&self) -> Vec<StatCard>;
    fn active_users(&self) -> Vec<ActiveUser>;
    fn engagement_records(&self) -> Vec<EngagementRecord>;
    fn certifications(&self) -> Vec<CertificationRecord>;
    /// Credentials keyed by applicant email. Unknown emails yield an empty list.
    fn credentials_for(&self, email: &str) -> Vec<Credential>;
}

/// In-memory directory
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MockDirectory {
    pub stat_cards: Vec<StatCard>,
    pub active_users: Vec<ActiveUser>,
    pub engagement: Vec<EngagementRecord>,
    pub certifications: Vec<CertificationRecord>,
    pub credentials_by_email: HashMap<String, Vec<Credential>>,
}

impl MockDirectory {
    /// The sample data the dashboard ships with
    pub fn seeded() -> Self {
        let stat_cards = vec![
            StatCard::new("Engagement Rate", "5,423", "This month"),
            StatCard::new("Active Users", "1,893", "This month"),
            StatCard::new("Certification Completed", "189", "This month"),
        ];

        let active_users = vec![
            ActiveUser::new("Mark Zuckerberg", "Facebook", "(63) 994-555-0118", "markZ@fb.com", "United States", UserStatus::Active),
            ActiveUser::new("Floyd Miles", "Yahoo", "(63) 975-666-0100", "floyd@yahoo.com", "UK", UserStatus::Inactive),
            ActiveUser::new("Ronald Richards", "Adobe", "(63) 957-555-0107", "ronald@adobe.com", "Israel", UserStatus::Inactive),
            ActiveUser::new("Marvin McKinney", "Tesla", "(63) 974-555-0126", "marvin@tesla.com", "Iran", UserStatus::Active),
            ActiveUser::new("Jerome Bell", "Google", "(63) 938-555-0129", "jerome@google.com", "Japan", UserStatus::Active),
        ];

        let engagement = vec![
            EngagementRecord::new("Tyson Ngo", "tyson@gmail.com", "30 Jun 2024", "ML Intern", "40%"),
            EngagementRecord::new("Jason Susanto", "jsPRX@gmail.com", "30 Jun 2024", "ML Intern", "89%"),
        ];

        let certifications = vec![
            CertificationRecord::new(1, "Aspas", "aspas@gmail.com", "30 Jun 2024", CertificationCategory::WebDev, 0),
            CertificationRecord::new(2, "PatMen", "GEPatment@gmail.com", "30 Jun 2024", CertificationCategory::Qa, 0),
            CertificationRecord::new(3, "Zach", "zekken@gmail.com", "30 Jun 2024", CertificationCategory::Sa, 0),
        ];

        let mut credentials_by_email = HashMap::new();
        credentials_by_email.insert(
            "aspas@gmail.com".to_string(),
            vec![
                Credential::new("JavaScript", "FreeCodeCamp", "Jun 2024", "Fundamentals + DOM + ES6"),
                Credential::new("React", "Meta", "Jul 2024", "Components, Hooks, SPA basics"),
                Credential::new("Git & GitHub", "Coursera", "Aug 2024", "Version control workflow"),
            ],
        );
        credentials_by_email.insert(
            "GEPatment@gmail.com".to_string(),
            vec![
                Credential::new("Software Testing", "ISTQB", "May 2024", "Testing basics, test design"),
                Credential::new("API Testing", "Postman", "Jun 2024", "Collections, environments"),
            ],
        );
        credentials_by_email.insert(
            "zekken@gmail.com".to_string(),
            vec![
                Credential::new("Systems Analysis", "Google", "Apr 2024", "Requirements, modeling"),
                Credential::new("UML Basics", "Coursera", "May 2024", "Use case, activity diagrams"),
            ],
        );

        Self {
            stat_cards,
            active_users,
            engagement,
            certifications,
            credentials_by_email,
        }
    }
}

impl DirectoryRepository for MockDirectory {
    fn stat_cards(&self) -> Vec<StatCard> {
        self.stat_cards.clone()
    }

    fn active_users(&self) -> Vec<ActiveUser> {
        self.active_users.clone()
    }

    fn engagement_records(&self) -> Vec<EngagementRecord> {
        self.engagement.clone()
    }

    fn certifications(&self) -> Vec<CertificationRecord> {
        self.certifications.clone()
    }

    fn credentials_for(&self, email: &str) -> Vec<Credential> {
        self.credentials_by_email
            .get(email)
            .cloned()
            .unwrap_or_default()
    }
}
