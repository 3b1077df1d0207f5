pub mod models {
    pub mod alumni;
    pub mod certification;
    pub mod credential;
    pub mod engagement;
    pub mod stats;
}

pub mod dto {
    pub mod analytics;
}

pub mod applicant;
pub mod directory;
pub mod display;
pub mod edits;
pub mod error;
pub mod numeric;
pub mod search;

// Re-export commonly used items
pub use error::{Result, SharedError};

// Re-export models
pub use models::{
    alumni::{ActiveUser, UserStatus},
    certification::{CertificationCategory, CertificationRecord, Completed, CompletedInput},
    credential::Credential,
    engagement::{parse_percent, EngagementRecord, EngagementStatus},
    stats::StatCard,
};

// Re-export DTOs
pub use dto::analytics::{
    DashboardTab, EngagementRowDto, SearchParams, UpdateCategoryRequest, UpdateCompletedRequest,
};

// Re-export core logic
pub use applicant::{parse_record_id, resolve_applicant, ApplicantLookup, ApplicantProfile};
pub use directory::{DirectoryRepository, MockDirectory};
pub use edits::{apply_edit, set_category, set_completed, CertificationEdit};
pub use search::{filter_records, retain_matching, Searchable};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_certification_scenario() {
        let directory = MockDirectory::seeded();
        let mut records = directory.certifications();

        set_category(&mut records, 2, CertificationCategory::Sa);
        set_completed(&mut records, 1, &CompletedInput::from("-5"));

        assert_eq!(records[0].completed, Completed::Count(0));
        assert_eq!(records[1].category, CertificationCategory::Sa);
        assert_eq!(records[2], directory.certifications()[2]);

        let lookup = resolve_applicant("1", &records, |email| directory.credentials_for(email));
        assert_eq!(lookup.profile().map(|p| p.credentials.len()), Some(3));
        assert_eq!(
            resolve_applicant("99", &records, |email| directory.credentials_for(email)),
            ApplicantLookup::NotFound
        );
    }

    #[test]
    fn test_filter_then_classify() {
        let engagement = MockDirectory::seeded().engagement_records();
        let rows: Vec<EngagementRowDto> = filter_records("ml", &engagement)
            .into_iter()
            .map(EngagementRowDto::from)
            .collect();
        let statuses: Vec<EngagementStatus> = rows.iter().map(|r| r.status).collect();
        assert_eq!(
            statuses,
            vec![EngagementStatus::LowEngagement, EngagementStatus::Active]
        );
    }
}
