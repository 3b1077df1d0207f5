use shared::{
    apply_edit, ActiveUser, CertificationEdit, CertificationRecord, Credential, DirectoryRepository,
    EngagementRecord, MockDirectory, StatCard,
};
use std::sync::Arc;
use tokio::sync::RwLock;

#[async_trait::async_trait]
pub trait AnalyticsRepository: Send + Sync {
    async fn stat_cards(&self) -> Vec<StatCard>;
    async fn active_users(&self) -> Vec<ActiveUser>;
    async fn engagement_records(&self) -> Vec<EngagementRecord>;
    /// Current certification list, edits included
    async fn certifications(&self) -> Vec<CertificationRecord>;
    /// Returns the edited record, or `None` when the id is unknown
    async fn apply_edit(&self, edit: &CertificationEdit) -> Option<CertificationRecord>;
    async fn credentials_for(&self, email: &str) -> Vec<Credential>;
}

/// Serves read-only collections straight from a directory and keeps the
/// editable certification list behind a shared lock.
#[derive(Clone)]
pub struct InMemoryAnalyticsRepository {
    directory: Arc<dyn DirectoryRepository>,
    certifications: Arc<RwLock<Vec<CertificationRecord>>>,
}

impl InMemoryAnalyticsRepository {
    pub fn from_directory(directory: Arc<dyn DirectoryRepository>) -> Self {
        let certifications = directory.certifications();
        log::info!(
            "Analytics repository seeded with {} certification records",
            certifications.len()
        );
        Self {
            directory,
            certifications: Arc::new(RwLock::new(certifications)),
        }
    }

    pub fn seeded() -> Self {
        Self::from_directory(Arc::new(MockDirectory::seeded()))
    }
}

#[async_trait::async_trait]
impl AnalyticsRepository for InMemoryAnalyticsRepository {
    async fn stat_cards(&self) -> Vec<StatCard> {
        self.directory.stat_cards()
    }

    async fn active_users(&self) -> Vec<ActiveUser> {
        self.directory.active_users()
    }

    async fn engagement_records(&self) -> Vec<EngagementRecord> {
        self.directory.engagement_records()
    }

    async fn certifications(&self) -> Vec<CertificationRecord> {
        self.certifications.read().await.clone()
    }

    async fn apply_edit(&self, edit: &CertificationEdit) -> Option<CertificationRecord> {
        let mut records = self.certifications.write().await;
        apply_edit(&mut records, edit).cloned()
    }

    async fn credentials_for(&self, email: &str) -> Vec<Credential> {
        self.directory.credentials_for(email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared::{CertificationCategory, Completed, CompletedInput};

    #[tokio::test]
    async fn test_edits_are_visible_to_later_reads() {
        let repo = InMemoryAnalyticsRepository::seeded();

        let updated = repo
            .apply_edit(&CertificationEdit::SetCategory {
                id: 2,
                category: CertificationCategory::Sa,
            })
            .await;
        assert_eq!(updated.map(|r| r.category), Some(CertificationCategory::Sa));

        let records = repo.certifications().await;
        assert_eq!(records[1].category, CertificationCategory::Sa);
        assert_eq!(records[0].category, CertificationCategory::WebDev);
    }

    #[tokio::test]
    async fn test_unknown_id_leaves_list_unchanged() {
        let repo = InMemoryAnalyticsRepository::seeded();
        let before = repo.certifications().await;

        let result = repo
            .apply_edit(&CertificationEdit::SetCompleted {
                id: 99,
                input: CompletedInput::from("7"),
            })
            .await;

        assert!(result.is_none());
        assert_eq!(repo.certifications().await, before);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let repo = InMemoryAnalyticsRepository::seeded();
        let other = repo.clone();

        other
            .apply_edit(&CertificationEdit::SetCompleted {
                id: 1,
                input: CompletedInput::from(""),
            })
            .await;

        assert_eq!(repo.certifications().await[0].completed, Completed::Cleared);
    }

    #[tokio::test]
    async fn test_directory_passthrough() {
        let repo = InMemoryAnalyticsRepository::seeded();

        assert_eq!(repo.stat_cards().await.len(), 3);
        assert_eq!(repo.active_users().await.len(), 5);
        assert_eq!(repo.engagement_records().await.len(), 2);
        assert!(repo.credentials_for("nobody@example.com").await.is_empty());
    }
}
