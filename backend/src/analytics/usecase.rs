use crate::analytics::repository::AnalyticsRepository;
use shared::applicant::find_certification;
use shared::{
    retain_matching, ActiveUser, ApplicantProfile, CertificationCategory,
    CertificationEdit, CertificationRecord, CompletedInput, EngagementRowDto, Result,
    SharedError, StatCard,
};

#[async_trait::async_trait]
pub trait AnalyticsUseCase: Send + Sync {
    async fn get_stats(&self) -> Result<Vec<StatCard>>;
    async fn search_active_users(&self, query: &str) -> Result<Vec<ActiveUser>>;
    async fn search_engagement(&self, query: &str) -> Result<Vec<EngagementRowDto>>;
    async fn search_certifications(&self, query: &str) -> Result<Vec<CertificationRecord>>;
    async fn update_category(
        &self,
        id: u32,
        category: CertificationCategory,
    ) -> Result<CertificationRecord>;
    async fn update_completed(&self, id: u32, input: CompletedInput)
        -> Result<CertificationRecord>;
    async fn get_applicant_credentials(
        &self,
        raw_id: &str,
        query: &str,
    ) -> Result<ApplicantProfile>;
}

pub struct AnalyticsUseCaseImpl<R: AnalyticsRepository> {
    pub repo: R,
}

impl<R: AnalyticsRepository> AnalyticsUseCaseImpl<R> {
    async fn edit(&self, edit: CertificationEdit) -> Result<CertificationRecord> {
        match self.repo.apply_edit(&edit).await {
            Some(record) => {
                log::info!("Applied {:?}", edit);
                Ok(record)
            }
            None => {
                log::warn!("Ignoring edit for unknown certification {}", edit.id());
                Err(SharedError::NotFound(format!(
                    "Certification {} not found",
                    edit.id()
                )))
            }
        }
    }
}

#[async_trait::async_trait]
impl<R: AnalyticsRepository> AnalyticsUseCase for AnalyticsUseCaseImpl<R> {
    async fn get_stats(&self) -> Result<Vec<StatCard>> {
        Ok(self.repo.stat_cards().await)
    }

    async fn search_active_users(&self, query: &str) -> Result<Vec<ActiveUser>> {
        Ok(retain_matching(query, self.repo.active_users().await))
    }

    async fn search_engagement(&self, query: &str) -> Result<Vec<EngagementRowDto>> {
        let records = retain_matching(query, self.repo.engagement_records().await);
        Ok(records.iter().map(EngagementRowDto::from).collect())
    }

    async fn search_certifications(&self, query: &str) -> Result<Vec<CertificationRecord>> {
        Ok(retain_matching(query, self.repo.certifications().await))
    }

    async fn update_category(
        &self,
        id: u32,
        category: CertificationCategory,
    ) -> Result<CertificationRecord> {
        self.edit(CertificationEdit::SetCategory { id, category }).await
    }

    async fn update_completed(
        &self,
        id: u32,
        input: CompletedInput,
    ) -> Result<CertificationRecord> {
        self.edit(CertificationEdit::SetCompleted { id, input }).await
    }

    async fn get_applicant_credentials(
        &self,
        raw_id: &str,
        query: &str,
    ) -> Result<ApplicantProfile> {
        let records = self.repo.certifications().await;
        let applicant = find_certification(raw_id, &records).cloned().ok_or_else(|| {
            log::debug!("No applicant for id {:?}", raw_id);
            SharedError::NotFound("Applicant not found".to_string())
        })?;
        let credentials = self.repo.credentials_for(&applicant.email).await;

        Ok(ApplicantProfile {
            applicant,
            credentials: retain_matching(query, credentials),
        })
    }
}
