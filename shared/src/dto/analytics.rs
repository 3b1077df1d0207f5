use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{
    certification::{CertificationCategory, CompletedInput},
    engagement::{EngagementRecord, EngagementStatus},
};

/// Tabs on the analytics page
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum DashboardTab {
    #[default]
    ActiveUsers,
    Engagement,
    Certifications,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 3] = [
        DashboardTab::ActiveUsers,
        DashboardTab::Engagement,
        DashboardTab::Certifications,
    ];

    /// Tab button and breadcrumb label
    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::ActiveUsers => "Active Users",
            DashboardTab::Engagement => "Engagement Rate",
            DashboardTab::Certifications => "Certifications",
        }
    }

    /// Heading above the table
    pub fn table_title(&self) -> &'static str {
        match self {
            DashboardTab::ActiveUsers => "All Active Users",
            DashboardTab::Engagement => "Recent applicants",
            DashboardTab::Certifications => "Certifications",
        }
    }
}

/// Engagement row with its derived status attached for display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EngagementRowDto {
    #[serde(flatten)]
    pub record: EngagementRecord,
    pub status: EngagementStatus,
}

impl From<&EngagementRecord> for EngagementRowDto {
    fn from(record: &EngagementRecord) -> Self {
        Self {
            record: record.clone(),
            status: record.status(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateCategoryRequest {
    pub category: CertificationCategory,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateCompletedRequest {
    pub completed: CompletedInput,
}

/// `?q=` on list endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SearchParams {
    #[validate(length(max = 200, message = "Search query must be at most 200 characters"))]
    pub q: Option<String>,
}

impl SearchParams {
    pub fn query(&self) -> &str {
        self.q.as_deref().unwrap_or("")
    }
}
