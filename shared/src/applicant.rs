use serde::{Deserialize, Serialize};

use crate::models::{certification::CertificationRecord, credential::Credential};
use crate::numeric::parse_numeric;
use crate::search::filter_records;

/// Reads a record id from a URL segment. Accepts anything that coerces to a
/// whole, non-negative number ("2", " 2 ", "2.0", "0x2"); everything else is `None`.
pub fn parse_record_id(raw: &str) -> Option<u32> {
    let num = parse_numeric(raw)?;
    if !num.is_finite() || num.fract() != 0.0 || num < 0.0 || num > f64::from(u32::MAX) {
        return None;
    }
    Some(num as u32)
}

pub fn find_certification<'a>(
    raw_id: &str,
    records: &'a [CertificationRecord],
) -> Option<&'a CertificationRecord> {
    let id = parse_record_id(raw_id)?;
    records.iter().find(|record| record.id == id)
}

/// A resolved applicant together with their credentials
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApplicantProfile {
    pub applicant: CertificationRecord,
    pub credentials: Vec<Credential>,
}

impl ApplicantProfile {
    pub fn filtered_credentials(&self, query: &str) -> Vec<&Credential> {
        filter_records(query, &self.credentials)
    }
}

/// Outcome of resolving a detail-page id
#[derive(Debug, Clone, PartialEq)]
pub enum ApplicantLookup {
    Found(ApplicantProfile),
    NotFound,
}

impl ApplicantLookup {
    pub fn profile(&self) -> Option<&ApplicantProfile> {
        match self {
            ApplicantLookup::Found(profile) => Some(profile),
            ApplicantLookup::NotFound => None,
        }
    }

    pub fn into_profile(self) -> Option<ApplicantProfile> {
        match self {
            ApplicantLookup::Found(profile) => Some(profile),
            ApplicantLookup::NotFound => None,
        }
    }
}

/// Resolves `raw_id` against `records` and loads the applicant's credentials by
/// email. A missing email key gives an empty list.
pub fn resolve_applicant<F>(
    raw_id: &str,
    records: &[CertificationRecord],
    credentials_for: F,
) -> ApplicantLookup
where
    F: FnOnce(&str) -> Vec<Credential>,
{
    match find_certification(raw_id, records) {
        Some(applicant) => {
            let credentials = credentials_for(&applicant.email);
            log::debug!(
                "Resolved applicant {} ({} credentials)",
                applicant.id,
                credentials.len()
            );
            ApplicantLookup::Found(ApplicantProfile {
                applicant: applicant.clone(),
                credentials,
            })
        }
        None => {
            log::debug!("No applicant for id {:?}", raw_id);
            ApplicantLookup::NotFound
        }
    }
}
