use serde::Serialize;

use super::domain::{CandidateRecord, Week};
use super::scores::ScoreBundle;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardMetrics {
    pub total_candidates: usize,
    pub ready_for_placement: usize,
    pub in_training: usize,
    pub offer_pending: usize,
    pub open_jobs: usize,
    pub data_source: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateView {
    pub name: String,
    pub training_site: String,
    pub location: String,
    pub week: Week,
    pub level: String,
    pub salary: f64,
}

impl From<&CandidateRecord> for CandidateView {
    fn from(record: &CandidateRecord) -> Self {
        Self {
            name: record.name.clone(),
            training_site: record.training_site.clone(),
            location: record.location.clone(),
            week: record.week,
            level: record.level.clone(),
            salary: record.salary,
        }
    }
}

/// Candidate entry for the combined roster listing, which also shows the status.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateStatusView {
    pub name: String,
    pub training_site: String,
    pub location: String,
    pub week: Week,
    pub level: String,
    pub status: String,
    pub salary: f64,
}

impl From<&CandidateRecord> for CandidateStatusView {
    fn from(record: &CandidateRecord) -> Self {
        Self {
            name: record.name.clone(),
            training_site: record.training_site.clone(),
            location: record.location.clone(),
            week: record.week,
            level: record.level.clone(),
            status: record.status.clone(),
            salary: record.salary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateProfileView {
    #[serde(flatten)]
    pub candidate: CandidateView,
    pub scores: ScoreBundle,
}
