use std::collections::BTreeSet;

use axum::http::StatusCode;
use tracing::debug;

use super::classifier::{Bucket, CandidateClassifier};
use super::domain::{columns, CandidateRecord, JobPosting};
use super::loader::TableLoader;
use super::scores::mock_scores;
use super::table::RawTable;
use super::views::{CandidateProfileView, CandidateStatusView, CandidateView, DashboardMetrics};

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("No data available")]
    DataUnavailable,
    #[error("Candidate not found")]
    NotFound { name: String },
}

impl DashboardError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::DataUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }
}

/// Builds every dashboard view from freshly loaded tables. Nothing is retained between calls.
pub struct DashboardService {
    loader: TableLoader,
}

impl DashboardService {
    pub fn new(loader: TableLoader) -> Self {
        Self { loader }
    }

    /// Headline counts. Fails only when the roster itself is unavailable; a missing jobs
    /// table reports zero open jobs.
    pub async fn metrics(&self) -> Result<DashboardMetrics, DashboardError> {
        let (candidates, jobs) =
            tokio::join!(self.loader.load_candidates(), self.loader.load_jobs());

        if candidates.is_empty() {
            return Err(DashboardError::DataUnavailable);
        }

        let records = to_records(&candidates.table);
        let statuses: BTreeSet<&str> =
            records.iter().map(|record| record.status.as_str()).collect();
        debug!(?statuses, "distinct roster statuses");

        let classifier = CandidateClassifier::new(&records);
        Ok(DashboardMetrics {
            total_candidates: classifier.total_candidates(),
            ready_for_placement: classifier.count(Bucket::ReadyForPlacement),
            in_training: classifier.count(Bucket::InTraining),
            offer_pending: classifier.count(Bucket::OfferPending),
            open_jobs: jobs.table.len(),
            data_source: candidates.source,
        })
    }

    pub async fn ready_for_placement(&self) -> Vec<CandidateView> {
        self.bucket_view(Bucket::ReadyForPlacement).await
    }

    pub async fn in_training(&self) -> Vec<CandidateView> {
        self.bucket_view(Bucket::InTraining).await
    }

    pub async fn offer_pending(&self) -> Vec<CandidateView> {
        self.bucket_view(Bucket::OfferPending).await
    }

    pub async fn all_candidates(&self) -> Vec<CandidateStatusView> {
        let records = self.roster().await;
        CandidateClassifier::new(&records)
            .all_candidates()
            .into_iter()
            .map(CandidateStatusView::from)
            .collect()
    }

    /// Exact, case-sensitive name lookup; the first matching row wins.
    pub async fn candidate_profile(
        &self,
        name: &str,
    ) -> Result<CandidateProfileView, DashboardError> {
        let candidates = self.loader.load_candidates().await;
        if candidates.is_empty() {
            return Err(DashboardError::DataUnavailable);
        }

        // Matched on the raw cell so a nameless row never answers to the placeholder.
        let record = candidates
            .table
            .rows()
            .find(|row| row.get(columns::NAME) == Some(name))
            .map(|row| CandidateRecord::from_row(&row))
            .ok_or_else(|| DashboardError::NotFound {
                name: name.to_string(),
            })?;

        Ok(CandidateProfileView {
            candidate: CandidateView::from(&record),
            scores: mock_scores(name),
        })
    }

    pub async fn open_positions(&self) -> Vec<JobPosting> {
        let jobs = self.loader.load_jobs().await;
        jobs.table
            .rows()
            .map(|row| JobPosting::from_row(&row))
            .collect()
    }

    async fn bucket_view(&self, bucket: Bucket) -> Vec<CandidateView> {
        let records = self.roster().await;
        CandidateClassifier::new(&records)
            .members(bucket)
            .into_iter()
            .map(CandidateView::from)
            .collect()
    }

    async fn roster(&self) -> Vec<CandidateRecord> {
        let candidates = self.loader.load_candidates().await;
        to_records(&candidates.table)
    }
}

fn to_records(table: &RawTable) -> Vec<CandidateRecord> {
    table
        .rows()
        .map(|row| CandidateRecord::from_row(&row))
        .collect()
}
