//! Candidate roster and open-position views.
//!
//! Both published exports are fetched on every call, parsed into raw tables, normalized into
//! typed records and then bucketed for the dashboard counts and lists.

pub mod classifier;
pub mod domain;
pub mod loader;
pub mod normalizer;
pub mod router;
pub mod scores;
pub mod service;
pub mod source;
pub mod table;
pub mod views;

pub use classifier::{Bucket, CandidateClassifier};
pub use domain::{CandidateRecord, JobPosting, Week, PLACEHOLDER};
pub use loader::{LoadedTable, TableLoader, ERROR_LABEL};
pub use router::dashboard_router;
pub use scores::{mock_scores, ScoreBundle};
pub use service::{DashboardError, DashboardService};
pub use source::{CsvSource, FetchError, FileCsvSource, HttpCsvSource, InMemoryCsvSource};
pub use views::{CandidateProfileView, CandidateStatusView, CandidateView, DashboardMetrics};
