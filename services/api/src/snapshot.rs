use crate::infra::http_dashboard_service;
use clap::Args;
use mit_dashboard::config::{AppConfig, SourceLocation};
use mit_dashboard::dashboard::{Bucket, CandidateView, DashboardMetrics};
use mit_dashboard::error::AppError;
use mit_dashboard::telemetry;
use std::fmt::Write;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct SnapshotArgs {
    /// Read the candidate roster from a local CSV export instead of the configured source
    #[arg(long)]
    pub(crate) candidates_csv: Option<PathBuf>,
    /// Read the open jobs from a local CSV export instead of the configured source
    #[arg(long)]
    pub(crate) jobs_csv: Option<PathBuf>,
    /// List the candidates that are ready for placement
    #[arg(long)]
    pub(crate) list: bool,
}

pub(crate) async fn run_snapshot(args: SnapshotArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    if let Some(path) = args.candidates_csv {
        config.sources.candidates = SourceLocation::Path(path);
    }
    if let Some(path) = args.jobs_csv {
        config.sources.jobs = SourceLocation::Path(path);
    }

    telemetry::init(&config.telemetry)?;

    let service = http_dashboard_service(config.sources);
    let metrics = service.metrics().await?;
    let ready = if args.list {
        Some(service.ready_for_placement().await)
    } else {
        None
    };

    print!("{}", render_snapshot(&metrics, ready.as_deref()));
    Ok(())
}

pub(crate) fn render_snapshot(metrics: &DashboardMetrics, ready: Option<&[CandidateView]>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "MIT dashboard snapshot");
    let _ = writeln!(out, "Data source: {}", metrics.data_source);
    let _ = writeln!(out, "  Total candidates: {}", metrics.total_candidates);
    let _ = writeln!(
        out,
        "  {}: {}",
        Bucket::ReadyForPlacement.label(),
        metrics.ready_for_placement
    );
    let _ = writeln!(out, "  {}: {}", Bucket::InTraining.label(), metrics.in_training);
    let _ = writeln!(out, "  {}: {}", Bucket::OfferPending.label(), metrics.offer_pending);
    let _ = writeln!(out, "  Open jobs: {}", metrics.open_jobs);

    if let Some(candidates) = ready {
        let _ = writeln!(out, "\n{}", Bucket::ReadyForPlacement.label());
        if candidates.is_empty() {
            let _ = writeln!(out, "  none");
        }
        for candidate in candidates {
            let _ = writeln!(
                out,
                "  - {} (week {}, {}, {})",
                candidate.name, candidate.week, candidate.training_site, candidate.location
            );
        }
    }

    out
}
