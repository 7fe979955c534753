//! Pipeline dashboard.
//!
//! Everything here is computed from the pipeline document and the config
//! targets as of a given day; nothing is stored except the refreshed
//! `next_actions` snapshot, which the caller saves.

use crate::config::Config;
use crate::error::Result;
use crate::fs::atomic_write_file;
use crate::pipeline::{NextAction, Pipeline};
use crate::workspace::Workspace;
use chrono::NaiveDate;
use std::path::PathBuf;
use tracing::info;

pub mod actions;
pub mod metrics;
mod render;
pub mod summary;
#[cfg(test)]
mod tests;

use metrics::{EmailPerformance, InterviewTracking, Recommendation, SuccessMetrics, WeeklyProgress};
use summary::{CompanyStatus, PipelineSummary};

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub generated: NaiveDate,
    pub summary: PipelineSummary,
    pub companies: Vec<CompanyStatus>,
    pub metrics: SuccessMetrics,
    pub email: EmailPerformance,
    pub interviews: InterviewTracking,
    pub next_actions: Vec<NextAction>,
    pub weekly: WeeklyProgress,
    pub recommendations: Vec<Recommendation>,
}

impl Dashboard {
    pub fn build(pipeline: &Pipeline, config: &Config, today: NaiveDate) -> Self {
        let targets = &config.targets;
        let metrics = metrics::success_metrics(pipeline, targets);
        let email = metrics::email_performance(pipeline, today);
        let weekly = metrics::weekly_progress(pipeline, targets, today);
        let recommendations =
            metrics::recommendations(pipeline, targets, &metrics, &email, &weekly);

        Self {
            generated: today,
            summary: summary::summarize(pipeline),
            companies: summary::company_statuses(pipeline, today),
            interviews: metrics::interview_tracking(pipeline, today),
            next_actions: actions::next_actions(
                pipeline,
                config.email_settings.follow_up_days,
                today,
            ),
            metrics,
            email,
            weekly,
            recommendations,
        }
    }

    pub fn render(&self) -> String {
        render::render(self)
    }

    /// Write `Pipeline_Dashboard.md` at the workspace root.
    pub fn write(&self, ws: &Workspace) -> Result<PathBuf> {
        let path = ws.dashboard_path();
        atomic_write_file(&path, &self.render())?;
        info!(path = %path.display(), "wrote dashboard");
        Ok(path)
    }
}
