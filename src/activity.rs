//! Append-only activity log.
//!
//! Every command that changes the pipeline appends one JSON object per line to
//! `data/activity.ndjson`, so the history of a company survives hand edits to
//! the pipeline file.
//!
//! Each line carries:
//! - `ts`: RFC3339 timestamp
//! - `action`: what happened (`research`, `apply`, `email`, ...)
//! - `actor`: `user@host`
//! - `company`: company key, when the action concerns one company
//! - `details`: action-specific fields

use crate::error::{JobkitError, Result};
use crate::workspace::Workspace;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityAction {
    Init,
    Research,
    Disqualify,
    Apply,
    Email,
    Prep,
    Fill,
    Response,
    FollowUp,
    Interview,
    InterviewResult,
    Outcome,
    ResearchResult,
}

impl std::fmt::Display for ActivityAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ActivityAction::Init => "init",
            ActivityAction::Research => "research",
            ActivityAction::Disqualify => "disqualify",
            ActivityAction::Apply => "apply",
            ActivityAction::Email => "email",
            ActivityAction::Prep => "prep",
            ActivityAction::Fill => "fill",
            ActivityAction::Response => "response",
            ActivityAction::FollowUp => "follow_up",
            ActivityAction::Interview => "interview",
            ActivityAction::InterviewResult => "interview_result",
            ActivityAction::Outcome => "outcome",
            ActivityAction::ResearchResult => "research_result",
        };
        f.pad(s)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub ts: DateTime<Utc>,
    pub action: ActivityAction,
    pub actor: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub details: Value,
}

impl Activity {
    /// New entry stamped now, attributed to the current user.
    pub fn new(action: ActivityAction) -> Self {
        Self {
            ts: Utc::now(),
            action,
            actor: actor_string(),
            company: None,
            details: Value::Object(serde_json::Map::new()),
        }
    }

    /// Attach the company, stored by its key.
    pub fn with_company(mut self, company: &str) -> Self {
        self.company = Some(crate::workspace::company_key(company));
        self
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| JobkitError::DataError(format!("failed to serialize activity: {}", e)))
    }
}

fn actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Append one entry to the workspace activity log, creating it if needed.
pub fn append_activity(ws: &Workspace, activity: &Activity) -> Result<()> {
    let path = ws.activity_path();
    let line = activity.to_ndjson_line()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            JobkitError::DataError(format!(
                "failed to create directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| {
            JobkitError::DataError(format!(
                "failed to open activity log '{}': {}",
                path.display(),
                e
            ))
        })?;

    writeln!(file, "{}", line).map_err(|e| {
        JobkitError::DataError(format!(
            "failed to write activity log '{}': {}",
            path.display(),
            e
        ))
    })?;

    Ok(())
}

/// Read the entries for one company, oldest first.
///
/// Lines that fail to parse are skipped with a warning.
pub fn read_company_activity(ws: &Workspace, company: &str) -> Result<Vec<Activity>> {
    let path = ws.activity_path();
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = fs::File::open(&path).map_err(|e| {
        JobkitError::DataError(format!(
            "failed to open activity log '{}': {}",
            path.display(),
            e
        ))
    })?;

    let key = crate::workspace::company_key(company);
    let mut entries = Vec::new();
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|e| {
            JobkitError::DataError(format!(
                "failed to read activity log '{}': {}",
                path.display(),
                e
            ))
        })?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<Activity>(&line) {
            Ok(entry) if entry.company.as_deref() == Some(key.as_str()) => entries.push(entry),
            Ok(_) => {}
            Err(e) => warn!(line = index + 1, error = %e, "skipping unreadable activity entry"),
        }
    }
    Ok(entries)
}
