//! Application packages: tailored resume, cover letter, case stories, and an
//! optimization report, written to the company folder.

pub mod analysis;
pub mod cover_letter;
pub mod report;
pub mod resume;
pub mod stories;

use crate::config::Config;
use crate::error::{JobkitError, Result};
use crate::fs::atomic_write_file;
use crate::pipeline::ResearchFindings;
use crate::profile::{CandidateProfile, CaseStory};
use crate::workspace::{Workspace, file_stem};
use analysis::{JobAnalysis, analyze_job_description};
use chrono::NaiveDate;
use cover_letter::CoverLetter;
use report::OptimizationSummary;
use resume::TailoredResume;
use std::path::PathBuf;
use tracing::{debug, info};

pub const REPORT_FILE: &str = "Application_Optimization_Report.json";

#[derive(Debug)]
pub struct ApplicationRequest<'a> {
    pub company: &'a str,
    pub role: &'a str,
    pub job_description: Option<&'a str>,
    pub date: NaiveDate,
}

/// Everything generated for one application, before it is written.
#[derive(Debug, Clone)]
pub struct ApplicationPackage {
    pub company_name: String,
    pub role_title: String,
    pub analysis: Option<JobAnalysis>,
    pub resume: TailoredResume,
    pub cover_letter: CoverLetter,
    pub case_stories: Vec<CaseStory>,
    pub summary: OptimizationSummary,
}

pub fn build_package(
    config: &Config,
    profile: &CandidateProfile,
    research: Option<&ResearchFindings>,
    request: &ApplicationRequest<'_>,
) -> ApplicationPackage {
    let analysis = request.job_description.map(analyze_job_description);
    if let Some(analysis) = &analysis {
        debug!(keywords = analysis.keyword_count(), "analyzed job description");
    }
    let empty = JobAnalysis::default();
    let used = analysis.as_ref().unwrap_or(&empty);

    let resume = resume::tailor_resume(
        &config.user_profile,
        profile,
        request.company,
        request.role,
        used,
    );
    let cover_letter = cover_letter::draft_cover_letter(
        profile,
        &config.user_profile.name,
        request.company,
        request.role,
        research,
        request.date,
    );
    let case_stories = stories::select_case_stories(&profile.case_stories, request.role, used)
        .into_iter()
        .cloned()
        .collect();
    let summary = report::optimization_summary(
        request.company,
        request.role,
        analysis.as_ref(),
        &resume.to_markdown(),
        request.date,
    );

    ApplicationPackage {
        company_name: request.company.to_string(),
        role_title: request.role.to_string(),
        analysis,
        resume,
        cover_letter,
        case_stories,
        summary,
    }
}

impl ApplicationPackage {
    /// Write the four package files, returning their paths.
    pub fn write(&self, ws: &Workspace) -> Result<Vec<PathBuf>> {
        let dir = ws.company_dir(&self.company_name);
        let company = file_stem(&self.company_name);

        let resume_path = dir.join(format!(
            "{}_{}_Resume.md",
            file_stem(&self.resume.header.name),
            company
        ));
        let letter_path = dir.join(format!("{}_Cover_Letter.md", company));
        let stories_path = dir.join(format!("Relevant_Case_Stories_{}.md", company));
        let report_path = dir.join(REPORT_FILE);

        let story_refs: Vec<&CaseStory> = self.case_stories.iter().collect();
        let mut report = serde_json::to_string_pretty(&self.summary).map_err(|e| {
            JobkitError::DataError(format!(
                "failed to serialize optimization report: {}",
                e
            ))
        })?;
        report.push('\n');

        atomic_write_file(&resume_path, &self.resume.to_markdown())?;
        atomic_write_file(&letter_path, &self.cover_letter.to_markdown())?;
        atomic_write_file(
            &stories_path,
            &stories::render_case_stories(&self.company_name, &self.role_title, &story_refs),
        )?;
        atomic_write_file(&report_path, &report)?;
        info!(company = %self.company_name, dir = %dir.display(), "application package written");

        Ok(vec![resume_path, letter_path, stories_path, report_path])
    }
}
