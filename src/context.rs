//! Loaded workspace state for commands.
//!
//! Every command except `init` starts by loading the config, the candidate
//! profile, and the pipeline from an initialized workspace, and ends by
//! saving the pipeline and appending to the activity log.

use crate::activity::{Activity, append_activity};
use crate::config::Config;
use crate::error::{JobkitError, Result};
use crate::pipeline::{Pipeline, ResearchFindings};
use crate::profile::CandidateProfile;
use crate::research::DEFAULT_ROLE;
use crate::workspace::Workspace;
use tracing::debug;

/// Workspace plus the documents every command reads.
#[derive(Debug)]
pub struct JobContext {
    pub ws: Workspace,
    pub config: Config,
    pub profile: CandidateProfile,
    pub pipeline: Pipeline,
}

impl JobContext {
    /// Load everything from an initialized workspace.
    pub fn load(ws: Workspace) -> Result<Self> {
        ensure_initialized(&ws)?;
        let config = Config::load(ws.config_path())?;
        let profile = CandidateProfile::load_or_init(ws.profile_path())?;
        let pipeline = Pipeline::load(ws.pipeline_path())?;
        debug!(
            root = %ws.root.display(),
            companies = pipeline.companies.len(),
            "loaded workspace"
        );
        Ok(Self {
            ws,
            config,
            profile,
            pipeline,
        })
    }

    pub fn save_pipeline(&self) -> Result<()> {
        self.pipeline.save(self.ws.pipeline_path())
    }

    pub fn log(&self, activity: &Activity) -> Result<()> {
        append_activity(&self.ws, activity)
    }

    /// The explicit role, else the one recorded during research, else
    /// [`DEFAULT_ROLE`].
    pub fn role_for(&self, company: &str, explicit: Option<&str>) -> String {
        explicit
            .map(str::to_string)
            .or_else(|| {
                self.pipeline
                    .get(company)
                    .and_then(|r| r.role_title.clone())
            })
            .unwrap_or_else(|| DEFAULT_ROLE.to_string())
    }

    /// Research findings for a company, if it has been researched.
    pub fn research_for(&self, company: &str) -> Option<&ResearchFindings> {
        self.pipeline.get(company).and_then(|r| r.research.as_ref())
    }

    /// The name as recorded in the pipeline, or as typed.
    pub fn display_name(&self, company: &str) -> String {
        self.pipeline
            .get(company)
            .map(|r| r.name.clone())
            .unwrap_or_else(|| company.trim().to_string())
    }
}

/// Fail with a pointer to `jobkit init` when the workspace has no config.
pub fn ensure_initialized(ws: &Workspace) -> Result<()> {
    let config_path = ws.config_path();
    if !config_path.is_file() {
        return Err(JobkitError::UserError(format!(
            "jobkit workspace not initialized.\n\
             Expected config at: {}\n\n\
             Run `jobkit init` to set up a workspace here, or pass --root.",
            config_path.display()
        )));
    }
    Ok(())
}
