//! Workspace layout and path resolution.
//!
//! A workspace is a plain directory holding the job search state:
//!
//! ```text
//! <root>/
//!   config/job_search_config.json
//!   config/candidate_profile.json
//!   data/application_pipeline.json
//!   data/activity.ndjson
//!   templates/
//!   Applications/<company_key>/
//!   Applications/<company_key>/cold_emails/
//!   Pipeline_Dashboard.md
//! ```
//!
//! Every command resolves the root the same way: an explicit `--root`, then
//! `JOBKIT_ROOT`, then the nearest ancestor of the current directory that
//! already holds `config/job_search_config.json`, then the current directory.

use crate::error::{JobkitError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the workspace root.
pub const ROOT_ENV_VAR: &str = "JOBKIT_ROOT";

const CONFIG_DIR: &str = "config";
const DATA_DIR: &str = "data";
const TEMPLATES_DIR: &str = "templates";
const APPLICATIONS_DIR: &str = "Applications";
const CONFIG_FILE: &str = "job_search_config.json";

/// Resolved absolute paths for a workspace.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub root: PathBuf,
}

impl Workspace {
    /// Resolve the workspace, honoring an explicit root first.
    pub fn resolve(explicit_root: Option<&Path>) -> Result<Self> {
        if let Some(root) = explicit_root {
            return Ok(Self::at(absolute(root)?));
        }

        if let Some(root) = env::var_os(ROOT_ENV_VAR).filter(|v| !v.is_empty()) {
            return Ok(Self::at(absolute(Path::new(&root))?));
        }

        let cwd = env::current_dir().map_err(|e| {
            JobkitError::UserError(format!("failed to get current working directory: {}", e))
        })?;
        Ok(Self::discover_from(&cwd))
    }

    /// Walk up from `start` looking for an existing workspace config.
    ///
    /// Falls back to `start` itself so a fresh directory becomes a workspace.
    pub fn discover_from(start: &Path) -> Self {
        start
            .ancestors()
            .find(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE).is_file())
            .map(Self::at)
            .unwrap_or_else(|| Self::at(start))
    }

    /// Use `root` as the workspace root without any lookup.
    pub fn at<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Create the workspace directories if they are missing.
    pub fn ensure_layout(&self) -> Result<()> {
        for dir in [
            self.config_dir(),
            self.data_dir(),
            self.templates_dir(),
            self.applications_dir(),
        ] {
            std::fs::create_dir_all(&dir).map_err(|e| {
                JobkitError::DataError(format!(
                    "failed to create directory '{}': {}",
                    dir.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    pub fn config_dir(&self) -> PathBuf {
        self.root.join(CONFIG_DIR)
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.join(DATA_DIR)
    }

    pub fn templates_dir(&self) -> PathBuf {
        self.root.join(TEMPLATES_DIR)
    }

    pub fn applications_dir(&self) -> PathBuf {
        self.root.join(APPLICATIONS_DIR)
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_dir().join(CONFIG_FILE)
    }

    pub fn profile_path(&self) -> PathBuf {
        self.config_dir().join("candidate_profile.json")
    }

    pub fn pipeline_path(&self) -> PathBuf {
        self.data_dir().join("application_pipeline.json")
    }

    pub fn activity_path(&self) -> PathBuf {
        self.data_dir().join("activity.ndjson")
    }

    pub fn dashboard_path(&self) -> PathBuf {
        self.root.join("Pipeline_Dashboard.md")
    }

    /// Output folder for one company, keyed by [`company_key`].
    pub fn company_dir(&self, company: &str) -> PathBuf {
        self.applications_dir().join(company_key(company))
    }

    /// Individual email drafts for one company.
    pub fn cold_emails_dir(&self, company: &str) -> PathBuf {
        self.company_dir(company).join("cold_emails")
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = env::current_dir().map_err(|e| {
        JobkitError::UserError(format!("failed to get current working directory: {}", e))
    })?;
    Ok(cwd.join(path))
}

/// Pipeline key and folder name for a company: lowercase, spaces to underscores.
pub fn company_key(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

/// Filename fragment for a company or person: spaces to underscores, case kept.
pub fn file_stem(name: &str) -> String {
    name.trim().replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{DirGuard, EnvGuard};
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_company_key_normalizes() {
        assert_eq!(company_key("Acme Health"), "acme_health");
        assert_eq!(company_key("  Stripe "), "stripe");
        assert_eq!(company_key("ACME"), "acme");
    }

    #[test]
    fn test_file_stem_keeps_case() {
        assert_eq!(file_stem("Acme Health"), "Acme_Health");
        assert_eq!(file_stem("Jordan Lee"), "Jordan_Lee");
    }

    #[test]
    fn test_paths_hang_off_root() {
        let ws = Workspace::at("/work");
        assert_eq!(
            ws.config_path(),
            PathBuf::from("/work/config/job_search_config.json")
        );
        assert_eq!(
            ws.pipeline_path(),
            PathBuf::from("/work/data/application_pipeline.json")
        );
        assert_eq!(ws.dashboard_path(), PathBuf::from("/work/Pipeline_Dashboard.md"));
        assert_eq!(
            ws.company_dir("Acme Health"),
            PathBuf::from("/work/Applications/acme_health")
        );
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let temp_dir = TempDir::new().unwrap();
        let ws = Workspace::at(temp_dir.path());
        std::fs::create_dir_all(ws.config_dir()).unwrap();
        std::fs::write(ws.config_path(), "{}").unwrap();
        let nested = ws.applications_dir().join("acme");
        std::fs::create_dir_all(&nested).unwrap();

        let found = Workspace::discover_from(&nested);
        assert_eq!(found.root, temp_dir.path());
    }

    #[test]
    fn test_discover_falls_back_to_start() {
        let temp_dir = TempDir::new().unwrap();
        let found = Workspace::discover_from(temp_dir.path());
        assert_eq!(found.root, temp_dir.path());
    }

    #[test]
    fn test_ensure_layout_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let ws = Workspace::at(temp_dir.path());

        ws.ensure_layout().unwrap();
        ws.ensure_layout().unwrap();

        assert!(ws.config_dir().is_dir());
        assert!(ws.data_dir().is_dir());
        assert!(ws.templates_dir().is_dir());
        assert!(ws.applications_dir().is_dir());
    }

    #[test]
    #[serial]
    fn test_resolve_prefers_explicit_root() {
        let temp_dir = TempDir::new().unwrap();
        let _env = EnvGuard::set(ROOT_ENV_VAR, "/should/not/be/used");
        let ws = Workspace::resolve(Some(temp_dir.path())).unwrap();
        assert_eq!(ws.root, temp_dir.path());
    }

    #[test]
    #[serial]
    fn test_resolve_uses_env_var() {
        let temp_dir = TempDir::new().unwrap();
        let _env = EnvGuard::set(ROOT_ENV_VAR, temp_dir.path().to_str().unwrap());
        let ws = Workspace::resolve(None).unwrap();
        assert_eq!(ws.root, temp_dir.path());
    }

    #[test]
    #[serial]
    fn test_resolve_uses_current_dir() {
        let temp_dir = TempDir::new().unwrap();
        let _env = EnvGuard::unset(ROOT_ENV_VAR);
        let _guard = DirGuard::new(temp_dir.path());
        let ws = Workspace::resolve(None).unwrap();
        assert_eq!(
            ws.root.canonicalize().unwrap(),
            temp_dir.path().canonicalize().unwrap()
        );
    }
}
