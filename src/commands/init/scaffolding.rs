//! Template installation and the example application folder.

use crate::error::{JobkitError, Result};
use crate::fs::write_if_missing;
use crate::workspace::Workspace;
use std::path::PathBuf;

/// Templates shipped with the binary, installed into `templates/`.
pub(super) const BUILTIN_TEMPLATES: [(&str, &str); 3] = [
    (
        "resume_base.md",
        include_str!("../../../templates/resume_base.md"),
    ),
    (
        "cover_letter.md",
        include_str!("../../../templates/cover_letter.md"),
    ),
    (
        "case_stories.md",
        include_str!("../../../templates/case_stories.md"),
    ),
];

/// The user's working copy of the resume template.
pub(super) const PERSONAL_RESUME: &str = "my_resume.md";

pub(super) const EXAMPLE_COMPANY_DIR: &str = "00-example-company";

/// Files in the example application folder, showing the per-company layout.
pub(super) const EXAMPLE_FILES: [(&str, &str); 5] = [
    (
        "Application_Research_Notes.md",
        "# Company Research Notes\n\n*Replace with your research findings.*\n",
    ),
    (
        "Company_Resume.md",
        "# Customized Resume\n\n*Copy from templates/my_resume.md and tailor it to the role.*\n",
    ),
    (
        "Company_Cover_Letter.md",
        "# Cover Letter\n\n*Generate with `jobkit apply` or `jobkit fill cover_letter`.*\n",
    ),
    (
        "Cold_Email_Campaign.md",
        "# Email Campaign\n\n*Drafted cold emails and their follow-up schedule.*\n",
    ),
    (
        "Interview_Preparation_Guide.md",
        "# Interview Prep\n\n*Company-specific questions and STAR responses.*\n",
    ),
];

/// Install built-in templates and the personal resume copy.
///
/// Returns the files that were created; existing files are left alone.
pub(super) fn install_templates(ws: &Workspace) -> Result<Vec<PathBuf>> {
    let dir = ws.templates_dir();
    let mut created = Vec::new();

    for (name, content) in BUILTIN_TEMPLATES {
        let path = dir.join(name);
        if write_if_missing(&path, content)? {
            created.push(path);
        }
    }

    let resume = dir.join(PERSONAL_RESUME);
    if !resume.exists() {
        let base = dir.join(BUILTIN_TEMPLATES[0].0);
        let content = std::fs::read_to_string(&base).map_err(|e| {
            JobkitError::DataError(format!(
                "failed to read template '{}': {}",
                base.display(),
                e
            ))
        })?;
        if write_if_missing(&resume, &content)? {
            created.push(resume);
        }
    }

    Ok(created)
}

/// Create `Applications/00-example-company/` with placeholder files.
pub(super) fn create_example_application(ws: &Workspace) -> Result<Vec<PathBuf>> {
    let dir = ws.applications_dir().join(EXAMPLE_COMPANY_DIR);
    let mut created = Vec::new();
    for (name, content) in EXAMPLE_FILES {
        let path = dir.join(name);
        if write_if_missing(&path, content)? {
            created.push(path);
        }
    }
    Ok(created)
}
