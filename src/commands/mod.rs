//! Command implementations for jobkit.
//!
//! This module resolves the workspace and routes each CLI command to its
//! handler. Handlers are thin: they load a [`JobContext`], call into the
//! domain modules, save the pipeline, append to the activity log, and print
//! a short report.
//!
//! [`JobContext`]: crate::context::JobContext

mod apply;
mod config_cmd;
mod email;
mod fill;
mod init;
mod prep;
mod record;
mod research;
mod show;
mod track;

use crate::cli::{Cli, Command};
use crate::error::{JobkitError, Result};
use crate::workspace::Workspace;
use chrono::{Local, NaiveDate};
use std::path::Path;

/// Dispatch a command to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let ws = Workspace::resolve(cli.root.as_deref())?;

    match cli.command {
        Command::Init(args) => init::cmd_init(ws, args),
        Command::Research(args) => research::cmd_research(ws, args),
        Command::Apply(args) => apply::cmd_apply(ws, args),
        Command::Email(args) => email::cmd_email(ws, args),
        Command::Prep(args) => prep::cmd_prep(ws, args),
        Command::Fill(args) => fill::cmd_fill(ws, args),
        Command::Track => track::cmd_track(ws),
        Command::Show(args) => show::cmd_show(ws, args),
        Command::Config(args) => config_cmd::cmd_config(ws, args),
        Command::Record(record) => record::dispatch_record(ws, record),
    }
}

/// The local calendar date, used as "today" by every command.
fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Read a user-supplied text file.
fn read_input_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        JobkitError::UserError(format!("failed to read '{}': {}", path.display(), e))
    })
}

/// Trimmed company argument, rejecting blanks.
///
/// Names become folders under `Applications/`: no path separators, and not
/// only dots.
fn company_arg(company: &str) -> Result<&str> {
    let company = company.trim();
    if company.is_empty() {
        return Err(JobkitError::UserError(
            "company name cannot be empty".to_string(),
        ));
    }
    if company.contains(['/', '\\']) || company.split('.').all(str::is_empty) {
        return Err(JobkitError::UserError(format!(
            "company name '{}' cannot contain '/' or '\\' or be only dots",
            company
        )));
    }
    Ok(company)
}

/// Print generated file paths relative to the workspace root.
fn print_files<P: AsRef<Path>>(ws: &Workspace, files: &[P]) {
    for file in files {
        let file = file.as_ref();
        let shown = file.strip_prefix(&ws.root).unwrap_or(file);
        println!("  {}", shown.display());
    }
}

#[cfg(test)]
pub(crate) mod test_helpers {
    use crate::config::Config;
    use crate::context::JobContext;
    use crate::test_support::create_test_workspace;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// An initialized workspace with default config and an empty pipeline.
    pub(crate) fn test_context() -> (TempDir, JobContext) {
        let (temp_dir, ws) = create_test_workspace();
        Config::load_or_init(ws.config_path()).unwrap();
        let ctx = JobContext::load(ws).unwrap();
        (temp_dir, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_arg_trims_and_rejects_blank() {
        assert_eq!(company_arg("  Acme ").unwrap(), "Acme");
        assert!(matches!(company_arg("   "), Err(JobkitError::UserError(_))));
    }

    #[test]
    fn test_company_arg_rejects_path_like_names() {
        for name in ["../outside", "Acme/Health", "Acme\\Health", "..", "."] {
            assert!(
                matches!(company_arg(name), Err(JobkitError::UserError(_))),
                "accepted {:?}",
                name
            );
        }
        assert_eq!(company_arg("Acme Inc.").unwrap(), "Acme Inc.");
        assert_eq!(company_arg("Monday.com").unwrap(), "Monday.com");
    }

    #[test]
    fn test_read_input_file_missing_is_user_error() {
        let err = read_input_file(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, JobkitError::UserError(_)));
    }
}
