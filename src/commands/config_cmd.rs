//! Implementation of the `jobkit config` command.
//!
//! Without flags, prints where the config lives and the settings that drive
//! scoring, outreach, and the dashboard. With `--edit`, opens the file in the
//! user's editor and validates it afterwards.

use crate::cli::ConfigArgs;
use crate::config::Config;
use crate::context::ensure_initialized;
use crate::error::{JobkitError, Result};
use crate::workspace::Workspace;
use std::path::Path;
use std::process::Command;
use tracing::debug;

#[cfg(windows)]
const FALLBACK_EDITOR: &str = "notepad";
#[cfg(not(windows))]
const FALLBACK_EDITOR: &str = "vi";

pub fn cmd_config(ws: Workspace, args: ConfigArgs) -> Result<()> {
    ensure_initialized(&ws)?;
    let path = ws.config_path();

    if args.edit {
        let argv = editor_command(
            std::env::var("VISUAL").ok(),
            std::env::var("EDITOR").ok(),
        )?;
        launch_editor(&argv, &path)?;
    }

    let config = Config::load(&path)?;
    println!("Config: {}", path.display());
    if args.edit {
        println!("Config is valid.");
    }
    println!();
    print_settings(&config);
    Ok(())
}

/// The editor argv from `$VISUAL`, then `$EDITOR`, then a platform default.
///
/// Values are split like a shell would, so `code --wait` works.
fn editor_command(visual: Option<String>, editor: Option<String>) -> Result<Vec<String>> {
    let raw = visual
        .into_iter()
        .chain(editor)
        .find(|v| !v.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_EDITOR.to_string());

    let argv = shell_words::split(&raw).map_err(|e| {
        JobkitError::UserError(format!(
            "failed to parse editor command '{}': {}\n\n\
             Fix: check for unmatched quotes in $VISUAL or $EDITOR.",
            raw, e
        ))
    })?;
    if argv.is_empty() {
        return Err(JobkitError::UserError(format!(
            "editor command '{}' is empty after parsing",
            raw
        )));
    }
    Ok(argv)
}

fn launch_editor(argv: &[String], path: &Path) -> Result<()> {
    let (program, args) = argv
        .split_first()
        .ok_or_else(|| JobkitError::UserError("no editor configured".to_string()))?;
    debug!(editor = %program, path = %path.display(), "launching editor");

    let status = Command::new(program)
        .args(args)
        .arg(path)
        .status()
        .map_err(|e| {
            JobkitError::UserError(format!(
                "failed to launch editor '{}': {}\n\n\
                 Fix: set $EDITOR to an installed editor.",
                program, e
            ))
        })?;

    if !status.success() {
        return Err(JobkitError::UserError(format!(
            "editor '{}' exited with {}",
            program, status
        )));
    }
    Ok(())
}

fn print_settings(config: &Config) {
    let user = &config.user_profile;
    println!("Candidate:      {} <{}>", user.name, user.email);
    println!("Target roles:   {}", user.target_roles.join(", "));
    println!(
        "Quality gate:   {}/40 minimum priority",
        config.quality_gates.min_priority_score
    );
    println!(
        "Emails:         {} words max, follow up after {} days",
        config.email_settings.max_words, config.email_settings.follow_up_days
    );
    let targets = &config.targets;
    println!(
        "Targets:        {} applications/week, {:.0}% response, {:.0}% interview, {:.0}% offer",
        targets.weekly_applications,
        targets.email_response_rate * 100.0,
        targets.interview_conversion * 100.0,
        targets.offer_rate * 100.0
    );
}
