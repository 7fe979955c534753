//! Implementation of the `jobkit init` command.
//!
//! Sets up a job search workspace in the current directory (or `--root`).
//!
//! # What `jobkit init` does
//!
//! 1. Creates `config/`, `data/`, `templates/`, and `Applications/`
//! 2. Writes the default config and sample candidate profile (if missing)
//! 3. Updates the user profile from flags or terminal prompts
//! 4. Installs the built-in Markdown templates (if missing)
//! 5. Copies `resume_base.md` to `my_resume.md` (if missing)
//! 6. Creates `Applications/00-example-company/` with sample files
//!
//! Running it again never overwrites files the user may have edited; only
//! the profile fields passed on this run change.

mod scaffolding;

#[cfg(test)]
mod tests;

use crate::activity::{Activity, ActivityAction, append_activity};
use crate::cli::InitArgs;
use crate::config::{Config, UserProfile};
use crate::error::{JobkitError, Result};
use crate::profile::CandidateProfile;
use crate::workspace::Workspace;
use serde_json::json;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::info;

use scaffolding::*;

/// What a run of `init` changed.
#[derive(Debug, Default)]
pub(crate) struct InitReport {
    pub created: Vec<PathBuf>,
    pub profile_updated: bool,
}

pub fn cmd_init(ws: Workspace, args: InitArgs) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    let report = run_init(&ws, &args, &mut input, &mut output)?;

    println!("Initialized job search workspace at {}", ws.root.display());
    if report.created.is_empty() {
        println!("All files were already in place.");
    } else {
        println!();
        println!("Created:");
        super::print_files(&ws, &report.created);
    }
    if report.profile_updated {
        println!();
        println!("Profile saved to {}", ws.config_path().display());
    }
    println!();
    println!("Next steps:");
    println!("  1. Edit templates/my_resume.md with your experience");
    println!("  2. Fill in case stories in {}", ws.profile_path().display());
    println!("  3. Research your first company: jobkit research \"Company Name\"");

    Ok(())
}

pub(crate) fn run_init<R: BufRead, W: Write>(
    ws: &Workspace,
    args: &InitArgs,
    input: &mut R,
    output: &mut W,
) -> Result<InitReport> {
    let mut report = InitReport::default();

    ws.ensure_layout()?;

    let config_existed = ws.config_path().is_file();
    let mut config = Config::load_or_init(ws.config_path())?;
    if !config_existed {
        report.created.push(ws.config_path());
    }
    if !ws.profile_path().is_file() {
        CandidateProfile::load_or_init(ws.profile_path())?;
        report.created.push(ws.profile_path());
    }

    let mut profile = config.user_profile.clone();
    apply_flags(&mut profile, args);
    if args.interactive {
        prompt_profile(&mut profile, input, output)?;
    }
    if profile != config.user_profile {
        config.user_profile = profile;
        config.validate()?;
        config.save(ws.config_path())?;
        report.profile_updated = true;
        info!(name = %config.user_profile.name, "updated user profile");
    }

    report.created.extend(install_templates(ws)?);
    report.created.extend(create_example_application(ws)?);

    append_activity(
        ws,
        &Activity::new(ActivityAction::Init).with_details(json!({
            "created": report.created.len(),
            "profile_updated": report.profile_updated,
            "interactive": args.interactive,
        })),
    )?;

    Ok(report)
}

/// Copy non-blank flag values into the profile.
fn apply_flags(profile: &mut UserProfile, args: &InitArgs) {
    let fields = [
        (&args.name, &mut profile.name),
        (&args.email, &mut profile.email),
        (&args.phone, &mut profile.phone),
    ];
    for (flag, field) in fields {
        if let Some(value) = flag.as_deref().map(str::trim)
            && !value.is_empty()
        {
            *field = value.to_string();
        }
    }
    if let Some(linkedin) = args.linkedin.as_deref().map(str::trim)
        && !linkedin.is_empty()
    {
        profile.linkedin = linkedin_url(linkedin);
    }
}

/// A bare username becomes `linkedin.com/in/{username}/`.
pub(crate) fn linkedin_url(value: &str) -> String {
    let value = value.trim();
    if value.contains("linkedin.com") {
        value.to_string()
    } else {
        format!("linkedin.com/in/{}/", value.trim_matches('/'))
    }
}

/// Ask for each profile field, keeping the current value on an empty answer.
fn prompt_profile<R: BufRead, W: Write>(
    profile: &mut UserProfile,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let io_err = |e: io::Error| JobkitError::UserError(format!("failed to prompt for profile: {}", e));

    writeln!(output, "\nPersonal Information").map_err(io_err)?;
    profile.name = ask(input, output, "Full name", &profile.name)?;
    profile.email = ask(input, output, "Email address", &profile.email)?;
    profile.phone = ask(input, output, "Phone number", &profile.phone)?;
    let linkedin = ask(input, output, "LinkedIn username or URL", &profile.linkedin)?;
    profile.linkedin = linkedin_url(&linkedin);

    writeln!(output, "\nCareer Targets").map_err(io_err)?;
    profile.target_roles = ask_list(input, output, "Target job titles", &profile.target_roles)?;
    profile.target_industries =
        ask_list(input, output, "Target industries", &profile.target_industries)?;
    profile.target_company_size = ask(
        input,
        output,
        "Preferred company size",
        &profile.target_company_size,
    )?;
    profile.remote_preference = ask(
        input,
        output,
        "Remote work preference",
        &profile.remote_preference,
    )?;
    profile.salary_range = ask(input, output, "Target salary range", &profile.salary_range)?;
    profile.key_skills = ask_list(input, output, "Key skills", &profile.key_skills)?;
    Ok(())
}

fn read_answer<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    let io_err = |e: io::Error| JobkitError::UserError(format!("failed to prompt for profile: {}", e));
    write!(output, "{}", prompt).map_err(io_err)?;
    output.flush().map_err(io_err)?;

    let mut line = String::new();
    if input.read_line(&mut line).map_err(io_err)? == 0 {
        return Err(JobkitError::UserError(
            "input ended before the profile was complete".to_string(),
        ));
    }
    Ok(line.trim().to_string())
}

fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    current: &str,
) -> Result<String> {
    let answer = read_answer(input, output, &format!("{} [{}]: ", label, current))?;
    Ok(if answer.is_empty() {
        current.to_string()
    } else {
        answer
    })
}

/// Comma-separated answer; empty keeps the current list.
fn ask_list<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    current: &[String],
) -> Result<Vec<String>> {
    let answer = read_answer(
        input,
        output,
        &format!("{} (comma-separated) [{}]: ", label, current.join(", ")),
    )?;
    if answer.is_empty() {
        return Ok(current.to_vec());
    }
    Ok(answer
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect())
}
