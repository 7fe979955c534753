//! CLI argument parsing for jobkit.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::pipeline::{InterviewResult, Outcome};
use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// jobkit: a file-based job search kit.
///
/// Everything lives in one workspace directory:
/// - `config/` holds your settings and candidate profile
/// - `data/application_pipeline.json` tracks every company
/// - `Applications/<company>/` collects the generated documents
#[derive(Parser, Debug)]
#[command(name = "jobkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Workspace root (defaults to JOBKIT_ROOT, then the nearest initialized parent directory).
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Log more detail to stderr (-v for info, -vv for debug).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for jobkit.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Set up a workspace in the current directory.
    ///
    /// Writes the default config, sample candidate profile, Markdown
    /// templates, and an example application folder. Existing files are
    /// left alone.
    Init(InitArgs),

    /// Score a company and write research notes and prompts.
    ///
    /// Companies below the quality gate are recorded as disqualified and
    /// nothing else is generated.
    Research(ResearchArgs),

    /// Generate a tailored resume, cover letter, and case stories.
    Apply(ApplyArgs),

    /// Draft a cold email campaign with follow-up schedule.
    Email(EmailArgs),

    /// Build an interview preparation guide.
    Prep(PrepArgs),

    /// Fill a workspace template for one company.
    ///
    /// Unknown placeholders are left as they are and reported.
    Fill(FillArgs),

    /// Refresh the pipeline dashboard and list next actions.
    Track,

    /// Show one company's record and recent activity.
    Show(ShowArgs),

    /// Print the config path, or open it in $EDITOR.
    Config(ConfigArgs),

    /// Record replies, follow-ups, interviews, outcomes, and research results.
    Record(RecordCommand),
}

/// Arguments for the `init` command.
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Your full name.
    #[arg(long)]
    pub name: Option<String>,

    /// Contact email address.
    #[arg(long)]
    pub email: Option<String>,

    /// Phone number.
    #[arg(long)]
    pub phone: Option<String>,

    /// LinkedIn username or profile URL.
    #[arg(long)]
    pub linkedin: Option<String>,

    /// Ask for profile details on the terminal.
    #[arg(short, long)]
    pub interactive: bool,
}

/// Arguments for the `research` command.
#[derive(Parser, Debug)]
pub struct ResearchArgs {
    /// Company name to research.
    pub company: String,

    /// Target role title.
    #[arg(long)]
    pub role: Option<String>,

    /// Redo research that is already complete.
    #[arg(long)]
    pub force_refresh: bool,

    /// Ratings as JSON, e.g. '{"role_appeal":8,"company_fit":9}'.
    /// Missing ratings default to 8; invalid JSON falls back to prompting.
    #[arg(long)]
    pub scores: Option<String>,
}

/// Arguments for the `apply` command.
#[derive(Parser, Debug)]
pub struct ApplyArgs {
    /// Company name to apply to.
    pub company: String,

    /// Target role title (defaults to the role recorded during research).
    #[arg(long)]
    pub role: Option<String>,

    /// Job posting text to tailor keywords against.
    #[arg(long, value_name = "FILE")]
    pub job_description: Option<PathBuf>,
}

/// Arguments for the `email` command.
#[derive(Parser, Debug)]
pub struct EmailArgs {
    /// Company name for the campaign.
    pub company: String,

    /// Target role title.
    #[arg(long)]
    pub role: Option<String>,

    /// Contact as "Name|Title" or "Name|Title|2nd". Repeatable.
    #[arg(long = "contact", value_name = "CONTACT")]
    pub contacts: Vec<String>,
}

/// Arguments for the `prep` command.
#[derive(Parser, Debug)]
pub struct PrepArgs {
    /// Company name for interview prep.
    pub company: String,

    /// Target role title.
    #[arg(long)]
    pub role: Option<String>,

    /// Interviewer as "Name|Title". Repeatable.
    #[arg(long = "interviewer", value_name = "INTERVIEWER")]
    pub interviewers: Vec<String>,
}

/// Arguments for the `fill` command.
#[derive(Parser, Debug)]
pub struct FillArgs {
    /// Template file name or path, e.g. cover_letter.md.
    pub template: String,

    /// Company the document is for.
    pub company: String,

    /// Target role title.
    #[arg(long)]
    pub role: Option<String>,

    /// Extra placeholder value as key=value. Repeatable.
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub sets: Vec<String>,
}

/// Arguments for the `show` command.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Company name or key.
    pub company: String,
}

/// Arguments for the `config` command.
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Open the config file in $EDITOR.
    #[arg(long)]
    pub edit: bool,
}

/// Record subcommand wrapper.
#[derive(Parser, Debug)]
pub struct RecordCommand {
    #[command(subcommand)]
    pub action: RecordAction,
}

/// Things that happen outside jobkit and get recorded by hand.
#[derive(Subcommand, Debug)]
pub enum RecordAction {
    /// A contact replied to an email.
    Response(RecordResponseArgs),

    /// A follow-up email was sent.
    FollowUp(RecordFollowUpArgs),

    /// An interview was scheduled.
    Interview(RecordInterviewArgs),

    /// An interview round advanced or ended the process.
    InterviewResult(RecordInterviewResultArgs),

    /// The process ended or produced an offer.
    Outcome(RecordOutcomeArgs),

    /// Store pasted AI research output for one prompt component.
    Research(RecordResearchArgs),
}

#[derive(Parser, Debug)]
pub struct RecordResponseArgs {
    pub company: String,

    /// Contact who replied (defaults to the latest email).
    #[arg(long)]
    pub contact: Option<String>,
}

#[derive(Parser, Debug)]
pub struct RecordFollowUpArgs {
    pub company: String,

    /// Contact who was followed up (defaults to every unanswered email).
    #[arg(long)]
    pub contact: Option<String>,
}

#[derive(Parser, Debug)]
pub struct RecordInterviewArgs {
    pub company: String,

    /// Interview date, YYYY-MM-DD.
    #[arg(long)]
    pub date: NaiveDate,

    /// Stage name, e.g. phone_screen or onsite.
    #[arg(long)]
    pub stage: String,

    #[arg(long)]
    pub interviewer: Option<String>,
}

#[derive(Parser, Debug)]
pub struct RecordInterviewResultArgs {
    pub company: String,

    #[arg(value_enum)]
    pub result: InterviewResult,

    /// Stage to close (defaults to the latest pending interview).
    #[arg(long)]
    pub stage: Option<String>,
}

#[derive(Parser, Debug)]
pub struct RecordOutcomeArgs {
    pub company: String,

    #[arg(value_enum)]
    pub outcome: Outcome,
}

#[derive(Parser, Debug)]
pub struct RecordResearchArgs {
    pub company: String,

    /// Prompt component, e.g. company_dossier or growth_challenges.
    pub component: String,

    /// File holding the pasted output.
    #[arg(long, value_name = "FILE")]
    pub file: PathBuf,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
