//! Tests for the init command.

use super::*;
use crate::activity::read_company_activity;
use crate::test_support::create_test_workspace;
use std::io::Cursor;

use super::scaffolding::*;

fn flags() -> InitArgs {
    InitArgs {
        name: None,
        email: None,
        phone: None,
        linkedin: None,
        interactive: false,
    }
}

fn init(ws: &Workspace, args: &InitArgs, answers: &str) -> InitReport {
    let mut input = Cursor::new(answers.as_bytes().to_vec());
    let mut output = Vec::new();
    run_init(ws, args, &mut input, &mut output).unwrap()
}

#[test]
fn test_init_creates_layout_and_files() {
    let (_temp_dir, ws) = create_test_workspace();
    let report = init(&ws, &flags(), "");

    assert!(ws.config_path().is_file());
    assert!(ws.profile_path().is_file());
    assert!(ws.data_dir().is_dir());
    for (name, _) in BUILTIN_TEMPLATES {
        assert!(ws.templates_dir().join(name).is_file(), "missing {}", name);
    }
    assert!(ws.templates_dir().join(PERSONAL_RESUME).is_file());

    let example = ws.applications_dir().join(EXAMPLE_COMPANY_DIR);
    for (name, _) in EXAMPLE_FILES {
        assert!(example.join(name).is_file(), "missing {}", name);
    }

    // config + profile + 3 templates + my_resume + 5 example files
    assert_eq!(report.created.len(), 11);
    assert!(!report.profile_updated);
    assert!(ws.activity_path().is_file());
}

#[test]
fn test_init_is_idempotent_and_keeps_edits() {
    let (_temp_dir, ws) = create_test_workspace();
    init(&ws, &flags(), "");

    let resume = ws.templates_dir().join(PERSONAL_RESUME);
    std::fs::write(&resume, "# My edited resume\n").unwrap();

    let report = init(&ws, &flags(), "");
    assert!(report.created.is_empty());
    assert_eq!(
        std::fs::read_to_string(&resume).unwrap(),
        "# My edited resume\n"
    );
}

#[test]
fn test_personal_resume_copies_base() {
    let (_temp_dir, ws) = create_test_workspace();
    init(&ws, &flags(), "");

    let base = std::fs::read_to_string(ws.templates_dir().join("resume_base.md")).unwrap();
    let mine = std::fs::read_to_string(ws.templates_dir().join(PERSONAL_RESUME)).unwrap();
    assert_eq!(base, mine);
}

#[test]
fn test_flags_update_profile() {
    let (_temp_dir, ws) = create_test_workspace();
    let args = InitArgs {
        name: Some("Pat Example".to_string()),
        email: Some("pat@example.com".to_string()),
        phone: Some("  ".to_string()),
        linkedin: Some("patexample".to_string()),
        interactive: false,
    };
    let report = init(&ws, &args, "");
    assert!(report.profile_updated);

    let config = Config::load(ws.config_path()).unwrap();
    assert_eq!(config.user_profile.name, "Pat Example");
    assert_eq!(config.user_profile.email, "pat@example.com");
    assert_eq!(config.user_profile.phone, UserProfile::default().phone);
    assert_eq!(config.user_profile.linkedin, "linkedin.com/in/patexample/");
}

#[test]
fn test_interactive_prompts_keep_defaults_on_empty_answers() {
    let (_temp_dir, ws) = create_test_workspace();
    let mut args = flags();
    args.interactive = true;

    // name, email, phone, linkedin, roles, industries, size, remote, salary, skills
    let answers = "Pat Example\npat@example.com\n\nhttps://www.linkedin.com/in/pat/\nStaff PM, Director of Product\n\n\n\n\n\n";
    let report = init(&ws, &args, answers);
    assert!(report.profile_updated);

    let profile = Config::load(ws.config_path()).unwrap().user_profile;
    let defaults = UserProfile::default();
    assert_eq!(profile.name, "Pat Example");
    assert_eq!(profile.phone, defaults.phone);
    assert_eq!(profile.linkedin, "https://www.linkedin.com/in/pat/");
    assert_eq!(profile.target_roles, vec!["Staff PM", "Director of Product"]);
    assert_eq!(profile.key_skills, defaults.key_skills);
}

#[test]
fn test_interactive_input_ending_early_is_error() {
    let (_temp_dir, ws) = create_test_workspace();
    let mut args = flags();
    args.interactive = true;

    let mut input = Cursor::new(b"Pat\n".to_vec());
    let mut output = Vec::new();
    let err = run_init(&ws, &args, &mut input, &mut output).unwrap_err();
    assert!(matches!(err, JobkitError::UserError(_)));
}

#[test]
fn test_linkedin_url() {
    assert_eq!(linkedin_url("pat"), "linkedin.com/in/pat/");
    assert_eq!(linkedin_url("/pat/"), "linkedin.com/in/pat/");
    assert_eq!(
        linkedin_url("linkedin.com/in/pat-example/"),
        "linkedin.com/in/pat-example/"
    );
}

#[test]
fn test_init_activity_has_no_company() {
    let (_temp_dir, ws) = create_test_workspace();
    init(&ws, &flags(), "");
    let lines = std::fs::read_to_string(ws.activity_path()).unwrap();
    assert_eq!(lines.lines().count(), 1);
    assert!(lines.contains("\"action\":\"init\""));
    assert!(read_company_activity(&ws, "00-example-company").unwrap().is_empty());
}
