//! Config struct definition.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for a job search workspace.
///
/// This struct represents the contents of `config/job_search_config.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Candidate
    // =========================================================================
    pub user_profile: UserProfile,

    // =========================================================================
    // Research
    // =========================================================================
    pub ai_prompts: AiPrompts,

    pub quality_gates: QualityGates,

    // =========================================================================
    // Outreach
    // =========================================================================
    pub email_settings: EmailSettings,

    // =========================================================================
    // Tracking
    // =========================================================================
    pub targets: Targets,
}
