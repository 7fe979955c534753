//! Configuration model for jobkit.
//!
//! This module defines the Config struct that represents
//! `config/job_search_config.json`. Every section is `#[serde(default)]`, so
//! a partial file loads with defaults for whatever it leaves out, and
//! unknown keys are ignored.

mod model;
mod operations;
pub mod types;


pub use model::Config;
pub use types::{AiPrompts, EmailSettings, QualityGates, Targets, UserProfile};
