//! Checks a drafted email against the outreach rules and estimates a reply
//! rate.

use super::contacts::{ConnectionDegree, Contact};
use crate::application::analysis::contains_term;
use serde::Serialize;

const ASK_INDICATORS: [&str; 7] = [
    "conversation",
    "chat",
    "meeting",
    "call",
    "discuss",
    "worth",
    "interested",
];

const BUZZWORDS: [&str; 6] = [
    "synergy",
    "leverage",
    "optimize",
    "execute",
    "drive results",
    "best practices",
];

const VAGUE_WORDS: [&str; 4] = ["results", "impact", "value", "solutions"];

/// More vague words than this earns a suggestion.
const MAX_VAGUE_WORDS: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmailValidation {
    pub passed: bool,
    pub warnings: Vec<String>,
    pub suggestions: Vec<String>,
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Validate a rendered body.
///
/// `max_words` is the hard limit from config; `template_max` is the tighter
/// length the template was written for and only produces a suggestion.
pub fn validate_email(body: &str, max_words: usize, template_max: usize) -> EmailValidation {
    let lower = body.to_lowercase();
    let words = word_count(body);
    let mut validation = EmailValidation {
        passed: true,
        warnings: Vec::new(),
        suggestions: Vec::new(),
    };

    if words > max_words {
        validation
            .warnings
            .push(format!("Email is {} words (should be under {})", words, max_words));
        validation.passed = false;
    } else if words > template_max {
        validation.suggestions.push(format!(
            "Trim to under {} words for this template",
            template_max
        ));
    }

    if !ASK_INDICATORS.iter().any(|w| contains_term(&lower, w)) {
        validation
            .warnings
            .push("No clear ask detected in email".to_string());
        validation.passed = false;
    }

    let buzzwords: Vec<&str> = BUZZWORDS
        .iter()
        .copied()
        .filter(|w| contains_term(&lower, w))
        .collect();
    if !buzzwords.is_empty() {
        validation
            .warnings
            .push(format!("Buzzwords detected: {}", buzzwords.join(", ")));
        validation
            .suggestions
            .push("Replace buzzwords with plain language".to_string());
    }

    let vague = VAGUE_WORDS
        .iter()
        .filter(|w| contains_term(&lower, w))
        .count();
    if vague > MAX_VAGUE_WORDS {
        validation
            .suggestions
            .push("Add more specific examples and metrics".to_string());
    }

    validation
}

/// Rough chance of a positive reply, between 0 and 0.9.
pub fn success_probability(contact: &Contact, validation: &EmailValidation) -> f64 {
    let mut probability = 0.4;
    match contact.degree {
        ConnectionDegree::First => probability += 0.3,
        ConnectionDegree::Second => probability += 0.1,
        ConnectionDegree::Third => {}
    }
    if contact.mutual_connections > 0 {
        probability += 0.1;
    }
    if !validation.passed {
        probability -= 0.15;
    }
    if contact.high_priority {
        probability += 0.1;
    }
    f64::min(probability, 0.9)
}
