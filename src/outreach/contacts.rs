//! Outreach contacts and who to look for at a company.

use crate::error::{JobkitError, Result};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionDegree {
    First,
    Second,
    Third,
}

impl ConnectionDegree {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "1" | "1st" | "first" => Some(ConnectionDegree::First),
            "2" | "2nd" | "second" => Some(ConnectionDegree::Second),
            "3" | "3rd" | "third" => Some(ConnectionDegree::Third),
            _ => None,
        }
    }
}

impl fmt::Display for ConnectionDegree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConnectionDegree::First => "1st",
            ConnectionDegree::Second => "2nd",
            ConnectionDegree::Third => "3rd",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub name: String,
    pub title: String,
    pub degree: ConnectionDegree,
    pub mutual_connections: u32,
    pub high_priority: bool,
    /// Something the contact posted recently, used as an opening line.
    pub recent_post: Option<String>,
}

impl Contact {
    pub fn new(name: &str, title: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            title: title.trim().to_string(),
            degree: ConnectionDegree::Third,
            mutual_connections: 0,
            high_priority: false,
            recent_post: None,
        }
    }

    /// Parse a `--contact` value: `Name|Title` with an optional `|2nd` degree.
    pub fn parse(value: &str) -> Result<Self> {
        let parts: Vec<&str> = value.split('|').map(str::trim).collect();
        let invalid = || {
            JobkitError::UserError(format!(
                "invalid contact '{}'\n\nUse \"Name|Title\" or \"Name|Title|2nd\".",
                value
            ))
        };
        match parts.as_slice() {
            [name, title] if !name.is_empty() && !title.is_empty() => Ok(Contact::new(name, title)),
            [name, title, degree] if !name.is_empty() && !title.is_empty() => {
                let mut contact = Contact::new(name, title);
                contact.degree = ConnectionDegree::parse(degree).ok_or_else(invalid)?;
                Ok(contact)
            }
            _ => Err(invalid()),
        }
    }

    pub fn priority_label(&self) -> &'static str {
        if self.high_priority { "high" } else { "medium" }
    }
}

/// Placeholder contacts used when none are given on the command line.
pub fn default_contacts() -> Vec<Contact> {
    vec![
        Contact {
            name: "Hiring Manager".to_string(),
            title: "Head of Product".to_string(),
            degree: ConnectionDegree::Second,
            mutual_connections: 0,
            high_priority: true,
            recent_post: Some("a recent product launch".to_string()),
        },
        Contact {
            name: "VP Product".to_string(),
            title: "VP Product".to_string(),
            degree: ConnectionDegree::Third,
            mutual_connections: 2,
            high_priority: false,
            recent_post: None,
        },
    ]
}

/// Rough headcounts for companies whose size changes who to contact.
const SIZE_ESTIMATES: [(&str, u32); 5] = [
    ("canva", 5000),
    ("figma", 800),
    ("notion", 500),
    ("linear", 100),
    ("stripe", 3000),
];

const DEFAULT_SIZE: u32 = 300;

/// Below this headcount founders are worth contacting directly.
const SMALL_COMPANY: u32 = 200;

pub fn estimate_company_size(company: &str) -> u32 {
    let lower = company.to_lowercase();
    SIZE_ESTIMATES
        .iter()
        .find(|(needle, _)| lower.contains(needle))
        .map(|(_, size)| *size)
        .unwrap_or(DEFAULT_SIZE)
}

/// Titles worth searching for on LinkedIn, most relevant first.
pub fn target_titles(company: &str, role: &str) -> Vec<&'static str> {
    let mut titles = vec![
        "Head of Product",
        "VP Product",
        "Director of Product",
        "Group Product Manager",
        "Chief Product Officer",
    ];
    if estimate_company_size(company) < SMALL_COMPANY {
        titles.splice(0..0, ["CEO", "Founder"]);
    }
    if role.to_lowercase().contains("growth") {
        titles.splice(0..0, ["Head of Growth", "VP Growth"]);
    }
    titles
}
