use crate::github::types::Repository;
use crate::profile::{is_featured, MAX_FILTERED};
use std::fmt;
use std::str::FromStr;

const WEB_LANGUAGES: &[&str] = &["HTML", "JavaScript", "CSS", "PHP"];
const SECURITY_TOPIC_HINTS: &[&str] = &["security", "penetration", "exploit", "vulnerability"];
const SECURITY_NAME_HINTS: &[&str] = &["cve", "exploit"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    /// Featured projects.
    #[default]
    All,
    Python,
    Shell,
    Web,
    Security,
}

impl Filter {
    pub const ALL: &[Filter] = &[
        Filter::All,
        Filter::Python,
        Filter::Shell,
        Filter::Web,
        Filter::Security,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Python => "python",
            Filter::Shell => "shell",
            Filter::Web => "web",
            Filter::Security => "security",
        }
    }

    pub fn next(self) -> Filter {
        let idx = Filter::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Filter::ALL[(idx + 1) % Filter::ALL.len()]
    }

    pub fn matches(self, repo: &Repository) -> bool {
        match self {
            Filter::All => is_featured(&repo.name),
            Filter::Python => repo.language.as_deref() == Some("Python"),
            Filter::Shell => repo.language.as_deref() == Some("Shell"),
            Filter::Web => repo
                .language
                .as_deref()
                .is_some_and(|l| WEB_LANGUAGES.contains(&l)),
            Filter::Security => is_security_related(repo),
        }
    }

    /// Featured projects are shown in full; everything else is capped.
    pub fn limit(self) -> Option<usize> {
        match self {
            Filter::All => None,
            _ => Some(MAX_FILTERED),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Filter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Filter::ALL
            .iter()
            .copied()
            .find(|f| f.key() == s)
            .ok_or_else(|| format!("unknown filter: {s}"))
    }
}

fn is_security_related(repo: &Repository) -> bool {
    let name = repo.name.to_lowercase();
    repo.topics
        .iter()
        .any(|t| SECURITY_TOPIC_HINTS.iter().any(|hint| t.contains(hint)))
        || SECURITY_NAME_HINTS.iter().any(|hint| name.contains(hint))
}

/// Evaluated against the whole project list, never a previous subset.
pub fn apply(projects: &[Repository], filter: Filter) -> Vec<Repository> {
    let matching = projects.iter().filter(|r| filter.matches(r)).cloned();
    match filter.limit() {
        Some(max) => matching.take(max).collect(),
        None => matching.collect(),
    }
}
