use crate::github::types::Repository;
use itertools::Itertools;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub projects: usize,
    pub stars: u64,
    pub languages: usize,
}

impl Stats {
    pub fn compute(projects: &[Repository]) -> Self {
        let languages = projects
            .iter()
            .filter_map(|r| r.language.as_deref())
            .filter(|l| !l.is_empty())
            .unique()
            .count();

        Self {
            projects: projects.len(),
            stars: projects.iter().map(|r| u64::from(r.stargazers_count)).sum(),
            languages,
        }
    }

    /// Slot texts in display order: projects, stars, languages.
    pub fn slot_texts(&self) -> [String; 3] {
        [
            format!("{}+", self.projects),
            format!("{}+", self.stars),
            format!("{}+", self.languages),
        ]
    }
}
