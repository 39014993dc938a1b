use crate::github::types::Repository;
use crate::i18n::{self, Language, TextKey};
use crate::profile::MAX_CARD_TOPICS;
use crate::projects::icon::{self, ProjectIcon};

pub const UNKNOWN_LANGUAGE: &str = "Unknown";
pub const NO_DESCRIPTION: &str = "No description available";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLink {
    pub url: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub icon: ProjectIcon,
    pub language: String,
    pub name: String,
    pub description: String,
    pub topics: Vec<String>,
    pub stars: u32,
    pub links: Vec<CardLink>,
}

impl ProjectCard {
    pub fn build(repo: &Repository, lang: Language) -> Self {
        let mut links = vec![CardLink {
            url: repo.html_url.clone(),
            caption: i18n::text(TextKey::ViewCode, lang).to_string(),
        }];
        if let Some(ref homepage) = repo.homepage {
            links.push(CardLink {
                url: homepage.clone(),
                caption: i18n::text(TextKey::Demo, lang).to_string(),
            });
        }

        Self {
            icon: icon::classify(repo),
            language: repo
                .language
                .clone()
                .unwrap_or_else(|| UNKNOWN_LANGUAGE.to_string()),
            name: repo.name.clone(),
            description: repo
                .description
                .clone()
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            topics: repo.topics.iter().take(MAX_CARD_TOPICS).cloned().collect(),
            stars: repo.stargazers_count,
            links,
        }
    }
}

/// What the projects grid currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridContent {
    Loading,
    Cards(Vec<ProjectCard>),
    Empty,
    Failed,
}

impl GridContent {
    pub const LOADING_TEXT: &'static str = "Loading projects...";
    pub const EMPTY_TEXT: &'static str = "No projects found.";
    pub const FAILED_TEXT: &'static str = "Failed to load projects. Please check back later.";

    pub fn cards(&self) -> &[ProjectCard] {
        match self {
            GridContent::Cards(cards) => cards,
            _ => &[],
        }
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            GridContent::Loading => Some(Self::LOADING_TEXT),
            GridContent::Empty => Some(Self::EMPTY_TEXT),
            GridContent::Failed => Some(Self::FAILED_TEXT),
            GridContent::Cards(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{make_repo, with_topics};

    #[test]
    fn test_first_five_topics_in_order() {
        let repo = with_topics(
            make_repo("many", Some("Python"), 1),
            &["t1", "t2", "t3", "t4", "t5", "t6", "t7"],
        );
        let card = ProjectCard::build(&repo, Language::En);
        assert_eq!(card.topics, vec!["t1", "t2", "t3", "t4", "t5"]);
    }

    #[test]
    fn test_single_link_without_homepage() {
        let repo = make_repo("nohome", None, 0);
        let card = ProjectCard::build(&repo, Language::En);
        assert_eq!(card.links.len(), 1);
        assert_eq!(card.links[0].url, repo.html_url);
        assert_eq!(card.links[0].caption, "View Code");
    }

    #[test]
    fn test_demo_link_with_homepage() {
        let mut repo = make_repo("site", Some("HTML"), 0);
        repo.homepage = Some("https://example.org".to_string());
        let card = ProjectCard::build(&repo, Language::Id);
        assert_eq!(card.links.len(), 2);
        assert_eq!(card.links[0].caption, "Lihat Kode");
        assert_eq!(card.links[1].caption, "Demo");
        assert_eq!(card.links[1].url, "https://example.org");
    }

    #[test]
    fn test_fallbacks_for_missing_fields() {
        let repo = make_repo("bare", None, 0);
        let card = ProjectCard::build(&repo, Language::En);
        assert_eq!(card.language, UNKNOWN_LANGUAGE);
        assert_eq!(card.description, NO_DESCRIPTION);
        assert_eq!(card.stars, 0);
        assert!(card.topics.is_empty());
        assert_eq!(card.icon, ProjectIcon::Code);
    }
}
