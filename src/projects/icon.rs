use crate::github::types::Repository;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectIcon {
    Shield,
    Python,
    JavaScript,
    Terminal,
    Php,
    Go,
    Code,
}

impl ProjectIcon {
    /// Nerd Font glyph.
    pub fn glyph(self) -> &'static str {
        match self {
            ProjectIcon::Shield => "\u{f132}",
            ProjectIcon::Python => "\u{e73c}",
            ProjectIcon::JavaScript => "\u{e74e}",
            ProjectIcon::Terminal => "\u{f120}",
            ProjectIcon::Php => "\u{e73d}",
            ProjectIcon::Go => "\u{e627}",
            ProjectIcon::Code => "\u{f121}",
        }
    }
}

/// First match wins; falls back to the generic code icon.
pub fn classify(repo: &Repository) -> ProjectIcon {
    let name = repo.name.to_lowercase();
    let has_topic = |t: &str| repo.topics.iter().any(|topic| topic == t);

    if has_topic("security") || has_topic("penetration") || name.contains("cve") {
        return ProjectIcon::Shield;
    }

    match repo.language.as_deref().map(str::to_lowercase).as_deref() {
        Some("python") => ProjectIcon::Python,
        Some("javascript" | "html" | "css") => ProjectIcon::JavaScript,
        Some("shell") => ProjectIcon::Terminal,
        Some("php") => ProjectIcon::Php,
        Some("go") => ProjectIcon::Go,
        _ => ProjectIcon::Code,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{make_repo, with_topics};

    #[test]
    fn test_security_signal_beats_language() {
        let by_topic = with_topics(make_repo("tool", Some("Python"), 0), &["security"]);
        let by_pentest = with_topics(make_repo("kit", Some("Go"), 0), &["penetration"]);
        let by_name = make_repo("CVE-2021-44228", Some("Java"), 0);
        assert_eq!(classify(&by_topic), ProjectIcon::Shield);
        assert_eq!(classify(&by_pentest), ProjectIcon::Shield);
        assert_eq!(classify(&by_name), ProjectIcon::Shield);
    }

    #[test]
    fn test_topic_must_match_exactly() {
        let repo = with_topics(make_repo("tool", Some("Python"), 0), &["web-security"]);
        assert_eq!(classify(&repo), ProjectIcon::Python);
    }

    #[test]
    fn test_language_case_insensitive() {
        assert_eq!(classify(&make_repo("a", Some("HTML"), 0)), ProjectIcon::JavaScript);
        assert_eq!(classify(&make_repo("b", Some("css"), 0)), ProjectIcon::JavaScript);
        assert_eq!(classify(&make_repo("c", Some("Shell"), 0)), ProjectIcon::Terminal);
        assert_eq!(classify(&make_repo("d", Some("PHP"), 0)), ProjectIcon::Php);
        assert_eq!(classify(&make_repo("e", Some("Go"), 0)), ProjectIcon::Go);
    }

    #[test]
    fn test_fallback_is_code() {
        assert_eq!(classify(&make_repo("a", None, 0)), ProjectIcon::Code);
        assert_eq!(classify(&make_repo("b", Some("Rust"), 0)), ProjectIcon::Code);
    }
}
