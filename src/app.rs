use crate::error::{FolioError, Result};
use crate::github::types::Repository;
use crate::i18n::{self, Language};
use crate::prefs::{self, Theme};
use crate::profile::{CV_URL, SHADOW_THRESHOLD_PX};
use crate::projects::{
    card::{GridContent, ProjectCard},
    filter::{self, Filter},
    rank,
    stats::Stats,
};
use crate::reveal::RevealTracker;
use crate::view::{Element, Interaction, Section, ViewBinder};

/// Session state. Written only by the controller.
#[derive(Debug, Default)]
pub struct AppState {
    theme: Theme,
    language: Language,
    projects: Vec<Repository>,
    filter: Filter,
    displayed: Vec<Repository>,
    menu_open: bool,
    nav_shadow: bool,
    revealed: RevealTracker,
}

impl AppState {
    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn projects(&self) -> &[Repository] {
        &self.projects
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn displayed(&self) -> &[Repository] {
        &self.displayed
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn nav_shadow(&self) -> bool {
        self.nav_shadow
    }

    pub fn is_revealed(&self, section: Section) -> bool {
        self.revealed.is_revealed(section)
    }
}

pub struct App<V: ViewBinder> {
    view: V,
    state: AppState,
}

impl<V: ViewBinder> App<V> {
    pub fn new(view: V) -> Self {
        Self {
            view,
            state: AppState::default(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Page-load sequence up to the point the fetch is issued.
    pub fn init(&mut self) {
        self.init_theme();
        self.init_language();
        self.init_sections();
        self.begin_fetch();
    }

    pub fn dispatch(&mut self, interaction: Interaction) {
        match interaction {
            Interaction::ToggleTheme => self.toggle_theme(),
            Interaction::ToggleLanguage => self.toggle_language(),
            Interaction::SelectFilter(f) => self.apply_filter(f),
            Interaction::ToggleMenu => self.toggle_menu(),
            Interaction::FollowLink(href) => self.follow_link(&href),
            Interaction::DownloadCv => self.download_cv(),
            Interaction::Scrolled { offset_px } => self.on_scroll(offset_px),
            Interaction::Visibility(entries) => {
                for entry in entries {
                    if self.state.revealed.observe(entry.section, entry.ratio) {
                        tracing::debug!(section = ?entry.section, "revealing section");
                        self.view.reveal_section(entry.section);
                    }
                }
            }
        }
    }

    // -- preferences --

    fn init_theme(&mut self) {
        self.state.theme = prefs::get_preference(&self.view);
        self.apply_theme();
    }

    pub fn toggle_theme(&mut self) {
        if !self.view.has(Element::ThemeToggle) {
            return;
        }
        self.state.theme = self.state.theme.toggled();
        prefs::set_preference(&mut self.view, self.state.theme);
        self.apply_theme();
    }

    fn apply_theme(&mut self) {
        self.view.set_theme(self.state.theme);
    }

    fn init_language(&mut self) {
        self.state.language = prefs::get_preference(&self.view);
        self.apply_language();
    }

    pub fn toggle_language(&mut self) {
        self.state.language = self.state.language.toggled();
        prefs::set_preference(&mut self.view, self.state.language);
        self.apply_language();
        if !self.state.displayed.is_empty() {
            self.render();
        }
    }

    fn apply_language(&mut self) {
        let lang = self.state.language;
        if self.view.has(Element::LanguageToggle) {
            self.view.set_language_label(&lang.code().to_uppercase());
        }
        for key in self.view.translatable() {
            self.view.write_text(key, i18n::text(key, lang));
        }
    }

    // -- projects --

    pub fn begin_fetch(&mut self) {
        if !self.view.has(Element::ProjectsGrid) {
            tracing::error!("{}", FolioError::MissingElement(Element::ProjectsGrid.label()));
            return;
        }
        self.view.set_grid(GridContent::Loading);
    }

    /// Consumes the single fetch attempt. On failure the project list stays
    /// as it was and the grid shows the static failure message.
    pub fn finish_fetch(&mut self, result: Result<Vec<Repository>>) {
        if !self.view.has(Element::ProjectsGrid) {
            tracing::error!("{}", FolioError::MissingElement(Element::ProjectsGrid.label()));
            return;
        }
        match result {
            Ok(repos) => {
                self.state.projects = rank::rank(repos);
                tracing::info!(count = self.state.projects.len(), "project list ready");
                self.publish_stats();
                self.state.displayed = filter::apply(&self.state.projects, Filter::All);
                self.render();
            }
            Err(e) => {
                tracing::error!(status = ?e.status(), "error fetching GitHub projects: {e}");
                self.state.displayed.clear();
                self.view.set_grid(GridContent::Failed);
            }
        }
    }

    fn publish_stats(&mut self) {
        let stats = Stats::compute(&self.state.projects);
        let slots = self.view.stat_slots();
        for (slot, text) in stats.slot_texts().iter().enumerate().take(slots) {
            self.view.write_stat(slot, text);
        }
    }

    pub fn apply_filter(&mut self, filter: Filter) {
        self.state.filter = filter;
        if self.view.has(Element::FilterBar) {
            self.view.set_active_filter(filter);
        }
        self.state.displayed = filter::apply(&self.state.projects, filter);
        self.render();
    }

    fn render(&mut self) {
        if !self.view.has(Element::ProjectsGrid) {
            tracing::error!("{}", FolioError::MissingElement(Element::ProjectsGrid.label()));
            return;
        }
        let content = if self.state.displayed.is_empty() {
            GridContent::Empty
        } else {
            let lang = self.state.language;
            GridContent::Cards(
                self.state
                    .displayed
                    .iter()
                    .map(|r| ProjectCard::build(r, lang))
                    .collect(),
            )
        };
        self.view.set_grid(content);
    }

    // -- navigation --

    pub fn toggle_menu(&mut self) {
        if !(self.view.has(Element::NavToggle) && self.view.has(Element::NavMenu)) {
            return;
        }
        self.state.menu_open = !self.state.menu_open;
        self.view.set_menu_open(self.state.menu_open);
    }

    /// In-page anchors scroll smoothly; anything else opens externally.
    /// Following any link closes the menu.
    pub fn follow_link(&mut self, href: &str) {
        if self.state.menu_open {
            self.state.menu_open = false;
            self.view.set_menu_open(false);
        }
        if href.starts_with('#') {
            match Section::from_anchor(href) {
                Some(section) if self.view.sections().contains(&section) => {
                    self.view.scroll_to(section);
                }
                _ => tracing::debug!(href, "anchor target not on page"),
            }
        } else {
            self.view.open_external(href);
        }
    }

    pub fn download_cv(&mut self) {
        if self.view.has(Element::CvButton) {
            self.view.open_external(CV_URL);
        }
    }

    pub fn on_scroll(&mut self, offset_px: u32) {
        if !self.view.has(Element::Navbar) {
            return;
        }
        self.state.nav_shadow = offset_px > SHADOW_THRESHOLD_PX;
        self.view.set_nav_shadow(self.state.nav_shadow);
    }

    fn init_sections(&mut self) {
        for section in self.view.sections() {
            self.view.hide_section(section);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::TextKey;
    use crate::profile::MAX_FILTERED;
    use crate::test_utils::{make_repo, with_topics, FakeView};
    use crate::view::VisibilityEntry;

    fn loaded_app(repos: Vec<Repository>) -> App<FakeView> {
        let mut app = App::new(FakeView::new());
        app.init();
        app.finish_fetch(Ok(repos));
        app
    }

    fn sample_repos() -> Vec<Repository> {
        let mut private = make_repo("private-thing", Some("Python"), 99);
        private.private = true;
        let mut fork = make_repo("forked", Some("Shell"), 98);
        fork.fork = true;
        vec![
            make_repo("ShellPhant0m", Some("Shell"), 3),
            make_repo("CVE-2019-16278", Some("C"), 12),
            make_repo("plain-python", Some("Python"), 5),
            private,
            fork,
            make_repo("cupang", Some("PHP"), 1),
        ]
    }

    #[test]
    fn test_init_shows_loading_then_featured() {
        let mut app = App::new(FakeView::new());
        app.init();
        assert_eq!(app.view().grid, Some(GridContent::Loading));

        app.finish_fetch(Ok(sample_repos()));
        let names: Vec<&str> = app.view().grid_names();
        assert_eq!(names, vec!["CVE-2019-16278", "ShellPhant0m", "cupang"]);
        assert_eq!(app.state().filter(), Filter::All);
    }

    #[test]
    fn test_project_list_ranked_and_public_only() {
        let app = loaded_app(sample_repos());
        let projects = app.state().projects();
        assert_eq!(projects.len(), 4);
        assert!(projects.iter().all(|r| !r.private && !r.fork));
        assert!(projects
            .windows(2)
            .all(|w| w[0].stargazers_count >= w[1].stargazers_count));
    }

    #[test]
    fn test_stats_published_in_slot_order() {
        let app = loaded_app(sample_repos());
        assert_eq!(app.view().stats, vec!["4+", "21+", "4+"]);
    }

    #[test]
    fn test_stats_skip_missing_slots() {
        let mut view = FakeView::new();
        view.stat_slots = 2;
        let mut app = App::new(view);
        app.init();
        app.finish_fetch(Ok(sample_repos()));
        assert_eq!(app.view().stats, vec!["4+", "21+"]);
    }

    #[test]
    fn test_fetch_404_shows_failure_and_leaves_list_empty() {
        let mut app = App::new(FakeView::new());
        app.init();
        app.finish_fetch(Err(FolioError::Network {
            status: Some(404),
            message: "Not Found".to_string(),
        }));
        assert_eq!(app.view().grid, Some(GridContent::Failed));
        assert!(app.state().projects().is_empty());
        assert!(app.view().stats.is_empty());
    }

    #[test]
    fn test_fetch_failure_leaves_toggles_working() {
        let mut app = App::new(FakeView::new());
        app.init();
        app.finish_fetch(Err(FolioError::Network {
            status: None,
            message: "connection refused".to_string(),
        }));
        app.dispatch(Interaction::ToggleTheme);
        assert_eq!(app.view().theme, Some(Theme::Light));
        app.dispatch(Interaction::ToggleMenu);
        assert!(app.view().menu_open);
    }

    #[test]
    fn test_filter_recomputes_from_full_list() {
        let mut app = loaded_app(sample_repos());
        app.dispatch(Interaction::SelectFilter(Filter::Python));
        assert_eq!(app.view().grid_names(), vec!["plain-python"]);
        assert_eq!(app.view().active_filter, Some(Filter::Python));

        app.dispatch(Interaction::SelectFilter(Filter::Shell));
        assert_eq!(app.view().grid_names(), vec!["ShellPhant0m"]);
        assert_eq!(app.view().active_filter, Some(Filter::Shell));
        assert_eq!(app.state().filter(), Filter::Shell);
    }

    #[test]
    fn test_security_filter_includes_cve_excludes_plain_python() {
        let mut app = loaded_app(sample_repos());
        app.apply_filter(Filter::Security);
        let names = app.view().grid_names();
        assert!(names.contains(&"CVE-2019-16278"));
        assert!(!names.contains(&"plain-python"));
    }

    #[test]
    fn test_filter_caps_at_twelve() {
        let repos: Vec<Repository> = (0..20)
            .map(|i| with_topics(make_repo(&format!("tool-{i}"), None, i), &["security"]))
            .collect();
        let mut app = loaded_app(repos);
        app.apply_filter(Filter::Security);
        assert_eq!(app.view().grid_names().len(), MAX_FILTERED);
        assert_eq!(app.view().grid_names()[0], "tool-19");
    }

    #[test]
    fn test_empty_filter_shows_placeholder() {
        let mut app = loaded_app(vec![make_repo("ferris", Some("Rust"), 1)]);
        app.apply_filter(Filter::Web);
        assert_eq!(app.view().grid, Some(GridContent::Empty));
    }

    #[test]
    fn test_theme_toggle_twice_round_trips() {
        let mut app = App::new(FakeView::new());
        app.init();
        assert_eq!(app.view().theme, Some(Theme::Dark));

        app.toggle_theme();
        assert_eq!(app.view().theme, Some(Theme::Light));
        assert_eq!(app.view().storage.get("theme").map(String::as_str), Some("light"));

        app.toggle_theme();
        assert_eq!(app.view().theme, Some(Theme::Dark));
        assert_eq!(app.view().storage.get("theme").map(String::as_str), Some("dark"));
        assert_eq!(app.state().theme(), Theme::Dark);
    }

    #[test]
    fn test_init_applies_stored_preferences() {
        let mut view = FakeView::new();
        view.storage.insert("theme".into(), "light".into());
        view.storage.insert("language".into(), "id".into());
        let mut app = App::new(view);
        app.init();
        assert_eq!(app.view().theme, Some(Theme::Light));
        assert_eq!(app.view().language_label.as_deref(), Some("ID"));
        assert_eq!(
            app.view().read_text(TextKey::NavProjects).as_deref(),
            Some("Proyek")
        );
    }

    #[test]
    fn test_language_toggle_rewrites_every_translatable() {
        let mut app = App::new(FakeView::new());
        app.init();
        app.toggle_language();

        assert_eq!(app.state().language(), Language::Id);
        assert_eq!(app.view().storage.get("language").map(String::as_str), Some("id"));
        for key in app.view().translatable() {
            assert_eq!(
                app.view().read_text(key).as_deref(),
                Some(i18n::text(key, Language::Id))
            );
        }
        assert_eq!(app.view().language_label.as_deref(), Some("ID"));
    }

    #[test]
    fn test_language_toggle_resyncs_card_captions() {
        let mut app = loaded_app(sample_repos());
        app.toggle_language();
        let cards = app.view().grid.as_ref().map(|g| g.cards().to_vec()).unwrap();
        assert!(cards.iter().all(|c| c.links[0].caption == "Lihat Kode"));
    }

    #[test]
    fn test_missing_grid_is_tolerated() {
        let mut view = FakeView::new();
        view.missing.insert(Element::ProjectsGrid);
        let mut app = App::new(view);
        app.init();
        app.finish_fetch(Ok(sample_repos()));
        app.apply_filter(Filter::Python);
        assert_eq!(app.view().grid, None);
        assert_eq!(app.view().active_filter, Some(Filter::Python));
    }

    #[test]
    fn test_menu_closes_on_link() {
        let mut app = App::new(FakeView::new());
        app.init();
        app.dispatch(Interaction::ToggleMenu);
        assert!(app.state().menu_open());
        app.dispatch(Interaction::FollowLink("#projects".to_string()));
        assert!(!app.state().menu_open());
        assert!(!app.view().menu_open);
        assert_eq!(app.view().scrolled_to, vec![Section::Projects]);
    }

    #[test]
    fn test_theme_toggle_needs_its_control() {
        let mut view = FakeView::new();
        view.missing.insert(Element::ThemeToggle);
        let mut app = App::new(view);
        app.init();
        app.dispatch(Interaction::ToggleTheme);
        assert_eq!(app.state().theme(), Theme::Dark);
        assert_eq!(app.view().theme, Some(Theme::Dark));
        assert!(app.view().storage.get("theme").is_none());
    }

    #[test]
    fn test_menu_toggle_needs_both_controls() {
        let mut view = FakeView::new();
        view.missing.insert(Element::NavMenu);
        let mut app = App::new(view);
        app.toggle_menu();
        assert!(!app.state().menu_open());
    }

    #[test]
    fn test_unknown_anchor_does_nothing() {
        let mut app = App::new(FakeView::new());
        app.follow_link("#skills");
        assert!(app.view().scrolled_to.is_empty());
        assert!(app.view().opened.is_empty());
    }

    #[test]
    fn test_external_link_and_cv() {
        let mut app = App::new(FakeView::new());
        app.follow_link("https://github.com/andknownmaly");
        app.dispatch(Interaction::DownloadCv);
        assert_eq!(
            app.view().opened,
            vec!["https://github.com/andknownmaly".to_string(), CV_URL.to_string()]
        );
    }

    #[test]
    fn test_cv_button_missing() {
        let mut view = FakeView::new();
        view.missing.insert(Element::CvButton);
        let mut app = App::new(view);
        app.download_cv();
        assert!(app.view().opened.is_empty());
    }

    #[test]
    fn test_scroll_shadow_threshold() {
        let mut app = App::new(FakeView::new());
        app.dispatch(Interaction::Scrolled { offset_px: 50 });
        assert!(!app.view().nav_shadow);
        app.dispatch(Interaction::Scrolled { offset_px: 51 });
        assert!(app.view().nav_shadow);
        app.dispatch(Interaction::Scrolled { offset_px: 0 });
        assert!(!app.view().nav_shadow);
    }

    #[test]
    fn test_sections_hidden_then_revealed_once() {
        let mut app = App::new(FakeView::new());
        app.init();
        assert_eq!(app.view().hidden.len(), Section::ALL.len());

        let entry = |section, ratio| VisibilityEntry { section, ratio };
        app.dispatch(Interaction::Visibility(vec![
            entry(Section::Home, 1.0),
            entry(Section::About, 0.05),
        ]));
        app.dispatch(Interaction::Visibility(vec![
            entry(Section::Home, 0.0),
            entry(Section::Home, 1.0),
            entry(Section::About, 0.2),
        ]));
        assert_eq!(app.view().revealed, vec![Section::Home, Section::About]);
        assert!(app.state().is_revealed(Section::Home));
        assert!(!app.state().is_revealed(Section::Contact));
    }
}
