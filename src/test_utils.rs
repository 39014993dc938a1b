#![cfg(test)]

use crate::error::Result;
use crate::github::types::Repository;
use crate::i18n::TextKey;
use crate::prefs::Theme;
use crate::projects::card::GridContent;
use crate::projects::filter::Filter;
use crate::view::{Element, Section, ViewBinder};
use std::collections::{BTreeMap, HashMap, HashSet};

pub fn make_repo(name: &str, language: Option<&str>, stars: u32) -> Repository {
    Repository {
        name: name.to_string(),
        description: None,
        language: language.map(String::from),
        topics: Vec::new(),
        stargazers_count: stars,
        private: false,
        fork: false,
        html_url: format!("https://github.com/andknownmaly/{name}"),
        homepage: None,
    }
}

pub fn with_topics(mut repo: Repository, topics: &[&str]) -> Repository {
    repo.topics = topics.iter().map(|t| t.to_string()).collect();
    repo
}

/// Records every binder call; `missing` removes elements from the page.
#[derive(Debug)]
pub struct FakeView {
    pub missing: HashSet<Element>,
    pub storage: HashMap<String, String>,
    pub texts: BTreeMap<TextKey, String>,
    pub stat_slots: usize,
    pub stats: Vec<String>,
    pub theme: Option<Theme>,
    pub language_label: Option<String>,
    pub grid: Option<GridContent>,
    pub active_filter: Option<Filter>,
    pub menu_open: bool,
    pub nav_shadow: bool,
    pub hidden: Vec<Section>,
    pub revealed: Vec<Section>,
    pub scrolled_to: Vec<Section>,
    pub opened: Vec<String>,
}

impl FakeView {
    pub fn new() -> Self {
        Self {
            missing: HashSet::new(),
            storage: HashMap::new(),
            texts: BTreeMap::new(),
            stat_slots: 3,
            stats: Vec::new(),
            theme: None,
            language_label: None,
            grid: None,
            active_filter: None,
            menu_open: false,
            nav_shadow: false,
            hidden: Vec::new(),
            revealed: Vec::new(),
            scrolled_to: Vec::new(),
            opened: Vec::new(),
        }
    }

    pub fn grid_names(&self) -> Vec<&str> {
        self.grid
            .as_ref()
            .map(|g| g.cards().iter().map(|c| c.name.as_str()).collect())
            .unwrap_or_default()
    }
}

impl ViewBinder for FakeView {
    fn has(&self, element: Element) -> bool {
        !self.missing.contains(&element)
    }

    fn translatable(&self) -> Vec<TextKey> {
        TextKey::ALL.to_vec()
    }

    fn write_text(&mut self, key: TextKey, text: &str) {
        self.texts.insert(key, text.to_string());
    }

    fn read_text(&self, key: TextKey) -> Option<String> {
        self.texts.get(&key).cloned()
    }

    fn stat_slots(&self) -> usize {
        self.stat_slots
    }

    fn write_stat(&mut self, slot: usize, text: &str) {
        if self.stats.len() <= slot {
            self.stats.resize(slot + 1, String::new());
        }
        self.stats[slot] = text.to_string();
    }

    fn set_theme(&mut self, theme: Theme) {
        self.theme = Some(theme);
    }

    fn set_language_label(&mut self, label: &str) {
        self.language_label = Some(label.to_string());
    }

    fn set_grid(&mut self, content: GridContent) {
        self.grid = Some(content);
    }

    fn set_active_filter(&mut self, filter: Filter) {
        self.active_filter = Some(filter);
    }

    fn set_menu_open(&mut self, open: bool) {
        self.menu_open = open;
    }

    fn set_nav_shadow(&mut self, shadow: bool) {
        self.nav_shadow = shadow;
    }

    fn sections(&self) -> Vec<Section> {
        Section::ALL.to_vec()
    }

    fn hide_section(&mut self, section: Section) {
        self.hidden.push(section);
    }

    fn reveal_section(&mut self, section: Section) {
        self.revealed.push(section);
    }

    fn scroll_to(&mut self, section: Section) {
        self.scrolled_to.push(section);
    }

    fn open_external(&mut self, url: &str) {
        self.opened.push(url.to_string());
    }

    fn storage_get(&self, key: &str) -> Option<String> {
        self.storage.get(key).cloned()
    }

    fn storage_set(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
