//! The capability surface the controller drives. The terminal implements it
//! for real; tests substitute a recording fake.

use crate::error::Result;
use crate::i18n::TextKey;
use crate::prefs::Theme;
use crate::projects::card::GridContent;
use crate::projects::filter::Filter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    ThemeToggle,
    LanguageToggle,
    ProjectsGrid,
    FilterBar,
    CvButton,
    NavToggle,
    NavMenu,
    Navbar,
}

impl Element {
    pub fn label(self) -> &'static str {
        match self {
            Element::ThemeToggle => "theme toggle",
            Element::LanguageToggle => "language toggle",
            Element::ProjectsGrid => "projects grid",
            Element::FilterBar => "filter bar",
            Element::CvButton => "cv button",
            Element::NavToggle => "nav toggle",
            Element::NavMenu => "nav menu",
            Element::Navbar => "navbar",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Home,
    About,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: &[Section] = &[
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "#home",
            Section::About => "#about",
            Section::Projects => "#projects",
            Section::Contact => "#contact",
        }
    }

    pub fn from_anchor(href: &str) -> Option<Section> {
        Section::ALL.iter().copied().find(|s| s.anchor() == href)
    }

    pub fn nav_key(self) -> TextKey {
        match self {
            Section::Home => TextKey::NavHome,
            Section::About => TextKey::NavAbout,
            Section::Projects => TextKey::NavProjects,
            Section::Contact => TextKey::NavContact,
        }
    }
}

/// User input, already resolved to the control it hit.
#[derive(Debug, Clone, PartialEq)]
pub enum Interaction {
    ToggleTheme,
    ToggleLanguage,
    SelectFilter(Filter),
    ToggleMenu,
    FollowLink(String),
    DownloadCv,
    Scrolled { offset_px: u32 },
    Visibility(Vec<VisibilityEntry>),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityEntry {
    pub section: Section,
    /// Fraction of the section inside the (margin-shrunk) viewport.
    pub ratio: f32,
}

pub trait ViewBinder {
    fn has(&self, element: Element) -> bool;

    /// Translatable text slots present on the page.
    fn translatable(&self) -> Vec<TextKey>;
    fn write_text(&mut self, key: TextKey, text: &str);
    fn read_text(&self, key: TextKey) -> Option<String>;

    fn stat_slots(&self) -> usize;
    fn write_stat(&mut self, slot: usize, text: &str);

    fn set_theme(&mut self, theme: Theme);
    fn set_language_label(&mut self, label: &str);

    fn set_grid(&mut self, content: GridContent);
    fn set_active_filter(&mut self, filter: Filter);

    fn set_menu_open(&mut self, open: bool);
    fn set_nav_shadow(&mut self, shadow: bool);

    fn sections(&self) -> Vec<Section>;
    fn hide_section(&mut self, section: Section);
    fn reveal_section(&mut self, section: Section);
    fn scroll_to(&mut self, section: Section);

    fn open_external(&mut self, url: &str);

    fn storage_get(&self, key: &str) -> Option<String>;
    fn storage_set(&mut self, key: &str, value: &str) -> Result<()>;
}
