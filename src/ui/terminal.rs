use crate::error::Result;
use crate::i18n::TextKey;
use crate::prefs::{FileStorage, Theme};
use crate::profile::ACCOUNT;
use crate::projects::card::GridContent;
use crate::projects::filter::Filter;
use crate::reveal::{intersection_ratio, Span as PxSpan};
use crate::ui::header_bar::{HeaderBar, HEADER_HEIGHT};
use crate::ui::help_panel::HelpPanel;
use crate::ui::input::Mode;
use crate::ui::nav_menu::{menu_links, NavMenu};
use crate::ui::page::{PageLayout, PageModel, ROW_PX};
use crate::ui::project_card::CARD_HEIGHT;
use crate::ui::status_bar::StatusBar;
use crate::ui::theme::palette_for;
use crate::view::{Element, Section, ViewBinder, VisibilityEntry};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::{Block, Paragraph},
    Frame,
};
use std::collections::{BTreeMap, BTreeSet};
use std::process::{Command, ExitStatus, Stdio};
use std::thread::JoinHandle;

/// The real page: holds the view-model the controller writes and draws it.
pub struct TerminalView {
    storage: FileStorage,
    texts: BTreeMap<TextKey, String>,
    stats: [Option<String>; 3],
    theme: Theme,
    language_label: String,
    grid: GridContent,
    active_filter: Filter,
    menu_open: bool,
    menu_selected: usize,
    show_help: bool,
    nav_shadow: bool,
    hidden: BTreeSet<Section>,
    scroll: usize,
    scroll_target: Option<usize>,
    reported_scroll: Option<usize>,
    viewport_rows: usize,
    layout: PageLayout,
    selected_card: usize,
    last_sync: String,
}

impl TerminalView {
    pub fn new(storage: FileStorage) -> Self {
        Self {
            storage,
            texts: BTreeMap::new(),
            stats: [None, None, None],
            theme: Theme::default(),
            language_label: String::new(),
            grid: GridContent::Loading,
            active_filter: Filter::All,
            menu_open: false,
            menu_selected: 0,
            show_help: false,
            nav_shadow: false,
            hidden: BTreeSet::new(),
            scroll: 0,
            scroll_target: None,
            reported_scroll: None,
            viewport_rows: 0,
            layout: PageLayout::default(),
            selected_card: 0,
            last_sync: "never".to_string(),
        }
    }

    pub fn mode(&self) -> Mode {
        if self.show_help {
            Mode::Help
        } else if self.menu_open {
            Mode::Menu
        } else {
            Mode::Page
        }
    }

    pub fn active_filter(&self) -> Filter {
        self.active_filter
    }

    pub fn set_help(&mut self, show: bool) {
        self.show_help = show;
    }

    pub fn mark_synced(&mut self, ok: bool) {
        self.last_sync = if ok {
            chrono::Local::now().format("%H:%M:%S").to_string()
        } else {
            "failed".to_string()
        };
    }

    // -- scrolling --

    fn max_scroll(&self) -> usize {
        self.layout.total_rows.saturating_sub(self.viewport_rows)
    }

    pub fn scroll_by(&mut self, delta: isize) {
        self.scroll_target = None;
        self.scroll = self.scroll.saturating_add_signed(delta).min(self.max_scroll());
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_target = Some(0);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_target = Some(self.max_scroll());
    }

    pub fn page_rows(&self) -> usize {
        self.viewport_rows.saturating_sub(2).max(1)
    }

    /// Advances a smooth scroll one step. Returns whether anything moved.
    pub fn tick(&mut self) -> bool {
        let Some(target) = self.scroll_target else {
            return false;
        };
        let target = target.min(self.max_scroll());
        if self.scroll == target {
            self.scroll_target = None;
            return false;
        }
        let distance = self.scroll.abs_diff(target);
        let step = (distance / 4).max(1);
        if self.scroll < target {
            self.scroll += step;
        } else {
            self.scroll -= step;
        }
        true
    }

    /// Scroll offset in page pixels, once per change.
    pub fn take_scroll_change(&mut self) -> Option<u32> {
        if self.reported_scroll == Some(self.scroll) || self.layout.total_rows == 0 {
            return None;
        }
        self.reported_scroll = Some(self.scroll);
        Some(self.scroll as u32 * ROW_PX)
    }

    pub fn visibility(&self) -> Vec<VisibilityEntry> {
        let viewport = PxSpan {
            top: self.scroll as u32 * ROW_PX,
            height: self.viewport_rows as u32 * ROW_PX,
        };
        self.layout
            .sections
            .iter()
            .filter_map(|(section, _, _)| {
                let span = self.layout.px_span(*section)?;
                Some(VisibilityEntry {
                    section: *section,
                    ratio: intersection_ratio(span, viewport),
                })
            })
            .collect()
    }

    fn current_section(&self) -> Option<Section> {
        self.layout
            .sections
            .iter()
            .rev()
            .find(|(_, top, _)| *top <= self.scroll + 1)
            .map(|(s, _, _)| *s)
    }

    // -- cards --

    pub fn select_card(&mut self, delta: isize) {
        let count = self.grid.cards().len();
        if count == 0 {
            return;
        }
        self.selected_card = self
            .selected_card
            .saturating_add_signed(delta)
            .min(count - 1);
        if let Some(&row) = self.layout.card_rows.get(self.selected_card) {
            let bottom = self.scroll + self.viewport_rows;
            if row < self.scroll || row + CARD_HEIGHT > bottom {
                self.scroll_target = Some(row.saturating_sub(1));
            }
        }
    }

    /// Link `idx` of the selected card, if it has one.
    pub fn selected_link(&self, idx: usize) -> Option<String> {
        self.grid
            .cards()
            .get(self.selected_card)
            .and_then(|c| c.links.get(idx))
            .map(|l| l.url.clone())
    }

    // -- menu --

    pub fn move_menu(&mut self, delta: isize) {
        let count = menu_links().len();
        self.menu_selected = self.menu_selected.saturating_add_signed(delta).min(count - 1);
    }

    pub fn menu_href(&self, idx: Option<usize>) -> Option<String> {
        menu_links()
            .into_iter()
            .nth(idx.unwrap_or(self.menu_selected))
            .map(|l| l.href)
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();
        let palette = palette_for(self.theme);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(size);
        let body = chunks[1];

        let model = PageModel {
            texts: &self.texts,
            stats: &self.stats,
            grid: &self.grid,
            active_filter: self.active_filter,
            hidden: &self.hidden,
            selected_card: self.selected_card,
            palette: &palette,
        };
        let (lines, layout) = model.build(body.width as usize);
        if layout != self.layout || self.viewport_rows != body.height as usize {
            // Geometry moved; force a fresh scroll/visibility report.
            self.reported_scroll = None;
        }
        self.layout = layout;
        self.viewport_rows = body.height as usize;
        self.scroll = self.scroll.min(self.max_scroll());

        let page_style = Style::default().bg(palette.page_bg).fg(palette.text);
        frame.render_widget(Block::default().style(page_style), body);
        frame.render_widget(
            Paragraph::new(lines)
                .style(page_style)
                .scroll((self.scroll.min(u16::MAX as usize) as u16, 0)),
            body,
        );

        frame.render_widget(
            HeaderBar {
                texts: &self.texts,
                theme: self.theme,
                language_label: &self.language_label,
                shadow: self.nav_shadow,
                current: self.current_section(),
                palette: &palette,
            },
            chunks[0],
        );

        frame.render_widget(
            StatusBar {
                account: ACCOUNT,
                last_sync: &self.last_sync,
                filter: self.active_filter,
                shown: self.grid.cards().len(),
                palette: &palette,
            },
            chunks[2],
        );

        if self.menu_open {
            frame.render_widget(
                NavMenu {
                    texts: &self.texts,
                    selected: self.menu_selected,
                    palette: &palette,
                },
                body,
            );
        }

        if self.show_help {
            frame.render_widget(HelpPanel { palette: &palette }, size);
        }
    }
}

impl ViewBinder for TerminalView {
    fn has(&self, _element: Element) -> bool {
        true
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
        self.stats.len()
    }

    fn write_stat(&mut self, slot: usize, text: &str) {
        if let Some(s) = self.stats.get_mut(slot) {
            *s = Some(text.to_string());
        }
    }

    fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    fn set_language_label(&mut self, label: &str) {
        self.language_label = label.to_string();
    }

    fn set_grid(&mut self, content: GridContent) {
        self.grid = content;
        self.selected_card = 0;
    }

    fn set_active_filter(&mut self, filter: Filter) {
        self.active_filter = filter;
    }

    fn set_menu_open(&mut self, open: bool) {
        self.menu_open = open;
        if open {
            self.menu_selected = 0;
        }
    }

    fn set_nav_shadow(&mut self, shadow: bool) {
        self.nav_shadow = shadow;
    }

    fn sections(&self) -> Vec<Section> {
        Section::ALL.to_vec()
    }

    fn hide_section(&mut self, section: Section) {
        self.hidden.insert(section);
    }

    fn reveal_section(&mut self, section: Section) {
        self.hidden.remove(&section);
    }

    fn scroll_to(&mut self, section: Section) {
        if let Some(top) = self.layout.section_top(section) {
            self.scroll_target = Some(top);
        }
    }

    fn open_external(&mut self, url: &str) {
        tracing::info!(url, "opening external link");
        if let Err(e) = open_url(url) {
            tracing::warn!(url, "failed to launch opener: {e}");
        }
    }

    fn storage_get(&self, key: &str) -> Option<String> {
        self.storage.get(key)
    }

    fn storage_set(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage.set(key, value)
    }
}

fn open_url(url: &str) -> std::io::Result<()> {
    let mut cmd = if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]);
        c
    } else {
        Command::new("xdg-open")
    };
    cmd.arg(url);
    launch(cmd).map(|_| ())
}

/// Spawns the opener detached from the terminal. A background thread waits
/// on it so the exited child does not linger as a zombie.
fn launch(mut cmd: Command) -> std::io::Result<JoinHandle<std::io::Result<ExitStatus>>> {
    let mut child = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(std::thread::spawn(move || child.wait()))
}
