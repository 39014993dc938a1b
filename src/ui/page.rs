use crate::i18n::TextKey;
use crate::projects::card::GridContent;
use crate::projects::filter::Filter;
use crate::reveal::Span as PxSpan;
use crate::ui::project_card::{card_lines, grid_geometry, CARD_GAP, CARD_HEIGHT};
use crate::ui::theme::ThemePalette;
use crate::view::Section;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use std::collections::{BTreeMap, BTreeSet};

/// One terminal row stands in for this many page pixels.
pub const ROW_PX: u32 = 20;

pub struct PageModel<'a> {
    pub texts: &'a BTreeMap<TextKey, String>,
    pub stats: &'a [Option<String>; 3],
    pub grid: &'a GridContent,
    pub active_filter: Filter,
    pub hidden: &'a BTreeSet<Section>,
    pub selected_card: usize,
    pub palette: &'a ThemePalette,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLayout {
    /// (section, first row, row count) in page order.
    pub sections: Vec<(Section, usize, usize)>,
    /// First row of each card, for keeping the selection in view.
    pub card_rows: Vec<usize>,
    pub total_rows: usize,
}

impl PageLayout {
    pub fn section_top(&self, section: Section) -> Option<usize> {
        self.sections
            .iter()
            .find(|(s, _, _)| *s == section)
            .map(|(_, top, _)| *top)
    }

    pub fn px_span(&self, section: Section) -> Option<PxSpan> {
        self.sections
            .iter()
            .find(|(s, _, _)| *s == section)
            .map(|(_, top, height)| PxSpan {
                top: *top as u32 * ROW_PX,
                height: *height as u32 * ROW_PX,
            })
    }
}

pub fn filter_key(filter: Filter) -> TextKey {
    match filter {
        Filter::All => TextKey::FilterAll,
        Filter::Python => TextKey::FilterPython,
        Filter::Shell => TextKey::FilterShell,
        Filter::Web => TextKey::FilterWeb,
        Filter::Security => TextKey::FilterSecurity,
    }
}

impl PageModel<'_> {
    fn text(&self, key: TextKey) -> String {
        self.texts.get(&key).cloned().unwrap_or_default()
    }

    fn heading(&self, key: TextKey) -> Line<'static> {
        Line::from(Span::styled(
            format!("  {}", self.text(key)),
            Style::default()
                .fg(self.palette.accent)
                .add_modifier(Modifier::BOLD),
        ))
    }

    fn body(&self, key: TextKey) -> Line<'static> {
        Line::from(Span::styled(
            format!("  {}", self.text(key)),
            Style::default().fg(self.palette.text),
        ))
    }

    /// Every line of the page plus where each section landed.
    pub fn build(&self, width: usize) -> (Vec<Line<'static>>, PageLayout) {
        let mut lines: Vec<Line<'static>> = Vec::new();
        let mut layout = PageLayout::default();

        for section in Section::ALL {
            let top = lines.len();
            let mut body = match section {
                Section::Home => self.home(),
                Section::About => self.about(),
                Section::Projects => {
                    let (grid, card_rows) = self.projects(width);
                    layout
                        .card_rows
                        .extend(card_rows.into_iter().map(|r| r + top));
                    grid
                }
                Section::Contact => self.contact(),
            };
            if self.hidden.contains(section) {
                body = vec![Line::default(); body.len()];
            }
            layout.sections.push((*section, top, body.len()));
            lines.append(&mut body);
        }

        layout.total_rows = lines.len();
        (lines, layout)
    }

    fn home(&self) -> Vec<Line<'static>> {
        let p = self.palette;
        vec![
            Line::default(),
            Line::from(Span::styled(
                format!("  {}", self.text(TextKey::HeroGreeting)),
                Style::default().fg(p.text).add_modifier(Modifier::BOLD),
            )),
            self.body(TextKey::HeroTagline),
            Line::default(),
            Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    format!(" [c] {} ", self.text(TextKey::DownloadCv)),
                    Style::default()
                        .fg(p.filter_active_fg)
                        .bg(p.filter_active_bg)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::default(),
        ]
    }

    fn about(&self) -> Vec<Line<'static>> {
        let p = self.palette;
        let labels = [
            TextKey::StatProjects,
            TextKey::StatStars,
            TextKey::StatLanguages,
        ];
        let mut stats = vec![Span::raw("  ")];
        for (value, label) in self.stats.iter().zip(labels) {
            stats.push(Span::styled(
                value.clone().unwrap_or_else(|| "0".to_string()),
                Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
            ));
            stats.push(Span::styled(
                format!(" {}    ", self.text(label)),
                Style::default().fg(p.dim_text),
            ));
        }
        vec![
            self.heading(TextKey::AboutHeading),
            self.body(TextKey::AboutBody),
            Line::default(),
            Line::from(stats),
            Line::default(),
        ]
    }

    fn projects(&self, width: usize) -> (Vec<Line<'static>>, Vec<usize>) {
        let p = self.palette;
        let mut lines = vec![self.heading(TextKey::ProjectsHeading)];

        let mut bar = vec![Span::raw("  ")];
        for (i, f) in Filter::ALL.iter().enumerate() {
            let label = format!(" {} {} ", i + 1, self.text(filter_key(*f)));
            let style = if *f == self.active_filter {
                Style::default()
                    .fg(p.filter_active_fg)
                    .bg(p.filter_active_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(p.dim_text)
            };
            bar.push(Span::styled(label, style));
            bar.push(Span::raw(" "));
        }
        lines.push(Line::from(bar));
        lines.push(Line::default());

        let mut card_rows = Vec::new();
        match self.grid.message() {
            Some(message) => {
                let style = if matches!(self.grid, GridContent::Failed) {
                    Style::default().fg(p.error_fg)
                } else {
                    Style::default().fg(p.dim_text)
                };
                lines.push(Line::from(Span::styled(format!("  {message}"), style)));
            }
            None => {
                let usable = width.saturating_sub(4);
                let (cols, card_w) = grid_geometry(usable);
                let cards = self.grid.cards();
                for (row_idx, chunk) in cards.chunks(cols).enumerate() {
                    let row_top = lines.len();
                    let rendered: Vec<Vec<Line<'static>>> = chunk
                        .iter()
                        .enumerate()
                        .map(|(i, card)| {
                            let idx = row_idx * cols + i;
                            card_rows.push(row_top);
                            card_lines(card, card_w, idx == self.selected_card, p)
                        })
                        .collect();
                    for line_idx in 0..CARD_HEIGHT {
                        let mut spans = vec![Span::raw("  ")];
                        for (i, card) in rendered.iter().enumerate() {
                            if i > 0 {
                                spans.push(Span::raw(" ".repeat(CARD_GAP)));
                            }
                            spans.extend(card[line_idx].spans.iter().cloned());
                        }
                        lines.push(Line::from(spans));
                    }
                }
            }
        }
        lines.push(Line::default());
        (lines, card_rows)
    }

    fn contact(&self) -> Vec<Line<'static>> {
        vec![
            self.heading(TextKey::ContactHeading),
            self.body(TextKey::ContactBody),
            Line::default(),
        ]
    }
}
