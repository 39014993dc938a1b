use crate::i18n::TextKey;
use crate::prefs::Theme;
use crate::ui::theme::{self, ThemePalette};
use crate::view::Section;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use std::collections::BTreeMap;
use unicode_width::UnicodeWidthStr;

pub const HEADER_HEIGHT: u16 = 2;

pub struct HeaderBar<'a> {
    pub texts: &'a BTreeMap<TextKey, String>,
    pub theme: Theme,
    pub language_label: &'a str,
    pub shadow: bool,
    pub current: Option<Section>,
    pub palette: &'a ThemePalette,
}

impl<'a> Widget for HeaderBar<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        if area.height == 0 {
            return;
        }
        let p = self.palette;
        let bg = Style::default().bg(p.header_bg);
        for x in area.x..area.right() {
            buf[(x, area.y)].set_style(bg);
        }

        let mut spans: Vec<Span<'static>> = vec![Span::styled(
            " \u{f121} folio",
            Style::default()
                .fg(p.accent)
                .bg(p.header_bg)
                .add_modifier(Modifier::BOLD),
        )];
        spans.push(Span::styled(
            " \u{2503} ",
            Style::default().fg(p.shadow).bg(p.header_bg),
        ));

        for section in Section::ALL {
            let label = self
                .texts
                .get(&section.nav_key())
                .cloned()
                .unwrap_or_default();
            let style = if self.current == Some(*section) {
                Style::default().fg(p.accent).bg(p.header_bg).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(p.dim_text).bg(p.header_bg)
            };
            spans.push(Span::styled(format!("{label}  "), style));
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);

        let right = format!(
            "{} t  {} i  \u{2630} m ",
            theme::toggle_glyph(self.theme),
            self.language_label
        );
        let right_w = UnicodeWidthStr::width(right.as_str());
        if (area.width as usize) > right_w {
            let x = area.x + (area.width as usize - right_w) as u16;
            buf.set_line(
                x,
                area.y,
                &Line::from(Span::styled(right, Style::default().fg(p.text).bg(p.header_bg))),
                right_w as u16,
            );
        }

        if area.height > 1 {
            let y = area.y + 1;
            let style = if self.shadow {
                Style::default().fg(p.shadow).bg(p.page_bg)
            } else {
                Style::default().fg(p.page_bg).bg(p.page_bg)
            };
            let glyph = if self.shadow { "\u{2580}" } else { " " };
            for x in area.x..area.right() {
                buf[(x, y)].set_symbol(glyph).set_style(style);
            }
        }
    }
}
