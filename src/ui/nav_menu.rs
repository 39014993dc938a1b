use crate::i18n::TextKey;
use crate::profile::ACCOUNT;
use crate::ui::theme::ThemePalette;
use crate::view::Section;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Widget},
};
use std::collections::BTreeMap;

pub struct MenuLink {
    pub key: Option<TextKey>,
    pub label: &'static str,
    pub href: String,
}

/// In-page anchors first, then the profile link.
pub fn menu_links() -> Vec<MenuLink> {
    let mut links: Vec<MenuLink> = Section::ALL
        .iter()
        .map(|s| MenuLink {
            key: Some(s.nav_key()),
            label: "",
            href: s.anchor().to_string(),
        })
        .collect();
    links.push(MenuLink {
        key: None,
        label: "GitHub",
        href: format!("https://github.com/{ACCOUNT}"),
    });
    links
}

pub struct NavMenu<'a> {
    pub texts: &'a BTreeMap<TextKey, String>,
    pub selected: usize,
    pub palette: &'a ThemePalette,
}

impl NavMenu<'_> {
    fn label(&self, link: &MenuLink) -> String {
        link.key
            .and_then(|k| self.texts.get(&k).cloned())
            .unwrap_or_else(|| link.label.to_string())
    }
}

impl<'a> Widget for NavMenu<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let p = self.palette;
        let links = menu_links();
        let height = (links.len() as u16 + 2).min(area.height);
        let width = 28.min(area.width);
        let popup = Rect::new(area.right().saturating_sub(width), area.y, width, height);
        Clear.render(popup, buf);

        let block = Block::default()
            .title(" Menu ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(p.accent))
            .style(Style::default().bg(p.header_bg));
        let inner = block.inner(popup);
        block.render(popup, buf);

        for (i, link) in links.iter().enumerate() {
            if i >= inner.height as usize {
                break;
            }
            let style = if i == self.selected {
                Style::default()
                    .fg(p.filter_active_fg)
                    .bg(p.filter_active_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(p.text)
            };
            let marker = if link.href.starts_with('#') { "#" } else { "\u{2197}" };
            let line = Line::from(vec![
                Span::styled(format!(" {} ", i + 1), Style::default().fg(p.dim_text)),
                Span::styled(format!("{marker} {}", self.label(link)), style),
            ]);
            buf.set_line(inner.x, inner.y + i as u16, &line, inner.width);
        }
    }
}
