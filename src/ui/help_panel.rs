use crate::ui::theme::ThemePalette;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Widget},
};

const BINDINGS: &[(&str, &str)] = &[
    ("j/k  \u{2191}/\u{2193}", "Scroll"),
    ("Space / PgUp", "Page down / up"),
    ("g / G", "Top / bottom"),
    ("1-5", "Filter projects"),
    ("Tab", "Next filter"),
    ("h/l  \u{2190}/\u{2192}", "Select card"),
    ("o / Enter", "Open code"),
    ("d", "Open demo"),
    ("c", "Download CV"),
    ("t", "Toggle theme"),
    ("i", "Toggle language"),
    ("m", "Menu"),
    ("?", "This help"),
    ("q / Esc", "Quit / Close"),
];

pub struct HelpPanel<'a> {
    pub palette: &'a ThemePalette,
}

impl<'a> Widget for HelpPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let p = self.palette;
        let popup = super::centered_rect(50, 60, area);
        Clear.render(popup, buf);

        let block = Block::default()
            .title(" Keybindings ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(p.accent))
            .style(Style::default().bg(p.header_bg));
        let inner = block.inner(popup);
        block.render(popup, buf);

        for (i, (key, desc)) in BINDINGS.iter().enumerate() {
            if i >= inner.height as usize {
                break;
            }
            let y = inner.y + i as u16;
            let key_style = Style::default()
                .fg(p.accent)
                .add_modifier(Modifier::BOLD);

            let key_col_w = 16;
            let line = Line::from(vec![
                Span::styled(format!(" {:<width$}", key, width = key_col_w), key_style),
                Span::styled(desc.to_string(), Style::default().fg(p.text)),
            ]);
            buf.set_line(inner.x, y, &line, inner.width);
        }
    }
}
