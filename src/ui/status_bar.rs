use crate::projects::filter::Filter;
use crate::ui::theme::ThemePalette;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBar<'a> {
    pub account: &'a str,
    pub last_sync: &'a str,
    pub filter: Filter,
    pub shown: usize,
    pub palette: &'a ThemePalette,
}

impl<'a> Widget for StatusBar<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let p = self.palette;
        let bg = Style::default().bg(p.status_bg);
        for x in area.x..area.right() {
            buf[(x, area.y)].set_style(bg);
        }

        let sep = Span::styled("\u{2502}", Style::default().fg(p.dim_text).bg(p.status_bg));
        let spans = vec![
            Span::styled(
                format!(" @{} ", self.account),
                Style::default()
                    .fg(p.accent)
                    .bg(p.status_bg)
                    .add_modifier(Modifier::BOLD),
            ),
            sep.clone(),
            Span::styled(
                format!(" filter: {} ({}) ", self.filter, self.shown),
                Style::default().fg(p.text).bg(p.status_bg),
            ),
            sep,
            Span::styled(
                format!(" synced: {} ", self.last_sync),
                Style::default().fg(p.text).bg(p.status_bg),
            ),
            Span::styled(
                " ? help ",
                Style::default().fg(p.dim_text).bg(p.status_bg),
            ),
        ];
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
