use crate::projects::card::ProjectCard;
use crate::ui::theme::{self, ThemePalette};
use crate::ui::{spans_width, truncate_with_ellipsis, wrap};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

pub const CARD_HEIGHT: usize = 9;
pub const CARD_MIN_WIDTH: usize = 30;
pub const CARD_GAP: usize = 2;
const DESCRIPTION_LINES: usize = 2;

/// Columns that fit in `width`, and the width each card gets.
pub fn grid_geometry(width: usize) -> (usize, usize) {
    let cols = ((width + CARD_GAP) / (CARD_MIN_WIDTH + CARD_GAP)).max(1);
    let card_w = (width.saturating_sub(CARD_GAP * (cols - 1)) / cols).max(8);
    (cols, card_w)
}

/// Fixed-height box of `CARD_HEIGHT` lines, each exactly `width` cells wide.
pub fn card_lines(
    card: &ProjectCard,
    width: usize,
    selected: bool,
    p: &ThemePalette,
) -> Vec<Line<'static>> {
    let inner = width.saturating_sub(4);
    let border = Style::default().fg(if selected {
        p.selected_border
    } else {
        p.card_border
    });
    let text = Style::default().fg(p.text);
    let dim = Style::default().fg(p.dim_text);

    let mut rows: Vec<Vec<Span<'static>>> = Vec::with_capacity(CARD_HEIGHT - 2);

    rows.push(vec![
        Span::styled(
            format!("{} ", card.icon.glyph()),
            Style::default().fg(theme::icon_color(card.icon)),
        ),
        Span::styled(
            truncate_with_ellipsis(&format!("\u{f121} {}", card.language), inner.saturating_sub(2)),
            dim,
        ),
    ]);

    rows.push(vec![Span::styled(
        truncate_with_ellipsis(&card.name, inner),
        text.add_modifier(Modifier::BOLD),
    )]);

    let mut description = wrap(&card.description, inner, DESCRIPTION_LINES);
    description.resize(DESCRIPTION_LINES, String::new());
    for line in description {
        rows.push(vec![Span::styled(line, text)]);
    }

    let mut topics: Vec<Span<'static>> = Vec::new();
    let mut used = 0;
    for topic in &card.topics {
        let label = format!(" {topic} ");
        let w = unicode_width::UnicodeWidthStr::width(label.as_str());
        if used + w + 1 > inner {
            // Ellipsize the first chip that overflows.
            let avail = inner.saturating_sub(used);
            if avail >= 3 {
                topics.push(Span::styled(
                    truncate_with_ellipsis(&label, avail),
                    Style::default().fg(p.tag_fg).bg(p.tag_bg),
                ));
            }
            break;
        }
        used += w + 1;
        topics.push(Span::styled(label, Style::default().fg(p.tag_fg).bg(p.tag_bg)));
        topics.push(Span::raw(" "));
    }
    rows.push(topics);

    rows.push(vec![
        Span::styled("\u{2605} ", Style::default().fg(p.star)),
        Span::styled(card.stars.to_string(), text),
    ]);

    let mut links: Vec<Span<'static>> = Vec::new();
    let mut used = 0;
    for (i, link) in card.links.iter().enumerate() {
        let key = if i == 0 { "o" } else { "d" };
        let label = format!("[{key}] {}", link.caption);
        let w = unicode_width::UnicodeWidthStr::width(label.as_str());
        if used + w > inner {
            break;
        }
        used += w + 2;
        let style = if i == 0 {
            Style::default().fg(p.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(p.accent)
        };
        links.push(Span::styled(label, style));
        links.push(Span::raw("  "));
    }
    if used > inner {
        links.pop();
    }
    rows.push(links);

    let horizontal = "\u{2500}".repeat(width.saturating_sub(2));
    let mut lines = Vec::with_capacity(CARD_HEIGHT);
    lines.push(Line::from(Span::styled(
        format!("\u{256d}{horizontal}\u{256e}"),
        border,
    )));
    for mut row in rows {
        let pad = inner.saturating_sub(spans_width(&row));
        let mut spans = vec![Span::styled("\u{2502} ", border)];
        spans.append(&mut row);
        spans.push(Span::raw(" ".repeat(pad)));
        spans.push(Span::styled(" \u{2502}", border));
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(Span::styled(
        format!("\u{2570}{horizontal}\u{256f}"),
        border,
    )));
    lines
}
