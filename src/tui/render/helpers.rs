use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::app::App;
use crate::util::calc_viewport;
use crate::util::unicode::{pad_to_width, truncate_to_width};

pub(super) fn base_style(app: &App) -> Style {
    Style::default().fg(app.theme.text).bg(app.theme.background)
}

pub(super) fn dim_style(app: &App) -> Style {
    Style::default().fg(app.theme.dim).bg(app.theme.background)
}

pub(super) fn bold_style(app: &App) -> Style {
    Style::default()
        .fg(app.theme.text_bright)
        .bg(app.theme.background)
        .add_modifier(Modifier::BOLD)
}

/// Style for a status value; unmapped statuses use plain text color
pub(super) fn status_style(app: &App, status: &str) -> Style {
    let fg = app.theme.status_color(status).unwrap_or(app.theme.text);
    Style::default().fg(fg).bg(app.theme.background)
}

/// Truncate to `max` cells, then pad to `width`
pub(super) fn cell(s: &str, max: usize, width: usize) -> String {
    pad_to_width(&truncate_to_width(s, max), width)
}

/// Row prefix: a highlighted `> ` on the selected row, two spaces otherwise
pub(super) fn cursor_prefix(app: &App, selected: bool) -> Span<'static> {
    if selected {
        Span::styled(
            "> ",
            Style::default()
                .fg(app.theme.highlight)
                .bg(app.theme.background)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled("  ", base_style(app))
    }
}

/// Bold the cells of the selected row
pub(super) fn row_style(base: Style, selected: bool) -> Style {
    if selected {
        base.add_modifier(Modifier::BOLD)
    } else {
        base
    }
}

/// One-line dim text with a leading space
pub(super) fn dim_line(app: &App, text: &str) -> Line<'static> {
    Line::from(Span::styled(format!(" {text}"), dim_style(app)))
}

/// Append the rows of a scrolling list to `lines`.
///
/// The window comes from the viewport engine; hidden rows are summarized by
/// `↑ N more above` / `↓ N more below` lines prefixed with `indent`.
pub(super) fn push_window<'a>(
    lines: &mut Vec<Line<'a>>,
    app: &App,
    total: usize,
    cursor: usize,
    capacity: usize,
    indent: &str,
    mut row: impl FnMut(usize, bool) -> Line<'a>,
) {
    let vp = calc_viewport(total, cursor, capacity);
    let cursor = cursor.min(total.saturating_sub(1));

    if vp.more_above > 0 {
        lines.push(Line::from(Span::styled(
            format!("{indent}\u{2191} {} more above", vp.more_above),
            dim_style(app),
        )));
    }
    for idx in vp.range() {
        lines.push(row(idx, idx == cursor));
    }
    if vp.more_below > 0 {
        lines.push(Line::from(Span::styled(
            format!("{indent}\u{2193} {} more below", vp.more_below),
            dim_style(app),
        )));
    }
}
