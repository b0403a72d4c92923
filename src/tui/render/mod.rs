pub mod detail_view;
pub mod edit_view;
pub mod footer;
pub mod header;
mod helpers;
pub mod phases_view;
pub mod quit_prompt;
pub mod tasks_view;
pub mod tracks_view;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::{App, ScreenKind};

/// Main render function, dispatches to the current screen's renderer
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    let kind = app.screen().kind;
    if kind == ScreenKind::Quit {
        quit_prompt::render_quit_prompt(frame, app, area);
        return;
    }

    // Layout: header (2 rows) | content | footer (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title + separator
            Constraint::Min(1),    // content area
            Constraint::Length(1), // key help
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);

    match kind {
        ScreenKind::Tracks => tracks_view::render_tracks_view(frame, app, chunks[1]),
        ScreenKind::Phases => phases_view::render_phases_view(frame, app, chunks[1]),
        ScreenKind::Tasks => tasks_view::render_tasks_view(frame, app, chunks[1]),
        ScreenKind::Detail => detail_view::render_detail_view(frame, app, chunks[1]),
        ScreenKind::Edit => edit_view::render_edit_view(frame, app, chunks[1]),
        ScreenKind::Quit => {}
    }

    footer::render_footer(frame, app, chunks[2]);
}
