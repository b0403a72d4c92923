use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Track;
use crate::tui::app::App;
use crate::util::unicode::truncate_to_width;

use super::helpers::{
    base_style, cell, cursor_prefix, dim_line, push_window, row_style, status_style,
};

const ID_W: usize = 28;
const TYPE_W: usize = 10;
const STATUS_W: usize = 14;
const PHASES_W: usize = 8;

/// Render the track list: one row per visible track
pub fn render_tracks_view(frame: &mut Frame, app: &App, area: Rect) {
    let tracks = app.visible_tracks();
    let mut lines: Vec<Line> = Vec::new();

    if tracks.is_empty() {
        lines.push(dim_line(app, "No tracks found."));
    } else {
        lines.push(dim_line(
            app,
            &format!(
                " {}{}{}{}Description",
                cell("Track ID", ID_W, ID_W),
                cell("Type", TYPE_W, TYPE_W),
                cell("Status", STATUS_W, STATUS_W),
                cell("Phases", PHASES_W, PHASES_W),
            ),
        ));

        let capacity = (area.height as usize).saturating_sub(1);
        let desc_w = (area.width as usize)
            .saturating_sub(2 + ID_W + TYPE_W + STATUS_W + PHASES_W)
            .max(8);
        push_window(
            &mut lines,
            app,
            tracks.len(),
            app.screen().cursor,
            capacity,
            "  ",
            |idx, selected| track_line(app, tracks[idx], selected, desc_w),
        );
    }

    frame.render_widget(Paragraph::new(lines).style(base_style(app)), area);
}

fn track_line(app: &App, track: &Track, selected: bool, desc_w: usize) -> Line<'static> {
    let base = row_style(base_style(app), selected);
    let marker = if track.is_archived() { " *" } else { "" };
    let status = format!("{}{marker}", track.status);

    Line::from(vec![
        cursor_prefix(app, selected),
        Span::styled(cell(&track.track_id, ID_W - 2, ID_W), base),
        Span::styled(cell(&track.kind, TYPE_W, TYPE_W), base),
        Span::styled(
            cell(&status, STATUS_W, STATUS_W),
            row_style(status_style(app, &track.status), selected),
        ),
        Span::styled(cell(&track.phases.len().to_string(), PHASES_W, PHASES_W), base),
        Span::styled(truncate_to_width(&track.description, desc_w), base),
    ])
}
