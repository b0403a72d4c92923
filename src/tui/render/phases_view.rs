use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Phase;
use crate::ops::track_ops::phase_status;
use crate::tui::app::App;
use crate::tui::wrap::wrap_text;

use super::helpers::{
    base_style, cell, cursor_prefix, dim_line, push_window, row_style, status_style,
};

const NUM_W: usize = 4;
const NAME_W: usize = 34;
const TASKS_W: usize = 10;

/// Render the phases of the selected track with task progress
pub fn render_phases_view(frame: &mut Frame, app: &App, area: Rect) {
    let screen = app.screen();
    let Some(track) = app.track_at(screen.track_idx) else {
        return;
    };

    let width = (area.width as usize).saturating_sub(2);
    let mut lines: Vec<Line> = wrap_text(&track.description, width, "")
        .iter()
        .map(|l| dim_line(app, l))
        .collect();

    if track.phases.is_empty() {
        lines.push(dim_line(app, "No phases."));
    } else {
        lines.push(dim_line(
            app,
            &format!(
                " {}{}{}Status",
                cell("#", NUM_W, NUM_W),
                cell("Phase", NAME_W, NAME_W),
                cell("Tasks", TASKS_W, TASKS_W),
            ),
        ));
        let capacity = (area.height as usize).saturating_sub(lines.len());
        push_window(
            &mut lines,
            app,
            track.phases.len(),
            screen.cursor,
            capacity,
            "  ",
            |idx, selected| phase_line(app, &track.phases[idx], selected),
        );
    }

    frame.render_widget(Paragraph::new(lines).style(base_style(app)), area);
}

fn phase_line(app: &App, phase: &Phase, selected: bool) -> Line<'static> {
    let base = row_style(base_style(app), selected);
    let status = phase_status(phase);
    let progress = format!("{}/{}", phase.completed_tasks(), phase.tasks.len());

    Line::from(vec![
        cursor_prefix(app, selected),
        Span::styled(cell(&phase.number.to_string(), NUM_W, NUM_W), base),
        Span::styled(cell(&phase.name, NAME_W - 2, NAME_W), base),
        Span::styled(cell(&progress, TASKS_W, TASKS_W), base),
        Span::styled(status, row_style(status_style(app, status), selected)),
    ])
}
