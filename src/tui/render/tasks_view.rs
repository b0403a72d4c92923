use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Task;
use crate::tui::app::App;
use crate::tui::wrap::wrap_text;

use super::helpers::{
    base_style, cell, cursor_prefix, dim_line, push_window, row_style, status_style,
};

const NUM_W: usize = 4;
const NAME_W: usize = 36;
const SUBS_W: usize = 8;
const STATUS_W: usize = 10;

/// Render the tasks of the selected phase with sub-task progress and commits
pub fn render_tasks_view(frame: &mut Frame, app: &App, area: Rect) {
    let screen = app.screen();
    let Some(phase) = app.phase_at(screen.track_idx, screen.phase_idx) else {
        return;
    };

    let width = (area.width as usize).saturating_sub(2);
    let mut lines: Vec<Line> = wrap_text(&phase.name, width, "")
        .iter()
        .map(|l| dim_line(app, l))
        .collect();

    if phase.tasks.is_empty() {
        lines.push(dim_line(app, "No tasks."));
    } else {
        lines.push(dim_line(
            app,
            &format!(
                " {}{}{}{}Commit",
                cell("#", NUM_W, NUM_W),
                cell("Task", NAME_W, NAME_W),
                cell("Subs", SUBS_W, SUBS_W),
                cell("Status", STATUS_W, STATUS_W),
            ),
        ));
        let capacity = (area.height as usize).saturating_sub(lines.len());
        push_window(
            &mut lines,
            app,
            phase.tasks.len(),
            screen.cursor,
            capacity,
            "  ",
            |idx, selected| task_line(app, idx, &phase.tasks[idx], selected),
        );
    }

    frame.render_widget(Paragraph::new(lines).style(base_style(app)), area);
}

fn task_line(app: &App, idx: usize, task: &Task, selected: bool) -> Line<'static> {
    let base = row_style(base_style(app), selected);
    let status = if task.completed { "done" } else { "pending" };
    let subs = format!("{}/{}", task.completed_subtasks(), task.subtasks.len());
    let commit = if task.commit.is_empty() {
        "\u{2014}".to_string()
    } else {
        task.commit.clone()
    };

    Line::from(vec![
        cursor_prefix(app, selected),
        Span::styled(cell(&(idx + 1).to_string(), NUM_W, NUM_W), base),
        Span::styled(cell(&task.name, NAME_W - 2, NAME_W), base),
        Span::styled(cell(&subs, SUBS_W, SUBS_W), base),
        Span::styled(
            cell(status, STATUS_W, STATUS_W),
            row_style(status_style(app, status), selected),
        ),
        Span::styled(commit, base),
    ])
}
