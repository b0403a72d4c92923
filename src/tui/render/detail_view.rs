use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::SubTask;
use crate::tui::app::App;
use crate::tui::wrap::wrap_text;
use crate::util::unicode::truncate_to_width;

use super::helpers::{
    base_style, bold_style, cursor_prefix, dim_line, push_window, row_style, status_style,
};

const TASK_LABEL: &str = " Task: ";

/// Render one task: name, status, commit and its scrollable sub-task list
pub fn render_detail_view(frame: &mut Frame, app: &App, area: Rect) {
    let screen = app.screen();
    let Some(task) = app.task_at(screen.track_idx, screen.phase_idx, screen.task_idx) else {
        return;
    };
    let width = area.width as usize;
    let mut lines: Vec<Line> = Vec::new();

    let label_w = TASK_LABEL.len();
    for (i, part) in wrap_text(&task.name, width.saturating_sub(label_w), "")
        .into_iter()
        .enumerate()
    {
        let lead = if i == 0 {
            Span::styled(TASK_LABEL, bold_style(app))
        } else {
            Span::styled(" ".repeat(label_w), base_style(app))
        };
        lines.push(Line::from(vec![lead, Span::styled(part, base_style(app))]));
    }

    let status = if task.completed { "completed" } else { "pending" };
    let mut status_spans = vec![
        Span::styled(" Status: ", base_style(app)),
        Span::styled(status, status_style(app, status)),
    ];
    if !task.commit.is_empty() {
        status_spans.push(Span::styled("          Commit: ", base_style(app)));
        status_spans.push(Span::styled(task.commit.clone(), bold_style(app)));
    }
    lines.push(Line::from(status_spans));
    lines.push(Line::from(""));

    if task.subtasks.is_empty() {
        lines.push(dim_line(app, "No sub-tasks."));
    } else {
        lines.push(Line::from(Span::styled(
            format!(" Sub-tasks: ({})", task.subtasks.len()),
            bold_style(app),
        )));
        let capacity = (area.height as usize).saturating_sub(lines.len());
        let name_w = width.saturating_sub(11).max(1);
        // The scroll offset doubles as the highlighted sub-task
        push_window(
            &mut lines,
            app,
            task.subtasks.len(),
            screen.scroll,
            capacity,
            "    ",
            |idx, selected| subtask_line(app, &task.subtasks[idx], selected, name_w),
        );
    }

    frame.render_widget(Paragraph::new(lines).style(base_style(app)), area);
}

fn subtask_line(app: &App, sub: &SubTask, selected: bool, name_w: usize) -> Line<'static> {
    let check = if sub.completed {
        Span::styled(
            "[x]",
            Style::default().fg(app.theme.green).bg(app.theme.background),
        )
    } else {
        Span::styled("[ ]", base_style(app))
    };

    Line::from(vec![
        Span::styled("  ", base_style(app)),
        cursor_prefix(app, selected),
        check,
        Span::styled(
            format!(" {}", truncate_to_width(&sub.name, name_w)),
            row_style(base_style(app), selected),
        ),
    ])
}
