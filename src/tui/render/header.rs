use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, ScreenKind, VERSION};
use crate::util::unicode::{display_width, truncate_to_width};

use super::helpers::{base_style, bold_style, dim_style};

/// Render the title bar with breadcrumbs and a key hint, plus a separator rule
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(1), // separator
        ])
        .split(area);

    let mut spans = vec![
        Span::styled(" ", base_style(app)),
        Span::styled("Conductor TUI", bold_style(app)),
        Span::styled(format!(" v{VERSION}"), dim_style(app)),
    ];
    for crumb in breadcrumbs(app) {
        spans.push(Span::styled(" ", base_style(app)));
        spans.push(Span::styled(">", dim_style(app)));
        spans.push(Span::styled(format!(" {crumb}"), base_style(app)));
    }

    let hint = hint(app);
    let used: usize = spans.iter().map(|s| display_width(&s.content)).sum();
    let gap = (area.width as usize)
        .saturating_sub(used + display_width(hint) + 1)
        .max(1);
    spans.push(Span::styled(" ".repeat(gap), base_style(app)));
    spans.push(Span::styled(hint, dim_style(app)));
    frame.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);

    let rule = "\u{2500}".repeat((area.width as usize).saturating_sub(2));
    let separator = Line::from(Span::styled(format!(" {rule}"), dim_style(app)));
    frame.render_widget(Paragraph::new(separator), chunks[1]);
}

/// Where the current screen sits in the hierarchy. Empty for stale screens.
fn breadcrumbs(app: &App) -> Vec<String> {
    let s = app.screen();
    match s.kind {
        ScreenKind::Tracks | ScreenKind::Quit => vec![],
        ScreenKind::Phases => app
            .track_at(s.track_idx)
            .map(|t| vec![t.track_id.clone()])
            .unwrap_or_default(),
        ScreenKind::Edit => app
            .track_at(s.track_idx)
            .map(|t| vec![t.track_id.clone(), "Edit".to_string()])
            .unwrap_or_default(),
        ScreenKind::Tasks => {
            let (Some(track), Some(phase)) = (
                app.track_at(s.track_idx),
                app.phase_at(s.track_idx, s.phase_idx),
            ) else {
                return vec![];
            };
            vec![
                truncate_to_width(&track.track_id, 20),
                format!("Phase {}", phase.number),
            ]
        }
        ScreenKind::Detail => {
            let (Some(track), Some(phase), Some(task)) = (
                app.track_at(s.track_idx),
                app.phase_at(s.track_idx, s.phase_idx),
                app.task_at(s.track_idx, s.phase_idx, s.task_idx),
            ) else {
                return vec![];
            };
            vec![
                truncate_to_width(&track.track_id, 16),
                format!("Phase {}", phase.number),
                format!("Task: {}", truncate_to_width(&task.name, 30)),
            ]
        }
    }
}

fn hint(app: &App) -> &'static str {
    match app.screen().kind {
        ScreenKind::Tracks => "[q] Quit",
        _ => "[Esc] Back",
    }
}
