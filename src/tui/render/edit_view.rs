use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::EditField;
use crate::tui::app::App;
use crate::tui::wrap::wrap_text;

use super::helpers::{base_style, bold_style, cell, cursor_prefix, dim_line, status_style};

const LABEL_W: usize = 10;

/// Render the status/type editor for the selected track
pub fn render_edit_view(frame: &mut Frame, app: &App, area: Rect) {
    let screen = app.screen();
    let Some(track) = app.track_at(screen.track_idx) else {
        return;
    };

    let width = (area.width as usize).saturating_sub(2);
    let mut lines: Vec<Line> = wrap_text(&track.description, width, "")
        .iter()
        .map(|l| dim_line(app, l))
        .collect();
    lines.push(Line::from(""));

    for (i, field) in EditField::ALL.into_iter().enumerate() {
        let selected = i == screen.field;
        let value = field.get(track);
        let mut spans = vec![
            cursor_prefix(app, selected),
            Span::styled(
                cell(&format!("{}:", field.label()), LABEL_W, LABEL_W),
                bold_style(app),
            ),
        ];
        if selected && screen.editing {
            spans.push(Span::styled("[< ", base_style(app)));
            spans.push(Span::styled(value.to_string(), status_style(app, value)));
            spans.push(Span::styled(" >]", base_style(app)));
        } else {
            spans.push(Span::styled(value.to_string(), status_style(app, value)));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines).style(base_style(app)), area);
}
