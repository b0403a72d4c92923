use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

use super::helpers::{bold_style, dim_style};

/// Render the quit confirmation centered on an otherwise empty screen
pub fn render_quit_prompt(frame: &mut Frame, app: &App, area: Rect) {
    let row = Rect {
        y: area.y + area.height / 2,
        height: area.height.min(1),
        ..area
    };
    let prompt = Line::from(vec![
        Span::styled("Quit Conductor TUI? ", bold_style(app)),
        Span::styled("[y/n]", dim_style(app)),
    ]);
    frame.render_widget(Paragraph::new(prompt).alignment(Alignment::Center), row);
}
