use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, ScreenKind};

use super::helpers::dim_line;

/// Render the key-help line for the current screen
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let text = footer_text(app);
    frame.render_widget(Paragraph::new(dim_line(app, &text)), area);
}

fn footer_text(app: &App) -> String {
    let s = app.screen();
    match s.kind {
        ScreenKind::Tracks => {
            let verb = if app.show_archived { "Hide" } else { "Show" };
            if app.visible_tracks().is_empty() {
                format!("[a] {verb} archived  [q] Quit")
            } else {
                format!("[Enter] Phases  [e] Edit  [a] {verb} archived  [q] Quit")
            }
        }
        ScreenKind::Phases => "[\u{2191}\u{2193}] Navigate  [Enter] View tasks  [Esc] Back".into(),
        ScreenKind::Tasks => "[\u{2191}\u{2193}] Navigate  [Enter] View detail  [Esc] Back".into(),
        ScreenKind::Detail => {
            if app.item_count(s) > 0 {
                "[\u{2191}\u{2193}] Scroll  [Esc] Back".into()
            } else {
                "[Esc] Back".into()
            }
        }
        ScreenKind::Edit if s.editing => {
            "[\u{2190}\u{2192}] Change value  [\u{2191}\u{2193}] Select field  [Esc] Stop editing"
                .into()
        }
        ScreenKind::Edit => {
            "[\u{2191}\u{2193}] Select field  [Enter] Next value  [Space] Edit  [Esc] Back".into()
        }
        ScreenKind::Quit => String::new(),
    }
}
