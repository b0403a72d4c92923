use std::path::PathBuf;

use chrono::{TimeZone, Utc};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::model::{Track, TrackSource};
use crate::parse::parse_plan;
use crate::tui::app::{App, Screen, ScreenKind};
use crate::tui::theme::Theme;

use super::render;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render the whole app into an in-memory buffer and return plain text (no styles).
pub fn render_to_string(w: u16, h: u16, app: &App) -> String {
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| render(frame, app)).unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// A track whose phases come from plan markdown.
pub fn track_with_plan(id: &str, source: TrackSource, plan: &str) -> Track {
    Track {
        track_id: id.into(),
        kind: "feature".into(),
        status: "in_progress".into(),
        description: format!("Description of {id}"),
        source,
        created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).single(),
        phases: parse_plan(plan),
        ..Default::default()
    }
}

/// Build an App over the given tracks, rooted at a path that does not exist.
pub fn app_with_tracks(tracks: Vec<Track>) -> App {
    App::new(PathBuf::from("/nonexistent"), tracks, Theme::default())
}

/// Build an App with a single active track parsed from plan markdown.
pub fn app_with_plan(plan: &str) -> App {
    app_with_tracks(vec![track_with_plan("demo_20250101", TrackSource::Active, plan)])
}

/// Push a screen that refers to the given indices.
pub fn open(app: &mut App, kind: ScreenKind, track: usize, phase: usize, task: usize) {
    app.push(Screen {
        track_idx: track,
        phase_idx: phase,
        task_idx: task,
        ..Screen::new(kind)
    });
}
