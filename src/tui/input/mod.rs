mod confirm;
mod edit;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Screen, ScreenKind};

// Import all submodule functions into this module's namespace
// so that submodules can access cross-module functions via `use super::*;`
#[allow(unused_imports)]
use confirm::*;
#[allow(unused_imports)]
use edit::*;
#[allow(unused_imports)]
use navigate::*;

/// Handle a key event on the current screen
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    match app.screen().kind {
        ScreenKind::Quit => handle_quit(app, key),
        ScreenKind::Edit => handle_edit(app, key),
        ScreenKind::Tracks | ScreenKind::Phases | ScreenKind::Tasks | ScreenKind::Detail => {
            handle_navigate(app, key)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crossterm::event::ModifierKeyCode;

    use super::*;
    use crate::model::{Phase, Task, Track, TrackSource};
    use crate::tui::theme::Theme;
    use pretty_assertions::assert_eq;

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn kinds(app: &App) -> Vec<ScreenKind> {
        app.stack.iter().map(|s| s.kind).collect()
    }

    fn app() -> App {
        let task = Task {
            name: "write parser".into(),
            ..Default::default()
        };
        let phase = Phase {
            number: 1,
            name: "Setup".into(),
            tasks: vec![task.clone(), task],
            ..Default::default()
        };
        let tracks = vec![
            Track {
                track_id: "alpha".into(),
                phases: vec![phase.clone(), phase],
                ..Default::default()
            },
            Track {
                track_id: "old".into(),
                source: TrackSource::Archived,
                ..Default::default()
            },
        ];
        App::new(PathBuf::from("/nonexistent"), tracks, Theme::default())
    }

    #[test]
    fn descends_to_detail_and_back() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            kinds(&app),
            vec![
                ScreenKind::Tracks,
                ScreenKind::Phases,
                ScreenKind::Tasks,
                ScreenKind::Detail
            ]
        );
        let detail = app.screen();
        assert_eq!((detail.track_idx, detail.phase_idx, detail.task_idx), (0, 1, 1));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen().kind, ScreenKind::Tasks);
        assert_eq!(app.screen().cursor, 1);
    }

    #[test]
    fn enter_needs_an_item() {
        let mut app = app();
        app.toggle_archived();
        press(&mut app, KeyCode::Char('k'));
        press(&mut app, KeyCode::Down);
        // The archived track has no phases
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert_eq!(kinds(&app), vec![ScreenKind::Tracks, ScreenKind::Phases]);
    }

    #[test]
    fn detail_arrows_scroll() {
        let mut app = app();
        app.push(Screen::new(ScreenKind::Detail));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.screen().scroll, 1);
        assert_eq!(app.screen().cursor, 0);
    }

    #[test]
    fn tracks_only_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(kinds(&app), vec![ScreenKind::Tracks, ScreenKind::Phases]);
        assert!(!app.show_archived);
    }

    #[test]
    fn quit_confirm_and_cancel() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.screen().kind, ScreenKind::Quit);
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.screen().kind, ScreenKind::Quit);
        press(&mut app, KeyCode::Esc);
        assert_eq!(kinds(&app), vec![ScreenKind::Tracks]);
        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.should_quit);
    }

    #[test]
    fn edit_space_toggles_editing() {
        let mut app = app();
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.screen().kind, ScreenKind::Edit);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char(' '));
        assert!(app.screen().editing);
        assert_eq!(app.screen().field, 1);

        // Esc first leaves editing, then pops
        press(&mut app, KeyCode::Esc);
        assert!(!app.screen().editing);
        assert_eq!(app.screen().kind, ScreenKind::Edit);
        press(&mut app, KeyCode::Esc);
        assert_eq!(kinds(&app), vec![ScreenKind::Tracks]);
    }

    #[test]
    fn ignores_modified_keys() {
        let mut app = app();
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL),
        );
        let shift = KeyCode::Modifier(ModifierKeyCode::LeftShift);
        handle_key(&mut app, KeyEvent::new(shift, KeyModifiers::SHIFT));
        assert!(!app.show_archived);
        assert_eq!(kinds(&app), vec![ScreenKind::Tracks]);
    }
}
