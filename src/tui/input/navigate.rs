use super::*;

/// Keys for the list screens (Tracks, Phases, Tasks) and Detail
pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    let kind = app.screen().kind;
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Up | KeyCode::Char('k')) => move_up_down(app, kind, -1),
        (KeyModifiers::NONE, KeyCode::Down | KeyCode::Char('j')) => move_up_down(app, kind, 1),
        (KeyModifiers::NONE, KeyCode::Enter) => descend(app),
        (KeyModifiers::NONE, KeyCode::Esc) => app.go_back(),
        (KeyModifiers::NONE, KeyCode::Char('a')) if kind == ScreenKind::Tracks => {
            app.toggle_archived()
        }
        (KeyModifiers::NONE, KeyCode::Char('e')) if kind == ScreenKind::Tracks => open_edit(app),
        (KeyModifiers::NONE, KeyCode::Char('q')) if kind == ScreenKind::Tracks => {
            app.push(Screen::new(ScreenKind::Quit))
        }
        _ => {}
    }
}

fn move_up_down(app: &mut App, kind: ScreenKind, delta: isize) {
    if kind == ScreenKind::Detail {
        app.move_scroll(delta);
    } else {
        app.move_cursor(delta);
    }
}

/// Enter: open the child screen of the item under the cursor, if any
fn descend(app: &mut App) {
    let screen = app.screen().clone();
    if screen.cursor >= app.item_count(&screen) {
        return;
    }
    let child = match screen.kind {
        ScreenKind::Tracks => Screen {
            track_idx: screen.cursor,
            ..Screen::new(ScreenKind::Phases)
        },
        ScreenKind::Phases => Screen {
            track_idx: screen.track_idx,
            phase_idx: screen.cursor,
            ..Screen::new(ScreenKind::Tasks)
        },
        ScreenKind::Tasks => Screen {
            track_idx: screen.track_idx,
            phase_idx: screen.phase_idx,
            task_idx: screen.cursor,
            ..Screen::new(ScreenKind::Detail)
        },
        ScreenKind::Detail | ScreenKind::Edit | ScreenKind::Quit => return,
    };
    app.push(child);
}

fn open_edit(app: &mut App) {
    let cursor = app.screen().cursor;
    if app.track_at(cursor).is_some() {
        app.push(Screen {
            track_idx: cursor,
            ..Screen::new(ScreenKind::Edit)
        });
    }
}
