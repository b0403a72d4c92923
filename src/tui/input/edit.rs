use super::*;

pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Up | KeyCode::Char('k')) => app.move_field(-1),
        (KeyModifiers::NONE, KeyCode::Down | KeyCode::Char('j')) => app.move_field(1),
        (KeyModifiers::NONE, KeyCode::Enter | KeyCode::Right) => app.cycle_field(1),
        (KeyModifiers::NONE, KeyCode::Left) => app.cycle_field(-1),
        (KeyModifiers::NONE, KeyCode::Char(' ')) => {
            let screen = app.screen_mut();
            screen.editing = !screen.editing;
        }
        (KeyModifiers::NONE, KeyCode::Esc) => {
            if app.screen().editing {
                app.screen_mut().editing = false;
            } else {
                app.go_back();
            }
        }
        _ => {}
    }
}
