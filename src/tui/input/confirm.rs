use super::*;

/// Quit prompt: `y` exits, `n` or Esc returns to the previous screen
pub(super) fn handle_quit(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('y')) => app.should_quit = true,
        (KeyModifiers::NONE, KeyCode::Char('n') | KeyCode::Esc) => app.go_back(),
        _ => {}
    }
}
