use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ScrollUp,
    ScrollDown,
    ToggleDetail,
    LoadMore,
    Search,
    SearchChar(char),
    SearchBackspace,
    SearchConfirm,
    SearchCancel,
    OpenRepo,
    Help,
    ClosePopup,
    Quit,
    None,
}

pub fn map_key(key: KeyEvent, search_mode: bool) -> Action {
    if search_mode {
        return match key.code {
            KeyCode::Esc => Action::SearchCancel,
            KeyCode::Enter => Action::SearchConfirm,
            KeyCode::Backspace => Action::SearchBackspace,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Char(c) => Action::SearchChar(c),
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('j') | KeyCode::Down => Action::ScrollDown,
        KeyCode::Char('k') | KeyCode::Up => Action::ScrollUp,
        KeyCode::Enter => Action::ToggleDetail,
        KeyCode::Char('m') => Action::LoadMore,
        KeyCode::Char('/') => Action::Search,
        KeyCode::Char('o') => Action::OpenRepo,
        KeyCode::Char('?') => Action::Help,
        KeyCode::Esc => Action::ClosePopup,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn browse_mode_bindings() {
        assert_eq!(map_key(key(KeyCode::Char('m')), false), Action::LoadMore);
        assert_eq!(map_key(key(KeyCode::Enter), false), Action::ToggleDetail);
        assert_eq!(map_key(key(KeyCode::Char('/')), false), Action::Search);
        assert_eq!(map_key(key(KeyCode::Char('q')), false), Action::Quit);
    }

    #[test]
    fn search_mode_captures_text() {
        assert_eq!(
            map_key(key(KeyCode::Char('m')), true),
            Action::SearchChar('m')
        );
        assert_eq!(map_key(key(KeyCode::Enter), true), Action::SearchConfirm);
        assert_eq!(map_key(key(KeyCode::Esc), true), Action::SearchCancel);
    }
}
