use crate::projects::filter::Filter;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    Top,
    Bottom,
    ToggleTheme,
    ToggleLanguage,
    ToggleMenu,
    MenuUp,
    MenuDown,
    MenuSelect,
    MenuJump(usize),
    Filter(Filter),
    NextFilter,
    CardLeft,
    CardRight,
    OpenCode,
    OpenDemo,
    DownloadCv,
    Help,
    ClosePopup,
    Quit,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Page,
    Menu,
    Help,
}

pub fn map_key(key: KeyEvent, mode: Mode) -> Action {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    match mode {
        Mode::Help => match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Action::ClosePopup,
            _ => Action::None,
        },
        Mode::Menu => match key.code {
            KeyCode::Esc | KeyCode::Char('m') => Action::ToggleMenu,
            KeyCode::Char('j') | KeyCode::Down => Action::MenuDown,
            KeyCode::Char('k') | KeyCode::Up => Action::MenuUp,
            KeyCode::Enter => Action::MenuSelect,
            KeyCode::Char(c @ '1'..='9') => Action::MenuJump(c as usize - '1' as usize),
            KeyCode::Char('q') => Action::Quit,
            _ => Action::None,
        },
        Mode::Page => match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('j') | KeyCode::Down => Action::ScrollDown,
            KeyCode::Char('k') | KeyCode::Up => Action::ScrollUp,
            KeyCode::PageDown | KeyCode::Char(' ') => Action::PageDown,
            KeyCode::PageUp => Action::PageUp,
            KeyCode::Char('g') | KeyCode::Home => Action::Top,
            KeyCode::Char('G') | KeyCode::End => Action::Bottom,
            KeyCode::Char('t') => Action::ToggleTheme,
            KeyCode::Char('i') => Action::ToggleLanguage,
            KeyCode::Char('m') => Action::ToggleMenu,
            KeyCode::Char(c @ '1'..='5') => Filter::ALL
                .get(c as usize - '1' as usize)
                .copied()
                .map_or(Action::None, Action::Filter),
            KeyCode::Tab => Action::NextFilter,
            KeyCode::Char('h') | KeyCode::Left => Action::CardLeft,
            KeyCode::Char('l') | KeyCode::Right => Action::CardRight,
            KeyCode::Char('o') | KeyCode::Enter => Action::OpenCode,
            KeyCode::Char('d') => Action::OpenDemo,
            KeyCode::Char('c') => Action::DownloadCv,
            KeyCode::Char('?') => Action::Help,
            KeyCode::Esc => Action::ClosePopup,
            _ => Action::None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digits_select_filters() {
        assert_eq!(map_key(key(KeyCode::Char('1')), Mode::Page), Action::Filter(Filter::All));
        assert_eq!(
            map_key(key(KeyCode::Char('5')), Mode::Page),
            Action::Filter(Filter::Security)
        );
    }

    #[test]
    fn test_menu_mode_captures_navigation() {
        assert_eq!(map_key(key(KeyCode::Char('j')), Mode::Menu), Action::MenuDown);
        assert_eq!(map_key(key(KeyCode::Char('2')), Mode::Menu), Action::MenuJump(1));
        assert_eq!(map_key(key(KeyCode::Esc), Mode::Menu), Action::ToggleMenu);
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for mode in [Mode::Page, Mode::Menu, Mode::Help] {
            assert_eq!(map_key(ctrl_c, mode), Action::Quit);
        }
        assert_eq!(map_key(key(KeyCode::Char('c')), Mode::Page), Action::DownloadCv);
    }
}
