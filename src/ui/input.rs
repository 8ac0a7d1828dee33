use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;
use crate::ui::pages::Page;

/// Work the event loop has to do after a key is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Handled internally.
    None,
    /// Start a report export in the background.
    Export,
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.request_quit();
        return InputAction::None;
    }

    if app.search_active() {
        match key.code {
            KeyCode::Esc => app.clear_search(),
            KeyCode::Enter => app.finish_search(),
            KeyCode::Backspace => app.pop_search_char(),
            KeyCode::Char(ch) => app.push_search_char(ch),
            _ => {}
        }
        return InputAction::None;
    }

    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Tab => app.set_page(app.page().next()),
        KeyCode::BackTab => app.set_page(app.page().prev()),
        KeyCode::Char(ch) if ch.is_ascii_digit() => {
            if let Some(page) = ch.to_digit(10).and_then(Page::from_number) {
                app.set_page(page);
            }
        }
        KeyCode::Char('r') => {
            app.refresh_current_page();
        }
        KeyCode::Char('d') if app.page() == Page::Predictor => {
            app.cycle_forecast_horizon();
        }
        KeyCode::Char('/') if app.page() == Page::Transactions => app.start_search(),
        KeyCode::Char('f') if app.page() == Page::Transactions => app.cycle_status_filter(),
        KeyCode::Char('e') => return InputAction::Export,
        _ => {}
    }
    InputAction::None
}
