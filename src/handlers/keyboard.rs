//! Keyboard Input Handler
//!
//! Dispatches key presses on the active screen. Each screen has its own
//! small key table; keys not in the table are ignored. Ctrl+C is checked
//! first and quits regardless of screen.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::debug;

use crate::messages::Command;
use crate::model::Screen;
use crate::App;

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) -> Command {
    // Release/repeat events (reported on some terminals) are not key presses
    if key.kind != KeyEventKind::Press {
        return Command::None;
    }

    debug!("Key {:?} on {:?}", key.code, app.model.view.screen);

    // Ctrl+C quits from any screen
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.model.ui.should_quit = true;
        return Command::Quit;
    }

    match app.model.view.screen {
        Screen::Browsing => handle_browsing_key(app, key),
        Screen::Confirming => handle_confirming_key(app, key),
    }
}

fn handle_browsing_key(app: &mut App, key: KeyEvent) -> Command {
    let len = app.model.entries.len();

    match key.code {
        KeyCode::Char('q') => {
            app.model.ui.should_quit = true;
            Command::Quit
        }
        KeyCode::Char('d') | KeyCode::Char('D') => {
            app.request_delete();
            Command::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.model.view.select_next(len);
            Command::None
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.model.view.select_prev(len);
            Command::None
        }
        KeyCode::Home | KeyCode::Char('g') => {
            app.model.view.select_first(len);
            Command::None
        }
        KeyCode::End | KeyCode::Char('G') => {
            app.model.view.select_last(len);
            Command::None
        }
        _ => Command::None,
    }
}

fn handle_confirming_key(app: &mut App, key: KeyEvent) -> Command {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_delete(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.cancel_delete();
            Command::None
        }
        // Ignore other keys while the dialog is showing
        _ => Command::None,
    }
}
