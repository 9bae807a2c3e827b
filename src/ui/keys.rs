//! # Key Handling
//!
//! Translates crossterm key events into [`App`] mutations. Anything that
//! needs the outside world (starting a request, saving the config) comes
//! back as an [`Action`] for the event loop to carry out.
//!
//! | Focus | Keys |
//! |-------|------|
//! | Description | type, `Backspace`, `Alt+Enter` newline, `Enter` submit |
//! | Generate button | `Enter` / `Space` submit |
//! | Content field | `Enter`/`e` edit, `↑↓`/`jk` move |
//! | Editing | type, `←→`, `Home`/`End`, `Enter` confirm, `Esc` cancel |
//!
//! `Tab`/`Shift+Tab` move focus everywhere (committing an open edit),
//! `Ctrl+C` quits and `Ctrl+T` cycles the theme.

use crate::generate::GenerateRequest;
use crate::ui::app::{App, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Side effect requested by a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    /// A validated request that must be sent to the generation service.
    Submit(GenerateRequest),
    /// The theme changed; persist it.
    ThemeChanged(&'static str),
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> Action {
    if key.kind == KeyEventKind::Release {
        return Action::None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => {
            app.should_quit = true;
            return Action::None;
        }
        KeyCode::Char('t') if ctrl => {
            return Action::ThemeChanged(app.cycle_theme());
        }
        KeyCode::Tab => {
            app.focus_next();
            return Action::None;
        }
        KeyCode::BackTab => {
            app.focus_previous();
            return Action::None;
        }
        _ => {}
    }

    if app.is_editing() {
        handle_editing(app, key);
        return Action::None;
    }

    match app.focus {
        Focus::Description => handle_description(app, key),
        Focus::GenerateButton => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => submit(app),
            KeyCode::Esc | KeyCode::Char('q') => {
                app.should_quit = true;
                Action::None
            }
            _ => Action::None,
        },
        Focus::Field(_) => {
            match key.code {
                KeyCode::Enter | KeyCode::Char('e') => app.begin_edit(),
                KeyCode::Down | KeyCode::Char('j') => app.field_down(),
                KeyCode::Up | KeyCode::Char('k') => app.field_up(),
                KeyCode::Esc | KeyCode::Char('q') => app.should_quit = true,
                _ => {}
            }
            Action::None
        }
    }
}

fn submit(app: &mut App) -> Action {
    // Rejections are already reflected in the app state
    app.begin_submit().map_or(Action::None, Action::Submit)
}

fn handle_description(app: &mut App, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter if key.modifiers.contains(KeyModifiers::ALT) => {
            app.description_push_char('\n');
        }
        KeyCode::Enter => return submit(app),
        KeyCode::Backspace => app.description_pop_char(),
        KeyCode::Esc => app.should_quit = true,
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.description_push_char(c);
        }
        _ => {}
    }
    Action::None
}

fn handle_editing(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            app.commit_edit();
        }
        KeyCode::Esc => app.cancel_edit(),
        code => {
            let Some(editor) = app.editor_mut() else {
                return;
            };
            match code {
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    editor.insert_char(c);
                }
                KeyCode::Backspace => editor.backspace(),
                KeyCode::Delete => editor.delete(),
                KeyCode::Left => editor.move_left(),
                KeyCode::Right => editor.move_right(),
                KeyCode::Home => editor.move_home(),
                KeyCode::End => editor.move_end(),
                _ => {}
            }
        }
    }
}
