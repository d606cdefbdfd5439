use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

/// User actions from keyboard events
#[derive(Debug, PartialEq)]
pub enum Action {
    Quit,
    ClearInput,
    InsertChar(char),
    Backspace,
    Swap,
    CycleFromBase,
    CycleToBase,
    MoveUp,
    MoveDown,
    LoadSelected,
    DeleteSelected,
    ClearHistory,
    CopyResult,
    ToggleTheme,
    None,
}

/// Poll for keyboard events and convert to actions
pub fn poll_event(timeout: Duration) -> anyhow::Result<Action> {
    if event::poll(timeout)?
        && let Event::Key(key) = event::read()?
    {
        return Ok(key_to_action(key));
    }
    Ok(Action::None)
}

fn key_to_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, _) => Action::ClearInput,

        // Base selection and swap; 's' and 't' sit outside every digit
        // alphabet, so they are free even while typing hex
        (KeyCode::Tab, _) => Action::CycleFromBase,
        (KeyCode::BackTab, _) => Action::CycleToBase,
        (KeyCode::Char('s'), KeyModifiers::NONE)
        | (KeyCode::Char('S'), KeyModifiers::SHIFT) => Action::Swap,
        (KeyCode::Char('t'), KeyModifiers::NONE)
        | (KeyCode::Char('T'), KeyModifiers::SHIFT) => Action::ToggleTheme,

        // History panel
        (KeyCode::Up, _) => Action::MoveUp,
        (KeyCode::Down, _) => Action::MoveDown,
        (KeyCode::Enter, _) => Action::LoadSelected,
        (KeyCode::Delete, _) => Action::DeleteSelected,
        (KeyCode::Char('l'), KeyModifiers::CONTROL) => Action::ClearHistory,

        (KeyCode::Char('y'), KeyModifiers::CONTROL) => Action::CopyResult,

        // Digit input
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            Action::InsertChar(c)
        }
        (KeyCode::Backspace, _) => Action::Backspace,

        _ => Action::None,
    }
}
