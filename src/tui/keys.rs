// ABOUTME: Key bindings translating terminal key events into controller messages
// ABOUTME: Bindings depend on which widget currently has focus
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::controller::{Direction, Focus, Message};

/// Lines scrolled by PageUp/PageDown in the detail overlay
const DETAIL_PAGE_SCROLL: i16 = 10;

/// Map a key press to a message for the given focus
///
/// Ctrl-C quits from anywhere. Unbound keys yield `None`.
#[must_use]
pub fn map_key(focus: Focus, key: KeyEvent) -> Option<Message> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return Some(Message::Quit);
    }

    match focus {
        Focus::Grid => grid_key(key.code),
        Focus::Search => search_key(key.code, ctrl),
        Focus::CuisinePicker => picker_key(key.code),
        Focus::Detail => detail_key(key.code),
    }
}

fn grid_key(code: KeyCode) -> Option<Message> {
    let message = match code {
        KeyCode::Char('/') => Message::FocusSearch,
        KeyCode::Char('c') => Message::FocusCuisinePicker,
        KeyCode::Up | KeyCode::Char('k') => Message::MoveCursor(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') => Message::MoveCursor(Direction::Down),
        KeyCode::Left | KeyCode::Char('h') => Message::MoveCursor(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') => Message::MoveCursor(Direction::Right),
        KeyCode::Enter => Message::OpenSelected,
        KeyCode::PageDown | KeyCode::Char(']') => Message::NextPage,
        KeyCode::PageUp | KeyCode::Char('[') => Message::PrevPage,
        KeyCode::Home | KeyCode::Char('g') => Message::FirstPage,
        KeyCode::End | KeyCode::Char('G') => Message::LastPage,
        KeyCode::Char('q') => Message::Quit,
        _ => return None,
    };
    Some(message)
}

fn search_key(code: KeyCode, ctrl: bool) -> Option<Message> {
    match code {
        KeyCode::Enter | KeyCode::Esc => Some(Message::FocusGrid),
        KeyCode::Backspace => Some(Message::SearchBackspace),
        KeyCode::Char('u') if ctrl => Some(Message::SearchClear),
        KeyCode::Char(_) if ctrl => None,
        KeyCode::Char(c) => Some(Message::SearchInput(c)),
        _ => None,
    }
}

fn picker_key(code: KeyCode) -> Option<Message> {
    match code {
        KeyCode::Up | KeyCode::Char('k') => Some(Message::PickerMove(-1)),
        KeyCode::Down | KeyCode::Char('j') => Some(Message::PickerMove(1)),
        KeyCode::Char(' ') => Some(Message::PickerToggle),
        KeyCode::Char('x') => Some(Message::ClearCuisines),
        KeyCode::Enter | KeyCode::Esc => Some(Message::FocusGrid),
        _ => None,
    }
}

fn detail_key(code: KeyCode) -> Option<Message> {
    match code {
        KeyCode::Up | KeyCode::Char('k') => Some(Message::ScrollDetail(-1)),
        KeyCode::Down | KeyCode::Char('j') => Some(Message::ScrollDetail(1)),
        KeyCode::PageUp => Some(Message::ScrollDetail(-DETAIL_PAGE_SCROLL)),
        KeyCode::PageDown => Some(Message::ScrollDetail(DETAIL_PAGE_SCROLL)),
        KeyCode::Esc | KeyCode::Char('q') => Some(Message::CloseDetail),
        _ => None,
    }
}
