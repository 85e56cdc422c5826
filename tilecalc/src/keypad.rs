//! Keypad layout and keyboard accelerators
//!
//! The grid is declared once as a table of labels. Clicks and key presses
//! both resolve through the same label table to an [`Action`], so there is a
//! single path into [`crate::engine::Calculator::dispatch`].

use calccore::widgets::KeyAccent;
use egui::Key;

use crate::engine::{Action, Operation};

pub const ROWS: usize = 4;
pub const COLUMNS: usize = 4;

/// Labels as they appear on screen, top row first.
pub const TEMPLATE: [[&str; COLUMNS]; ROWS] = [
    ["7", "8", "9", "/"],
    ["4", "5", "6", "*"],
    ["1", "2", "3", "-"],
    ["0", "c", "=", "+"],
];

/// Named keys with no printable label that still fire a keypad action.
const NAMED_KEYS: &[(Key, Action)] = &[
    (Key::Enter, Action::Equals),
    (Key::Escape, Action::Clear),
];

/// Broad class of a key, used for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Digit,
    Operation,
    Clear,
    Equals,
}

impl KeyKind {
    pub fn of(action: Action) -> Self {
        match action {
            Action::Digit(_) => KeyKind::Digit,
            Action::Operation(_) => KeyKind::Operation,
            Action::Clear => KeyKind::Clear,
            Action::Equals => KeyKind::Equals,
        }
    }

    pub fn accent(self) -> KeyAccent {
        match self {
            KeyKind::Digit => KeyAccent::Plain,
            KeyKind::Operation => KeyAccent::Bold,
            KeyKind::Clear => KeyAccent::Inverted,
            KeyKind::Equals => KeyAccent::Framed,
        }
    }
}

/// Action bound to a button label.
pub fn action_for_label(label: &str) -> Option<Action> {
    let mut chars = label.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => action_for_char(c),
        _ => None,
    }
}

/// Action bound to a typed character. Matches button labels exactly.
pub fn action_for_char(c: char) -> Option<Action> {
    match c {
        '0'..='9' => c.to_digit(10).map(|d| Action::Digit(d as u8)),
        '+' => Some(Action::Operation(Operation::Add)),
        '-' => Some(Action::Operation(Operation::Subtract)),
        '*' => Some(Action::Operation(Operation::Multiply)),
        '/' => Some(Action::Operation(Operation::Divide)),
        'c' => Some(Action::Clear),
        '=' => Some(Action::Equals),
        _ => None,
    }
}

/// Action bound to a named (non-text) key.
pub fn action_for_key(key: Key) -> Option<Action> {
    NAMED_KEYS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|&(_, action)| action)
}

/// Collect keypad actions from this frame's keyboard input, in arrival order.
pub fn actions_from_input(input: &egui::InputState) -> Vec<Action> {
    let mut actions = Vec::new();
    for event in &input.events {
        match event {
            egui::Event::Text(text) => actions.extend(text.chars().filter_map(action_for_char)),
            egui::Event::Key {
                key,
                pressed: true,
                modifiers,
                ..
            } if !modifiers.command => actions.extend(action_for_key(*key)),
            _ => {}
        }
    }
    actions
}
