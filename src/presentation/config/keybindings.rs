//! Keybinding configuration
//!
//! Bindings are written as `"<key>"` sequences in the config file, e.g.
//! `"<ctrl-c>"` or `"<g><g>"`, and map to high-level actions. Parsing
//! happens once at deserialization time; lookups at runtime are plain map
//! accesses keyed by `KeyEvent`s.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_deref::{Deref, DerefMut};
use serde::{de::Deserializer, Deserialize};
use strum::Display;

/// High-level user intents that keys can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Deserialize)]
pub enum Action {
    ScrollUp,
    ScrollDown,
    ScrollToTop,
    ScrollToBottom,
    LoadMore,
    Open,
    Back,
    NewItem,
    Refresh,
    Submit,
    Quit,
    Suspend,
}

/// Flat mapping from key sequences to actions
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct KeyBindings(pub HashMap<Vec<KeyEvent>, Action>);

impl KeyBindings {
    /// The built-in bindings used when no config overrides them
    ///
    /// Kept in code as well as in the default config file so unit tests can
    /// run without any file I/O.
    pub fn default_bindings() -> Self {
        let pairs: &[(&str, Action)] = &[
            ("<q>", Action::Quit),
            ("<j>", Action::ScrollDown),
            ("<down>", Action::ScrollDown),
            ("<k>", Action::ScrollUp),
            ("<up>", Action::ScrollUp),
            ("<g>", Action::ScrollToTop),
            ("<shift-g>", Action::ScrollToBottom),
            ("<m>", Action::LoadMore),
            ("<enter>", Action::Open),
            ("<esc>", Action::Back),
            ("<n>", Action::NewItem),
            ("<r>", Action::Refresh),
        ];

        let mut map = HashMap::new();
        for (raw, action) in pairs {
            if let Ok(seq) = parse_key_sequence(raw) {
                map.insert(seq, *action);
            }
        }
        Self(map)
    }
}

impl<'de> Deserialize<'de> for KeyBindings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: HashMap<String, Action> = HashMap::deserialize(deserializer)?;

        let mut bindings = HashMap::new();
        for (key_str, action) in raw {
            let seq = parse_key_sequence(&key_str).map_err(serde::de::Error::custom)?;
            bindings.insert(seq, action);
        }

        Ok(Self(bindings))
    }
}

/// Parse a sequence like `"<g><g>"` into its key events
pub fn parse_key_sequence(raw: &str) -> Result<Vec<KeyEvent>, String> {
    if raw.chars().filter(|c| *c == '>').count() != raw.chars().filter(|c| *c == '<').count() {
        return Err(format!("Unable to parse `{raw}`"));
    }
    let raw = if !raw.contains("><") {
        let raw = raw.strip_prefix('<').unwrap_or(raw);
        let raw = raw.strip_suffix('>').unwrap_or(raw);
        raw
    } else {
        raw
    };
    let sequences = if raw.contains("><") {
        raw.split("><")
            .map(|seq| {
                if let Some(s) = seq.strip_prefix('<') {
                    s
                } else if let Some(s) = seq.strip_suffix('>') {
                    s
                } else {
                    seq
                }
            })
            .collect::<Vec<_>>()
    } else {
        vec![raw]
    };

    sequences.into_iter().map(parse_key_event).collect()
}

/// Parse a single key description like `ctrl-c` or `enter`
pub fn parse_key_event(raw: &str) -> Result<KeyEvent, String> {
    let raw_lower = raw.to_ascii_lowercase();
    let (remaining, modifiers) = extract_modifiers(&raw_lower);
    parse_key_code_with_modifiers(remaining, modifiers)
}

fn extract_modifiers(raw: &str) -> (&str, KeyModifiers) {
    let mut modifiers = KeyModifiers::empty();
    let mut current = raw;

    loop {
        match current {
            rest if rest.starts_with("ctrl-") => {
                modifiers.insert(KeyModifiers::CONTROL);
                current = &rest[5..];
            }
            rest if rest.starts_with("alt-") => {
                modifiers.insert(KeyModifiers::ALT);
                current = &rest[4..];
            }
            rest if rest.starts_with("shift-") => {
                modifiers.insert(KeyModifiers::SHIFT);
                current = &rest[6..];
            }
            _ => break,
        };
    }

    (current, modifiers)
}

fn parse_key_code_with_modifiers(
    raw: &str,
    mut modifiers: KeyModifiers,
) -> Result<KeyEvent, String> {
    let c = match raw {
        "esc" => KeyCode::Esc,
        "enter" => KeyCode::Enter,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "backtab" => {
            modifiers.insert(KeyModifiers::SHIFT);
            KeyCode::BackTab
        }
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        "f1" => KeyCode::F(1),
        "f2" => KeyCode::F(2),
        "f3" => KeyCode::F(3),
        "f4" => KeyCode::F(4),
        "f5" => KeyCode::F(5),
        "f6" => KeyCode::F(6),
        "f7" => KeyCode::F(7),
        "f8" => KeyCode::F(8),
        "f9" => KeyCode::F(9),
        "f10" => KeyCode::F(10),
        "f11" => KeyCode::F(11),
        "f12" => KeyCode::F(12),
        "space" => KeyCode::Char(' '),
        "hyphen" | "minus" => KeyCode::Char('-'),
        "tab" => KeyCode::Tab,
        c if c.len() == 1 => {
            let mut c = c.chars().next().ok_or_else(|| "Empty key".to_string())?;
            if modifiers.contains(KeyModifiers::SHIFT) {
                c = c.to_ascii_uppercase();
            }
            KeyCode::Char(c)
        }
        _ => return Err(format!("Unable to parse {raw}")),
    };
    Ok(KeyEvent::new(c, modifiers))
}

/// Render a key event back into the `<...>`-free config notation, used for
/// key hints in the status bar
pub fn key_event_to_string(key_event: &KeyEvent) -> String {
    let char;
    let key_code = match key_event.code {
        KeyCode::Backspace => "backspace",
        KeyCode::Enter => "enter",
        KeyCode::Left => "left",
        KeyCode::Right => "right",
        KeyCode::Up => "up",
        KeyCode::Down => "down",
        KeyCode::Home => "home",
        KeyCode::End => "end",
        KeyCode::PageUp => "pageup",
        KeyCode::PageDown => "pagedown",
        KeyCode::Tab => "tab",
        KeyCode::BackTab => "backtab",
        KeyCode::Delete => "delete",
        KeyCode::Insert => "insert",
        KeyCode::F(c) => {
            char = format!("f({c})");
            &char
        }
        KeyCode::Char(' ') => "space",
        KeyCode::Char(c) => {
            char = c.to_string();
            &char
        }
        KeyCode::Esc => "esc",
        _ => "",
    };

    let mut modifiers = Vec::with_capacity(3);

    if key_event.modifiers.intersects(KeyModifiers::CONTROL) {
        modifiers.push("ctrl");
    }

    if key_event.modifiers.intersects(KeyModifiers::SHIFT) {
        modifiers.push("shift");
    }

    if key_event.modifiers.intersects(KeyModifiers::ALT) {
        modifiers.push("alt");
    }

    let mut key = modifiers.join("-");

    if !key.is_empty() {
        key.push('-');
    }
    key.push_str(key_code);

    key
}
