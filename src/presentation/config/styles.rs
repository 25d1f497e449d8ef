//! Style configuration
//!
//! Styles are written as space-separated words in the config file, e.g.
//! `"bold yellow"` or `"white on blue"`, keyed by the UI element they apply
//! to. Unknown words are ignored so configs stay forward compatible.

use std::collections::HashMap;

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};

/// Flat mapping from element names to styles
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<String, Style>);

impl Styles {
    /// Style for an element, falling back to the terminal default
    pub fn style(&self, name: &str) -> Style {
        self.get(name).copied().unwrap_or_default()
    }
}

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: HashMap<String, String> = HashMap::deserialize(deserializer)?;

        let styles = raw
            .into_iter()
            .map(|(name, line)| (name, parse_style(&line)))
            .collect();

        Ok(Self(styles))
    }
}

/// Parse a style line: modifiers and a foreground color, optionally
/// followed by `on <background color>`
pub fn parse_style(line: &str) -> Style {
    let mut style = Style::default();
    let mut background = false;

    for word in line.split_whitespace() {
        match word.to_ascii_lowercase().as_str() {
            "on" => background = true,
            "bold" => style = style.add_modifier(Modifier::BOLD),
            "dim" => style = style.add_modifier(Modifier::DIM),
            "italic" => style = style.add_modifier(Modifier::ITALIC),
            "underline" => style = style.add_modifier(Modifier::UNDERLINED),
            "reversed" => style = style.add_modifier(Modifier::REVERSED),
            word => {
                if let Some(color) = parse_color(word) {
                    style = if background {
                        style.bg(color)
                    } else {
                        style.fg(color)
                    };
                }
            }
        }
    }

    style
}

fn parse_color(word: &str) -> Option<Color> {
    let color = match word {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "lightred" => Color::LightRed,
        "lightgreen" => Color::LightGreen,
        "lightyellow" => Color::LightYellow,
        "lightblue" => Color::LightBlue,
        "lightmagenta" => Color::LightMagenta,
        "lightcyan" => Color::LightCyan,
        "white" => Color::White,
        word if word.starts_with('#') && word.len() == 7 && word.is_ascii() => {
            let r = u8::from_str_radix(&word[1..3], 16).ok()?;
            let g = u8::from_str_radix(&word[3..5], 16).ok()?;
            let b = u8::from_str_radix(&word[5..7], 16).ok()?;
            Color::Rgb(r, g, b)
        }
        _ => return None,
    };
    Some(color)
}
