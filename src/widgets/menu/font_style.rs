// bubble-tabbar/src/widgets/menu/font_style.rs
use std::{fmt, str::FromStr};

use itertools::Itertools;
use ratatui::style::Modifier;
use serde::{Deserialize, Serialize};

use crate::BubbleTabBarError;

const NAMED_MODIFIERS: [(&str, Modifier); 6] = [
    ("bold", Modifier::BOLD),
    ("dim", Modifier::DIM),
    ("italic", Modifier::ITALIC),
    ("underlined", Modifier::UNDERLINED),
    ("reversed", Modifier::REVERSED),
    ("crossed_out", Modifier::CROSSED_OUT),
];

/// Terminal stand-in for a custom typeface: a set of text modifiers applied
/// to bubble titles.
///
/// Written as modifier names joined by `+` or `,`, e.g. `"bold+italic"`.
/// The empty string means the terminal's regular text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FontStyle(Modifier);

impl FontStyle {
    pub const REGULAR: FontStyle = FontStyle(Modifier::empty());

    pub fn new(modifier: Modifier) -> Self {
        Self(modifier)
    }

    pub fn modifier(&self) -> Modifier {
        self.0
    }

    pub fn is_regular(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for FontStyle {
    fn default() -> Self {
        Self::REGULAR
    }
}

impl FromStr for FontStyle {
    type Err = BubbleTabBarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(['+', ','])
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .try_fold(Modifier::empty(), |acc, part| {
                let name = part.to_ascii_lowercase();
                NAMED_MODIFIERS
                    .iter()
                    .find(|(n, _)| *n == name)
                    .map(|(_, m)| acc | *m)
                    .ok_or_else(|| BubbleTabBarError::InvalidFontStyle(s.to_string()))
            })
            .map(FontStyle)
    }
}

impl TryFrom<String> for FontStyle {
    type Error = BubbleTabBarError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FontStyle> for String {
    fn from(value: FontStyle) -> Self {
        value.to_string()
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = NAMED_MODIFIERS
            .iter()
            .filter(|(_, m)| self.0.contains(*m))
            .map(|(n, _)| *n)
            .join("+");
        write!(f, "{names}")
    }
}
