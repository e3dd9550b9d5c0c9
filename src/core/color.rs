//! ANSI colour handling for chart glyphs.

use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid hex colour digit in `{0}`")]
    InvalidHexDigit(String),
    #[error("hex colour must be exactly 6 digits, got `{0}`")]
    InvalidHexLength(String),
}

/// Named colours accepted by [`AnsiCode::from_name`], in display order.
pub const NAMED_COLORS: [(&str, AnsiCode); 9] = [
    ("black", AnsiCode::Static("\x1b[30m")),
    ("red", AnsiCode::Static("\x1b[31m")),
    ("green", AnsiCode::Static("\x1b[32m")),
    ("yellow", AnsiCode::Static("\x1b[33m")),
    ("blue", AnsiCode::Static("\x1b[34m")),
    ("magenta", AnsiCode::Static("\x1b[35m")),
    ("cyan", AnsiCode::Static("\x1b[36m")),
    ("white", AnsiCode::Static("\x1b[37m")),
    ("orange", AnsiCode::Rgb(210, 135, 10)),
];

const RESET: &str = "\x1b[0m";

/// A foreground colour escape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnsiCode {
    Static(&'static str),
    /// True-colour escape `ESC[38;2;R;G;Bm`.
    Rgb(u8, u8, u8),
}

impl AnsiCode {
    #[must_use]
    pub const fn orange() -> Self {
        Self::Rgb(210, 135, 10)
    }

    /// Parse colour names or `#rrggbb`.  Falls back to the hex parser on miss.
    ///
    /// # Errors
    /// Returns [`ColorError`] when the input is neither a known name nor a
    /// well-formed hex triplet.
    pub fn from_name(s: &str) -> Result<Self, ColorError> {
        let wanted = s.trim().to_ascii_lowercase();
        if wanted == "industrial" {
            return Ok(Self::orange());
        }
        NAMED_COLORS
            .iter()
            .find(|(name, _)| *name == wanted)
            .map_or_else(|| Self::from_hex(s), |(_, code)| Ok(*code))
    }

    /// # Errors
    /// Returns [`ColorError`] for anything other than six hex digits.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let h = hex.trim().trim_start_matches('#');
        if h.len() != 6 || !h.is_ascii() {
            return Err(ColorError::InvalidHexLength(hex.to_owned()));
        }
        let byte = |s: &str| {
            u8::from_str_radix(s, 16).map_err(|_| ColorError::InvalidHexDigit(hex.to_owned()))
        };
        Ok(Self::Rgb(byte(&h[..2])?, byte(&h[2..4])?, byte(&h[4..])?))
    }

    /// Wrap `text` in this colour + reset sequence.
    #[must_use]
    pub fn paint(&self, text: &str) -> String {
        format!("{self}{text}{RESET}")
    }
}

impl fmt::Display for AnsiCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(s) => f.write_str(s),
            Self::Rgb(r, g, b) => write!(f, "\x1b[38;2;{r};{g};{b}m"),
        }
    }
}

/// Paint `text` when a colour is set, pass it through otherwise.
#[inline]
#[must_use]
pub fn colorize(c: Option<&AnsiCode>, text: &str) -> String {
    match c {
        Some(code) => code.paint(text),
        None => text.to_owned(),
    }
}
