//! Terminal text styling via ANSI SGR sequences.

/// ANSI SGR escape sequence that resets all attributes.
pub const RESET: &str = "\x1B[0m";

/// Abstract terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    None,
    White,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
}

impl Color {
    /// Base SGR digit for the color, combined with `3` (foreground) or
    /// `4` (background) by the caller. `None` has no digit.
    fn sgr_digit(self) -> Option<char> {
        match self {
            Color::None => None,
            // Technically "default", but white and black are avoided
            // because terminal backgrounds can be either.
            Color::White => Some('9'),
            Color::Red => Some('1'),
            Color::Green => Some('2'),
            Color::Yellow => Some('3'),
            Color::Blue => Some('4'),
            Color::Magenta => Some('5'),
            Color::Cyan => Some('6'),
        }
    }
}

/// Immutable bundle of terminal text attributes. Builder methods return
/// modified copies; the all-default style applies as the identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    foreground: Color,
    background: Color,
    bold: bool,
}

impl Style {
    /// Style with no attributes set. `apply` leaves text untouched.
    #[must_use]
    pub fn plain() -> Self {
        Style::default()
    }

    /// Copy of the style with the given foreground color.
    #[must_use]
    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = color;
        self
    }

    /// Copy of the style with the given background color.
    #[must_use]
    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Copy of the style with boldness enabled or disabled.
    #[must_use]
    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Start sequence for the style (`ESC [ params m`), or an empty string
    /// when no attribute is set. Parameters appear bold first, then
    /// foreground, then background, semicolon-joined.
    fn start_sequence(&self) -> String {
        let mut seq = String::new();

        if self.bold {
            append_sgr_parameter(&mut seq, "1");
        }
        if let Some(digit) = self.foreground.sgr_digit() {
            append_sgr_parameter(&mut seq, "3");
            seq.push(digit);
        }
        if let Some(digit) = self.background.sgr_digit() {
            append_sgr_parameter(&mut seq, "4");
            seq.push(digit);
        }

        if !seq.is_empty() {
            seq.push('m');
        }
        seq
    }

    /// Wrap `text` in the style's start/reset sequences.
    ///
    /// Any reset sequence already inside `text` (from an inner style) is
    /// re-followed by this style's start sequence, so styling nests one
    /// level deep: text after an inner reset keeps the outer appearance
    /// until the outer reset.
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        let start = self.start_sequence();
        if start.is_empty() {
            return text.to_string();
        }

        let body = text.replace(RESET, &format!("{RESET}{start}"));
        format!("{start}{body}{RESET}")
    }
}

impl From<Color> for Style {
    /// Foreground-only style for the color.
    fn from(color: Color) -> Self {
        Style::plain().foreground(color)
    }
}

/// Append one parameter to an SGR sequence under construction, emitting the
/// introducer for the first parameter and a separator for the rest.
fn append_sgr_parameter(seq: &mut String, parameter: &str) {
    if seq.is_empty() {
        seq.push_str("\x1B[");
    } else {
        seq.push(';');
    }
    seq.push_str(parameter);
}
