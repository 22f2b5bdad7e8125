use crate::error::ParseError;
use crate::format::{sprintf_with, Arg};
use crate::highlight::{apply_styling, discard_styling};

/// Category of a message, used to route it to an output and pick its
/// decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    /// An update to the program's current status: the program is starting a
    /// new procedure.
    Status,
    /// An informational message about the state of an object.
    Info,
    /// A warning about a minor problem.
    Warning,
    /// A warning that the user is relying on a feature which will be
    /// removed or unsupported in the future.
    Deprecation,
    /// A severe error: the program was unable to complete an action.
    Error,
    /// A custom message kind, for use with a custom printer.
    Custom,
}

/// Verbosity level of a message, following the klog convention:
///
/// - 0: programmer errors, panic context, CLI argument handling
/// - 1: information about config, errors
/// - 2: system state, log messages
/// - 3: extended info about system state changes
/// - 4: logging in thorny parts of code
/// - 5: trace level verbosity
pub type Verbosity = u8;

/// Lowest verbosity threshold applied before any configuration.
pub(crate) const DEFAULT_VERBOSITY: Verbosity = 2;

/// A structured, printable message: its category, verbosity, and the
/// not-yet-rendered format string and arguments.
#[derive(Debug)]
pub struct Message {
    kind: MessageKind,
    verbosity: Verbosity,
    format: String,
    args: Vec<Arg>,
}

impl Message {
    #[must_use]
    pub fn new(
        kind: MessageKind,
        verbosity: Verbosity,
        format: impl Into<String>,
        args: Vec<Arg>,
    ) -> Self {
        Message { kind, verbosity, format: format.into(), args }
    }

    #[must_use]
    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    #[must_use]
    pub fn format(&self) -> &str {
        &self.format
    }

    #[must_use]
    pub fn args(&self) -> &[Arg] {
        &self.args
    }

    /// Render the message text. With `colors` on, highlighted arguments
    /// decorate their formatted text; off, they format as their plain
    /// underlying values.
    pub fn text(&self, colors: bool) -> Result<String, ParseError> {
        if colors {
            sprintf_with(apply_styling, &self.format, &self.args)
        } else {
            sprintf_with(discard_styling, &self.format, &self.args)
        }
    }
}

impl std::fmt::Display for Message {
    /// Plain (undecorated) text. A malformed format string degrades to the
    /// raw format rather than failing the formatter.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.text(false) {
            Ok(text) => f.write_str(&text),
            Err(_) => f.write_str(&self.format),
        }
    }
}

/// Format string for a bare argument list: one `%v` per argument, space
/// separated.
pub(crate) fn joined_format(count: usize) -> String {
    if count == 0 {
        return String::new();
    }
    let mut format = String::with_capacity(count * 3);
    format.push_str("%v");
    for _ in 1..count {
        format.push_str(" %v");
    }
    format
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight;

    #[test]
    fn text_with_and_without_colors() {
        let msg = Message::new(
            MessageKind::Info,
            2,
            "value: %d",
            vec![highlight::red(42)],
        );
        assert_eq!(msg.text(true).unwrap(), "value: \x1B[31m42\x1B[0m");
        assert_eq!(msg.text(false).unwrap(), "value: 42");
    }

    #[test]
    fn display_is_plain_text() {
        let msg = Message::new(
            MessageKind::Info,
            2,
            "hello %s",
            vec![highlight::cyan("world")],
        );
        assert_eq!(msg.to_string(), "hello world");
    }

    #[test]
    fn display_degrades_on_bad_format() {
        let msg = Message::new(MessageKind::Error, 0, "broken %", vec![]);
        assert_eq!(msg.to_string(), "broken %");
    }

    #[test]
    fn joined_format_spacing() {
        assert_eq!(joined_format(0), "");
        assert_eq!(joined_format(1), "%v");
        assert_eq!(joined_format(3), "%v %v %v");
    }
}
