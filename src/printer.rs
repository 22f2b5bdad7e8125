//! Routing messages to outputs by kind.

use rustc_hash::FxHashMap;

use crate::color::{Color, Style};
use crate::error::WriteError;
use crate::message::{Message, MessageKind};
use crate::output::Output;

/// Processes and prints a message. Implement this instead of configuring a
/// [`Printer`] when messages need fine-grained handling.
pub trait Print {
    fn print(&self, message: &Message) -> Result<(), WriteError>;
}

/// [`Print`] implementation that routes each message kind to its own
/// [`Output`], with a fallback for unrouted kinds.
pub struct Printer {
    outputs: FxHashMap<MessageKind, Output>,
    fallback: Output,
}

impl Printer {
    /// Printer that sends every message to stdout.
    #[must_use]
    pub fn new() -> Self {
        Printer {
            outputs: FxHashMap::default(),
            fallback: Output::stdout(),
        }
    }

    /// Printer with the default routing: warnings, deprecations, and
    /// errors go to stderr with yellow/yellow/red bodies and bold
    /// `warning:` / `deprecated:` / `error:` prefixes; everything else goes
    /// to stdout. `colors` gates the decoration styles; whether a stream
    /// actually emits ANSI still depends on its own terminal detection.
    #[must_use]
    pub fn with_defaults(colors: bool) -> Self {
        let stderr = Output::stderr();
        let yellow = optionally_colored(colors, Style::from(Color::Yellow));
        let yellow_bold = optionally_colored(colors, Style::from(Color::Yellow).bold(true));
        let red = optionally_colored(colors, Style::from(Color::Red));
        let red_bold = optionally_colored(colors, Style::from(Color::Red).bold(true));

        Printer::new()
            .with_output_for_kind(
                MessageKind::Warning,
                stderr.clone().with_color(yellow).with_prefix("warning:", yellow_bold),
            )
            .with_output_for_kind(
                MessageKind::Deprecation,
                stderr.clone().with_color(yellow).with_prefix("deprecated:", yellow_bold),
            )
            .with_output_for_kind(
                MessageKind::Error,
                stderr.with_color(red).with_prefix("error:", red_bold),
            )
    }

    /// Copy with a new fallback output for kinds without their own route.
    #[must_use]
    pub fn with_output(mut self, output: Output) -> Self {
        self.fallback = output;
        self
    }

    /// Copy with a dedicated output for one message kind.
    #[must_use]
    pub fn with_output_for_kind(mut self, kind: MessageKind, output: Output) -> Self {
        self.outputs.insert(kind, output);
        self
    }
}

impl Default for Printer {
    fn default() -> Self {
        Printer::new()
    }
}

impl Print for Printer {
    fn print(&self, message: &Message) -> Result<(), WriteError> {
        let output = self.outputs.get(&message.kind()).unwrap_or(&self.fallback);
        output.write(message)
    }
}

fn optionally_colored(enabled: bool, style: Style) -> Style {
    if enabled {
        style
    } else {
        Style::plain()
    }
}
