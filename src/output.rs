//! Message destinations: a writer plus the decoration applied around each
//! rendered message.

use std::env;
use std::io::{self, IsTerminal, Write};
use std::sync::{Arc, Mutex, PoisonError};

use crate::color::Style;
use crate::error::WriteError;
use crate::message::Message;

/// A destination where formatted messages are sent.
///
/// Outputs are cheap to clone and share their underlying writer; the
/// builder methods return modified copies, so one stream can back several
/// differently-decorated outputs.
#[derive(Clone)]
pub struct Output {
    writer: Arc<Mutex<dyn Write + Send>>,
    colors: bool,
    terminator: String,
    color: Style,
    prefix: String,
    prefix_color: Style,
}

impl Output {
    /// Output over an arbitrary writer, colors disabled.
    #[must_use]
    pub fn from_writer(writer: impl Write + Send + 'static) -> Self {
        Output {
            writer: Arc::new(Mutex::new(writer)),
            colors: false,
            terminator: "\n".to_string(),
            color: Style::plain(),
            prefix: String::new(),
            prefix_color: Style::plain(),
        }
    }

    /// Output to stdout, colors enabled when stdout supports them.
    #[must_use]
    pub fn stdout() -> Self {
        let colors = supports_color(&io::stdout());
        Output::from_writer(io::stdout()).with_colors(colors)
    }

    /// Output to stderr, colors enabled when stderr supports them.
    #[must_use]
    pub fn stderr() -> Self {
        let colors = supports_color(&io::stderr());
        Output::from_writer(io::stderr()).with_colors(colors)
    }

    /// Copy with colors enabled or disabled.
    #[must_use]
    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    /// Copy with a default text style, applied to every message body that
    /// goes through this output (when colors are on).
    #[must_use]
    pub fn with_color(mut self, color: Style) -> Self {
        self.color = color;
        self
    }

    /// Copy with a prefix string and its style, printed before each
    /// message.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>, color: Style) -> Self {
        self.prefix = prefix.into();
        self.prefix_color = color;
        self
    }

    /// Render a message and write it, followed by the line terminator.
    pub fn write(&self, message: &Message) -> Result<(), WriteError> {
        let mut text = message.text(self.colors)?;
        let mut prefix = self.prefix.clone();

        if self.colors {
            text = self.color.apply(&text);
            prefix = self.prefix_color.apply(&prefix);
        }

        if !self.prefix.is_empty() {
            text = format!("{prefix} {text}");
        }

        // A writer poisoned by a panicking thread can still carry log
        // output; recover the guard rather than refusing to log.
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writer.write_all(text.as_bytes())?;
        writer.write_all(self.terminator.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

/// Whether a stream should receive colored output: `NO_COLOR` must be unset
/// and the stream must be a terminal.
fn supports_color(stream: &impl IsTerminal) -> bool {
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }
    stream.is_terminal()
}
