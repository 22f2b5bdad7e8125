//! Adapter that turns a byte stream into printed messages, one per line.
//! Intended for wiring a child process's stdout/stderr into the logger.

use std::io::{self, Write};
use std::sync::Arc;

use crate::message::Message;
use crate::printer::Print;

/// Converts one line of text into a message, or `None` to drop the line.
pub type MessageConverter = Box<dyn Fn(String) -> Option<Message> + Send>;

/// `io::Write` implementation that buffers bytes, converts each complete
/// line into a [`Message`], and prints it.
///
/// Lines are emitted in write-call order; a partial line stays buffered
/// until its terminator arrives. Flushing (or dropping the writer) emits
/// any buffered remainder. One instance serves one stream; share it across
/// threads only with external synchronization.
pub struct MessageWriter {
    printer: Arc<dyn Print + Send + Sync>,
    converter: MessageConverter,
    buf: Vec<u8>,
}

impl MessageWriter {
    #[must_use]
    pub fn new(
        printer: Arc<dyn Print + Send + Sync>,
        converter: impl Fn(String) -> Option<Message> + Send + 'static,
    ) -> Self {
        MessageWriter {
            printer,
            converter: Box::new(converter),
            buf: Vec::with_capacity(256),
        }
    }

    /// Convert and print one line (terminator already removed). Print
    /// failures are discarded: a log pipe must not fail its producer.
    fn emit(&self, line: &[u8]) {
        let text = String::from_utf8_lossy(line);
        let text = text.trim_end_matches('\r');
        if let Some(message) = (self.converter)(text.to_string()) {
            let _ = self.printer.print(&message);
        }
    }
}

impl Write for MessageWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);

        while let Some(pos) = self.buf.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.buf.drain(..=pos).collect();
            self.emit(&line[..line.len() - 1]);
        }

        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.buf.is_empty() {
            let rest = std::mem::take(&mut self.buf);
            self.emit(&rest);
        }
        Ok(())
    }
}

impl Drop for MessageWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}
