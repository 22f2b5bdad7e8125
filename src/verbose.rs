//! Verbosity-gated message building.

use std::io;
use std::sync::Arc;

use crate::format::Arg;
use crate::message::{joined_format, Message, MessageKind, Verbosity};
use crate::printer::Print;
use crate::writer::MessageWriter;

/// Builds and prints messages at one verbosity level.
///
/// Obtained from [`crate::v`], or constructed directly with
/// [`Verbose::with_printer`] when the process-wide configuration is not
/// wanted. A disabled instance turns every print into a no-op, and
/// [`enabled`](Verbose::enabled) lets callers skip building expensive
/// arguments entirely.
///
/// Print failures are deliberately discarded; emitting a log line must not
/// become a failure path of the host program.
pub struct Verbose {
    verbosity: Verbosity,
    printer: Arc<dyn Print + Send + Sync>,
    enabled: bool,
}

impl Verbose {
    /// Instance bound to an explicit printer and threshold instead of the
    /// process-wide configuration.
    #[must_use]
    pub fn with_printer(
        verbosity: Verbosity,
        threshold: Verbosity,
        printer: Arc<dyn Print + Send + Sync>,
    ) -> Self {
        Verbose {
            enabled: verbosity <= threshold,
            verbosity,
            printer,
        }
    }

    /// True if messages from this instance will be printed.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    fn emit(&self, kind: MessageKind, format: &str, args: Vec<Arg>) {
        if self.enabled {
            let _ = self
                .printer
                .print(&Message::new(kind, self.verbosity, format, args));
        }
    }

    /// Space-joined `%v` rendering of bare arguments, for the non-format
    /// variants.
    fn emit_joined(&self, kind: MessageKind, args: Vec<Arg>) {
        if self.enabled {
            self.emit(kind, &joined_format(args.len()), args);
        }
    }

    /// Print a formatted Status message.
    pub fn statusf(&self, format: &str, args: Vec<Arg>) {
        self.emit(MessageKind::Status, format, args);
    }

    /// Print a Status message from bare arguments.
    pub fn status(&self, args: Vec<Arg>) {
        self.emit_joined(MessageKind::Status, args);
    }

    /// Print a formatted Info message.
    pub fn infof(&self, format: &str, args: Vec<Arg>) {
        self.emit(MessageKind::Info, format, args);
    }

    /// Print an Info message from bare arguments.
    pub fn info(&self, args: Vec<Arg>) {
        self.emit_joined(MessageKind::Info, args);
    }

    /// Print a formatted Warning message.
    pub fn warningf(&self, format: &str, args: Vec<Arg>) {
        self.emit(MessageKind::Warning, format, args);
    }

    /// Print a Warning message from bare arguments.
    pub fn warning(&self, args: Vec<Arg>) {
        self.emit_joined(MessageKind::Warning, args);
    }

    /// Print a formatted Deprecation warning message.
    pub fn deprecationf(&self, format: &str, args: Vec<Arg>) {
        self.emit(MessageKind::Deprecation, format, args);
    }

    /// Print a Deprecation warning message from bare arguments.
    pub fn deprecation(&self, args: Vec<Arg>) {
        self.emit_joined(MessageKind::Deprecation, args);
    }

    /// Print a formatted Error message.
    pub fn errorf(&self, format: &str, args: Vec<Arg>) {
        self.emit(MessageKind::Error, format, args);
    }

    /// Print an Error message from bare arguments.
    pub fn error(&self, args: Vec<Arg>) {
        self.emit_joined(MessageKind::Error, args);
    }

    /// Writer that prints each incoming line as a message of `kind`, for
    /// wiring up a child process's stdout or stderr.
    ///
    /// When this instance is disabled the returned writer discards its
    /// input without buffering.
    #[must_use]
    pub fn writer(&self, kind: MessageKind) -> Box<dyn io::Write + Send> {
        if !self.enabled {
            return Box::new(io::sink());
        }

        let verbosity = self.verbosity;
        Box::new(MessageWriter::new(self.printer.clone(), move |text| {
            Some(Message::new(kind, verbosity, "%s", vec![text.into()]))
        }))
    }
}
