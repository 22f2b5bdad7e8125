use std::io;

/// Structured error for a malformed format string, with the byte offset of
/// the marker that failed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub offset: usize,
    pub message: String,
}

impl ParseError {
    #[must_use]
    pub fn new(offset: usize, message: impl Into<String>) -> Self {
        ParseError { offset, message: message.into() }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "byte {}: {}", self.offset, self.message)
    }
}

impl std::error::Error for ParseError {}

/// Failure while writing a message to a destination: either the message's
/// format string would not parse, or the underlying writer failed.
#[derive(Debug)]
pub enum WriteError {
    Format(ParseError),
    Io(io::Error),
}

impl std::fmt::Display for WriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WriteError::Format(e) => write!(f, "invalid message format: {e}"),
            WriteError::Io(e) => write!(f, "failed to write message: {e}"),
        }
    }
}

impl std::error::Error for WriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WriteError::Format(e) => Some(e),
            WriteError::Io(e) => Some(e),
        }
    }
}

impl From<ParseError> for WriteError {
    fn from(e: ParseError) -> Self {
        WriteError::Format(e)
    }
}

impl From<io::Error> for WriteError {
    fn from(e: io::Error) -> Self {
        WriteError::Io(e)
    }
}
