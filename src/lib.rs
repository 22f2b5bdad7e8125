//! Categorized, verbosity-gated console output with per-argument ANSI
//! styling.
//!
//! Messages carry a kind (status, info, warning, deprecation, error) and a
//! verbosity level; a printer routes each kind to a destination. Format
//! arguments wrapped by [`highlight`] carry their own color, applied or
//! dropped per destination at format time:
//!
//! ```no_run
//! use clamor::highlight;
//!
//! clamor::set_verbosity(3);
//! clamor::v(2).infof("checking %d animals", vec![3.into()]);
//! clamor::v(3).statusf("checking %#v...", vec!["shark".into()]);
//! clamor::v(1).errorf("a %s is not a pet", vec![highlight::red("shark")]);
//! ```

pub mod color;
pub mod error;
pub mod format;
pub mod global;
pub mod highlight;
pub mod message;
pub mod output;
pub mod printer;
pub mod verbose;
pub mod writer;

pub use error::{ParseError, WriteError};
pub use global::{printer, set_printer, set_verbosity, v, verbosity};
pub use message::{Message, MessageKind, Verbosity};
pub use output::Output;
pub use printer::{Print, Printer};
pub use verbose::Verbose;
pub use writer::MessageWriter;
