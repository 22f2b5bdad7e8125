//! Per-argument styling: wrap a format argument so it carries its own
//! presentation, independent of the caller's format string.

use crate::color::{Color, Style};
use crate::format::{preformatted, Arg, Value, Verb};

/// Capability for arguments that decorate their formatted text.
///
/// The rewrite engine formats [`value`](Highlight::value) with the token's
/// verb first, then passes the formatted text to
/// [`apply`](Highlight::apply) exactly once.
pub trait Highlight {
    /// The underlying value to be formatted by the normal verb.
    fn value(&self) -> &Value;

    /// Wrap already-formatted text with presentation (ANSI codes,
    /// bracketing, ...).
    fn apply(&self, text: &str) -> String;
}

/// [`Highlight`] backed by a terminal [`Style`].
pub struct Styled {
    value: Value,
    style: Style,
}

impl Highlight for Styled {
    fn value(&self) -> &Value {
        &self.value
    }

    fn apply(&self, text: &str) -> String {
        self.style.apply(text)
    }
}

/// Highlight a value with an arbitrary style.
#[must_use]
pub fn new(value: impl Into<Value>, style: Style) -> Arg {
    Arg::Highlight(Box::new(Styled { value: value.into(), style }))
}

/// Highlight the value in red.
#[must_use]
pub fn red(value: impl Into<Value>) -> Arg {
    new(value, Style::from(Color::Red))
}

/// Highlight the value in green.
#[must_use]
pub fn green(value: impl Into<Value>) -> Arg {
    new(value, Style::from(Color::Green))
}

/// Highlight the value in yellow.
#[must_use]
pub fn yellow(value: impl Into<Value>) -> Arg {
    new(value, Style::from(Color::Yellow))
}

/// Highlight the value in blue.
#[must_use]
pub fn blue(value: impl Into<Value>) -> Arg {
    new(value, Style::from(Color::Blue))
}

/// Highlight the value in magenta.
#[must_use]
pub fn magenta(value: impl Into<Value>) -> Arg {
    new(value, Style::from(Color::Magenta))
}

/// Highlight the value in cyan.
#[must_use]
pub fn cyan(value: impl Into<Value>) -> Arg {
    new(value, Style::from(Color::Cyan))
}

/// Highlight the value in the terminal's default foreground (reads as white
/// or black depending on the background).
#[must_use]
pub fn white(value: impl Into<Value>) -> Arg {
    new(value, Style::from(Color::White))
}

/// Rewrite policy for colored destinations: a highlighted argument is
/// formatted with its verb, decorated, and substituted as final text.
/// Plain arguments pass through untouched.
pub fn apply_styling(verb: Verb, arg: &Arg) -> (Verb, Value) {
    match arg {
        Arg::Highlight(h) => {
            let formatted = verb.format(h.value());
            preformatted(h.apply(&formatted))
        }
        Arg::Value(v) => (verb, v.clone()),
    }
}

/// Rewrite policy for plain destinations: a highlighted argument is
/// unwrapped and formatted normally, dropping its decoration.
pub fn discard_styling(verb: Verb, arg: &Arg) -> (Verb, Value) {
    match arg {
        Arg::Highlight(h) => (verb, h.value().clone()),
        Arg::Value(v) => (verb, v.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::sprintf_with;

    /// Decorates with braces instead of colors.
    struct Braced(Value);

    impl Highlight for Braced {
        fn value(&self) -> &Value {
            &self.0
        }

        fn apply(&self, text: &str) -> String {
            format!("{{{text}}}")
        }
    }

    #[test]
    fn apply_styling_formats_then_decorates() {
        let got = sprintf_with(
            apply_styling,
            "hello %s",
            &[Arg::highlight(Braced("world".into()))],
        )
        .unwrap();
        assert_eq!(got, "hello {world}");
    }

    #[test]
    fn apply_styling_respects_the_verb() {
        let got = sprintf_with(
            apply_styling,
            "hello %#v",
            &[Arg::highlight(Braced("world".into()))],
        )
        .unwrap();
        assert_eq!(got, "hello {\"world\"}");
    }

    #[test]
    fn discard_styling_unwraps() {
        let got = sprintf_with(
            discard_styling,
            "hello %s",
            &[Arg::highlight(Braced("world".into()))],
        )
        .unwrap();
        assert_eq!(got, "hello world");

        let got = sprintf_with(
            discard_styling,
            "hello %#v",
            &[Arg::highlight(Braced("world".into()))],
        )
        .unwrap();
        assert_eq!(got, "hello \"world\"");
    }

    #[test]
    fn plain_arguments_pass_through_both_policies() {
        for policy in [apply_styling, discard_styling] {
            let got = sprintf_with(policy, "hello %s", &["world".into()]).unwrap();
            assert_eq!(got, "hello world");
        }
    }

    #[test]
    fn color_constructors_carry_their_style() {
        let Arg::Highlight(h) = red(42) else {
            panic!("expected a highlight argument");
        };
        assert_eq!(*h.value(), Value::Int(42));
        assert_eq!(h.apply("42"), "\x1B[31m42\x1B[0m");
    }

    #[test]
    fn end_to_end_red_number() {
        let got = sprintf_with(apply_styling, "value: %d", &[red(42)]).unwrap();
        assert_eq!(got, "value: \x1B[31m42\x1B[0m");

        let got = sprintf_with(discard_styling, "value: %d", &[red(42)]).unwrap();
        assert_eq!(got, "value: 42");
    }
}
