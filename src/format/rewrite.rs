use super::parse::{parse, Token};
use super::value::{Arg, Value};
use super::verb::Verb;
use crate::error::ParseError;

/// Sentinel result for a rewrite callback: a plain string verb wrapping
/// text that is already fully formatted, so the engine substitutes it
/// without further verb-specific formatting.
#[must_use]
pub fn preformatted(text: impl Into<String>) -> (Verb, Value) {
    (Verb::new('s'), Value::Str(text.into()))
}

/// Rebuild a format string and argument list, giving `mitm` the chance to
/// replace each verb and/or its argument.
///
/// Tokens are walked in order with an argument cursor. The callback runs
/// exactly once per verb that has a matching argument, left to right, and
/// never for literals, `%%`, or verbs past the end of `args`. A verb with
/// no argument left becomes an inline `%!…(MISSING)` diagnostic in the
/// rendered output (escaped here, since the returned string is still a
/// format string) and the walk continues. `%%` consumes no argument.
/// Surplus arguments are ignored.
pub fn rewrite<F>(mitm: F, format: &str, args: &[Arg]) -> Result<(String, Vec<Value>), ParseError>
where
    F: Fn(Verb, &Arg) -> (Verb, Value),
{
    let tokens = parse(format)?;

    let mut new_format = String::with_capacity(format.len());
    let mut new_args = Vec::with_capacity(args.len());
    let mut cursor = 0;

    for token in tokens {
        match token {
            Token::Literal(text) => new_format.push_str(&text),
            Token::Verb(verb) if verb.letter() == '%' => new_format.push_str("%%"),
            Token::Verb(verb) => {
                if cursor >= args.len() {
                    new_format.push('%');
                    new_format.push_str(&verb.missing_placeholder());
                    continue;
                }

                let (new_verb, new_value) = mitm(verb, &args[cursor]);
                new_format.push_str(&new_verb.render());
                new_args.push(new_value);
                cursor += 1;
            }
        }
    }

    Ok((new_format, new_args))
}

/// Positional formatter: substitute `args` into `format` in order.
///
/// `%%` renders as a literal percent without consuming an argument; a verb
/// beyond the end of `args` renders as its `%!…(MISSING)` diagnostic and
/// processing continues.
pub fn sprintf(format: &str, args: &[Value]) -> Result<String, ParseError> {
    let tokens = parse(format)?;

    let mut out = String::with_capacity(format.len());
    let mut cursor = 0;

    for token in tokens {
        match token {
            Token::Literal(text) => out.push_str(&text),
            Token::Verb(verb) if verb.letter() == '%' => out.push('%'),
            Token::Verb(verb) => match args.get(cursor) {
                Some(value) => {
                    out.push_str(&verb.format(value));
                    cursor += 1;
                }
                None => out.push_str(&verb.missing_placeholder()),
            },
        }
    }

    Ok(out)
}

/// Rewrite with `mitm`, then render the result. The primary entry point for
/// message formatting.
pub fn sprintf_with<F>(mitm: F, format: &str, args: &[Arg]) -> Result<String, ParseError>
where
    F: Fn(Verb, &Arg) -> (Verb, Value),
{
    let (new_format, new_args) = rewrite(mitm, format, args)?;
    sprintf(&new_format, &new_args)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Pass plain values through untouched; unwrap highlights.
    fn keep(verb: Verb, arg: &Arg) -> (Verb, Value) {
        match arg {
            Arg::Value(v) => (verb, v.clone()),
            Arg::Highlight(h) => (verb, h.value().clone()),
        }
    }

    #[test]
    fn identity_matches_direct_formatting() {
        let got = sprintf_with(keep, "hello, %s", &["world".into()]).unwrap();
        assert_eq!(got, "hello, world");

        let direct = sprintf("n=%d f=%.1f", &[7.into(), 2.5.into()]).unwrap();
        let rewritten =
            sprintf_with(keep, "n=%d f=%.1f", &[7.into(), 2.5.into()]).unwrap();
        assert_eq!(rewritten, direct);
    }

    #[test]
    fn callback_replaces_arguments() {
        let got = sprintf_with(
            |verb, _| (verb, Value::Str("mitm".to_string())),
            "hello, %s! I'm %s",
            &["world".into(), "ethan".into()],
        )
        .unwrap();
        assert_eq!(got, "hello, mitm! I'm mitm");
    }

    #[test]
    fn callback_replaces_verbs() {
        let got = sprintf_with(
            |_, arg| keep(Verb::with_flags('f', "1.2"), arg),
            "%v %v",
            &[1.001.into(), 2.0.into()],
        )
        .unwrap();
        assert_eq!(got, "1.00 2.00");
    }

    #[test]
    fn callback_wraps_arguments_with_preformatted() {
        let got = sprintf_with(
            |verb, arg| {
                let Arg::Value(v) = arg else { panic!("plain args only") };
                preformatted(format!("({})", verb.format(v)))
            },
            "the number %1.3f is %1.0f when truncated",
            &[1.123.into(), 1.123.into()],
        )
        .unwrap();
        assert_eq!(got, "the number (1.123) is (1) when truncated");
    }

    #[test]
    fn missing_arguments_render_inline_and_do_not_abort() {
        let got = sprintf_with(keep, "%s %s", &["one".into()]).unwrap();
        assert_eq!(got, "one %!s(MISSING)");

        let got = sprintf_with(keep, "%d then %04d end", &[]).unwrap();
        assert_eq!(got, "%!d(MISSING) then %!04d(MISSING) end");
    }

    #[test]
    fn callback_not_invoked_past_argument_count() {
        let calls = std::cell::Cell::new(0);
        let _ = sprintf_with(
            |verb, arg| {
                calls.set(calls.get() + 1);
                keep(verb, arg)
            },
            "%s %s %s",
            &["only".into()],
        )
        .unwrap();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn literal_percent_consumes_no_argument() {
        let got = sprintf_with(keep, "100%% of %d", &[3.into()]).unwrap();
        assert_eq!(got, "100% of 3");
    }

    #[test]
    fn literal_percent_never_reaches_the_callback() {
        let got = sprintf_with(
            |_, _| panic!("callback must not run for %%"),
            "50%% done",
            &[],
        )
        .unwrap();
        assert_eq!(got, "50% done");
    }

    #[test]
    fn surplus_arguments_are_ignored() {
        let got = sprintf_with(keep, "%s", &["a".into(), "b".into()]).unwrap();
        assert_eq!(got, "a");
    }

    #[test]
    fn parse_error_propagates() {
        let err = sprintf_with(keep, "oops %", &["x".into()]).unwrap_err();
        assert_eq!(err.offset, 5);
        assert!(sprintf("%3", &[]).is_err());
    }

    #[test]
    fn rewrite_exposes_new_format_and_args() {
        let (format, args) = rewrite(
            |_, arg| keep(Verb::new('s'), arg),
            "x=%04d",
            &[5.into()],
        )
        .unwrap();
        assert_eq!(format, "x=%s");
        assert_eq!(args, vec![Value::Int(5)]);
    }
}
