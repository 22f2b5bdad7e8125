use super::value::Value;

/// A parsed format marker: the flags run between the `%` introducer and the
/// single verb letter. Immutable; rewrite callbacks replace it wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verb {
    flags: String,
    letter: char,
}

impl Verb {
    /// Verb with no flags.
    #[must_use]
    pub fn new(letter: char) -> Self {
        Verb { flags: String::new(), letter }
    }

    /// Verb with a flags run (width, precision, `-`, `+`, `#`, `0`, space).
    #[must_use]
    pub fn with_flags(letter: char, flags: impl Into<String>) -> Self {
        Verb { flags: flags.into(), letter }
    }

    #[must_use]
    pub fn letter(&self) -> char {
        self.letter
    }

    #[must_use]
    pub fn flags(&self) -> &str {
        &self.flags
    }

    /// Marker syntax for the verb: `%` + flags + letter. Re-parsing the
    /// rendered marker yields an equal verb.
    #[must_use]
    pub fn render(&self) -> String {
        format!("%{}{}", self.flags, self.letter)
    }

    /// Inline diagnostic emitted when the verb has no matching argument,
    /// e.g. `%!s(MISSING)`.
    #[must_use]
    pub fn missing_placeholder(&self) -> String {
        format!("%!{}{}(MISSING)", self.flags, self.letter)
    }

    /// Format a single value with this verb.
    ///
    /// A value that does not fit the verb letter falls back to its default
    /// rendering instead of erroring; a log line with a slightly wrong verb
    /// still beats no log line.
    #[must_use]
    pub fn format(&self, value: &Value) -> String {
        if self.letter == '%' {
            return "%".to_string();
        }

        let layout = Layout::parse(&self.flags);
        let (body, numeric) = match self.letter {
            'd' | 'i' => (format_int(value, &layout, 10, false), true),
            'x' => (format_int(value, &layout, 16, false), true),
            'X' => (format_int(value, &layout, 16, true), true),
            'o' => (format_int(value, &layout, 8, false), true),
            'b' => (format_int(value, &layout, 2, false), true),
            'f' | 'F' => (format_float_fixed(value, &layout), true),
            'e' => (format_float_exp(value, &layout, false), true),
            'E' => (format_float_exp(value, &layout, true), true),
            'g' | 'G' => (format_float_shortest(value, &layout), true),
            's' => (truncate(value.to_string(), &layout), false),
            'v' => (format_default(value, &layout), false),
            'q' => (truncate(format_quoted(value), &layout), false),
            'c' => (format_char(value), false),
            't' => (format_bool(value), false),
            _ => (value.to_string(), false),
        };

        pad(body, &layout, numeric)
    }
}

impl std::fmt::Display for Verb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "%{}{}", self.flags, self.letter)
    }
}

/// Flags run decoded into layout directives. Unrecognized characters in the
/// run are skipped; they still round-trip through `Verb::render`.
#[derive(Debug, Default, PartialEq, Eq)]
struct Layout {
    left_align: bool,
    zero_pad: bool,
    plus: bool,
    space: bool,
    alternate: bool,
    width: Option<usize>,
    precision: Option<usize>,
}

impl Layout {
    fn parse(flags: &str) -> Self {
        let mut layout = Layout::default();
        let mut rest = flags;

        // Switch characters precede the width digits.
        loop {
            let Some(c) = rest.chars().next() else { break };
            match c {
                '-' => layout.left_align = true,
                '+' => layout.plus = true,
                ' ' => layout.space = true,
                '#' => layout.alternate = true,
                '0' => layout.zero_pad = true,
                _ => break,
            }
            rest = &rest[c.len_utf8()..];
        }

        let (width, after_width) = take_digits(rest);
        layout.width = width;
        rest = after_width;

        if let Some(stripped) = rest.strip_prefix('.') {
            let (precision, after_precision) = take_digits(stripped);
            layout.precision = Some(precision.unwrap_or(0));
            rest = after_precision;
        }

        // Anything left over is an unsupported decoration; ignore it.
        let _ = rest;
        layout
    }
}

/// Split a leading decimal run off `s`, if any.
fn take_digits(s: &str) -> (Option<usize>, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    if end == 0 {
        return (None, s);
    }
    (s[..end].parse().ok(), &s[end..])
}

/// Sign and magnitude for integer-renderable values.
fn int_magnitude(value: &Value) -> Option<(bool, u128)> {
    match value {
        Value::Int(n) => Some((*n < 0, n.unsigned_abs().into())),
        Value::Uint(n) => Some((false, (*n).into())),
        Value::Char(c) => Some((false, (*c as u32).into())),
        _ => None,
    }
}

fn float_magnitude(value: &Value) -> Option<f64> {
    match value {
        Value::Float(x) => Some(*x),
        Value::Int(n) => Some(*n as f64),
        Value::Uint(n) => Some(*n as f64),
        _ => None,
    }
}

fn format_int(value: &Value, layout: &Layout, radix: u32, upper: bool) -> String {
    let Some((negative, magnitude)) = int_magnitude(value) else {
        return value.to_string();
    };

    let digits = radix_digits(magnitude, radix, upper);
    let prefix = if layout.alternate {
        match radix {
            16 if upper => "0X",
            16 => "0x",
            8 => "0o",
            2 => "0b",
            _ => "",
        }
    } else {
        ""
    };

    format!("{}{}{}", sign_prefix(negative, layout), prefix, digits)
}

fn radix_digits(mut magnitude: u128, radix: u32, upper: bool) -> String {
    if magnitude == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while magnitude > 0 {
        let d = (magnitude % u128::from(radix)) as u32;
        let c = char::from_digit(d, radix).unwrap_or('0');
        digits.push(if upper { c.to_ascii_uppercase() } else { c });
        magnitude /= u128::from(radix);
    }
    digits.iter().rev().collect()
}

fn sign_prefix(negative: bool, layout: &Layout) -> &'static str {
    if negative {
        "-"
    } else if layout.plus {
        "+"
    } else if layout.space {
        " "
    } else {
        ""
    }
}

fn format_float_fixed(value: &Value, layout: &Layout) -> String {
    let Some(x) = float_magnitude(value) else {
        return value.to_string();
    };
    let precision = layout.precision.unwrap_or(6);
    let body = format!("{x:.precision$}");
    decorate_float_sign(body, x, layout)
}

fn format_float_exp(value: &Value, layout: &Layout, upper: bool) -> String {
    let Some(x) = float_magnitude(value) else {
        return value.to_string();
    };
    let precision = layout.precision.unwrap_or(6);
    let body = if upper {
        format!("{x:.precision$E}")
    } else {
        format!("{x:.precision$e}")
    };
    decorate_float_sign(body, x, layout)
}

fn format_float_shortest(value: &Value, layout: &Layout) -> String {
    let Some(x) = float_magnitude(value) else {
        return value.to_string();
    };
    let body = match layout.precision {
        Some(precision) => format!("{x:.precision$}"),
        None => format!("{x}"),
    };
    decorate_float_sign(body, x, layout)
}

fn decorate_float_sign(body: String, x: f64, layout: &Layout) -> String {
    if x.is_sign_negative() {
        return body;
    }
    if layout.plus {
        format!("+{body}")
    } else if layout.space {
        format!(" {body}")
    } else {
        body
    }
}

fn format_default(value: &Value, layout: &Layout) -> String {
    if layout.alternate {
        // Debug form: strings and chars are quoted, everything else keeps
        // its default rendering.
        return match value {
            Value::Str(s) => format!("{s:?}"),
            Value::Char(c) => format!("{c:?}"),
            _ => value.to_string(),
        };
    }
    truncate(value.to_string(), layout)
}

fn format_quoted(value: &Value) -> String {
    match value {
        Value::Str(s) => format!("{s:?}"),
        Value::Char(c) => format!("{c:?}"),
        _ => format!("{:?}", value.to_string()),
    }
}

fn format_char(value: &Value) -> String {
    match value {
        Value::Char(c) => c.to_string(),
        Value::Int(n) => u32::try_from(*n)
            .ok()
            .and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_else(|| value.to_string()),
        Value::Uint(n) => u32::try_from(*n)
            .ok()
            .and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_else(|| value.to_string()),
        Value::Str(s) => s.chars().next().map(String::from).unwrap_or_default(),
        _ => value.to_string(),
    }
}

fn format_bool(value: &Value) -> String {
    match value {
        Value::Bool(b) => b.to_string(),
        _ => value.to_string(),
    }
}

/// Apply a precision cap to textual output (character-wise, like `%.3s`).
fn truncate(s: String, layout: &Layout) -> String {
    match layout.precision {
        Some(p) if s.chars().count() > p => s.chars().take(p).collect(),
        _ => s,
    }
}

/// Pad to the layout width. Zero padding applies to right-aligned numerics
/// only, with the fill inserted after any sign and radix prefix.
fn pad(s: String, layout: &Layout, numeric: bool) -> String {
    let Some(width) = layout.width else { return s };
    let len = s.chars().count();
    if len >= width {
        return s;
    }
    let fill = width - len;

    if layout.left_align {
        return format!("{s}{}", " ".repeat(fill));
    }
    if layout.zero_pad && numeric {
        let split = numeric_prefix_len(&s);
        let (head, tail) = s.split_at(split);
        return format!("{head}{}{tail}", "0".repeat(fill));
    }
    format!("{}{s}", " ".repeat(fill))
}

/// Byte length of a leading sign and/or radix prefix (`-`, `+`, ` `, `0x`,
/// `0X`, `0o`, `0b`), so zero fill lands between prefix and digits.
fn numeric_prefix_len(s: &str) -> usize {
    let mut len = 0;
    let rest = match s.as_bytes().first() {
        Some(b'-' | b'+' | b' ') => {
            len += 1;
            &s[1..]
        }
        _ => s,
    };
    if rest.starts_with("0x") || rest.starts_with("0X") || rest.starts_with("0o") || rest.starts_with("0b")
    {
        len += 2;
    }
    len
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(flags: &str, letter: char, value: impl Into<Value>) -> String {
        Verb::with_flags(letter, flags).format(&value.into())
    }

    #[test]
    fn render_round_trip() {
        let verb = Verb::with_flags('f', "-9.2");
        assert_eq!(verb.render(), "%-9.2f");
        assert_eq!(verb.to_string(), "%-9.2f");
    }

    #[test]
    fn missing_placeholder_includes_flags() {
        assert_eq!(Verb::new('s').missing_placeholder(), "%!s(MISSING)");
        assert_eq!(
            Verb::with_flags('d', "04").missing_placeholder(),
            "%!04d(MISSING)"
        );
    }

    #[test]
    fn integers() {
        assert_eq!(fmt("", 'd', 42), "42");
        assert_eq!(fmt("", 'd', -7), "-7");
        assert_eq!(fmt("5", 'd', 42), "   42");
        assert_eq!(fmt("-5", 'd', 42), "42   ");
        assert_eq!(fmt("05", 'd', 42), "00042");
        assert_eq!(fmt("05", 'd', -42), "-0042");
        assert_eq!(fmt("+", 'd', 42), "+42");
        assert_eq!(fmt(" ", 'd', 42), " 42");
    }

    #[test]
    fn integer_bases() {
        assert_eq!(fmt("", 'x', 255), "ff");
        assert_eq!(fmt("", 'X', 255), "FF");
        assert_eq!(fmt("#", 'x', 255), "0xff");
        assert_eq!(fmt("#", 'X', 255), "0XFF");
        assert_eq!(fmt("", 'o', 8), "10");
        assert_eq!(fmt("", 'b', 5), "101");
        assert_eq!(fmt("#08", 'x', 255), "0x0000ff");
    }

    #[test]
    fn int_min_does_not_overflow() {
        assert_eq!(fmt("", 'd', i64::MIN), "-9223372036854775808");
    }

    #[test]
    fn floats() {
        assert_eq!(fmt("", 'f', 1.5), "1.500000");
        assert_eq!(fmt(".2", 'f', 1.005), "1.00");
        assert_eq!(fmt("8.2", 'f', 1.5), "    1.50");
        assert_eq!(fmt("1.2", 'f', 1.001), "1.00");
        assert_eq!(fmt("1.0", 'f', 1.123), "1");
        assert_eq!(fmt("+.1", 'f', 2.0), "+2.0");
    }

    #[test]
    fn float_shortest() {
        assert_eq!(fmt("", 'g', 2.0), "2");
        assert_eq!(fmt(".3", 'g', 2.0), "2.000");
    }

    #[test]
    fn strings() {
        assert_eq!(fmt("", 's', "hello"), "hello");
        assert_eq!(fmt("8", 's', "hi"), "      hi");
        assert_eq!(fmt("-8", 's', "hi"), "hi      ");
        assert_eq!(fmt(".3", 's', "hello"), "hel");
        // Zero padding never applies to strings.
        assert_eq!(fmt("08", 's', "hi"), "      hi");
    }

    #[test]
    fn quoted_and_debug_forms() {
        assert_eq!(fmt("", 'q', "world"), "\"world\"");
        assert_eq!(fmt("#", 'v', "world"), "\"world\"");
        assert_eq!(fmt("", 'v', "world"), "world");
        assert_eq!(fmt("", 'v', 3), "3");
    }

    #[test]
    fn chars_and_bools() {
        assert_eq!(fmt("", 'c', 'x'), "x");
        assert_eq!(fmt("", 'c', 65), "A");
        assert_eq!(fmt("", 't', true), "true");
        assert_eq!(fmt("", 't', false), "false");
    }

    #[test]
    fn mismatched_value_falls_back_to_default_form() {
        assert_eq!(fmt("", 'd', "abc"), "abc");
        assert_eq!(fmt("", 'f', "abc"), "abc");
        assert_eq!(fmt("", 't', 3), "3");
    }

    #[test]
    fn literal_percent_ignores_value() {
        assert_eq!(Verb::new('%').format(&Value::Int(1)), "%");
    }

    #[test]
    fn verb_equality_is_field_wise() {
        assert_eq!(Verb::new('s'), Verb::with_flags('s', ""));
        assert_ne!(Verb::new('s'), Verb::with_flags('s', "-"));
        assert_ne!(Verb::new('s'), Verb::new('d'));
    }
}
