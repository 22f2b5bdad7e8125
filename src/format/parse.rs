use super::verb::Verb;
use crate::error::ParseError;

/// One segment of a parsed format string: literal text, or a marker.
/// Concatenating segments in order reproduces the input.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Literal(String),
    Verb(Verb),
}

/// Split a format string into literal and verb tokens.
///
/// A marker is a `%`, a run of flag characters (anything that is not an
/// ASCII letter and not `%`), and a terminating verb letter. `%%` parses as
/// a verb with letter `%`. A `%` with no terminating letter before the end
/// of the string is a [`ParseError`].
pub fn parse(format: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut offset = 0;

    while let Some(index) = format[offset..].find('%') {
        let at = offset + index;
        if at > offset {
            tokens.push(Token::Literal(format[offset..at].to_string()));
        }

        let (verb, consumed) = parse_marker(format, at)?;
        tokens.push(Token::Verb(verb));
        offset = at + consumed;
    }

    if offset < format.len() {
        tokens.push(Token::Literal(format[offset..].to_string()));
    }

    Ok(tokens)
}

/// Parse the marker starting at `format[at]` (which is `%`). Returns the
/// verb and the byte length of the whole marker.
///
/// The flags run is not validated here; capturing every non-letter
/// character covers width, precision, and decorations without this parser
/// needing to understand them.
fn parse_marker(format: &str, at: usize) -> Result<(Verb, usize), ParseError> {
    let rest = &format[at + 1..];

    let terminator = rest
        .char_indices()
        .find(|(_, c)| c.is_ascii_alphabetic() || *c == '%');
    let Some((flags_len, letter)) = terminator else {
        return Err(ParseError::new(at, "incomplete or invalid marker"));
    };

    let verb = Verb::with_flags(letter, &rest[..flags_len]);
    Ok((verb, 1 + flags_len + letter.len_utf8()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_markers() {
        let tokens = parse("hello world").unwrap();
        assert_eq!(tokens, vec![Token::Literal("hello world".to_string())]);
    }

    #[test]
    fn empty_input() {
        assert_eq!(parse("").unwrap(), vec![]);
    }

    #[test]
    fn literal_before_marker() {
        let tokens = parse("before %v").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Literal("before ".to_string()),
                Token::Verb(Verb::new('v')),
            ]
        );
    }

    #[test]
    fn literal_after_marker() {
        let tokens = parse("%v after").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Verb(Verb::new('v')),
                Token::Literal(" after".to_string()),
            ]
        );
    }

    #[test]
    fn adjacent_markers() {
        let tokens = parse("%v%s").unwrap();
        assert_eq!(
            tokens,
            vec![Token::Verb(Verb::new('v')), Token::Verb(Verb::new('s'))]
        );
    }

    #[test]
    fn markers_separated_by_space() {
        let tokens = parse("%v %s").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Verb(Verb::new('v')),
                Token::Literal(" ".to_string()),
                Token::Verb(Verb::new('s')),
            ]
        );
    }

    #[test]
    fn flags_are_captured_verbatim() {
        let cases = [
            ("%#v", "#", 'v'),
            ("%9.2f", "9.2", 'f'),
            ("%+q", "+", 'q'),
            ("%-n", "-", 'n'),
            ("% s", " ", 's'),
        ];
        for (input, flags, letter) in cases {
            let tokens = parse(input).unwrap();
            assert_eq!(
                tokens,
                vec![Token::Verb(Verb::with_flags(letter, flags))],
                "{input}"
            );
        }
    }

    #[test]
    fn literal_percent_escape() {
        let tokens = parse("%%").unwrap();
        assert_eq!(tokens, vec![Token::Verb(Verb::new('%'))]);
    }

    #[test]
    fn marker_stops_at_first_letter() {
        let tokens = parse("%+q leftover text").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Verb(Verb::with_flags('q', "+")),
                Token::Literal(" leftover text".to_string()),
            ]
        );
    }

    #[test]
    fn unterminated_marker_is_an_error() {
        for input in ["%", "%3", "%00000", "tail %"] {
            let err = parse(input).unwrap_err();
            assert!(err.message.contains("marker"), "{input}: {err}");
        }
    }

    #[test]
    fn error_carries_marker_offset() {
        let err = parse("abc %-").unwrap_err();
        assert_eq!(err.offset, 4);
    }

    #[test]
    fn parsed_verb_renders_back_to_its_marker() {
        let tokens = parse("literal %-9.2f").unwrap();
        let Token::Verb(verb) = &tokens[1] else {
            panic!("expected verb token");
        };
        let reparsed = parse(&format!("literal {}", verb.render())).unwrap();
        assert_eq!(reparsed, tokens);
    }
}
