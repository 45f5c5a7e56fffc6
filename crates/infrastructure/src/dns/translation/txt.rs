//! Unquoting of TXT `data` strings.
//!
//! Providers emit each character-string as a double-quoted literal with
//! C-style escapes, e.g. `"v=spf1 include:_spf.google.com ~all"`. Long records
//! are split into several literals separated by spaces:
//! `"first 255 bytes" "rest"`.

use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnquoteError {
    /// No quoted segment at all.
    Empty,
    MissingOpeningQuote,
    Unterminated,
    /// Raw line break inside a literal.
    Newline,
    InvalidEscape(char),
    /// Two literals with nothing between them.
    MissingSeparator,
}

impl fmt::Display for UnquoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnquoteError::Empty => f.write_str("empty TXT data"),
            UnquoteError::MissingOpeningQuote => f.write_str("TXT data is not quoted"),
            UnquoteError::Unterminated => f.write_str("unterminated quoted string"),
            UnquoteError::Newline => f.write_str("newline inside quoted string"),
            UnquoteError::InvalidEscape(c) => write!(f, "invalid escape sequence \\{}", c),
            UnquoteError::MissingSeparator => f.write_str("quoted strings are not separated"),
        }
    }
}

impl std::error::Error for UnquoteError {}

/// Splits `data` into its unescaped character-strings.
///
/// Segments are raw bytes: `\xHH` and octal escapes may produce bytes that
/// are not valid UTF-8.
pub fn unquote_segments(data: &str) -> Result<Vec<Vec<u8>>, UnquoteError> {
    let mut chars = data.chars().peekable();
    let mut segments = Vec::new();

    loop {
        while chars.next_if(|c| *c == ' ' || *c == '\t').is_some() {}

        match chars.next() {
            None => break,
            Some('"') => segments.push(read_literal(&mut chars)?),
            Some(_) => return Err(UnquoteError::MissingOpeningQuote),
        }

        match chars.peek() {
            None | Some(' ') | Some('\t') => {}
            Some(_) => return Err(UnquoteError::MissingSeparator),
        }
    }

    if segments.is_empty() {
        return Err(UnquoteError::Empty);
    }

    Ok(segments)
}

/// Reads one literal; the opening quote has already been consumed.
fn read_literal(chars: &mut Peekable<Chars<'_>>) -> Result<Vec<u8>, UnquoteError> {
    let mut bytes = Vec::new();

    loop {
        match chars.next() {
            None => return Err(UnquoteError::Unterminated),
            Some('"') => break,
            Some('\n') => return Err(UnquoteError::Newline),
            Some('\\') => read_escape(chars, &mut bytes)?,
            Some(c) => push_char(&mut bytes, c),
        }
    }

    Ok(bytes)
}

fn read_escape(chars: &mut Peekable<Chars<'_>>, out: &mut Vec<u8>) -> Result<(), UnquoteError> {
    let escape = chars.next().ok_or(UnquoteError::Unterminated)?;

    match escape {
        'a' => out.push(0x07),
        'b' => out.push(0x08),
        'f' => out.push(0x0c),
        'n' => out.push(b'\n'),
        'r' => out.push(b'\r'),
        't' => out.push(b'\t'),
        'v' => out.push(0x0b),
        '\\' => out.push(b'\\'),
        '"' => out.push(b'"'),
        'x' => {
            let value = read_radix(chars, 2, 16).ok_or(UnquoteError::InvalidEscape('x'))?;
            out.push(value as u8);
        }
        '0'..='7' => {
            let first = escape.to_digit(8).unwrap_or_default();
            let rest = read_radix(chars, 2, 8).ok_or(UnquoteError::InvalidEscape(escape))?;
            let value = first * 64 + rest;
            let byte = u8::try_from(value).map_err(|_| UnquoteError::InvalidEscape(escape))?;
            out.push(byte);
        }
        'u' | 'U' => {
            let width = if escape == 'u' { 4 } else { 8 };
            let c = read_radix(chars, width, 16)
                .and_then(char::from_u32)
                .ok_or(UnquoteError::InvalidEscape(escape))?;
            push_char(out, c);
        }
        other => return Err(UnquoteError::InvalidEscape(other)),
    }

    Ok(())
}

/// Consumes exactly `width` digits in `radix`.
fn read_radix(chars: &mut Peekable<Chars<'_>>, width: usize, radix: u32) -> Option<u32> {
    let mut value: u32 = 0;
    for _ in 0..width {
        let digit = chars.next()?.to_digit(radix)?;
        value = value.checked_mul(radix)?.checked_add(digit)?;
    }
    Some(value)
}

fn push_char(out: &mut Vec<u8>, c: char) {
    let mut buf = [0u8; 4];
    out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
}
