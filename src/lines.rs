use winnow::prelude::*;
use winnow::token::{rest, take_while};

/// Trimmed, non-blank lines of `input`.
pub fn content_lines(input: &str) -> impl Iterator<Item = &str> {
    input.lines().map(str::trim).filter(|line| !line.is_empty())
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

pub fn identifier<'s>(input: &mut &'s str) -> winnow::Result<&'s str> {
    take_while(1.., is_identifier_char).parse_next(input)
}

/// Remainder of the line, trimmed. Fails on an empty remainder.
pub fn trailing_text(input: &mut &str) -> winnow::Result<String> {
    let text = rest.parse_next(input)?.trim();
    if text.is_empty() {
        return Err(winnow::error::ParserError::from_input(input));
    }
    Ok(text.to_string())
}

/// Runs `parser` from every identifier boundary of `line` and returns the
/// first success. Positions inside an identifier are never tried, so a long
/// run of word characters is scanned once.
pub fn find_first<'s, O>(
    line: &'s str,
    mut parser: impl FnMut(&mut &'s str) -> winnow::Result<O>,
) -> Option<O> {
    let mut previous: Option<char> = None;
    line.char_indices().find_map(|(start, c)| {
        let inside_identifier = previous.is_some_and(is_identifier_char);
        previous = Some(c);
        if inside_identifier {
            return None;
        }
        let mut input = &line[start..];
        parser(&mut input).ok()
    })
}

/// Text of the first non-empty `|...|` segment, trimmed.
pub fn pipe_label(line: &str) -> Option<String> {
    let mut parts = line.split('|').skip(1);
    while let Some(inner) = parts.next() {
        // A segment is only enclosed if another pipe follows it.
        let closed = parts.clone().next().is_some();
        if !closed {
            break;
        }
        if !inner.is_empty() {
            return Some(inner.trim().to_string());
        }
    }
    None
}
