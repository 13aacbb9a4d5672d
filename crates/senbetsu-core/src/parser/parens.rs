//! # Paren Segmenter
//!
//! Splits a release name into top-level chunks. A chunk is either a run of
//! free text or one complete bracketed group. All supported bracket pairs
//! are equivalent markers: any opener raises the nesting depth and any
//! closer lowers it.

/// Bracket pairs treated as parens.
const PAIRS: &[(char, char)] = &[
    ('(', ')'),
    ('[', ']'),
    ('{', '}'),
    ('【', '】'),
    ('「', '」'),
    ('（', '）'),
];

fn is_open(c: char) -> bool {
    PAIRS.iter().any(|&(open, _)| open == c)
}

fn is_close(c: char) -> bool {
    PAIRS.iter().any(|&(_, close)| close == c)
}

fn push_chunk(chunks: &mut Vec<String>, text: &str) {
    let text = text.trim();
    if !text.is_empty() {
        chunks.push(text.to_string());
    }
}

/// Split `name` into top-level chunks.
///
/// Bracketed groups keep their delimiters and any nested groups verbatim.
/// Chunks are trimmed and whitespace-only chunks are dropped. A closer
/// without an opener is plain text; an opener that is never closed turns
/// the rest of the name into one text chunk.
///
/// # Examples
/// ```
/// use senbetsu_core::parser::parens::segment;
///
/// let chunks = segment("[FFF] Working!!! - 01 [720p][348B33FB]");
/// assert_eq!(chunks, ["[FFF]", "Working!!! - 01", "[720p]", "[348B33FB]"]);
/// ```
pub fn segment(name: &str) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (idx, c) in name.char_indices() {
        if is_open(c) {
            if depth == 0 {
                push_chunk(&mut chunks, &name[start..idx]);
                start = idx;
            }
            depth += 1;
        } else if is_close(c) && depth > 0 {
            depth -= 1;
            if depth == 0 {
                let end = idx + c.len_utf8();
                push_chunk(&mut chunks, &name[start..end]);
                start = end;
            }
        }
    }

    push_chunk(&mut chunks, &name[start..]);
    chunks
}

/// Byte offset just past the closer matching the opener at the start of
/// `chunk`, if `chunk` starts with an opener that gets closed.
fn matching_close(chunk: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (idx, c) in chunk.char_indices() {
        if is_open(c) {
            depth += 1;
        } else if is_close(c) {
            if depth == 0 {
                return None;
            }
            depth -= 1;
            if depth == 0 {
                return Some(idx + c.len_utf8());
            }
        }
        if depth == 0 {
            return None;
        }
    }
    None
}

/// Content of `chunk` without its wrapping delimiters, when a single
/// delimiter pair spans the whole chunk. Otherwise `chunk` unchanged.
///
/// ```
/// use senbetsu_core::parser::parens::strip_parens;
///
/// assert_eq!(strip_parens("[BD 720p]"), "BD 720p");
/// assert_eq!(strip_parens("[a] [b]"), "[a] [b]");
/// assert_eq!(strip_parens("Toradora!"), "Toradora!");
/// ```
pub fn strip_parens(chunk: &str) -> &str {
    match (matching_close(chunk), chunk.chars().next()) {
        (Some(end), Some(open)) if end == chunk.len() => {
            let close_len = chunk[..end].chars().next_back().map_or(0, char::len_utf8);
            &chunk[open.len_utf8()..end - close_len]
        }
        _ => chunk,
    }
}

/// Returns `true` if `chunk` is entirely wrapped by one delimiter pair.
pub fn is_wrapped(chunk: &str) -> bool {
    strip_parens(chunk).len() != chunk.len()
}

/// Returns `true` if `chunk` is literally wrapped in round parens, e.g.
/// `(Love Is War)`.
pub fn is_round_wrapped(chunk: &str) -> bool {
    chunk.len() >= 2 && chunk.starts_with('(') && chunk.ends_with(')')
}
