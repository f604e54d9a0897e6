//! Search-term highlighting.
//!
//! Matching is case-insensitive and substring based, so a term also matches
//! inside longer words ("cardio" marks part of "Cardiology"). Matches are
//! taken left to right and never overlap.

/// One piece of highlighted text, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Mark(&'a str),
}

impl<'a> Segment<'a> {
    pub fn as_str(&self) -> &'a str {
        match self {
            Segment::Text(s) | Segment::Mark(s) => s,
        }
    }

    pub fn is_mark(&self) -> bool {
        matches!(self, Segment::Mark(_))
    }
}

/// Split `text` into unmarked and marked segments for `term`.
///
/// A blank or whitespace-only term yields the original text as a single
/// unmarked segment. Surrounding whitespace in the term is ignored.
pub fn segments<'a>(text: &'a str, term: &str) -> Vec<Segment<'a>> {
    let term = term.trim();
    if term.is_empty() {
        return vec![Segment::Text(text)];
    }

    let needle: Vec<char> = term.chars().flat_map(char::to_lowercase).collect();
    let mut out = Vec::new();
    let mut plain_start = 0;
    let mut pos = 0;

    while pos < text.len() {
        if let Some(len) = match_len(&text[pos..], &needle) {
            if plain_start < pos {
                out.push(Segment::Text(&text[plain_start..pos]));
            }
            out.push(Segment::Mark(&text[pos..pos + len]));
            pos += len;
            plain_start = pos;
        } else {
            pos += text[pos..].chars().next().map_or(1, char::len_utf8);
        }
    }

    if plain_start < text.len() {
        out.push(Segment::Text(&text[plain_start..]));
    }
    if out.is_empty() {
        out.push(Segment::Text(text));
    }
    out
}

/// Byte length of the prefix of `haystack` that case-insensitively equals
/// `needle`, if any. A match must end on a character boundary.
fn match_len(haystack: &str, needle: &[char]) -> Option<usize> {
    let mut matched = 0;
    for (idx, ch) in haystack.char_indices() {
        for lower in ch.to_lowercase() {
            if needle.get(matched) != Some(&lower) {
                return None;
            }
            matched += 1;
        }
        if matched == needle.len() {
            return Some(idx + ch.len_utf8());
        }
    }
    None
}

/// Render highlighted text as escaped HTML with `<mark>` around matches.
pub fn highlight_html(text: &str, term: &str) -> String {
    segments(text, term)
        .into_iter()
        .map(|segment| match segment {
            Segment::Text(s) => crate::text(s),
            Segment::Mark(s) => format!("<mark>{}</mark>", crate::text(s)),
        })
        .collect()
}
