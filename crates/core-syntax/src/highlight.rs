//! Per-byte syntax categories and the row classifier.

use crate::profile::LanguageProfile;

/// Category of one rendered byte. Only used to pick a display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Highlight {
    #[default]
    Normal,
    Comment,
    KeywordPrimary,
    KeywordSecondary,
    String,
    Number,
    /// Transient overlay painted by incremental search.
    Match,
}

const SEPARATOR_PUNCTUATION: &[u8] = b",.()+-/*=~%<>[];";

/// Word boundary test used for number and keyword starts.
pub fn is_separator(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c | 0) || SEPARATOR_PUNCTUATION.contains(&c)
}

/// Classify a rendered row.
///
/// The result always has `render.len()` entries. Without a profile every
/// entry is [`Highlight::Normal`].
pub fn classify(render: &[u8], profile: Option<&LanguageProfile>) -> Vec<Highlight> {
    let mut hl = vec![Highlight::Normal; render.len()];
    let Some(profile) = profile else {
        return hl;
    };

    let comment = profile.single_line_comment.as_bytes();
    let mut prev_sep = true;
    let mut in_string: Option<u8> = None;
    let mut i = 0;

    while i < render.len() {
        let c = render[i];
        let prev_hl = if i > 0 { hl[i - 1] } else { Highlight::Normal };

        if !comment.is_empty() && in_string.is_none() && render[i..].starts_with(comment) {
            hl[i..].fill(Highlight::Comment);
            break;
        }

        if profile.highlights_strings() {
            if let Some(quote) = in_string {
                hl[i] = Highlight::String;
                if c == b'\\' && i + 1 < render.len() {
                    hl[i + 1] = Highlight::String;
                    i += 2;
                    continue;
                }
                if c == quote {
                    in_string = None;
                }
                i += 1;
                prev_sep = true;
                continue;
            } else if c == b'"' || c == b'\'' {
                in_string = Some(c);
                hl[i] = Highlight::String;
                i += 1;
                continue;
            }
        }

        if profile.highlights_numbers()
            && ((c.is_ascii_digit() && (prev_sep || prev_hl == Highlight::Number))
                || (c == b'.' && prev_hl == Highlight::Number))
        {
            hl[i] = Highlight::Number;
            i += 1;
            prev_sep = false;
            continue;
        }

        if prev_sep && let Some((len, class)) = keyword_at(render, i, profile) {
            hl[i..i + len].fill(class);
            i += len;
            prev_sep = false;
            continue;
        }

        prev_sep = is_separator(c);
        i += 1;
    }

    hl
}

/// Keyword starting at `at` and ending at a separator or the row end.
fn keyword_at(render: &[u8], at: usize, profile: &LanguageProfile) -> Option<(usize, Highlight)> {
    let rest = &render[at..];
    profile.keywords.iter().find_map(|kw| {
        let text = kw.text.as_bytes();
        let boundary = rest.get(text.len()).is_none_or(|&b| is_separator(b));
        (rest.starts_with(text) && boundary).then(|| (text.len(), kw.class.into()))
    })
}
