//! `{hash}` placeholder resolution in rewritten names.
//!
//! A placeholder is `{`, an optional delimiter character, the literal
//! `hash`, another optional delimiter character and `}`. Delimiters are kept
//! around the hash value and dropped together with the placeholder when
//! there is no hash. Delimiters never span a newline.

/// A located placeholder: byte span plus its delimiters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Placeholder {
    start: usize,
    end: usize,
    prefix: Option<char>,
    suffix: Option<char>,
}

const TOKEN: &str = "hash";

fn delimiter(s: &str) -> Option<char> {
    s.chars().next().filter(|c| *c != '\n')
}

/// Match the tail of a placeholder starting at byte `pos`: an optional
/// delimiter then `}`. Returns the end offset and the delimiter.
fn match_suffix(text: &str, pos: usize) -> Option<(usize, Option<char>)> {
    let rest = &text[pos..];
    if let Some(c) = delimiter(rest) {
        if rest[c.len_utf8()..].starts_with('}') {
            return Some((pos + c.len_utf8() + 1, Some(c)));
        }
    }
    rest.starts_with('}').then_some((pos + 1, None))
}

fn find_placeholder(text: &str) -> Option<Placeholder> {
    for (start, ch) in text.char_indices() {
        if ch != '{' {
            continue;
        }
        let body = start + 1;
        let rest = &text[body..];

        // Prefer consuming a delimiter, fall back to none.
        if let Some(c) = delimiter(rest) {
            let after_prefix = body + c.len_utf8();
            if text[after_prefix..].starts_with(TOKEN) {
                if let Some((end, suffix)) = match_suffix(text, after_prefix + TOKEN.len()) {
                    return Some(Placeholder {
                        start,
                        end,
                        prefix: Some(c),
                        suffix,
                    });
                }
            }
        }
        if rest.starts_with(TOKEN) {
            if let Some((end, suffix)) = match_suffix(text, body + TOKEN.len()) {
                return Some(Placeholder {
                    start,
                    end,
                    prefix: None,
                    suffix,
                });
            }
        }
    }
    None
}

/// Resolve the first hash placeholder in `text`.
///
/// An empty `hash` removes the placeholder and its delimiters; otherwise the
/// placeholder becomes `prefix + hash + suffix`. Text without a placeholder
/// is returned unchanged.
///
/// Removing a bare `{hash}` that sits between two identical separators
/// (`bundle.{hash}.js`) also drops one separator, giving `bundle.js`. Only
/// `.`, `-`, `_` and `/` collapse, and only when both neighbours are the same
/// character: `bundle-{hash}.js` gives `bundle-.js`. Use a delimited
/// placeholder (`bundle{-hash}.js`) to drop the separator with the hash.
pub fn resolve_hash_placeholder(text: &str, hash: &str) -> String {
    let Some(found) = find_placeholder(text) else {
        return text.to_string();
    };

    let head = &text[..found.start];
    let mut tail = &text[found.end..];

    let mut out = String::with_capacity(text.len() + hash.len());
    out.push_str(head);
    if !hash.is_empty() {
        out.extend(found.prefix);
        out.push_str(hash);
        out.extend(found.suffix);
    } else if found.prefix.is_none() && found.suffix.is_none() {
        if let (Some(before), Some(after)) = (head.chars().next_back(), tail.chars().next()) {
            if before == after && is_separator(before) {
                tail = &tail[after.len_utf8()..];
            }
        }
    }
    out.push_str(tail);
    out
}

fn is_separator(c: char) -> bool {
    matches!(c, '.' | '-' | '_' | '/')
}

/// Whether `text` contains a hash placeholder
pub fn has_hash_placeholder(text: &str) -> bool {
    find_placeholder(text).is_some()
}
