use std::collections::BTreeSet;

const PLACEHOLDER: &str = "none";

fn is_artifact(c: char) -> bool {
    matches!(c, '[' | ']' | '"' | '\'')
}

/// Clean raw condition or goal tokens into a lookup set.
///
/// Bracket and quote characters left over from JSON-in-string encoding are
/// stripped from both ends of every token. Empty tokens and the lowercase
/// placeholder `none` are dropped. Nothing else is case-folded, so `"None"`
/// survives and `"Diabetes"` will not match the lowercase rule literals.
pub fn normalize_tokens<I, S>(raw: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .filter_map(|token| {
            let cleaned = token.as_ref().trim_matches(is_artifact);
            if cleaned.is_empty() || cleaned == PLACEHOLDER {
                None
            } else {
                Some(cleaned.to_string())
            }
        })
        .collect()
}

/// Split a stored free-text column (`"diabetes, obesity"` or
/// `["diabetes", "obesity"]`) into raw tokens ready for [`normalize_tokens`].
pub fn split_tokens(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|piece| piece.trim_matches(|c: char| c.is_ascii_whitespace()))
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}
