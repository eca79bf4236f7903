//! Text preprocessing applied before vectorization

/// Normalize whitespace and newlines.
///
/// CR, LF and tabs become spaces, runs of whitespace collapse to one space,
/// and the result is trimmed. Empty input stays empty.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<&str>>().join(" ")
}

/// Split text into lowercase word tokens of at least two characters.
///
/// A word is a run of alphanumeric characters or underscores; everything else
/// separates tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|w| w.chars().count() >= 2)
        .map(str::to_string)
        .collect()
}
