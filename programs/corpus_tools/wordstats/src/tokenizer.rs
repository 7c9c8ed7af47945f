use compact_str::CompactString;

pub type Token = CompactString;

// Unicode whitespace plus the ASCII file, group, record and unit separators.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Lowercases `text` and splits it on runs of whitespace. Punctuation stays
/// attached to the word it touches.
pub fn tokenize(text: &str) -> Vec<Token> {
    text.to_lowercase()
        .split(is_separator)
        .filter(|word| !word.is_empty())
        .map(CompactString::new)
        .collect()
}
