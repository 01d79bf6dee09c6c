use std::collections::HashSet;

/// True if no letter repeats, ignoring case. Spaces, hyphens and other
/// non-letters may repeat freely.
pub fn is_isogram(text: &str) -> bool {
    let mut seen = HashSet::new();
    text.chars()
        .filter(|ch| ch.is_alphabetic())
        .flat_map(char::to_lowercase)
        .all(|ch| seen.insert(ch))
}
