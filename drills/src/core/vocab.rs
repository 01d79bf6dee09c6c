//! Prefix and suffix helpers for building vocabulary lists.

use crate::core::error::{ExerciseError, Result};

const NESS: &str = "ness";
const VERB_SUFFIX: &str = "en";

pub fn add_prefix_un(word: &str) -> String {
    add_prefix(word, "un")
}

pub fn add_prefix(word: &str, prefix: &str) -> String {
    format!("{prefix}{word}")
}

/// `["en", "close", "joy"]` becomes `"en :: enclose :: enjoy"`.
pub fn make_word_groups<S: AsRef<str>>(words: &[S]) -> String {
    let Some((prefix, rest)) = words.split_first() else {
        return String::new();
    };
    let prefix = prefix.as_ref();
    std::iter::once(prefix.to_string())
        .chain(rest.iter().map(|word| add_prefix(word.as_ref(), prefix)))
        .collect::<Vec<_>>()
        .join(" :: ")
}

/// `"heaviness"` becomes `"heavy"`; words without the suffix are unchanged.
pub fn remove_suffix_ness(word: &str) -> String {
    let Some(root) = word.strip_suffix(NESS) else {
        return word.to_string();
    };
    match root.strip_suffix('i') {
        Some(stem) => format!("{stem}y"),
        None => root.to_string(),
    }
}

/// Turn the adjective at `index` into a verb by appending "en".
///
/// Words are split on single spaces and full stops are dropped. A negative
/// index counts from the end of the sentence.
pub fn adjective_to_verb(sentence: &str, index: isize) -> Result<String> {
    let words: Vec<&str> = sentence.split(' ').collect();
    let len = words.len();
    let position = if index < 0 {
        len.checked_sub(index.unsigned_abs())
    } else {
        Some(index.unsigned_abs()).filter(|&position| position < len)
    };
    let word = position
        .and_then(|position| words.get(position))
        .ok_or(ExerciseError::WordIndex { index, len })?;
    Ok(format!("{}{VERB_SUFFIX}", word.replace('.', "")))
}
