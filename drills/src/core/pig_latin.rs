//! Word-level Pig Latin translation.
//!
//! A sentence is split on whitespace and each word is rewritten by exactly one
//! of four rules. Rules are checked in a fixed priority order; the `qu` rule
//! must win over the generic consonant-cluster rule because every `qu` word
//! would also match the latter.

use std::sync::LazyLock;

use regex::Regex;

/// Letters treated as vowels. `y` is handled only by [`Rule::ConsonantY`].
pub const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

const SUFFIX: &str = "ay";

static QU_CLUSTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^aeiou]*qu").expect("qu cluster pattern"));
static CONSONANT_Y_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^aeiou]+y").expect("consonant y pattern"));

/// Transformation applied to a single word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Leading vowel, `xr` or `yt`: append "ay".
    VowelSound,
    /// Leading consonants: move them behind the word, append "ay".
    ConsonantCluster,
    /// Consonants (possibly none) then `qu`: move through `qu`, append "ay".
    QuCluster,
    /// Consonants then `y`: move everything before `y`, append "ay".
    ConsonantY,
}

impl Rule {
    /// Rewrite `word` according to this rule.
    pub fn apply(self, word: &str) -> String {
        let split = match self {
            Rule::VowelSound => 0,
            Rule::ConsonantCluster => first_vowel_index(word),
            Rule::QuCluster => word.find("qu").map_or(0, |index| index + 2),
            Rule::ConsonantY => word.find('y').unwrap_or(0),
        };
        rotate(word, split)
    }
}

/// Translate a whitespace-separated sentence.
///
/// Whitespace runs collapse to single spaces; blank input yields `""`.
pub fn translate(text: &str) -> String {
    text.split_whitespace()
        .map(translate_word)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Translate one word.
pub fn translate_word(word: &str) -> String {
    select_rule(word).apply(word)
}

/// Pick the rule for `word`, first match wins.
pub fn select_rule(word: &str) -> Rule {
    if starts_with_vowel_sound(word) {
        Rule::VowelSound
    } else if QU_CLUSTER_RE.is_match(word) {
        Rule::QuCluster
    } else if CONSONANT_Y_RE.is_match(word) {
        Rule::ConsonantY
    } else {
        Rule::ConsonantCluster
    }
}

fn starts_with_vowel_sound(word: &str) -> bool {
    word.starts_with("xr")
        || word.starts_with("yt")
        || word.chars().next().is_some_and(is_vowel)
}

fn is_vowel(ch: char) -> bool {
    VOWELS.contains(&ch)
}

/// Byte index of the first vowel, or the word length if there is none.
fn first_vowel_index(word: &str) -> usize {
    word.char_indices()
        .find(|(_, ch)| is_vowel(*ch))
        .map_or(word.len(), |(index, _)| index)
}

/// `word[split..] + word[..split] + "ay"`.
fn rotate(word: &str, split: usize) -> String {
    let (head, tail) = word.split_at(split);
    let mut out = String::with_capacity(word.len() + SUFFIX.len());
    out.push_str(tail);
    out.push_str(head);
    out.push_str(SUFFIX);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_reference_words() {
        assert_eq!(translate("apple"), "appleay");
        assert_eq!(translate("pig"), "igpay");
        assert_eq!(translate("latin"), "atinlay");
        assert_eq!(translate("xray"), "xrayay");
        assert_eq!(translate("square"), "aresquay");
        assert_eq!(translate("my"), "ymay");
    }

    #[test]
    fn translates_sentences_word_by_word() {
        assert_eq!(translate("pig latin"), "igpay atinlay");
        assert_eq!(translate("quick fast run"), "ickquay astfay unray");
    }

    #[test]
    fn blank_input_is_empty() {
        assert_eq!(translate(""), "");
        assert_eq!(translate("   "), "");
        assert_eq!(translate("\t\n"), "");
    }

    #[test]
    fn whitespace_runs_collapse_to_single_spaces() {
        assert_eq!(translate("  pig   latin "), "igpay atinlay");
    }

    #[test]
    fn select_rule_honours_priority() {
        assert_eq!(select_rule("ear"), Rule::VowelSound);
        assert_eq!(select_rule("yttria"), Rule::VowelSound);
        assert_eq!(select_rule("xenon"), Rule::ConsonantCluster);
        assert_eq!(select_rule("queen"), Rule::QuCluster);
        assert_eq!(select_rule("squeal"), Rule::QuCluster);
        assert_eq!(select_rule("rhythm"), Rule::ConsonantY);
        assert_eq!(select_rule("yellow"), Rule::ConsonantCluster);
        assert_eq!(select_rule("chair"), Rule::ConsonantCluster);
    }

    #[test]
    fn consonant_clusters_move_to_the_end() {
        assert_eq!(translate_word("chair"), "airchay");
        assert_eq!(translate_word("thrush"), "ushthray");
        assert_eq!(translate_word("yellow"), "ellowyay");
    }

    #[test]
    fn qu_moves_with_its_leading_consonants() {
        assert_eq!(translate_word("queen"), "eenquay");
        assert_eq!(translate_word("squeal"), "ealsquay");
    }

    #[test]
    fn y_after_consonants_acts_as_vowel() {
        assert_eq!(translate_word("rhythm"), "ythmrhay");
        assert_eq!(translate_word("fly"), "yflay");
    }

    #[test]
    fn word_without_vowel_or_y_is_kept_whole() {
        assert_eq!(select_rule("psst"), Rule::ConsonantCluster);
        assert_eq!(translate_word("psst"), "psstay");
    }

    #[test]
    fn uppercase_letters_count_as_consonants() {
        assert_eq!(translate_word("Apple"), "eApplay");
        assert_eq!(translate_word("PIG"), "PIGay");
    }

    #[test]
    fn retranslation_is_not_a_fixed_point() {
        let once = translate("pig");
        assert_ne!(translate(&once), once);
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: vowel-leading words only gain the suffix.
        #[test]
        fn vowel_leading_words_append_suffix(word in "[aeiou][a-z]{0,12}") {
            prop_assert_eq!(translate(&word), format!("{word}ay"));
        }

        /// Property: translation preserves the word count.
        #[test]
        fn word_count_is_preserved(words in prop::collection::vec("[a-z]{1,8}", 0..8)) {
            let sentence = words.join(" ");
            let translated = translate(&sentence);
            prop_assert_eq!(translated.split_whitespace().count(), words.len());
        }

        /// Property: every translated word ends with the suffix and keeps its letters.
        #[test]
        fn translation_is_a_rotation_plus_suffix(word in "[a-z]{1,12}") {
            let translated = translate_word(&word);
            prop_assert!(translated.ends_with("ay"));
            let mut original: Vec<char> = word.chars().collect();
            let mut rotated: Vec<char> = translated[..translated.len() - 2].chars().collect();
            original.sort_unstable();
            rotated.sort_unstable();
            prop_assert_eq!(original, rotated);
        }
    }
}
