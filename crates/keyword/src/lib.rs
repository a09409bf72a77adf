//! Frequency-ranked keyword extraction over transcript lines.
//!
//! Keywords are quick-save suggestions for the vocabulary bank: frequent,
//! non-stopword tokens from the transcript text. Extraction is a pure
//! function of the line sequence; it re-runs on every new transcript and
//! nothing here is persisted.

use std::collections::HashMap;

use lexo_transcript::TranscriptLine;

/// Tokens shorter than this never qualify as keywords.
pub const MIN_WORD_LEN: usize = 5;

// Only words of MIN_WORD_LEN or more can reach the stop-word check, so
// shorter function words don't need to be listed.
const STOP_WORDS: &[&str] = &[
    "about", "after", "again", "because", "before", "being", "between", "could",
    "doing", "during", "every", "going", "gonna", "little", "maybe", "might", "other", "people",
    "really", "right", "should", "something", "their", "there", "these", "thing", "things",
    "think", "those", "through", "today", "under", "until", "wanna", "where", "which", "while",
    "would", "yeah",
];

/// Strip non-alphabetic characters and lowercase. The cleaned form is
/// the canonical word identity used across the keyword list, the
/// translation cache, and the vocabulary bank.
pub fn clean_word(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(|c| c.to_lowercase())
        .collect()
}

fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// Up to `count` candidate words ranked by descending frequency across
/// all line text; ties keep first-encountered order.
pub fn extract(lines: &[TranscriptLine], count: usize) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut order: Vec<String> = Vec::new();

    for line in lines {
        for token in line.text.split_whitespace() {
            let word = clean_word(token);
            if word.chars().count() < MIN_WORD_LEN || is_stop_word(&word) {
                continue;
            }
            match counts.get_mut(&word) {
                Some(n) => *n += 1,
                None => {
                    counts.insert(word.clone(), 1);
                    order.push(word);
                }
            }
        }
    }

    // `order` is first-encountered; the stable sort preserves it among
    // equal frequencies.
    let mut ranked = order;
    ranked.sort_by_key(|w| std::cmp::Reverse(counts[w]));
    ranked.truncate(count);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(text: &str) -> TranscriptLine {
        TranscriptLine::new(0, 1000, text)
    }

    #[test]
    fn ranks_by_frequency() {
        let lines = [line(
            "testing testing integration integration integration the a",
        )];

        assert_eq!(extract(&lines, 2), ["integration", "testing"]);
    }

    #[test]
    fn tie_break_keeps_first_encountered_order() {
        let lines = [line("zebra apple zebra apple mango")];

        assert_eq!(extract(&lines, 3), ["zebra", "apple", "mango"]);
    }

    #[test]
    fn short_tokens_are_dropped() {
        let lines = [line("tiny tiny tiny worthwhile")];

        assert_eq!(extract(&lines, 5), ["worthwhile"]);
    }

    #[test]
    fn stop_words_are_dropped() {
        let lines = [line("because because because substantial")];

        assert_eq!(extract(&lines, 5), ["substantial"]);
    }

    #[test]
    fn punctuation_and_case_normalize_together() {
        let lines = [line("Hello! hello, HELLO?")];

        assert_eq!(extract(&lines, 1), ["hello"]);
    }

    #[test]
    fn counts_accumulate_across_lines() {
        let lines = [
            line("pattern matching"),
            line("pattern recognition"),
            line("pattern"),
        ];

        assert_eq!(extract(&lines, 1), ["pattern"]);
    }

    #[test]
    fn count_limits_result_length() {
        let lines = [line("first second third fourth")];

        assert_eq!(extract(&lines, 2).len(), 2);
    }

    #[test]
    fn empty_lines_yield_nothing() {
        assert!(extract(&[], 10).is_empty());
    }

    #[test]
    fn clean_word_strips_non_alphabetic() {
        assert_eq!(clean_word("Hello!"), "hello");
        assert_eq!(clean_word("it's"), "its");
        assert_eq!(clean_word("1234"), "");
    }
}
