use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

use lexo_vocab::VocabularyEntry;

/// Display-order option count when the bank is large enough.
pub const MULTIPLE_CHOICE_OPTIONS: usize = 4;

/// One multiple-choice question. Derived on demand, never persisted.
///
/// `options` contains `correct` exactly once, in shuffled display
/// order: 4 options when the bank has at least 4 entries, every entry
/// otherwise.
#[derive(Debug, Clone, serde::Serialize, utoipa::ToSchema)]
pub struct QuizQuestion {
    pub correct: VocabularyEntry,
    pub options: Vec<VocabularyEntry>,
}

/// Build the question whose answer is `entries[index % len]`.
///
/// Distractors are sampled uniformly without replacement from the rest
/// of the bank. Randomness comes from the caller so drills are
/// reproducible under a seeded rng. `None` when fewer than two entries
/// exist, since no question can be formed.
pub fn build_question<R: Rng + ?Sized>(
    entries: &[VocabularyEntry],
    index: usize,
    rng: &mut R,
) -> Option<QuizQuestion> {
    if entries.len() < 2 {
        return None;
    }

    let correct = entries[index % entries.len()].clone();
    let others: Vec<&VocabularyEntry> =
        entries.iter().filter(|e| e.word != correct.word).collect();

    let mut options: Vec<VocabularyEntry> = others
        .choose_multiple(rng, MULTIPLE_CHOICE_OPTIONS - 1)
        .map(|e| (*e).clone())
        .collect();
    options.push(correct.clone());
    options.shuffle(rng);

    Some(QuizQuestion { correct, options })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn entries(n: usize) -> Vec<VocabularyEntry> {
        (0..n)
            .map(|i| VocabularyEntry {
                word: format!("word{i}"),
                translation: Some(format!("translation{i}")),
                language: "es".to_string(),
                saved_at_ms: i as i64,
            })
            .collect()
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn large_bank_gives_four_options_with_correct_exactly_once() {
        let bank = entries(10);

        for index in 0..10 {
            let q = build_question(&bank, index, &mut rng()).unwrap();
            assert_eq!(q.options.len(), 4);
            assert_eq!(
                q.options.iter().filter(|o| o.word == q.correct.word).count(),
                1
            );
        }
    }

    #[test]
    fn small_bank_uses_all_entries() {
        for n in [2, 3] {
            let bank = entries(n);
            let q = build_question(&bank, 0, &mut rng()).unwrap();

            assert_eq!(q.options.len(), n);
            let mut words: Vec<_> = q.options.iter().map(|o| o.word.as_str()).collect();
            words.sort_unstable();
            let mut expected: Vec<_> = bank.iter().map(|e| e.word.as_str()).collect();
            expected.sort_unstable();
            assert_eq!(words, expected);
        }
    }

    #[test]
    fn options_never_repeat() {
        let bank = entries(6);
        let q = build_question(&bank, 2, &mut rng()).unwrap();

        let mut words: Vec<_> = q.options.iter().map(|o| o.word.as_str()).collect();
        words.sort_unstable();
        words.dedup();
        assert_eq!(words.len(), 4);
    }

    #[test]
    fn index_wraps_modulo_bank_size() {
        let bank = entries(3);

        let q = build_question(&bank, 7, &mut rng()).unwrap();
        assert_eq!(q.correct.word, "word1");
    }

    #[test]
    fn under_two_entries_is_no_question() {
        assert!(build_question(&entries(0), 0, &mut rng()).is_none());
        assert!(build_question(&entries(1), 0, &mut rng()).is_none());
    }

    #[test]
    fn seeded_rng_is_deterministic() {
        let bank = entries(8);

        let a = build_question(&bank, 1, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = build_question(&bank, 1, &mut StdRng::seed_from_u64(42)).unwrap();

        let words = |q: &QuizQuestion| {
            q.options
                .iter()
                .map(|o| o.word.clone())
                .collect::<Vec<_>>()
        };
        assert_eq!(words(&a), words(&b));
    }
}
