//! Flashcard data model and model-output parsing.
//!
//! The parser turns unstructured model output into an ordered list of
//! question/answer pairs. It is purely structural: it looks for `Q:` and
//! `A:` markers and never judges the content between them.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// A single question/answer pair.
///
/// Cards have no identity beyond their position in a set. Duplicates are
/// permitted, and so is empty question or answer text when the source
/// produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
}

impl Flashcard {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Parse raw model output into an ordered list of flashcards.
///
/// The text is trimmed and split on every literal `Q:`. The first segment
/// (anything before the first `Q:`) is preamble and is discarded. Each
/// remaining segment is split at the *first* `A:` into question and
/// answer, both trimmed; later `A:` occurrences belong to the answer
/// text. A segment with no `A:` marker is dropped without error.
///
/// Output order matches the order the model emitted the segments.
pub fn parse(raw: &str) -> Vec<Flashcard> {
    debug!(raw_len = raw.len(), "parse: called");
    let mut cards = Vec::new();

    for segment in raw.trim().split("Q:").skip(1) {
        match segment.split_once("A:") {
            Some((question, answer)) => {
                cards.push(Flashcard::new(question.trim(), answer.trim()));
            }
            None => {
                debug!(
                    segment_len = segment.len(),
                    "parse: segment has no answer marker, dropping"
                );
            }
        }
    }

    debug!(count = cards.len(), "parse: finished");
    cards
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_no_markers_yields_empty_set() {
        assert!(parse("").is_empty());
        assert!(parse("The model refused to cooperate today.").is_empty());
        assert!(parse("Here are answers: A: one A: two").is_empty());
    }

    #[test]
    fn test_parse_well_formed_pairs_in_order() {
        let raw = "Sure! Here are your cards:\nQ: What is Rust? A: A systems language.\nQ: Who maintains it? A: The Rust project.";
        let cards = parse(raw);
        assert_eq!(
            cards,
            vec![
                Flashcard::new("What is Rust?", "A systems language."),
                Flashcard::new("Who maintains it?", "The Rust project."),
            ]
        );
    }

    #[test]
    fn test_parse_splits_at_first_answer_marker() {
        // Everything after the first `A:` is answer text, including later
        // literal markers.
        let cards = parse("Q:what is A:B? A:answer");
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].question, "what is");
        assert_eq!(cards[0].answer, "B? A:answer");
    }

    #[test]
    fn test_parse_drops_question_without_answer() {
        let raw = "Q: kept A: yes\nQ: trailing question with no answer";
        let cards = parse(raw);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].question, "kept");
    }

    #[test]
    fn test_parse_keeps_empty_question() {
        let cards = parse("Q:\nA: the answer");
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].question, "");
        assert_eq!(cards[0].answer, "the answer");
    }

    #[test]
    fn test_parse_keeps_empty_answer() {
        let cards = parse("Q: the question A:");
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].question, "the question");
        assert_eq!(cards[0].answer, "");
    }

    #[test]
    fn test_parse_preserves_unicode() {
        let cards = parse("Q: Was heißt Tür? A: 扉 — \"door\"");
        assert_eq!(cards[0].question, "Was heißt Tür?");
        assert_eq!(cards[0].answer, "扉 — \"door\"");
    }

    #[test]
    fn test_parse_preamble_is_discarded() {
        let cards = parse("Flashcards below. Note the format.\n\nQ: q1 A: a1");
        assert_eq!(cards, vec![Flashcard::new("q1", "a1")]);
    }

    proptest! {
        #[test]
        fn test_parse_recovers_well_formed_pairs(
            pairs in proptest::collection::vec(("[a-zA-Z0-9 ]{1,30}", "[a-zA-Z0-9 ]{1,30}"), 1..8)
        ) {
            let mut input = String::from("Here are your flashcards:\n");
            for (q, a) in &pairs {
                input.push_str(&format!("Q: {}\nA: {}\n", q, a));
            }

            let cards = parse(&input);
            prop_assert_eq!(cards.len(), pairs.len());
            for (card, (q, a)) in cards.iter().zip(&pairs) {
                prop_assert_eq!(card.question.as_str(), q.trim());
                prop_assert_eq!(card.answer.as_str(), a.trim());
            }
        }
    }
}
