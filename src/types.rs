use serde::{Deserialize, Serialize};

/// Number of questions in one round
pub const QUESTIONS_PER_ROUND: usize = 10;

/// A multiple-choice trivia question as fetched from the question bank.
///
/// Text fields are passed through exactly as the API provides them,
/// HTML entities included.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Question {
    pub prompt: String,
    pub correct_answer: String,
    /// Exactly 3 entries, distinct from each other and from the correct answer
    pub incorrect_answers: Vec<String>,
}

impl Question {
    /// Check the 1-correct / 3-distinct-incorrect invariant
    pub fn is_well_formed(&self) -> bool {
        if self.incorrect_answers.len() != 3 {
            return false;
        }
        for (i, a) in self.incorrect_answers.iter().enumerate() {
            if a == &self.correct_answer {
                return false;
            }
            if self.incorrect_answers[i + 1..].contains(a) {
                return false;
            }
        }
        true
    }
}

/// A single selectable answer in a rendered question.
///
/// `is_correct` is carried for scoring and never shown to the player.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerOption {
    pub text: String,
    pub is_correct: bool,
}

/// One question block as presented to the player: prompt plus 4 shuffled
/// options. Derived per render, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedQuestion {
    pub prompt: String,
    pub options: Vec<AnswerOption>,
}

/// One historical result on the leaderboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreEntry {
    pub username: String,
    pub score: u32,
}

/// Phases of one long-running page session.
///
/// Loops `Idle -> Loading -> Ready -> Submitted -> Loading -> ...`
/// indefinitely; there is no terminal phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Loading,
    Ready,
    Submitted,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(correct: &str, incorrect: &[&str]) -> Question {
        Question {
            prompt: "?".to_string(),
            correct_answer: correct.to_string(),
            incorrect_answers: incorrect.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_well_formed_question() {
        assert!(question("4", &["3", "5", "6"]).is_well_formed());
    }

    #[test]
    fn test_wrong_incorrect_count() {
        assert!(!question("4", &["3", "5"]).is_well_formed());
        assert!(!question("4", &["3", "5", "6", "7"]).is_well_formed());
    }

    #[test]
    fn test_duplicate_incorrect_answer() {
        assert!(!question("4", &["3", "3", "6"]).is_well_formed());
    }

    #[test]
    fn test_incorrect_equals_correct() {
        assert!(!question("4", &["3", "4", "6"]).is_well_formed());
    }

    #[test]
    fn test_score_entry_serialization() {
        let entry = ScoreEntry {
            username: "bob".to_string(),
            score: 7,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"username":"bob","score":7}"#);
    }
}
