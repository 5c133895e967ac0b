//! Score tallying

use std::collections::HashMap;

use crate::types::Question;

/// Count the questions whose selected answer text exactly matches the
/// correct answer text.
///
/// `selections` maps question index to the selected option's text; questions
/// without a selection contribute 0. Case-sensitive, no partial credit.
pub fn tally(questions: &[Question], selections: &HashMap<usize, String>) -> u32 {
    questions
        .iter()
        .enumerate()
        .filter(|(index, question)| {
            selections
                .get(index)
                .is_some_and(|selected| *selected == question.correct_answer)
        })
        .count() as u32
}
