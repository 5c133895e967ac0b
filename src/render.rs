//! Question rendering: derives the per-round shuffled answer blocks

use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::{AnswerOption, Question, RenderedQuestion};

/// Shuffle one question's answers into a presentable option list.
///
/// Uniform Fisher-Yates shuffle; exactly one option carries `is_correct`.
pub fn shuffle_answers<R: Rng + ?Sized>(question: &Question, rng: &mut R) -> Vec<AnswerOption> {
    let mut options: Vec<AnswerOption> = Vec::with_capacity(question.incorrect_answers.len() + 1);
    options.push(AnswerOption {
        text: question.correct_answer.clone(),
        is_correct: true,
    });
    for answer in &question.incorrect_answers {
        options.push(AnswerOption {
            text: answer.clone(),
            is_correct: false,
        });
    }
    options.shuffle(rng);
    options
}

/// Derive the rendered blocks for a whole batch.
///
/// Freshly computed on every call, so re-rendering replaces prior content
/// rather than accumulating it.
pub fn render_questions<R: Rng + ?Sized>(
    questions: &[Question],
    rng: &mut R,
) -> Vec<RenderedQuestion> {
    questions
        .iter()
        .map(|question| RenderedQuestion {
            prompt: question.prompt.clone(),
            options: shuffle_answers(question, rng),
        })
        .collect()
}
