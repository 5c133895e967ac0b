//! Question bank client
//!
//! Issues a single GET per round against an Open Trivia DB compatible
//! endpoint and parses the batch into [`Question`]s. Failures are reported
//! to the caller, which logs them and carries on with an empty round.

use async_trait::async_trait;
use serde::Deserialize;

use crate::types::Question;

/// Result type for question fetches
pub type FetchResult<T> = Result<T, FetchError>;

/// Errors that can occur while fetching a question batch
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("question bank returned status: {0}")]
    Status(reqwest::StatusCode),

    #[error("response parsing failed: {0}")]
    Parse(String),
}

/// A source of question batches
///
/// The production implementation talks to the remote question bank;
/// tests substitute canned batches.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Fetch one batch of multiple-choice questions
    async fn fetch_batch(&self) -> FetchResult<Vec<Question>>;
}

/// Wire format of the question bank response
#[derive(Debug, Deserialize)]
struct BankResponse {
    #[serde(default)]
    response_code: u32,
    #[serde(default)]
    results: Vec<BankQuestion>,
}

#[derive(Debug, Deserialize)]
struct BankQuestion {
    question: String,
    correct_answer: String,
    incorrect_answers: Vec<String>,
}

impl From<BankQuestion> for Question {
    fn from(q: BankQuestion) -> Self {
        Question {
            prompt: q.question,
            correct_answer: q.correct_answer,
            incorrect_answers: q.incorrect_answers,
        }
    }
}

/// Client for the Open Trivia DB question bank
pub struct OpenTdbClient {
    api_url: String,
    question_count: usize,
    client: reqwest::Client,
}

impl OpenTdbClient {
    pub fn new(api_url: String, question_count: usize) -> Self {
        Self {
            api_url,
            question_count,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl QuestionSource for OpenTdbClient {
    async fn fetch_batch(&self) -> FetchResult<Vec<Question>> {
        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("amount", self.question_count.to_string()),
                ("type", "multiple".to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let body: BankResponse = response
            .json()
            .await
            .map_err(|e| FetchError::Parse(e.to_string()))?;

        // The reference client never checks the code, so a non-zero code is
        // only worth a warning; whatever results came along are still used.
        if body.response_code != 0 {
            tracing::warn!(
                "Question bank returned response_code {} with {} results",
                body.response_code,
                body.results.len()
            );
        }

        let mut questions = Vec::with_capacity(body.results.len());
        for bank_question in body.results {
            let question = Question::from(bank_question);
            if question.is_well_formed() {
                questions.push(question);
            } else {
                tracing::warn!("Dropping malformed question: {:?}", question.prompt);
            }
        }

        tracing::debug!("Fetched {} questions", questions.len());
        Ok(questions)
    }
}
