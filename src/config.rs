//! Environment-driven session configuration

use crate::types::QUESTIONS_PER_ROUND;
use std::path::PathBuf;

/// Default question bank endpoint (Open Trivia Database)
pub const DEFAULT_API_URL: &str = "https://opentdb.com/api.php";

/// How long a remembered username stays valid, in days
pub const DEFAULT_USERNAME_TTL_DAYS: i64 = 7;

#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Question bank endpoint
    pub api_url: String,
    /// Batch size requested per round
    pub question_count: usize,
    /// Directory holding leaderboard.json and cookies.json
    pub data_dir: PathBuf,
    /// Username memory expiry in days
    pub username_ttl_days: i64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            question_count: QUESTIONS_PER_ROUND,
            data_dir: PathBuf::from("data"),
            username_ttl_days: DEFAULT_USERNAME_TTL_DAYS,
        }
    }
}

impl SessionConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset or blank
    pub fn from_env() -> Self {
        let api_url = std::env::var("TRIVIA_API_URL")
            .ok()
            .and_then(|url| {
                let trimmed = url.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let question_count = std::env::var("TRIVIA_QUESTION_COUNT")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .filter(|&n| n > 0)
            .unwrap_or(QUESTIONS_PER_ROUND);

        let data_dir = std::env::var("TRIVIA_DATA_DIR")
            .ok()
            .and_then(|dir| {
                let trimmed = dir.trim();
                (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
            })
            .unwrap_or_else(|| PathBuf::from("data"));

        let username_ttl_days = std::env::var("TRIVIA_USERNAME_TTL_DAYS")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .filter(|&d| d > 0)
            .unwrap_or(DEFAULT_USERNAME_TTL_DAYS);

        Self {
            api_url,
            question_count,
            data_dir,
            username_ttl_days,
        }
    }
}
