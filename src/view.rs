//! Presentation surface
//!
//! The session controller talks to a [`View`] rather than a concrete output
//! device, so scoring and orchestration stay testable without a terminal.

use crate::types::{RenderedQuestion, ScoreEntry};

/// What the session controller needs from a display surface
pub trait View: Send {
    /// Toggle the loading indicator. While loading, the question area is
    /// considered hidden.
    fn set_loading(&mut self, loading: bool);

    /// Replace the question area with the given blocks (clearing first)
    fn show_questions(&mut self, questions: &[RenderedQuestion]);

    /// Empty the question area
    fn clear_questions(&mut self);

    /// Rebuild the score table, one row per entry in stored order
    fn show_leaderboard(&mut self, entries: &[ScoreEntry]);
}

/// Plain stdout renderer used by the binary
#[derive(Default)]
pub struct TerminalView;

impl TerminalView {
    pub fn new() -> Self {
        Self
    }
}

impl View for TerminalView {
    fn set_loading(&mut self, loading: bool) {
        if loading {
            println!("Loading questions...");
        }
    }

    fn show_questions(&mut self, questions: &[RenderedQuestion]) {
        for (number, block) in questions.iter().enumerate() {
            println!();
            println!("{}. {}", number + 1, block.prompt);
            for (index, option) in block.options.iter().enumerate() {
                let letter = (b'a' + index as u8) as char;
                println!("   {}) {}", letter, option.text);
            }
        }
        if questions.is_empty() {
            println!("(no questions available)");
        }
    }

    fn clear_questions(&mut self) {
        println!();
    }

    fn show_leaderboard(&mut self, entries: &[ScoreEntry]) {
        println!();
        println!("=== Leaderboard ===");
        for entry in entries {
            println!("{:<20} {}", entry.username, entry.score);
        }
        if entries.is_empty() {
            println!("(no scores yet)");
        }
    }
}
