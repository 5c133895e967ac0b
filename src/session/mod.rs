//! Session orchestration
//!
//! One long-running trivia session looping through
//! `Idle -> Loading -> Ready -> Submitted -> Loading -> ...` with no
//! terminal state. The controller owns all session state explicitly and
//! drives the fetcher, renderer, scorer, stores, and view.

mod round;
mod submit;

use crate::config::SessionConfig;
use crate::fetch::QuestionSource;
use crate::store::{LeaderboardStore, UsernameMemory};
use crate::types::{Question, RenderedQuestion, SessionPhase};
use crate::view::View;

/// Drives one player round after another
pub struct SessionController {
    pub(crate) config: SessionConfig,
    pub(crate) source: Box<dyn QuestionSource>,
    pub(crate) view: Box<dyn View>,
    pub(crate) leaderboard: LeaderboardStore,
    pub(crate) usernames: UsernameMemory,
    phase: SessionPhase,
    pub(crate) questions: Vec<Question>,
    pub(crate) rendered: Vec<RenderedQuestion>,
}

impl SessionController {
    pub fn new(config: SessionConfig, source: Box<dyn QuestionSource>, view: Box<dyn View>) -> Self {
        let leaderboard = LeaderboardStore::new(&config.data_dir);
        let usernames = UsernameMemory::new(&config.data_dir);
        Self {
            config,
            source,
            view,
            leaderboard,
            usernames,
            phase: SessionPhase::Idle,
            questions: Vec::new(),
            rendered: Vec::new(),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Questions of the current round (empty after a failed fetch)
    pub fn current_questions(&self) -> &[Question] {
        &self.questions
    }

    /// Shuffled blocks as last shown to the player
    pub fn rendered_questions(&self) -> &[RenderedQuestion] {
        &self.rendered
    }

    /// Check if a phase transition is valid
    fn is_valid_transition(from: SessionPhase, to: SessionPhase) -> bool {
        use SessionPhase::*;

        matches!(
            (from, to),
            (Idle, Loading) | (Loading, Ready) | (Ready, Submitted) | (Submitted, Loading)
        )
    }

    /// Apply a phase transition with validation
    pub(crate) fn transition(&mut self, to: SessionPhase) -> Result<(), String> {
        if !Self::is_valid_transition(self.phase, to) {
            return Err(format!(
                "Invalid phase transition from {:?} to {:?}",
                self.phase, to
            ));
        }
        tracing::debug!("Phase {:?} -> {:?}", self.phase, to);
        self.phase = to;
        Ok(())
    }

    /// Restore the remembered username, paint the stored leaderboard, and
    /// load the first round. Returns the name to pre-fill the input with
    /// (empty if nothing is remembered).
    pub async fn startup(&mut self) -> Result<String, String> {
        let remembered = self.usernames.recall().await;

        let entries = self.leaderboard.read_all().await;
        self.view.show_leaderboard(&entries);

        self.begin_round().await?;
        Ok(remembered)
    }
}
