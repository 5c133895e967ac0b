use std::collections::HashMap;

use super::SessionController;
use crate::score::tally;
use crate::types::{ScoreEntry, SessionPhase};

impl SessionController {
    /// Handle a form submission and reset for the next player.
    ///
    /// A username that is empty after trimming skips scoring and
    /// persistence entirely but still resets the round. Returns the
    /// recorded entry, or `None` for the skipped branch.
    ///
    /// `selections` maps question index to the selected option's text.
    pub async fn submit(
        &mut self,
        username: &str,
        selections: &HashMap<usize, String>,
    ) -> Result<Option<ScoreEntry>, String> {
        if self.phase() != SessionPhase::Ready {
            return Err(format!("Cannot submit in phase {:?}", self.phase()));
        }

        let username = username.trim();
        let recorded = if username.is_empty() {
            tracing::debug!("Submission with empty username, skipping scoring");
            None
        } else {
            if let Err(e) = self
                .usernames
                .remember(username, self.config.username_ttl_days)
                .await
            {
                tracing::warn!("Failed to remember username: {}", e);
            }

            let entry = ScoreEntry {
                username: username.to_string(),
                score: tally(&self.questions, selections),
            };
            tracing::info!("{} scored {}/{}", entry.username, entry.score, self.questions.len());

            if let Err(e) = self.leaderboard.append(entry.clone()).await {
                tracing::warn!("Failed to save score: {}", e);
            }
            let entries = self.leaderboard.read_all().await;
            self.view.show_leaderboard(&entries);

            Some(entry)
        };

        self.transition(SessionPhase::Submitted)?;

        // Reset for the next player
        self.questions.clear();
        self.rendered.clear();
        self.view.clear_questions();
        self.begin_round().await?;

        Ok(recorded)
    }
}
