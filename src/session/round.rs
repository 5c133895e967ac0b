use super::SessionController;
use crate::render::render_questions;
use crate::types::SessionPhase;

impl SessionController {
    /// Load and present the next round of questions.
    ///
    /// The loading indicator is shown for the duration of the fetch and
    /// cleared on both outcomes. A failed fetch leaves the round empty; the
    /// session stays usable and the error goes to the log only.
    ///
    /// The fetch is awaited to completion here, so only one request is ever
    /// in flight and a stale response can never overwrite a newer round.
    pub async fn begin_round(&mut self) -> Result<(), String> {
        self.transition(SessionPhase::Loading)?;
        self.view.set_loading(true);

        match self.source.fetch_batch().await {
            Ok(questions) => {
                self.questions = questions;
            }
            Err(e) => {
                tracing::warn!("Error fetching questions: {}", e);
                self.questions = Vec::new();
            }
        }

        let mut rng = rand::rng();
        self.rendered = render_questions(&self.questions, &mut rng);
        self.view.show_questions(&self.rendered);
        self.view.set_loading(false);

        self.transition(SessionPhase::Ready)
    }
}
