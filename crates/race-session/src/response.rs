use crate::types::{Judgment, KeyResponse};

impl KeyResponse {
    /// Keystroke arrived after the match was decided.
    pub(crate) fn ignored() -> Self {
        Self {
            accepted: false,
            judgment: None,
            heart_lost: false,
            completed: None,
            junk: None,
            outcome: None,
        }
    }

    pub(crate) fn judged(judgment: Judgment) -> Self {
        Self {
            accepted: true,
            judgment: Some(judgment),
            ..Self::ignored()
        }
    }
}
