// ABOUTME: Form checker state machine phases and canned feedback entries

use serde::{Deserialize, Serialize};

/// Explicit three-way phase of the form checker page. Replaces the pair of
/// booleans the UI branches on so contradictory combinations cannot exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormCheckPhase {
    Idle,
    Analyzing,
    Complete,
}

impl Default for FormCheckPhase {
    fn default() -> Self {
        FormCheckPhase::Idle
    }
}

impl FormCheckPhase {
    pub fn is_analyzing(&self) -> bool {
        matches!(self, FormCheckPhase::Analyzing)
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormCheckPhase::Idle => "Idle",
            FormCheckPhase::Analyzing => "Analyzing",
            FormCheckPhase::Complete => "Complete",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedbackSeverity {
    Good,
    Warning,
}

impl FeedbackSeverity {
    pub fn indicator(&self) -> &'static str {
        match self {
            FeedbackSeverity::Good => "✓",
            FeedbackSeverity::Warning => "!",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFeedback {
    pub title: String,
    pub detail: String,
    pub severity: FeedbackSeverity,
}

impl FormFeedback {
    pub fn good(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail: detail.into(),
            severity: FeedbackSeverity::Good,
        }
    }

    pub fn warning(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail: detail.into(),
            severity: FeedbackSeverity::Warning,
        }
    }
}
