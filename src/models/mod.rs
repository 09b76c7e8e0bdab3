// ABOUTME: Core data models for chat transcripts, plans, progress series, and form checks

pub mod chat;
pub mod form;
pub mod plan;
pub mod profile;
pub mod progress;

pub use chat::{ChatMessage, ChatRole};
pub use form::{FeedbackSeverity, FormCheckPhase, FormFeedback};
pub use plan::{DietPlan, Exercise, Meal, WorkoutPlan};
pub use profile::Profile;
pub use progress::ProgressPoint;
