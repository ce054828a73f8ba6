//! Core traits and types for the crop health estimator
//!
//! This crate holds the deterministic part of the system: crop profiles, the
//! per-field scoring engine, trend aggregation over a batch of fields, the
//! bounded conversation history, and the capability-facing `AdviceProvider`
//! trait that advice backends implement.

pub mod assessment;
pub mod conversation;
pub mod error;
pub mod llm;
pub mod profile;
pub mod trend;

#[cfg(test)]
mod tests;

pub use assessment::{
    assess, format_reading, AssessmentResult, FieldReading, HealthTier, RiskLevel,
    DEFAULT_LOCATION,
};
pub use conversation::{Conversation, ConversationTurn, PROMPT_HISTORY_LIMIT};
pub use error::{Error, Result};
pub use llm::{describe_failure, AdviceProvider, GenerationConfig, GenerationResult};
pub use profile::{CropProfile, DiseaseThresholds, TempRange};
pub use trend::{TierCounts, TrendOutlook, TrendSummary};
