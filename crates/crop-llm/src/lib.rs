//! Completion endpoint integration for the crop health estimator
//!
//! This crate provides the HTTP implementation of the AdviceProvider trait.

mod client;
mod config;


pub use client::CompletionClient;
pub use config::CompletionConfig;

// Re-export core types for convenience
pub use crop_core::{AdviceProvider, Error, GenerationConfig, GenerationResult, Result};
