//! Manifest Gatekeeper Layer
//!
//! Confidence scoring and guardrails for generated answers. The gatekeeper
//! sits on both sides of the completion call:
//!
//! - **Pre-generation**: `retrieval_usable` rejects proceeding to generation
//!   when the best retrieved candidate is too far from the question, so call
//!   sites can fail fast before spending a completion call.
//! - **Post-generation**: `calculate_confidence` combines retrieval
//!   distances with answer-quality heuristics into a [0, 1] score, and
//!   `annotate` wraps low-confidence answers in warning text.
//!
//! All thresholds live in [`GuardrailConfig`] rather than being unified:
//! the hard retrieval-failure ceiling and the stricter pre-check threshold
//! serve different call sites and are configured independently.

#![warn(missing_docs)]

pub mod confidence;
pub mod config;
pub mod guardrails;

pub use confidence::{answer_quality, calculate_confidence};
pub use config::GuardrailConfig;
pub use guardrails::Gatekeeper;
