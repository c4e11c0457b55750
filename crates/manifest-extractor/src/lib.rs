//! Multi-document structured extraction
//!
//! Retrieved chunks are grouped by document type; each group is extracted
//! against the fixed 11-field schema with a per-type rate instruction, then
//! the per-type records are merged into one record using field-specific
//! source priority. A margin metric (shipper rate minus carrier pay) is
//! derived when both rate confirmations yielded a numeric rate.
//!
//! Malformed extraction output for one document type degrades to an all-null
//! record for that type; partial extraction is preferable to total failure.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod extractor;
pub mod merge;
pub mod parser;
pub mod prompt;

pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use extractor::StructuredExtractor;
pub use merge::merge_extractions;
