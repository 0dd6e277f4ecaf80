/*!
 * # Yakugo - Glossary translation pipeline
 *
 * A Rust library for batch translation of an English software-engineering
 * glossary into Japanese, using an opaque browser-based translation
 * sidecar, plus a validation engine for the translated output.
 *
 * ## Features
 *
 * - Batched, concurrency-bounded translation of glossary terms
 * - Context wrapping so the machine translator sees domain context
 * - Per-field fallback: a failed sub-translation degrades to source text
 *   instead of failing the run
 * - Periodic checkpoints and resume from a checkpoint file
 * - Staleness detection via a digest of the source term content
 * - Adaptive inter-batch pacing driven by the observed failure rate
 * - Standalone validation of a translated dataset against its source
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `glossary`: Dataset value types, loading and saving
 * - `gateway`: Translation gateway trait with remote and mock backends
 * - `translation`: The pipeline itself:
 *   - `translation::context`: Context wrapping of request texts
 *   - `translation::term`: Single-term translation with retry and fallback
 *   - `translation::batch`: Batched runs, checkpoints, adaptive pacing
 *   - `translation::resume`: Continuing an interrupted run
 * - `validation`: Structural, content, completeness and quality checks
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod gateway;
pub mod glossary;
pub mod translation;
pub mod validation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use errors::{GatewayError, TranslationError};
pub use gateway::TranslationGateway;
pub use glossary::{Term, TranslatedTerm};
pub use translation::{BatchProcessor, RunStatus};
pub use validation::{ValidationResult, ValidationService};
