/*!
 * Validation module for the translated glossary.
 *
 * This module checks a translated dataset against its source dataset,
 * independent of how the translation was produced:
 * - Structural integrity (ids, required fields, parallel cardinality)
 * - Content quality (empty, identical-to-source, suspicious patterns)
 * - Completeness (optional fields carried into translations)
 * - Quality heuristics (duplicate and suspiciously short translations)
 *
 * # Architecture
 *
 * - `structural`: id sets, required fields, `_ja` parallelism
 * - `content`: per-field content checks
 * - `completeness`: original-vs-translated optional field coverage
 * - `quality`: cross-term heuristics
 * - `service`: orchestrates all passes, computes statistics, renders the report
 */

pub mod completeness;
pub mod content;
pub mod quality;
pub mod service;
pub mod structural;

// Re-export main types
pub use service::{ValidationService, ValidationResult, ValidationStatistics};

/// Findings of one validation pass
#[derive(Debug, Default, Clone)]
pub struct Findings {
    /// Contract violations; any entry makes the dataset unusable
    pub errors: Vec<String>,
    /// Quality concerns for human review; never affect validity
    pub warnings: Vec<String>,
}

impl Findings {
    /// Append another pass's findings
    pub fn extend(&mut self, other: Findings) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}
