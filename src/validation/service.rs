/*!
 * Validation orchestration and reporting.
 *
 * Runs the structural, content, completeness and quality passes over a
 * dataset pair, aggregates their findings, computes coverage statistics
 * and renders a human-readable report.
 */

use chrono::Local;

use crate::glossary::{Term, TranslatedTerm};

use super::{completeness, content, quality, structural, Findings};

/// Warnings rendered in full before the report truncates
const MAX_REPORTED_WARNINGS: usize = 50;

/// Runs every validation pass over a dataset pair
#[derive(Debug, Default)]
pub struct ValidationService;

/// Aggregated outcome of a validation run
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// True iff no pass produced an error; warnings never affect validity
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub statistics: ValidationStatistics,
}

/// Coverage statistics over the dataset pair
#[derive(Debug, Clone, Default)]
pub struct ValidationStatistics {
    /// Terms in the original dataset
    pub total_terms: usize,
    /// Entries in the translated dataset, extraneous ids included
    pub translated_terms: usize,
    /// Original terms with no counterpart
    pub missing_translations: usize,
    /// Counterparts whose name_ja is empty or whitespace
    pub empty_translations: usize,
}

impl ValidationStatistics {
    /// Share of original terms carrying a usable translation, in percent
    pub fn completion_rate(&self) -> f64 {
        if self.total_terms == 0 {
            return 100.0;
        }
        let usable = self.translated_terms.saturating_sub(self.empty_translations);
        (usable as f64 / self.total_terms as f64) * 100.0
    }
}

impl ValidationService {
    pub fn new() -> Self {
        Self
    }

    /// Run all passes and aggregate their findings.
    ///
    /// Pass order is fixed so repeated runs over the same datasets
    /// produce identical results.
    pub fn validate(&self, original: &[Term], translated: &[TranslatedTerm]) -> ValidationResult {
        let mut findings = Findings::default();
        findings.extend(structural::check(original, translated));
        findings.extend(content::check(translated));
        findings.extend(completeness::check(original, translated));
        findings.extend(quality::check(translated));

        let statistics = compute_statistics(original, translated);

        ValidationResult {
            is_valid: findings.errors.is_empty(),
            errors: findings.errors,
            warnings: findings.warnings,
            statistics,
        }
    }

    /// Result for a translated dataset that could not be loaded at all
    pub fn load_failure(&self, message: &str) -> ValidationResult {
        ValidationResult {
            is_valid: false,
            errors: vec![format!("Failed to load translated dataset: {}", message)],
            warnings: Vec::new(),
            statistics: ValidationStatistics::default(),
        }
    }
}

fn compute_statistics(original: &[Term], translated: &[TranslatedTerm]) -> ValidationStatistics {
    let mut stats = ValidationStatistics {
        total_terms: original.len(),
        translated_terms: translated.len(),
        ..Default::default()
    };

    for term in original {
        match translated.iter().find(|t| t.id == term.id) {
            Some(counterpart) => {
                if counterpart.name_ja.trim().is_empty() {
                    stats.empty_translations += 1;
                }
            }
            None => stats.missing_translations += 1,
        }
    }

    stats
}

impl ValidationResult {
    /// Render the full report
    pub fn render_report(&self) -> String {
        let mut report = String::new();

        report.push_str(&format!(
            "Validation report - {}\n",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        ));
        report.push_str(&format!(
            "Status: {}\n",
            if self.is_valid { "VALID" } else { "INVALID" }
        ));
        report.push_str(&format!(
            "Errors: {}, Warnings: {}\n\n",
            self.errors.len(),
            self.warnings.len()
        ));

        report.push_str("Statistics:\n");
        report.push_str(&format!("  Total terms:          {}\n", self.statistics.total_terms));
        report.push_str(&format!("  Translated terms:     {}\n", self.statistics.translated_terms));
        report.push_str(&format!("  Missing translations: {}\n", self.statistics.missing_translations));
        report.push_str(&format!("  Empty translations:   {}\n", self.statistics.empty_translations));
        report.push_str(&format!("  Completion rate:      {:.1}%\n", self.statistics.completion_rate()));

        if !self.errors.is_empty() {
            report.push_str("\nErrors:\n");
            for error in &self.errors {
                report.push_str(&format!("  [ERROR] {}\n", error));
            }
        }

        if !self.warnings.is_empty() {
            report.push_str("\nWarnings:\n");
            for warning in self.warnings.iter().take(MAX_REPORTED_WARNINGS) {
                report.push_str(&format!("  [WARN] {}\n", warning));
            }
            if self.warnings.len() > MAX_REPORTED_WARNINGS {
                report.push_str(&format!(
                    "  ... and {} more warnings\n",
                    self.warnings.len() - MAX_REPORTED_WARNINGS
                ));
            }
        }

        report
    }
}
