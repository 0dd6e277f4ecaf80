/*!
 * Per-term translation.
 *
 * Translates every translatable field of a glossary term through the
 * context wrapper and the gateway. The operation never fails: each
 * sub-field failure degrades to the original text for that sub-field only,
 * so the resulting TranslatedTerm always satisfies structural parallelism.
 */

use log::warn;
use std::sync::Arc;
use std::time::Duration;

use crate::app_config::PipelineConfig;
use crate::errors::TranslationError;
use crate::gateway::TranslationGateway;
use crate::glossary::{Term, TranslatedDefinition, TranslatedTerm};

use super::context;

/// Result of translating one term, with enough accounting for the
/// orchestrator's failure-rate metric and error log.
#[derive(Debug)]
pub struct TermOutcome {
    /// The structurally complete translated term
    pub term: TranslatedTerm,
    /// Number of sub-field translation calls attempted
    pub attempted: usize,
    /// Number of sub-fields that fell back to the original text
    pub failed: usize,
    /// Diagnostic messages for each fallback, with term id and field
    pub errors: Vec<String>,
}

impl TermOutcome {
    /// Whether any sub-field fell back to the original text
    pub fn degraded(&self) -> bool {
        self.failed > 0
    }
}

/// Translates one glossary term at a time through the gateway
pub struct TermTranslator {
    gateway: Arc<dyn TranslationGateway>,
    retry_count: u32,
    retry_delay_ms: u64,
    max_text_length: usize,
}

impl TermTranslator {
    /// Create a new term translator over the given gateway session
    pub fn new(gateway: Arc<dyn TranslationGateway>, pipeline: &PipelineConfig) -> Self {
        Self {
            gateway,
            retry_count: pipeline.retry_count,
            retry_delay_ms: pipeline.retry_delay_ms,
            max_text_length: pipeline.max_text_length,
        }
    }

    /// Translate all translatable fields of a term.
    ///
    /// Partial success is allowed: the name may translate while one
    /// definition does not. Optional `_ja` fields are produced exactly
    /// when the source field is present, with matching cardinality.
    pub async fn translate(&self, term: &Term) -> TermOutcome {
        let mut attempted = 0;
        let mut failed = 0;
        let mut errors = Vec::new();

        let mut field = |label: String, outcome: (String, Option<String>)| {
            attempted += 1;
            if let Some(message) = outcome.1 {
                failed += 1;
                errors.push(format!("term {} {}: {}", term.id, label, message));
            }
            outcome.0
        };

        let name_ja = field("name".to_string(), self.translate_with_fallback(&term.name).await);

        let aliases_ja = match &term.aliases {
            Some(aliases) => {
                let mut out = Vec::with_capacity(aliases.len());
                for (i, alias) in aliases.iter().enumerate() {
                    let translated =
                        field(format!("alias[{}]", i), self.translate_with_fallback(alias).await);
                    out.push(translated);
                }
                Some(out)
            }
            None => None,
        };

        let mut definitions = Vec::with_capacity(term.definitions.len());
        for (i, definition) in term.definitions.iter().enumerate() {
            let text_ja = field(
                format!("definition[{}]", i),
                self.translate_with_fallback(&definition.text).await,
            );
            definitions.push(TranslatedDefinition {
                text: definition.text.clone(),
                text_ja,
                reference: definition.reference.clone(),
            });
        }

        let related_terms_ja = match &term.related_terms {
            Some(related) => {
                let mut out = Vec::with_capacity(related.len());
                for (i, name) in related.iter().enumerate() {
                    let translated =
                        field(format!("confer[{}]", i), self.translate_with_fallback(name).await);
                    out.push(translated);
                }
                Some(out)
            }
            None => None,
        };

        let example_ja = match &term.example {
            Some(example) => {
                Some(field("example".to_string(), self.translate_with_fallback(example).await))
            }
            None => None,
        };

        let note_ja = match &term.note {
            Some(note) => {
                Some(field("note".to_string(), self.translate_with_fallback(note).await))
            }
            None => None,
        };

        let translated = TranslatedTerm {
            id: term.id.clone(),
            name: term.name.clone(),
            name_ja,
            aliases: term.aliases.clone(),
            aliases_ja,
            definitions,
            related_terms: term.related_terms.clone(),
            related_terms_ja,
            example: term.example.clone(),
            example_ja,
            note: term.note.clone(),
            note_ja,
            source_digest: Some(term.source_digest()),
        };

        if failed > 0 {
            warn!(
                "Term {} degraded: {}/{} sub-fields fell back to source text",
                term.id, failed, attempted
            );
        }

        TermOutcome {
            term: translated,
            attempted,
            failed,
            errors,
        }
    }

    /// Translate one piece of text, falling back to the original on failure.
    ///
    /// Returns the text to store plus the last error message when the
    /// fallback was used. This is the single place where the fallback
    /// policy lives; every field goes through it.
    pub async fn translate_with_fallback(&self, text: &str) -> (String, Option<String>) {
        let mut last_error: Option<TranslationError> = None;

        for attempt in 1..=self.retry_count.max(1) {
            if attempt > 1 {
                // Cap the exponent; past that the delay saturates instead
                // of overflowing the shift
                let shift = (attempt - 2).min(16);
                let backoff_ms = self.retry_delay_ms.saturating_mul(1u64 << shift);
                tokio::time::sleep(Duration::from_millis(backoff_ms)).await;
            }

            match self.translate_once(text).await {
                Ok(translated) => return (translated, None),
                Err(e) => {
                    let retryable = match &e {
                        TranslationError::TextTooLong { .. } => false,
                        TranslationError::Gateway(g) => g.is_retryable(),
                        TranslationError::EmptyResult => true,
                    };
                    warn!(
                        "Translation attempt {}/{} failed: {}",
                        attempt, self.retry_count, e
                    );
                    last_error = Some(e);
                    if !retryable {
                        break;
                    }
                }
            }
        }

        let message = last_error
            .map(|e| e.to_string())
            .unwrap_or_else(|| "translation failed".to_string());
        (text.to_string(), Some(message))
    }

    /// One wrap-translate-unwrap round trip
    async fn translate_once(&self, text: &str) -> Result<String, TranslationError> {
        let wrapped = context::wrap(text);

        let length = wrapped.chars().count();
        if length > self.max_text_length {
            return Err(TranslationError::TextTooLong {
                length,
                max: self.max_text_length,
            });
        }

        let translated = self.gateway.translate(&wrapped).await?;
        let unwrapped = context::unwrap(&translated);

        if unwrapped.trim().is_empty() {
            return Err(TranslationError::EmptyResult);
        }

        Ok(unwrapped)
    }
}
