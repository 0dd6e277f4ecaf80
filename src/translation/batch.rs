/*!
 * Batch translation processing.
 *
 * This module contains the orchestrator for a translation run: it
 * partitions the dataset into batches, drives the term translator with
 * bounded concurrency, tracks run status, writes periodic checkpoints,
 * and paces itself adaptively when the gateway shows signs of stress.
 */

use anyhow::Result;
use futures::stream::{self, StreamExt};
use log::{debug, info, warn};
use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::app_config::PipelineConfig;
use crate::file_utils::FileManager;
use crate::gateway::TranslationGateway;
use crate::glossary::{self, Term, TranslatedTerm};

use super::term::TermTranslator;

/// Number of error messages included in the run summary
const SUMMARY_ERROR_COUNT: usize = 5;

/// Mutable state of a translation run.
///
/// Exclusively owned and mutated by the batch processor; other components
/// only observe snapshots through the progress callback.
#[derive(Debug, Clone, Default)]
pub struct RunStatus {
    /// Total number of terms in the run
    pub total: usize,
    /// Terms completed so far (success or fallback)
    pub completed_count: usize,
    /// Terms where at least one sub-field fell back to source text
    pub failed_count: usize,
    /// Id of the most recently completed term
    pub current_term_id: Option<String>,
    /// Per-sub-field failure messages, in arrival order
    pub errors: Vec<String>,
}

impl RunStatus {
    /// Create a status for a run over `total` terms
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Default::default()
        }
    }

    /// Completion percentage over the whole run
    pub fn progress_percent(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            self.completed_count as f64 / self.total as f64 * 100.0
        }
    }

    /// Share of completed terms that translated without any fallback
    pub fn success_rate(&self) -> f64 {
        if self.completed_count == 0 {
            0.0
        } else {
            (self.completed_count - self.failed_count) as f64 / self.completed_count as f64 * 100.0
        }
    }

    /// Human-readable run summary with the first few error messages
    pub fn summary(&self) -> String {
        let mut lines = vec![
            format!("Terms total:     {}", self.total),
            format!("Completed:       {}", self.completed_count),
            format!("With fallback:   {}", self.failed_count),
            format!("Success rate:    {:.1}%", self.success_rate()),
        ];
        if !self.errors.is_empty() {
            lines.push(format!("Errors ({} total, first {}):", self.errors.len(), SUMMARY_ERROR_COUNT));
            for error in self.errors.iter().take(SUMMARY_ERROR_COUNT) {
                lines.push(format!("  - {}", error));
            }
        }
        lines.join("\n")
    }
}

/// Result of a translation run
#[derive(Debug)]
pub struct RunOutcome {
    /// Translated terms, in input order
    pub terms: Vec<TranslatedTerm>,
    /// Final run status
    pub status: RunStatus,
    /// Whether the run stopped early on a shutdown request
    pub interrupted: bool,
}

/// Orchestrates a batched translation run over a term dataset
pub struct BatchProcessor {
    gateway: Arc<dyn TranslationGateway>,
    config: PipelineConfig,
    shutdown: Arc<AtomicBool>,
}

impl BatchProcessor {
    /// Create a new batch processor over an initialized gateway session
    pub fn new(gateway: Arc<dyn TranslationGateway>, config: PipelineConfig) -> Self {
        Self {
            gateway,
            config,
            shutdown: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Flag observed between batches; setting it requests a graceful stop.
    /// In-flight translation calls are allowed to finish naturally.
    pub fn shutdown_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.shutdown)
    }

    /// Run the pipeline over `terms`.
    ///
    /// Output order matches input order regardless of completion order.
    /// When `checkpoint_base` is given, the accumulated results are
    /// persisted there (at a derived path) every `checkpoint_interval`
    /// completed terms, and once more on interruption.
    pub async fn run(
        &self,
        terms: &[Term],
        checkpoint_base: Option<&Path>,
        progress: impl Fn(&RunStatus) + Send + Sync,
    ) -> Result<RunOutcome> {
        let translator = TermTranslator::new(Arc::clone(&self.gateway), &self.config);
        let mut status = RunStatus::new(terms.len());
        let mut results: Vec<TranslatedTerm> = Vec::with_capacity(terms.len());
        let mut interrupted = false;
        let mut completed_since_checkpoint = 0usize;

        // Failure messages arrive in completion order while the batch is
        // in flight; the results themselves are reassembled positionally.
        let error_sink: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));

        let batch_count = terms.len().div_ceil(self.config.batch_size);
        for (batch_index, batch) in terms.chunks(self.config.batch_size).enumerate() {
            if self.shutdown.load(Ordering::SeqCst) {
                warn!("Shutdown requested, stopping after {} completed terms", status.completed_count);
                interrupted = true;
                break;
            }

            debug!("Processing batch {} of {}", batch_index + 1, batch_count);

            let mut batch_results = stream::iter(batch.iter().enumerate())
                .map(|(index, term)| {
                    let translator = &translator;
                    let error_sink = Arc::clone(&error_sink);
                    async move {
                        let outcome = translator.translate(term).await;
                        if !outcome.errors.is_empty() {
                            error_sink.lock().extend(outcome.errors.iter().cloned());
                        }
                        (index, outcome)
                    }
                })
                .buffer_unordered(self.config.batch_size)
                .collect::<Vec<_>>()
                .await;

            // Restore input order within the batch
            batch_results.sort_by_key(|(index, _)| *index);

            let mut batch_fallbacks = 0usize;
            for (_, outcome) in batch_results {
                if outcome.degraded() {
                    batch_fallbacks += 1;
                    status.failed_count += 1;
                }
                status.completed_count += 1;
                status.current_term_id = Some(outcome.term.id.clone());
                results.push(outcome.term);
                completed_since_checkpoint += 1;
                progress(&status);
            }

            if let Some(base) = checkpoint_base {
                if completed_since_checkpoint >= self.config.checkpoint_interval {
                    self.write_checkpoint(base, &results, status.completed_count)?;
                    completed_since_checkpoint = 0;
                }
            }

            // Throttle before the next batch in response to observed stress
            if batch_index + 1 < batch_count {
                let delay = self.adaptive_delay(batch_fallbacks, batch.len());
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
            }
        }

        status.errors = Arc::try_unwrap(error_sink)
            .map(|mutex| mutex.into_inner())
            .unwrap_or_else(|arc| arc.lock().clone());

        if interrupted {
            if let Some(base) = checkpoint_base {
                if !results.is_empty() {
                    self.write_checkpoint(base, &results, status.completed_count)?;
                }
            }
        }

        info!(
            "Run finished: {}/{} terms, {} with fallback{}",
            status.completed_count,
            status.total,
            status.failed_count,
            if interrupted { " (interrupted)" } else { "" }
        );

        Ok(RunOutcome {
            terms: results,
            status,
            interrupted,
        })
    }

    /// Pick the inter-batch delay from the batch's fallback rate.
    ///
    /// A rising fallback rate is the only backpressure signal the opaque
    /// gateway gives us, so the delay scales with it.
    fn adaptive_delay(&self, fallbacks: usize, batch_len: usize) -> Duration {
        if batch_len == 0 {
            return Duration::from_millis(self.config.batch_delay_ms);
        }
        let failure_rate = fallbacks as f64 / batch_len as f64;
        let multiplier = if failure_rate > self.config.high_failure_threshold {
            3
        } else if failure_rate > self.config.moderate_failure_threshold {
            2
        } else {
            1
        };
        Duration::from_millis(self.config.batch_delay_ms * multiplier)
    }

    /// Persist the accumulated results as a checkpoint file
    fn write_checkpoint(
        &self,
        output_base: &Path,
        results: &[TranslatedTerm],
        completed: usize,
    ) -> Result<PathBuf> {
        let path = FileManager::checkpoint_path(output_base, completed);
        glossary::save_translated_terms(&path, results)?;
        info!("Checkpoint written: {:?} ({} terms)", path, results.len());
        Ok(path)
    }
}
