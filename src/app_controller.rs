use anyhow::{anyhow, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use std::path::Path;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use crate::app_config::Config;
use crate::gateway::{RemoteGateway, TranslationGateway};
use crate::glossary;
use crate::translation::{resume, BatchProcessor, RunOutcome, RunStatus};
use crate::validation::ValidationService;
use crate::file_utils::FileManager;

// @module: Application controller for glossary translation and validation

/// Main application controller wiring the pipeline to the filesystem
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self { config })
    }

    /// Run a full translation over the input dataset.
    ///
    /// Returns `true` when the run finished cleanly; `false` when it was
    /// interrupted (a checkpoint holds the partial output in that case).
    pub async fn run_translate(&self, input_path: &Path, output_path: &Path) -> Result<bool> {
        let start_time = std::time::Instant::now();

        let terms = glossary::load_terms(input_path)
            .with_context(|| format!("Failed to load dataset: {:?}", input_path))?;
        info!("Loaded {} terms from {:?}", terms.len(), input_path);

        let processor = self.build_processor().await?;
        Self::spawn_shutdown_watcher(&processor);

        let progress_bar = Self::make_progress_bar(terms.len());
        let pb = progress_bar.clone();
        let outcome = processor
            .run(&terms, Some(output_path), move |status| {
                Self::update_progress(&pb, status);
            })
            .await?;
        progress_bar.finish_and_clear();

        self.finish_run(outcome, output_path, start_time)
    }

    /// Continue an interrupted run from a checkpoint file
    pub async fn run_resume(
        &self,
        checkpoint_path: &Path,
        input_path: &Path,
        output_path: &Path,
    ) -> Result<bool> {
        let start_time = std::time::Instant::now();

        let checkpoint = glossary::load_translated_terms(checkpoint_path)
            .with_context(|| format!("Failed to load checkpoint: {:?}", checkpoint_path))?;
        let terms = glossary::load_terms(input_path)
            .with_context(|| format!("Failed to load dataset: {:?}", input_path))?;
        info!(
            "Loaded checkpoint with {} entries against a dataset of {} terms",
            checkpoint.len(),
            terms.len()
        );

        let processor = self.build_processor().await?;
        Self::spawn_shutdown_watcher(&processor);

        let progress_bar = Self::make_progress_bar(terms.len());
        let pb = progress_bar.clone();
        let outcome = resume(
            &processor,
            checkpoint,
            &terms,
            Some(output_path),
            move |status| {
                Self::update_progress(&pb, status);
            },
        )
        .await?;
        progress_bar.finish_and_clear();

        self.finish_run(outcome, output_path, start_time)
    }

    /// Validate a translated dataset against its source and write the
    /// report file.
    ///
    /// Returns `true` when the translated dataset is valid. An unloadable
    /// translated file still produces a report rather than an error.
    pub async fn run_validate(
        &self,
        original_path: &Path,
        translated_path: &Path,
        report_path: &Path,
    ) -> Result<bool> {
        let original = glossary::load_terms(original_path)
            .with_context(|| format!("Failed to load dataset: {:?}", original_path))?;

        let service = ValidationService::new();
        let result = match glossary::load_translated_terms(translated_path) {
            Ok(translated) => service.validate(&original, &translated),
            Err(e) => {
                warn!("Translated dataset could not be loaded: {}", e);
                service.load_failure(&e.to_string())
            }
        };

        FileManager::write_atomic(report_path, &result.render_report())?;
        info!(
            "Validation {}: {} errors, {} warnings, report written to {:?}",
            if result.is_valid { "passed" } else { "failed" },
            result.errors.len(),
            result.warnings.len(),
            report_path
        );

        Ok(result.is_valid)
    }

    /// Connect to the sidecar and build the batch processor.
    ///
    /// An unreachable sidecar aborts here, before any term is touched.
    async fn build_processor(&self) -> Result<BatchProcessor> {
        let gateway = RemoteGateway::connect(
            &self.config.gateway,
            &self.config.source_language,
            &self.config.target_language,
        )
        .await
        .map_err(|e| anyhow!("Translation gateway unavailable: {}", e))?;

        let gateway: Arc<dyn TranslationGateway> = Arc::new(gateway);
        Ok(BatchProcessor::new(gateway, self.config.pipeline.clone()))
    }

    /// Request a graceful stop on Ctrl-C; the current batch is allowed
    /// to finish and a checkpoint is flushed before exiting.
    fn spawn_shutdown_watcher(processor: &BatchProcessor) {
        let flag = processor.shutdown_flag();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("Interrupt received, finishing the current batch before stopping");
                flag.store(true, Ordering::SeqCst);
            }
        });
    }

    fn make_progress_bar(total: usize) -> ProgressBar {
        let progress_bar = ProgressBar::new(total as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} terms ({percent}%) {msg} {eta}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(template_result.progress_chars("█▓▒░"));
        progress_bar.set_message("Translating");
        progress_bar
    }

    fn update_progress(progress_bar: &ProgressBar, status: &RunStatus) {
        progress_bar.set_position(status.completed_count as u64);
        if let Some(id) = &status.current_term_id {
            progress_bar.set_message(format!("term {}", id));
        }
    }

    /// Persist the outcome and log the run summary
    fn finish_run(
        &self,
        outcome: RunOutcome,
        output_path: &Path,
        start_time: std::time::Instant,
    ) -> Result<bool> {
        if outcome.interrupted {
            warn!(
                "Run interrupted after {} of {} terms; a checkpoint holds the partial output",
                outcome.status.completed_count, outcome.status.total
            );
            for line in outcome.status.summary().lines() {
                info!("{}", line);
            }
            return Ok(false);
        }

        glossary::save_translated_terms(output_path, &outcome.terms)?;
        info!("Success: {}", output_path.display());

        for line in outcome.status.summary().lines() {
            info!("{}", line);
        }
        info!(
            "Translation completed in {}.",
            Self::format_duration(start_time.elapsed())
        );

        Ok(true)
    }

    // Format duration in a human-readable format (HH:MM:SS)
    fn format_duration(duration: std::time::Duration) -> String {
        let total_seconds = duration.as_secs();
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
