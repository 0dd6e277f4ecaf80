/*!
 * Resume support for interrupted translation runs.
 *
 * A checkpoint is a partial output file. Resuming computes the remaining
 * work by set difference on term ids, re-queues checkpoint entries whose
 * source content has changed since they were translated, and continues
 * the batch processor over the remainder only.
 */

use anyhow::Result;
use log::{info, warn};
use std::collections::HashMap;
use std::path::Path;

use crate::glossary::{Term, TranslatedTerm};

use super::batch::{BatchProcessor, RunOutcome, RunStatus};

/// Work partition computed from a checkpoint and the current dataset
#[derive(Debug)]
pub struct ResumePlan {
    /// Checkpoint entries kept as-is, in checkpoint order
    pub kept: Vec<TranslatedTerm>,
    /// Terms still to translate, in dataset order
    pub remaining: Vec<Term>,
    /// Ids of checkpoint entries re-queued because their source changed
    pub stale_ids: Vec<String>,
}

impl ResumePlan {
    /// Partition the dataset against a checkpoint.
    ///
    /// Checkpoint entries whose id is absent from the dataset are stale
    /// leftovers of an earlier dataset revision; they are kept in the
    /// output rather than blocking the resume. Entries carrying a source
    /// digest that no longer matches the current term content are dropped
    /// from the kept set and their terms re-queued; digest-less entries
    /// are trusted as-is.
    pub fn compute(checkpoint: Vec<TranslatedTerm>, all_terms: &[Term]) -> Self {
        let current: HashMap<&str, &Term> =
            all_terms.iter().map(|t| (t.id.as_str(), t)).collect();

        let mut kept = Vec::with_capacity(checkpoint.len());
        let mut stale_ids = Vec::new();

        for entry in checkpoint {
            match (current.get(entry.id.as_str()), &entry.source_digest) {
                (Some(term), Some(digest)) if *digest != term.source_digest() => {
                    warn!("Checkpoint entry {} is stale, re-translating", entry.id);
                    stale_ids.push(entry.id);
                }
                (None, _) => {
                    warn!("Checkpoint entry {} not present in dataset, keeping as-is", entry.id);
                    kept.push(entry);
                }
                _ => kept.push(entry),
            }
        }

        let done: std::collections::HashSet<&str> =
            kept.iter().map(|t| t.id.as_str()).collect();
        let remaining = all_terms
            .iter()
            .filter(|t| !done.contains(t.id.as_str()))
            .cloned()
            .collect();

        Self {
            kept,
            remaining,
            stale_ids,
        }
    }

    /// Whether the checkpoint already covers the whole dataset
    pub fn is_complete(&self) -> bool {
        self.remaining.is_empty()
    }
}

/// Continue a run from a checkpoint.
///
/// Idempotent: when the checkpoint already covers the dataset the
/// checkpoint is returned unchanged and the gateway is never called.
/// Otherwise the processor runs over the remaining terms and the output
/// is the checkpoint entries (in checkpoint order) followed by the newly
/// translated terms (in processed order).
pub async fn resume(
    processor: &BatchProcessor,
    checkpoint: Vec<TranslatedTerm>,
    all_terms: &[Term],
    checkpoint_base: Option<&Path>,
    progress: impl Fn(&RunStatus) + Send + Sync,
) -> Result<RunOutcome> {
    let plan = ResumePlan::compute(checkpoint, all_terms);

    if plan.is_complete() {
        info!("Checkpoint already covers all {} terms, nothing to do", all_terms.len());
        let total = plan.kept.len();
        let mut status = RunStatus::new(total);
        status.completed_count = total;
        return Ok(RunOutcome {
            terms: plan.kept,
            status,
            interrupted: false,
        });
    }

    info!(
        "Resuming: {} terms done, {} remaining{}",
        plan.kept.len(),
        plan.remaining.len(),
        if plan.stale_ids.is_empty() {
            String::new()
        } else {
            format!(" ({} stale entries re-queued)", plan.stale_ids.len())
        }
    );

    let outcome = processor.run(&plan.remaining, checkpoint_base, progress).await?;

    let mut terms = plan.kept;
    terms.extend(outcome.terms);

    let mut status = outcome.status;
    status.total = all_terms.len().max(terms.len());
    status.completed_count = terms.len();

    Ok(RunOutcome {
        terms,
        status,
        interrupted: outcome.interrupted,
    })
}
