/*!
 * Translation pipeline modules.
 *
 * - `context`: domain-context wrapping and stripping
 * - `term`: per-term field translation with uniform fallback
 * - `batch`: batched orchestration, checkpoints, adaptive pacing
 * - `resume`: continuing a run from a checkpoint
 */

pub mod batch;
pub mod context;
pub mod resume;
pub mod term;

// Re-export main types
pub use batch::{BatchProcessor, RunOutcome, RunStatus};
pub use resume::{resume, ResumePlan};
pub use term::{TermOutcome, TermTranslator};
