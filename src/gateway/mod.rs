/*!
 * Translation gateway abstraction.
 *
 * The actual translation capability lives outside this process (a
 * browser-automation sidecar driving the browser's built-in translator).
 * This module abstracts it behind a trait so the pipeline and the
 * validators can be exercised against a mock without any browser
 * dependency:
 * - `remote`: HTTP client for the sidecar endpoint
 * - `mock`: configurable in-memory gateway for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::GatewayError;

/// Common trait for translation gateways.
///
/// A gateway is created once per run and reused for every call; calls are
/// independent and carry no session state beyond the language pair fixed
/// at construction time.
#[async_trait]
pub trait TranslationGateway: Send + Sync + Debug {
    /// Translate one piece of text from the source to the target language
    ///
    /// # Arguments
    /// * `text` - The text to translate
    ///
    /// # Returns
    /// * `Result<String, GatewayError>` - The translated text or an error
    async fn translate(&self, text: &str) -> Result<String, GatewayError>;
}

pub mod mock;
pub mod remote;

pub use mock::{MockBehavior, MockGateway};
pub use remote::RemoteGateway;
