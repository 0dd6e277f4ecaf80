/*!
 * Mock gateway implementations for testing.
 *
 * This module provides mock gateways that simulate different behaviors:
 * - `MockGateway::echo()` - returns the input unchanged
 * - `MockGateway::suffix(..)` - appends a marker to every translation
 * - `MockGateway::failing()` - always fails with an error
 * - `MockGateway::fail_matching(..)` - fails only for texts containing a needle
 */

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::errors::GatewayError;
use crate::gateway::TranslationGateway;

/// Behavior mode for the mock gateway
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Returns the input text unchanged (identity translator)
    Echo,
    /// Returns the input text with a suffix appended
    Suffix(String),
    /// Always fails with an error
    Failing,
    /// Fails only when the text contains the given needle
    FailMatching(String),
    /// Fails intermittently (every Nth request)
    Intermittent { fail_every: usize },
    /// Returns an empty response
    Empty,
    /// Simulates slow response (for pacing/timeout testing)
    Slow { delay_ms: u64 },
}

/// Mock gateway for testing pipeline behavior
#[derive(Debug)]
pub struct MockGateway {
    /// Behavior mode
    behavior: MockBehavior,
    /// Request counter, shared across clones
    call_count: Arc<AtomicUsize>,
}

impl MockGateway {
    /// Create a new mock gateway with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create an identity mock gateway
    pub fn echo() -> Self {
        Self::new(MockBehavior::Echo)
    }

    /// Create a mock gateway that appends a suffix to every translation
    pub fn suffix(suffix: impl Into<String>) -> Self {
        Self::new(MockBehavior::Suffix(suffix.into()))
    }

    /// Create a failing mock gateway that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock gateway that fails for texts containing `needle`
    pub fn fail_matching(needle: impl Into<String>) -> Self {
        Self::new(MockBehavior::FailMatching(needle.into()))
    }

    /// Create an intermittently failing mock gateway
    pub fn intermittent(fail_every: usize) -> Self {
        Self::new(MockBehavior::Intermittent { fail_every })
    }

    /// Create a mock gateway that returns empty responses
    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty)
    }

    /// Number of translate calls made so far, across all clones
    pub fn calls(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

impl Clone for MockGateway {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior.clone(),
            call_count: Arc::clone(&self.call_count),
        }
    }
}

#[async_trait]
impl TranslationGateway for MockGateway {
    async fn translate(&self, text: &str) -> Result<String, GatewayError> {
        let count = self.call_count.fetch_add(1, Ordering::SeqCst);

        match &self.behavior {
            MockBehavior::Echo => Ok(text.to_string()),

            MockBehavior::Suffix(suffix) => Ok(format!("{}{}", text, suffix)),

            MockBehavior::Failing => Err(GatewayError::ApiError {
                status_code: 500,
                message: "Simulated gateway failure".to_string(),
            }),

            MockBehavior::FailMatching(needle) => {
                if text.contains(needle.as_str()) {
                    Err(GatewayError::ApiError {
                        status_code: 503,
                        message: format!("Simulated failure for text containing {:?}", needle),
                    })
                } else {
                    Ok(text.to_string())
                }
            }

            MockBehavior::Intermittent { fail_every } => {
                if count % fail_every == fail_every - 1 {
                    Err(GatewayError::ApiError {
                        status_code: 503,
                        message: format!("Simulated intermittent failure (request #{})", count + 1),
                    })
                } else {
                    Ok(text.to_string())
                }
            }

            MockBehavior::Empty => Ok(String::new()),

            MockBehavior::Slow { delay_ms } => {
                tokio::time::sleep(tokio::time::Duration::from_millis(*delay_ms)).await;
                Ok(text.to_string())
            }
        }
    }
}
