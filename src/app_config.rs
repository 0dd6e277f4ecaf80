use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Source language code (ISO)
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Target language code (ISO)
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// Pipeline config
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Gateway config
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Settings for the batch translation pipeline
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PipelineConfig {
    /// Number of terms translated concurrently per batch
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Retry attempts per failed sub-translation
    #[serde(default = "default_retry_count")]
    pub retry_count: u32,

    /// Base delay for retry backoff (in milliseconds, doubled on each retry)
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,

    /// Persist a checkpoint after this many completed terms
    #[serde(default = "default_checkpoint_interval")]
    pub checkpoint_interval: usize,

    /// Base delay inserted between batches (in milliseconds)
    #[serde(default = "default_batch_delay_ms")]
    pub batch_delay_ms: u64,

    /// Batch failure rate above which the inter-batch delay is tripled
    #[serde(default = "default_high_failure_threshold")]
    pub high_failure_threshold: f64,

    /// Batch failure rate above which the inter-batch delay is doubled
    #[serde(default = "default_moderate_failure_threshold")]
    pub moderate_failure_threshold: f64,

    /// Maximum characters per translation request, measured after
    /// context wrapping; longer texts fail over to the original text
    #[serde(default = "default_max_text_length")]
    pub max_text_length: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            retry_count: default_retry_count(),
            retry_delay_ms: default_retry_delay_ms(),
            checkpoint_interval: default_checkpoint_interval(),
            batch_delay_ms: default_batch_delay_ms(),
            high_failure_threshold: default_high_failure_threshold(),
            moderate_failure_threshold: default_moderate_failure_threshold(),
            max_text_length: default_max_text_length(),
        }
    }
}

/// Settings for the translation gateway sidecar
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GatewayConfig {
    /// Sidecar endpoint URL
    #[serde(default = "default_gateway_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            endpoint: default_gateway_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_source_language() -> String {
    "en".to_string()
}

fn default_target_language() -> String {
    "ja".to_string()
}

fn default_batch_size() -> usize {
    5
}

fn default_retry_count() -> u32 {
    3 // Default to 3 retries
}

fn default_retry_delay_ms() -> u64 {
    1000 // 1 second base backoff time, doubled on each retry
}

fn default_checkpoint_interval() -> usize {
    100
}

fn default_batch_delay_ms() -> u64 {
    1000
}

fn default_high_failure_threshold() -> f64 {
    0.2
}

fn default_moderate_failure_threshold() -> f64 {
    0.1
}

fn default_max_text_length() -> usize {
    5000
}

fn default_gateway_endpoint() -> String {
    "http://localhost:9223".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        // The context template is Japanese; other targets would leak it
        if self.target_language != "ja" {
            return Err(anyhow!(
                "Unsupported target language: {} (only 'ja' is supported)",
                self.target_language
            ));
        }
        if self.source_language != "en" {
            return Err(anyhow!(
                "Unsupported source language: {} (only 'en' is supported)",
                self.source_language
            ));
        }

        if self.pipeline.batch_size == 0 {
            return Err(anyhow!("batch_size must be at least 1"));
        }
        if self.pipeline.checkpoint_interval == 0 {
            return Err(anyhow!("checkpoint_interval must be at least 1"));
        }
        if self.pipeline.max_text_length == 0 {
            return Err(anyhow!("max_text_length must be at least 1"));
        }
        if self.pipeline.moderate_failure_threshold > self.pipeline.high_failure_threshold {
            return Err(anyhow!(
                "moderate_failure_threshold ({}) must not exceed high_failure_threshold ({})",
                self.pipeline.moderate_failure_threshold,
                self.pipeline.high_failure_threshold
            ));
        }

        if self.gateway.endpoint.is_empty() {
            return Err(anyhow!("Gateway endpoint cannot be empty"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            source_language: default_source_language(),
            target_language: default_target_language(),
            pipeline: PipelineConfig::default(),
            gateway: GatewayConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
