use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;
use url::Url;

use crate::language_utils::{self, AUTO_LANGUAGE};

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Source language code (ISO), or "auto" for detection
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Target language code (ISO). None means convert without translating.
    #[serde(default)]
    pub target_language: Option<String>,

    /// Translation provider config
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Provider configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProviderConfig {
    // @field: Service URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    // @field: Max concurrent requests
    #[serde(default = "default_concurrent_requests")]
    pub concurrent_requests: usize,

    // @field: Timeout seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Log level for the application
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Error level
    Error,
    /// Warning level
    Warn,
    /// Info level (default)
    #[default]
    Info,
    /// Debug level
    Debug,
    /// Trace level
    Trace,
}

fn default_source_language() -> String {
    AUTO_LANGUAGE.to_string()
}

fn default_endpoint() -> String {
    crate::providers::google::DEFAULT_ENDPOINT.to_string()
}

fn default_concurrent_requests() -> usize {
    4
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            concurrent_requests: default_concurrent_requests(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_language: default_source_language(),
            target_language: None,
            provider: ProviderConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Validate the configuration after loading and applying overrides.
    pub fn validate(&self) -> Result<()> {
        if self.source_language != AUTO_LANGUAGE {
            language_utils::validate_language_code(&self.source_language)
                .map_err(|e| anyhow!("Invalid source language: {}", e))?;
        }

        if let Some(target) = &self.target_language {
            language_utils::validate_language_code(target)
                .map_err(|e| anyhow!("Invalid target language: {}", e))?;
        }

        if self.provider.concurrent_requests == 0 {
            return Err(anyhow!("provider.concurrent_requests must be at least 1"));
        }

        if self.provider.timeout_secs == 0 {
            return Err(anyhow!("provider.timeout_secs must be at least 1"));
        }

        Url::parse(&self.provider.endpoint)
            .map_err(|e| anyhow!("Invalid provider endpoint {}: {}", self.provider.endpoint, e))?;

        Ok(())
    }
}
