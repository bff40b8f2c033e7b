use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{CleanerError, Result};
use crate::{DEFAULT_API_BASE_URL, DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT_SECS};


const ENV_PREFIX: &str = "ORG_CLEANER";

const FALLBACK_TOKEN_VAR: &str = "GOOGLE_OAUTH_ACCESS_TOKEN";


#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanerConfig {
    pub api_base_url: String,
    #[serde(default)]
    pub access_token: Option<String>,
    pub timeout: u64,
    pub page_size: u32,
}

impl CleanerConfig {
    pub fn new(api_base_url: &str) -> Self {
        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            access_token: None,
            timeout: DEFAULT_TIMEOUT_SECS,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Defaults, then the optional TOML file, then `ORG_CLEANER_*` variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder()
            .set_default("api_base_url", DEFAULT_API_BASE_URL)?
            .set_default("timeout", DEFAULT_TIMEOUT_SECS as i64)?
            .set_default("page_size", i64::from(DEFAULT_PAGE_SIZE))?;

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let mut config: Self = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;

        if config.access_token.is_none() {
            config.access_token = std::env::var(FALLBACK_TOKEN_VAR).ok();
        }
        config.api_base_url = config.api_base_url.trim_end_matches('/').to_string();
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_base_url.is_empty() {
            return Err(CleanerError::Config("api_base_url must not be empty".into()));
        }
        if self.page_size == 0 {
            return Err(CleanerError::Config("page_size must be positive".into()));
        }
        if self.timeout == 0 {
            return Err(CleanerError::Config("timeout must be positive".into()));
        }
        Ok(())
    }
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}
