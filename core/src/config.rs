use crate::error::{CoreError, CoreResult};
use crate::sanitize::SanitizeOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CODE_LIFETIME_SECS: i64 = 300;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CodeConfig {
    pub lifetime_secs: i64,
}

impl Default for CodeConfig {
    fn default() -> Self {
        Self {
            lifetime_secs: DEFAULT_CODE_LIFETIME_SECS,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FormkitConfig {
    pub sanitize: SanitizeOptions,
    pub code: CodeConfig,
    pub cdn_url: Option<String>,
}

impl FormkitConfig {
    pub fn from_json_str(s: &str) -> CoreResult<Self> {
        let cfg: FormkitConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: &Path) -> CoreResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> CoreResult<()> {
        // An empty prefix would hide every key.
        if self.sanitize.hidden_prefix.is_empty() {
            return Err(CoreError::InvalidArgument(
                "sanitize.hidden_prefix must not be empty".to_string(),
            ));
        }
        if self.sanitize.max_depth == 0 {
            return Err(CoreError::InvalidArgument(
                "sanitize.max_depth must be at least 1".to_string(),
            ));
        }
        if self.code.lifetime_secs <= 0 {
            return Err(CoreError::InvalidArgument(format!(
                "code.lifetime_secs must be positive, got {}",
                self.code.lifetime_secs
            )));
        }
        Ok(())
    }
}
