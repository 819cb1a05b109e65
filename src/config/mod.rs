pub mod local;

use crate::core::ConfigProvider;
use crate::utils::error::{HeaderError, Result};
use crate::utils::validation::Validate;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_API_ENDPOINT: &str = "https://api.github.com/graphql";
pub const DEFAULT_TEMPLATE_DIR: &str = ".";
pub const DEFAULT_TEMPLATE_FILE: &str = "header-complete.svg";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// 身分依序讀取這兩個變數，取第一個非空值
pub const IDENTITY_VARS: [&str; 2] = ["GITHUB_REPOSITORY_OWNER", "USERNAME"];
pub const TOKEN_VAR: &str = "GITHUB_TOKEN";

#[derive(Clone)]
pub struct HeaderConfig {
    pub username: String,
    pub token: String,
    pub api_endpoint: String,
    pub template_dir: String,
    pub template_file: String,
    pub timeout_secs: u64,
}

impl HeaderConfig {
    pub fn new(username: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            token: token.into(),
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            template_dir: DEFAULT_TEMPLATE_DIR.to_string(),
            template_file: DEFAULT_TEMPLATE_FILE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 以任意查找函數建構設定，測試時不必修改行程環境變數
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let username = IDENTITY_VARS
            .iter()
            .find_map(|key| non_empty(*key))
            .ok_or_else(|| HeaderError::MissingConfigError {
                field: IDENTITY_VARS.join(" or "),
            })?;

        let token = non_empty(TOKEN_VAR).ok_or_else(|| HeaderError::MissingConfigError {
            field: TOKEN_VAR.to_string(),
        })?;

        Ok(Self::new(username, token))
    }

    pub fn with_api_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.api_endpoint = endpoint.into();
        self
    }

    pub fn with_template(mut self, dir: impl Into<String>, file: impl Into<String>) -> Self {
        self.template_dir = dir.into();
        self.template_file = file.into();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl fmt::Debug for HeaderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeaderConfig")
            .field("username", &self.username)
            .field("token", &"<redacted>")
            .field("api_endpoint", &self.api_endpoint)
            .field("template_dir", &self.template_dir)
            .field("template_file", &self.template_file)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ConfigProvider for HeaderConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn username(&self) -> &str {
        &self.username
    }

    fn token(&self) -> &str {
        &self.token
    }

    fn template_dir(&self) -> &str {
        &self.template_dir
    }

    fn template_file(&self) -> &str {
        &self.template_file
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Validate for HeaderConfig {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::*;

        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_non_empty_string("username", &self.username)?;
        validate_secret(TOKEN_VAR, &self.token)?;
        validate_path("template_dir", &self.template_dir)?;
        validate_path("template_file", &self.template_file)?;
        validate_range("timeout_secs", self.timeout_secs, 1, 300)?;

        Ok(())
    }
}
