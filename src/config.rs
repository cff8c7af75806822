//! Configuration loaded from the environment (and an optional `.env` file)

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::error::{Error, Result};

pub const DEFAULT_OPENAI_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4-turbo-preview";
pub const DEFAULT_SHARE_ORIGIN: &str = "http://localhost:8080";
pub const DEFAULT_GENERATION_DELAY: Duration = Duration::from_millis(3000);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Loads `.env` once; later calls are no-ops.
pub fn load_dotenv() {
    dotenv::dotenv().ok();
}

fn var(name: &str) -> Option<String> {
    env::var(name).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn required(name: &str) -> Result<String> {
    var(name).ok_or_else(|| Error::config(format!("{} environment variable not found", name)))
}

/// Connection settings for the hosted table store
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub url: Url,
    pub anon_key: String,
    /// Bearer token of the signed-in session, if the store enforces row-level security
    pub access_token: Option<String>,
    pub request_timeout: Option<Duration>,
}

impl StoreConfig {
    /// Creates a new configuration, validating the URL.
    pub fn new(url: &str, anon_key: &str) -> Result<Self> {
        let url = Url::parse(url)?;
        if anon_key.trim().is_empty() {
            return Err(Error::config("anon key cannot be empty"));
        }
        Ok(Self {
            url,
            anon_key: anon_key.to_string(),
            access_token: None,
            request_timeout: Some(DEFAULT_REQUEST_TIMEOUT),
        })
    }

    /// `SUPABASE_URL` and `SUPABASE_ANON_KEY` are required; `SUPABASE_ACCESS_TOKEN` is optional.
    pub fn from_env() -> Result<Self> {
        let url = required("SUPABASE_URL")?;
        let anon_key = required("SUPABASE_ANON_KEY")?;
        let config = Self::new(&url, &anon_key)?;
        Ok(match var("SUPABASE_ACCESS_TOKEN") {
            Some(token) => config.with_access_token(&token),
            None => config,
        })
    }

    /// Set the session bearer token
    pub fn with_access_token(mut self, token: &str) -> Self {
        self.access_token = Some(token.to_string());
        self
    }

    /// Set the request timeout
    pub fn with_request_timeout(mut self, value: Option<Duration>) -> Self {
        self.request_timeout = value;
        self
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> String {
        self.url.as_str().trim_end_matches('/').to_string()
    }
}

/// Settings for the chat-completion endpoint that writes brand narratives
#[derive(Debug, Clone)]
pub struct NarrativeConfig {
    pub api_base: String,
    pub api_key: String,
    pub model: String,
    pub request_timeout: Option<Duration>,
}

impl NarrativeConfig {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_base: DEFAULT_OPENAI_API_BASE.to_string(),
            api_key: api_key.to_string(),
            model: DEFAULT_OPENAI_MODEL.to_string(),
            request_timeout: Some(DEFAULT_REQUEST_TIMEOUT),
        }
    }

    /// `None` when `OPENAI_API_KEY` is unset, which turns narratives off.
    pub fn from_env() -> Option<Self> {
        let api_key = var("OPENAI_API_KEY")?;
        let mut config = Self::new(&api_key);
        if let Some(base) = var("OPENAI_API_BASE") {
            config = config.with_api_base(&base);
        }
        if let Some(model) = var("OPENAI_MODEL") {
            config = config.with_model(&model);
        }
        Some(config)
    }

    /// Set the API base URL
    pub fn with_api_base(mut self, value: &str) -> Self {
        self.api_base = value.trim_end_matches('/').to_string();
        self
    }

    /// Set the model identifier
    pub fn with_model(mut self, value: &str) -> Self {
        self.model = value.to_string();
        self
    }

    /// Set the request timeout
    pub fn with_request_timeout(mut self, value: Option<Duration>) -> Self {
        self.request_timeout = value;
        self
    }
}

/// Local behavior of the application
#[derive(Debug, Clone)]
pub struct AppOptions {
    /// JSON file holding recent generations
    pub history_path: PathBuf,
    /// Origin used to build share links
    pub share_origin: String,
    /// Simulated latency before a generation starts
    pub generation_delay: Duration,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            history_path: default_history_path(),
            share_origin: DEFAULT_SHARE_ORIGIN.to_string(),
            generation_delay: DEFAULT_GENERATION_DELAY,
        }
    }
}

impl AppOptions {
    pub fn from_env() -> Result<Self> {
        let mut options = Self::default();
        if let Some(path) = var("BRANDSMITH_HISTORY_PATH") {
            options = options.with_history_path(PathBuf::from(path));
        }
        if let Some(origin) = var("BRANDSMITH_SHARE_ORIGIN") {
            options = options.with_share_origin(&origin);
        }
        if let Some(delay) = var("BRANDSMITH_GENERATION_DELAY_MS") {
            let millis = delay.parse::<u64>().map_err(|_| {
                Error::config(format!("BRANDSMITH_GENERATION_DELAY_MS is not a number: {}", delay))
            })?;
            options = options.with_generation_delay(Duration::from_millis(millis));
        }
        Ok(options)
    }

    /// Set the history file
    pub fn with_history_path(mut self, value: PathBuf) -> Self {
        self.history_path = value;
        self
    }

    /// Set the share-link origin
    pub fn with_share_origin(mut self, value: &str) -> Self {
        self.share_origin = value.trim_end_matches('/').to_string();
        self
    }

    /// Set the simulated generation delay
    pub fn with_generation_delay(mut self, value: Duration) -> Self {
        self.generation_delay = value;
        self
    }
}

fn default_history_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(env::temp_dir)
        .join("brandsmith")
        .join("recent_generations.json")
}

/// Build the shared HTTP client
pub(crate) fn http_client(timeout: Option<Duration>) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}
