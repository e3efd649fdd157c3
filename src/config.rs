use anyhow::Result;
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub data_dir: PathBuf,
    pub gemini: GeminiConfig,
    pub quota: QuotaConfig,
}

/// Connection settings for the hosted text model.
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout_seconds: u64,
}

/// Daily request cap applied by the quota middleware.
#[derive(Debug, Clone, Deserialize)]
pub struct QuotaConfig {
    pub enabled: bool,
    pub daily_limit: u64,
    /// Let requests through uncounted when the usage file cannot be read.
    pub fail_open: bool,
    /// Attach `Access-Control-Allow-*: *` to 429 responses.
    pub permissive_cors: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()?,
            allowed_origins: env::var("ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:5173".to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            data_dir: env::var("DATA_DIR")
                .unwrap_or_else(|_| "data".to_string())
                .into(),
            gemini: GeminiConfig {
                api_key: env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty()),
                model: env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-pro".to_string()),
                base_url: env::var("GEMINI_API_URL").unwrap_or_else(|_| {
                    "https://generativelanguage.googleapis.com/v1beta".to_string()
                }),
                timeout_seconds: env::var("MODEL_TIMEOUT_SECONDS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()?,
            },
            quota: QuotaConfig {
                enabled: env_flag("ENABLE_DAILY_LIMIT", false),
                daily_limit: env::var("DAILY_REQUEST_LIMIT")
                    .unwrap_or_else(|_| "100".to_string())
                    .parse()?,
                fail_open: env_flag("QUOTA_FAIL_OPEN", false),
                permissive_cors: env_flag("QUOTA_PERMISSIVE_CORS", true),
            },
        })
    }

    pub fn usage_file(&self) -> PathBuf {
        self.data_dir.join("usage.json")
    }

    pub fn feedback_file(&self) -> PathBuf {
        self.data_dir.join("feedback.json")
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn env_flag(name: &str, default: bool) -> bool {
    match env::var(name) {
        Ok(value) => value.trim().eq_ignore_ascii_case("true"),
        Err(_) => default,
    }
}
