use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::skills::matcher::MatcherKind;

/// Application configuration loaded from environment variables.
/// Every variable has a default; invalid values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub skills_path: PathBuf,
    pub skill_matcher: MatcherKind,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "8000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            skills_path: PathBuf::from(env_or("SKILLS_PATH", "skills.json")),
            skill_matcher: env_or("SKILL_MATCHER", MatcherKind::default().as_str())
                .parse::<MatcherKind>()
                .context("SKILL_MATCHER must be 'substring' or 'phrase'")?,
            max_upload_bytes: env_or("MAX_UPLOAD_BYTES", "10485760")
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
impl Config {
    /// Defaults without touching the process environment.
    pub fn for_tests() -> Self {
        Config {
            port: 0,
            rust_log: "debug".to_string(),
            skills_path: PathBuf::from("skills.json"),
            skill_matcher: MatcherKind::Substring,
            max_upload_bytes: 1024 * 1024,
        }
    }
}
