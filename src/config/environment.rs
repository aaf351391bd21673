// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management for production deployment

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::external::SpoonacularClientConfig;
use recipe_core::constants::{defaults, session, spoonacular};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

/// Environment variable holding the provider API key
pub const SPOONACULAR_API_KEY: &str = "SPOONACULAR_API_KEY";

/// Environment type for cookie security and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe database configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseUrl {
    /// `SQLite` database with file path
    SQLite {
        /// Database file path
        path: PathBuf,
    },
    /// In-memory `SQLite` (for testing)
    Memory,
}

impl DatabaseUrl {
    /// Parse from string; anything that is not a `sqlite:` URL is treated as a file path
    #[must_use]
    pub fn parse_url(s: &str) -> Self {
        let path_str = s.strip_prefix("sqlite:").unwrap_or(s);
        if path_str == ":memory:" {
            Self::Memory
        } else {
            Self::SQLite {
                path: PathBuf::from(path_str.trim_start_matches("//")),
            }
        }
    }

    /// Convert to connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".to_owned(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::parse_url(defaults::DATABASE_URL)
    }
}

impl fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Session cookie and store settings
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Cookie name carrying the session id
    pub cookie_name: String,
    /// Add the `Secure` attribute to the session cookie
    pub secure_cookie: bool,
    /// Maximum number of live sessions kept in memory
    pub max_sessions: usize,
    /// Idle time after which a session is forgotten
    pub idle_timeout: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: session::COOKIE_NAME.to_owned(),
            secure_cookie: false,
            max_sessions: session::DEFAULT_MAX_SESSIONS,
            idle_timeout: Duration::from_secs(session::DEFAULT_IDLE_TIMEOUT_SECS),
        }
    }
}

/// Top-level server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind
    pub http_host: String,
    /// HTTP port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Database location
    pub database_url: DatabaseUrl,
    /// Provider client settings
    pub spoonacular: SpoonacularClientConfig,
    /// Session settings
    pub session: SessionConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` when `SPOONACULAR_API_KEY` is unset or blank and
    /// `ConfigInvalid` when a numeric or boolean variable cannot be parsed.
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// # Errors
    ///
    /// Same conditions as [`ServerConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(SPOONACULAR_API_KEY)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| AppError::config_missing(SPOONACULAR_API_KEY))?;

        let environment = lookup("ENVIRONMENT")
            .map(|value| Environment::from_str_or_default(&value))
            .unwrap_or_default();

        let spoonacular = SpoonacularClientConfig {
            api_key,
            base_url: lookup("SPOONACULAR_BASE_URL")
                .unwrap_or_else(|| spoonacular::DEFAULT_BASE_URL.to_owned()),
            timeout: Duration::from_secs(spoonacular::REQUEST_TIMEOUT_SECS),
        };

        let session = SessionConfig {
            cookie_name: session::COOKIE_NAME.to_owned(),
            secure_cookie: parse_or(
                &lookup,
                "SESSION_COOKIE_SECURE",
                environment.is_production(),
            )?,
            max_sessions: parse_or(
                &lookup,
                "SESSION_MAX_ENTRIES",
                session::DEFAULT_MAX_SESSIONS,
            )?,
            idle_timeout: Duration::from_secs(parse_or(
                &lookup,
                "SESSION_IDLE_TIMEOUT_SECS",
                session::DEFAULT_IDLE_TIMEOUT_SECS,
            )?),
        };

        Ok(Self {
            http_host: lookup("HTTP_HOST").unwrap_or_else(|| defaults::HTTP_HOST.to_owned()),
            http_port: parse_or(&lookup, "HTTP_PORT", defaults::HTTP_PORT)?,
            environment,
            database_url: lookup("DATABASE_URL")
                .map_or_else(DatabaseUrl::default, |url| DatabaseUrl::parse_url(&url)),
            spoonacular,
            session,
        })
    }

    /// Address the HTTP listener binds to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }

    /// One-line summary for startup logs (never includes the API key)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Recipe Book configuration: environment={}, bind={}, database={}, provider={}, session_idle={}s",
            self.environment,
            self.bind_address(),
            self.database_url,
            self.spoonacular.base_url,
            self.session.idle_timeout.as_secs()
        )
    }
}

/// Parse an optional variable, falling back to `default` when unset
fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> AppResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: fmt::Display,
{
    lookup(key).map_or(Ok(default), |raw| {
        raw.trim().parse().map_err(|e| {
            AppError::new(
                ErrorCode::ConfigInvalid,
                format!("Invalid {key} value '{raw}': {e}"),
            )
        })
    })
}
