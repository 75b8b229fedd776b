use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_SSLMODE: &str = "disable";

pub struct Config {
    pub database_url: String,
    pub port: u16,
}

impl Config {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// `DATABASE_URL` takes precedence; otherwise the Postgres URL is assembled from
    /// `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD`, `DB_NAME` and the optional
    /// `DB_SSLMODE`. `PORT` selects the HTTP port and defaults to 8080.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, or `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required values present and valid
    /// - `Err(AppError::ConfigErr)` - A required variable is missing or malformed
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = match lookup("DATABASE_URL") {
            Some(url) => url,
            None => postgres_url(&lookup)?,
        };

        let port = match lookup("PORT") {
            Some(value) => parse_port("PORT", &value)?,
            None => DEFAULT_PORT,
        };

        Ok(Self { database_url, port })
    }
}

fn require<F>(lookup: &F, key: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
}

fn parse_port(name: &str, value: &str) -> Result<u16, ConfigError> {
    value.parse::<u16>().map_err(|e| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: e.to_string(),
    })
}

fn invalid(name: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: reason.into(),
    }
}

/// Assembles a Postgres connection URL, percent-encoding credentials.
fn postgres_url<F>(lookup: &F) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let host = require(lookup, "DB_HOST")?;
    let port = parse_port("DB_PORT", &require(lookup, "DB_PORT")?)?;
    let user = require(lookup, "DB_USER")?;
    let password = require(lookup, "DB_PASSWORD")?;
    let dbname = require(lookup, "DB_NAME")?;
    let sslmode = lookup("DB_SSLMODE").unwrap_or_else(|| DEFAULT_SSLMODE.to_string());

    let mut url = Url::parse("postgres://localhost").map_err(|e| invalid("DB_HOST", e.to_string()))?;
    url.set_host(Some(&host))
        .map_err(|e| invalid("DB_HOST", e.to_string()))?;
    url.set_port(Some(port))
        .map_err(|_| invalid("DB_PORT", "cannot be used with this host"))?;
    url.set_username(&user)
        .map_err(|_| invalid("DB_USER", "cannot be used with this host"))?;
    url.set_password(Some(&password))
        .map_err(|_| invalid("DB_PASSWORD", "cannot be used with this host"))?;
    url.set_path(&format!("/{}", dbname));
    url.query_pairs_mut().append_pair("sslmode", &sslmode);

    Ok(url.into())
}
