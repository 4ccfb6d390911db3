use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    /// When unset the portal runs on the in-memory store.
    pub database_url: Option<String>,
    pub jwt_secret: String,
    pub public_rps: u32,
    pub admin_rps: u32,
    /// Key rate limits on `X-Forwarded-For`; set only behind a trusted proxy.
    pub trust_forwarded_for: bool,
    /// Staff member that new improvement requests are assigned to.
    pub admin_contact_email: Option<String>,
    pub cors_allowed_origins: Vec<String>,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_address: get_env("SERVER_ADDRESS")?,
            database_url: get_env_opt("DATABASE_URL"),
            jwt_secret: get_env("JWT_SECRET")?,
            public_rps: get_env_parse_or("PUBLIC_RPS", 20)?,
            admin_rps: get_env_parse_or("ADMIN_RPS", 50)?,
            trust_forwarded_for: get_env_parse_or("TRUST_FORWARDED_FOR", false)?,
            admin_contact_email: get_env_opt("ADMIN_CONTACT_EMAIL"),
            cors_allowed_origins: get_env_opt("CORS_ALLOWED_ORIGINS")
                .map(|raw| split_list(&raw))
                .unwrap_or_default(),
            log_format: match get_env_opt("LOG_FORMAT").as_deref() {
                Some("json") => LogFormat::Json,
                _ => LogFormat::Text,
            },
        })
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

fn get_env_opt(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match get_env_opt(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        None => Ok(default),
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> Result<&'static Config> {
    CONFIG
        .get()
        .ok_or_else(|| Error::Config("Configuration has not been initialized".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_lists_ignore_blank_entries() {
        assert_eq!(
            split_list(" https://a.example , ,https://b.example"),
            vec!["https://a.example".to_string(), "https://b.example".to_string()]
        );
    }
}
