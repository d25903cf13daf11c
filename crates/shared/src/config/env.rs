use anyhow::{Context, Result};
use std::str::FromStr;

/// `true` for `"true"` or `"1"`, `false` for anything else or when unset.
pub fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|val| val == "true" || val == "1")
        .unwrap_or(false)
}

pub fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

pub fn env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .parse::<T>()
            .with_context(|| format!("{name} has an invalid value: '{raw}'")),
        Err(_) => Ok(default),
    }
}
