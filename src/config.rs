use bank::{AccountTypePolicy, BankConfig, Money, Result};

use std::env;

use anyhow::Context;

use log::LevelFilter;
use simple_logger::SimpleLogger;

use thiserror::Error;

const BANK_NAME: &str = "BANK_NAME";
const SAVINGS_DAILY_LIMIT: &str = "BANK_SAVINGS_DAILY_LIMIT";
const LENIENT_ACCOUNT_TYPES: &str = "BANK_LENIENT_ACCOUNT_TYPES";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1:?}")]
    InvalidValue(&'static str, String),
}

pub fn configure_app() -> Result {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()?;

    return Ok(());
}

pub fn load_bank_config() -> Result<BankConfig> {
    bank_config_from(|key| env::var(key).ok())
}

/// Builds a `BankConfig` from defaults, overridden by whichever variables `lookup` finds
fn bank_config_from(lookup: impl Fn(&str) -> Option<String>) -> Result<BankConfig> {
    let mut config = BankConfig::default();

    if let Some(name) = lookup(BANK_NAME) {
        let name = name.trim();

        if name.is_empty() {
            Err(ConfigError::InvalidValue(BANK_NAME, name.to_string()))?
        }

        config.name = name.to_string();
    }

    if let Some(limit) = lookup(SAVINGS_DAILY_LIMIT) {
        let parsed = Money::parse(&limit)
            .with_context(|| ConfigError::InvalidValue(SAVINGS_DAILY_LIMIT, limit.clone()))?;

        if parsed.is_negative() {
            Err(ConfigError::InvalidValue(SAVINGS_DAILY_LIMIT, limit))?
        }

        config.savings_daily_limit = parsed;
    }

    if let Some(flag) = lookup(LENIENT_ACCOUNT_TYPES) {
        config.account_type_policy = match flag.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => AccountTypePolicy::DefaultToCurrent,
            "" | "0" | "false" | "no" => AccountTypePolicy::Strict,
            _ => Err(ConfigError::InvalidValue(LENIENT_ACCOUNT_TYPES, flag.clone()))?,
        };
    }

    log::debug!("Loaded bank configuration: {config:?}");

    Ok(config)
}
