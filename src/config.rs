//! # Account Configuration Module
//!
//! Resolves the storage account parameters from the process environment.
//! The access key is a secret: it is only ever read from the environment
//! (or a `.env` file loaded by the binary) and must never be logged or
//! passed on the command line of this tool itself.

use crate::errors::{ConfigError, ConfigResult};

pub const AZURE_SUBSCRIPTION_ID: &str = "AZURE_SUBSCRIPTION_ID";
pub const AZURE_STORAGE_ACCOUNT: &str = "AZURE_STORAGE_ACCOUNT";
pub const AZURE_STORAGE_KEY: &str = "AZURE_STORAGE_KEY";

#[derive(Clone)]
pub enum Credentials {
    AccessKey(String),
}

/// Parameters identifying the storage account that both external calls
/// operate on.
#[derive(Clone)]
pub struct Config {
    pub subscription: String,
    pub account: String,
    pub credentials: Credentials,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// All three variables are required. A variable that is unset or
    /// blank fails resolution, naming the variable; nothing is invoked
    /// against the account in that case.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError::MissingVar`] for the first unset or
    /// blank variable.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let subscription = required(&lookup, AZURE_SUBSCRIPTION_ID)?;
        let account = required(&lookup, AZURE_STORAGE_ACCOUNT)?;
        let access_key = required(&lookup, AZURE_STORAGE_KEY)?;

        Ok(Self {
            subscription,
            account,
            credentials: Credentials::AccessKey(access_key),
        })
    }
}

fn required<F>(lookup: &F, name: &'static str) -> ConfigResult<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .filter(|value| !value.trim().is_empty())
        .ok_or(ConfigError::MissingVar(name))
}
