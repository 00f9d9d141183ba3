use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

const DEFAULT_MAILBOX_CAPACITY: usize = 100;

/// Runtime settings, read from the environment once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Buffer size of every record store's request channel.
    pub mailbox_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mailbox_capacity: DEFAULT_MAILBOX_CAPACITY,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mailbox_capacity = try_load(&lookup, "SIM_MAILBOX_CAPACITY", DEFAULT_MAILBOX_CAPACITY);
        if mailbox_capacity == 0 {
            warn!("SIM_MAILBOX_CAPACITY must be positive, using default: {DEFAULT_MAILBOX_CAPACITY}");
            return Self::default();
        }
        Self { mailbox_capacity }
    }
}

fn try_load<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
            default
        }),
        None => {
            info!("{key} not set, using default: {default}");
            default
        }
    }
}
