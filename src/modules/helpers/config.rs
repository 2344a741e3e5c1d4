use std::env;
use std::time::Duration;

use dotenvy::dotenv;
use log::{warn, LevelFilter};

pub const DEFAULT_RESULTS_URL: &str = "https://www.supercrosslive.com/results/current/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_DATABASE_URL: &str = "moto-stats.db";
pub const DEFAULT_LOG_FILE: &str = "program.log";

/// Runtime settings, read from the environment (and `.env` when present).
#[derive(Debug, Clone)]
pub struct Settings {
    pub results_url: String,
    pub request_timeout: Duration,
    pub database_url: String,
    pub logging_level: LevelFilter,
    pub log_file: String,
}

impl Settings {
    /// # load settings
    /// read every setting from the environment, falling back to the defaults
    /// for anything unset or unparseable
    pub fn from_env() -> Settings {
        dotenv().ok();
        let defaults = Settings::default();

        let request_timeout = match env::var("REQUEST_TIMEOUT_SECS") {
            Ok(raw) => parse_timeout(&raw).unwrap_or_else(|| {
                warn!(target: "config", "Invalid REQUEST_TIMEOUT_SECS '{}', using {}", raw, DEFAULT_TIMEOUT_SECS);
                defaults.request_timeout
            }),
            Err(_) => defaults.request_timeout,
        };

        Settings {
            results_url: env::var("RESULTS_URL").unwrap_or(defaults.results_url),
            request_timeout,
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            logging_level: parse_level(&env::var("LOGGING_LEVEL").unwrap_or_default()),
            log_file: env::var("LOG_FILE").unwrap_or(defaults.log_file),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            results_url: DEFAULT_RESULTS_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            database_url: DEFAULT_DATABASE_URL.to_string(),
            logging_level: LevelFilter::Info,
            log_file: DEFAULT_LOG_FILE.to_string(),
        }
    }
}

/// a whole, positive number of seconds; a zero timeout would fail every request
pub fn parse_timeout(raw: &str) -> Option<Duration> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
        _ => None,
    }
}

pub fn parse_level(verbosity: &str) -> LevelFilter {
    match verbosity.trim().to_uppercase().as_str() {
        "OFF" => LevelFilter::Off,
        "ERROR" => LevelFilter::Error,
        "WARN" => LevelFilter::Warn,
        "DEBUG" => LevelFilter::Debug,
        "TRACE" => LevelFilter::Trace,
        // default to info
        _ => LevelFilter::Info,
    }
}
