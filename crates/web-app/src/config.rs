use std::str::FromStr;

use log::LevelFilter;
use muscle_atlas_domain::InviteExpiryPolicy;

const SUPABASE_URL: &str = "MUSCLE_ATLAS_SUPABASE_URL";
const SUPABASE_ANON_KEY: &str = "MUSCLE_ATLAS_SUPABASE_ANON_KEY";
const INVITE_EXPIRY: &str = "MUSCLE_ATLAS_INVITE_EXPIRY";
const LOG_LEVEL: &str = "MUSCLE_ATLAS_LOG_LEVEL";

/// Settings fixed at build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub invite_expiry: InviteExpiryPolicy,
    pub log_level: LevelFilter,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
    #[error("invalid value for {variable}: {value}")]
    Invalid {
        variable: &'static str,
        value: String,
    },
}

impl Config {
    /// Reads the environment variables that were set when the crate was compiled.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("MUSCLE_ATLAS_SUPABASE_URL"),
            option_env!("MUSCLE_ATLAS_SUPABASE_ANON_KEY"),
            option_env!("MUSCLE_ATLAS_INVITE_EXPIRY"),
            option_env!("MUSCLE_ATLAS_LOG_LEVEL"),
        )
    }

    /// Empty values count as not set.
    pub fn from_values(
        supabase_url: Option<&str>,
        supabase_anon_key: Option<&str>,
        invite_expiry: Option<&str>,
        log_level: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let supabase_url = non_empty(supabase_url)
            .ok_or(ConfigError::Missing(SUPABASE_URL))?
            .trim_end_matches('/')
            .to_string();
        let supabase_anon_key = non_empty(supabase_anon_key)
            .ok_or(ConfigError::Missing(SUPABASE_ANON_KEY))?
            .to_string();

        let invite_expiry = match non_empty(invite_expiry) {
            None => InviteExpiryPolicy::default(),
            Some(value) if value.eq_ignore_ascii_case("ignore") => InviteExpiryPolicy::Ignore,
            Some(value) if value.eq_ignore_ascii_case("reject") => InviteExpiryPolicy::Reject,
            Some(value) => {
                return Err(ConfigError::Invalid {
                    variable: INVITE_EXPIRY,
                    value: value.to_string(),
                });
            }
        };

        let log_level = match non_empty(log_level) {
            None => LevelFilter::Info,
            Some(value) => LevelFilter::from_str(value).map_err(|_| ConfigError::Invalid {
                variable: LOG_LEVEL,
                value: value.to_string(),
            })?,
        };

        Ok(Self {
            supabase_url,
            supabase_anon_key,
            invite_expiry,
            log_level,
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
