use crate::error::ConfigError;
use std::env;

/// DynamoDB table holding user records
pub const TABLE_NAME: &str = "TABLE_NAME";

/// Read the users table name. Called once from `main`, before the runtime starts.
pub fn table_name() -> Result<String, ConfigError> {
    required_env(TABLE_NAME)
}

pub fn required_env(key: &'static str) -> Result<String, ConfigError> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingEnv(key)),
    }
}
