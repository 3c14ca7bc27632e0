#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("config.missing: {0} must be set")]
    Missing(&'static str),
    #[error("config.invalid: {key}={value}")]
    Invalid { key: &'static str, value: String },
}
