pub const DEFAULT_LOG_COMPONENT: &str = "handler_adapter";
pub const LOG_COMPONENT_VAR: &str = "HANDLER_LOG_COMPONENT";
pub const LOG_SUCCESSES_VAR: &str = "HANDLER_LOG_SUCCESSES";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub component: String,
    pub log_successes: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            component: DEFAULT_LOG_COMPONENT.to_string(),
            log_successes: false,
        }
    }
}

impl HostConfig {
    pub fn from_env() -> Result<Self, HostConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Blank values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, HostConfigError> {
        let defaults = Self::default();

        let component = lookup(LOG_COMPONENT_VAR)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or(defaults.component);

        let log_successes = match lookup(LOG_SUCCESSES_VAR) {
            Some(value) if !value.trim().is_empty() => parse_flag(LOG_SUCCESSES_VAR, &value)?,
            _ => defaults.log_successes,
        };

        Ok(Self {
            component,
            log_successes,
        })
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, HostConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(HostConfigError::new(format!(
            "{key} must be one of true, false, 1, 0 (got '{other}')"
        ))),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfigError {
    message: String,
}

impl HostConfigError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for HostConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for HostConfigError {}
