use crate::config::types::{AnalyzerConfig, Config, UserAgentConfig};
use crate::ConfigError;

const MAX_TIMEOUT_SECS: u64 = 120;
const MAX_WORKERS: usize = 100;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_analyzer_config(&config.analyzer)?;
    validate_user_agent_config(&config.user_agent)?;
    Ok(())
}

/// Validates analyzer configuration
fn validate_analyzer_config(config: &AnalyzerConfig) -> Result<(), ConfigError> {
    validate_timeout("fetch-timeout-secs", config.fetch_timeout_secs)?;
    validate_timeout("probe-timeout-secs", config.probe_timeout_secs)?;

    if config.workers < 1 || config.workers > MAX_WORKERS {
        return Err(ConfigError::Validation(format!(
            "workers must be between 1 and {}, got {}",
            MAX_WORKERS, config.workers
        )));
    }

    Ok(())
}

fn validate_timeout(name: &str, secs: u64) -> Result<(), ConfigError> {
    if secs < 1 || secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::Validation(format!(
            "{} must be between 1 and {}, got {}",
            name, MAX_TIMEOUT_SECS, secs
        )));
    }
    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    if config.name.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent name cannot be empty".to_string(),
        ));
    }

    if !config.name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(ConfigError::Validation(format!(
            "user-agent name must contain only alphanumeric characters and hyphens, got '{}'",
            config.name
        )));
    }

    if config.version.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent version cannot be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_workers() {
        let mut config = AnalyzerConfig::default();
        config.workers = 0;
        assert!(validate_analyzer_config(&config).is_err());
        config.workers = 101;
        assert!(validate_analyzer_config(&config).is_err());
        config.workers = 100;
        assert!(validate_analyzer_config(&config).is_ok());
    }

    #[test]
    fn test_validate_timeouts() {
        assert!(validate_timeout("t", 0).is_err());
        assert!(validate_timeout("t", 1).is_ok());
        assert!(validate_timeout("t", 120).is_ok());
        assert!(validate_timeout("t", 121).is_err());
    }

    #[test]
    fn test_validate_user_agent() {
        let mut config = UserAgentConfig::default();
        assert!(validate_user_agent_config(&config).is_ok());

        config.name = "bad name".to_string();
        assert!(validate_user_agent_config(&config).is_err());

        config.name = String::new();
        assert!(validate_user_agent_config(&config).is_err());

        config.name = "pagé-scope".to_string();
        assert!(validate_user_agent_config(&config).is_err());

        config.name = "ok-name".to_string();
        config.version = String::new();
        assert!(validate_user_agent_config(&config).is_err());
    }
}
