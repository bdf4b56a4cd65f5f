use crate::constants::MAX_HTTP_TIMEOUT_SECONDS;
use crate::error::AppError;

/// Validates the configuration settings
///
/// # Validation Rules
/// - HTTP timeout must be between 1 and `MAX_HTTP_TIMEOUT_SECONDS`
/// - User agent cannot be blank
/// - If log file path is provided, it cannot be blank
pub fn validate_config(
    http_timeout_seconds: u64,
    user_agent: &str,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if http_timeout_seconds == 0 || http_timeout_seconds > MAX_HTTP_TIMEOUT_SECONDS {
        return Err(AppError::config_error(format!(
            "HTTP timeout must be between 1 and {MAX_HTTP_TIMEOUT_SECONDS} seconds, got {http_timeout_seconds}"
        )));
    }

    if user_agent.trim().is_empty() {
        return Err(AppError::config_error("User agent cannot be empty"));
    }

    if let Some(log_path) = log_file_path
        && log_path.trim().is_empty()
    {
        return Err(AppError::config_error("Log file path cannot be empty"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        assert!(validate_config(30, "namebuster/0.3.0", &None).is_ok());
        assert!(validate_config(1, "ua", &Some("/tmp/nb.log".to_string())).is_ok());
        assert!(validate_config(MAX_HTTP_TIMEOUT_SECONDS, "ua", &None).is_ok());
    }

    #[test]
    fn test_timeout_out_of_range() {
        assert!(matches!(
            validate_config(0, "ua", &None),
            Err(AppError::Config(_))
        ));
        assert!(validate_config(MAX_HTTP_TIMEOUT_SECONDS + 1, "ua", &None).is_err());
    }

    #[test]
    fn test_blank_user_agent() {
        assert!(validate_config(30, "  ", &None).is_err());
    }

    #[test]
    fn test_blank_log_file_path() {
        assert!(validate_config(30, "ua", &Some(String::new())).is_err());
    }
}
