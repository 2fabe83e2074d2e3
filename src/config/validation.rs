use super::Config;
use crate::constants::transition::MAX_DURATION_MS;
use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Transition duration must be positive and at most 10 seconds
/// - Swipe minimum distance must be a finite, non-negative number
/// - Tap zone fraction must lie in (0, 0.5] so the two zones never overlap
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    if config.transition_ms == 0 {
        return Err(AppError::config_error(
            "Transition duration must be greater than zero",
        ));
    }
    if config.transition_ms > MAX_DURATION_MS {
        return Err(AppError::config_error(format!(
            "Transition duration {} ms exceeds the maximum of {MAX_DURATION_MS} ms",
            config.transition_ms
        )));
    }

    if !config.swipe_min_distance.is_finite() || config.swipe_min_distance < 0.0 {
        return Err(AppError::config_error(
            "Swipe minimum distance must be a non-negative number",
        ));
    }

    if !(config.tap_zone_fraction > 0.0 && config.tap_zone_fraction <= 0.5) {
        return Err(AppError::config_error(
            "Tap zone fraction must be greater than 0 and at most 0.5",
        ));
    }

    if let Some(log_path) = &config.log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
