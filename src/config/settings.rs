//! Validation of fully merged settings

use crate::error::{DocError, Result};
use crate::models::config::Settings;

/// Settings validator for ensuring configuration is valid
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate settings and return errors if invalid
    pub fn validate(settings: &Settings) -> Result<()> {
        if !settings.scan_path.exists() {
            return Err(DocError::invalid_path(&settings.scan_path));
        }

        if let Some(package) = &settings.package {
            let dir = settings.scan_path.join(package);
            if !dir.is_dir() {
                return Err(DocError::invalid_path(dir));
            }
        }

        for pattern in &settings.exclude_patterns {
            glob::Pattern::new(pattern)?;
        }

        if settings.max_depth == Some(0) {
            return Err(DocError::config_error("Max depth must be at least 1"));
        }

        if settings.jobs == Some(0) {
            return Err(DocError::config_error("Jobs must be at least 1"));
        }

        if settings.watch_interval_secs == 0 {
            return Err(DocError::config_error("Watch interval must be at least 1 second"));
        }

        if settings.output_dir.is_file() {
            return Err(DocError::config_error(format!(
                "Output directory {} is an existing file",
                settings.output_dir.display()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn base() -> (tempfile::TempDir, Settings) {
        let dir = tempdir().unwrap();
        let settings = Settings {
            scan_path: dir.path().to_path_buf(),
            output_dir: dir.path().join("docs"),
            ..Default::default()
        };
        (dir, settings)
    }

    #[test]
    fn test_valid_settings() {
        let (_dir, settings) = base();
        assert!(SettingsValidator::validate(&settings).is_ok());
    }

    #[test]
    fn test_rejections() {
        let (dir, settings) = base();

        let missing = Settings {
            scan_path: dir.path().join("missing"),
            ..settings.clone()
        };
        assert!(matches!(
            SettingsValidator::validate(&missing).unwrap_err(),
            DocError::InvalidPath { .. }
        ));

        let no_package = Settings {
            package: Some("api".to_string()),
            ..settings.clone()
        };
        assert!(matches!(
            SettingsValidator::validate(&no_package).unwrap_err(),
            DocError::InvalidPath { .. }
        ));

        let bad_glob = Settings {
            exclude_patterns: vec!["[".to_string()],
            ..settings.clone()
        };
        assert!(matches!(
            SettingsValidator::validate(&bad_glob).unwrap_err(),
            DocError::GlobPattern { .. }
        ));

        for invalid in [
            Settings {
                max_depth: Some(0),
                ..settings.clone()
            },
            Settings {
                jobs: Some(0),
                ..settings.clone()
            },
            Settings {
                watch_interval_secs: 0,
                ..settings.clone()
            },
        ] {
            assert!(matches!(
                SettingsValidator::validate(&invalid).unwrap_err(),
                DocError::Config { .. }
            ));
        }

        std::fs::write(dir.path().join("taken"), "x").unwrap();
        let file_output = Settings {
            output_dir: dir.path().join("taken"),
            ..settings
        };
        assert!(SettingsValidator::validate(&file_output).is_err());
    }
}
