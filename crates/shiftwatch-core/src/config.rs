//! Configuration module for ShiftWatch.
//!
//! Provides typed configuration structs that map to the YAML configuration file,
//! with loading, validation, defaults, and a builder pattern for programmatic use.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{default_requirements, BreakPolicy, StaffingRequirement};

// ---------------------------------------------------------------------------
// Config struct with sub-sections
// ---------------------------------------------------------------------------

/// Top-level configuration for ShiftWatch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub staffing: StaffingConfig,
    pub breaks: BreakPolicy,
    pub logging: LoggingConfig,
}

/// Per-role staffing table checked for every scheduled day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffingConfig {
    /// Requirements in the order alerts should be reported.
    pub requirements: Vec<StaffingRequirement>,
}

/// Logging / tracing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: `trace`, `debug`, `info`, `warn`, or `error`.
    pub level: String,
}

// ---------------------------------------------------------------------------
// Config::load()
// ---------------------------------------------------------------------------

impl Config {
    /// Load configuration from a YAML file at `path`.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Try to load from `path`; fall back to [`Config::default`] on any error.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Platform-appropriate default path for the configuration file.
    ///
    /// Typically `$XDG_CONFIG_HOME/shiftwatch/config.yaml` on Linux.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("shiftwatch")
            .join("config.yaml")
    }

    /// The staffing table to hand to the detector.
    pub fn requirements(&self) -> &[StaffingRequirement] {
        &self.staffing.requirements
    }

    /// The break policy to hand to the detector.
    pub fn break_policy(&self) -> BreakPolicy {
        self.breaks.clone()
    }
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

impl Default for StaffingConfig {
    fn default() -> Self {
        Self {
            requirements: default_requirements(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Config::validate()
// ---------------------------------------------------------------------------

/// A single validation error found in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path to the offending field, e.g. `"staffing.requirements[1].min_staff"`.
    pub field: String,
    /// Human-readable explanation.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Valid values for `logging.level`.
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

impl Config {
    /// Validate the configuration and return all errors found.
    ///
    /// An empty vector means the configuration is valid.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        // --- staffing ---
        let mut seen = HashSet::new();
        for (i, req) in self.staffing.requirements.iter().enumerate() {
            if req.position.trim().is_empty() {
                errors.push(ValidationError {
                    field: format!("staffing.requirements[{i}].position"),
                    message: "must not be empty".into(),
                });
            } else if !seen.insert(req.position.as_str()) {
                errors.push(ValidationError {
                    field: format!("staffing.requirements[{i}].position"),
                    message: format!("duplicate position '{}'", req.position),
                });
            }
            if req.min_staff > req.max_staff {
                errors.push(ValidationError {
                    field: format!("staffing.requirements[{i}].min_staff"),
                    message: format!(
                        "min_staff ({}) must not exceed max_staff ({})",
                        req.min_staff, req.max_staff
                    ),
                });
            }
        }

        // --- breaks ---
        let threshold = self.breaks.max_hours_without_break;
        if threshold.is_nan() || threshold <= 0.0 {
            errors.push(ValidationError {
                field: "breaks.max_hours_without_break".into(),
                message: "must be greater than 0".into(),
            });
        }
        if self.breaks.required_break_minutes == 0 {
            errors.push(ValidationError {
                field: "breaks.required_break_minutes".into(),
                message: "must be greater than 0".into(),
            });
        }
        if self.breaks.note_keyword.trim().is_empty() {
            errors.push(ValidationError {
                field: "breaks.note_keyword".into(),
                message: "must not be empty".into(),
            });
        }

        // --- logging ---
        if !VALID_LOG_LEVELS.contains(&self.logging.level.as_str()) {
            errors.push(ValidationError {
                field: "logging.level".into(),
                message: format!(
                    "invalid level '{}'; valid options: {}",
                    self.logging.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            });
        }

        errors
    }
}

// ---------------------------------------------------------------------------
// ConfigBuilder
// ---------------------------------------------------------------------------

/// Builder for constructing a [`Config`] programmatically.
///
/// Starts from [`Config::default`] and allows selective overrides.
///
/// # Example
///
/// ```rust
/// use shiftwatch_core::config::ConfigBuilder;
/// use shiftwatch_core::domain::StaffingRequirement;
///
/// let config = ConfigBuilder::new()
///     .requirements(vec![StaffingRequirement::new("Host", 1, 1)])
///     .max_hours_without_break(5.0)
///     .logging_level("debug")
///     .build();
/// assert!(config.validate().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder initialised with [`Config::default`] values.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    // --- staffing ---

    pub fn requirements(mut self, requirements: Vec<StaffingRequirement>) -> Self {
        self.config.staffing.requirements = requirements;
        self
    }

    pub fn requirement(mut self, requirement: StaffingRequirement) -> Self {
        self.config.staffing.requirements.push(requirement);
        self
    }

    // --- breaks ---

    pub fn max_hours_without_break(mut self, hours: f64) -> Self {
        self.config.breaks.max_hours_without_break = hours;
        self
    }

    pub fn required_break_minutes(mut self, minutes: u32) -> Self {
        self.config.breaks.required_break_minutes = minutes;
        self
    }

    pub fn break_note_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.config.breaks.note_keyword = keyword.into();
        self
    }

    // --- logging ---

    pub fn logging_level(mut self, level: impl Into<String>) -> Self {
        self.config.logging.level = level.into();
        self
    }

    /// Consume the builder and return the finished [`Config`].
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    // -- Defaults --

    #[test]
    fn default_config_has_sensible_values() {
        let cfg = Config::default();
        let positions: Vec<&str> = cfg
            .requirements()
            .iter()
            .map(|r| r.position.as_str())
            .collect();
        assert_eq!(positions, ["Server", "Chef", "Bartender"]);
        assert_eq!(cfg.breaks.max_hours_without_break, 6.0);
        assert_eq!(cfg.breaks.required_break_minutes, 30);
        assert_eq!(cfg.breaks.note_keyword, "break");
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn default_config_passes_validation() {
        let errors = Config::default().validate();
        assert!(errors.is_empty(), "unexpected validation errors: {errors:?}");
    }

    #[test]
    fn default_path_ends_with_config_yaml() {
        let path = Config::default_path();
        assert!(path.ends_with("shiftwatch/config.yaml"));
    }

    // -- Loading --

    #[test]
    fn load_from_yaml_file() {
        let yaml = r#"
staffing:
  requirements:
    - position: Chef
      min_staff: 2
      max_staff: 3
    - position: Dishwasher
      min_staff: 1
      max_staff: 1
breaks:
  max_hours_without_break: 5.0
  required_break_minutes: 20
  note_keyword: pause
logging:
  level: debug
"#;
        let mut tmp = tempfile::NamedTempFile::new().expect("create temp file");
        tmp.write_all(yaml.as_bytes()).unwrap();
        tmp.flush().unwrap();

        let cfg = Config::load(tmp.path()).expect("load config");
        assert_eq!(cfg.requirements().len(), 2);
        assert_eq!(cfg.requirements()[0], StaffingRequirement::new("Chef", 2, 3));
        assert_eq!(cfg.requirements()[1].position, "Dishwasher");
        assert_eq!(cfg.breaks.max_hours_without_break, 5.0);
        assert_eq!(cfg.break_policy().required_break_minutes, 20);
        assert_eq!(cfg.break_policy().note_keyword, "pause");
        assert_eq!(cfg.logging.level, "debug");
    }

    #[test]
    fn load_fills_missing_sections_with_defaults() {
        let mut tmp = tempfile::NamedTempFile::new().expect("create temp file");
        tmp.write_all(b"logging:\n  level: warn\n").unwrap();
        tmp.flush().unwrap();

        let cfg = Config::load(tmp.path()).expect("load config");
        assert_eq!(cfg.logging.level, "warn");
        assert_eq!(cfg.requirements().len(), 3);
        assert_eq!(cfg.breaks, BreakPolicy::default());
    }

    #[test]
    fn load_or_default_returns_default_on_missing_file() {
        let cfg = Config::load_or_default(Path::new("/nonexistent/config.yaml"));
        assert_eq!(cfg.requirements().len(), 3);
    }

    #[test]
    fn load_returns_error_on_invalid_yaml() {
        let mut tmp = tempfile::NamedTempFile::new().expect("create temp file");
        tmp.write_all(b"not: [valid: yaml: {{{").unwrap();
        tmp.flush().unwrap();

        assert!(Config::load(tmp.path()).is_err());
    }

    // -- Validation --

    #[test]
    fn validate_catches_inverted_staffing_bounds() {
        let cfg = ConfigBuilder::new()
            .requirements(vec![StaffingRequirement::new("Chef", 3, 1)])
            .build();
        let errors = cfg.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "staffing.requirements[0].min_staff");
    }

    #[test]
    fn validate_catches_duplicate_and_blank_positions() {
        let cfg = ConfigBuilder::new()
            .requirements(vec![
                StaffingRequirement::new("Chef", 1, 2),
                StaffingRequirement::new("Chef", 1, 2),
                StaffingRequirement::new("", 0, 1),
            ])
            .build();
        let fields: Vec<String> = cfg.validate().into_iter().map(|e| e.field).collect();
        assert!(fields.contains(&"staffing.requirements[1].position".to_string()));
        assert!(fields.contains(&"staffing.requirements[2].position".to_string()));
    }

    #[test]
    fn validate_catches_bad_break_policy() {
        let cfg = ConfigBuilder::new()
            .max_hours_without_break(0.0)
            .required_break_minutes(0)
            .break_note_keyword(" ")
            .build();
        let fields: Vec<String> = cfg.validate().into_iter().map(|e| e.field).collect();
        assert!(fields.contains(&"breaks.max_hours_without_break".to_string()));
        assert!(fields.contains(&"breaks.required_break_minutes".to_string()));
        assert!(fields.contains(&"breaks.note_keyword".to_string()));
    }

    #[test]
    fn validate_catches_nan_break_threshold() {
        let cfg = ConfigBuilder::new().max_hours_without_break(f64::NAN).build();
        assert!(cfg
            .validate()
            .iter()
            .any(|e| e.field == "breaks.max_hours_without_break"));
    }

    #[test]
    fn validate_catches_invalid_log_level() {
        let cfg = ConfigBuilder::new().logging_level("verbose").build();
        let errors = cfg.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("verbose"));
        assert_eq!(
            errors[0].to_string(),
            "logging.level: invalid level 'verbose'; valid options: trace, debug, info, warn, error"
        );
    }

    // -- Builder --

    #[test]
    fn builder_appends_requirement() {
        let cfg = ConfigBuilder::new()
            .requirement(StaffingRequirement::new("Host", 1, 1))
            .build();
        assert_eq!(cfg.requirements().len(), 4);
        assert_eq!(cfg.requirements()[3].position, "Host");
    }
}
