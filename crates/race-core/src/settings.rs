//! Global race settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub rules: RuleSettings,
    pub segments: SegmentSettings,
    pub junk: JunkSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RuleSettings {
    pub max_hearts: u32,
    pub chars_per_word: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SegmentSettings {
    pub base_time_limit: f64,
    pub time_limit_step: f64,
    pub min_time_limit: f64,
    pub segments_per_difficulty: u32,
    pub max_difficulty: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JunkSettings {
    pub alphabet: String,
}

impl SegmentSettings {
    /// Difficulty rises by one every `segments_per_difficulty` segments,
    /// starting at 1 and capped at `max_difficulty`.
    pub fn difficulty_for(&self, index: u32) -> u32 {
        (index / self.segments_per_difficulty + 1).min(self.max_difficulty)
    }

    /// Seconds allotted to the segment at `index`. Never below `min_time_limit`.
    pub fn time_limit_for(&self, index: u32) -> f64 {
        (self.base_time_limit - f64::from(index) * self.time_limit_step).max(self.min_time_limit)
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_positive {
        ($section:ident . $field:ident) => {
            if s.$section.$field == 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        };
    }
    macro_rules! check_positive_f64 {
        ($section:ident . $field:ident) => {
            if !(s.$section.$field > 0.0) {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        };
    }

    check_positive!(rules.max_hearts);
    check_positive!(rules.chars_per_word);
    check_positive!(segments.segments_per_difficulty);
    check_positive!(segments.max_difficulty);

    check_positive_f64!(segments.base_time_limit);
    check_positive_f64!(segments.min_time_limit);
    if s.segments.time_limit_step < 0.0 {
        return Err(SettingsError::InvalidValue {
            field: "segments.time_limit_step".to_string(),
            reason: "must be non-negative".to_string(),
        });
    }
    if s.segments.min_time_limit > s.segments.base_time_limit {
        return Err(SettingsError::InvalidValue {
            field: "segments.min_time_limit".to_string(),
            reason: "must not exceed segments.base_time_limit".to_string(),
        });
    }

    if s.junk.alphabet.is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "junk.alphabet".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"
[rules]
max_hearts = 3
chars_per_word = 4

[segments]
base_time_limit = 20.0
time_limit_step = 2.0
min_time_limit = 8.0
segments_per_difficulty = 2
max_difficulty = 4

[junk]
alphabet = "%&"
"#;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.rules.max_hearts, 5);
        assert_eq!(s.rules.chars_per_word, 5);
        assert!((s.segments.base_time_limit - 30.0).abs() < f64::EPSILON);
        assert!((s.segments.time_limit_step - 1.5).abs() < f64::EPSILON);
        assert!((s.segments.min_time_limit - 10.0).abs() < f64::EPSILON);
        assert_eq!(s.segments.segments_per_difficulty, 3);
        assert_eq!(s.segments.max_difficulty, 5);
        assert_eq!(s.junk.alphabet, "0123456789-/:;()$&@\".,?!'");
    }

    #[test]
    fn parse_valid_custom_toml() {
        let s = parse_settings_toml(VALID).unwrap();
        assert_eq!(s.rules.max_hearts, 3);
        assert_eq!(s.segments.max_difficulty, 4);
        assert_eq!(s.junk.alphabet, "%&");
    }

    #[test]
    fn error_zero_hearts() {
        let toml = VALID.replace("max_hearts = 3", "max_hearts = 0");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(
            matches!(err, SettingsError::InvalidValue { ref field, .. } if field == "rules.max_hearts")
        );
    }

    #[test]
    fn error_min_above_base() {
        let toml = VALID.replace("min_time_limit = 8.0", "min_time_limit = 25.0");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(
            matches!(err, SettingsError::InvalidValue { ref field, .. } if field == "segments.min_time_limit")
        );
    }

    #[test]
    fn error_empty_alphabet() {
        let toml = VALID.replace("alphabet = \"%&\"", "alphabet = \"\"");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
    }

    #[test]
    fn error_missing_section() {
        let err = parse_settings_toml("[rules]\nmax_hearts = 5\nchars_per_word = 5\n").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn difficulty_curve() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        let curve: Vec<u32> = (0..15).map(|i| s.segments.difficulty_for(i)).collect();
        assert_eq!(curve, vec![1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5, 5]);
        assert_eq!(s.segments.difficulty_for(100), 5);
    }

    #[test]
    fn time_limit_curve() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert!((s.segments.time_limit_for(0) - 30.0).abs() < f64::EPSILON);
        assert!((s.segments.time_limit_for(4) - 24.0).abs() < f64::EPSILON);
        // 30 - 14 * 1.5 = 9 → clamped
        assert!((s.segments.time_limit_for(14) - 10.0).abs() < f64::EPSILON);
    }
}
