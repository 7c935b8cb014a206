use serde::{de::Deserializer, Deserialize, Serialize};
use std::fmt;

use activity_domain::{ReferenceData, DEFAULT_COUNTRY_CODE};

use crate::ConfigError;

/// Keys accepted by [`Config::set`], in display order.
pub const CONFIG_KEYS: [&str; 4] = [
    "default_country_code",
    "ui_color_enabled",
    "plain_output",
    "sink",
];

/// Preferences for the activity form shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_country_code_value")]
    pub default_country_code: String,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    #[serde(default)]
    pub plain_output: bool,
    #[serde(default)]
    pub sink: SinkKind,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_country_code: Self::default_country_code_value(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            plain_output: false,
            sink: SinkKind::default(),
        }
    }
}

impl Config {
    pub fn default_country_code_value() -> String {
        DEFAULT_COUNTRY_CODE.into()
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    /// Checks values that serde alone cannot vouch for.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if ReferenceData::standard()
            .country(&self.default_country_code)
            .is_none()
        {
            return Err(ConfigError::Invalid(format!(
                "unknown country code `{}`",
                self.default_country_code
            )));
        }
        Ok(())
    }

    /// Updates one preference from its textual form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "default_country_code" => {
                let entry = ReferenceData::standard().country(value).ok_or_else(|| {
                    ConfigError::Invalid(format!("unknown country code `{}`", value.trim()))
                })?;
                self.default_country_code = entry.code.to_string();
            }
            "ui_color_enabled" => self.ui_color_enabled = parse_flag(key, value)?,
            "plain_output" => self.plain_output = parse_flag(key, value)?,
            "sink" => {
                self.sink = SinkKind::parse(value).ok_or_else(|| {
                    ConfigError::Invalid(format!("sink must be `log` or `stdout`, got `{}`", value))
                })?;
            }
            other => {
                return Err(ConfigError::Invalid(format!(
                    "unknown setting `{}` (expected one of: {})",
                    other,
                    CONFIG_KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }

    /// `(key, value)` pairs for display.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("default_country_code", self.default_country_code.clone()),
            ("ui_color_enabled", self.ui_color_enabled.to_string()),
            ("plain_output", self.plain_output.to_string()),
            ("sink", self.sink.to_string()),
        ]
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(ConfigError::Invalid(format!(
            "`{}` expects true or false, got `{}`",
            key, value
        ))),
    }
}

/// Where finished submissions go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// A structured log event.
    #[default]
    Log,
    /// Pretty JSON on standard output.
    Stdout,
}

impl SinkKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "log" => Some(SinkKind::Log),
            "stdout" => Some(SinkKind::Stdout),
            _ => None,
        }
    }
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SinkKind::Log => "log",
            SinkKind::Stdout => "stdout",
        };
        f.write_str(label)
    }
}

// Unknown or null values fall back to the default instead of failing the load.
impl<'de> Deserialize<'de> for SinkKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value
            .as_deref()
            .and_then(SinkKind::parse)
            .unwrap_or_default())
    }
}
