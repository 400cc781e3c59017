//! Typed layout configuration.
//!
//! `LayoutConfig` handles deserialization only from TOML or JSON text; semantic checks live in
//! [`LayoutConfig::validate`], which both loaders run before returning.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::LeftPanelSize;

const CSS_LENGTH_UNITS: [&str; 6] = ["px", "rem", "em", "vh", "vw", "%"];

#[derive(Debug, Error)]
/// Errors raised while loading a [`LayoutConfig`].
pub enum LayoutConfigError {
    /// The TOML document could not be parsed.
    #[error("failed to parse layout config TOML: {0}")]
    Toml(#[from] toml::de::Error),
    /// The JSON document could not be parsed.
    #[error("failed to parse layout config JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// `header_height` is not a CSS length.
    #[error("invalid header height `{0}`: expected a CSS length such as `72px`")]
    InvalidHeaderHeight(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Initial footer configuration.
pub struct FooterConfig {
    pub visible: bool,
    pub fixed: bool,
    /// Unfix a fixed footer while the viewport is in the small range.
    pub auto_unfix_for_small_screens: bool,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            visible: false,
            fixed: false,
            auto_unfix_for_small_screens: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Initial layout configuration applied by
/// [`LayoutController::from_config`](crate::LayoutController::from_config).
pub struct LayoutConfig {
    pub title: String,
    pub left_panel_size: LeftPanelSize,
    /// Pin the left panel on medium-or-above screens and float it on small ones.
    pub auto_fix_left_panel: bool,
    pub left_panel_disabled: bool,
    pub span_left_panel_up: bool,
    pub hide_nav_bar_expand: bool,
    pub fit_width: bool,
    pub fit_height: bool,
    /// CSS length for the navigation bar height.
    pub header_height: Option<String>,
    pub footer: FooterConfig,
}

impl LayoutConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutConfigError::Toml`] on malformed input and
    /// [`LayoutConfigError::InvalidHeaderHeight`] when validation fails.
    pub fn from_toml_str(text: &str) -> Result<Self, LayoutConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutConfigError::Json`] on malformed input and
    /// [`LayoutConfigError::InvalidHeaderHeight`] when validation fails.
    pub fn from_json_str(text: &str) -> Result<Self, LayoutConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutConfigError::InvalidHeaderHeight`] when `header_height` is not a positive
    /// number followed by a supported CSS unit.
    pub fn validate(&self) -> Result<(), LayoutConfigError> {
        if let Some(height) = &self.header_height {
            if !is_css_length(height) {
                return Err(LayoutConfigError::InvalidHeaderHeight(height.clone()));
            }
        }
        Ok(())
    }
}

fn is_css_length(value: &str) -> bool {
    let value = value.trim();
    CSS_LENGTH_UNITS.iter().any(|unit| {
        value
            .strip_suffix(unit)
            .and_then(|number| number.parse::<f64>().ok())
            .is_some_and(|number| number.is_finite() && number >= 0.0)
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn toml_config_fills_missing_fields_with_defaults() {
        let config = LayoutConfig::from_toml_str(
            r#"
title = "Inbox"
left_panel_size = "lg"
header_height = "72px"

[footer]
visible = true
fixed = true
"#,
        )
        .expect("parse");

        assert_eq!(config.title, "Inbox");
        assert_eq!(config.left_panel_size, LeftPanelSize::Large);
        assert!(config.footer.auto_unfix_for_small_screens);
        assert!(!config.auto_fix_left_panel);
        assert_eq!(config.header_height.as_deref(), Some("72px"));
    }

    #[test]
    fn json_config_is_accepted() {
        let config = LayoutConfig::from_json_str(
            r#"{"auto_fix_left_panel": true, "footer": {"auto_unfix_for_small_screens": false}}"#,
        )
        .expect("parse");
        assert!(config.auto_fix_left_panel);
        assert!(!config.footer.auto_unfix_for_small_screens);
        assert_eq!(config.left_panel_size, LeftPanelSize::Default);
    }

    #[test]
    fn header_height_must_be_a_css_length() {
        for bad in ["tall", "72", "-4px", "px"] {
            let err = LayoutConfig::from_toml_str(&format!("header_height = \"{bad}\""))
                .expect_err("invalid height");
            assert!(matches!(err, LayoutConfigError::InvalidHeaderHeight(_)), "{bad}");
        }
        for good in ["72px", "4.5rem", "10%"] {
            assert!(LayoutConfig::from_toml_str(&format!("header_height = \"{good}\"")).is_ok());
        }
    }

    #[test]
    fn malformed_documents_report_their_format() {
        assert!(matches!(
            LayoutConfig::from_toml_str("title = ").expect_err("toml"),
            LayoutConfigError::Toml(_)
        ));
        assert!(matches!(
            LayoutConfig::from_json_str("{").expect_err("json"),
            LayoutConfigError::Json(_)
        ));
    }
}
