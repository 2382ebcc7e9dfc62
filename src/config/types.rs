//! Configuration types: the `/api/v1/config` document and its errors.
//!
//! Role and settings entries keep the raw JSON value and expose typed
//! accessors, and unknown top-level keys land in `extra`, so a validated
//! configuration serializes back to the same JSON the server sent.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while retrieving the system configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The server answered with a non-success HTTP status.
    #[error("config fetch failed: status {status}: {body}")]
    Fetch { status: u16, body: String },

    /// The response body was not valid configuration JSON.
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// The body parsed but is missing required sections.
    #[error("{0}")]
    Validation(&'static str),

    /// The request could not be sent or its body could not be read.
    #[error("config request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl ConfigError {
    /// Stable machine-readable code for this error.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Fetch { .. } => "E_CONFIG_FETCH",
            Self::Parse(_) => "E_CONFIG_PARSE",
            Self::Validation(_) => "E_CONFIG_VALIDATION",
            Self::Request(_) => "E_CONFIG_REQUEST",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
        }
    }
}

pub const NO_ROLES_DEFINED: &str = "No roles defined";
pub const NO_SETTINGS_DEFINED: &str = "No settings defined";

// =============================================================================
// QUICK ACTION
// =============================================================================

/// A mode-specific action surfaced to the UI. Passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuickAction(pub Value);

// =============================================================================
// MODE / ROLE / SETTINGS
// =============================================================================

/// A named assistant persona and the modes it offers.
///
/// Holds the entry exactly as received. Accessors read the known fields and
/// treat a missing or wrongly typed field as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleConfig(pub Value);

impl RoleConfig {
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.0.get("display_name").and_then(Value::as_str)
    }

    /// Mode table. Absent, `null`, and non-object values all mean "no modes".
    #[must_use]
    pub fn modes(&self) -> Option<&Map<String, Value>> {
        self.0.get("modes").and_then(Value::as_object)
    }

    #[must_use]
    pub fn mode(&self, name: &str) -> Option<ModeConfig<'_>> {
        self.modes()?.get(name).map(ModeConfig)
    }

    #[must_use]
    pub fn mode_names(&self) -> Vec<String> {
        self.modes()
            .map(|modes| modes.keys().cloned().collect())
            .unwrap_or_default()
    }
}

/// Borrowed view of one mode entry under a role.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeConfig<'a>(&'a Value);

impl<'a> ModeConfig<'a> {
    #[must_use]
    pub fn description(self) -> Option<&'a str> {
        self.0.get("description").and_then(Value::as_str)
    }

    #[must_use]
    pub fn icon(self) -> Option<&'a str> {
        self.0.get("icon").and_then(Value::as_str)
    }

    /// Quick actions in configured order; empty unless the field is an array.
    #[must_use]
    pub fn quick_actions(self) -> Vec<QuickAction> {
        self.0
            .get("quick_actions")
            .and_then(Value::as_array)
            .map(|actions| actions.iter().cloned().map(QuickAction).collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn raw(self) -> &'a Value {
        self.0
    }
}

/// Global settings block, kept exactly as received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Settings(pub Value);

impl Settings {
    #[must_use]
    pub fn default_mode(&self) -> Option<&str> {
        self.0.get("default_mode").and_then(Value::as_str)
    }

    /// `null`, `false`, `0` and `""` count as no settings at all.
    fn is_present(&self) -> bool {
        match &self.0 {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f.abs() > 0.0),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }
}

// =============================================================================
// SYSTEM CONFIGURATION
// =============================================================================

/// A validated configuration: `roles` is non-empty and `settings` exists.
///
/// Only [`SystemConfiguration::validate`] produces one from wire data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemConfiguration {
    pub roles: BTreeMap<String, RoleConfig>,
    pub settings: Settings,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The configuration exactly as decoded, before presence checks.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfiguration {
    #[serde(default)]
    pub roles: Option<BTreeMap<String, RoleConfig>>,
    #[serde(default)]
    pub settings: Option<Settings>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SystemConfiguration {
    /// Check the two required sections. Roles are checked first.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] when `roles` is absent or empty,
    /// or when `settings` is absent or falsy.
    pub fn validate(raw: RawConfiguration) -> Result<Self, ConfigError> {
        let roles = match raw.roles {
            Some(roles) if !roles.is_empty() => roles,
            _ => return Err(ConfigError::Validation(NO_ROLES_DEFINED)),
        };
        let settings = raw
            .settings
            .filter(Settings::is_present)
            .ok_or(ConfigError::Validation(NO_SETTINGS_DEFINED))?;
        Ok(Self { roles, settings, extra: raw.extra })
    }

    /// Decode and validate a response body.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Validation`] for missing sections.
    pub fn from_json(body: &str) -> Result<Self, ConfigError> {
        let raw: RawConfiguration = serde_json::from_str(body)?;
        Self::validate(raw)
    }

    /// Default mode named in settings, if any.
    #[must_use]
    pub fn default_mode(&self) -> Option<&str> {
        self.settings.default_mode()
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
