//! Layered settings
//!
//! Settings are merged in priority order: environment variables > TOML file >
//! defaults. A settings file looks like:
//!
//! ```toml
//! [admin]
//! route_prefix = "backoffice"
//!
//! [logging]
//! filter = "trellis=debug"
//! ```
//!
//! Environment overrides use the `TRELLIS_` prefix
//! (`TRELLIS_ROUTE_PREFIX`, `TRELLIS_LOG_FILTER`).

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Prefix of environment variables overriding settings
pub const ENV_PREFIX: &str = "TRELLIS_";

/// Error type for settings loading
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("Invalid value for {key}: {reason}")]
	InvalidValue { key: String, reason: String },
}

/// Admin panel settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminSettings {
	/// Path segment every panel route is mounted under
	pub route_prefix: String,
}

impl Default for AdminSettings {
	fn default() -> Self {
		Self {
			route_prefix: "admin".to_string(),
		}
	}
}

impl AdminSettings {
	/// Build the route of a panel mounted at `segment`
	///
	/// # Examples
	///
	/// ```
	/// use trellis_panel::AdminSettings;
	///
	/// let settings = AdminSettings::default();
	/// assert_eq!(settings.route("dummy"), "admin/dummy");
	///
	/// let settings = AdminSettings { route_prefix: "/backoffice/".to_string() };
	/// assert_eq!(settings.route("/dummy"), "/backoffice/dummy");
	///
	/// let settings = AdminSettings { route_prefix: String::new() };
	/// assert_eq!(settings.route("dummy"), "dummy");
	/// ```
	pub fn route(&self, segment: &str) -> String {
		let prefix = self.route_prefix.trim_end_matches('/');
		let segment = segment.trim_start_matches('/');
		if prefix.is_empty() {
			segment.to_string()
		} else {
			format!("{prefix}/{segment}")
		}
	}
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
	/// `tracing` filter directive, e.g. `info` or `trellis_demo=debug`
	pub filter: String,
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			filter: "info".to_string(),
		}
	}
}

/// All settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
	pub admin: AdminSettings,
	pub logging: LoggingSettings,
}

impl Settings {
	/// Parse settings from TOML, filling gaps with defaults
	///
	/// # Examples
	///
	/// ```
	/// use trellis_panel::Settings;
	///
	/// let settings = Settings::from_toml_str("[admin]\nroute_prefix = \"staff\"").unwrap();
	/// assert_eq!(settings.admin.route_prefix, "staff");
	/// assert_eq!(settings.logging.filter, "info");
	/// ```
	pub fn from_toml_str(source: &str) -> Result<Self, SettingsError> {
		let settings: Settings = toml::from_str(source)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Read settings from a TOML file
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
		let source = fs::read_to_string(path.as_ref())?;
		Self::from_toml_str(&source)
	}

	/// Load defaults, then the optional file, then environment overrides
	pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
		let settings = match path {
			Some(path) => {
				tracing::debug!(path = %path.display(), "loading settings file");
				Self::from_file(path)?
			}
			None => Self::default(),
		};
		settings.with_env_overrides()
	}

	/// Apply `TRELLIS_*` environment variables on top of these settings
	pub fn with_env_overrides(self) -> Result<Self, SettingsError> {
		self.with_overrides(|key| std::env::var(format!("{ENV_PREFIX}{key}")).ok())
	}

	fn with_overrides(
		mut self,
		lookup: impl Fn(&str) -> Option<String>,
	) -> Result<Self, SettingsError> {
		if let Some(prefix) = lookup("ROUTE_PREFIX") {
			self.admin.route_prefix = prefix.trim().to_string();
		}
		if let Some(filter) = lookup("LOG_FILTER") {
			self.logging.filter = filter.trim().to_string();
		}
		self.validate()?;
		Ok(self)
	}

	fn validate(&self) -> Result<(), SettingsError> {
		if self.admin.route_prefix.chars().any(char::is_whitespace) {
			return Err(SettingsError::InvalidValue {
				key: "admin.route_prefix".to_string(),
				reason: "must not contain whitespace".to_string(),
			});
		}
		if self.logging.filter.is_empty() {
			return Err(SettingsError::InvalidValue {
				key: "logging.filter".to_string(),
				reason: "must not be empty".to_string(),
			});
		}
		Ok(())
	}
}
