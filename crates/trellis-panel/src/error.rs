//! Error types for panel configuration

use crate::operation::Operation;
use crate::settings::SettingsError;
use thiserror::Error;

/// Panel configuration error
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CrudError {
	/// The controller does not offer the requested operation
	#[error("Operation '{operation}' is not enabled for {controller}")]
	OperationNotEnabled {
		/// Requested operation
		operation: Operation,
		/// Controller that rejected it
		controller: String,
	},

	/// Setup finished without registering a required piece of configuration
	#[error("Incomplete setup: {0} was never set")]
	IncompleteSetup(&'static str),

	/// A top-level field was registered without a name
	#[error("Field of type '{0}' has no name")]
	UnnamedField(String),

	/// Settings could not be loaded
	#[error("Settings error: {0}")]
	Settings(#[from] SettingsError),
}

/// Result type for panel configuration
pub type CrudResult<T> = Result<T, CrudError>;
