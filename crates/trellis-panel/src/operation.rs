//! CRUD operations a controller can offer

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the standard request handlers of a CRUD panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
	/// Paginated table of entries
	List,
	/// Form creating an entry
	Create,
	/// Form editing an entry
	Update,
	/// Removal of an entry
	Delete,
	/// Read-only detail page of an entry
	Show,
}

impl Operation {
	/// Every operation, in conventional order
	pub const ALL: [Operation; 5] = [
		Operation::List,
		Operation::Create,
		Operation::Update,
		Operation::Delete,
		Operation::Show,
	];

	/// Returns the lowercase name of the operation
	pub fn as_str(&self) -> &'static str {
		match self {
			Operation::List => "list",
			Operation::Create => "create",
			Operation::Update => "update",
			Operation::Delete => "delete",
			Operation::Show => "show",
		}
	}
}

impl fmt::Display for Operation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Error returned when parsing an unknown operation name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown operation '{0}'")]
pub struct UnknownOperation(pub String);

impl FromStr for Operation {
	type Err = UnknownOperation;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Operation::ALL
			.into_iter()
			.find(|operation| operation.as_str().eq_ignore_ascii_case(s))
			.ok_or_else(|| UnknownOperation(s.to_string()))
	}
}
