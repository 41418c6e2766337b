//! Demo entities

use crate::groups::FieldGroup;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A Dummy record
///
/// Only `name` and `description` are real attributes. Every repeatable group
/// is a fake field: its rows live in `extras`, keyed by the group key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dummy {
	pub id: i64,
	pub name: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	#[serde(default)]
	pub extras: Map<String, Value>,
	pub created_at: DateTime<Utc>,
	pub updated_at: DateTime<Utc>,
}

impl Dummy {
	/// Create a record with empty extras, stamped now
	pub fn new(id: i64, name: impl Into<String>) -> Self {
		let now = Utc::now();
		Self {
			id,
			name: name.into(),
			description: None,
			extras: Map::new(),
			created_at: now,
			updated_at: now,
		}
	}

	/// Rows stored for `group`
	///
	/// Missing groups and non-array values read as no rows.
	pub fn group(&self, group: FieldGroup) -> &[Value] {
		match self.extras.get(group.key()) {
			Some(Value::Array(rows)) => rows.as_slice(),
			_ => &[],
		}
	}

	/// Replace the rows of `group` and bump `updated_at`
	pub fn set_group(&mut self, group: FieldGroup, rows: Vec<Value>) {
		self.extras.insert(group.key().to_string(), Value::Array(rows));
		self.updated_at = Utc::now();
	}

	/// Number of rows in `group`, as the list page's `array_count` column shows it
	pub fn group_count(&self, group: FieldGroup) -> usize {
		self.group(group).len()
	}
}
