//! Display column definitions for list and show operations

use crate::tag::string_tag;
use crate::text::humanize_field_name;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

string_tag! {
	/// Column type tag
	pub enum ColumnType {
		/// Plain text value
		Text => "text",
		/// Number of entries of an array attribute
		ArrayCount => "array_count",
		/// Nested rows rendered as a sub-table
		Table => "table",
		/// Date and time value
		Datetime => "datetime",
	}
}

/// Definition of one display column
///
/// # Examples
///
/// ```
/// use trellis_panel::{ColumnDefinition, ColumnType};
///
/// let column = ColumnDefinition::from("created_at");
/// assert_eq!(column.label, "Created at");
/// assert_eq!(column.column_type, ColumnType::Text);
///
/// let column = ColumnDefinition::new("simple", "Simple", ColumnType::ArrayCount);
/// assert!(column.columns.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDefinition {
	/// Attribute this column reads
	pub name: String,
	/// Header text
	pub label: String,
	/// Type tag selecting the cell renderer
	#[serde(rename = "type")]
	pub column_type: ColumnType,
	/// Sub-columns of a table column, label keyed by attribute name
	#[serde(default, skip_serializing_if = "IndexMap::is_empty")]
	pub columns: IndexMap<String, String>,
}

impl ColumnDefinition {
	/// Create a column
	pub fn new(
		name: impl Into<String>,
		label: impl Into<String>,
		column_type: impl Into<ColumnType>,
	) -> Self {
		Self {
			name: name.into(),
			label: label.into(),
			column_type: column_type.into(),
			columns: IndexMap::new(),
		}
	}

	/// Create a column with a humanised label
	pub fn typed(name: &str, column_type: impl Into<ColumnType>) -> Self {
		Self::new(name, humanize_field_name(name), column_type)
	}

	/// Set the sub-columns of a table column
	pub fn with_columns(mut self, columns: IndexMap<String, String>) -> Self {
		self.columns = columns;
		self
	}
}

/// A bare attribute name becomes a text column with a humanised label
impl From<&str> for ColumnDefinition {
	fn from(name: &str) -> Self {
		Self::typed(name, ColumnType::Text)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_typed_column_label() {
		let column = ColumnDefinition::typed("updated_at", ColumnType::Datetime);
		assert_eq!(column.name, "updated_at");
		assert_eq!(column.label, "Updated at");
		assert_eq!(column.column_type, ColumnType::Datetime);
	}

	#[test]
	fn test_table_column_serializes_ordered_sub_columns() {
		let mut columns = IndexMap::new();
		columns.insert("start_date".to_string(), "Date Range".to_string());
		columns.insert("end_date".to_string(), "Date Range".to_string());
		let column =
			ColumnDefinition::new("time_and_space", "Time And Space", ColumnType::Table)
				.with_columns(columns);

		let serialized = serde_json::to_string(&column).unwrap();

		assert_eq!(
			serialized,
			r#"{"name":"time_and_space","label":"Time And Space","type":"table","columns":{"start_date":"Date Range","end_date":"Date Range"}}"#
		);
	}

	#[test]
	fn test_column_type_round_trips_custom_tag() {
		let column: ColumnDefinition = serde_json::from_value(json!({
			"name": "photo",
			"label": "Photo",
			"type": "image",
		}))
		.unwrap();
		assert_eq!(column.column_type, ColumnType::Custom("image".to_string()));
		assert_eq!(serde_json::to_value(&column).unwrap()["type"], "image");
	}
}
