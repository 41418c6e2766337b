//! Repeatable field groups
//!
//! Each Monster tab becomes one repeatable group. Some field types cannot
//! live inside a repeatable and are filtered out; the rest keep their order.
//! For the show page, each group is summarised as a table column whose
//! sub-columns are derived from the group's fields.

use crate::monster::FieldProvider;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use trellis_panel::text::title_label;
use trellis_panel::{ColumnDefinition, ColumnType, FieldDefinition, FieldType};

/// Field types that are dropped from repeatable groups
///
/// Address pickers, ajax-backed selects and relationships do not work inside
/// a repeatable yet; the dependency checklist and page-or-link field need
/// extra packages; enums and uploads cannot be stored there; custom HTML is
/// only decoration.
pub const EXCLUDED_FIELD_TYPES: [&str; 11] = [
	"address",
	"address_google",
	"relationship",
	"select2_from_ajax",
	"select2_from_ajax_multiple",
	"checklist_dependency",
	"custom_html",
	"enum",
	"page_or_link",
	"upload",
	"upload_multiple",
];

/// Returns `true` if fields of this type may appear inside a repeatable
pub fn is_repeatable_compatible(field_type: &FieldType) -> bool {
	!EXCLUDED_FIELD_TYPES.contains(&field_type.as_str())
}

/// One repeatable group, mirroring one Monster tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldGroup {
	Simple,
	TimeAndSpace,
	Relationships,
	Selects,
	Uploads,
	BigTexts,
	Miscellaneous,
}

impl FieldGroup {
	/// Every group, in display order
	pub const ALL: [FieldGroup; 7] = [
		FieldGroup::Simple,
		FieldGroup::TimeAndSpace,
		FieldGroup::Relationships,
		FieldGroup::Selects,
		FieldGroup::Uploads,
		FieldGroup::BigTexts,
		FieldGroup::Miscellaneous,
	];

	/// Stable key, used as attribute name and label source
	pub fn key(&self) -> &'static str {
		match self {
			FieldGroup::Simple => "simple",
			FieldGroup::TimeAndSpace => "time_and_space",
			FieldGroup::Relationships => "relationships",
			FieldGroup::Selects => "selects",
			FieldGroup::Uploads => "uploads",
			FieldGroup::BigTexts => "big_texts",
			FieldGroup::Miscellaneous => "miscellaneous",
		}
	}

	/// Display label
	///
	/// # Examples
	///
	/// ```
	/// use trellis_demo::FieldGroup;
	///
	/// assert_eq!(FieldGroup::BigTexts.label(), "Big Texts");
	/// assert_eq!(FieldGroup::TimeAndSpace.label(), "Time And Space");
	/// ```
	pub fn label(&self) -> String {
		title_label(self.key())
	}

	/// Unfiltered fields of the matching tab
	pub fn source_fields(&self, provider: &dyn FieldProvider) -> Vec<FieldDefinition> {
		match self {
			FieldGroup::Simple => provider.simple_tab(),
			FieldGroup::TimeAndSpace => provider.time_and_space_tab(),
			FieldGroup::Relationships => provider.relationships_tab(),
			FieldGroup::Selects => provider.selects_tab(),
			FieldGroup::Uploads => provider.uploads_tab(),
			FieldGroup::BigTexts => provider.big_texts_tab(),
			FieldGroup::Miscellaneous => provider.miscellaneous_tab(),
		}
	}
}

impl fmt::Display for FieldGroup {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.key())
	}
}

/// Build every group from `provider`, dropping incompatible fields
///
/// Groups come back in [`FieldGroup::ALL`] order. Within a group the
/// surviving fields keep their original order. Nothing is cached; each call
/// asks the provider again.
pub fn groups(provider: &dyn FieldProvider) -> IndexMap<FieldGroup, Vec<FieldDefinition>> {
	FieldGroup::ALL
		.into_iter()
		.map(|group| {
			let fields = group
				.source_fields(provider)
				.into_iter()
				.filter(|field| {
					let keep = is_repeatable_compatible(&field.field_type);
					if !keep {
						tracing::debug!(
							%group,
							field_type = %field.field_type,
							name = ?field.name,
							"dropping field that cannot be repeated"
						);
					}
					keep
				})
				.collect();
			(group, fields)
		})
		.collect()
}

/// Replace every multi-name field with one text field per name
///
/// The replacements are appended after the remaining fields, in the order the
/// multi-name fields and their names were declared.
///
/// # Examples
///
/// ```
/// use trellis_demo::groups::split_multi_name_fields;
/// use trellis_panel::{FieldDefinition, FieldType};
///
/// let mut fields = vec![
///     FieldDefinition::new(["start_date", "end_date"], FieldType::DateRange),
///     FieldDefinition::new("time", FieldType::Time),
/// ];
/// split_multi_name_fields(&mut fields);
///
/// let names: Vec<_> = fields.iter().filter_map(|f| f.single_name()).collect();
/// assert_eq!(names, ["time", "start_date", "end_date"]);
/// assert_eq!(fields[1].field_type, FieldType::Text);
/// ```
pub fn split_multi_name_fields(fields: &mut Vec<FieldDefinition>) {
	let mut expanded = Vec::new();
	fields.retain(|field| match field.split_names() {
		Some(parts) => {
			expanded.extend(parts);
			false
		}
		None => true,
	});
	fields.extend(expanded);
}

/// Label-by-name map of the fields a table can display
///
/// Fields without a single name, without a label, or of type `custom_html`
/// are skipped. A repeated name keeps its first position and its last label.
pub fn table_sub_columns(fields: &[FieldDefinition]) -> IndexMap<String, String> {
	fields
		.iter()
		.filter(|field| field.field_type != FieldType::CustomHtml)
		.filter_map(|field| Some((field.single_name()?.to_string(), field.label.clone()?)))
		.collect()
}

/// Table column summarising one group on the show page
///
/// Works on a copy of `fields`; the caller's list is left untouched.
pub fn table_column(group: FieldGroup, fields: &[FieldDefinition]) -> ColumnDefinition {
	let mut working = fields.to_vec();
	split_multi_name_fields(&mut working);
	ColumnDefinition::new(group.key(), group.label(), ColumnType::Table)
		.with_columns(table_sub_columns(&working))
}
