//! Form field definitions
//!
//! A [`FieldDefinition`] describes one form or display field the way the
//! panel stores it: a name (or several names for compound inputs such as
//! date ranges), a type tag, an optional label and free-form attributes.
//! Definitions serialize to the conventional JSON shape:
//!
//! ```json
//! {"name": ["start_date", "end_date"], "type": "date_range", "label": "Date range"}
//! ```

use crate::tag::string_tag;
use crate::text::humanize_field_name;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

string_tag! {
	/// Field type tag
	///
	/// Known tags get their own variant; anything else is kept verbatim in
	/// [`FieldType::Custom`].
	///
	/// # Examples
	///
	/// ```
	/// use trellis_panel::FieldType;
	///
	/// assert_eq!(FieldType::from("date_range"), FieldType::DateRange);
	/// assert_eq!(FieldType::DateRange.as_str(), "date_range");
	/// assert_eq!(FieldType::from("slider"), FieldType::Custom("slider".to_string()));
	/// ```
	pub enum FieldType {
		Text => "text",
		Email => "email",
		Textarea => "textarea",
		Number => "number",
		Password => "password",
		Hidden => "hidden",
		Checkbox => "checkbox",
		Checklist => "checklist",
		ChecklistDependency => "checklist_dependency",
		Radio => "radio",
		Range => "range",
		Switch => "switch",
		Date => "date",
		DatePicker => "date_picker",
		Datetime => "datetime",
		DatetimePicker => "datetime_picker",
		DateRange => "date_range",
		Time => "time",
		Week => "week",
		Month => "month",
		Address => "address",
		AddressGoogle => "address_google",
		Relationship => "relationship",
		Select => "select",
		Select2 => "select2",
		SelectMultiple => "select_multiple",
		Select2Multiple => "select2_multiple",
		Select2Nested => "select2_nested",
		Select2Grouped => "select2_grouped",
		Select2FromAjax => "select2_from_ajax",
		Select2FromAjaxMultiple => "select2_from_ajax_multiple",
		SelectFromArray => "select_from_array",
		Select2FromArray => "select2_from_array",
		SelectAndOrder => "select_and_order",
		Enum => "enum",
		Upload => "upload",
		UploadMultiple => "upload_multiple",
		Image => "image",
		Browse => "browse",
		BrowseMultiple => "browse_multiple",
		Base64Image => "base64_image",
		Wysiwyg => "wysiwyg",
		Ckeditor => "ckeditor",
		Tinymce => "tinymce",
		Summernote => "summernote",
		Easymde => "easymde",
		Table => "table",
		Color => "color",
		ColorPicker => "color_picker",
		IconPicker => "icon_picker",
		Video => "video",
		PageOrLink => "page_or_link",
		CustomHtml => "custom_html",
		Repeatable => "repeatable",
	}
}

/// Name of a field
///
/// Most fields bind a single attribute. Compound inputs (a date range with a
/// start and an end) bind several attributes at once and carry a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldName {
	/// One attribute
	Single(String),
	/// Several attributes filled by one input
	Multiple(Vec<String>),
}

impl FieldName {
	/// Returns the name if it binds exactly one attribute
	pub fn as_single(&self) -> Option<&str> {
		match self {
			Self::Single(name) => Some(name),
			Self::Multiple(_) => None,
		}
	}

	/// Returns `true` for list-valued names
	pub fn is_multiple(&self) -> bool {
		matches!(self, Self::Multiple(_))
	}

	/// Returns every attribute this name binds, in declaration order
	pub fn components(&self) -> Vec<&str> {
		match self {
			Self::Single(name) => vec![name.as_str()],
			Self::Multiple(names) => names.iter().map(String::as_str).collect(),
		}
	}

	/// Stable key used to register the field on a panel
	///
	/// Multiple names are joined with commas.
	pub fn key(&self) -> String {
		self.components().join(",")
	}
}

impl From<&str> for FieldName {
	fn from(name: &str) -> Self {
		Self::Single(name.to_string())
	}
}

impl From<String> for FieldName {
	fn from(name: String) -> Self {
		Self::Single(name)
	}
}

impl<const N: usize> From<[&str; N]> for FieldName {
	fn from(names: [&str; N]) -> Self {
		Self::Multiple(names.iter().map(|name| name.to_string()).collect())
	}
}

impl From<Vec<String>> for FieldName {
	fn from(names: Vec<String>) -> Self {
		Self::Multiple(names)
	}
}

/// Definition of one form field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
	/// Attribute(s) this field binds; headings and separators may have none
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<FieldName>,
	/// Type tag selecting the input widget
	#[serde(rename = "type")]
	pub field_type: FieldType,
	/// Human-readable label
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub label: Option<String>,
	/// Stored inside another JSON attribute instead of its own column
	#[serde(default, skip_serializing_if = "std::ops::Not::not")]
	pub fake: bool,
	/// JSON attribute receiving the value of a fake field
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub store_in: Option<String>,
	/// Sub-fields of a repeatable field
	#[serde(default, rename = "fields", skip_serializing_if = "Vec::is_empty")]
	pub subfields: Vec<FieldDefinition>,
	/// Type-specific options (choices, entity, hints, wrapper classes, ...)
	#[serde(flatten)]
	pub attributes: Map<String, Value>,
}

impl FieldDefinition {
	/// Create a field bound to `name`
	///
	/// # Examples
	///
	/// ```
	/// use trellis_panel::{FieldDefinition, FieldType};
	///
	/// let field = FieldDefinition::new(["start_date", "end_date"], FieldType::DateRange)
	///     .with_label("Date range");
	/// assert!(field.name.as_ref().unwrap().is_multiple());
	/// assert_eq!(field.label.as_deref(), Some("Date range"));
	/// ```
	pub fn new(name: impl Into<FieldName>, field_type: impl Into<FieldType>) -> Self {
		Self {
			name: Some(name.into()),
			..Self::unnamed(field_type)
		}
	}

	/// Create a field that binds no attribute (headings, separators)
	pub fn unnamed(field_type: impl Into<FieldType>) -> Self {
		Self {
			name: None,
			field_type: field_type.into(),
			label: None,
			fake: false,
			store_in: None,
			subfields: Vec::new(),
			attributes: Map::new(),
		}
	}

	/// Set the label
	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	/// Set one type-specific attribute
	///
	/// # Examples
	///
	/// ```
	/// use trellis_panel::{FieldDefinition, FieldType};
	/// use serde_json::json;
	///
	/// let field = FieldDefinition::new("status", FieldType::Radio)
	///     .with_attribute("options", json!({"0": "Draft", "1": "Published"}));
	/// assert_eq!(field.attributes["options"]["1"], "Published");
	/// ```
	pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.attributes.insert(key.into(), value.into());
		self
	}

	/// Store the value inside the JSON attribute `attribute`
	pub fn stored_in(mut self, attribute: impl Into<String>) -> Self {
		self.fake = true;
		self.store_in = Some(attribute.into());
		self
	}

	/// Set the sub-fields of a repeatable field
	pub fn with_subfields(mut self, subfields: Vec<FieldDefinition>) -> Self {
		self.subfields = subfields;
		self
	}

	/// Returns the single attribute name, if the field binds exactly one
	pub fn single_name(&self) -> Option<&str> {
		self.name.as_ref().and_then(FieldName::as_single)
	}

	/// Returns `true` if the field binds several attributes at once
	pub fn has_multiple_names(&self) -> bool {
		self.name.as_ref().is_some_and(FieldName::is_multiple)
	}

	/// Split a multi-name field into one plain text field per name
	///
	/// Each copy keeps the label and attributes of the original. Returns
	/// `None` when the field binds a single attribute (or none).
	///
	/// # Examples
	///
	/// ```
	/// use trellis_panel::{FieldDefinition, FieldType};
	///
	/// let range = FieldDefinition::new(["start_date", "end_date"], FieldType::DateRange);
	/// let parts = range.split_names().unwrap();
	/// assert_eq!(parts.len(), 2);
	/// assert_eq!(parts[0].single_name(), Some("start_date"));
	/// assert_eq!(parts[1].field_type, FieldType::Text);
	/// ```
	pub fn split_names(&self) -> Option<Vec<FieldDefinition>> {
		let Some(FieldName::Multiple(names)) = &self.name else {
			return None;
		};
		Some(
			names
				.iter()
				.map(|name| Self {
					name: Some(FieldName::Single(name.clone())),
					field_type: FieldType::Text,
					..self.clone()
				})
				.collect(),
		)
	}
}

/// A bare attribute name becomes a text field with a humanised label
impl From<&str> for FieldDefinition {
	fn from(name: &str) -> Self {
		Self::new(name, FieldType::Text).with_label(humanize_field_name(name))
	}
}
