//! The CRUD panel configuration store
//!
//! A [`CrudPanel`] is built fresh for every request and operation. Controllers
//! register columns, fields, settings and a validation hook on it; the panel
//! only records what it is told.

use crate::column::ColumnDefinition;
use crate::error::{CrudError, CrudResult};
use crate::field::FieldDefinition;
use crate::operation::Operation;
use crate::validation::FormRequest;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Singular and plural names of the managed entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityName {
	pub singular: String,
	pub plural: String,
}

/// Configuration of one CRUD operation
#[derive(Debug, Clone)]
pub struct CrudPanel {
	operation: Operation,
	model: Option<String>,
	route: Option<String>,
	entity_name: Option<EntityName>,
	columns: IndexMap<String, ColumnDefinition>,
	fields: IndexMap<String, FieldDefinition>,
	settings: Map<String, Value>,
	validator: Option<Arc<dyn FormRequest>>,
}

impl CrudPanel {
	/// Create an empty panel for `operation`
	pub fn new(operation: Operation) -> Self {
		Self {
			operation,
			model: None,
			route: None,
			entity_name: None,
			columns: IndexMap::new(),
			fields: IndexMap::new(),
			settings: Map::new(),
			validator: None,
		}
	}

	/// Operation this panel is configured for
	pub fn operation(&self) -> Operation {
		self.operation
	}

	/// Set the managed model
	pub fn set_model(&mut self, model: impl Into<String>) -> &mut Self {
		self.model = Some(model.into());
		self
	}

	/// Managed model, if set
	pub fn model(&self) -> Option<&str> {
		self.model.as_deref()
	}

	/// Set the route the panel is mounted at
	pub fn set_route(&mut self, route: impl Into<String>) -> &mut Self {
		self.route = Some(route.into());
		self
	}

	/// Route, if set
	pub fn route(&self) -> Option<&str> {
		self.route.as_deref()
	}

	/// Set the singular and plural entity names shown in headings
	pub fn set_entity_name_strings(
		&mut self,
		singular: impl Into<String>,
		plural: impl Into<String>,
	) -> &mut Self {
		self.entity_name = Some(EntityName {
			singular: singular.into(),
			plural: plural.into(),
		});
		self
	}

	/// Entity names, if set
	pub fn entity_name(&self) -> Option<&EntityName> {
		self.entity_name.as_ref()
	}

	/// Register a column
	///
	/// A column with the same name is replaced in place.
	///
	/// # Examples
	///
	/// ```
	/// use trellis_panel::{ColumnDefinition, ColumnType, CrudPanel, Operation};
	///
	/// let mut panel = CrudPanel::new(Operation::List);
	/// panel
	///     .add_column("name")
	///     .add_column(ColumnDefinition::typed("created_at", ColumnType::Datetime));
	///
	/// let names: Vec<_> = panel.columns().map(|c| c.name.as_str()).collect();
	/// assert_eq!(names, ["name", "created_at"]);
	/// ```
	pub fn add_column(&mut self, column: impl Into<ColumnDefinition>) -> &mut Self {
		let column = column.into();
		self.columns.insert(column.name.clone(), column);
		self
	}

	/// Remove a column, keeping the order of the others
	///
	/// Unknown names are ignored.
	pub fn remove_column(&mut self, name: &str) -> Option<ColumnDefinition> {
		self.columns.shift_remove(name)
	}

	/// Column registered under `name`
	pub fn column(&self, name: &str) -> Option<&ColumnDefinition> {
		self.columns.get(name)
	}

	/// Registered columns in display order
	pub fn columns(&self) -> impl Iterator<Item = &ColumnDefinition> {
		self.columns.values()
	}

	/// Register a form field
	///
	/// A field with the same name is replaced in place. Fields spanning
	/// several attributes are keyed by their comma-joined names.
	///
	/// # Errors
	///
	/// Returns [`CrudError::UnnamedField`] if the field binds no attribute.
	pub fn add_field(&mut self, field: impl Into<FieldDefinition>) -> CrudResult<&mut Self> {
		let field = field.into();
		let key = field
			.name
			.as_ref()
			.map(|name| name.key())
			.ok_or_else(|| CrudError::UnnamedField(field.field_type.to_string()))?;
		self.fields.insert(key, field);
		Ok(self)
	}

	/// Field registered under `key`
	pub fn field(&self, key: &str) -> Option<&FieldDefinition> {
		self.fields.get(key)
	}

	/// Registered fields in form order
	pub fn fields(&self) -> impl Iterator<Item = &FieldDefinition> {
		self.fields.values()
	}

	/// Attach the request validation used on submit
	pub fn set_validation(&mut self, request: impl FormRequest + 'static) -> &mut Self {
		self.validator = Some(Arc::new(request));
		self
	}

	/// Attached request validation
	pub fn validator(&self) -> Option<&dyn FormRequest> {
		self.validator.as_deref()
	}

	/// Store an operation setting such as `contentClass`
	pub fn set_operation_setting(
		&mut self,
		key: impl Into<String>,
		value: impl Into<Value>,
	) -> &mut Self {
		self.settings.insert(key.into(), value.into());
		self
	}

	/// Operation setting stored under `key`
	pub fn operation_setting(&self, key: &str) -> Option<&Value> {
		self.settings.get(key)
	}

	/// Serializable view of the whole configuration
	pub fn snapshot(&self) -> PanelSnapshot<'_> {
		PanelSnapshot {
			operation: self.operation,
			model: self.model.as_deref(),
			route: self.route.as_deref(),
			entity_name: self.entity_name.as_ref(),
			settings: &self.settings,
			validation: self.validator.as_deref().map(|request| request.name()),
			columns: self.columns.values().collect(),
			fields: self.fields.values().collect(),
		}
	}
}

/// Borrowed, serializable view of a [`CrudPanel`]
#[derive(Debug, Serialize)]
pub struct PanelSnapshot<'a> {
	pub operation: Operation,
	pub model: Option<&'a str>,
	pub route: Option<&'a str>,
	pub entity_name: Option<&'a EntityName>,
	pub settings: &'a Map<String, Value>,
	pub validation: Option<&'a str>,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub columns: Vec<&'a ColumnDefinition>,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub fields: Vec<&'a FieldDefinition>,
}
