//! The Dummy CRUD controller
//!
//! Dummy has two real attributes, `name` and `description`. Every tab of the
//! Monster catalog is offered again as one repeatable group whose rows are
//! stored as a fake field inside `extras`. List pages count the rows of each
//! group, detail pages show them as tables.

use crate::groups::{self, FieldGroup};
use crate::monster::{FieldProvider, MonsterFields};
use crate::requests::DummyRequest;
use indexmap::IndexMap;
use trellis_panel::{
	AdminSettings, ColumnDefinition, ColumnType, CrudController, CrudPanel, CrudResult,
	FieldDefinition, FieldType, Operation,
};

/// Attribute holding every repeatable group
pub const REPEATABLE_STORE: &str = "extras";

/// Content class of the create, update and show pages
pub const CONTENT_CLASS: &str = "col-md-12";

/// CRUD controller for [`Dummy`](crate::models::Dummy) records
///
/// # Examples
///
/// ```
/// use trellis_demo::DummyCrudController;
/// use trellis_panel::{AdminSettings, CrudController, Operation};
///
/// let panel = DummyCrudController::new()
///     .configure(Operation::List, &AdminSettings::default())
///     .unwrap();
///
/// assert_eq!(panel.route(), Some("admin/dummy"));
/// assert_eq!(panel.column("big_texts").unwrap().label, "Big Texts");
/// ```
#[derive(Debug, Clone, Default)]
pub struct DummyCrudController<P = MonsterFields> {
	provider: P,
}

impl DummyCrudController {
	/// Controller backed by the stock Monster catalog
	pub fn new() -> Self {
		Self::default()
	}
}

impl<P: FieldProvider> DummyCrudController<P> {
	/// Controller backed by a custom field provider
	pub fn with_provider(provider: P) -> Self {
		Self { provider }
	}

	/// Repeatable groups, rebuilt from the provider on every call
	pub fn groups(&self) -> IndexMap<FieldGroup, Vec<FieldDefinition>> {
		groups::groups(&self.provider)
	}
}

impl<P: FieldProvider> CrudController for DummyCrudController<P> {
	fn name(&self) -> &str {
		"DummyCrudController"
	}

	fn operations(&self) -> &[Operation] {
		&Operation::ALL
	}

	fn setup(&self, panel: &mut CrudPanel, settings: &AdminSettings) -> CrudResult<()> {
		panel
			.set_model("Dummy")
			.set_route(settings.route("dummy"))
			.set_entity_name_strings("dummy", "dummies");
		Ok(())
	}

	fn setup_list_operation(&self, panel: &mut CrudPanel) -> CrudResult<()> {
		panel.add_column("name").add_column("description");

		for group in self.groups().into_keys() {
			panel.add_column(ColumnDefinition::new(
				group.key(),
				group.label(),
				ColumnType::ArrayCount,
			));
		}
		Ok(())
	}

	fn setup_create_operation(&self, panel: &mut CrudPanel) -> CrudResult<()> {
		panel
			.set_validation(DummyRequest)
			.set_operation_setting("contentClass", CONTENT_CLASS);

		panel.add_field("name")?.add_field("description")?;

		for (group, fields) in self.groups() {
			panel.add_field(
				FieldDefinition::new(group.key(), FieldType::Repeatable)
					.with_label(group.label())
					.stored_in(REPEATABLE_STORE)
					.with_subfields(fields),
			)?;
		}
		Ok(())
	}

	fn setup_update_operation(&self, panel: &mut CrudPanel) -> CrudResult<()> {
		self.setup_create_operation(panel)
	}

	fn setup_show_operation(&self, panel: &mut CrudPanel) -> CrudResult<()> {
		self.setup_list_operation(panel)?;
		panel.set_operation_setting("contentClass", CONTENT_CLASS);

		for (group, fields) in self.groups() {
			panel.remove_column(group.key());
			panel.add_column(groups::table_column(group, &fields));
		}

		panel
			.add_column(ColumnDefinition::typed("created_at", ColumnType::Datetime))
			.add_column(ColumnDefinition::typed("updated_at", ColumnType::Datetime));
		Ok(())
	}
}
