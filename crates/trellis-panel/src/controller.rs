//! CRUD controller trait
//!
//! A controller describes one managed entity. It declares which operations
//! it offers, performs the shared setup (model, route, names) and adds the
//! per-operation configuration. [`CrudController::configure`] runs these hooks
//! on a fresh [`CrudPanel`] for each request.

use crate::error::{CrudError, CrudResult};
use crate::operation::Operation;
use crate::panel::CrudPanel;
use crate::settings::AdminSettings;

/// Trait for configuring a CRUD panel
///
/// Only [`CrudController::name`], [`CrudController::operations`] and
/// [`CrudController::setup`] are required; every per-operation hook defaults
/// to adding nothing.
///
/// # Examples
///
/// ```
/// use trellis_panel::{AdminSettings, CrudController, CrudPanel, CrudResult, Operation};
///
/// struct TagCrudController;
///
/// impl CrudController for TagCrudController {
///     fn name(&self) -> &str {
///         "TagCrudController"
///     }
///
///     fn operations(&self) -> &[Operation] {
///         &[Operation::List]
///     }
///
///     fn setup(&self, panel: &mut CrudPanel, settings: &AdminSettings) -> CrudResult<()> {
///         panel
///             .set_model("Tag")
///             .set_route(settings.route("tag"))
///             .set_entity_name_strings("tag", "tags");
///         Ok(())
///     }
///
///     fn setup_list_operation(&self, panel: &mut CrudPanel) -> CrudResult<()> {
///         panel.add_column("name");
///         Ok(())
///     }
/// }
///
/// let panel = TagCrudController
///     .configure(Operation::List, &AdminSettings::default())
///     .unwrap();
/// assert_eq!(panel.route(), Some("admin/tag"));
/// assert_eq!(panel.columns().count(), 1);
/// assert!(TagCrudController
///     .configure(Operation::Delete, &AdminSettings::default())
///     .is_err());
/// ```
pub trait CrudController {
	/// Controller name used in logs and errors
	fn name(&self) -> &str;

	/// Operations this controller offers
	fn operations(&self) -> &[Operation];

	/// Shared setup run before every operation
	fn setup(&self, panel: &mut CrudPanel, settings: &AdminSettings) -> CrudResult<()>;

	/// Configure the list operation
	fn setup_list_operation(&self, _panel: &mut CrudPanel) -> CrudResult<()> {
		Ok(())
	}

	/// Configure the create operation
	fn setup_create_operation(&self, _panel: &mut CrudPanel) -> CrudResult<()> {
		Ok(())
	}

	/// Configure the update operation
	fn setup_update_operation(&self, _panel: &mut CrudPanel) -> CrudResult<()> {
		Ok(())
	}

	/// Configure the delete operation
	fn setup_delete_operation(&self, _panel: &mut CrudPanel) -> CrudResult<()> {
		Ok(())
	}

	/// Configure the show operation
	fn setup_show_operation(&self, _panel: &mut CrudPanel) -> CrudResult<()> {
		Ok(())
	}

	/// Returns `true` if `operation` is offered
	fn offers(&self, operation: Operation) -> bool {
		self.operations().contains(&operation)
	}

	/// Build the panel for one request
	///
	/// # Errors
	///
	/// - [`CrudError::OperationNotEnabled`] if the operation is not offered
	/// - [`CrudError::IncompleteSetup`] if setup left the model or route unset
	/// - any error returned by the hooks
	fn configure(&self, operation: Operation, settings: &AdminSettings) -> CrudResult<CrudPanel> {
		if !self.offers(operation) {
			return Err(CrudError::OperationNotEnabled {
				operation,
				controller: self.name().to_string(),
			});
		}

		let mut panel = CrudPanel::new(operation);
		self.setup(&mut panel, settings)?;
		if panel.model().is_none() {
			return Err(CrudError::IncompleteSetup("model"));
		}
		if panel.route().is_none() {
			return Err(CrudError::IncompleteSetup("route"));
		}

		match operation {
			Operation::List => self.setup_list_operation(&mut panel)?,
			Operation::Create => self.setup_create_operation(&mut panel)?,
			Operation::Update => self.setup_update_operation(&mut panel)?,
			Operation::Delete => self.setup_delete_operation(&mut panel)?,
			Operation::Show => self.setup_show_operation(&mut panel)?,
		}

		tracing::debug!(
			controller = self.name(),
			%operation,
			columns = panel.columns().count(),
			fields = panel.fields().count(),
			"configured crud panel"
		);
		Ok(panel)
	}
}
