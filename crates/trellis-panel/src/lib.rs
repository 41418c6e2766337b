//! # trellis-panel
//!
//! Declarative CRUD panel model for Trellis.
//!
//! A panel is the configuration of one admin screen for one request: which
//! columns a list or detail page shows, which fields a form offers, which
//! request validation runs on submit, and a handful of operation settings.
//! Controllers fill it through the [`CrudController`] hooks.
//!
//! ## Modules
//!
//! - **field**: form field definitions ([`FieldDefinition`], [`FieldType`], [`FieldName`])
//! - **column**: display column definitions ([`ColumnDefinition`], [`ColumnType`])
//! - **panel**: the per-request configuration store ([`CrudPanel`])
//! - **controller**: the [`CrudController`] trait
//! - **validation**: the [`FormRequest`] hook and its [`Rule`]s
//! - **settings**: layered TOML/environment settings
//! - **text**: label helpers
//!
//! ## Example
//!
//! ```
//! use trellis_panel::{CrudPanel, FieldDefinition, FieldType, Operation};
//!
//! let mut panel = CrudPanel::new(Operation::Create);
//! panel.add_field("name").unwrap();
//! panel
//!     .add_field(
//!         FieldDefinition::new("tags", FieldType::Repeatable)
//!             .stored_in("extras")
//!             .with_subfields(vec![FieldDefinition::from("tag")]),
//!     )
//!     .unwrap();
//!
//! assert_eq!(panel.fields().count(), 2);
//! ```

pub mod column;
pub mod controller;
pub mod error;
pub mod field;
pub mod operation;
pub mod panel;
pub mod settings;
mod tag;
pub mod text;
pub mod validation;

// Re-exports for convenience
pub use column::{ColumnDefinition, ColumnType};
pub use controller::CrudController;
pub use error::{CrudError, CrudResult};
pub use field::{FieldDefinition, FieldName, FieldType};
pub use operation::{Operation, UnknownOperation};
pub use panel::{CrudPanel, EntityName, PanelSnapshot};
pub use settings::{AdminSettings, LoggingSettings, Settings, SettingsError};
pub use validation::{FormRequest, Rule, ValidationErrors};
