//! # Trellis
//!
//! Declarative admin CRUD panels for Rust.
//!
//! A controller describes one managed entity. For every request it fills a
//! fresh panel with the columns, fields, validation and operation settings
//! of the requested operation (list, create, update, delete or show). The
//! panel is plain data; rendering it is left to the host application.
//!
//! ## Feature Flags
//!
//! - `panel` - Panel model, controller trait, validation hook and settings
//! - `demo` - Monster field catalog and the Dummy repeatable-group controller
//! - `full` (default) - Everything
//!
//! ## Quick Example
//!
//! ```rust
//! use trellis::demo::DummyCrudController;
//! use trellis::{AdminSettings, ColumnType, CrudController, Operation};
//!
//! let panel = DummyCrudController::new()
//!     .configure(Operation::Show, &AdminSettings::default())
//!     .unwrap();
//!
//! let column = panel.column("time_and_space").unwrap();
//! assert_eq!(column.column_type, ColumnType::Table);
//! assert!(column.columns.contains_key("start_date"));
//! ```

#[cfg(feature = "demo")]
pub mod demo;
#[cfg(feature = "panel")]
pub mod panel;

// Re-export the panel API at the crate root
#[cfg(feature = "panel")]
pub use trellis_panel::{
	AdminSettings, ColumnDefinition, ColumnType, CrudController, CrudError, CrudPanel, CrudResult,
	FieldDefinition, FieldName, FieldType, FormRequest, Operation, Rule, Settings, SettingsError,
	ValidationErrors,
};
