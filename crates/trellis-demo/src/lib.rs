//! # trellis-demo
//!
//! Demo CRUD controllers for Trellis.
//!
//! The Monster catalog ([`MonsterFields`]) lists one example of every field
//! type, split into tabs. [`DummyCrudController`] reuses those tabs as
//! repeatable groups stored inside a single JSON attribute, which makes it a
//! quick way to check which field types work inside a repeatable.
//!
//! ## Example
//!
//! ```
//! use trellis_demo::{DummyCrudController, FieldGroup};
//! use trellis_panel::FieldType;
//!
//! let groups = DummyCrudController::new().groups();
//!
//! assert_eq!(groups.len(), 7);
//! assert!(groups[&FieldGroup::Uploads]
//!     .iter()
//!     .all(|field| field.field_type != FieldType::Upload));
//! ```

pub mod dummy;
pub mod groups;
pub mod models;
pub mod monster;
pub mod requests;

pub use dummy::DummyCrudController;
pub use groups::{EXCLUDED_FIELD_TYPES, FieldGroup};
pub use models::Dummy;
pub use monster::{FieldProvider, MonsterFields};
pub use requests::DummyRequest;
