//! Panel model
//!
//! Unified access to `trellis-panel` through the `trellis::panel` namespace.
//!
//! ```rust
//! use trellis::panel::{CrudPanel, Operation};
//!
//! let mut panel = CrudPanel::new(Operation::List);
//! panel.add_column("name");
//! assert_eq!(panel.column("name").unwrap().label, "Name");
//! ```

pub use trellis_panel::*;
