//! Demo controllers
//!
//! Unified access to `trellis-demo` through the `trellis::demo` namespace.

pub use trellis_demo::*;
