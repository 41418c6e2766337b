//! Form requests of the demo panels

use indexmap::IndexMap;
use trellis_panel::{FormRequest, Rule};

/// Validation run when a Dummy is created or updated
#[derive(Debug, Clone, Copy, Default)]
pub struct DummyRequest;

impl FormRequest for DummyRequest {
	fn name(&self) -> &str {
		"DummyRequest"
	}

	fn rules(&self) -> IndexMap<String, Vec<Rule>> {
		IndexMap::from([(
			"name".to_string(),
			vec![Rule::Required, Rule::Min(5), Rule::Max(255)],
		)])
	}
}
