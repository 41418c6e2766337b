//! Validation hook for create and update requests
//!
//! A panel does not validate input itself. It keeps a reference to a
//! [`FormRequest`], identified by name, and hands submitted input to it.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// A single validation rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", content = "value", rename_all = "snake_case")]
pub enum Rule {
	/// The value must be present and not empty
	Required,
	/// Minimum length (strings, arrays) or value (numbers)
	Min(usize),
	/// Maximum length (strings, arrays) or value (numbers)
	Max(usize),
}

impl Rule {
	/// Check `value` for `field`, returning the failure message if any
	///
	/// Absent values only fail [`Rule::Required`]; size rules apply to
	/// present values.
	pub fn check(&self, field: &str, value: Option<&Value>) -> Option<String> {
		let label = field.replace('_', " ");
		match (self, value) {
			(Rule::Required, None | Some(Value::Null)) => {
				Some(format!("The {label} field is required."))
			}
			(Rule::Required, Some(Value::String(s))) if s.trim().is_empty() => {
				Some(format!("The {label} field is required."))
			}
			(Rule::Required, Some(Value::Array(items))) if items.is_empty() => {
				Some(format!("The {label} field is required."))
			}
			(Rule::Required, _) | (_, None | Some(Value::Null)) => None,
			(Rule::Min(min), Some(value)) => match measure(value) {
				Some(Size::Length(len)) if len < *min => Some(format!(
					"The {label} must be at least {min} {}.",
					unit(value)
				)),
				Some(Size::Number(n)) if n < *min as f64 => {
					Some(format!("The {label} must be at least {min}."))
				}
				_ => None,
			},
			(Rule::Max(max), Some(value)) => match measure(value) {
				Some(Size::Length(len)) if len > *max => Some(format!(
					"The {label} may not be greater than {max} {}.",
					unit(value)
				)),
				Some(Size::Number(n)) if n > *max as f64 => {
					Some(format!("The {label} may not be greater than {max}."))
				}
				_ => None,
			},
		}
	}
}

enum Size {
	Length(usize),
	Number(f64),
}

fn measure(value: &Value) -> Option<Size> {
	match value {
		Value::String(s) => Some(Size::Length(s.chars().count())),
		Value::Array(items) => Some(Size::Length(items.len())),
		Value::Number(n) => n.as_f64().map(Size::Number),
		_ => None,
	}
}

fn unit(value: &Value) -> &'static str {
	match value {
		Value::Array(_) => "items",
		_ => "characters",
	}
}

/// Validation failures keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
	errors: IndexMap<String, Vec<String>>,
}

impl ValidationErrors {
	/// Record a failure for `field`
	pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
		self.errors
			.entry(field.into())
			.or_default()
			.push(message.into());
	}

	/// Returns `true` if nothing failed
	pub fn is_empty(&self) -> bool {
		self.errors.is_empty()
	}

	/// Messages recorded for `field`
	pub fn get(&self, field: &str) -> &[String] {
		self.errors.get(field).map(Vec::as_slice).unwrap_or_default()
	}

	/// Iterate over fields and their messages
	pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
		self.errors
			.iter()
			.map(|(field, messages)| (field.as_str(), messages.as_slice()))
	}
}

impl fmt::Display for ValidationErrors {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let messages: Vec<&str> = self
			.errors
			.values()
			.flatten()
			.map(String::as_str)
			.collect();
		write!(f, "{}", messages.join(" "))
	}
}

impl std::error::Error for ValidationErrors {}

/// Request validation referenced by a panel
///
/// # Examples
///
/// ```
/// use indexmap::IndexMap;
/// use serde_json::json;
/// use trellis_panel::{FormRequest, Rule};
///
/// struct TagRequest;
///
/// impl FormRequest for TagRequest {
///     fn name(&self) -> &str {
///         "TagRequest"
///     }
///
///     fn rules(&self) -> IndexMap<String, Vec<Rule>> {
///         IndexMap::from([("name".to_string(), vec![Rule::Required])])
///     }
/// }
///
/// let input = json!({"name": ""});
/// let errors = TagRequest.validate(input.as_object().unwrap()).unwrap_err();
/// assert_eq!(errors.get("name"), ["The name field is required."]);
/// ```
pub trait FormRequest: Send + Sync {
	/// Identity of the request class
	fn name(&self) -> &str;

	/// Rules per field, checked in order
	fn rules(&self) -> IndexMap<String, Vec<Rule>>;

	/// Validate submitted input against [`FormRequest::rules`]
	fn validate(&self, input: &Map<String, Value>) -> Result<(), ValidationErrors> {
		let mut errors = ValidationErrors::default();
		for (field, rules) in self.rules() {
			let value = input.get(&field);
			for rule in rules {
				if let Some(message) = rule.check(&field, value) {
					errors.add(field.clone(), message);
				}
			}
		}

		if errors.is_empty() {
			Ok(())
		} else {
			tracing::debug!(request = self.name(), %errors, "validation failed");
			Err(errors)
		}
	}
}

impl fmt::Debug for dyn FormRequest {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FormRequest")
			.field("name", &self.name())
			.finish_non_exhaustive()
	}
}
