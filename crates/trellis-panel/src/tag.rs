//! Open string-tag enums
//!
//! Field and column types travel as plain strings (`"date_range"`,
//! `"array_count"`). The `string_tag!` macro declares an enum with one
//! variant per known tag plus a `Custom(String)` fallback, so unknown tags
//! round-trip unchanged instead of failing to deserialize.

macro_rules! string_tag {
	(
		$(#[$enum_meta:meta])*
		pub enum $name:ident {
			$(
				$(#[$variant_meta:meta])*
				$variant:ident => $tag:literal
			),+ $(,)?
		}
	) => {
		$(#[$enum_meta])*
		#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
		#[serde(from = "String", into = "String")]
		pub enum $name {
			$(
				$(#[$variant_meta])*
				$variant,
			)+
			/// Any tag not known to this crate
			Custom(String),
		}

		impl $name {
			/// Returns the wire tag of this type
			pub fn as_str(&self) -> &str {
				match self {
					$(Self::$variant => $tag,)+
					Self::Custom(tag) => tag.as_str(),
				}
			}
		}

		impl From<&str> for $name {
			fn from(tag: &str) -> Self {
				match tag {
					$($tag => Self::$variant,)+
					other => Self::Custom(other.to_string()),
				}
			}
		}

		impl From<String> for $name {
			fn from(tag: String) -> Self {
				Self::from(tag.as_str())
			}
		}

		impl From<$name> for String {
			fn from(value: $name) -> Self {
				match value {
					$name::Custom(tag) => tag,
					known => known.as_str().to_string(),
				}
			}
		}

		impl std::fmt::Display for $name {
			fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
				f.write_str(self.as_str())
			}
		}
	};
}

pub(crate) use string_tag;
