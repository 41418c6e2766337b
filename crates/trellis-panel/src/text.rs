//! Text helpers for deriving display labels from attribute names

/// Converts an attribute name into a sentence-cased label.
///
/// Underscores become spaces and only the first character is uppercased,
/// so `created_at` renders as `Created at`. Used for columns and fields
/// registered by bare name.
///
/// # Examples
///
/// ```
/// use trellis_panel::text::humanize_field_name;
///
/// assert_eq!(humanize_field_name("description"), "Description");
/// assert_eq!(humanize_field_name("created_at"), "Created at");
/// assert_eq!(humanize_field_name(""), "");
/// ```
pub fn humanize_field_name(name: &str) -> String {
	let spaced = name.replace('_', " ");
	let mut chars = spaced.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

/// Converts a snake_case key into a title-cased label.
///
/// Every word is capitalised and the remaining letters are lowercased,
/// then underscores are replaced by spaces.
///
/// # Examples
///
/// ```
/// use trellis_panel::text::title_label;
///
/// assert_eq!(title_label("big_texts"), "Big Texts");
/// assert_eq!(title_label("time_and_space"), "Time And Space");
/// assert_eq!(title_label("SIMPLE"), "Simple");
/// ```
pub fn title_label(key: &str) -> String {
	key.split('_')
		.map(|word| {
			let mut chars = word.chars();
			match chars.next() {
				Some(first) => first
					.to_uppercase()
					.chain(chars.flat_map(char::to_lowercase))
					.collect(),
				None => String::new(),
			}
		})
		.collect::<Vec<String>>()
		.join(" ")
}
