//! The Monster field catalog
//!
//! The Monster panel is the kitchen-sink demo: one tab per family of field
//! types, exercising every input the admin supports. Other demo panels pull
//! their field definitions from here instead of repeating them.

use serde_json::json;
use trellis_panel::{FieldDefinition, FieldType};

const HALF_WIDTH: &str = "form-group col-md-6";

/// Source of field definitions, one list per tab
pub trait FieldProvider {
	/// Plain inputs: text, numbers, checkboxes, radios
	fn simple_tab(&self) -> Vec<FieldDefinition>;

	/// Dates, times and places
	fn time_and_space_tab(&self) -> Vec<FieldDefinition>;

	/// Inputs bound to related models
	fn relationships_tab(&self) -> Vec<FieldDefinition>;

	/// Selects over fixed option lists
	fn selects_tab(&self) -> Vec<FieldDefinition>;

	/// File and image inputs
	fn uploads_tab(&self) -> Vec<FieldDefinition>;

	/// Rich text editors
	fn big_texts_tab(&self) -> Vec<FieldDefinition>;

	/// Everything else
	fn miscellaneous_tab(&self) -> Vec<FieldDefinition>;
}

/// Stock field catalog of the Monster panel
#[derive(Debug, Clone, Copy, Default)]
pub struct MonsterFields;

fn heading(name: &str, title: &str) -> FieldDefinition {
	FieldDefinition::new(name, FieldType::CustomHtml)
		.with_attribute("value", format!("<h5 class=\"mb-0\">{title}</h5>"))
}

fn half(field: FieldDefinition) -> FieldDefinition {
	field.with_attribute("wrapper", json!({"class": HALF_WIDTH}))
}

impl FieldProvider for MonsterFields {
	fn simple_tab(&self) -> Vec<FieldDefinition> {
		vec![
			heading("simple_heading", "Simple inputs"),
			half(FieldDefinition::new("text", FieldType::Text).with_label("Text")),
			half(FieldDefinition::new("email", FieldType::Email).with_label("Email")),
			FieldDefinition::new("textarea", FieldType::Textarea).with_label("Textarea"),
			half(FieldDefinition::new("number", FieldType::Number).with_label("Number")),
			half(
				FieldDefinition::new("float", FieldType::Number)
					.with_label("Float")
					.with_attribute("attributes", json!({"step": "any"})),
			),
			half(
				FieldDefinition::new("price", FieldType::Number)
					.with_label("Price")
					.with_attribute("prefix", "$")
					.with_attribute("suffix", ".00"),
			),
			half(FieldDefinition::new("password", FieldType::Password).with_label("Password")),
			FieldDefinition::new("radio", FieldType::Radio)
				.with_label("Status (radio)")
				.with_attribute("options", json!({"0": "Draft", "1": "Published", "2": "Other"}))
				.with_attribute("inline", true),
			half(FieldDefinition::new("checkbox", FieldType::Checkbox).with_label("Checkbox")),
			half(FieldDefinition::new("switch", FieldType::Switch).with_label("Switch")),
			FieldDefinition::new("hidden", FieldType::Hidden).with_attribute("default", "hidden value"),
		]
	}

	fn time_and_space_tab(&self) -> Vec<FieldDefinition> {
		vec![
			heading("time_heading", "Time"),
			half(FieldDefinition::new("date", FieldType::Date).with_label("Date (HTML5)")),
			half(
				FieldDefinition::new("date_picker", FieldType::DatePicker)
					.with_label("Date (picker)")
					.with_attribute("date_picker_options", json!({"todayBtn": "linked"})),
			),
			half(FieldDefinition::new("datetime", FieldType::Datetime).with_label("Datetime (HTML5)")),
			half(
				FieldDefinition::new("datetime_picker", FieldType::DatetimePicker)
					.with_label("Datetime (picker)"),
			),
			FieldDefinition::new(["start_date", "end_date"], FieldType::DateRange)
				.with_label("Date Range")
				.with_attribute("default", json!(["2019-03-28 01:01", "2019-04-05 02:00"])),
			half(FieldDefinition::new("time", FieldType::Time).with_label("Time")),
			half(FieldDefinition::new("week", FieldType::Week).with_label("Week")),
			half(FieldDefinition::new("month", FieldType::Month).with_label("Month")),
			heading("space_heading", "Space"),
			FieldDefinition::new("address_algolia", FieldType::Address).with_label("Address (Algolia)"),
			FieldDefinition::new("address_google", FieldType::AddressGoogle)
				.with_label("Address (Google)")
				.with_attribute("store_as_json", true),
		]
	}

	fn relationships_tab(&self) -> Vec<FieldDefinition> {
		vec![
			heading("relationships_heading", "Relationships"),
			half(
				FieldDefinition::new("select", FieldType::Select)
					.with_label("Select (1-n)")
					.with_attribute("entity", "category")
					.with_attribute("attribute", "name")
					.with_attribute("model", "Category"),
			),
			half(
				FieldDefinition::new("select2", FieldType::Select2)
					.with_label("Select2 (1-n)")
					.with_attribute("entity", "category")
					.with_attribute("attribute", "name"),
			),
			half(
				FieldDefinition::new("tags", FieldType::SelectMultiple)
					.with_label("Select multiple (n-n)")
					.with_attribute("entity", "tags")
					.with_attribute("attribute", "name")
					.with_attribute("pivot", true),
			),
			half(
				FieldDefinition::new("products", FieldType::Select2Multiple)
					.with_label("Select2 multiple (n-n)")
					.with_attribute("entity", "products")
					.with_attribute("attribute", "name")
					.with_attribute("pivot", true),
			),
			FieldDefinition::new("icon", FieldType::Relationship)
				.with_label("Relationship")
				.with_attribute("ajax", true),
			half(
				FieldDefinition::new("article", FieldType::Select2FromAjax)
					.with_label("Select2 from ajax (1-n)")
					.with_attribute("data_source", "api/article"),
			),
			half(
				FieldDefinition::new("articles", FieldType::Select2FromAjaxMultiple)
					.with_label("Select2 from ajax multiple (n-n)")
					.with_attribute("data_source", "api/article")
					.with_attribute("pivot", true),
			),
			FieldDefinition::new(["roles", "permissions"], FieldType::ChecklistDependency)
				.with_label("User Role Permissions"),
			FieldDefinition::new("category_nested", FieldType::Select2Nested)
				.with_label("Select2 nested")
				.with_attribute("entity", "category"),
			FieldDefinition::new("category_grouped", FieldType::Select2Grouped)
				.with_label("Select2 grouped")
				.with_attribute("group_by", "parent"),
			FieldDefinition::new("checklist", FieldType::Checklist)
				.with_label("Checklist (n-n)")
				.with_attribute("entity", "tags")
				.with_attribute("pivot", true),
		]
	}

	fn selects_tab(&self) -> Vec<FieldDefinition> {
		vec![
			half(
				FieldDefinition::new("select_from_array", FieldType::SelectFromArray)
					.with_label("Select from array")
					.with_attribute("options", json!({"one": "One", "two": "Two", "three": "Three"}))
					.with_attribute("allows_null", false),
			),
			half(
				FieldDefinition::new("select2_from_array", FieldType::Select2FromArray)
					.with_label("Select2 from array")
					.with_attribute("options", json!({"one": "One", "two": "Two", "three": "Three"}))
					.with_attribute("allows_multiple", true),
			),
			FieldDefinition::new("select_and_order", FieldType::SelectAndOrder)
				.with_label("Select and order")
				.with_attribute("options", json!({"1": "Option 1", "2": "Option 2", "3": "Option 3"})),
			FieldDefinition::new("status", FieldType::Enum).with_label("Enum"),
			half(
				FieldDefinition::new("range", FieldType::Range)
					.with_label("Range")
					.with_attribute("attributes", json!({"min": 0, "max": 10})),
			),
		]
	}

	fn uploads_tab(&self) -> Vec<FieldDefinition> {
		vec![
			FieldDefinition::new("upload", FieldType::Upload)
				.with_label("Upload")
				.with_attribute("disk", "uploads"),
			FieldDefinition::new("upload_multiple", FieldType::UploadMultiple)
				.with_label("Upload multiple")
				.with_attribute("disk", "uploads"),
			FieldDefinition::new("image", FieldType::Image)
				.with_label("Image")
				.with_attribute("crop", true)
				.with_attribute("aspect_ratio", 1),
			FieldDefinition::new("base64_image", FieldType::Base64Image)
				.with_label("Base64 Image")
				.with_attribute("filename", "image_filename"),
			half(FieldDefinition::new("browse", FieldType::Browse).with_label("Browse (elFinder)")),
			half(
				FieldDefinition::new("browse_multiple", FieldType::BrowseMultiple)
					.with_label("Browse multiple (elFinder)"),
			),
		]
	}

	fn big_texts_tab(&self) -> Vec<FieldDefinition> {
		vec![
			FieldDefinition::new("wysiwyg", FieldType::Wysiwyg).with_label("Wysiwyg"),
			FieldDefinition::new("ckeditor", FieldType::Ckeditor).with_label("CKEditor"),
			FieldDefinition::new("tinymce", FieldType::Tinymce).with_label("TinyMCE"),
			FieldDefinition::new("summernote", FieldType::Summernote).with_label("Summernote"),
			FieldDefinition::new("easymde", FieldType::Easymde).with_label("EasyMDE"),
			FieldDefinition::new("table", FieldType::Table)
				.with_label("Table")
				.with_attribute("entity_singular", "option")
				.with_attribute("columns", json!({"name": "Name", "desc": "Description", "price": "Price"}))
				.with_attribute("max", 5)
				.with_attribute("min", 0),
		]
	}

	fn miscellaneous_tab(&self) -> Vec<FieldDefinition> {
		vec![
			FieldDefinition::unnamed(FieldType::CustomHtml)
				.with_attribute("value", "<hr>"),
			half(FieldDefinition::new("color", FieldType::Color).with_label("Color (HTML5)")),
			half(
				FieldDefinition::new("color_picker", FieldType::ColorPicker)
					.with_label("Color picker")
					.with_attribute("default", "#000000"),
			),
			half(
				FieldDefinition::new("icon_picker", FieldType::IconPicker)
					.with_label("Icon picker")
					.with_attribute("iconset", "fontawesome"),
			),
			half(
				FieldDefinition::new("video", FieldType::Video)
					.with_label("Video (YouTube or Vimeo)"),
			),
			FieldDefinition::new(["type", "link", "page_id"], FieldType::PageOrLink)
				.with_label("Page or link")
				.with_attribute("page_model", "Page"),
			FieldDefinition::new("rating", FieldType::Custom("star_rating".to_string()))
				.with_label("Rating"),
		]
	}
}
