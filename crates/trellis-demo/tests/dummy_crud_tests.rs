//! Dummy CRUD controller tests
//!
//! Covers the repeatable group filter, the show-page table columns and the
//! per-operation panel configuration of the Dummy controller.

use proptest::prelude::*;
use rstest::*;
use serde_json::json;
use std::sync::{Arc, Mutex};
use trellis_demo::groups::{self, split_multi_name_fields, table_sub_columns};
use trellis_demo::{
	DummyCrudController, EXCLUDED_FIELD_TYPES, FieldGroup, FieldProvider, MonsterFields,
};
use trellis_panel::{
	AdminSettings, ColumnType, CrudController, CrudError, CrudPanel, FieldDefinition, FieldName,
	FieldType, Operation,
};

#[fixture]
fn controller() -> DummyCrudController {
	DummyCrudController::new()
}

fn configure(controller: &DummyCrudController, operation: Operation) -> CrudPanel {
	controller
		.configure(operation, &AdminSettings::default())
		.unwrap()
}

fn column_names(panel: &CrudPanel) -> Vec<&str> {
	panel.columns().map(|c| c.name.as_str()).collect()
}

// ---------------------------------------------------------------------------
// Groups
// ---------------------------------------------------------------------------

#[rstest]
fn test_groups_follow_tab_order(controller: DummyCrudController) {
	let groups = controller.groups();
	let keys: Vec<&str> = groups.keys().map(FieldGroup::key).collect();

	assert_eq!(
		keys,
		[
			"simple",
			"time_and_space",
			"relationships",
			"selects",
			"uploads",
			"big_texts",
			"miscellaneous"
		]
	);
}

#[rstest]
fn test_groups_contain_no_excluded_type(controller: DummyCrudController) {
	for (group, fields) in controller.groups() {
		for field in fields {
			assert!(
				!EXCLUDED_FIELD_TYPES.contains(&field.field_type.as_str()),
				"{group} kept a {} field",
				field.field_type
			);
		}
	}
}

#[rstest]
fn test_upload_never_survives(controller: DummyCrudController) {
	let uploads = &controller.groups()[&FieldGroup::Uploads];
	let names: Vec<_> = uploads.iter().filter_map(|f| f.single_name()).collect();

	assert_eq!(
		names,
		["image", "base64_image", "browse", "browse_multiple"]
	);
}

#[rstest]
#[case(FieldGroup::Simple, "Simple")]
#[case(FieldGroup::TimeAndSpace, "Time And Space")]
#[case(FieldGroup::BigTexts, "Big Texts")]
#[case(FieldGroup::Miscellaneous, "Miscellaneous")]
fn test_group_labels(#[case] group: FieldGroup, #[case] expected: &str) {
	assert_eq!(group.label(), expected);
}

#[rstest]
fn test_groups_are_recomputed(controller: DummyCrudController) {
	assert_eq!(controller.groups(), controller.groups());
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

#[rstest]
fn test_shared_setup(controller: DummyCrudController) {
	for operation in Operation::ALL {
		let panel = configure(&controller, operation);
		assert_eq!(panel.model(), Some("Dummy"));
		assert_eq!(panel.route(), Some("admin/dummy"));

		let entity = panel.entity_name().unwrap();
		assert_eq!(entity.singular, "dummy");
		assert_eq!(entity.plural, "dummies");
	}
}

#[rstest]
fn test_route_follows_settings(controller: DummyCrudController) {
	let settings = AdminSettings {
		route_prefix: "backoffice/".to_string(),
	};
	let panel = controller.configure(Operation::List, &settings).unwrap();
	assert_eq!(panel.route(), Some("backoffice/dummy"));
}

#[rstest]
fn test_list_columns(controller: DummyCrudController) {
	let panel = configure(&controller, Operation::List);

	assert_eq!(
		column_names(&panel),
		[
			"name",
			"description",
			"simple",
			"time_and_space",
			"relationships",
			"selects",
			"uploads",
			"big_texts",
			"miscellaneous"
		]
	);
	let big_texts = panel.column("big_texts").unwrap();
	assert_eq!(big_texts.label, "Big Texts");
	assert_eq!(big_texts.column_type, ColumnType::ArrayCount);
	assert_eq!(panel.column("name").unwrap().column_type, ColumnType::Text);
}

#[rstest]
fn test_create_fields(controller: DummyCrudController) {
	let panel = configure(&controller, Operation::Create);
	let groups = controller.groups();

	assert_eq!(panel.fields().count(), 2 + groups.len());
	assert_eq!(panel.operation_setting("contentClass"), Some(&json!("col-md-12")));
	assert_eq!(panel.validator().map(|v| v.name()), Some("DummyRequest"));

	for (group, fields) in groups {
		let field = panel.field(group.key()).unwrap();
		assert_eq!(field.field_type, FieldType::Repeatable);
		assert_eq!(field.label.as_deref(), Some(group.label().as_str()));
		assert!(field.fake);
		assert_eq!(field.store_in.as_deref(), Some("extras"));
		assert_eq!(field.subfields, fields);
	}
}

#[rstest]
fn test_update_matches_create(controller: DummyCrudController) {
	let create = configure(&controller, Operation::Create);
	let update = configure(&controller, Operation::Update);

	let mut create_json = serde_json::to_value(create.snapshot()).unwrap();
	let mut update_json = serde_json::to_value(update.snapshot()).unwrap();
	create_json["operation"] = json!(null);
	update_json["operation"] = json!(null);

	assert_eq!(create_json, update_json);
}

#[rstest]
fn test_delete_adds_nothing(controller: DummyCrudController) {
	let panel = configure(&controller, Operation::Delete);

	assert_eq!(panel.columns().count(), 0);
	assert_eq!(panel.fields().count(), 0);
	assert!(panel.operation_setting("contentClass").is_none());
}

#[rstest]
fn test_show_columns(controller: DummyCrudController) {
	let panel = configure(&controller, Operation::Show);

	assert_eq!(
		column_names(&panel),
		[
			"name",
			"description",
			"simple",
			"time_and_space",
			"relationships",
			"selects",
			"uploads",
			"big_texts",
			"miscellaneous",
			"created_at",
			"updated_at"
		]
	);
	assert_eq!(panel.operation_setting("contentClass"), Some(&json!("col-md-12")));

	for group in FieldGroup::ALL {
		assert_eq!(panel.column(group.key()).unwrap().column_type, ColumnType::Table);
	}
	let created = panel.column("created_at").unwrap();
	assert_eq!(created.column_type, ColumnType::Datetime);
	assert_eq!(created.label, "Created at");
}

#[rstest]
fn test_show_splits_date_range(controller: DummyCrudController) {
	let panel = configure(&controller, Operation::Show);
	let columns = &panel.column("time_and_space").unwrap().columns;

	let keys: Vec<&str> = columns.keys().map(String::as_str).collect();
	assert_eq!(keys[keys.len() - 2..], ["start_date", "end_date"]);
	assert_eq!(columns["start_date"], "Date Range");
	assert!(!columns.contains_key("time_heading"));
	assert!(!columns.contains_key("address_algolia"));
}

#[rstest]
fn test_show_skips_unlabelled_fields(controller: DummyCrudController) {
	let panel = configure(&controller, Operation::Show);
	let simple = &panel.column("simple").unwrap().columns;

	assert!(simple.contains_key("text"));
	assert!(!simple.contains_key("hidden"));
	assert!(!simple.contains_key("simple_heading"));
}

#[rstest]
fn test_show_keeps_custom_field_types(controller: DummyCrudController) {
	let panel = configure(&controller, Operation::Show);
	let misc = &panel.column("miscellaneous").unwrap().columns;

	assert_eq!(misc.get("rating").map(String::as_str), Some("Rating"));
	assert!(!misc.contains_key("type"));
}

#[rstest]
fn test_nameless_fields() {
	struct Shelf;

	impl FieldProvider for Shelf {
		fn simple_tab(&self) -> Vec<FieldDefinition> {
			vec![FieldDefinition::unnamed(FieldType::Text).with_label("Nameless")]
		}
		fn time_and_space_tab(&self) -> Vec<FieldDefinition> {
			Vec::new()
		}
		fn relationships_tab(&self) -> Vec<FieldDefinition> {
			Vec::new()
		}
		fn selects_tab(&self) -> Vec<FieldDefinition> {
			Vec::new()
		}
		fn uploads_tab(&self) -> Vec<FieldDefinition> {
			Vec::new()
		}
		fn big_texts_tab(&self) -> Vec<FieldDefinition> {
			Vec::new()
		}
		fn miscellaneous_tab(&self) -> Vec<FieldDefinition> {
			Vec::new()
		}
	}

	// Sub-fields are not registered on their own, so a nameless one only
	// drops out of the show table.
	let controller = DummyCrudController::with_provider(Shelf);
	let panel = controller
		.configure(Operation::Show, &AdminSettings::default())
		.unwrap();
	assert!(panel.column("simple").unwrap().columns.is_empty());

	let err = CrudPanel::new(Operation::Create)
		.add_field(FieldDefinition::unnamed(FieldType::Text))
		.map(|_| ())
		.unwrap_err();
	assert!(matches!(err, CrudError::UnnamedField(_)));
}

#[rstest]
fn test_snapshot_shape(controller: DummyCrudController) {
	let panel = configure(&controller, Operation::Create);
	let snapshot = serde_json::to_value(panel.snapshot()).unwrap();

	assert_eq!(snapshot["operation"], "create");
	assert_eq!(snapshot["model"], "Dummy");
	assert_eq!(snapshot["validation"], "DummyRequest");
	assert_eq!(snapshot["fields"][2]["name"], "simple");
	assert_eq!(snapshot["fields"][2]["type"], "repeatable");
	assert_eq!(snapshot["fields"][2]["fake"], true);
	assert_eq!(snapshot["fields"][2]["store_in"], "extras");
	assert!(snapshot["fields"][2]["fields"].is_array());
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// Tracing layer collecting the `field_type` of every dropped field
struct DropCapture {
	dropped: Arc<Mutex<Vec<String>>>,
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for DropCapture {
	fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
		struct FieldTypeVisitor {
			field_type: Option<String>,
		}

		impl tracing::field::Visit for FieldTypeVisitor {
			fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
				if field.name() == "field_type" {
					self.field_type = Some(format!("{:?}", value));
				}
			}
		}

		let mut visitor = FieldTypeVisitor { field_type: None };
		event.record(&mut visitor);
		if let Some(field_type) = visitor.field_type {
			self.dropped.lock().unwrap().push(field_type);
		}
	}
}

#[rstest]
fn test_dropped_fields_are_traced() {
	use tracing_subscriber::layer::SubscriberExt as _;
	use tracing_subscriber::util::SubscriberInitExt as _;

	let dropped = Arc::new(Mutex::new(Vec::new()));
	let capture = DropCapture {
		dropped: Arc::clone(&dropped),
	};
	let _guard = tracing_subscriber::registry().with(capture).set_default();

	groups::groups(&MonsterFields);

	let dropped = dropped.lock().unwrap();
	assert!(dropped.iter().any(|t| t == "upload"));
	assert!(dropped.iter().any(|t| t == "page_or_link"));
	assert!(dropped.iter().all(|t| EXCLUDED_FIELD_TYPES.contains(&t.as_str())));
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

const TYPE_POOL: &[&str] = &[
	"text",
	"date_range",
	"upload",
	"custom_html",
	"enum",
	"select2",
	"address",
	"table",
	"star_rating",
	"page_or_link",
];

fn arb_field() -> impl Strategy<Value = FieldDefinition> {
	let name = prop_oneof![
		Just(None),
		"[a-z]{1,6}".prop_map(|n| Some(FieldName::Single(n))),
		prop::collection::vec("[a-z]{1,6}", 1..4).prop_map(|n| Some(FieldName::Multiple(n))),
	];
	let label = prop::option::of("[A-Z][a-z]{0,6}");
	(name, prop::sample::select(TYPE_POOL), label).prop_map(|(name, field_type, label)| {
		FieldDefinition {
			name,
			label,
			..FieldDefinition::unnamed(field_type)
		}
	})
}

/// Provider returning the same list for every tab
struct Uniform(Vec<FieldDefinition>);

impl FieldProvider for Uniform {
	fn simple_tab(&self) -> Vec<FieldDefinition> {
		self.0.clone()
	}
	fn time_and_space_tab(&self) -> Vec<FieldDefinition> {
		self.0.clone()
	}
	fn relationships_tab(&self) -> Vec<FieldDefinition> {
		self.0.clone()
	}
	fn selects_tab(&self) -> Vec<FieldDefinition> {
		self.0.clone()
	}
	fn uploads_tab(&self) -> Vec<FieldDefinition> {
		self.0.clone()
	}
	fn big_texts_tab(&self) -> Vec<FieldDefinition> {
		self.0.clone()
	}
	fn miscellaneous_tab(&self) -> Vec<FieldDefinition> {
		self.0.clone()
	}
}

proptest! {
	#[test]
	fn prop_filter_drops_excluded_and_keeps_order(fields in prop::collection::vec(arb_field(), 0..12)) {
		let expected: Vec<FieldDefinition> = fields
			.iter()
			.filter(|f| !EXCLUDED_FIELD_TYPES.contains(&f.field_type.as_str()))
			.cloned()
			.collect();

		let groups = groups::groups(&Uniform(fields));

		prop_assert_eq!(groups.len(), 7);
		for kept in groups.values() {
			prop_assert_eq!(kept, &expected);
		}
	}

	#[test]
	fn prop_split_yields_one_text_field_per_name(fields in prop::collection::vec(arb_field(), 0..12)) {
		let single = fields.iter().filter(|f| !f.has_multiple_names()).count();
		let components: Vec<String> = fields
			.iter()
			.filter(|f| f.has_multiple_names())
			.flat_map(|f| f.name.as_ref().map(FieldName::components).unwrap_or_default())
			.map(str::to_string)
			.collect();

		let mut working = fields.clone();
		split_multi_name_fields(&mut working);

		prop_assert_eq!(working.len(), single + components.len());
		prop_assert!(working.iter().all(|f| !f.has_multiple_names()));
		let tail: Vec<String> = working[single..]
			.iter()
			.map(|f| f.single_name().unwrap_or_default().to_string())
			.collect();
		prop_assert_eq!(tail, components);
		prop_assert!(working[single..].iter().all(|f| f.field_type == FieldType::Text));
	}

	#[test]
	fn prop_label_map_only_holds_labelled_named_fields(fields in prop::collection::vec(arb_field(), 0..12)) {
		let columns = table_sub_columns(&fields);

		for (name, label) in &columns {
			let last = fields
				.iter()
				.filter(|f| f.field_type != FieldType::CustomHtml && f.label.is_some())
				.filter(|f| f.single_name() == Some(name.as_str()))
				.last();
			prop_assert!(last.is_some());
			prop_assert_eq!(last.and_then(|f| f.label.as_ref()), Some(label));
		}
	}
}
