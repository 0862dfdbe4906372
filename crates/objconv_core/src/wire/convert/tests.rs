use objconv_testkit::load_fixture_json;
use serde_json::{Map, Value, json};

use super::{ConvertOptions, Converter, convert_result};
use crate::wire::{Converted, Diagnostic, NullSink, ObjectKind, OpaqueFields, RecordingSink, Registry, Symbol, TypedObject};

fn convert_recorded(value: &Value) -> (Converted, Vec<Diagnostic>) {
	let sink = RecordingSink::new();
	let converted = Converter::new(Registry::builtin())
		.with_options(ConvertOptions::verbose())
		.with_sink(&sink)
		.convert(value);
	(converted, sink.take())
}

fn expect_object(value: &Converted, kind: ObjectKind) -> &TypedObject {
	match value {
		Converted::Object(item) if item.kind == kind => item,
		other => panic!("expected {kind:?} object, got {other:?}"),
	}
}

fn string(value: &str) -> Converted {
	Converted::String(value.into())
}

/// Re-encode a converted tree with string keys, the way a caller would put it back on the wire.
fn restringify(value: &Converted) -> Value {
	match value {
		Converted::Null => Value::Null,
		Converted::Bool(value) => Value::Bool(*value),
		Converted::Number(value) => Value::Number(value.clone()),
		Converted::String(value) => Value::String(value.to_string()),
		Converted::Seq(items) => Value::Array(items.iter().map(restringify).collect()),
		Converted::Map(items) => Value::Object(items.iter().map(|(key, value)| (key.as_str().to_owned(), restringify(value))).collect()),
		Converted::Object(item) => {
			let mut out = Map::new();
			out.insert("object".to_owned(), Value::String(item.kind.discriminator().to_owned()));
			for field in &item.fields {
				out.insert(field.name.to_owned(), restringify(&field.value));
			}
			Value::Object(out)
		}
		Converted::Raw(raw) => raw.clone(),
	}
}

#[test]
fn card_record_converts_to_card_instance() {
	let (converted, diagnostics) = convert_recorded(&json!({"object": "card", "id": "card_1", "brand": "Visa"}));

	let card = expect_object(&converted, ObjectKind::Card);
	assert_eq!(card.type_name(), "Card");
	assert_eq!(card.get("id"), Some(&string("card_1")));
	assert_eq!(card.get("brand"), Some(&string("Visa")));
	assert!(diagnostics.is_empty(), "unexpected diagnostics: {diagnostics:?}");
}

#[test]
fn missing_declared_fields_are_null() {
	let (converted, _) = convert_recorded(&json!({"object": "card", "id": "card_1"}));
	let card = expect_object(&converted, ObjectKind::Card);

	assert_eq!(card.fields.len(), ObjectKind::Card.fields().len());
	assert_eq!(card.get("last4"), Some(&Converted::Null));
	assert_eq!(card.get("metadata"), Some(&Converted::Null));
}

#[test]
fn fully_populated_record_keeps_every_declared_field() {
	let registry = Registry::builtin();
	let plain = Converter::new(registry).with_sink(NullSink);
	let mut checked = 0;

	for descriptor in registry.descriptors().iter().filter(|descriptor| descriptor.finalize.is_none()) {
		let mut record = Map::new();
		record.insert("object".to_owned(), json!(descriptor.discriminator));
		for (index, field) in descriptor.fields.iter().enumerate() {
			record.insert((*field).to_owned(), json!(index));
		}
		if descriptor.declares("metadata") {
			record.insert("metadata".to_owned(), json!({"order": {"object": "card", "id": "nested"}}));
		}

		let (converted, diagnostics) = convert_recorded(&Value::Object(record.clone()));
		let object = expect_object(&converted, descriptor.kind);
		assert_eq!(object.fields.len(), descriptor.fields.len(), "{}", descriptor.discriminator);

		for field in &object.fields {
			let raw = &record[field.name];
			if registry.opaque().contains(field.name) {
				assert_eq!(field.value, Converted::Raw(raw.clone()), "{}.{}", descriptor.discriminator, field.name);
			} else {
				assert_eq!(field.value, plain.convert(raw), "{}.{}", descriptor.discriminator, field.name);
			}
		}
		assert!(diagnostics.is_empty(), "{}: {diagnostics:?}", descriptor.discriminator);
		checked += 1;
	}

	assert_eq!(checked + 4, ObjectKind::ALL.len());
}

#[test]
fn explicit_null_matches_absent_field() {
	let absent = convert_result(&json!({"object": "card", "id": "card_1"}));
	let explicit = convert_result(&json!({"object": "card", "id": "card_1", "metadata": null, "brand": null}));

	assert_eq!(explicit, absent);
	let card = expect_object(&explicit, ObjectKind::Card);
	assert_eq!(card.get("metadata"), Some(&Converted::Null));
}

#[test]
fn unknown_discriminator_falls_back_to_generic_map() {
	let (converted, diagnostics) = convert_recorded(&json!({"object": "mystery_widget", "id": "x"}));

	let Converted::Map(map) = converted else {
		panic!("expected generic map");
	};
	assert_eq!(map.len(), 2);
	assert_eq!(map.get("object"), Some(&string("mystery_widget")));
	assert_eq!(map.get("id"), Some(&string("x")));
	#[cfg(feature = "diagnostics")]
	assert_eq!(
		diagnostics,
		[Diagnostic::UnknownObject {
			object: "mystery_widget".to_owned()
		}]
	);
	#[cfg(not(feature = "diagnostics"))]
	assert!(diagnostics.is_empty());
}

#[test]
fn extra_fields_are_dropped_and_reported_once() {
	let (converted, diagnostics) = convert_recorded(&json!({
		"object": "card",
		"id": "card_1",
		"unexpected_field": "z",
		"another_field": {"object": "card", "id": "card_2"}
	}));
	let (baseline, _) = convert_recorded(&json!({"object": "card", "id": "card_1"}));

	let card = expect_object(&converted, ObjectKind::Card);
	assert!(card.get("unexpected_field").is_none());
	assert!(card.fields.iter().all(|field| field.name != "another_field"));
	assert_eq!(converted, baseline);
	#[cfg(feature = "diagnostics")]
	assert_eq!(
		diagnostics,
		[Diagnostic::ExtraKeys {
			type_name: "Card",
			keys: vec!["another_field".to_owned(), "unexpected_field".to_owned()],
		}]
	);
	#[cfg(not(feature = "diagnostics"))]
	assert!(diagnostics.is_empty());
}

#[test]
fn quiet_options_suppress_all_diagnostics() {
	let sink = RecordingSink::new();
	let converter = Converter::new(Registry::builtin()).with_options(ConvertOptions::quiet()).with_sink(&sink);

	let converted = converter.convert(&json!([
		{"object": "mystery_widget"},
		{"object": "card", "id": "card_1", "unexpected_field": true}
	]));

	assert!(sink.snapshot().is_empty());
	let items = converted.as_seq().expect("sequence");
	assert!(items[0].as_map().is_some());
	assert!(items[1].as_object_of(ObjectKind::Card).is_some());
}

#[test]
fn record_without_discriminator_is_generic_and_recursive() {
	let (converted, diagnostics) = convert_recorded(&json!({
		"count": 2,
		"default_card": {"object": "card", "id": "card_9"},
		"tags": ["a", {"object": "coupon", "id": "SAVE"}]
	}));

	let map = converted.as_map().expect("generic map");
	assert_eq!(map.keys().map(Symbol::as_str).collect::<Vec<_>>(), ["count", "default_card", "tags"]);
	assert_eq!(map.get("count").and_then(Converted::as_u64), Some(2));
	assert!(map.get("default_card").and_then(|value| value.as_object_of(ObjectKind::Card)).is_some());

	let tags = map.get("tags").and_then(Converted::as_seq).expect("tags sequence");
	assert_eq!(tags[0], string("a"));
	assert_eq!(tags[1].as_object_of(ObjectKind::Coupon).and_then(|item| item.get("id")), Some(&string("SAVE")));
	assert!(diagnostics.is_empty());
}

#[test]
fn non_string_discriminator_is_treated_as_absent() {
	for record in [json!({"object": 7, "id": "x"}), json!({"object": null}), json!({"object": {"object": "card"}})] {
		let (converted, diagnostics) = convert_recorded(&record);
		let map = converted.as_map().expect("generic map");
		assert_eq!(map.len(), record.as_object().map_or(0, Map::len));
		assert!(diagnostics.is_empty(), "no unknown-object diagnostic for {record}");
	}

	let (converted, _) = convert_recorded(&json!({"object": {"object": "card", "id": "inner"}}));
	let inner = converted.as_map().and_then(|map| map.get("object")).expect("inner record");
	assert!(inner.as_object_of(ObjectKind::Card).is_some(), "nested record still converts");
}

#[test]
fn sequences_convert_element_wise() {
	let input = json!([
		{"object": "card", "id": "card_1"},
		{"object": "card", "id": "card_2"}
	]);
	let (converted, _) = convert_recorded(&input);

	let items = converted.as_seq().expect("sequence");
	assert_eq!(items.len(), 2);
	assert_eq!(expect_object(&items[0], ObjectKind::Card).get("id"), Some(&string("card_1")));
	assert_eq!(expect_object(&items[1], ObjectKind::Card).get("id"), Some(&string("card_2")));

	let converter = Converter::new(Registry::builtin()).with_sink(NullSink);
	let elements = input.as_array().expect("array");
	let one_by_one: Vec<_> = elements.iter().map(|item| converter.convert(item)).collect();
	assert_eq!(converter.convert(&input), Converted::Seq(one_by_one));
}

#[test]
fn empty_containers_and_scalars_pass_through() {
	let (converted, _) = convert_recorded(&json!([]));
	assert_eq!(converted, Converted::Seq(Vec::new()));

	let (converted, _) = convert_recorded(&json!({}));
	assert_eq!(converted, Converted::Map(Default::default()));

	assert_eq!(convert_result(&json!(null)), Converted::Null);
	assert_eq!(convert_result(&json!(true)), Converted::Bool(true));
	assert_eq!(convert_result(&json!(-1.5)), Converted::Number(serde_json::Number::from_f64(-1.5).expect("finite")));
	assert_eq!(convert_result(&json!("plain")), string("plain"));
}

#[test]
fn opaque_fields_are_never_converted() {
	let metadata = json!({
		"nested": {"object": "card", "id": "card_in_metadata"},
		"list": [{"object": "charge"}]
	});
	let (converted, diagnostics) = convert_recorded(&json!({"object": "customer", "id": "cus_1", "metadata": metadata}));

	let customer = expect_object(&converted, ObjectKind::Customer);
	assert_eq!(customer.get("metadata"), Some(&Converted::Raw(metadata)));
	assert!(diagnostics.is_empty());
}

#[test]
fn supported_currencies_map_stays_raw() {
	let currencies = json!({"us": ["usd"], "ca": ["cad", "usd"]});
	let converted = convert_result(&json!({
		"object": "country_spec",
		"id": "US",
		"supported_bank_account_currencies": currencies
	}));

	let country = expect_object(&converted, ObjectKind::CountrySpec);
	assert_eq!(country.get("supported_bank_account_currencies"), Some(&Converted::Raw(currencies)));
}

#[test]
fn opaque_names_only_apply_to_typed_fields() {
	let (converted, _) = convert_recorded(&json!({"metadata": {"object": "card", "id": "card_1"}}));

	let map = converted.as_map().expect("generic map");
	assert!(map.get("metadata").and_then(|value| value.as_object_of(ObjectKind::Card)).is_some());
}

#[test]
fn custom_opaque_set_controls_pass_through() {
	let registry = Registry::new(&[ObjectKind::Card, ObjectKind::Customer], OpaqueFields::new(["default_source"])).expect("registry builds");
	let source = json!({"object": "card", "id": "card_1"});
	let converted = Converter::new(&registry)
		.with_sink(NullSink)
		.convert(&json!({"object": "customer", "metadata": {"a": "b"}, "default_source": source}));

	let customer = expect_object(&converted, ObjectKind::Customer);
	assert_eq!(customer.get("default_source"), Some(&Converted::Raw(source)));
	let metadata = customer.get("metadata").and_then(Converted::as_map).expect("metadata converted");
	assert_eq!(metadata.get("a"), Some(&string("b")));
}

#[test]
fn nested_typed_objects_convert_recursively() {
	let converted = convert_result(&json!({
		"object": "customer",
		"id": "cus_1",
		"sources": {
			"object": "list",
			"data": [{"object": "card", "id": "card_1"}, {"object": "bank_account", "id": "ba_1"}],
			"has_more": false,
			"url": "/v1/customers/cus_1/sources"
		}
	}));

	let customer = expect_object(&converted, ObjectKind::Customer);
	let sources = customer.get("sources").map(|value| expect_object(value, ObjectKind::List)).expect("sources list");
	let data = sources.get("data").and_then(Converted::as_seq).expect("data");
	assert!(data[0].as_object_of(ObjectKind::Card).is_some());
	assert!(data[1].as_object_of(ObjectKind::BankAccount).is_some());
}

#[test]
fn finalize_hooks_run_after_population() {
	let converted = convert_result(&json!({
		"object": "event",
		"id": "evt_1",
		"request": "req_1",
		"data": {"object": {"object": "charge", "id": "ch_1", "refunds": [{"object": "refund", "id": "re_1"}]}}
	}));

	let event = expect_object(&converted, ObjectKind::Event);
	let request = event.get("request").and_then(Converted::as_map).expect("request map");
	assert_eq!(request.get("id"), Some(&string("req_1")));

	let data = event.get("data").and_then(Converted::as_map).expect("event data");
	let charge = data.get("object").map(|value| expect_object(value, ObjectKind::Charge)).expect("charge");
	let refunds = charge.get("refunds").map(|value| expect_object(value, ObjectKind::List)).expect("refunds list");
	let data = refunds.get("data").and_then(Converted::as_seq).expect("refund data");
	assert!(data[0].as_object_of(ObjectKind::Refund).is_some());
}

#[test]
fn generic_conversion_is_idempotent_over_restringified_keys() {
	let input = json!({
		"page": {"next": null, "cursor": "abc"},
		"cards": [{"object": "card", "id": "card_1", "metadata": {"k": "v"}}],
		"unknown": {"object": "mystery_widget", "inner": {"object": "coupon", "id": "C"}}
	});
	let converter = Converter::new(Registry::builtin()).with_sink(NullSink);

	let first = converter.convert(&input);
	let second = converter.convert(&restringify(&first));
	assert_eq!(first, second);
}

#[test]
fn conversion_is_deterministic_and_leaves_input_untouched() {
	let input = json!({"object": "subscription", "id": "sub_1", "items": {"object": "list", "data": [{"object": "subscription_item", "quantity": 2}]}});
	let copy = input.clone();

	let first = convert_result(&input);
	let second = convert_result(&input);
	assert_eq!(first, second);
	assert_eq!(input, copy);

	let subscription = expect_object(&first, ObjectKind::Subscription);
	assert_eq!(subscription.get("quantity").and_then(Converted::as_u64), Some(2));
}

#[test]
fn converter_is_shareable_across_threads() {
	let converter = Converter::new(Registry::builtin()).with_sink(NullSink);
	let input = json!({"object": "card", "id": "card_1"});

	std::thread::scope(|scope| {
		let handles: Vec<_> = (0..4).map(|_| scope.spawn(|| converter.convert(&input))).collect();
		for handle in handles {
			let converted = handle.join().expect("thread joins");
			assert!(converted.as_object_of(ObjectKind::Card).is_some());
		}
	});
}

#[test]
fn list_fixture_converts_every_entry() {
	let input = load_fixture_json("charge_list.json");
	let (converted, diagnostics) = convert_recorded(&input);

	let list = expect_object(&converted, ObjectKind::List);
	let data = list.get("data").and_then(Converted::as_seq).expect("data");
	assert_eq!(data.len(), 2);
	for item in data {
		let charge = expect_object(item, ObjectKind::Charge);
		assert!(charge.get("id").and_then(Converted::as_str).is_some_and(|id| id.starts_with("ch_")));
		assert!(matches!(charge.get("metadata"), Some(Converted::Raw(_))));
	}
	#[cfg(feature = "diagnostics")]
	assert_eq!(
		diagnostics,
		[Diagnostic::ExtraKeys {
			type_name: "Charge",
			keys: vec!["radar_options".to_owned()],
		}]
	);
	#[cfg(not(feature = "diagnostics"))]
	assert!(diagnostics.is_empty());
}
