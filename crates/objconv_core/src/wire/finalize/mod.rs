//! Type-specific fixups applied after an instance's declared fields are populated.
//!
//! Hooks only rewrite declared fields. They reshape legacy wire layouts into the layout the target
//! type exposes today.

use serde_json::Number;

use crate::wire::{Converted, FinalizeFn, GenericMap, ObjectKind, Symbol, TypeDescriptor, TypedObject};

/// Builtin finalize hook for `kind`.
pub(crate) fn hook_for(kind: ObjectKind) -> Option<FinalizeFn> {
	match kind {
		ObjectKind::Event => Some(finalize_event),
		ObjectKind::Charge => Some(finalize_charge),
		ObjectKind::Customer => Some(finalize_customer),
		ObjectKind::Subscription => Some(finalize_subscription),
		_ => None,
	}
}

/// Older API versions send `request` as the bare request id.
fn finalize_event(object: &mut TypedObject) {
	let Some(Converted::String(id)) = object.get("request") else {
		return;
	};

	let mut request = GenericMap::new();
	request.insert(Symbol::new("id"), Converted::String(id.clone()));
	request.insert(Symbol::new("idempotency_key"), Converted::Null);
	object.set("request", Converted::Map(request));
}

fn finalize_charge(object: &mut TypedObject) {
	wrap_bare_list(object, "refunds");
}

fn finalize_customer(object: &mut TypedObject) {
	for field in ["sources", "subscriptions", "tax_ids"] {
		wrap_bare_list(object, field);
	}
}

/// Single-item subscriptions expose the item's plan and quantity at the top level.
fn finalize_subscription(object: &mut TypedObject) {
	let top_level_set = object.get("plan").is_some_and(|value| !value.is_null()) || object.get("quantity").is_some_and(|value| !value.is_null());
	if top_level_set {
		return;
	}

	let Some(item) = single_list_item(object.get("items"), ObjectKind::SubscriptionItem) else {
		return;
	};
	let plan = item.get("plan").cloned().unwrap_or_default();
	let quantity = item.get("quantity").cloned().unwrap_or_default();

	object.set("plan", plan);
	object.set("quantity", quantity);
}

/// Replace a bare sequence with the `list` object the paginated shape uses.
fn wrap_bare_list(object: &mut TypedObject, field: &str) {
	if !matches!(object.get(field), Some(Converted::Seq(_))) {
		return;
	}
	let Some(Converted::Seq(items)) = object.take(field) else {
		return;
	};
	object.set(field, Converted::Object(list_object(items)));
}

fn list_object(items: Vec<Converted>) -> TypedObject {
	let mut list = TypeDescriptor::for_kind(ObjectKind::List).instantiate();
	list.set("total_count", Converted::Number(Number::from(items.len() as u64)));
	list.set("has_more", Converted::Bool(false));
	list.set("data", Converted::Seq(items));
	list
}

fn single_list_item(value: Option<&Converted>, kind: ObjectKind) -> Option<&TypedObject> {
	let list = value?.as_object_of(ObjectKind::List)?;
	match list.get("data")?.as_seq()? {
		[item] => item.as_object_of(kind),
		_ => None,
	}
}
