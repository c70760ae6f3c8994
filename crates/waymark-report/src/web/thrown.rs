//! Report bodies from thrown JS values.

use crate::report::{BaseErrorBody, ErrorBody, ErrorDetails};
use js_sys::{JSON, Reflect};
use wasm_bindgen::JsValue;
use web_sys::ErrorEvent;

fn property(value: &JsValue, name: &str) -> Option<JsValue> {
	Reflect::get(value, &JsValue::from_str(name))
		.ok()
		.filter(|field| !field.is_undefined())
}

fn string_property(value: &JsValue, name: &str) -> Option<String> {
	property(value, name).and_then(|field| field.as_string())
}

fn to_json(value: &JsValue) -> Option<String> {
	JSON::stringify(value).ok().and_then(|json| json.as_string())
}

fn type_name(value: &JsValue) -> String {
	if value.is_object() || value.is_function() {
		if let Some(name) = property(value, "constructor").and_then(|ctor| string_property(&ctor, "name")) {
			return name;
		}
	}
	let typeof_name = value.js_typeof().as_string().unwrap_or_default();
	// Primitives report the name of their wrapper constructor.
	match typeof_name.as_str() {
		"string" => "String".to_string(),
		"number" => "Number".to_string(),
		"boolean" => "Boolean".to_string(),
		"bigint" => "BigInt".to_string(),
		"symbol" => "Symbol".to_string(),
		_ => typeof_name,
	}
}

fn details(value: &JsValue) -> Option<ErrorDetails> {
	if value.is_null() || value.is_undefined() {
		return None;
	}
	if !(value.is_object() || value.is_function()) {
		return Some(ErrorDetails::default());
	}
	Some(ErrorDetails {
		message: string_property(value, "message"),
		cause: property(value, "cause")
			.and_then(|cause| to_json(&cause))
			.and_then(|json| serde_json::from_str(&json).ok()),
		stack: string_property(value, "stack"),
		name: string_property(value, "name"),
		code: property(value, "code")
			.and_then(|code| code.as_f64())
			.map(|code| code as i64),
	})
}

/// Describes a thrown value or rejection reason.
pub fn base_body_from_js(value: &JsValue) -> BaseErrorBody {
	BaseErrorBody {
		kind: type_name(value),
		raw: to_json(value).filter(|json| json != "{}"),
		error: details(value),
	}
}

/// Describes an `error` event.
pub fn error_body_from_event(event: &ErrorEvent) -> ErrorBody {
	ErrorBody {
		colno: event.colno(),
		filename: event.filename(),
		lineno: event.lineno(),
		message: event.message(),
		base: base_body_from_js(&event.error()),
	}
}
