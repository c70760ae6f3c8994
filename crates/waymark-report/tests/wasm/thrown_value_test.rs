//! Report bodies built from thrown JS values
//!
//! Run with `wasm-pack test --headless --chrome crates/waymark-report`.

#[cfg(target_arch = "wasm32")]
mod wasm_thrown_tests {
	use wasm_bindgen::JsValue;
	use wasm_bindgen_test::*;
	use waymark_report::web::base_body_from_js;

	wasm_bindgen_test_configure!(run_in_browser);

	#[wasm_bindgen_test]
	fn test_error_object() {
		let error = js_sys::Error::new("boom");

		let body = base_body_from_js(&error.into());

		assert_eq!(body.kind, "Error");
		// Error fields are not enumerable, so the JSON form is `{}`.
		assert_eq!(body.raw, None);
		let details = body.error.unwrap();
		assert_eq!(details.message.as_deref(), Some("boom"));
		assert_eq!(details.name.as_deref(), Some("Error"));
	}

	#[wasm_bindgen_test]
	fn test_thrown_string() {
		let body = base_body_from_js(&JsValue::from_str("boom"));

		assert_eq!(body.kind, "String");
		assert_eq!(body.raw.as_deref(), Some("\"boom\""));
		assert_eq!(body.error, Some(Default::default()));
	}

	#[wasm_bindgen_test]
	fn test_null_reason() {
		let body = base_body_from_js(&JsValue::NULL);

		assert_eq!(body.kind, "object");
		assert_eq!(body.raw.as_deref(), Some("null"));
		assert_eq!(body.error, None);
	}
}
