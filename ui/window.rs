use wasm_bindgen::prelude::*;

pub fn scroll_to_top() -> Result<(), JsValue> {
	let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
	let mut options = web_sys::ScrollToOptions::new();
	options.top(0.0);
	options.behavior(web_sys::ScrollBehavior::Smooth);
	window.scroll_to_with_scroll_to_options(&options);
	Ok(())
}

/// Shows a blocking alert dialog.
pub fn alert(message: &str) -> Result<(), JsValue> {
	let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
	window.alert_with_message(message)
}
