use crate::util::placeholder_option_html;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Appends one option per value to the select, with the value used as both the option value and its text.
pub fn append_select_options(
	select_element: &web_sys::HtmlSelectElement,
	values: &[String],
) -> Result<(), JsValue> {
	let document = select_element
		.owner_document()
		.ok_or_else(|| JsValue::from_str("select element has no owner document"))?;
	for value in values {
		let option = document
			.create_element("option")?
			.dyn_into::<web_sys::HtmlOptionElement>()?;
		option.set_value(value);
		option.set_text_content(Some(value.as_str()));
		select_element.append_child(&option)?;
	}
	Ok(())
}

/// Replaces every option of the select with a single disabled, selected placeholder.
pub fn reset_select_to_placeholder(select_element: &web_sys::HtmlSelectElement, placeholder: &str) {
	select_element.set_inner_html(&placeholder_option_html(placeholder));
}

pub fn select_field_on_change(
	select_element: &web_sys::HtmlSelectElement,
	on_change: impl Fn(String) + 'static,
) -> Result<(), JsValue> {
	let callback_fn = Closure::<dyn Fn(_)>::wrap(Box::new(move |event: web_sys::Event| {
		if let Some(current_target) = event.current_target() {
			if let Some(select_element) = current_target.dyn_ref::<web_sys::HtmlSelectElement>() {
				on_change(select_element.value());
			}
		}
	}));
	select_element
		.add_event_listener_with_callback("change", callback_fn.as_ref().unchecked_ref())?;
	callback_fn.forget();
	Ok(())
}
