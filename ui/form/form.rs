use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Calls `on_submit` in place of the browser's default form submission.
pub fn form_on_submit(
	form: &web_sys::HtmlFormElement,
	on_submit: impl Fn() + 'static,
) -> Result<(), JsValue> {
	let callback_fn = Closure::<dyn Fn(_)>::wrap(Box::new(move |event: web_sys::Event| {
		event.prevent_default();
		on_submit();
	}));
	form.add_event_listener_with_callback("submit", callback_fn.as_ref().unchecked_ref())?;
	callback_fn.forget();
	Ok(())
}

/// Reads the submitted string value of each named field.
///
/// Fields the browser would leave out of a submission, such as disabled inputs and unchecked checkboxes, are skipped.
pub fn read_form_fields(
	form: &web_sys::HtmlFormElement,
	names: &[&str],
) -> Result<Vec<(String, String)>, JsValue> {
	let form_data = web_sys::FormData::new_with_form(form)?;
	let fields = names
		.iter()
		.filter_map(|name| {
			form_data
				.get(name)
				.as_string()
				.map(|value| ((*name).to_owned(), value))
		})
		.collect();
	Ok(fields)
}
