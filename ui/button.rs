use crate::util::set_display;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// The parts of a button that shows a row of loader dots in place of its label while busy.
pub struct LoadingButton {
	pub button: web_sys::HtmlButtonElement,
	pub label: web_sys::HtmlElement,
	pub loader: web_sys::HtmlElement,
}

impl LoadingButton {
	pub fn set_loading(&self, loading: bool) -> Result<(), JsValue> {
		if loading {
			set_display(&self.label, "none")?;
			set_display(&self.loader, "flex")?;
		} else {
			set_display(&self.label, "block")?;
			set_display(&self.loader, "none")?;
		}
		self.button.set_disabled(loading);
		Ok(())
	}
}

pub fn button_on_click(
	button: &web_sys::HtmlElement,
	on_click: impl Fn() + 'static,
) -> Result<(), JsValue> {
	let callback_fn = Closure::<dyn Fn(_)>::wrap(Box::new(move |_: web_sys::Event| {
		on_click();
	}));
	button.add_event_listener_with_callback("click", callback_fn.as_ref().unchecked_ref())?;
	callback_fn.forget();
	Ok(())
}
