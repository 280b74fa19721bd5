use self::{config::Config, controller::Controller, dom::DomPage, error::Error};
use house_price_ui as ui;
use std::{cell::RefCell, rc::Rc};
use wasm_bindgen::{prelude::*, JsCast};
use wasm_bindgen_futures::spawn_local;
use web_sys::console;

pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod http;
pub mod page;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
	console_error_panic_hook::set_once();
	let window = web_sys::window().ok_or(Error::NoWindow)?;
	let document = window.document().ok_or(Error::NoWindow)?;
	let config = read_config(&document);
	let page = DomPage::new(&document, &config)?;
	let form = page.form.clone();
	let district = page.district.clone();
	let reset_button = page.reset_button.clone();
	let controller = Rc::new(RefCell::new(Controller::new(page)));

	let options_controller = controller.clone();
	let options_url = config.options_url.clone();
	spawn_local(async move {
		let result = http::get_options(&options_url).await;
		options_controller.borrow_mut().load_options(result);
	});

	let district_controller = controller.clone();
	ui::select_field_on_change(&district, move |district| {
		district_controller.borrow_mut().change_district(&district);
	})?;

	let submit_controller = controller.clone();
	let predict_url = config.predict_url;
	ui::form_on_submit(&form, move || {
		let prediction_request = submit_controller.borrow_mut().begin_submit();
		let controller = submit_controller.clone();
		let predict_url = predict_url.clone();
		spawn_local(async move {
			let result = http::post_prediction(&predict_url, &prediction_request).await;
			controller.borrow_mut().finish_submit(result);
		});
	})?;

	ui::button_on_click(&reset_button, move || {
		controller.borrow_mut().reset();
	})?;

	Ok(())
}

/// Reads overrides from the `data-config` attribute of the form, falling back to the defaults.
fn read_config(document: &web_sys::Document) -> Config {
	let default_config = Config::default();
	let json = document
		.get_element_by_id(&default_config.form_id)
		.and_then(|form| form.dyn_into::<web_sys::HtmlElement>().ok())
		.and_then(|form| form.dataset().get("config"));
	match json {
		Some(json) => Config::from_json(&json).unwrap_or_else(|error| {
			console::error_1(&format!("ignoring invalid data-config: {}", error).into());
			default_config
		}),
		None => default_config,
	}
}
