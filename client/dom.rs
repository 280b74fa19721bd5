use crate::{
	config::Config,
	error::Error,
	page::{Page, Select},
};
use house_price_common::{FormValues, FORM_FIELD_NAMES};
use house_price_ui as ui;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::console;

/// The prediction page, backed by the elements of the current document.
pub struct DomPage {
	pub form: web_sys::HtmlFormElement,
	pub district: web_sys::HtmlSelectElement,
	pub area: web_sys::HtmlSelectElement,
	pub water_supply: web_sys::HtmlSelectElement,
	pub electricity: web_sys::HtmlSelectElement,
	pub predict_button: ui::LoadingButton,
	pub result_card: web_sys::HtmlElement,
	pub predicted_price: web_sys::HtmlElement,
	pub reset_button: web_sys::HtmlElement,
	area_placeholder: String,
}

impl DomPage {
	pub fn new(document: &web_sys::Document, config: &Config) -> Result<DomPage, Error> {
		let button: web_sys::HtmlButtonElement = element_by_id(document, &config.predict_button_id)?;
		let predict_button = ui::LoadingButton {
			label: child_by_class(&button, &config.button_text_class)?,
			loader: child_by_class(&button, &config.loader_class)?,
			button,
		};
		Ok(DomPage {
			form: element_by_id(document, &config.form_id)?,
			district: element_by_id(document, &config.district_id)?,
			area: element_by_id(document, &config.area_id)?,
			water_supply: element_by_id(document, &config.water_supply_id)?,
			electricity: element_by_id(document, &config.electricity_id)?,
			predict_button,
			result_card: element_by_id(document, &config.result_card_id)?,
			predicted_price: element_by_id(document, &config.predicted_price_id)?,
			reset_button: element_by_id(document, &config.reset_button_id)?,
			area_placeholder: config.area_placeholder.clone(),
		})
	}

	fn select(&self, select: Select) -> &web_sys::HtmlSelectElement {
		match select {
			Select::District => &self.district,
			Select::Area => &self.area,
			Select::WaterSupply => &self.water_supply,
			Select::Electricity => &self.electricity,
		}
	}
}

impl Page for DomPage {
	fn append_options(&mut self, select: Select, values: &[String]) {
		let result = ui::append_select_options(self.select(select), values);
		log_js_error("append options", result);
	}

	fn reset_area(&mut self) {
		ui::reset_select_to_placeholder(&self.area, &self.area_placeholder);
	}

	fn set_area_enabled(&mut self, enabled: bool) {
		self.area.set_disabled(!enabled);
	}

	fn set_loading(&mut self, loading: bool) {
		log_js_error("set loading", self.predict_button.set_loading(loading));
	}

	fn set_form_visible(&mut self, visible: bool) {
		log_js_error("toggle form", ui::set_hidden(&self.form, !visible));
	}

	fn set_result_visible(&mut self, visible: bool) {
		log_js_error("toggle result", ui::set_hidden(&self.result_card, !visible));
	}

	fn set_predicted_price(&mut self, text: &str) {
		self.predicted_price.set_text_content(Some(text));
	}

	fn scroll_to_top(&mut self) {
		log_js_error("scroll", ui::scroll_to_top());
	}

	fn form_values(&mut self) -> FormValues {
		match ui::read_form_fields(&self.form, &FORM_FIELD_NAMES) {
			Ok(fields) => fields.into_iter().collect(),
			Err(error) => {
				log_js_error("read form", Err(error));
				FormValues::new()
			}
		}
	}

	fn reset_form(&mut self) {
		self.form.reset();
	}

	fn alert(&mut self, message: &str) {
		log_js_error("alert", ui::alert(message));
	}

	fn log_error(&mut self, message: &str) {
		console::error_1(&message.into());
	}
}

fn element_by_id<T: JsCast>(document: &web_sys::Document, id: &str) -> Result<T, Error> {
	document
		.get_element_by_id(id)
		.and_then(|element| element.dyn_into::<T>().ok())
		.ok_or_else(|| Error::MissingElement(id.to_owned()))
}

fn child_by_class(
	parent: &web_sys::HtmlElement,
	class_name: &str,
) -> Result<web_sys::HtmlElement, Error> {
	parent
		.query_selector(&format!(".{}", class_name))?
		.and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
		.ok_or_else(|| Error::MissingElement(format!("#{} .{}", parent.id(), class_name)))
}

fn log_js_error(action: &str, result: Result<(), JsValue>) {
	if let Err(error) = result {
		console::error_2(&format!("failed to {}:", action).into(), &error);
	}
}
