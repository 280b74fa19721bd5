use house_price_common::FormValues;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Select {
	District,
	Area,
	WaterSupply,
	Electricity,
}

/// The view the controller drives. `DomPage` implements it over the real document.
pub trait Page {
	fn append_options(&mut self, select: Select, values: &[String]);
	/// Leaves only the placeholder option in the area select.
	fn reset_area(&mut self);
	fn set_area_enabled(&mut self, enabled: bool);
	fn set_loading(&mut self, loading: bool);
	fn set_form_visible(&mut self, visible: bool);
	fn set_result_visible(&mut self, visible: bool);
	fn set_predicted_price(&mut self, text: &str);
	fn scroll_to_top(&mut self);
	fn form_values(&mut self) -> FormValues;
	fn reset_form(&mut self);
	fn alert(&mut self, message: &str);
	fn log_error(&mut self, message: &str);
}
