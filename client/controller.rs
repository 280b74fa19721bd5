use crate::{
	error::Error,
	page::{Page, Select},
};
use house_price_common::{
	areas_for, AreasByDistrict, OptionsResponse, PredictionOutcome, PredictionRequest,
	PredictionResponse,
};

pub const PREDICTION_ERROR_MESSAGE: &str = "An error occurred during prediction.";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UiState {
	Idle,
	Loading,
	ResultShown,
}

/// Owns the options fetched for this page load and reacts to the page's events.
pub struct Controller<P: Page> {
	page: P,
	areas_by_district: AreasByDistrict,
	state: UiState,
}

impl<P: Page> Controller<P> {
	pub fn new(page: P) -> Controller<P> {
		Controller {
			page,
			areas_by_district: AreasByDistrict::new(),
			state: UiState::Idle,
		}
	}

	pub fn page(&self) -> &P {
		&self.page
	}

	pub fn state(&self) -> UiState {
		self.state
	}

	pub fn load_options(&mut self, result: Result<OptionsResponse, Error>) {
		let options = match result {
			Ok(options) => options,
			Err(error) => {
				self.page
					.log_error(&format!("Error fetching options: {}", error));
				return;
			}
		};
		self.page.append_options(Select::District, &options.districts);
		self.page
			.append_options(Select::WaterSupply, &options.water_supply);
		self.page
			.append_options(Select::Electricity, &options.electricity);
		self.areas_by_district = options.areas_by_district;
	}

	pub fn change_district(&mut self, district: &str) {
		self.page.reset_area();
		match areas_for(&self.areas_by_district, district) {
			Some(areas) => {
				self.page.append_options(Select::Area, areas);
				self.page.set_area_enabled(true);
			}
			None => self.page.set_area_enabled(false),
		}
	}

	/// Puts the submit button into its loading state and builds the request body from the form.
	pub fn begin_submit(&mut self) -> PredictionRequest {
		self.state = UiState::Loading;
		self.page.set_loading(true);
		let values = self.page.form_values();
		PredictionRequest::from_form(&values)
	}

	pub fn finish_submit(&mut self, result: Result<PredictionResponse, Error>) {
		match result.map(PredictionResponse::into_outcome) {
			Ok(PredictionOutcome::Success {
				formatted_prediction,
			}) => {
				self.page.set_form_visible(false);
				self.page.set_result_visible(true);
				self.page.set_predicted_price(&formatted_prediction);
				self.page.scroll_to_top();
				self.state = UiState::ResultShown;
			}
			Ok(PredictionOutcome::Failure { message }) => {
				self.page.alert(&format!("Error: {}", message));
				self.state = UiState::Idle;
			}
			Err(error) => {
				self.page.log_error(&format!("Prediction error: {}", error));
				self.page.alert(PREDICTION_ERROR_MESSAGE);
				self.state = UiState::Idle;
			}
		}
		self.page.set_loading(false);
	}

	pub fn reset(&mut self) {
		self.page.reset_form();
		self.page.set_area_enabled(false);
		self.page.reset_area();
		self.page.set_result_visible(false);
		self.page.set_form_visible(true);
		self.state = UiState::Idle;
	}
}
