use crate::form::{parse_float, parse_int, FormValues};

/// The JSON body posted to `/predict`.
///
/// Fields missing from the form, and numbers that do not parse, are sent as `null`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PredictionRequest {
	pub district: Option<String>,
	pub area: Option<String>,
	pub perch: Option<f64>,
	pub bedrooms: Option<i64>,
	pub bathrooms: Option<i64>,
	pub kitchen_area_sqft: Option<i64>,
	pub parking_spots: Option<i64>,
	pub has_garden: bool,
	pub has_ac: bool,
	pub water_supply: Option<String>,
	pub electricity: Option<String>,
	pub floors: Option<i64>,
	pub year_built: Option<i64>,
}

impl PredictionRequest {
	pub fn from_form(values: &FormValues) -> PredictionRequest {
		let string = |name: &str| values.get(name).map(|value| value.to_owned());
		let int = |name: &str| values.get(name).and_then(parse_int);
		let checked = |name: &str| values.get(name) == Some("on");
		PredictionRequest {
			district: string("district"),
			area: string("area"),
			perch: values.get("perch").and_then(parse_float),
			bedrooms: int("bedrooms"),
			bathrooms: int("bathrooms"),
			kitchen_area_sqft: int("kitchen_area_sqft"),
			parking_spots: int("parking_spots"),
			has_garden: checked("has_garden"),
			has_ac: checked("has_ac"),
			water_supply: string("water_supply"),
			electricity: string("electricity"),
			floors: int("floors"),
			year_built: int("year_built"),
		}
	}
}

/// The body returned by `/predict`, for both successful and failed predictions.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PredictionResponse {
	#[serde(default)]
	pub status: String,
	#[serde(default)]
	pub formatted_prediction: Option<String>,
	#[serde(default)]
	pub message: Option<String>,
	#[serde(default)]
	pub prediction: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PredictionOutcome {
	Success { formatted_prediction: String },
	Failure { message: String },
}

impl PredictionResponse {
	pub fn into_outcome(self) -> PredictionOutcome {
		if self.status == "success" {
			PredictionOutcome::Success {
				formatted_prediction: self.formatted_prediction.unwrap_or_default(),
			}
		} else {
			PredictionOutcome::Failure {
				message: self
					.message
					.unwrap_or_else(|| "unknown error".to_owned()),
			}
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use serde_json::json;

	fn filled_form() -> FormValues {
		vec![
			("district", "Colombo"),
			("area", "Colombo 7"),
			("perch", "10.5"),
			("bedrooms", "3"),
			("bathrooms", "2"),
			("kitchen_area_sqft", "150"),
			("parking_spots", "2"),
			("has_garden", "on"),
			("water_supply", "Pipe-borne"),
			("electricity", "Three phase"),
			("floors", "2"),
			("year_built", "2020"),
		]
		.into_iter()
		.map(|(name, value)| (name.to_owned(), value.to_owned()))
		.collect()
	}

	#[test]
	fn test_request_json_types() {
		let request = PredictionRequest::from_form(&filled_form());
		let value = serde_json::to_value(&request).unwrap();
		assert_eq!(
			value,
			json!({
				"district": "Colombo",
				"area": "Colombo 7",
				"perch": 10.5,
				"bedrooms": 3,
				"bathrooms": 2,
				"kitchen_area_sqft": 150,
				"parking_spots": 2,
				"has_garden": true,
				"has_ac": false,
				"water_supply": "Pipe-borne",
				"electricity": "Three phase",
				"floors": 2,
				"year_built": 2020,
			})
		);
		for field in &[
			"perch",
			"bedrooms",
			"bathrooms",
			"kitchen_area_sqft",
			"parking_spots",
			"floors",
			"year_built",
		] {
			assert!(value[field].is_number(), "{} is not a number", field);
		}
		assert!(value["has_garden"].is_boolean());
		assert!(value["has_ac"].is_boolean());
	}

	#[test]
	fn test_request_field_order() {
		let request = PredictionRequest::from_form(&filled_form());
		let json = serde_json::to_string(&request).unwrap();
		let district = json.find("\"district\"").unwrap();
		let perch = json.find("\"perch\"").unwrap();
		let year_built = json.find("\"year_built\"").unwrap();
		assert!(district < perch && perch < year_built);
	}

	#[test]
	fn test_request_missing_fields_are_null() {
		let mut values = filled_form();
		values.remove("area");
		values.insert("bedrooms", "");
		values.insert("floors", "two");
		let value = serde_json::to_value(&PredictionRequest::from_form(&values)).unwrap();
		assert!(value["area"].is_null());
		assert!(value["bedrooms"].is_null());
		assert!(value["floors"].is_null());
		assert_eq!(value["district"], json!("Colombo"));
	}

	#[test]
	fn test_request_checkbox_must_be_on() {
		let mut values = filled_form();
		values.insert("has_garden", "true");
		values.insert("has_ac", "on");
		let request = PredictionRequest::from_form(&values);
		assert_eq!(request.has_garden, false);
		assert_eq!(request.has_ac, true);
	}

	#[test]
	fn test_success_outcome() {
		let response: PredictionResponse = serde_json::from_str(
			r#"{"status": "success", "prediction": 12345000.0, "formatted_prediction": "Rs. 12,345,000"}"#,
		)
		.unwrap();
		assert_eq!(response.prediction, Some(12345000.0));
		assert_eq!(
			response.into_outcome(),
			PredictionOutcome::Success {
				formatted_prediction: "Rs. 12,345,000".to_owned()
			}
		);
	}

	#[test]
	fn test_failure_outcome() {
		let response: PredictionResponse =
			serde_json::from_str(r#"{"status": "error", "message": "Invalid input"}"#).unwrap();
		assert_eq!(
			response.into_outcome(),
			PredictionOutcome::Failure {
				message: "Invalid input".to_owned()
			}
		);
		let response: PredictionResponse = serde_json::from_str(r#"{}"#).unwrap();
		assert_eq!(
			response.into_outcome(),
			PredictionOutcome::Failure {
				message: "unknown error".to_owned()
			}
		);
	}
}
