/// Endpoint paths, element ids, and class names used by the page client.
///
/// Any subset can be overridden with a JSON object in the form element's `data-config` attribute.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
	pub options_url: String,
	pub predict_url: String,
	pub form_id: String,
	pub district_id: String,
	pub area_id: String,
	pub water_supply_id: String,
	pub electricity_id: String,
	pub predict_button_id: String,
	pub button_text_class: String,
	pub loader_class: String,
	pub result_card_id: String,
	pub predicted_price_id: String,
	pub reset_button_id: String,
	pub area_placeholder: String,
}

impl Default for Config {
	fn default() -> Config {
		Config {
			options_url: "/options".to_owned(),
			predict_url: "/predict".to_owned(),
			form_id: "predictionForm".to_owned(),
			district_id: "district".to_owned(),
			area_id: "area".to_owned(),
			water_supply_id: "water_supply".to_owned(),
			electricity_id: "electricity".to_owned(),
			predict_button_id: "predictBtn".to_owned(),
			button_text_class: "btn-text".to_owned(),
			loader_class: "loader-dots".to_owned(),
			result_card_id: "resultCard".to_owned(),
			predicted_price_id: "predictedPrice".to_owned(),
			reset_button_id: "resetBtn".to_owned(),
			area_placeholder: "Select Area".to_owned(),
		}
	}
}

impl Config {
	pub fn from_json(json: &str) -> Result<Config, serde_json::Error> {
		serde_json::from_str(json)
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_default_config() {
		let config = Config::default();
		assert_eq!(config.options_url, "/options");
		assert_eq!(config.predict_url, "/predict");
		assert_eq!(config.form_id, "predictionForm");
		assert_eq!(config.predict_button_id, "predictBtn");
		assert_eq!(config.loader_class, "loader-dots");
	}

	#[test]
	fn test_partial_override() {
		let config =
			Config::from_json(r#"{"predict_url": "/api/predict", "area_id": "town"}"#).unwrap();
		assert_eq!(config.predict_url, "/api/predict");
		assert_eq!(config.area_id, "town");
		assert_eq!(config.options_url, "/options");
		assert_eq!(config.result_card_id, "resultCard");
	}

	#[test]
	fn test_malformed_override() {
		assert!(Config::from_json("{predict_url").is_err());
		assert!(Config::from_json(r#"{"predict_url": 5}"#).is_err());
	}
}
