use std::collections::HashMap;

pub type AreasByDistrict = HashMap<String, Vec<String>>;

/// The body returned by `GET /options`.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OptionsResponse {
	pub districts: Vec<String>,
	pub areas_by_district: AreasByDistrict,
	pub water_supply: Vec<String>,
	pub electricity: Vec<String>,
	pub has_garden: Option<Vec<bool>>,
	pub has_ac: Option<Vec<bool>>,
}

/// Returns the areas for `district`, or `None` if the district is blank, unknown, or has no areas.
pub fn areas_for<'a>(areas_by_district: &'a AreasByDistrict, district: &str) -> Option<&'a [String]> {
	if district.is_empty() {
		return None;
	}
	areas_by_district
		.get(district)
		.map(|areas| areas.as_slice())
		.filter(|areas| !areas.is_empty())
}

#[cfg(test)]
mod test {
	use super::*;
	use maplit::hashmap;

	#[test]
	fn test_decode_options() {
		let json = r#"{
			"districts": ["Colombo", "Gampaha"],
			"areas_by_district": {"Colombo": ["Borella", "Colombo 7"], "Gampaha": ["Negombo"]},
			"water_supply": ["Pipe-borne", "Well"],
			"electricity": ["Single phase", "Three phase"],
			"has_garden": [false, true],
			"has_ac": [false, true]
		}"#;
		let options: OptionsResponse = serde_json::from_str(json).unwrap();
		assert_eq!(options.districts, vec!["Colombo", "Gampaha"]);
		assert_eq!(
			options.areas_by_district["Colombo"],
			vec!["Borella", "Colombo 7"]
		);
		assert_eq!(options.water_supply, vec!["Pipe-borne", "Well"]);
		assert_eq!(options.electricity, vec!["Single phase", "Three phase"]);
		assert_eq!(options.has_garden, Some(vec![false, true]));
	}

	#[test]
	fn test_decode_options_missing_keys() {
		let options: OptionsResponse = serde_json::from_str(r#"{"districts": ["A"]}"#).unwrap();
		assert_eq!(options.districts, vec!["A"]);
		assert!(options.areas_by_district.is_empty());
		assert!(options.water_supply.is_empty());
		assert_eq!(options.has_ac, None);
	}

	#[test]
	fn test_areas_for() {
		let areas_by_district = hashmap! {
			"A".to_owned() => vec!["X".to_owned()],
			"B".to_owned() => vec![],
		};
		assert_eq!(
			areas_for(&areas_by_district, "A"),
			Some(&["X".to_owned()][..])
		);
		assert_eq!(areas_for(&areas_by_district, "B"), None);
		assert_eq!(areas_for(&areas_by_district, "C"), None);
		assert_eq!(areas_for(&areas_by_district, ""), None);
	}
}
