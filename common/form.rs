use std::collections::BTreeMap;
use std::iter::FromIterator;

/// The names of the fields read from the prediction form on submit.
pub const FORM_FIELD_NAMES: [&str; 13] = [
	"district",
	"area",
	"perch",
	"bedrooms",
	"bathrooms",
	"kitchen_area_sqft",
	"parking_spots",
	"has_garden",
	"has_ac",
	"water_supply",
	"electricity",
	"floors",
	"year_built",
];

/// The submitted values of a form, keyed by field name.
///
/// Like the browser's form data, a field that is disabled or an unchecked checkbox has no entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues(BTreeMap<String, String>);

impl FormValues {
	pub fn new() -> FormValues {
		FormValues::default()
	}

	pub fn get(&self, name: &str) -> Option<&str> {
		self.0.get(name).map(|value| value.as_str())
	}

	pub fn insert(&mut self, name: &str, value: &str) {
		self.0.insert(name.to_owned(), value.to_owned());
	}

	pub fn remove(&mut self, name: &str) -> Option<String> {
		self.0.remove(name)
	}
}

impl FromIterator<(String, String)> for FormValues {
	fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
		FormValues(iter.into_iter().collect())
	}
}

/// Parses the leading integer of `value`, the way a browser's `parseInt` does in base 10.
///
/// Leading whitespace and a sign are accepted, and parsing stops at the first non digit, so `"12abc"` and `"2.5"` give `12` and `2`. Returns `None` if there are no digits or the integer does not fit in an `i64`.
pub fn parse_int(value: &str) -> Option<i64> {
	let (negative, rest) = split_sign(value.trim_start());
	let digits_len = rest
		.bytes()
		.take_while(|byte| byte.is_ascii_digit())
		.count();
	if digits_len == 0 {
		return None;
	}
	let magnitude: i64 = rest[..digits_len].parse().ok()?;
	Some(if negative { -magnitude } else { magnitude })
}

/// Parses the longest leading decimal number of `value`, the way a browser's `parseFloat` does.
///
/// Returns `None` if there is no number or it is not finite.
pub fn parse_float(value: &str) -> Option<f64> {
	let (negative, rest) = split_sign(value.trim_start());
	let bytes = rest.as_bytes();
	let count_digits = |start: usize| {
		bytes[start..]
			.iter()
			.take_while(|byte| byte.is_ascii_digit())
			.count()
	};
	let int_len = count_digits(0);
	let mut end = int_len;
	let mut frac_len = 0;
	if bytes.get(end) == Some(&b'.') {
		frac_len = count_digits(end + 1);
		if int_len > 0 || frac_len > 0 {
			end += 1 + frac_len;
		}
	}
	if int_len == 0 && frac_len == 0 {
		return None;
	}
	if let Some(b'e') | Some(b'E') = bytes.get(end) {
		let mut exponent_start = end + 1;
		if let Some(b'+') | Some(b'-') = bytes.get(exponent_start) {
			exponent_start += 1;
		}
		let exponent_len = count_digits(exponent_start);
		if exponent_len > 0 {
			end = exponent_start + exponent_len;
		}
	}
	let magnitude: f64 = rest[..end].parse().ok()?;
	let value = if negative { -magnitude } else { magnitude };
	Some(value).filter(|value| value.is_finite())
}

fn split_sign(value: &str) -> (bool, &str) {
	if let Some(rest) = value.strip_prefix('-') {
		(true, rest)
	} else if let Some(rest) = value.strip_prefix('+') {
		(false, rest)
	} else {
		(false, value)
	}
}

#[test]
fn test_parse_int() {
	assert_eq!(parse_int("3"), Some(3));
	assert_eq!(parse_int("  42"), Some(42));
	assert_eq!(parse_int("-7"), Some(-7));
	assert_eq!(parse_int("+7"), Some(7));
	assert_eq!(parse_int("12abc"), Some(12));
	assert_eq!(parse_int("2.5"), Some(2));
	assert_eq!(parse_int("1e3"), Some(1));
	assert_eq!(parse_int(""), None);
	assert_eq!(parse_int("abc"), None);
	assert_eq!(parse_int("-"), None);
	assert_eq!(parse_int("99999999999999999999"), None);
}

#[test]
fn test_parse_float() {
	assert_eq!(parse_float("10"), Some(10.0));
	assert_eq!(parse_float("10.25"), Some(10.25));
	assert_eq!(parse_float(" -0.5"), Some(-0.5));
	assert_eq!(parse_float(".5"), Some(0.5));
	assert_eq!(parse_float("5."), Some(5.0));
	assert_eq!(parse_float("1.5e2"), Some(150.0));
	assert_eq!(parse_float("1.5e"), Some(1.5));
	assert_eq!(parse_float("3.2.1"), Some(3.2));
	assert_eq!(parse_float("7 perches"), Some(7.0));
	assert_eq!(parse_float("."), None);
	assert_eq!(parse_float(""), None);
	assert_eq!(parse_float("Infinity"), None);
	assert_eq!(parse_float("1e400"), None);
}

#[test]
fn test_form_values() {
	let mut values: FormValues = vec![("district".to_owned(), "Colombo".to_owned())]
		.into_iter()
		.collect();
	assert_eq!(values.get("district"), Some("Colombo"));
	values.insert("has_ac", "on");
	assert_eq!(values.get("has_ac"), Some("on"));
	assert_eq!(values.remove("district"), Some("Colombo".to_owned()));
	assert_eq!(values.get("district"), None);
}
