use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("fetch failed: {0}")]
	Fetch(String),
	#[error("response body was not text")]
	Body,
	#[error("invalid json: {0}")]
	Decode(#[from] serde_json::Error),
	#[error("no element with id \"{0}\"")]
	MissingElement(String),
	#[error("no global window")]
	NoWindow,
}

impl From<JsValue> for Error {
	fn from(value: JsValue) -> Error {
		Error::Fetch(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
	}
}

impl From<Error> for JsValue {
	fn from(error: Error) -> JsValue {
		JsValue::from_str(&error.to_string())
	}
}
