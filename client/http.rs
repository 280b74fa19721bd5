use crate::error::Error;
use house_price_common::{OptionsResponse, PredictionRequest, PredictionResponse};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

pub async fn get_options(url: &str) -> Result<OptionsResponse, Error> {
	let mut init = web_sys::RequestInit::new();
	init.method("GET");
	let request = web_sys::Request::new_with_str_and_init(url, &init)?;
	let body = fetch_text(&request).await?;
	let options = serde_json::from_str(&body)?;
	Ok(options)
}

/// Posts the request as JSON and decodes the response body whatever its status code, since the server reports failed predictions as a JSON body with a 400 status.
pub async fn post_prediction(
	url: &str,
	prediction_request: &PredictionRequest,
) -> Result<PredictionResponse, Error> {
	let body = serde_json::to_string(prediction_request)?;
	let mut init = web_sys::RequestInit::new();
	init.method("POST");
	init.body(Some(&JsValue::from_str(&body)));
	let request = web_sys::Request::new_with_str_and_init(url, &init)?;
	request.headers().set("Content-Type", "application/json")?;
	let body = fetch_text(&request).await?;
	let response = serde_json::from_str(&body)?;
	Ok(response)
}

async fn fetch_text(request: &web_sys::Request) -> Result<String, Error> {
	let window = web_sys::window().ok_or(Error::NoWindow)?;
	let response = JsFuture::from(window.fetch_with_request(request)).await?;
	let response = response.dyn_into::<web_sys::Response>()?;
	let text = JsFuture::from(response.text()?).await?;
	text.as_string().ok_or(Error::Body)
}
