use wasm_bindgen::prelude::*;

pub const HIDDEN_CLASS: &str = "hidden";

pub fn set_hidden(element: &web_sys::Element, hidden: bool) -> Result<(), JsValue> {
	if hidden {
		element.class_list().add_1(HIDDEN_CLASS)
	} else {
		element.class_list().remove_1(HIDDEN_CLASS)
	}
}

pub fn set_display(element: &web_sys::HtmlElement, display: &str) -> Result<(), JsValue> {
	element.style().set_property("display", display)
}

pub fn placeholder_option_html(text: &str) -> String {
	format!(
		r#"<option value="" disabled selected>{}</option>"#,
		escape_html(text)
	)
}

fn escape_html(text: &str) -> String {
	let mut escaped = String::with_capacity(text.len());
	for c in text.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			_ => escaped.push(c),
		}
	}
	escaped
}

#[test]
fn test_placeholder_option_html() {
	assert_eq!(
		placeholder_option_html("Select Area"),
		r#"<option value="" disabled selected>Select Area</option>"#
	);
	assert_eq!(
		placeholder_option_html("<Area & Town>"),
		r#"<option value="" disabled selected>&lt;Area &amp; Town&gt;</option>"#
	);
}
