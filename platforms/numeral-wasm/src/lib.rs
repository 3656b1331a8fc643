use numeral_solver::{convert, Options};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(js_name = initPanicHook)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Reads the JS options object. `undefined` and `null` mean defaults; an
/// unknown language tag is an error.
fn read_options(options: JsValue) -> Result<Options, JsValue> {
    if options.is_undefined() || options.is_null() {
        return Ok(Options::default());
    }
    Ok(serde_wasm_bindgen::from_value(options)?)
}

/// `wordsToNumbers(text, options?)`: a string, a number or an array of numbers,
/// depending on the options.
#[wasm_bindgen(js_name = wordsToNumbers)]
pub fn words_to_numbers(text: &str, options: JsValue) -> Result<JsValue, JsValue> {
    let options = read_options(options)?;
    let conversion = convert(text, &options).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(serde_wasm_bindgen::to_value(&conversion)?)
}

/// Supported locale tags, default first.
#[wasm_bindgen(js_name = supportedLanguages)]
pub fn supported_languages() -> Vec<JsValue> {
    numeral_protocol::Language::ALL
        .iter()
        .map(|language| JsValue::from_str(language.tag()))
        .collect()
}
