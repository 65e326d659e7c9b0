use js_sys::{Array, JSON};
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use numberflow_core::{diff, Data, FlowConfig, NumberFlow, Trend};
use numberflow_format::{NumberValue, PartsFormatter};

#[wasm_bindgen]
pub struct NumberFlowWasm {
    core: NumberFlow,
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

/// Read a config object through JSON so numeric options keep their integer
/// shape and `locales` may be a single tag.
fn parse_config(config: &JsValue) -> Result<FlowConfig, JsError> {
    if jsvalue_is_undefined_or_null(config) {
        return Ok(FlowConfig::default());
    }
    let s = JSON::stringify(config)
        .map_err(|e| JsError::new(&format!("config stringify error: {:?}", e)))?
        .as_string()
        .ok_or_else(|| JsError::new("config: stringify produced non-string"))?;
    FlowConfig::from_json(&s).map_err(|e| JsError::new(&format!("config error: {e}")))
}

/// Numbers pass through; strings are handed to the formatter as exact text.
fn parse_value(value: &JsValue) -> Result<NumberValue, JsError> {
    if let Some(n) = value.as_f64() {
        return Ok(NumberValue::Number(n));
    }
    if let Some(s) = value.as_string() {
        return Ok(NumberValue::Text(s));
    }
    Err(JsError::new("value must be a number or a string"))
}

fn data_to_js(data: Option<Data>) -> Result<JsValue, JsError> {
    match data {
        Some(d) => swb::to_value(&d).map_err(|e| JsError::new(&format!("data error: {e}"))),
        None => Ok(JsValue::NULL),
    }
}

fn data_from_js(value: JsValue, what: &str) -> Result<Data, JsError> {
    swb::from_value(value).map_err(|e| JsError::new(&format!("{what} parse error: {e}")))
}

#[wasm_bindgen]
impl NumberFlowWasm {
    /// Create a flow. Pass a config object or undefined/null for defaults.
    /// Example:
    ///   new NumberFlowWasm({ locales: "de", format: { style: "currency", currency: "EUR" } })
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<NumberFlowWasm, JsError> {
        console_error_panic_hook::set_once();
        let cfg = parse_config(&config)?;
        let core = NumberFlow::new(cfg).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(NumberFlowWasm { core })
    }

    /// Keyed parts for `value`, or `null` for NaN and infinities.
    #[wasm_bindgen]
    pub fn data(&self, value: JsValue) -> Result<JsValue, JsError> {
        let value = parse_value(&value)?;
        data_to_js(self.core.data(value))
    }

    /// Plain formatted text, with no overrides or affixes applied.
    #[wasm_bindgen]
    pub fn format(&self, value: JsValue) -> Result<String, JsError> {
        let value = parse_value(&value)?;
        Ok(self.core.formatter().format(&value))
    }

    #[wasm_bindgen(js_name = resolvedLocale)]
    pub fn resolved_locale(&self) -> String {
        self.core.formatter().resolved_locale().to_string()
    }
}

/// One-shot transform: `formatToData(value, config)`.
#[wasm_bindgen(js_name = formatToData)]
pub fn format_to_data(value: JsValue, config: JsValue) -> Result<JsValue, JsError> {
    console_error_panic_hook::set_once();
    let cfg = parse_config(&config)?;
    let value = parse_value(&value)?;
    let data = numberflow_core::to_keyed_parts(value, &cfg).map_err(|e| JsError::new(&e.to_string()))?;
    data_to_js(data)
}

/// Slot changes between two `data` results.
#[wasm_bindgen(js_name = diffData)]
pub fn diff_data(prev: JsValue, next: JsValue) -> Result<JsValue, JsError> {
    let prev = data_from_js(prev, "prev")?;
    let next = data_from_js(next, "next")?;
    swb::to_value(&diff(&prev, &next)).map_err(|e| JsError::new(&format!("diff error: {e}")))
}

/// `"up"`, `"down"` or `"none"`.
#[wasm_bindgen]
pub fn trend(prev: f64, next: f64) -> String {
    match Trend::between(prev, next) {
        Trend::Up => "up",
        Trend::Down => "down",
        Trend::None => "none",
    }
    .to_string()
}

/// Keys of a `data` result in display order.
#[wasm_bindgen(js_name = dataKeys)]
pub fn data_keys(data: JsValue) -> Result<Array, JsError> {
    let data = data_from_js(data, "data")?;
    Ok(data
        .keys()
        .map(|k| JsValue::from_str(&k.to_string()))
        .collect())
}

#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
