#![cfg(target_arch = "wasm32")]
use js_sys::{Array, Reflect, JSON};
use numberflow_core::{Data, SlotChange};
use numberflow_wasm::{abi_version, data_keys, diff_data, format_to_data, trend, NumberFlowWasm};
use serde_wasm_bindgen as swb;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

fn js(json: &str) -> JsValue {
    JSON::parse(json).expect("parse json")
}

fn to_data(v: JsValue) -> Data {
    swb::from_value(v).expect("data shape")
}

#[wasm_bindgen_test]
fn abi_is_stable() {
    assert_eq!(abi_version(), 1);
}

#[wasm_bindgen_test]
fn default_flow_keys_digits() {
    let flow = NumberFlowWasm::new(JsValue::UNDEFINED).unwrap();
    let out = flow.data(JsValue::from_f64(100.0)).unwrap();
    let value_as_string = Reflect::get(&out, &JsValue::from_str("valueAsString"))
        .unwrap()
        .as_string()
        .unwrap();
    assert_eq!(value_as_string, "100");
    let data = to_data(out);
    let keys: Vec<String> = data.keys().map(|k| k.to_string()).collect();
    assert_eq!(keys, vec!["integer:2", "integer:1", "integer:0"]);
    assert_eq!(flow.resolved_locale(), "en");
}

#[wasm_bindgen_test]
fn non_finite_is_null() {
    let flow = NumberFlowWasm::new(JsValue::NULL).unwrap();
    assert!(flow.data(JsValue::from_f64(f64::NAN)).unwrap().is_null());
    assert!(flow.data(JsValue::from_str("Infinity")).unwrap().is_null());
}

#[wasm_bindgen_test]
fn config_accepts_single_locale_and_options() {
    let flow = NumberFlowWasm::new(js(
        r#"{ "locales": "de", "format": { "style": "currency", "currency": "EUR", "minimumFractionDigits": 2 }, "suffix": "*" }"#,
    ))
    .unwrap();
    let data = to_data(flow.data(JsValue::from_f64(1234.5)).unwrap());
    assert_eq!(data.value_as_string, "1.234,50\u{a0}€*");
    assert_eq!(flow.format(JsValue::from_f64(1234.5)).unwrap(), "1.234,50\u{a0}€");
}

#[wasm_bindgen_test]
fn invalid_config_throws() {
    assert!(NumberFlowWasm::new(js(r#"{ "format": { "style": "currency" } }"#)).is_err());
    assert!(NumberFlowWasm::new(js(r#"{ "format": { "notation": "scientific" } }"#)).is_err());
}

#[wasm_bindgen_test]
fn one_shot_and_diff() {
    let cfg = js(r#"{ "locales": ["en"] }"#);
    let prev = format_to_data(JsValue::from_f64(99.0), cfg.clone()).unwrap();
    let next = format_to_data(JsValue::from_str("100"), cfg).unwrap();
    let keys: Array = data_keys(next.clone()).unwrap();
    assert_eq!(keys.length(), 3);

    let changes: Vec<SlotChange> = swb::from_value(diff_data(prev, next).unwrap()).unwrap();
    assert!(matches!(&changes[0], SlotChange::Enter { key } if key.to_string() == "integer:2"));
    assert_eq!(trend(99.0, 100.0), "up");
    assert_eq!(trend(1.0, 1.0), "none");
}

#[wasm_bindgen_test]
fn rejects_non_numeric_values() {
    let flow = NumberFlowWasm::new(JsValue::UNDEFINED).unwrap();
    assert!(flow.data(JsValue::TRUE).is_err());
}
