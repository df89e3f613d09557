//! Chart Engines
//!
//! Bindings to the Chart.js and ApexCharts globals loaded by `index.html`,
//! and the one-time Chart.js component registration.

use std::cell::Cell;

use js_sys::{Array, Function, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, HtmlElement};

#[wasm_bindgen]
extern "C" {
    /// A Chart.js chart instance
    #[wasm_bindgen(js_name = Chart)]
    pub type ChartJs;

    #[wasm_bindgen(catch, constructor, js_class = "Chart")]
    fn new(canvas: &HtmlCanvasElement, config: &JsValue) -> Result<ChartJs, JsValue>;

    #[wasm_bindgen(method)]
    pub fn destroy(this: &ChartJs);
}

#[wasm_bindgen]
extern "C" {
    /// An ApexCharts chart instance
    #[wasm_bindgen(js_name = ApexCharts)]
    pub type ApexChart;

    #[wasm_bindgen(catch, constructor, js_class = "ApexCharts")]
    fn new(element: &HtmlElement, options: &JsValue) -> Result<ApexChart, JsValue>;

    #[wasm_bindgen(method)]
    fn render(this: &ApexChart) -> js_sys::Promise;

    #[wasm_bindgen(method)]
    pub fn destroy(this: &ApexChart);
}

thread_local! {
    static REGISTERED: Cell<bool> = const { Cell::new(false) };
}

/// Register every Chart.js component (`Chart.register(...Chart.registerables)`).
///
/// Runs once per page; a failed attempt is retried on the next call.
pub fn ensure_registered() {
    if REGISTERED.with(Cell::get) {
        return;
    }

    match register_chartjs() {
        Ok(()) => REGISTERED.with(|r| r.set(true)),
        Err(e) => log_error("Failed to register Chart.js components", &e),
    }
}

fn register_chartjs() -> Result<(), JsValue> {
    let chart = Reflect::get(&js_sys::global(), &JsValue::from_str("Chart"))?;
    if chart.is_undefined() {
        return Err(JsValue::from_str("Chart.js is not loaded"));
    }

    let registerables: Array = Reflect::get(&chart, &JsValue::from_str("registerables"))?.dyn_into()?;
    let register: Function = Reflect::get(&chart, &JsValue::from_str("register"))?.dyn_into()?;

    register.apply(&chart, &registerables)?;
    Ok(())
}

/// Convert a serde value into a plain JS object
fn to_js(config: &serde_json::Value) -> Result<JsValue, JsValue> {
    let text = serde_json::to_string(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
    js_sys::JSON::parse(&text)
}

/// Draw a Chart.js chart on `canvas`
pub fn chartjs(canvas: &HtmlCanvasElement, config: &serde_json::Value) -> Result<ChartJs, JsValue> {
    ensure_registered();
    ChartJs::new(canvas, &to_js(config)?)
}

/// Draw an ApexCharts chart inside `element`
pub fn apex(element: &HtmlElement, config: &serde_json::Value) -> Result<ApexChart, JsValue> {
    let chart = ApexChart::new(element, &to_js(config)?)?;

    let rendering = wasm_bindgen_futures::JsFuture::from(chart.render());
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = rendering.await {
            log_error("ApexCharts render failed", &e);
        }
    });

    Ok(chart)
}

/// Log to the browser console
pub fn log_error(context: &str, error: &JsValue) {
    web_sys::console::error_2(&JsValue::from_str(context), error);
}
