//! JavaScript entry points for the wasm build.

use log::info;
use wasm_bindgen::prelude::*;

use crate::auth;
use crate::config::Config;

fn to_js(error: shared::SharedError) -> JsValue {
    JsValue::from_str(&error.to_string())
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let level = if Config::is_production() { log::Level::Info } else { log::Level::Debug };
    wasm_logger::init(wasm_logger::Config::new(level));
    info!("Logger initialized");

    Config::log_configuration();
}

/// The active record as JSON, using the field names the app already reads.
#[wasm_bindgen]
pub fn environment() -> Result<String, JsValue> {
    Config::environment().to_json().map_err(to_js)
}

#[wasm_bindgen(js_name = apiUrl)]
pub fn api_url(path: &str) -> Result<String, JsValue> {
    Config::api_url(path).map(String::from).map_err(to_js)
}

#[wasm_bindgen(js_name = loginLink)]
pub fn login_link(callback_path: Option<String>) -> Result<String, JsValue> {
    let callback_path = callback_path.as_deref().unwrap_or(auth::CALLBACK_PATH);
    auth::build_login_link(Config::auth0(), callback_path)
        .map(String::from)
        .map_err(to_js)
}

#[wasm_bindgen(js_name = logoutLink)]
pub fn logout_link() -> Result<String, JsValue> {
    auth::build_logout_link(Config::auth0())
        .map(String::from)
        .map_err(to_js)
}
