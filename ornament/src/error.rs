use wasm_bindgen::JsValue;

/// Reasons the ornament cannot run. All of them mean "skip the decoration".
#[derive(Debug, thiserror::Error)]
pub enum OrnamentError {
    #[error("ornament canvas not found")]
    MissingCanvas,
    #[error("no browser window")]
    NoWindow,
    #[error("2d rendering context unavailable")]
    NoContext,
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for OrnamentError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
