use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum ObserveError {
    #[error("no browser window available")]
    NoWindow,

    #[error("IntersectionObserver is not supported by this browser")]
    Unsupported,

    #[error("element is not mounted")]
    Detached,

    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for ObserveError {
    fn from(value: JsValue) -> Self {
        ObserveError::Js(format!("{:?}", value))
    }
}
