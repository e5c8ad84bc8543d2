// ============================================================================
// ERRORES - Tipo de error común para los helpers DOM
// ============================================================================

use thiserror::Error;
use wasm_bindgen::JsValue;

pub type DomResult<T> = std::result::Result<T, DomError>;

#[derive(Error, Debug)]
pub enum DomError {
    #[error("No window")]
    NoWindow,

    #[error("No document")]
    NoDocument,

    /// El valor recibido no es un nodo ELEMENT_NODE
    #[error("{0} should be a DOM element")]
    NotAnElement(String),

    #[error("{0} should be an Object")]
    NotAnObject(String),

    #[error("Invalid attribute name: {0:?}")]
    InvalidAttributeName(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Excepción lanzada por la API del navegador, sin traducir
    #[error("JS error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{:?}", value));
        DomError::Js(message)
    }
}

impl From<DomError> for JsValue {
    fn from(err: DomError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
