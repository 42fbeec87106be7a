//! Browser fullscreen error types.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Error)]
pub enum FullscreenError {
    /// The platform rejected or threw; the value is passed through untouched.
    #[error("Fullscreen request rejected: {0:?}")]
    Rejected(JsValue),

    #[error("Fullscreen method unavailable: {0}")]
    MissingMethod(&'static str),
}

impl From<FullscreenError> for JsValue {
    fn from(error: FullscreenError) -> Self {
        match error {
            FullscreenError::Rejected(value) => value,
            FullscreenError::MissingMethod(name) => {
                js_sys::Error::new(&format!("Fullscreen method unavailable: {name}")).into()
            }
        }
    }
}
