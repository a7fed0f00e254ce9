//! Start-up errors for the browser client.

use derive_more::{Display, Error, From};
use game_core::ConfigError;

#[derive(Debug, Display, Error, From)]
pub enum ClientError {
    #[display("no global window")]
    MissingWindow,
    #[display("window has no document")]
    MissingDocument,
    #[display("missing element #{_0}")]
    MissingElement(#[error(not(source))] String),
    #[display("element #{id} is not a {expected}")]
    WrongElementType { id: String, expected: &'static str },
    #[display("canvas has no 2d context")]
    MissingContext,
    #[from]
    #[display("{_0}")]
    Config(ConfigError),
    #[display("javascript error: {_0}")]
    Js(#[error(not(source))] String),
}

#[cfg(target_arch = "wasm32")]
impl ClientError {
    pub fn js(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<ClientError> for wasm_bindgen::JsValue {
    fn from(err: ClientError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
