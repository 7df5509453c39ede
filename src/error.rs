//! Tipos de error del cliente
//!
//! Nada es fatal: los errores se registran, se muestran como alerta o
//! dejan la vista anterior intacta.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errores principales del cliente
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {status_text}")]
    Http { status: u16, status_text: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("DOM error: {0}")]
    Dom(String),

    /// Error de entrada del usuario; el mensaje se muestra tal cual
    #[error("{0}")]
    Validation(String),
}

pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    pub fn validation(message: &str) -> Self {
        ClientError::Validation(message.to_string())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ClientError::Validation(_))
    }
}

impl From<JsValue> for ClientError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        ClientError::Dom(message)
    }
}

impl From<gloo_net::Error> for ClientError {
    fn from(error: gloo_net::Error) -> Self {
        match error {
            gloo_net::Error::SerdeError(e) => ClientError::Parse(e.to_string()),
            other => ClientError::Network(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(error: serde_json::Error) -> Self {
        ClientError::Parse(error.to_string())
    }
}

impl From<ClientError> for JsValue {
    fn from(error: ClientError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_is_shown_verbatim() {
        let err = ClientError::validation("Please select at least one vehicle");
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Please select at least one vehicle");
    }

    #[test]
    fn test_http_error_display() {
        let err = ClientError::Http { status: 503, status_text: "Service Unavailable".to_string() };
        assert_eq!(err.to_string(), "HTTP 503: Service Unavailable");
        assert!(!err.is_validation());
    }

    #[test]
    fn test_serde_error_maps_to_parse() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        assert!(matches!(ClientError::from(serde_err), ClientError::Parse(_)));
    }
}
