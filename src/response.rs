//! Standard response envelope helpers.
//!
//! Every endpoint answers with `{exito, mensaje, datos?, codigo?, errores?, total?}`.

use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_SUCCESS_MESSAGE: &str = "Operation successful";
pub const DEFAULT_VALIDATION_MESSAGE: &str = "Invalid input data";
pub const DEFAULT_NOT_FOUND_MESSAGE: &str = "Resource not found";

pub const GENERIC_ERROR: &str = "GENERIC_ERROR";
pub const VALIDATION_FAILED: &str = "VALIDATION_FAILED";
pub const RESOURCE_NOT_FOUND: &str = "RESOURCE_NOT_FOUND";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub exito: bool,
    pub mensaje: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datos: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codigo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errores: Option<Vec<String>>,
    /// Length of `datos` when it is a list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

pub type EnvelopeResponse = (StatusCode, Json<Envelope>);

/// 200 with the given payload and message.
pub fn success<T: Serialize>(datos: T, mensaje: &str) -> EnvelopeResponse {
    let datos = match serde_json::to_value(datos) {
        Ok(v) => v,
        Err(e) => {
            tracing::error!(error = %e, "failed to serialize response payload");
            return generic_error("Error al serializar la respuesta");
        }
    };
    let total = datos.as_array().map(Vec::len);
    (
        StatusCode::OK,
        Json(Envelope {
            exito: true,
            mensaje: mensaje.to_string(),
            datos: Some(datos),
            codigo: None,
            errores: None,
            total,
        }),
    )
}

pub fn error(mensaje: &str, codigo: &str, status: StatusCode) -> EnvelopeResponse {
    (
        status,
        Json(Envelope {
            exito: false,
            mensaje: mensaje.to_string(),
            datos: None,
            codigo: Some(codigo.to_string()),
            errores: None,
            total: None,
        }),
    )
}

/// 500 with `GENERIC_ERROR`.
pub fn generic_error(mensaje: &str) -> EnvelopeResponse {
    error(mensaje, GENERIC_ERROR, StatusCode::INTERNAL_SERVER_ERROR)
}

pub fn validation_failed(errores: Vec<String>) -> EnvelopeResponse {
    (
        StatusCode::BAD_REQUEST,
        Json(Envelope {
            exito: false,
            mensaje: DEFAULT_VALIDATION_MESSAGE.to_string(),
            datos: None,
            codigo: Some(VALIDATION_FAILED.to_string()),
            errores: Some(errores),
            total: None,
        }),
    )
}

pub fn not_found(mensaje: &str) -> EnvelopeResponse {
    error(mensaje, RESOURCE_NOT_FOUND, StatusCode::NOT_FOUND)
}
