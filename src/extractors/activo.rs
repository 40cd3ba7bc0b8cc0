//! Extract the `activo` visibility filter from the query string.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

/// Query parameter name for the active-record filter.
pub const ACTIVO_PARAM: &str = "activo";

/// Typed `activo` filter. Defaults to `true` when absent or empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveFilter(pub bool);

#[derive(Deserialize)]
struct ActivoParams {
    activo: Option<String>,
}

/// `true` / `false` in any case, surrounding whitespace ignored; anything else is rejected.
pub fn parse_activo(raw: Option<&str>) -> Result<bool, AppError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(true);
    };
    if raw.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(AppError::validation(vec![format!(
            "El parámetro '{}' debe ser 'true' o 'false', se recibió '{}'",
            ACTIVO_PARAM, raw
        )]))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ActiveFilter
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<ActivoParams>::try_from_uri(&parts.uri).map_err(|e| {
            AppError::validation(vec![format!("Parámetros de consulta inválidos: {}", e.body_text())])
        })?;
        parse_activo(params.activo.as_deref()).map(ActiveFilter)
    }
}
