//! Maintainer routes. The server nests them under `/api/v1`.

use crate::handlers::maintainers::{
    get_active_season, get_material, get_summary, get_supplier, list_locations, list_locations_by_plant,
    list_materials, list_movement_types, list_plants, list_seasons, list_suppliers, list_units,
};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn maintainer_routes(state: AppState) -> Router {
    Router::new()
        .route("/plants", get(list_plants))
        .route("/materials", get(list_materials))
        .route("/materials/:codigo", get(get_material))
        .route("/suppliers", get(list_suppliers))
        .route("/suppliers/:codigo", get(get_supplier))
        .route("/locations", get(list_locations))
        .route("/locations/plant/:planta", get(list_locations_by_plant))
        .route("/seasons", get(list_seasons))
        .route("/seasons/active", get(get_active_season))
        .route("/movement-types", get(list_movement_types))
        .route("/units", get(list_units))
        .route("/summary", get(get_summary))
        .with_state(state)
}
