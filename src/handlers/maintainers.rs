//! Maintainer handlers: one per resource, each a single store read reshaped for the frontend.

use crate::constants::{self, Planta, UnidadMedida};
use crate::error::{AppError, StoreResultExt};
use crate::extractors::{ActiveFilter, PathParam};
use crate::model::{Location, Material, MovementType, Season, Summary, Supplier, SupplierLookup};
use crate::response::{self, EnvelopeResponse};
use crate::state::AppState;
use crate::store::MaintainerTable;
use axum::extract::State;

/// Resource-specific codes for unexpected failures.
pub mod codes {
    pub const MATERIALES: &str = "ERROR_OBTENER_MATERIALES";
    pub const MATERIAL: &str = "ERROR_OBTENER_MATERIAL";
    pub const PROVEEDORES: &str = "ERROR_OBTENER_PROVEEDORES";
    pub const PROVEEDOR: &str = "ERROR_OBTENER_PROVEEDOR";
    pub const UBICACIONES: &str = "ERROR_OBTENER_UBICACIONES";
    pub const UBICACIONES_PLANTA: &str = "ERROR_OBTENER_UBICACIONES_PLANTA";
    pub const TEMPORADAS: &str = "ERROR_OBTENER_TEMPORADAS";
    pub const TEMPORADA_ACTIVA: &str = "ERROR_OBTENER_TEMPORADA_ACTIVA";
    pub const TIPOS_MOVIMIENTO: &str = "ERROR_OBTENER_TIPOS_MOVIMIENTO";
    pub const RESUMEN: &str = "ERROR_OBTENER_RESUMEN_MANTENEDORES";
}

/// GET /plants
pub async fn list_plants() -> Result<EnvelopeResponse, AppError> {
    Ok(response::success(constants::plantas(), "Plantas obtenidas exitosamente"))
}

/// GET /materials?activo=
pub async fn list_materials(
    State(state): State<AppState>,
    ActiveFilter(activo): ActiveFilter,
) -> Result<EnvelopeResponse, AppError> {
    let rows = state
        .store
        .materials(activo)
        .await
        .or_internal(codes::MATERIALES, "Error al obtener materiales")?;
    let data: Vec<Material> = rows.into_iter().map(Material::from).collect();
    Ok(response::success(data, "Materiales obtenidos exitosamente"))
}

/// GET /materials/:codigo
pub async fn get_material(
    State(state): State<AppState>,
    PathParam(codigo): PathParam<String>,
) -> Result<EnvelopeResponse, AppError> {
    let row = state
        .store
        .material_by_code(codigo.trim())
        .await
        .or_internal(codes::MATERIAL, "Error al obtener material")?
        .ok_or_else(|| AppError::NotFound(format!("Material con código {} no encontrado", codigo)))?;
    Ok(response::success(Material::from(row), "Material obtenido exitosamente"))
}

/// GET /suppliers?activo=
pub async fn list_suppliers(
    State(state): State<AppState>,
    ActiveFilter(activo): ActiveFilter,
) -> Result<EnvelopeResponse, AppError> {
    let rows = state
        .store
        .suppliers(activo)
        .await
        .or_internal(codes::PROVEEDORES, "Error al obtener proveedores")?;
    let data: Vec<Supplier> = rows.into_iter().map(Supplier::from).collect();
    Ok(response::success(data, "Proveedores obtenidos exitosamente"))
}

/// GET /suppliers/:codigo : `PROV<digits>` resolves by id, anything else by name.
pub async fn get_supplier(
    State(state): State<AppState>,
    PathParam(codigo): PathParam<String>,
) -> Result<EnvelopeResponse, AppError> {
    if codigo.trim().is_empty() {
        return Err(AppError::validation(vec!["El código del proveedor es requerido".into()]));
    }
    let lookup = SupplierLookup::parse(&codigo);
    tracing::debug!(?lookup, "resolving supplier");
    let row = match &lookup {
        SupplierLookup::ById(id) => state.store.supplier_by_id(*id).await,
        SupplierLookup::ByName(name) => state.store.supplier_by_name(name).await,
    }
    .or_internal(codes::PROVEEDOR, "Error al obtener proveedor")?
    .ok_or_else(|| AppError::NotFound(format!("Proveedor {} no encontrado", codigo.trim())))?;
    Ok(response::success(Supplier::from(row), "Proveedor obtenido exitosamente"))
}

/// GET /locations?activo=
pub async fn list_locations(
    State(state): State<AppState>,
    ActiveFilter(activo): ActiveFilter,
) -> Result<EnvelopeResponse, AppError> {
    let rows = state
        .store
        .locations(activo)
        .await
        .or_internal(codes::UBICACIONES, "Error al obtener ubicaciones")?;
    let data: Vec<Location> = rows.into_iter().map(Location::from).collect();
    Ok(response::success(data, "Ubicaciones obtenidas exitosamente"))
}

/// GET /locations/plant/:planta?activo=
pub async fn list_locations_by_plant(
    State(state): State<AppState>,
    PathParam(planta): PathParam<String>,
    ActiveFilter(activo): ActiveFilter,
) -> Result<EnvelopeResponse, AppError> {
    let planta = planta.trim();
    if planta.is_empty() {
        return Err(AppError::validation(vec!["La planta es requerida".into()]));
    }
    let rows = state
        .store
        .locations_by_plant(planta, activo)
        .await
        .or_internal(codes::UBICACIONES_PLANTA, "Error al obtener ubicaciones por planta")?;
    let data: Vec<Location> = rows.into_iter().map(Location::from).collect();
    Ok(response::success(data, "Ubicaciones de la planta obtenidas exitosamente"))
}

/// GET /seasons?activo= : rows are returned as stored.
pub async fn list_seasons(
    State(state): State<AppState>,
    ActiveFilter(activo): ActiveFilter,
) -> Result<EnvelopeResponse, AppError> {
    let rows = state
        .store
        .seasons(activo)
        .await
        .or_internal(codes::TEMPORADAS, "Error al obtener temporadas")?;
    Ok(response::success(rows, "Temporadas obtenidas exitosamente"))
}

/// GET /seasons/active
pub async fn get_active_season(State(state): State<AppState>) -> Result<EnvelopeResponse, AppError> {
    let row = state
        .store
        .active_season()
        .await
        .or_internal(codes::TEMPORADA_ACTIVA, "Error al obtener temporada activa")?
        .ok_or_else(|| AppError::NotFound("No hay una temporada activa".into()))?;
    Ok(response::success(Season::from(row), "Temporada activa obtenida exitosamente"))
}

/// GET /movement-types?activo=
pub async fn list_movement_types(
    State(state): State<AppState>,
    ActiveFilter(activo): ActiveFilter,
) -> Result<EnvelopeResponse, AppError> {
    let rows = state
        .store
        .movement_types(activo)
        .await
        .or_internal(codes::TIPOS_MOVIMIENTO, "Error al obtener tipos de movimiento")?;
    let data: Vec<MovementType> = rows.into_iter().map(MovementType::from).collect();
    Ok(response::success(data, "Tipos de movimiento obtenidos exitosamente"))
}

/// GET /units
pub async fn list_units() -> Result<EnvelopeResponse, AppError> {
    Ok(response::success(
        constants::unidades_medida(),
        "Unidades de medida obtenidas exitosamente",
    ))
}

/// GET /summary : five independent reads, fail-fast.
pub async fn get_summary(State(state): State<AppState>) -> Result<EnvelopeResponse, AppError> {
    let store = state.store.as_ref();
    let (materiales, proveedores, ubicaciones, tipos_movimiento, temporada) = tokio::try_join!(
        store.count_active(MaintainerTable::Material),
        store.count_active(MaintainerTable::Proveedor),
        store.count_active(MaintainerTable::Ubicacion),
        store.count_active(MaintainerTable::TipoMovimiento),
        store.active_season(),
    )
    .or_internal(codes::RESUMEN, "Error al obtener resumen de mantenedores")?;

    let summary = Summary {
        total_plantas: Planta::ALL.len(),
        total_materiales: materiales,
        total_proveedores: proveedores,
        total_ubicaciones: ubicaciones,
        total_tipos_movimiento: tipos_movimiento,
        total_unidades_medida: UnidadMedida::ALL.len(),
        temporada_activa: temporada.map(Season::from),
    };
    Ok(response::success(summary, "Resumen de mantenedores obtenido exitosamente"))
}
