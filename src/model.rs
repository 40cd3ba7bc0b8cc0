//! Raw rows as stored and the shapes exposed to the frontend.

use chrono::NaiveDateTime;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

pub const SUPPLIER_CODE_PREFIX: &str = "PROV";
pub const LOCATION_CODE_PREFIX: &str = "UB";
pub const LOCATION_KIND: &str = "bodega";

static SUPPLIER_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^PROV(\d+)$").expect("valid supplier code pattern"));

/// Display code built from a primary key, zero-padded to at least three digits.
/// e.g. ("PROV", 7) -> "PROV007", ("PROV", 1234) -> "PROV1234"
pub fn synthetic_code(prefix: &str, id: i32) -> String {
    format!("{}{:03}", prefix, id)
}

/// Cold-chain flag is stored as free text; only "Si" / "Sí" mean yes.
pub fn requires_cold(frio: Option<&str>) -> bool {
    matches!(frio, Some("Si") | Some("Sí"))
}

/// How a supplier code from the URL is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SupplierLookup {
    ById(i32),
    ByName(String),
}

impl SupplierLookup {
    /// "PROV" followed by digits resolves by id; anything else, including a bare "PROV"
    /// or digits that overflow an id, is a name search.
    pub fn parse(codigo: &str) -> Self {
        let codigo = codigo.trim();
        SUPPLIER_CODE
            .captures(codigo)
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse::<i32>().ok())
            .map(SupplierLookup::ById)
            .unwrap_or_else(|| SupplierLookup::ByName(codigo.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct MaterialRow {
    pub id: i32,
    pub codigo_ranco: String,
    pub nombre_material: String,
    pub frio: Option<String>,
    pub activo: bool,
}

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct SupplierRow {
    pub id: i32,
    pub title: String,
    pub activo: bool,
}

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct LocationRow {
    pub id: i32,
    pub title: String,
    pub bodega_deposito: Option<String>,
    pub planta: Option<String>,
    pub activo: bool,
}

/// Seasons are also listed as-is, so the row itself is serializable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct SeasonRow {
    pub id: i32,
    pub title: String,
    pub fecha_inicio: Option<NaiveDateTime>,
    pub fecha_fin: Option<NaiveDateTime>,
    pub activo: bool,
}

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct MovementTypeRow {
    pub id: i32,
    pub title: String,
    pub descripcion: Option<String>,
    pub activo: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: i32,
    pub codigo: String,
    pub nombre: String,
    pub requiere_frio: bool,
    pub activo: bool,
}

impl From<MaterialRow> for Material {
    fn from(row: MaterialRow) -> Self {
        Material {
            id: row.id,
            requiere_frio: requires_cold(row.frio.as_deref()),
            codigo: row.codigo_ranco,
            nombre: row.nombre_material,
            activo: row.activo,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: i32,
    pub codigo: String,
    pub nombre: String,
    pub activo: bool,
}

impl From<SupplierRow> for Supplier {
    fn from(row: SupplierRow) -> Self {
        Supplier {
            id: row.id,
            codigo: synthetic_code(SUPPLIER_CODE_PREFIX, row.id),
            nombre: row.title,
            activo: row.activo,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: i32,
    pub codigo: String,
    pub nombre: String,
    pub bodega: Option<String>,
    pub planta: Option<String>,
    pub tipo: String,
    pub activo: bool,
}

impl From<LocationRow> for Location {
    fn from(row: LocationRow) -> Self {
        Location {
            id: row.id,
            codigo: synthetic_code(LOCATION_CODE_PREFIX, row.id),
            nombre: row.title,
            bodega: row.bodega_deposito,
            planta: row.planta,
            tipo: LOCATION_KIND.to_string(),
            activo: row.activo,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Season {
    pub id: i32,
    pub codigo: String,
    pub nombre: String,
    pub fecha_inicio: Option<NaiveDateTime>,
    pub fecha_termino: Option<NaiveDateTime>,
    pub activo: bool,
}

impl From<SeasonRow> for Season {
    fn from(row: SeasonRow) -> Self {
        Season {
            id: row.id,
            codigo: row.title.clone(),
            nombre: row.title,
            fecha_inicio: row.fecha_inicio,
            fecha_termino: row.fecha_fin,
            activo: row.activo,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovementType {
    pub id: i32,
    pub codigo: String,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub activo: bool,
}

impl From<MovementTypeRow> for MovementType {
    fn from(row: MovementTypeRow) -> Self {
        MovementType {
            id: row.id,
            codigo: row.title.clone(),
            nombre: row.title,
            descripcion: row.descripcion,
            activo: row.activo,
        }
    }
}

/// Counts of active records per maintainer plus the current season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_plantas: usize,
    pub total_materiales: i64,
    pub total_proveedores: i64,
    pub total_ubicaciones: i64,
    pub total_tipos_movimiento: i64,
    pub total_unidades_medida: usize,
    pub temporada_activa: Option<Season>,
}
