//! Data-store seam: the `MaintainerStore` trait and its PostgreSQL implementation.
//!
//! Tables are owned by an external system; this module only reads them. Identifiers come
//! from configuration and are quoted, values are always bound as parameters.

use crate::error::StoreError;
use crate::model::{LocationRow, MaterialRow, MovementTypeRow, SeasonRow, SupplierRow};
use async_trait::async_trait;
use sqlx::PgPool;

/// Maintainer tables that carry an `activo` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaintainerTable {
    Material,
    Proveedor,
    Ubicacion,
    Temporada,
    TipoMovimiento,
}

impl MaintainerTable {
    pub fn table_name(self) -> &'static str {
        match self {
            MaintainerTable::Material => "material",
            MaintainerTable::Proveedor => "proveedor",
            MaintainerTable::Ubicacion => "ubicacion",
            MaintainerTable::Temporada => "temporada",
            MaintainerTable::TipoMovimiento => "tipo_movimiento",
        }
    }
}

/// Read-only access to maintainer tables. Injected into handlers through [`crate::AppState`].
#[async_trait]
pub trait MaintainerStore: Send + Sync {
    /// Cheap connectivity check used by the readiness route.
    async fn ping(&self) -> Result<(), StoreError>;

    async fn materials(&self, activo: bool) -> Result<Vec<MaterialRow>, StoreError>;
    async fn material_by_code(&self, codigo: &str) -> Result<Option<MaterialRow>, StoreError>;

    async fn suppliers(&self, activo: bool) -> Result<Vec<SupplierRow>, StoreError>;
    async fn supplier_by_id(&self, id: i32) -> Result<Option<SupplierRow>, StoreError>;
    /// First supplier whose name contains `fragment`, ignoring case.
    async fn supplier_by_name(&self, fragment: &str) -> Result<Option<SupplierRow>, StoreError>;

    async fn locations(&self, activo: bool) -> Result<Vec<LocationRow>, StoreError>;
    async fn locations_by_plant(&self, planta: &str, activo: bool) -> Result<Vec<LocationRow>, StoreError>;

    async fn seasons(&self, activo: bool) -> Result<Vec<SeasonRow>, StoreError>;
    /// Most recently started active season.
    async fn active_season(&self) -> Result<Option<SeasonRow>, StoreError>;

    async fn movement_types(&self, activo: bool) -> Result<Vec<MovementTypeRow>, StoreError>;

    async fn count_active(&self, table: MaintainerTable) -> Result<i64, StoreError>;
}

/// Quote identifier for PostgreSQL (safe: only from config).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Escape `%`, `_` and the escape char itself so user input matches literally inside LIKE.
pub fn escape_like(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

const MATERIAL_COLUMNS: &str = "id, codigo_ranco, nombre_material, frio, activo";
const SUPPLIER_COLUMNS: &str = "id, title, activo";
const LOCATION_COLUMNS: &str = "id, title, bodega_deposito, planta, activo";
const SEASON_COLUMNS: &str = "id, title, fecha_inicio, fecha_fin, activo";
const MOVEMENT_TYPE_COLUMNS: &str = "id, title, descripcion, activo";

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
    schema: String,
}

impl PgStore {
    pub fn new(pool: PgPool, schema: impl Into<String>) -> Self {
        PgStore {
            pool,
            schema: schema.into(),
        }
    }

    /// Schema-qualified, quoted table name (e.g. `"public"."material"`).
    pub fn qualified(&self, table: MaintainerTable) -> String {
        format!("{}.{}", quoted(&self.schema), quoted(table.table_name()))
    }
}

#[async_trait]
impl MaintainerStore for PgStore {
    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }

    async fn materials(&self, activo: bool) -> Result<Vec<MaterialRow>, StoreError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE activo = $1 ORDER BY nombre_material",
            MATERIAL_COLUMNS,
            self.qualified(MaintainerTable::Material)
        );
        let rows = sqlx::query_as::<_, MaterialRow>(&sql)
            .bind(activo)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn material_by_code(&self, codigo: &str) -> Result<Option<MaterialRow>, StoreError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE codigo_ranco = $1 LIMIT 1",
            MATERIAL_COLUMNS,
            self.qualified(MaintainerTable::Material)
        );
        let row = sqlx::query_as::<_, MaterialRow>(&sql)
            .bind(codigo)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn suppliers(&self, activo: bool) -> Result<Vec<SupplierRow>, StoreError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE activo = $1 ORDER BY title",
            SUPPLIER_COLUMNS,
            self.qualified(MaintainerTable::Proveedor)
        );
        let rows = sqlx::query_as::<_, SupplierRow>(&sql)
            .bind(activo)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn supplier_by_id(&self, id: i32) -> Result<Option<SupplierRow>, StoreError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE id = $1",
            SUPPLIER_COLUMNS,
            self.qualified(MaintainerTable::Proveedor)
        );
        let row = sqlx::query_as::<_, SupplierRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn supplier_by_name(&self, fragment: &str) -> Result<Option<SupplierRow>, StoreError> {
        let sql = format!(
            r"SELECT {} FROM {} WHERE title ILIKE $1 ESCAPE '\' ORDER BY id LIMIT 1",
            SUPPLIER_COLUMNS,
            self.qualified(MaintainerTable::Proveedor)
        );
        let pattern = format!("%{}%", escape_like(fragment));
        let row = sqlx::query_as::<_, SupplierRow>(&sql)
            .bind(pattern)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn locations(&self, activo: bool) -> Result<Vec<LocationRow>, StoreError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE activo = $1 ORDER BY title",
            LOCATION_COLUMNS,
            self.qualified(MaintainerTable::Ubicacion)
        );
        let rows = sqlx::query_as::<_, LocationRow>(&sql)
            .bind(activo)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn locations_by_plant(&self, planta: &str, activo: bool) -> Result<Vec<LocationRow>, StoreError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE planta = $1 AND activo = $2 ORDER BY title",
            LOCATION_COLUMNS,
            self.qualified(MaintainerTable::Ubicacion)
        );
        let rows = sqlx::query_as::<_, LocationRow>(&sql)
            .bind(planta)
            .bind(activo)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn seasons(&self, activo: bool) -> Result<Vec<SeasonRow>, StoreError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE activo = $1 ORDER BY fecha_inicio DESC NULLS LAST, id DESC",
            SEASON_COLUMNS,
            self.qualified(MaintainerTable::Temporada)
        );
        let rows = sqlx::query_as::<_, SeasonRow>(&sql)
            .bind(activo)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn active_season(&self) -> Result<Option<SeasonRow>, StoreError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE activo = TRUE ORDER BY fecha_inicio DESC NULLS LAST, id DESC LIMIT 1",
            SEASON_COLUMNS,
            self.qualified(MaintainerTable::Temporada)
        );
        let row = sqlx::query_as::<_, SeasonRow>(&sql)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn movement_types(&self, activo: bool) -> Result<Vec<MovementTypeRow>, StoreError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE activo = $1 ORDER BY title",
            MOVEMENT_TYPE_COLUMNS,
            self.qualified(MaintainerTable::TipoMovimiento)
        );
        let rows = sqlx::query_as::<_, MovementTypeRow>(&sql)
            .bind(activo)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn count_active(&self, table: MaintainerTable) -> Result<i64, StoreError> {
        let sql = format!("SELECT COUNT(*) FROM {} WHERE activo = TRUE", self.qualified(table));
        let (count,): (i64,) = sqlx::query_as(&sql).fetch_one(&self.pool).await?;
        Ok(count)
    }
}
