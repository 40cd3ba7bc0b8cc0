//! In-memory `MaintainerStore` double and request helpers shared by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{NaiveDate, NaiveDateTime};
use mantenedores::model::{LocationRow, MaterialRow, MovementTypeRow, SeasonRow, SupplierRow};
use mantenedores::{app, AppState, MaintainerStore, MaintainerTable, StoreError};
use serde_json::Value;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

#[derive(Default)]
pub struct MemoryStore {
    pub materials: Vec<MaterialRow>,
    pub suppliers: Vec<SupplierRow>,
    pub locations: Vec<LocationRow>,
    pub seasons: Vec<SeasonRow>,
    pub movement_types: Vec<MovementTypeRow>,
    /// Every call fails when set.
    pub fail_all: bool,
    /// Only counts on these tables fail.
    pub fail_counts: HashSet<MaintainerTable>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MemoryStore {
    fn record(&self, call: impl Into<String>) -> Result<(), StoreError> {
        self.calls.lock().unwrap().push(call.into());
        if self.fail_all {
            return Err(StoreError::Backend("simulated outage: password=hunter2".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl MaintainerStore for MemoryStore {
    async fn ping(&self) -> Result<(), StoreError> {
        self.record("ping")
    }

    async fn materials(&self, activo: bool) -> Result<Vec<MaterialRow>, StoreError> {
        self.record(format!("materials({activo})"))?;
        Ok(self.materials.iter().filter(|m| m.activo == activo).cloned().collect())
    }

    async fn material_by_code(&self, codigo: &str) -> Result<Option<MaterialRow>, StoreError> {
        self.record(format!("material_by_code({codigo})"))?;
        Ok(self.materials.iter().find(|m| m.codigo_ranco == codigo).cloned())
    }

    async fn suppliers(&self, activo: bool) -> Result<Vec<SupplierRow>, StoreError> {
        self.record(format!("suppliers({activo})"))?;
        Ok(self.suppliers.iter().filter(|s| s.activo == activo).cloned().collect())
    }

    async fn supplier_by_id(&self, id: i32) -> Result<Option<SupplierRow>, StoreError> {
        self.record(format!("supplier_by_id({id})"))?;
        Ok(self.suppliers.iter().find(|s| s.id == id).cloned())
    }

    async fn supplier_by_name(&self, fragment: &str) -> Result<Option<SupplierRow>, StoreError> {
        self.record(format!("supplier_by_name({fragment})"))?;
        let needle = fragment.to_lowercase();
        Ok(self
            .suppliers
            .iter()
            .find(|s| s.title.to_lowercase().contains(&needle))
            .cloned())
    }

    async fn locations(&self, activo: bool) -> Result<Vec<LocationRow>, StoreError> {
        self.record(format!("locations({activo})"))?;
        Ok(self.locations.iter().filter(|l| l.activo == activo).cloned().collect())
    }

    async fn locations_by_plant(&self, planta: &str, activo: bool) -> Result<Vec<LocationRow>, StoreError> {
        self.record(format!("locations_by_plant({planta},{activo})"))?;
        Ok(self
            .locations
            .iter()
            .filter(|l| l.activo == activo && l.planta.as_deref() == Some(planta))
            .cloned()
            .collect())
    }

    async fn seasons(&self, activo: bool) -> Result<Vec<SeasonRow>, StoreError> {
        self.record(format!("seasons({activo})"))?;
        Ok(self.seasons.iter().filter(|s| s.activo == activo).cloned().collect())
    }

    async fn active_season(&self) -> Result<Option<SeasonRow>, StoreError> {
        self.record("active_season")?;
        Ok(self
            .seasons
            .iter()
            .filter(|s| s.activo)
            .max_by_key(|s| (s.fecha_inicio, s.id))
            .cloned())
    }

    async fn movement_types(&self, activo: bool) -> Result<Vec<MovementTypeRow>, StoreError> {
        self.record(format!("movement_types({activo})"))?;
        Ok(self.movement_types.iter().filter(|m| m.activo == activo).cloned().collect())
    }

    async fn count_active(&self, table: MaintainerTable) -> Result<i64, StoreError> {
        self.record(format!("count_active({})", table.table_name()))?;
        if self.fail_counts.contains(&table) {
            return Err(StoreError::Backend(format!("count failed on {}", table.table_name())));
        }
        let n = match table {
            MaintainerTable::Material => self.materials.iter().filter(|r| r.activo).count(),
            MaintainerTable::Proveedor => self.suppliers.iter().filter(|r| r.activo).count(),
            MaintainerTable::Ubicacion => self.locations.iter().filter(|r| r.activo).count(),
            MaintainerTable::Temporada => self.seasons.iter().filter(|r| r.activo).count(),
            MaintainerTable::TipoMovimiento => self.movement_types.iter().filter(|r| r.activo).count(),
        };
        Ok(n as i64)
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(0, 0, 0).unwrap()
}

/// Store with a small, realistic data set: some inactive rows in every table.
pub fn seeded_store() -> MemoryStore {
    MemoryStore {
        materials: vec![
            MaterialRow {
                id: 1,
                codigo_ranco: "MAT001".into(),
                nombre_material: "Caja cartón 5kg".into(),
                frio: Some("No".into()),
                activo: true,
            },
            MaterialRow {
                id: 2,
                codigo_ranco: "MAT002".into(),
                nombre_material: "Bolsa modificada".into(),
                frio: Some("Sí".into()),
                activo: true,
            },
            MaterialRow {
                id: 3,
                codigo_ranco: "MAT003".into(),
                nombre_material: "Pallet madera".into(),
                frio: None,
                activo: false,
            },
        ],
        suppliers: vec![
            SupplierRow {
                id: 7,
                title: "Acme Embalajes".into(),
                activo: true,
            },
            SupplierRow {
                id: 1234,
                title: "Cartones del Sur".into(),
                activo: true,
            },
            SupplierRow {
                id: 9,
                title: "PROVeedora Central".into(),
                activo: false,
            },
        ],
        locations: vec![
            LocationRow {
                id: 7,
                title: "Cámara 1".into(),
                bodega_deposito: Some("BOD-A".into()),
                planta: Some("LINDEROS".into()),
                activo: true,
            },
            LocationRow {
                id: 8,
                title: "Patio de recepción".into(),
                bodega_deposito: None,
                planta: Some("TENO".into()),
                activo: true,
            },
            LocationRow {
                id: 12,
                title: "Cámara antigua".into(),
                bodega_deposito: Some("BOD-Z".into()),
                planta: Some("LINDEROS".into()),
                activo: false,
            },
        ],
        seasons: vec![
            SeasonRow {
                id: 1,
                title: "2023-2024".into(),
                fecha_inicio: Some(date(2023, 9, 1)),
                fecha_fin: Some(date(2024, 4, 30)),
                activo: false,
            },
            SeasonRow {
                id: 2,
                title: "2024-2025".into(),
                fecha_inicio: Some(date(2024, 9, 1)),
                fecha_fin: Some(date(2025, 4, 30)),
                activo: true,
            },
        ],
        movement_types: vec![
            MovementTypeRow {
                id: 1,
                title: "INGRESO".into(),
                descripcion: Some("Ingreso de materiales a bodega".into()),
                activo: true,
            },
            MovementTypeRow {
                id: 2,
                title: "TRASPASO".into(),
                descripcion: None,
                activo: false,
            },
        ],
        ..Default::default()
    }
}

/// Router plus a handle on the store's call log.
pub fn setup(store: MemoryStore) -> (Router, Arc<Mutex<Vec<String>>>) {
    let calls = store.calls.clone();
    (app(AppState::new(store)), calls)
}

pub async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap();
    let resp = router.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}
