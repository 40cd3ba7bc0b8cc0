//! Static catalogs that are not persisted: plants and units of measure.

use serde::Serialize;

/// Exposed shape of a static catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub codigo: &'static str,
    pub nombre: &'static str,
    pub descripcion: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Planta {
    Linderos,
    Chimbarongo,
    Teno,
}

impl Planta {
    pub const ALL: [Planta; 3] = [Planta::Linderos, Planta::Chimbarongo, Planta::Teno];

    pub fn codigo(self) -> &'static str {
        match self {
            Planta::Linderos => "LINDEROS",
            Planta::Chimbarongo => "CHIMBARONGO",
            Planta::Teno => "TENO",
        }
    }

    pub fn nombre(self) -> &'static str {
        match self {
            Planta::Linderos => "Planta Linderos",
            Planta::Chimbarongo => "Planta Chimbarongo",
            Planta::Teno => "Planta Teno",
        }
    }

    pub fn descripcion(self) -> &'static str {
        match self {
            Planta::Linderos => "Planta de proceso y embalaje Linderos",
            Planta::Chimbarongo => "Planta de proceso y embalaje Chimbarongo",
            Planta::Teno => "Centro de frío y despacho Teno",
        }
    }

    pub fn entry(self) -> CatalogEntry {
        CatalogEntry {
            codigo: self.codigo(),
            nombre: self.nombre(),
            descripcion: self.descripcion(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnidadMedida {
    Kilogramo,
    Tonelada,
    Unidad,
    Caja,
    Bin,
    Litro,
}

impl UnidadMedida {
    pub const ALL: [UnidadMedida; 6] = [
        UnidadMedida::Kilogramo,
        UnidadMedida::Tonelada,
        UnidadMedida::Unidad,
        UnidadMedida::Caja,
        UnidadMedida::Bin,
        UnidadMedida::Litro,
    ];

    pub fn codigo(self) -> &'static str {
        match self {
            UnidadMedida::Kilogramo => "KG",
            UnidadMedida::Tonelada => "TON",
            UnidadMedida::Unidad => "UN",
            UnidadMedida::Caja => "CJ",
            UnidadMedida::Bin => "BIN",
            UnidadMedida::Litro => "LT",
        }
    }

    pub fn nombre(self) -> &'static str {
        match self {
            UnidadMedida::Kilogramo => "Kilogramo",
            UnidadMedida::Tonelada => "Tonelada",
            UnidadMedida::Unidad => "Unidad",
            UnidadMedida::Caja => "Caja",
            UnidadMedida::Bin => "Bin",
            UnidadMedida::Litro => "Litro",
        }
    }

    pub fn descripcion(self) -> &'static str {
        match self {
            UnidadMedida::Kilogramo => "Peso en kilogramos",
            UnidadMedida::Tonelada => "Peso en toneladas",
            UnidadMedida::Unidad => "Cantidad en unidades",
            UnidadMedida::Caja => "Cajas embaladas",
            UnidadMedida::Bin => "Bins de cosecha",
            UnidadMedida::Litro => "Volumen en litros",
        }
    }

    pub fn entry(self) -> CatalogEntry {
        CatalogEntry {
            codigo: self.codigo(),
            nombre: self.nombre(),
            descripcion: self.descripcion(),
        }
    }
}

pub fn plantas() -> Vec<CatalogEntry> {
    Planta::ALL.iter().map(|p| p.entry()).collect()
}

pub fn unidades_medida() -> Vec<CatalogEntry> {
    UnidadMedida::ALL.iter().map(|u| u.entry()).collect()
}
