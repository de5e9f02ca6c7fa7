//! Modelo de Inspection
//!
//! Checklist de seis puntos anidado bajo su Trip. Inmutable una vez
//! creado: nunca se actualiza ni se borra.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Inspection {
    pub id: Uuid,
    pub inspection_type: String,
    pub windows: bool,
    pub mirrors: bool,
    pub tires: bool,
    pub lights: bool,
    pub doors: bool,
    pub seats: bool,
    /// Campo derivado: true si algún punto del checklist falló
    pub needs_service: bool,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request para registrar una inspección durante un viaje activo
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateInspectionRequest {
    #[validate(length(min = 1, max = 50))]
    pub inspection_type: String,

    pub windows: bool,
    pub mirrors: bool,
    pub tires: bool,
    pub lights: bool,
    pub doors: bool,
    pub seats: bool,

    #[validate(length(max = 1000))]
    pub notes: Option<String>,
}

impl CreateInspectionRequest {
    /// needs_service se deriva del checklist, nunca lo aporta el caller
    pub fn derive_needs_service(&self) -> bool {
        !(self.windows && self.mirrors && self.tires && self.lights && self.doors && self.seats)
    }

    pub fn into_inspection(self) -> Inspection {
        let needs_service = self.derive_needs_service();
        Inspection {
            id: Uuid::new_v4(),
            inspection_type: self.inspection_type,
            windows: self.windows,
            mirrors: self.mirrors,
            tires: self.tires,
            lights: self.lights,
            doors: self.doors,
            seats: self.seats,
            needs_service,
            notes: self.notes,
            created_at: Utc::now(),
        }
    }
}
