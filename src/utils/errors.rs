//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del motor de flota.
//! Ningún error se reintenta internamente: la política de retry pertenece
//! al colaborador externo (ver StoreUnavailable).

use serde::Serialize;
use thiserror::Error;

/// Motivo por el que un vehículo no puede iniciar un viaje
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnavailableReason {
    Maintenance,
    Inactive,
    AlreadyOnTrip,
}

impl std::fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            UnavailableReason::Maintenance => "maintenance",
            UnavailableReason::Inactive => "inactive",
            UnavailableReason::AlreadyOnTrip => "already on trip",
        };
        write!(f, "{}", reason)
    }
}

/// Errores principales del motor
#[derive(Error, Debug)]
pub enum FleetError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Vehicle unavailable: {reason}")]
    VehicleUnavailable { reason: UnavailableReason },

    #[error("Invalid reading: {0}")]
    InvalidReading(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

impl FleetError {
    /// Código estable para la capa que transporte el error (API, logs)
    pub fn code(&self) -> &'static str {
        match self {
            FleetError::NotFound(_) => "NOT_FOUND",
            FleetError::VehicleUnavailable { .. } => "VEHICLE_UNAVAILABLE",
            FleetError::InvalidReading(_) => "INVALID_READING",
            FleetError::InvalidTimestamp(_) => "INVALID_TIMESTAMP",
            FleetError::InvalidStateTransition(_) => "INVALID_STATE_TRANSITION",
            FleetError::StoreUnavailable(_) => "STORE_UNAVAILABLE",
            FleetError::Validation(_) => "VALIDATION_ERROR",
        }
    }

    /// true si el error es transitorio y el caller puede reintentar
    pub fn is_transient(&self) -> bool {
        matches!(self, FleetError::StoreUnavailable(_))
    }
}
