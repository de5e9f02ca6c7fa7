//! Modelo de Trip
//!
//! Este módulo contiene el struct Trip, su máquina de estados y los
//! requests de ciclo de vida (start / end / cancel).
//!
//! Un Trip referencia exactamente un vehículo y un usuario; nunca los
//! posee. `purpose` y `trip_purpose` llegan ambos de los clientes; se
//! preservan los dos sin inferir precedencia.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::inspection::Inspection;

/// Estado del viaje. Completed y Cancelled son terminales.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    Active,
    Completed,
    Cancelled,
}

impl TripStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, TripStatus::Completed | TripStatus::Cancelled)
    }
}

impl std::fmt::Display for TripStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = match self {
            TripStatus::Active => "active",
            TripStatus::Completed => "completed",
            TripStatus::Cancelled => "cancelled",
        };
        write!(f, "{}", status)
    }
}

/// Trip principal
///
/// `end_time` está presente iff el estado es terminal.
/// `calculated_distance` es un campo derivado: lo fija el motor al
/// completar el viaje, nunca lo aporta el caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trip {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub user_id: Uuid,
    pub driver_id: Option<Uuid>,
    pub purpose: Option<String>,
    pub trip_purpose: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub start_odometer: Option<Decimal>,
    pub end_odometer: Option<Decimal>,
    pub fuel_level_start: Option<Decimal>,
    pub fuel_level_end: Option<Decimal>,
    pub calculated_distance: Option<Decimal>,
    pub damage_report: Option<String>,
    pub cancel_reason: Option<String>,
    pub status: TripStatus,
    /// Secuencia ordenada por creación; cada entrada es inmutable
    pub inspections: Vec<Inspection>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request para iniciar un viaje
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct StartTripRequest {
    pub vehicle_id: Uuid,
    pub user_id: Uuid,
    pub driver_id: Option<Uuid>,

    #[validate(length(min = 1, max = 255))]
    pub purpose: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub trip_purpose: Option<String>,

    /// Si falta, el motor usa la hora actual
    pub start_time: Option<DateTime<Utc>>,
    pub start_odometer: Option<Decimal>,
    pub fuel_level_start: Option<Decimal>,
}

/// Request para completar un viaje
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EndTripRequest {
    /// Si falta, el motor usa la hora actual
    pub end_time: Option<DateTime<Utc>>,
    pub end_odometer: Option<Decimal>,
    pub fuel_level_end: Option<Decimal>,

    #[validate(length(max = 2000))]
    pub damage_report: Option<String>,
}

/// Request para cancelar un viaje
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CancelTripRequest {
    #[validate(length(max = 500))]
    pub reason: Option<String>,
}
