//! Modelos de estadísticas agregadas
//!
//! Salidas del agregador para dashboards. Se recomputan bajo demanda
//! sobre un snapshot del Entity Store; toleran resultados levemente
//! stale (eventual consistency), a diferencia del invariante de viaje
//! activo.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Resumen de flota para dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FleetStats {
    pub total: i64,
    pub active: i64,
    pub maintenance: i64,
    /// Media de fuel_level sobre vehículos que lo reportan; 0 si ninguno
    pub avg_fuel: Decimal,
}

/// Resumen de viajes para dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TripStats {
    pub active: i64,
    pub completed: i64,
    /// Media de duración en minutos sobre viajes completados con ambos
    /// timestamps; 0 si ninguno
    pub avg_duration_minutes: Decimal,
    /// Suma de calculated_distance sobre completados; ausente cuenta como 0
    pub total_distance: Decimal,
}
