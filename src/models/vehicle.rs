//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y sus enums de estado.
//! Los estados son variantes cerradas para que los valores inválidos
//! sean irrepresentables.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Estado del vehículo
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    Active,
    Maintenance,
    Inactive,
}

/// Tipo de combustible
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Petrol,
    Diesel,
    Electric,
    Hybrid,
}

/// Vehicle principal - registro autoritativo del Entity Store
///
/// `current_odometer` es monótonamente no decreciente durante la vida
/// del vehículo; sólo end_trip lo avanza. `department_id` y
/// `assigned_driver_id` son back-references (lookups por FK), nunca
/// estructuras embebidas.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vehicle {
    pub id: Uuid,
    pub name: String,
    pub number_plate: String,
    pub vin: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub fuel_type: FuelType,
    pub fuel_capacity: Decimal,
    pub fuel_level: Option<Decimal>,
    pub current_odometer: Option<Decimal>,
    pub status: VehicleStatus,
    pub department_id: Option<Uuid>,
    pub assigned_driver_id: Option<Uuid>,
    pub license_expiry: Option<NaiveDate>,
    pub insurance_expiry: Option<NaiveDate>,
    pub last_service_date: Option<NaiveDate>,
    pub next_service_due: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
