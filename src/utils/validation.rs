//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validar lecturas de
//! odómetro y combustible contra el registro del vehículo.

use rust_decimal::Decimal;

use crate::utils::errors::FleetError;

/// Validar que una lectura de odómetro no sea negativa
pub fn validate_odometer(value: Decimal) -> Result<(), FleetError> {
    if value < Decimal::ZERO {
        return Err(FleetError::InvalidReading(format!(
            "odometer reading {} cannot be negative",
            value
        )));
    }
    Ok(())
}

/// Validar que un nivel de combustible esté dentro de [0, fuel_capacity]
pub fn validate_fuel_level(level: Decimal, fuel_capacity: Decimal) -> Result<(), FleetError> {
    if level < Decimal::ZERO || level > fuel_capacity {
        return Err(FleetError::InvalidReading(format!(
            "fuel level {} outside of [0, {}]",
            level, fuel_capacity
        )));
    }
    Ok(())
}
