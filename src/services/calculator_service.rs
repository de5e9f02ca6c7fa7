//! Calculadora de odómetro y combustible
//!
//! Funciones puras sobre las lecturas de un viaje. Sin I/O y sin
//! efectos: el Trip Lifecycle Controller decide qué persistir.

use rust_decimal::Decimal;

use crate::utils::errors::FleetError;

/// Distancia derivada de un par de lecturas de odómetro
pub fn calculated_distance(
    start_odometer: Decimal,
    end_odometer: Decimal,
) -> Result<Decimal, FleetError> {
    if end_odometer < start_odometer {
        return Err(FleetError::InvalidReading(format!(
            "end odometer {} is below start odometer {}",
            end_odometer, start_odometer
        )));
    }
    Ok(end_odometer - start_odometer)
}

/// Delta de combustible (puede ser negativo: consumo)
///
/// El rango [0, fuel_capacity] ya fue validado en la frontera de entrada.
pub fn fuel_delta(fuel_level_start: Decimal, fuel_level_end: Decimal) -> Decimal {
    fuel_level_end - fuel_level_start
}
