//! Agregador de estadísticas de flota y viajes
//!
//! Funciones puras sobre snapshots del Entity Store, recomputadas bajo
//! demanda. Corre concurrente con las mutaciones de viajes y tolera
//! resultados levemente stale: es aceptable para dashboards, no para el
//! invariante de viaje activo.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::config::environment::EngineConfig;
use crate::models::stats::{FleetStats, TripStats};
use crate::models::trip::{Trip, TripStatus};
use crate::models::vehicle::{Vehicle, VehicleStatus};
use crate::store::entity_store::EntityStore;
use crate::store::with_store_timeout;
use crate::utils::errors::FleetError;

/// Resumen de flota sobre un snapshot de vehículos
pub fn fleet_stats(vehicles: &[Vehicle]) -> FleetStats {
    let total = vehicles.len() as i64;
    let active = vehicles
        .iter()
        .filter(|vehicle| vehicle.status == VehicleStatus::Active)
        .count() as i64;
    let maintenance = vehicles
        .iter()
        .filter(|vehicle| vehicle.status == VehicleStatus::Maintenance)
        .count() as i64;

    // Media sólo sobre vehículos que reportan nivel de combustible
    let fuel_levels: Vec<Decimal> = vehicles
        .iter()
        .filter_map(|vehicle| vehicle.fuel_level)
        .collect();
    let avg_fuel = if fuel_levels.is_empty() {
        Decimal::ZERO
    } else {
        fuel_levels.iter().sum::<Decimal>() / Decimal::from(fuel_levels.len() as i64)
    };

    FleetStats {
        total,
        active,
        maintenance,
        avg_fuel,
    }
}

/// Resumen de viajes sobre un snapshot de trips
pub fn trip_stats(trips: &[Trip]) -> TripStats {
    let active = trips
        .iter()
        .filter(|trip| trip.status == TripStatus::Active)
        .count() as i64;

    let completed_trips: Vec<&Trip> = trips
        .iter()
        .filter(|trip| trip.status == TripStatus::Completed)
        .collect();

    // Duraciones en minutos sobre completados con ambos timestamps
    let durations: Vec<Decimal> = completed_trips
        .iter()
        .filter_map(|trip| {
            trip.end_time.map(|end| {
                Decimal::from((end - trip.start_time).num_seconds()) / Decimal::from(60)
            })
        })
        .collect();
    let avg_duration_minutes = if durations.is_empty() {
        Decimal::ZERO
    } else {
        durations.iter().sum::<Decimal>() / Decimal::from(durations.len() as i64)
    };

    // Distancia ausente cuenta como 0
    let total_distance = completed_trips
        .iter()
        .filter_map(|trip| trip.calculated_distance)
        .sum::<Decimal>();

    TripStats {
        active,
        completed: completed_trips.len() as i64,
        avg_duration_minutes,
        total_distance,
    }
}

/// Servicio que toma el snapshot del store y computa ambos resúmenes
#[derive(Clone)]
pub struct StatsService {
    store: Arc<dyn EntityStore>,
    config: EngineConfig,
}

impl StatsService {
    pub fn new(store: Arc<dyn EntityStore>, config: EngineConfig) -> Self {
        Self { store, config }
    }

    pub async fn fleet_stats(&self) -> Result<FleetStats, FleetError> {
        let vehicles =
            with_store_timeout(self.config.store_timeout(), self.store.list_vehicles()).await?;
        Ok(fleet_stats(&vehicles))
    }

    pub async fn trip_stats(&self) -> Result<TripStats, FleetError> {
        let trips =
            with_store_timeout(self.config.store_timeout(), self.store.list_trips()).await?;
        Ok(trip_stats(&trips))
    }
}
