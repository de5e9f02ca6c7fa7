//! Guard de disponibilidad de vehículos
//!
//! Verifica que un vehículo exista, esté activo y no tenga ya un viaje
//! abierto antes de permitir start_trip. Sólo lectura: el Trip Lifecycle
//! Controller lo invoca bajo el lock por-vehículo para que el
//! check-then-create sea atómico.

use std::sync::Arc;

use tracing::warn;
use uuid::Uuid;

use crate::models::vehicle::{Vehicle, VehicleStatus};
use crate::store::entity_store::EntityStore;
use crate::utils::errors::{FleetError, UnavailableReason};

#[derive(Clone)]
pub struct AvailabilityService {
    store: Arc<dyn EntityStore>,
}

impl AvailabilityService {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    /// Devuelve el vehículo si puede iniciar un viaje, para que el
    /// caller no tenga que re-leerlo
    pub async fn can_start(&self, vehicle_id: Uuid) -> Result<Vehicle, FleetError> {
        let vehicle = self
            .store
            .get_vehicle(vehicle_id)
            .await?
            .ok_or_else(|| FleetError::NotFound(format!("Vehicle {} not found", vehicle_id)))?;

        match vehicle.status {
            VehicleStatus::Active => {}
            VehicleStatus::Maintenance => {
                warn!("🚧 Vehículo {} rechazado: en mantenimiento", vehicle_id);
                return Err(FleetError::VehicleUnavailable {
                    reason: UnavailableReason::Maintenance,
                });
            }
            VehicleStatus::Inactive => {
                warn!("🚧 Vehículo {} rechazado: inactivo", vehicle_id);
                return Err(FleetError::VehicleUnavailable {
                    reason: UnavailableReason::Inactive,
                });
            }
        }

        if let Some(open_trip) = self.store.find_active_trip_for_vehicle(vehicle_id).await? {
            warn!(
                "🚧 Vehículo {} rechazado: ya está en el viaje {}",
                vehicle_id, open_trip.id
            );
            return Err(FleetError::VehicleUnavailable {
                reason: UnavailableReason::AlreadyOnTrip,
            });
        }

        Ok(vehicle)
    }
}
