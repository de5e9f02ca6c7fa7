//! Entity Store en memoria
//!
//! Implementación de referencia sobre HashMap + RwLock, pensada para
//! embedding y tests. Cada lectura de listado devuelve un snapshot
//! clonado, consistente para el agregador.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::department::Department;
use crate::models::trip::{Trip, TripStatus};
use crate::models::vehicle::Vehicle;
use crate::store::entity_store::EntityStore;
use crate::utils::errors::FleetError;

#[derive(Clone, Default)]
pub struct MemoryStore {
    vehicles: Arc<RwLock<HashMap<Uuid, Vehicle>>>,
    departments: Arc<RwLock<HashMap<Uuid, Department>>>,
    trips: Arc<RwLock<HashMap<Uuid, Trip>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EntityStore for MemoryStore {
    async fn insert_vehicle(&self, vehicle: Vehicle) -> Result<Vehicle, FleetError> {
        let mut vehicles = self.vehicles.write().await;
        vehicles.insert(vehicle.id, vehicle.clone());
        Ok(vehicle)
    }

    async fn get_vehicle(&self, id: Uuid) -> Result<Option<Vehicle>, FleetError> {
        let vehicles = self.vehicles.read().await;
        Ok(vehicles.get(&id).cloned())
    }

    async fn update_vehicle(&self, vehicle: Vehicle) -> Result<Vehicle, FleetError> {
        let mut vehicles = self.vehicles.write().await;
        if !vehicles.contains_key(&vehicle.id) {
            return Err(FleetError::NotFound(format!(
                "Vehicle {} not found",
                vehicle.id
            )));
        }
        vehicles.insert(vehicle.id, vehicle.clone());
        Ok(vehicle)
    }

    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, FleetError> {
        let vehicles = self.vehicles.read().await;
        let mut snapshot: Vec<Vehicle> = vehicles.values().cloned().collect();
        snapshot.sort_by_key(|vehicle| vehicle.created_at);
        Ok(snapshot)
    }

    async fn insert_department(&self, department: Department) -> Result<Department, FleetError> {
        let mut departments = self.departments.write().await;
        departments.insert(department.id, department.clone());
        Ok(department)
    }

    async fn get_department(&self, id: Uuid) -> Result<Option<Department>, FleetError> {
        let departments = self.departments.read().await;
        Ok(departments.get(&id).cloned())
    }

    async fn insert_trip(&self, trip: Trip) -> Result<Trip, FleetError> {
        let mut trips = self.trips.write().await;
        trips.insert(trip.id, trip.clone());
        Ok(trip)
    }

    async fn get_trip(&self, id: Uuid) -> Result<Option<Trip>, FleetError> {
        let trips = self.trips.read().await;
        Ok(trips.get(&id).cloned())
    }

    async fn update_trip(&self, trip: Trip) -> Result<Trip, FleetError> {
        let mut trips = self.trips.write().await;
        if !trips.contains_key(&trip.id) {
            return Err(FleetError::NotFound(format!("Trip {} not found", trip.id)));
        }
        trips.insert(trip.id, trip.clone());
        Ok(trip)
    }

    async fn list_trips(&self) -> Result<Vec<Trip>, FleetError> {
        let trips = self.trips.read().await;
        let mut snapshot: Vec<Trip> = trips.values().cloned().collect();
        snapshot.sort_by_key(|trip| trip.created_at);
        Ok(snapshot)
    }

    async fn find_active_trip_for_vehicle(
        &self,
        vehicle_id: Uuid,
    ) -> Result<Option<Trip>, FleetError> {
        let trips = self.trips.read().await;
        Ok(trips
            .values()
            .find(|trip| trip.vehicle_id == vehicle_id && trip.status == TripStatus::Active)
            .cloned())
    }
}
