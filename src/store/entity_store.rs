//! Trait del Entity Store
//!
//! Frontera con la capa de persistencia autoritativa. El motor no elige
//! el storage: cualquier backend que implemente este trait sirve
//! (Postgres, Mongo, memoria). Las fallas del backend se reportan como
//! FleetError::StoreUnavailable.

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::department::Department;
use crate::models::trip::Trip;
use crate::models::vehicle::Vehicle;
use crate::utils::errors::FleetError;

#[async_trait]
pub trait EntityStore: Send + Sync {
    // Vehicles
    async fn insert_vehicle(&self, vehicle: Vehicle) -> Result<Vehicle, FleetError>;
    async fn get_vehicle(&self, id: Uuid) -> Result<Option<Vehicle>, FleetError>;
    async fn update_vehicle(&self, vehicle: Vehicle) -> Result<Vehicle, FleetError>;
    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, FleetError>;

    // Departments
    async fn insert_department(&self, department: Department) -> Result<Department, FleetError>;
    async fn get_department(&self, id: Uuid) -> Result<Option<Department>, FleetError>;

    // Trips
    async fn insert_trip(&self, trip: Trip) -> Result<Trip, FleetError>;
    async fn get_trip(&self, id: Uuid) -> Result<Option<Trip>, FleetError>;
    async fn update_trip(&self, trip: Trip) -> Result<Trip, FleetError>;
    async fn list_trips(&self) -> Result<Vec<Trip>, FleetError>;
    async fn find_active_trip_for_vehicle(
        &self,
        vehicle_id: Uuid,
    ) -> Result<Option<Trip>, FleetError>;
}
