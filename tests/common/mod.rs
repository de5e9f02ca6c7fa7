//! Helpers compartidos por los tests de integración

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use fleet_engine::{
    EngineConfig, EntityStore, MemoryStore, StartTripRequest, TripService, Vehicle, VehicleStatus,
};
use fleet_engine::models::vehicle::FuelType;

pub fn test_vehicle(status: VehicleStatus) -> Vehicle {
    let now = Utc::now();
    Vehicle {
        id: Uuid::new_v4(),
        name: "Van 12".to_string(),
        number_plate: "AB-123-CD".to_string(),
        vin: None,
        make: Some("Renault".to_string()),
        model: Some("Trafic".to_string()),
        year: Some(2021),
        fuel_type: FuelType::Diesel,
        fuel_capacity: Decimal::from(60),
        fuel_level: Some(Decimal::from(50)),
        current_odometer: Some(Decimal::from(100)),
        status,
        department_id: None,
        assigned_driver_id: None,
        license_expiry: None,
        insurance_expiry: None,
        last_service_date: None,
        next_service_due: None,
        created_at: now,
        updated_at: now,
    }
}

pub fn start_request(vehicle_id: Uuid) -> StartTripRequest {
    StartTripRequest {
        vehicle_id,
        user_id: Uuid::new_v4(),
        driver_id: None,
        purpose: Some("delivery run".to_string()),
        trip_purpose: None,
        start_time: None,
        start_odometer: Some(Decimal::from(100)),
        fuel_level_start: Some(Decimal::from(50)),
    }
}

/// Store en memoria + servicio de viajes, con un vehículo ya sembrado
pub async fn service_with_vehicle(status: VehicleStatus) -> (Arc<dyn EntityStore>, TripService, Vehicle) {
    let store: Arc<dyn EntityStore> = Arc::new(MemoryStore::new());
    let vehicle = store.insert_vehicle(test_vehicle(status)).await.unwrap();
    let service = TripService::new(store.clone(), EngineConfig::with_store_timeout_ms(5_000));
    (store, service, vehicle)
}
