//! Tests del agregador de estadísticas y del deadline de store

mod common;

use std::sync::Arc;
use std::time::Duration as StdDuration;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use common::{start_request, test_vehicle};
use fleet_engine::models::department::Department;
use fleet_engine::services::stats_service::{fleet_stats, trip_stats};
use fleet_engine::{
    EngineConfig, EntityStore, FleetError, MemoryStore, StatsService, Trip, TripService,
    TripStatus, Vehicle, VehicleStatus,
};

fn completed_trip(duration_minutes: i64, distance: Option<i64>) -> Trip {
    let start_time = Utc::now() - Duration::minutes(duration_minutes);
    Trip {
        id: Uuid::new_v4(),
        vehicle_id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        driver_id: None,
        purpose: None,
        trip_purpose: None,
        start_time,
        end_time: Some(start_time + Duration::minutes(duration_minutes)),
        start_odometer: None,
        end_odometer: None,
        fuel_level_start: None,
        fuel_level_end: None,
        calculated_distance: distance.map(Decimal::from),
        damage_report: None,
        cancel_reason: None,
        status: TripStatus::Completed,
        inspections: Vec::new(),
        created_at: start_time,
        updated_at: Utc::now(),
    }
}

fn active_trip() -> Trip {
    let mut trip = completed_trip(0, None);
    trip.status = TripStatus::Active;
    trip.end_time = None;
    trip
}

#[test]
fn fleet_stats_promedia_solo_niveles_presentes() {
    let mut with_fuel_50 = test_vehicle(VehicleStatus::Active);
    with_fuel_50.fuel_level = Some(Decimal::from(50));
    let mut with_fuel_30 = test_vehicle(VehicleStatus::Active);
    with_fuel_30.fuel_level = Some(Decimal::from(30));
    let mut without_fuel = test_vehicle(VehicleStatus::Maintenance);
    without_fuel.fuel_level = None;

    let stats = fleet_stats(&[with_fuel_50, with_fuel_30, without_fuel]);
    assert_eq!(stats.total, 3);
    assert_eq!(stats.active, 2);
    assert_eq!(stats.maintenance, 1);
    assert_eq!(stats.avg_fuel, Decimal::from(40));
}

#[test]
fn fleet_stats_sin_niveles_reporta_cero() {
    let mut vehicle = test_vehicle(VehicleStatus::Inactive);
    vehicle.fuel_level = None;
    let stats = fleet_stats(&[vehicle]);
    assert_eq!(stats.total, 1);
    assert_eq!(stats.active, 0);
    assert_eq!(stats.avg_fuel, Decimal::ZERO);
}

#[test]
fn fleet_stats_sobre_flota_vacia() {
    let stats = fleet_stats(&[]);
    assert_eq!(stats.total, 0);
    assert_eq!(stats.avg_fuel, Decimal::ZERO);
}

#[test]
fn trip_stats_ejemplo_de_dashboard() {
    let trips = vec![completed_trip(2, Some(20)), active_trip()];
    let stats = trip_stats(&trips);
    assert_eq!(stats.active, 1);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.avg_duration_minutes, Decimal::from(2));
    assert_eq!(stats.total_distance, Decimal::from(20));
}

#[test]
fn trip_stats_distancia_ausente_cuenta_como_cero() {
    let trips = vec![completed_trip(10, Some(20)), completed_trip(20, None)];
    let stats = trip_stats(&trips);
    assert_eq!(stats.completed, 2);
    assert_eq!(stats.avg_duration_minutes, Decimal::from(15));
    assert_eq!(stats.total_distance, Decimal::from(20));
}

#[test]
fn trip_stats_sin_completados_reporta_cero() {
    let stats = trip_stats(&[active_trip()]);
    assert_eq!(stats.active, 1);
    assert_eq!(stats.completed, 0);
    assert_eq!(stats.avg_duration_minutes, Decimal::ZERO);
    assert_eq!(stats.total_distance, Decimal::ZERO);
}

#[tokio::test]
async fn stats_service_toma_snapshot_del_store() {
    let store: Arc<dyn EntityStore> = Arc::new(MemoryStore::new());
    let vehicle = store
        .insert_vehicle(test_vehicle(VehicleStatus::Active))
        .await
        .unwrap();

    let config = EngineConfig::with_store_timeout_ms(5_000);
    let trips = TripService::new(store.clone(), config.clone());
    let stats = StatsService::new(store.clone(), config);

    let trip = trips.start_trip(start_request(vehicle.id)).await.unwrap();
    assert_eq!(stats.trip_stats().await.unwrap().active, 1);

    trips
        .end_trip(
            trip.id,
            fleet_engine::EndTripRequest {
                end_time: None,
                end_odometer: Some(Decimal::from(120)),
                fuel_level_end: Some(Decimal::from(35)),
                damage_report: None,
            },
        )
        .await
        .unwrap();

    let trip_summary = stats.trip_stats().await.unwrap();
    assert_eq!(trip_summary.active, 0);
    assert_eq!(trip_summary.completed, 1);
    assert_eq!(trip_summary.total_distance, Decimal::from(20));

    let fleet_summary = stats.fleet_stats().await.unwrap();
    assert_eq!(fleet_summary.total, 1);
    assert_eq!(fleet_summary.avg_fuel, Decimal::from(35));
}

/// Store que excede el deadline en las lecturas, para verificar que el
/// timeout se reporta como StoreUnavailable
struct SlowStore {
    inner: MemoryStore,
    delay: StdDuration,
}

#[async_trait]
impl EntityStore for SlowStore {
    async fn insert_vehicle(&self, vehicle: Vehicle) -> Result<Vehicle, FleetError> {
        self.inner.insert_vehicle(vehicle).await
    }

    async fn get_vehicle(&self, id: Uuid) -> Result<Option<Vehicle>, FleetError> {
        self.inner.get_vehicle(id).await
    }

    async fn update_vehicle(&self, vehicle: Vehicle) -> Result<Vehicle, FleetError> {
        self.inner.update_vehicle(vehicle).await
    }

    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, FleetError> {
        tokio::time::sleep(self.delay).await;
        self.inner.list_vehicles().await
    }

    async fn insert_department(&self, department: Department) -> Result<Department, FleetError> {
        self.inner.insert_department(department).await
    }

    async fn get_department(&self, id: Uuid) -> Result<Option<Department>, FleetError> {
        self.inner.get_department(id).await
    }

    async fn insert_trip(&self, trip: Trip) -> Result<Trip, FleetError> {
        self.inner.insert_trip(trip).await
    }

    async fn get_trip(&self, id: Uuid) -> Result<Option<Trip>, FleetError> {
        tokio::time::sleep(self.delay).await;
        self.inner.get_trip(id).await
    }

    async fn update_trip(&self, trip: Trip) -> Result<Trip, FleetError> {
        self.inner.update_trip(trip).await
    }

    async fn list_trips(&self) -> Result<Vec<Trip>, FleetError> {
        self.inner.list_trips().await
    }

    async fn find_active_trip_for_vehicle(
        &self,
        vehicle_id: Uuid,
    ) -> Result<Option<Trip>, FleetError> {
        self.inner.find_active_trip_for_vehicle(vehicle_id).await
    }
}

#[tokio::test]
async fn deadline_de_store_se_reporta_como_store_unavailable() {
    let store: Arc<dyn EntityStore> = Arc::new(SlowStore {
        inner: MemoryStore::new(),
        delay: StdDuration::from_millis(200),
    });
    let config = EngineConfig::with_store_timeout_ms(50);

    let stats = StatsService::new(store.clone(), config.clone());
    let result = stats.fleet_stats().await;
    assert!(matches!(&result, Err(FleetError::StoreUnavailable(_))));
    assert!(result.unwrap_err().is_transient());

    let trips = TripService::new(store, config);
    let result = trips.get_trip(Uuid::new_v4()).await;
    assert!(matches!(result, Err(FleetError::StoreUnavailable(_))));
}
