//! Trip Lifecycle Controller
//!
//! Máquina de estados del viaje: active → completed | cancelled, ambos
//! terminales. Orquesta el guard de disponibilidad y la calculadora, y
//! propaga odómetro/combustible al vehículo al completar.
//!
//! El check-then-create de start_trip se serializa con un lock por
//! vehículo: dos starts concurrentes sobre el mismo vehículo no pueden
//! abrir dos viajes, y starts sobre vehículos distintos no se bloquean
//! entre sí. Toda llamada al store corre con deadline; al expirar se
//! reporta StoreUnavailable sin reintentos (la política de retry es del
//! caller).

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::{Mutex, RwLock};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::config::environment::EngineConfig;
use crate::models::inspection::CreateInspectionRequest;
use crate::models::trip::{
    CancelTripRequest, EndTripRequest, StartTripRequest, Trip, TripStatus,
};
use crate::services::availability_service::AvailabilityService;
use crate::services::calculator_service;
use crate::store::entity_store::EntityStore;
use crate::store::with_store_timeout;
use crate::utils::errors::FleetError;
use crate::utils::validation::{validate_fuel_level, validate_odometer};

#[derive(Clone)]
pub struct TripService {
    store: Arc<dyn EntityStore>,
    guard: AvailabilityService,
    config: EngineConfig,
    /// Un lock por vehículo tocado. El mapa sólo crece, acotado por el
    /// tamaño de la flota; no hay desalojo de entradas.
    vehicle_locks: Arc<RwLock<HashMap<Uuid, Arc<Mutex<()>>>>>,
}

impl TripService {
    pub fn new(store: Arc<dyn EntityStore>, config: EngineConfig) -> Self {
        Self {
            guard: AvailabilityService::new(store.clone()),
            store,
            config,
            vehicle_locks: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Obtener (o crear) el lock exclusivo de un vehículo
    async fn vehicle_lock(&self, vehicle_id: Uuid) -> Arc<Mutex<()>> {
        {
            let locks = self.vehicle_locks.read().await;
            if let Some(lock) = locks.get(&vehicle_id) {
                return lock.clone();
            }
        }
        let mut locks = self.vehicle_locks.write().await;
        locks
            .entry(vehicle_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    async fn with_timeout<T>(
        &self,
        call: impl std::future::Future<Output = Result<T, FleetError>>,
    ) -> Result<T, FleetError> {
        with_store_timeout(self.config.store_timeout(), call).await
    }

    /// Iniciar un viaje. Todo-o-nada: si el guard o la validación
    /// rechazan, no se crea nada.
    pub async fn start_trip(&self, request: StartTripRequest) -> Result<Trip, FleetError> {
        request.validate()?;

        // Sección exclusiva por vehículo: guard + create atómicos
        let lock = self.vehicle_lock(request.vehicle_id).await;
        let _section = lock.lock().await;

        // 1. Guard: existe, está activo, sin viaje abierto
        let vehicle = self
            .with_timeout(self.guard.can_start(request.vehicle_id))
            .await?;

        // 2. Validar lecturas iniciales contra el vehículo
        if let Some(odometer) = request.start_odometer {
            validate_odometer(odometer)?;
        }
        if let Some(level) = request.fuel_level_start {
            validate_fuel_level(level, vehicle.fuel_capacity)?;
        }

        // 3. Crear el viaje en estado activo
        let now = Utc::now();
        let trip = Trip {
            id: Uuid::new_v4(),
            vehicle_id: request.vehicle_id,
            user_id: request.user_id,
            driver_id: request.driver_id,
            purpose: request.purpose,
            trip_purpose: request.trip_purpose,
            start_time: request.start_time.unwrap_or(now),
            end_time: None,
            start_odometer: request.start_odometer,
            end_odometer: None,
            fuel_level_start: request.fuel_level_start,
            fuel_level_end: None,
            calculated_distance: None,
            damage_report: None,
            cancel_reason: None,
            status: TripStatus::Active,
            inspections: Vec::new(),
            created_at: now,
            updated_at: now,
        };

        let created = self.with_timeout(self.store.insert_trip(trip)).await?;
        info!(
            "🚗 Viaje {} iniciado para vehículo {}",
            created.id, created.vehicle_id
        );
        Ok(created)
    }

    /// Completar un viaje activo. Valida todo antes de la primera
    /// mutación: un rechazo deja el viaje activo, sin escritura parcial.
    pub async fn end_trip(&self, trip_id: Uuid, request: EndTripRequest) -> Result<Trip, FleetError> {
        request.validate()?;

        let vehicle_id = self.trip_vehicle_id(trip_id).await?;
        let lock = self.vehicle_lock(vehicle_id).await;
        let _section = lock.lock().await;

        // Re-leer bajo el lock: otro task pudo cerrarlo en el interín
        let mut trip = self.require_trip(trip_id).await?;
        self.require_active(&trip)?;

        let end_time = request.end_time.unwrap_or_else(Utc::now);
        if end_time < trip.start_time {
            return Err(FleetError::InvalidTimestamp(format!(
                "end time {} precedes start time {}",
                end_time, trip.start_time
            )));
        }

        let mut vehicle = self
            .with_timeout(self.store.get_vehicle(trip.vehicle_id))
            .await?
            .ok_or_else(|| {
                FleetError::NotFound(format!("Vehicle {} not found", trip.vehicle_id))
            })?;

        // Validar lecturas finales antes de mutar nada
        let calculated_distance = match (trip.start_odometer, request.end_odometer) {
            (Some(start), Some(end)) => {
                Some(calculator_service::calculated_distance(start, end)?)
            }
            _ => None,
        };
        if let Some(end_odometer) = request.end_odometer {
            validate_odometer(end_odometer)?;
            // current_odometer es monótono durante la vida del vehículo
            if let Some(current) = vehicle.current_odometer {
                if end_odometer < current {
                    return Err(FleetError::InvalidReading(format!(
                        "end odometer {} would move vehicle odometer backwards from {}",
                        end_odometer, current
                    )));
                }
            }
        }
        if let Some(level) = request.fuel_level_end {
            validate_fuel_level(level, vehicle.fuel_capacity)?;
        }

        // Propagar lecturas al vehículo ANTES de la transición terminal:
        // si el store falla aquí el viaje sigue activo y el retry del
        // caller es idempotente (re-escribe las mismas lecturas)
        if request.end_odometer.is_some() || request.fuel_level_end.is_some() {
            if let Some(end_odometer) = request.end_odometer {
                vehicle.current_odometer = Some(end_odometer);
            }
            if let Some(level) = request.fuel_level_end {
                vehicle.fuel_level = Some(level);
            }
            vehicle.updated_at = Utc::now();
            self.with_timeout(self.store.update_vehicle(vehicle)).await?;
        }

        // Transición terminal
        trip.status = TripStatus::Completed;
        trip.end_time = Some(end_time);
        trip.end_odometer = request.end_odometer;
        trip.fuel_level_end = request.fuel_level_end;
        trip.calculated_distance = calculated_distance;
        if request.damage_report.is_some() {
            trip.damage_report = request.damage_report;
        }
        trip.updated_at = Utc::now();

        let completed = self.with_timeout(self.store.update_trip(trip)).await?;

        info!(
            "🏁 Viaje {} completado (distancia: {:?})",
            completed.id, completed.calculated_distance
        );
        Ok(completed)
    }

    /// Cancelar un viaje activo. No propaga odómetro ni combustible al
    /// vehículo.
    pub async fn cancel_trip(
        &self,
        trip_id: Uuid,
        request: CancelTripRequest,
    ) -> Result<Trip, FleetError> {
        request.validate()?;

        let vehicle_id = self.trip_vehicle_id(trip_id).await?;
        let lock = self.vehicle_lock(vehicle_id).await;
        let _section = lock.lock().await;

        let mut trip = self.require_trip(trip_id).await?;
        self.require_active(&trip)?;

        trip.status = TripStatus::Cancelled;
        trip.end_time = Some(Utc::now());
        trip.cancel_reason = request.reason;
        trip.updated_at = Utc::now();

        let cancelled = self.with_timeout(self.store.update_trip(trip)).await?;
        info!("🛑 Viaje {} cancelado", cancelled.id);
        Ok(cancelled)
    }

    /// Registrar una inspección en un viaje activo. La inspección es
    /// inmutable una vez añadida.
    pub async fn add_inspection(
        &self,
        trip_id: Uuid,
        request: CreateInspectionRequest,
    ) -> Result<Trip, FleetError> {
        request.validate()?;

        let vehicle_id = self.trip_vehicle_id(trip_id).await?;
        let lock = self.vehicle_lock(vehicle_id).await;
        let _section = lock.lock().await;

        let mut trip = self.require_trip(trip_id).await?;
        self.require_active(&trip)?;

        trip.inspections.push(request.into_inspection());
        trip.updated_at = Utc::now();

        self.with_timeout(self.store.update_trip(trip)).await
    }

    pub async fn get_trip(&self, trip_id: Uuid) -> Result<Trip, FleetError> {
        self.require_trip(trip_id).await
    }

    pub async fn list_trips(&self) -> Result<Vec<Trip>, FleetError> {
        self.with_timeout(self.store.list_trips()).await
    }

    pub async fn find_active_trip(&self, vehicle_id: Uuid) -> Result<Option<Trip>, FleetError> {
        self.with_timeout(self.store.find_active_trip_for_vehicle(vehicle_id))
            .await
    }

    async fn trip_vehicle_id(&self, trip_id: Uuid) -> Result<Uuid, FleetError> {
        Ok(self.require_trip(trip_id).await?.vehicle_id)
    }

    async fn require_trip(&self, trip_id: Uuid) -> Result<Trip, FleetError> {
        self.with_timeout(self.store.get_trip(trip_id))
            .await?
            .ok_or_else(|| FleetError::NotFound(format!("Trip {} not found", trip_id)))
    }

    fn require_active(&self, trip: &Trip) -> Result<(), FleetError> {
        if trip.status.is_terminal() {
            return Err(FleetError::InvalidStateTransition(format!(
                "trip {} is already {}",
                trip.id, trip.status
            )));
        }
        Ok(())
    }
}
