//! Fleet Engine - Motor de ciclo de vida de viajes
//!
//! Este crate implementa el núcleo de consistencia de flota: apertura y
//! cierre de viajes, cálculo de métricas derivadas (distancia, combustible),
//! disponibilidad de vehículos y estadísticas agregadas para dashboards.
//!
//! La persistencia es un colaborador externo detrás del trait [`EntityStore`];
//! se incluye una implementación en memoria para embedding y tests.

pub mod config;
pub mod models;
pub mod services;
pub mod store;
pub mod utils;

pub use config::environment::EngineConfig;
pub use models::department::Department;
pub use models::inspection::{CreateInspectionRequest, Inspection};
pub use models::stats::{FleetStats, TripStats};
pub use models::trip::{CancelTripRequest, EndTripRequest, StartTripRequest, Trip, TripStatus};
pub use models::vehicle::{FuelType, Vehicle, VehicleStatus};
pub use services::availability_service::AvailabilityService;
pub use services::stats_service::StatsService;
pub use services::trip_service::TripService;
pub use store::entity_store::EntityStore;
pub use store::memory_store::MemoryStore;
pub use utils::errors::{FleetError, UnavailableReason};
