//! Services module
//!
//! Este módulo contiene la lógica de negocio del motor: calculadora de
//! lecturas, guard de disponibilidad, ciclo de vida de viajes y
//! agregador de estadísticas.

pub mod availability_service;
pub mod calculator_service;
pub mod stats_service;
pub mod trip_service;

pub use availability_service::AvailabilityService;
pub use stats_service::StatsService;
pub use trip_service::TripService;
