//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del motor vía variables de entorno.

use std::env;
use std::time::Duration;

/// Configuración del motor
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Deadline para cada llamada al Entity Store; al expirar se
    /// reporta StoreUnavailable, sin reintentos internos
    pub store_timeout_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            store_timeout_ms: env::var("STORE_TIMEOUT_MS")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(5_000),
        }
    }
}

impl EngineConfig {
    /// Cargar configuración desde .env + entorno
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::default()
    }

    pub fn with_store_timeout_ms(store_timeout_ms: u64) -> Self {
        Self { store_timeout_ms }
    }

    pub fn store_timeout(&self) -> Duration {
        Duration::from_millis(self.store_timeout_ms)
    }
}
