//! Configuración del sistema

pub mod environment;

/// Inicializar logging estructurado (idempotente)
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
