//! Capa de acceso al Entity Store

pub mod entity_store;
pub mod memory_store;

use std::future::Future;
use std::time::Duration;

use crate::utils::errors::FleetError;

/// Envolver una llamada al store con deadline; al expirar se reporta
/// StoreUnavailable y el caller decide si reintenta
pub async fn with_store_timeout<T>(
    deadline: Duration,
    call: impl Future<Output = Result<T, FleetError>>,
) -> Result<T, FleetError> {
    match tokio::time::timeout(deadline, call).await {
        Ok(result) => result,
        Err(_) => Err(FleetError::StoreUnavailable(format!(
            "store call exceeded {}ms",
            deadline.as_millis()
        ))),
    }
}
