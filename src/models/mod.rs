//! Modelos del sistema
//!
//! Este módulo contiene todos los registros que cruzan la frontera con
//! el Entity Store y el caller, con las convenciones estándar.

pub mod department;
pub mod inspection;
pub mod stats;
pub mod trip;
pub mod vehicle;
