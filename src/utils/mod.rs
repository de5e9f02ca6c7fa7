//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores y
//! validación de lecturas.

pub mod errors;
pub mod validation;
