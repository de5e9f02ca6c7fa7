//! Modelo de Department
//!
//! Referenciado por Vehicle vía `department_id`; nunca posee vehículos.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Department {
    pub id: Uuid,
    pub name: String,
    pub code: String,
}
