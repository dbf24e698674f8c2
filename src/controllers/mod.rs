//! Controllers de la API
//!
//! Cada controller valida la entrada, chequea permisos y orquesta los
//! repositorios de su recurso.

pub mod auth_controller;
pub mod booking_controller;
pub mod car_controller;
pub mod location_controller;
pub mod maintenance_controller;
pub mod review_controller;
pub mod statistics_controller;
pub mod user_controller;
