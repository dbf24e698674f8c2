//! Repositorios de acceso a datos
//!
//! Cada repositorio encapsula las queries SQLx de una tabla.

pub mod booking_repository;
pub mod car_repository;
pub mod location_repository;
pub mod maintenance_repository;
pub mod review_repository;
pub mod statistics_repository;
pub mod user_repository;
