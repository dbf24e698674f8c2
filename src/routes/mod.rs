//! Routers de la API

pub mod auth_routes;
pub mod booking_routes;
pub mod car_routes;
pub mod location_routes;
pub mod maintenance_routes;
pub mod review_routes;
pub mod statistics_routes;
pub mod user_routes;
