//! Servicio de autorización
//!
//! Chequeo explícito de capacidades contra el conjunto cerrado de roles
//! {admin, manager, user}.

use crate::models::auth::{AuthUser, UserRole};
use crate::utils::errors::AppError;

/// Capacidades del sistema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    ManageFleet,
    DeleteCars,
    ManageBookings,
    ViewStatistics,
    ManageUsers,
}

/// Mapa rol -> capacidad
pub fn role_has_permission(role: UserRole, permission: Permission) -> bool {
    match permission {
        Permission::ManageFleet | Permission::ManageBookings | Permission::ViewStatistics => {
            matches!(role, UserRole::Admin | UserRole::Manager)
        }
        Permission::DeleteCars | Permission::ManageUsers => matches!(role, UserRole::Admin),
    }
}

/// Rechazar con 403 si el usuario no tiene la capacidad requerida
pub fn require_permission(user: &AuthUser, permission: Permission) -> Result<(), AppError> {
    if role_has_permission(user.role, permission) {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "Acceso denegado. Permisos insuficientes.".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manager_capabilities() {
        assert!(role_has_permission(UserRole::Manager, Permission::ManageFleet));
        assert!(role_has_permission(UserRole::Manager, Permission::ManageBookings));
        assert!(role_has_permission(UserRole::Manager, Permission::ViewStatistics));
        assert!(!role_has_permission(UserRole::Manager, Permission::DeleteCars));
        assert!(!role_has_permission(UserRole::Manager, Permission::ManageUsers));
    }

    #[test]
    fn test_admin_has_all_capabilities() {
        for permission in [
            Permission::ManageFleet,
            Permission::DeleteCars,
            Permission::ManageBookings,
            Permission::ViewStatistics,
            Permission::ManageUsers,
        ] {
            assert!(role_has_permission(UserRole::Admin, permission));
        }
    }

    #[test]
    fn test_user_has_no_staff_capabilities() {
        for permission in [
            Permission::ManageFleet,
            Permission::DeleteCars,
            Permission::ManageBookings,
            Permission::ViewStatistics,
            Permission::ManageUsers,
        ] {
            assert!(!role_has_permission(UserRole::User, permission));
        }
    }
}
