use sqlx::PgPool;

use crate::controllers::auth_controller::user_to_response;
use crate::dto::auth_dto::{ApiResponse, UserResponse};
use crate::models::auth::AuthUser;
use crate::repositories::user_repository::UserRepository;
use crate::services::authorization_service::{require_permission, Permission};
use crate::utils::errors::AppError;
use uuid::Uuid;

pub struct UserController {
    repository: UserRepository,
}

impl UserController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: UserRepository::new(pool),
        }
    }

    pub async fn list(&self, auth: &AuthUser) -> Result<Vec<UserResponse>, AppError> {
        require_permission(auth, Permission::ManageUsers)?;

        let users = self.repository.list_all().await?;
        Ok(users.into_iter().map(user_to_response).collect())
    }

    pub async fn set_blocked(
        &self,
        auth: &AuthUser,
        id: Uuid,
        blocked: bool,
    ) -> Result<ApiResponse<UserResponse>, AppError> {
        require_permission(auth, Permission::ManageUsers)?;

        let user = self.repository.set_blocked(id, blocked).await?;
        let message = if blocked {
            format!("Usuario {} bloqueado.", user.username)
        } else {
            format!("Usuario {} desbloqueado.", user.username)
        };

        Ok(ApiResponse::success_with_message(
            user_to_response(user),
            message,
        ))
    }
}
