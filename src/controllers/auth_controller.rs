use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::auth_dto::{ApiResponse, AuthResponse, LoginRequest, RegisterRequest, UserResponse};
use crate::models::auth::UserRole;
use crate::models::user::User;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;
use crate::utils::jwt::{generate_token, JwtConfig};
use crate::utils::validation;

pub struct AuthController {
    repository: UserRepository,
}

impl AuthController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: UserRepository::new(pool),
        }
    }

    pub async fn register(
        &self,
        request: RegisterRequest,
        jwt_config: &JwtConfig,
    ) -> Result<ApiResponse<AuthResponse>, AppError> {
        request.validate()?;

        if validation::validate_email(&request.email).is_err() {
            return Err(AppError::ValidationError(
                "Dirección de email inválida.".to_string(),
            ));
        }

        // Verificar que el email no exista
        if self.repository.email_exists(&request.email).await? {
            return Err(AppError::Conflict("El email ya está registrado.".to_string()));
        }

        // Hash de la contraseña
        let password_hash = hash(&request.password, DEFAULT_COST)
            .map_err(|e| AppError::Internal(format!("Error hashing password: {}", e)))?;

        let user = User {
            id: Uuid::new_v4(),
            username: request.username,
            email: request.email,
            password_hash,
            role: UserRole::User.as_str().to_string(),
            is_blocked: false,
            created_at: Utc::now(),
        };

        let saved = self.repository.create(&user).await?;
        let token = generate_token(saved.id, &saved.email, &saved.role, jwt_config)?;

        Ok(ApiResponse::success_with_message(
            AuthResponse {
                token,
                user: user_to_response(saved),
            },
            "¡Registro exitoso! Bienvenido.".to_string(),
        ))
    }

    pub async fn login(
        &self,
        request: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<ApiResponse<AuthResponse>, AppError> {
        let user = self
            .repository
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Email o contraseña inválidos.".to_string()))?;

        // Verificar contraseña
        let valid = verify(&request.password, &user.password_hash)
            .map_err(|e| AppError::Internal(format!("Error verifying password: {}", e)))?;

        if !valid {
            return Err(AppError::Unauthorized(
                "Email o contraseña inválidos.".to_string(),
            ));
        }

        if user.is_blocked {
            return Err(AppError::Forbidden(
                "Tu cuenta fue bloqueada. Por favor contactá a soporte.".to_string(),
            ));
        }

        let token = generate_token(user.id, &user.email, &user.role, jwt_config)?;

        Ok(ApiResponse::success_with_message(
            AuthResponse {
                token,
                user: user_to_response(user),
            },
            "¡Inicio de sesión exitoso!".to_string(),
        ))
    }

    pub async fn me(&self, user_id: Uuid) -> Result<UserResponse, AppError> {
        let user = self
            .repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        Ok(user_to_response(user))
    }
}

pub fn user_to_response(user: User) -> UserResponse {
    UserResponse {
        id: user.id,
        username: user.username,
        email: user.email,
        role: user.role,
        is_blocked: user.is_blocked,
        created_at: user.created_at,
    }
}
