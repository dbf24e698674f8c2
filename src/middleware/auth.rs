//! Middleware de autenticación
//!
//! Valida el bearer token JWT y deja el usuario autenticado en las
//! extensiones del request.

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::models::auth::{AuthUser, UserRole};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::{extract_token_from_header, verify_token, JwtConfig};

pub async fn auth_middleware(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Extraer token del header Authorization
    let auth_header = headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Token de autenticación requerido".to_string()))?;

    let token = extract_token_from_header(auth_header)?;

    // Validar token
    let config = JwtConfig::from(&state.config);
    let claims = verify_token(token, &config)?;

    let user_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| AppError::Unauthorized("Token inválido".to_string()))?;
    let role = UserRole::from_str(&claims.role)
        .ok_or_else(|| AppError::Unauthorized("Rol desconocido".to_string()))?;

    let auth_user = AuthUser {
        id: user_id,
        email: claims.email,
        role,
    };

    request.extensions_mut().insert(auth_user);

    Ok(next.run(request).await)
}
