//! Handlers for signup and login.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use crewdesk_core::error::CoreError;
use crewdesk_db::models::user::CreateUser;
use crewdesk_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};

use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Minimum password length enforced on signup.
const MIN_PASSWORD_LENGTH: usize = 8;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /signup` and `POST /login`.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

/// Response body for both auth endpoints.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: &'static str,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /signup
///
/// Create a new credential pair. An already-taken username is a conflict;
/// the password is hashed with argon2id before it is stored.
pub async fn signup(
    State(state): State<AppState>,
    Json(input): Json<CredentialsRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    if input.username.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Username must not be empty".into(),
        )));
    }

    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    if UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Username '{}' is already taken",
            input.username
        ))));
    }

    let hashed = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            username: input.username,
            password_hash: hashed,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "New account created");

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "Account created successfully",
        }),
    ))
}

/// POST /login
///
/// Authenticate a credential pair. Succeeds only when the username exists
/// and the password verifies against the stored hash; both failure modes
/// produce the same 401 so usernames cannot be probed.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<CredentialsRequest>,
) -> AppResult<Json<AuthResponse>> {
    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid username or password".into(),
            ))
        })?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid username or password".into(),
        )));
    }

    Ok(Json(AuthResponse {
        message: "Login successful",
    }))
}
