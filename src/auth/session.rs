use actix_session::Session;

use crate::auth::provider::IdentityClient;
use crate::errors::AppError;
use crate::models::user::User;

const TOKEN_KEY: &str = "token";
const FLASH_KEY: &str = "flash";

pub fn store_token(session: &Session, token: &str) {
    let _ = session.insert(TOKEN_KEY, token);
}

pub fn set_flash(session: &Session, message: &str) {
    let _ = session.insert(FLASH_KEY, message);
}

pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>(FLASH_KEY).unwrap_or(None);
    if flash.is_some() {
        session.remove(FLASH_KEY);
    }
    flash
}

/// Exchange the request's credentials for a user identity, once per
/// request. No credentials or a rejected token yield an absent user;
/// transport failures bubble to the page boundary.
pub async fn resolve_user(
    session: &Session,
    identity: &IdentityClient,
) -> Result<Option<User>, AppError> {
    let token = session
        .get::<String>(TOKEN_KEY)
        .map_err(|e| AppError::Session(format!("Failed to read session token: {e}")))?;

    match token {
        None => Ok(None),
        Some(token) => Ok(identity.session(&token).await?),
    }
}
