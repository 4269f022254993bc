//! Admin gate: password check plus a local session flag.
//!
//! The session flag is a plain `"true"` marker in the local cache under
//! [`store::SESSION_KEY`]. Anyone with access to the browser's storage can
//! set it by hand; the gate keeps casual visitors out, nothing more.

use store::{CacheStore, PasswordChangeError, SESSION_KEY};

use crate::site::make_engine;

/// Whether the local session flag is set.
pub async fn is_authenticated() -> bool {
    crate::site::make_cache()
        .get(SESSION_KEY)
        .await
        .as_deref()
        == Some("true")
}

/// Set the local session flag after a successful password check.
pub async fn set_authenticated() {
    crate::site::make_cache()
        .set(SESSION_KEY, "true".to_string())
        .await;
}

/// Clear the local session flag (logout).
pub async fn clear_authenticated() {
    crate::site::make_cache().remove(SESSION_KEY).await;
}

/// Check a candidate password against the stored one. Falls back to the
/// cached password copy, then the default, when the remote is unreachable.
pub async fn verify_login(candidate: &str) -> bool {
    make_engine().verify(candidate).await
}

/// Change the admin password after re-checking the current one.
pub async fn change_password(
    current: &str,
    new: &str,
    confirm: &str,
) -> Result<(), PasswordChangeError> {
    make_engine().change_password(current, new, confirm).await
}
