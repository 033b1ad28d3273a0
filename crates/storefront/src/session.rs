//! Current-user session access.
//!
//! The auth flow that writes the current-user record is out of scope;
//! this module reads it for display/authorization checks and clears it on
//! sign-out.

use tracing::info;

use crate::models::CurrentUser;
use crate::storage::{KeyValueStore, StorageError, keys};

/// The signed-in user, if a session record exists.
///
/// # Errors
///
/// Returns `StorageError` on read failure or a corrupt stored record.
pub fn current_user<S: KeyValueStore>(store: &S) -> Result<Option<CurrentUser>, StorageError> {
    store.get(keys::CURRENT_USER)
}

/// Remove the session record. Signing out without a session is a no-op.
///
/// # Errors
///
/// Returns `StorageError` on write failure.
pub fn sign_out<S: KeyValueStore>(store: &S) -> Result<(), StorageError> {
    info!("Clearing current user session");
    store.remove(keys::CURRENT_USER)
}
