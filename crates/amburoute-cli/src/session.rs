//! Driver login state kept in the [`LocalStore`].
//!
//! A record that exists but cannot be decoded is treated as "not logged in"
//! so a damaged file never blocks the console.

use amburoute_core::{CoreError, DriverSession};
use thiserror::Error;

use crate::store::{LocalStore, StoreError};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Invalid(#[from] CoreError),

    #[error("failed to persist driver session: {0}")]
    Store(#[from] StoreError),
}

/// Validates the three fields and persists them as the active driver,
/// replacing any previous session.
///
/// # Errors
///
/// [`SessionError::Invalid`] when a field is blank; nothing is written.
/// [`SessionError::Store`] when the record cannot be saved.
pub(crate) fn login(
    store: &LocalStore,
    name: &str,
    phone: &str,
    ambulance_no: &str,
) -> Result<DriverSession, SessionError> {
    let session = DriverSession::new(name, phone, ambulance_no)?;
    store.set(DriverSession::STORAGE_KEY, &session)?;
    tracing::info!(ambulance_no = %session.ambulance_no, "driver logged in");
    Ok(session)
}

/// Active driver, if any.
///
/// # Errors
///
/// Only I/O failures propagate; a corrupt record logs a warning and yields
/// `Ok(None)`.
pub(crate) fn current_driver(store: &LocalStore) -> Result<Option<DriverSession>, StoreError> {
    match store.get::<DriverSession>(DriverSession::STORAGE_KEY) {
        Ok(session) => Ok(session),
        Err(StoreError::Corrupt { path, source }) => {
            tracing::warn!(
                path = %path.display(),
                error = %source,
                "ignoring unreadable driver session"
            );
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Clears the driver session. Returns whether one was present.
pub(crate) fn logout(store: &LocalStore) -> Result<bool, StoreError> {
    let removed = store.remove(DriverSession::STORAGE_KEY)?;
    if removed {
        tracing::info!("driver logged out");
    }
    Ok(removed)
}
