//! Session errors
//!
//! The rules engine itself never fails; only building and starting a session can.

use std::collections::TryReserveError;

use thiserror::Error;

use crate::types::GameStatus;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Board storage could not be allocated
    #[error("session creation failed: {0}")]
    CreationFailed(#[from] TryReserveError),

    /// `start` was called on a session that already left `NotStarted`
    #[error("session already started (status: {})", .0.as_str())]
    AlreadyStarted(GameStatus),
}
