//! Simulation error types

use std::collections::TryReserveError;

use thiserror::Error;

/// The pellet store could not grow to hold another pellet.
///
/// Pellets already stored are untouched; the caller decides whether to stop
/// inserting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AllocationError {
    #[error("pellet store reservation failed at {len} pellets")]
    Reserve {
        len: usize,
        #[source]
        source: TryReserveError,
    },
    #[error("pellet store limit of {limit} pellets reached")]
    LimitReached { limit: usize },
}
