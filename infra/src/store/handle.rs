//! Store handle handed out by the session
//!
//! Repositories never talk to the pool directly; they go through a
//! `StoreHandle` acquired from the session, which is either a live MySQL
//! pool or the degraded fallback selected when connection retries were
//! exhausted outside production.

use sqlx::MySqlPool;

/// Handle to the durable store.
///
/// The degraded variant carries no pool. Repositories that receive it
/// short-circuit: reads yield empty results and writes report success
/// without persisting anything.
#[derive(Clone)]
pub enum StoreHandle {
    /// Live MySQL connection pool
    Mysql(MySqlPool),
    /// Non-production fallback when the store is unreachable
    Degraded,
}

impl StoreHandle {
    /// Get the underlying pool, or `None` when degraded
    pub fn pool(&self) -> Option<&MySqlPool> {
        match self {
            StoreHandle::Mysql(pool) => Some(pool),
            StoreHandle::Degraded => None,
        }
    }

    /// Whether this handle is the degraded fallback
    pub fn is_degraded(&self) -> bool {
        matches!(self, StoreHandle::Degraded)
    }
}

impl std::fmt::Debug for StoreHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreHandle::Mysql(_) => write!(f, "StoreHandle::Mysql"),
            StoreHandle::Degraded => write!(f, "StoreHandle::Degraded"),
        }
    }
}
