use std::sync::Arc;

use rusqlite::Connection;
use tokio::sync::Mutex;

/// Shared application state, injected into all route handlers via Axum state.
///
/// The single connection is the unit of serialization: a handler holds the
/// lock for the whole of its read-check-write sequence.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Mutex<Connection>>,
}

impl AppState {
    pub fn new(conn: Connection) -> Self {
        Self {
            db: Arc::new(Mutex::new(conn)),
        }
    }
}
