use std::sync::Arc;

use crate::db::{DbPool, OrmConn};

/// Shared handles given to every handler.
///
/// The ORM connection sits behind an `Arc`: `DatabaseConnection` is not `Clone` once the
/// sea-orm `mock` feature is enabled.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub orm: Arc<OrmConn>,
}

impl AppState {
    pub fn new(pool: DbPool, orm: OrmConn) -> Self {
        Self {
            pool,
            orm: Arc::new(orm),
        }
    }

    pub fn db(&self) -> &OrmConn {
        &self.orm
    }
}
