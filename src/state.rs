// src/state.rs

use std::sync::Arc;

use crate::db::DataAccess;

/// Shared handle to the data access layer.
///
/// Constructed once at process start and injected into the router as
/// axum state; handlers never reach for ambient globals.
pub type Db = Arc<dyn DataAccess>;
