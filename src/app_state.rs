//! Implements a struct that holds the state of the REST server.

use std::sync::Arc;

use crate::{config::DashboardConfig, dataset::Dataset};

/// The state of the REST server.
///
/// Built once at startup and only read afterwards.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The restaurant risk data loaded at startup.
    pub dataset: Arc<Dataset>,

    /// The config that controls what the dashboard displays.
    pub dashboard_config: DashboardConfig,
}

impl AppState {
    /// Create a new [AppState] around a loaded `dataset`.
    pub fn new(dataset: Dataset, dashboard_config: DashboardConfig) -> Self {
        Self {
            dataset: Arc::new(dataset),
            dashboard_config,
        }
    }
}
