//! Settings that control what the dashboard shows.

/// The config for the dashboard views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// The maximum number of cities offered in the city selector.
    pub city_limit: usize,
    /// The maximum number of restaurants listed in the high risk warning.
    pub high_risk_limit: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            city_limit: 5,
            high_risk_limit: 3,
        }
    }
}
