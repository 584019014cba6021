//! Dashboard module
//!
//! Provides the restaurant risk overview for a selected city: a pie chart of
//! the risk categories, a warning listing the riskiest restaurants and a table
//! of every restaurant ranked by risk.

mod aggregation;
mod cards;
mod charts;
mod handlers;
mod model;
mod tables;

pub use aggregation::CategoryCount;
pub use handlers::{DashboardState, get_dashboard_data, get_dashboard_page};
pub use model::{CityDashboard, on_city_selected};
