//! The API endpoints URIs.

/// The root route which redirects to the dashboard.
pub const ROOT: &str = "/";
/// The dashboard page, takes the selected city as the `city` query parameter.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";

/// The dashboard data for a city as JSON, takes the `city` query parameter.
pub const DASHBOARD_API: &str = "/api/dashboard";
