//! The data behind a single render of the dashboard.

use serde::Serialize;

use crate::{
    dashboard::{
        aggregation::{CategoryCount, aggregate_by_category, top_high_risk},
        handlers::DashboardState,
    },
    dataset::CityView,
};

/// Everything needed to render the dashboard for one city.
#[derive(Debug, Serialize)]
pub struct CityDashboard<'a> {
    /// The cities offered in the city selector.
    pub cities: Vec<&'a str>,
    /// The selected city and its restaurants, riskiest first.
    #[serde(flatten)]
    pub view: CityView<'a>,
    /// The number of restaurants in the selected city.
    pub restaurant_count: usize,
    /// Restaurant counts per category for the pie chart.
    pub category_counts: Vec<CategoryCount<'a>>,
    /// Names of the riskiest restaurants for the warning list.
    pub top_high_risk: Vec<&'a str>,
}

/// Recompute the dashboard after the user picks `city`.
///
/// Nothing is cached between calls, the result always reflects `city`.
/// A city with no restaurants produces an empty dashboard.
pub fn on_city_selected<'a>(state: &'a DashboardState, city: &str) -> CityDashboard<'a> {
    let cities = state.dataset.list_cities(state.config.city_limit);
    let view = state.dataset.select_city(city);
    let category_counts = aggregate_by_category(&view);
    let top_high_risk = top_high_risk(&view, state.config.high_risk_limit);

    tracing::debug!(
        "Selected city {city:?} with {} restaurants in {} categories",
        view.len(),
        category_counts.len()
    );

    CityDashboard {
        cities,
        restaurant_count: view.len(),
        view,
        category_counts,
        top_high_risk,
    }
}

#[cfg(test)]
mod tests {
    use crate::{risk::RiskCategory, test_utils::test_dashboard_state};

    use super::on_city_selected;

    #[test]
    fn builds_dashboard_for_city() {
        let state = test_dashboard_state();

        let dashboard = on_city_selected(&state, "Chennai");

        assert_eq!(dashboard.cities, vec!["Kochi", "Chennai", "Mysuru"]);
        assert_eq!(dashboard.view.city, "Chennai");
        assert_eq!(dashboard.restaurant_count, 3);
        assert_eq!(dashboard.top_high_risk, vec!["Marina Dosa", "Besant Tiffin"]);

        let counts: Vec<(&RiskCategory, usize)> = dashboard
            .category_counts
            .iter()
            .map(|count| (count.category, count.count))
            .collect();
        assert_eq!(
            counts,
            vec![(&RiskCategory::High, 2), (&RiskCategory::Medium, 1)]
        );
    }

    #[test]
    fn unknown_city_gives_empty_dashboard() {
        let state = test_dashboard_state();

        let dashboard = on_city_selected(&state, "Atlantis");

        assert_eq!(dashboard.restaurant_count, 0);
        assert!(dashboard.category_counts.is_empty());
        assert!(dashboard.top_high_risk.is_empty());
        assert!(dashboard.view.is_empty());
    }

    #[test]
    fn each_selection_reflects_the_selected_city() {
        let state = test_dashboard_state();

        let first = on_city_selected(&state, "Kochi");
        let second = on_city_selected(&state, "Mysuru");

        assert_eq!(first.restaurant_count, 6);
        assert_eq!(second.restaurant_count, 1);
        assert!(
            second
                .view
                .records
                .iter()
                .all(|record| record.city == "Mysuru")
        );
    }

    #[test]
    fn serializes_as_flat_json() {
        let state = test_dashboard_state();
        let dashboard = on_city_selected(&state, "Mysuru");

        let json = serde_json::to_value(&dashboard).unwrap();

        assert_eq!(json["city"], "Mysuru");
        assert_eq!(json["restaurant_count"], 1);
        assert_eq!(json["records"][0]["restaurant"], "Palace Mess");
        assert_eq!(json["records"][0]["category"], "high risk");
        assert_eq!(json["category_counts"][0]["count"], 1);
    }
}
