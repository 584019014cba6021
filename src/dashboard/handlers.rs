//! Dashboard HTTP handlers and view rendering.
//!
//! This module contains:
//! - Route handlers for displaying the dashboard and its JSON data
//! - HTML view functions for rendering the dashboard UI
//! - State and query types used by the handlers

use std::sync::Arc;

use axum::{
    extract::{FromRef, Query, State},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};
use axum_htmx::{HxHistoryRestoreRequest, HxRequest};
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    AppState, Error,
    config::DashboardConfig,
    dashboard::{
        cards::{high_risk_warning, restaurant_count_badge},
        charts::{DashboardChart, chart_view, risk_distribution_chart},
        model::{CityDashboard, on_city_selected},
        tables::risk_ranked_table,
    },
    dataset::Dataset,
    endpoints,
    html::{
        ECHARTS_SCRIPT, FORM_LABEL_STYLE, FORM_SELECT_STYLE, HeadElement, PAGE_CONTAINER_STYLE,
        base,
    },
};

/// The state needed for displaying the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The restaurant risk data, shared read-only between requests.
    pub dataset: Arc<Dataset>,
    /// What the dashboard displays.
    pub config: DashboardConfig,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            dataset: state.dataset.clone(),
            config: state.dashboard_config.clone(),
        }
    }
}

/// The query string for selecting a city.
#[derive(Debug, Default, Deserialize)]
pub struct CityQuery {
    /// The selected city, defaults to the first city in the dataset.
    pub city: Option<String>,
}

impl CityQuery {
    fn into_city(self, dataset: &Dataset) -> String {
        self.city.unwrap_or_else(|| {
            dataset
                .list_cities(1)
                .first()
                .map(|city| city.to_string())
                .unwrap_or_default()
        })
    }
}

/// Display the dashboard for the selected city.
///
/// Requests made by htmx, i.e. when the city selector changes, only receive
/// the dashboard content so it can be swapped into the current page.
/// History restores replace the whole page and get the full page.
pub async fn get_dashboard_page(
    State(state): State<DashboardState>,
    HxRequest(is_htmx_request): HxRequest,
    HxHistoryRestoreRequest(is_history_restore): HxHistoryRestoreRequest,
    Query(query): Query<CityQuery>,
) -> Response {
    let city = query.into_city(&state.dataset);
    let dashboard = on_city_selected(&state, &city);

    if is_htmx_request && !is_history_restore {
        dashboard_content(&dashboard, state.config.high_risk_limit).into_response()
    } else {
        dashboard_view(&dashboard, state.config.high_risk_limit).into_response()
    }
}

/// Get the dashboard data for the selected city as JSON.
pub async fn get_dashboard_data(
    State(state): State<DashboardState>,
    Query(query): Query<CityQuery>,
) -> Result<Response, Error> {
    let city = query.into_city(&state.dataset);
    let dashboard = on_city_selected(&state, &city);

    let json = serde_json::to_string(&dashboard)
        .inspect_err(|error| tracing::error!("could not serialize dashboard for {city}: {error}"))?;

    Ok(([(CONTENT_TYPE, "application/json")], json).into_response())
}

/// Renders the full dashboard page with the header, city selector and footer.
fn dashboard_view(dashboard: &CityDashboard, high_risk_limit: usize) -> Markup {
    let content = html!(
        header class="py-6 text-center text-gray-900 dark:text-white"
        {
            h1 class="text-3xl font-bold" { "🍽 Restaurant Risk Dashboard" }
            p id="team-credit" class="mt-2 text-xl"
            {
                "By " b { "Chiranjith" } " | Team: " b { "LoneWolf" } " | Team No: " b { "A6" }
            }
        }

        hr class="border-gray-300 dark:border-gray-700";

        div class=(PAGE_CONTAINER_STYLE)
        {
            (project_resources())

            (city_selector(dashboard))

            div
                id="dashboard-content"
                class="flex flex-col items-center gap-6 w-full max-w-screen-xl mt-6"
            {
                (dashboard_content(dashboard, high_risk_limit))
            }

            (about_section())
        }

        footer class="py-6 text-center text-sm text-gray-600 dark:text-gray-400"
        {
            hr class="mb-4 border-gray-300 dark:border-gray-700";
            p id="footer-credit"
            {
                "Made for " b { "HACK IT ON'25" } " | SafeBite by LoneWolf (Chiranjith)"
            }
        }
    );

    let scripts = [HeadElement::ScriptLink(ECHARTS_SCRIPT.to_owned())];

    base("Dashboard", &scripts, &content)
}

/// Renders the parts of the dashboard that depend on the selected city.
///
/// The high risk warning is left out when the city has no high risk
/// restaurants. A city without restaurants renders an empty chart and table.
fn dashboard_content(dashboard: &CityDashboard, high_risk_limit: usize) -> Markup {
    let chart = DashboardChart {
        id: "risk-distribution-chart",
        options: risk_distribution_chart(&dashboard.category_counts).to_string(),
    };

    html!(
        h2 id="selected-city" class="text-2xl font-semibold w-full"
        {
            "Showing risk info for " b { (dashboard.view.city) } " 🏙️"
        }

        div class="w-full" { (restaurant_count_badge(dashboard.restaurant_count, &dashboard.view.city)) }

        (chart_view(&chart))

        (high_risk_warning(&dashboard.top_high_risk, high_risk_limit))

        (risk_ranked_table(&dashboard.view))
    )
}

/// Renders the city selector, which reloads the dashboard content on change.
fn city_selector(dashboard: &CityDashboard) -> Markup {
    let dashboard_endpoint = endpoints::DASHBOARD_VIEW;

    html!(
        form
            id="city-form"
            action=(dashboard_endpoint)
            method="get"
            hx-get=(dashboard_endpoint)
            hx-target="#dashboard-content"
            hx-swap="innerHTML"
            hx-trigger="change"
            hx-push-url="true"
            class="w-full max-w-md"
        {
            h2 class="text-xl font-semibold mb-4"
            {
                "Select a city to view ranked restaurant risk:"
            }

            label for="city" class=(FORM_LABEL_STYLE) { "City" }

            select id="city" name="city" class=(FORM_SELECT_STYLE)
            {
                @for city in &dashboard.cities {
                    option value=(city) selected[*city == dashboard.view.city] { (city) }
                }
            }

            noscript
            {
                button type="submit" class="mt-2 underline" { "Show" }
            }
        }
    )
}

const MODEL_NOTEBOOK_URL: &str =
    "https://colab.research.google.com/drive/1doBHSL_tcRLhVpY4rpxTO8gkjMD96LR9?usp=sharing";
const REVIEW_SCRAPER_URL: &str = "https://github.com/Chiranjith18/reviewscraper.git";

/// Links to the model notebook and review scraper that produce the data.
fn project_resources() -> Markup {
    let link_style = "text-blue-700 dark:text-blue-400 underline";

    html!(
        div
            id="project-resources"
            class="w-full max-w-screen-xl mb-6 p-4 rounded-lg bg-blue-50 dark:bg-gray-800"
        {
            p class="font-bold" { "🔗 Project Resources (developed by Chiranjith):" }

            ul
            {
                li
                {
                    "💻 "
                    a href=(MODEL_NOTEBOOK_URL) target="_blank" class=(link_style)
                    {
                        "Colab Model Notebook (Zero-Shot Classification, Chiranjith's Work)"
                    }
                }
                li
                {
                    "🛠️ "
                    a href=(REVIEW_SCRAPER_URL) target="_blank" class=(link_style)
                    {
                        "Review Scraper (Selenium, Java, Chiranjith's Repo)"
                    }
                }
            }
        }
    )
}

fn about_section() -> Markup {
    html!(
        details class="w-full max-w-screen-xl mt-8 p-4 rounded-lg bg-white dark:bg-gray-800"
        {
            summary class="cursor-pointer font-semibold" { "About SafeBite (click to expand)" }

            ul class="mt-2 list-disc list-inside"
            {
                li { "🚦 Predicts restaurant safety risk from Google reviews" }
                li { "Uses Zero-Shot NLP model (Colab, our custom implementation)" }
                li { "Java Selenium-powered review scraping (our repo)" }
                li { "Data-driven 'High', 'Medium', 'Low' categorization" }
                li { "Clean, interactive dashboard for presentation" }
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use axum::{
        extract::{Query, State},
        http::StatusCode,
    };
    use axum_htmx::{HxHistoryRestoreRequest, HxRequest};
    use scraper::{Html, Selector};

    use crate::test_utils::{
        assert_content_type, assert_status_ok, assert_valid_html, parse_html_document,
        parse_html_fragment, select_texts, test_dashboard_state,
    };

    use super::{CityQuery, get_dashboard_data, get_dashboard_page};

    fn city(name: &str) -> Query<CityQuery> {
        Query(CityQuery {
            city: Some(name.to_owned()),
        })
    }

    async fn get_page(query: Query<CityQuery>) -> Html {
        let response = get_dashboard_page(
            State(test_dashboard_state()),
            HxRequest(false),
            HxHistoryRestoreRequest(false),
            query,
        )
        .await;

        assert_status_ok(&response);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        html
    }

    #[track_caller]
    fn assert_exists(html: &Html, selector: &str) {
        let parsed = Selector::parse(selector).unwrap();
        assert!(
            html.select(&parsed).next().is_some(),
            "Element matching '{selector}' not found"
        );
    }

    #[track_caller]
    fn assert_missing(html: &Html, selector: &str) {
        let parsed = Selector::parse(selector).unwrap();
        assert!(
            html.select(&parsed).next().is_none(),
            "Element matching '{selector}' should not exist"
        );
    }

    #[tokio::test]
    async fn dashboard_page_shows_selected_city() {
        let html = get_page(city("Chennai")).await;

        assert_exists(&html, "#risk-distribution-chart");
        assert_eq!(
            select_texts(&html, "#restaurant-count"),
            vec!["Found 3 restaurants in Chennai"]
        );
        assert_eq!(
            select_texts(&html, "#high-risk-warning li"),
            vec!["Marina Dosa", "Besant Tiffin"]
        );
        assert_eq!(
            select_texts(&html, "#risk-table tbody td:nth-child(2)"),
            vec!["High Risk", "High Risk", "Medium Risk"]
        );
    }

    #[tokio::test]
    async fn selector_offers_cities_and_marks_selection() {
        let html = get_page(city("Chennai")).await;

        assert_eq!(
            select_texts(&html, "select[name='city'] option"),
            vec!["Kochi", "Chennai", "Mysuru"]
        );
        assert_eq!(
            select_texts(&html, "select[name='city'] option[selected]"),
            vec!["Chennai"]
        );
    }

    #[tokio::test]
    async fn defaults_to_first_city() {
        let html = get_page(Query(CityQuery::default())).await;

        assert_eq!(
            select_texts(&html, "select[name='city'] option[selected]"),
            vec!["Kochi"]
        );
        assert_eq!(select_texts(&html, "#risk-table tbody tr").len(), 6);
    }

    #[tokio::test]
    async fn city_without_restaurants_renders_empty_dashboard() {
        let html = get_page(city("Atlantis")).await;

        assert_exists(&html, "#risk-distribution-chart");
        assert_exists(&html, "#risk-table");
        assert_missing(&html, "#risk-table tbody tr");
        assert_missing(&html, "#high-risk-warning");
        assert_eq!(
            select_texts(&html, "#restaurant-count"),
            vec!["Found 0 restaurants in Atlantis"]
        );
    }

    #[tokio::test]
    async fn lowercase_high_risk_is_colored_but_not_listed() {
        let html = get_page(city("Mysuru")).await;

        assert_missing(&html, "#high-risk-warning");

        let selector = Selector::parse("#risk-table tbody td:nth-child(2)").unwrap();
        let style = html
            .select(&selector)
            .next()
            .and_then(|cell| cell.value().attr("style"));
        assert_eq!(
            style,
            Some("background-color: #C62828; color: white; font-weight: bold")
        );
    }

    #[tokio::test]
    async fn htmx_request_gets_dashboard_content_only() {
        let response = get_dashboard_page(
            State(test_dashboard_state()),
            HxRequest(true),
            HxHistoryRestoreRequest(false),
            city("Kochi"),
        )
        .await;

        assert_status_ok(&response);
        let html = parse_html_fragment(response).await;
        assert_missing(&html, "#city-form");
        assert_missing(&html, "title");
        assert_eq!(
            select_texts(&html, "#high-risk-warning li"),
            vec!["Spice Route", "Harbour Grill"]
        );
    }

    #[tokio::test]
    async fn history_restore_gets_full_page() {
        let response = get_dashboard_page(
            State(test_dashboard_state()),
            HxRequest(true),
            HxHistoryRestoreRequest(true),
            city("Chennai"),
        )
        .await;

        assert_status_ok(&response);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        assert_exists(&html, "#city-form");
        assert_eq!(
            select_texts(&html, "h1"),
            vec!["🍽 Restaurant Risk Dashboard"]
        );
    }

    #[tokio::test]
    async fn page_credits_project_and_links_resources() {
        let html = get_page(city("Kochi")).await;

        assert_eq!(
            select_texts(&html, "#team-credit"),
            vec!["By Chiranjith | Team: LoneWolf | Team No: A6"]
        );
        assert_eq!(
            select_texts(&html, "#footer-credit"),
            vec!["Made for HACK IT ON'25 | SafeBite by LoneWolf (Chiranjith)"]
        );

        let selector = Selector::parse("#project-resources a").unwrap();
        let links: Vec<&str> = html
            .select(&selector)
            .filter_map(|link| link.value().attr("href"))
            .collect();
        assert_eq!(links, vec![super::MODEL_NOTEBOOK_URL, super::REVIEW_SCRAPER_URL]);
    }

    #[tokio::test]
    async fn dashboard_data_is_json() {
        let response = get_dashboard_data(State(test_dashboard_state()), city("Chennai"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_content_type(&response, "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["city"], "Chennai");
        assert_eq!(json["restaurant_count"], 3);
        assert_eq!(
            json["top_high_risk"],
            serde_json::json!(["Marina Dosa", "Besant Tiffin"])
        );
        assert_eq!(json["category_counts"][0]["category"], "High Risk");
        assert_eq!(json["category_counts"][0]["count"], 2);
    }
}
