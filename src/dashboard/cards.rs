//! Card components that summarise the selected city.
//!
//! Provides:
//! - A badge with the number of restaurants found in the city
//! - A warning card listing the riskiest restaurants

use std::sync::OnceLock;

use maud::{Markup, html};
use numfmt::{Formatter, Precision};

/// Renders "Found N restaurants in CITY".
pub(super) fn restaurant_count_badge(restaurant_count: usize, city: &str) -> Markup {
    let noun = if restaurant_count == 1 {
        "restaurant"
    } else {
        "restaurants"
    };

    html! {
        p id="restaurant-count" class="text-lg text-blue-700 dark:text-blue-400" {
            "Found " b { (format_count(restaurant_count)) } " " (noun) " in " b { (city) }
        }
    }
}

/// Renders a warning card listing `restaurants`, the first `limit` high
/// risk restaurants of a city.
///
/// Returns empty markup when `restaurants` is empty so the warning is
/// only shown for cities with high risk restaurants.
pub(super) fn high_risk_warning(restaurants: &[&str], limit: usize) -> Markup {
    if restaurants.is_empty() {
        return html! {};
    }

    html! {
        div
            id="high-risk-warning"
            role="alert"
            class="w-full p-4 rounded-lg border border-yellow-300 bg-yellow-50
                text-yellow-800 dark:bg-gray-800 dark:text-yellow-300
                dark:border-yellow-800"
        {
            p class="font-bold mb-2" { "🚨 Top " (limit) " High Risk Restaurants:" }

            ul class="list-disc list-inside" {
                @for restaurant in restaurants {
                    li { (restaurant) }
                }
            }
        }
    }
}

fn format_count(count: usize) -> String {
    static FORMATTER: OnceLock<Formatter> = OnceLock::new();

    let formatter = FORMATTER.get_or_init(|| {
        Formatter::new()
            .separator(',')
            .unwrap_or_else(|_| Formatter::new())
            .precision(Precision::Decimals(0))
    });

    formatter.fmt_string(count)
}
