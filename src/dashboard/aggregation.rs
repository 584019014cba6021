//! Summaries of a city's restaurants for the chart and warning list.

use serde::Serialize;

use crate::{dataset::CityView, risk::RiskCategory};

/// The number of restaurants in a city with a given category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount<'a> {
    /// The category being counted.
    pub category: &'a RiskCategory,
    /// The number of restaurants with `category`.
    pub count: usize,
}

/// Counts the restaurants in `view` per category.
///
/// # Returns
/// One count per distinct category, in the order each category first
/// appears in `view`. The counts sum to the length of `view`.
pub(super) fn aggregate_by_category<'a>(view: &CityView<'a>) -> Vec<CategoryCount<'a>> {
    let mut counts: Vec<CategoryCount<'a>> = Vec::new();

    for &record in &view.records {
        match counts
            .iter_mut()
            .find(|count| count.category == &record.category)
        {
            Some(count) => count.count += 1,
            None => counts.push(CategoryCount {
                category: &record.category,
                count: 1,
            }),
        }
    }

    counts
}

/// Gets the names of the first `limit` high risk restaurants in `view`.
///
/// Only restaurants classified exactly as "High Risk" are included.
pub(super) fn top_high_risk<'a>(view: &CityView<'a>, limit: usize) -> Vec<&'a str> {
    view.records
        .iter()
        .copied()
        .filter(|record| record.category == RiskCategory::High)
        .take(limit)
        .map(|record| record.restaurant.as_str())
        .collect()
}
