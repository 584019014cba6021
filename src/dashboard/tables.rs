//! Table view of a city's restaurants ranked by risk.

use maud::{Markup, html};

use crate::{
    dataset::CityView,
    html::{TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE},
};

/// Renders the restaurants in `view` with their categories, riskiest first.
///
/// The category cell is coloured with [RiskCategory::table_style], cells for
/// categories without a style are left plain. An empty view renders the
/// table header with no rows.
///
/// [RiskCategory::table_style]: crate::risk::RiskCategory::table_style
pub(super) fn risk_ranked_table(view: &CityView) -> Markup {
    html! {
        div class="w-full" {
            h3 class="text-xl font-semibold mb-4" { "🏆 Risk Ranked Restaurants" }

            div class="overflow-auto max-h-[520px] rounded-lg shadow" {
                table
                    id="risk-table"
                    class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
                {
                    thead class=(TABLE_HEADER_STYLE) {
                        tr {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Restaurant" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                        }
                    }

                    tbody {
                        @for record in &view.records {
                            tr class=(TABLE_ROW_STYLE) {
                                td class=(TABLE_CELL_STYLE) { (record.restaurant) }
                                td
                                    class=(TABLE_CELL_STYLE)
                                    style=[record.category.table_style().map(|style| style.css())]
                                {
                                    (record.category.label())
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
