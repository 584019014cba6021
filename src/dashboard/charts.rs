//! Chart generation and rendering for the dashboard.
//!
//! The risk distribution is drawn as an ECharts pie chart. The chart options
//! are generated as JSON and initialised by an inline script placed next to
//! the chart container, so the chart also renders when htmx swaps the
//! dashboard content.

use charming::{
    Chart,
    component::{Legend, Title},
    element::{Color, Tooltip, Trigger},
    series::Pie,
};
use maud::{Markup, PreEscaped, html};

use crate::dashboard::aggregation::CategoryCount;

/// The colour for categories without a fixed colour.
const UNCATEGORISED_COLOR: &str = "#9E9E9E";

/// A dashboard chart with its HTML container ID and ECharts configuration.
pub(super) struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Renders a chart container and the script that initialises it.
pub(super) fn chart_view(chart: &DashboardChart) -> Markup {
    // Labels come from the data file and must not be able to close the script tag.
    let options = chart.options.replace("</", "<\\/");
    let script = format!(
        r#"(function() {{
            const chartDom = document.getElementById("{}");
            // htmx swaps re-run this script, so drop the chart and listeners it replaces.
            window.safebiteChartCleanup?.();
            echarts.getInstanceByDom(chartDom)?.dispose();

            const chart = echarts.init(chartDom);
            const option = {};
            chart.setOption(option);

            const resize = () => chart.resize();
            window.addEventListener('resize', resize);

            const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
            const updateTheme = () => {{
                const isDarkMode = darkModeMediaQuery.matches;
                chart.setTheme(isDarkMode ? 'dark' : 'default');
            }}
            darkModeMediaQuery.addEventListener('change', updateTheme);
            updateTheme();

            window.safebiteChartCleanup = () => {{
                window.removeEventListener('resize', resize);
                darkModeMediaQuery.removeEventListener('change', updateTheme);
                chart.dispose();
            }};
        }})();"#,
        chart.id, options
    );

    html!(
        div
            id=(chart.id)
            class="min-h-[380px] w-full rounded dark:bg-gray-100"
        {}

        script { (PreEscaped(script)) }
    )
}

/// Builds the risk distribution pie chart.
///
/// Each category gets one slice, in the order of `counts`. High, medium and
/// low risk use red, orange and green, other categories are grey.
pub(super) fn risk_distribution_chart(counts: &[CategoryCount]) -> Chart {
    let colors: Vec<Color> = counts
        .iter()
        .map(|count| {
            count
                .category
                .pie_color()
                .unwrap_or(UNCATEGORISED_COLOR)
                .into()
        })
        .collect();

    let data: Vec<(f64, &str)> = counts
        .iter()
        .map(|count| (count.count as f64, count.category.label()))
        .collect();

    Chart::new()
        .title(Title::new().text("Risk Distribution"))
        .tooltip(Tooltip::new().trigger(Trigger::Item))
        .legend(Legend::new().bottom("0%"))
        .color(colors)
        .series(
            Pie::new()
                .name("Category")
                .radius("65%")
                .data(data),
        )
}
