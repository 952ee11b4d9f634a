//! Evolution chart data.
//!
//! Scenarios that carry a monthly evolution series are ranked by net value
//! and plotted against a shared month axis taken from the best-ranked one.
//! Every series is aligned to that axis by month offset; months a series
//! does not report become gaps.

pub mod labels;
pub mod palette;
pub mod slot;

use chrono::NaiveDate;
use rendafixa_domain::ScenarioResult;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::ranking::rank;
use labels::axis_labels;
use palette::series_color;

/// Border colour of series points.
pub const POINT_BORDER_COLOR: &str = "#ffffff";
/// Line width, in pixels.
pub const BORDER_WIDTH: u8 = 2;
/// Bezier curve tension.
pub const LINE_TENSION: f64 = 0.15;

/// One plotted series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    /// Scenario name, used in the legend.
    pub label: String,
    /// Net value per axis point; `None` where the scenario has no value.
    pub data: Vec<Option<Decimal>>,
    pub border_color: String,
    pub background_color: String,
    pub point_background_color: String,
    pub point_border_color: String,
    pub border_width: u8,
    pub fill: bool,
    pub tension: f64,
}

/// Category axis plus series, in rank order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    /// `MM/YY` label per axis point.
    pub labels: Vec<String>,
    /// Month offset per axis point.
    #[serde(skip)]
    pub months: Vec<u32>,
    pub datasets: Vec<ChartSeries>,
}

impl ChartData {
    /// Full Chart.js line chart configuration.
    #[must_use]
    pub fn to_line_config(&self) -> Value {
        json!({
            "type": "line",
            "data": self,
            "options": {
                "responsive": true,
                "maintainAspectRatio": true,
                "spanGaps": false,
                "plugins": {
                    "title": { "display": false },
                    "legend": {
                        "display": true,
                        "position": "top",
                        "labels": {
                            "usePointStyle": true,
                            "padding": 15,
                            "font": { "size": 12, "weight": "500" }
                        }
                    },
                    "tooltip": {
                        "mode": "index",
                        "intersect": false,
                        "backgroundColor": "rgba(0, 0, 0, 0.8)",
                        "padding": 10
                    }
                },
                "scales": {
                    "y": {
                        "beginAtZero": false,
                        "grid": { "color": "rgba(0, 0, 0, 0.08)" }
                    },
                    "x": { "grid": { "display": false } }
                },
                "interaction": { "mode": "nearest", "axis": "x", "intersect": false },
                "elements": {
                    "point": { "radius": 3, "hoverRadius": 5, "borderWidth": BORDER_WIDTH },
                    "line": { "borderWidth": BORDER_WIDTH }
                }
            }
        })
    }
}

/// Builds the chart for a result set. Returns `None` when no scenario has
/// evolution data, in which case nothing must be rendered.
#[must_use]
pub fn build_chart(results: &[ScenarioResult], today: NaiveDate) -> Option<ChartData> {
    let qualifying: Vec<ScenarioResult> = results
        .iter()
        .filter(|r| r.evolution().is_some())
        .cloned()
        .collect();
    let ranked = rank(&qualifying);

    let reference = ranked.first()?.scenario.evolution()?;
    let months: Vec<u32> = reference.iter().map(|point| point.month).collect();

    let datasets = ranked
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let scenario = entry.scenario;
            let data: Vec<Option<Decimal>> = months
                .iter()
                .map(|month| scenario.net_value_at(*month))
                .collect();
            let missing = data.iter().filter(|v| v.is_none()).count();
            if missing > 0 {
                warn!(
                    scenario = %scenario.name,
                    missing,
                    "Evolution series does not cover the reference axis"
                );
            }

            let color = series_color(index);
            ChartSeries {
                label: scenario.name.clone(),
                data,
                border_color: color.line.clone(),
                background_color: color.fill,
                point_background_color: color.line,
                point_border_color: POINT_BORDER_COLOR.to_string(),
                border_width: BORDER_WIDTH,
                fill: false,
                tension: LINE_TENSION,
            }
        })
        .collect::<Vec<_>>();

    debug!(series = datasets.len(), points = months.len(), "Built evolution chart");
    Some(ChartData {
        labels: axis_labels(today, &months),
        months,
        datasets,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rendafixa_domain::MonthlyValue;
    use rust_decimal_macros::dec;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    fn scenario(name: &str, net_value: Decimal, months: &[(u32, Decimal)]) -> ScenarioResult {
        ScenarioResult {
            name: name.to_string(),
            total_invested: dec!(1000),
            gross_value: net_value,
            net_value,
            costs: Decimal::ZERO,
            income_tax: Decimal::ZERO,
            net_gain: net_value - dec!(1000),
            gross_yield: Decimal::ZERO,
            net_yield: Decimal::ZERO,
            real_value: None,
            real_gain: None,
            monthly_evolution: (!months.is_empty()).then(|| {
                months
                    .iter()
                    .map(|(month, net_value)| MonthlyValue {
                        month: *month,
                        net_value: *net_value,
                    })
                    .collect()
            }),
        }
    }

    #[test]
    fn test_no_qualifying_scenarios_yields_none() {
        let results = vec![scenario("A", dec!(1100), &[]), scenario("B", dec!(1200), &[])];
        assert!(build_chart(&results, today()).is_none());
        assert!(build_chart(&[], today()).is_none());
    }

    #[test]
    fn test_excludes_scenarios_without_evolution() {
        let results = vec![
            scenario("sem série", dec!(5000), &[]),
            scenario("CDB", dec!(1020), &[(1, dec!(1010)), (2, dec!(1020))]),
        ];
        let chart = build_chart(&results, today()).unwrap();
        assert_eq!(chart.datasets.len(), 1);
        assert_eq!(chart.datasets[0].label, "CDB");
    }

    #[test]
    fn test_series_ranked_and_axis_from_best() {
        let results = vec![
            scenario("Poupança", dec!(1010), &[(1, dec!(1005)), (2, dec!(1010))]),
            scenario("CDB", dec!(1030), &[(1, dec!(1015)), (2, dec!(1030))]),
        ];
        let chart = build_chart(&results, today()).unwrap();
        assert_eq!(chart.labels, ["03/24", "04/24"]);
        assert_eq!(chart.months, [1, 2]);
        assert_eq!(chart.datasets[0].label, "CDB");
        assert_eq!(chart.datasets[0].border_color, "#0033a0");
        assert_eq!(chart.datasets[1].label, "Poupança");
        assert_eq!(chart.datasets[1].border_color, "#dc3545");
        assert_eq!(
            chart.datasets[1].data,
            [Some(dec!(1005)), Some(dec!(1010))]
        );
    }

    #[test]
    fn test_shorter_series_aligned_by_month() {
        let results = vec![
            scenario(
                "Longo",
                dec!(1300),
                &[(1, dec!(1100)), (2, dec!(1200)), (3, dec!(1300))],
            ),
            scenario("Curto", dec!(1050), &[(2, dec!(1050))]),
        ];
        let chart = build_chart(&results, today()).unwrap();
        assert_eq!(chart.datasets[1].data, [None, Some(dec!(1050)), None]);
    }

    #[test]
    fn test_colours_beyond_palette() {
        let results: Vec<_> = (0..12u32)
            .map(|i| {
                let value = Decimal::from(2000 - i);
                scenario(&format!("S{i}"), value, &[(1, value)])
            })
            .collect();
        let chart = build_chart(&results, today()).unwrap();
        assert_eq!(chart.datasets.len(), 12);
        assert_eq!(chart.datasets[10].border_color, "hsl(110, 70%, 45%)");
        assert_eq!(chart.datasets[10].background_color, "hsla(110, 70%, 45%, 0.2)");
    }

    #[test]
    fn test_line_config_shape() {
        let results = vec![scenario("CDB", dec!(1010), &[(1, dec!(1010))])];
        let config = build_chart(&results, today()).unwrap().to_line_config();
        assert_eq!(config["type"], "line");
        assert_eq!(config["data"]["labels"][0], "03/24");
        let dataset = &config["data"]["datasets"][0];
        assert_eq!(dataset["label"], "CDB");
        assert_eq!(dataset["borderColor"], "#0033a0");
        assert_eq!(dataset["backgroundColor"], "#0033a033");
        assert_eq!(dataset["pointBorderColor"], "#ffffff");
        assert_eq!(dataset["fill"], false);
        assert_eq!(dataset["data"][0], 1010.0);
        assert!(config["data"].get("months").is_none());
    }
}
