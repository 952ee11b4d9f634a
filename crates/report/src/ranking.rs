//! Ranking of scenarios by net value.
//!
//! The ranked list drives the bar-style summary: each entry carries its net
//! value relative to the best scenario.

use rendafixa_domain::ScenarioResult;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::debug;

const BAR_FILLED: char = '█';
const BAR_EMPTY: char = '░';

/// A scenario together with its position in the summary.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedScenario<'a> {
    /// The underlying result.
    pub scenario: &'a ScenarioResult,
    /// `net_value / max(net_value)`, clamped to `[0, 1]`.
    pub fill_ratio: Decimal,
}

impl RankedScenario<'_> {
    /// Renders the fill ratio as a text bar of `width` cells.
    #[must_use]
    pub fn bar(&self, width: usize) -> String {
        let filled = (self.fill_ratio * Decimal::from(width))
            .round()
            .to_usize()
            .unwrap_or(0)
            .min(width);
        let mut bar = String::with_capacity(width * BAR_FILLED.len_utf8());
        bar.extend(std::iter::repeat_n(BAR_FILLED, filled));
        bar.extend(std::iter::repeat_n(BAR_EMPTY, width - filled));
        bar
    }
}

/// Ranked summary of one simulation response.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary<'a> {
    /// Scenarios in descending net value order.
    pub entries: Vec<RankedScenario<'a>>,
    /// Amount invested, taken from the best scenario; zero when empty.
    pub total_invested: Decimal,
}

impl Summary<'_> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Sorts scenarios by net value, highest first. Ties keep their input order.
#[must_use]
pub fn rank(results: &[ScenarioResult]) -> Vec<RankedScenario<'_>> {
    let mut ordered: Vec<&ScenarioResult> = results.iter().collect();
    ordered.sort_by(|a, b| b.net_value.cmp(&a.net_value));

    let max = ordered.first().map_or(Decimal::ZERO, |s| s.net_value);

    ordered
        .into_iter()
        .map(|scenario| RankedScenario {
            scenario,
            fill_ratio: fill_ratio(scenario.net_value, max),
        })
        .collect()
}

/// Builds the summary shown after a simulation.
#[must_use]
pub fn summarize(results: &[ScenarioResult]) -> Summary<'_> {
    let entries = rank(results);
    let total_invested = entries
        .first()
        .map_or(Decimal::ZERO, |top| top.scenario.total_invested);
    debug!(scenarios = entries.len(), %total_invested, "Built result summary");
    Summary {
        entries,
        total_invested,
    }
}

fn fill_ratio(value: Decimal, max: Decimal) -> Decimal {
    if max <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    (value / max).clamp(Decimal::ZERO, Decimal::ONE)
}
