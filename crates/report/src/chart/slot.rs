//! Single chart slot.
//!
//! At most one chart is live at a time. Showing a new chart releases the
//! previous one first, and dropping the slot releases whatever is still
//! shown.

use chrono::NaiveDate;
use rendafixa_domain::ScenarioResult;
use tracing::{debug, warn};

use super::{ChartData, build_chart};
use crate::error::ChartError;

/// Surface a chart is rendered onto.
pub trait ChartTarget {
    /// Handle to a rendered chart, released exactly once.
    type Handle;

    /// Renders `chart` and returns a handle to it.
    fn render(&mut self, chart: &ChartData) -> Result<Self::Handle, ChartError>;

    /// Releases a chart previously returned by [`ChartTarget::render`].
    fn release(&mut self, handle: Self::Handle);
}

/// Owner of the single live chart on a target.
pub struct ChartSlot<T: ChartTarget> {
    target: T,
    current: Option<T::Handle>,
}

impl<T: ChartTarget> ChartSlot<T> {
    pub fn new(target: T) -> Self {
        Self {
            target,
            current: None,
        }
    }

    /// Adopts a chart left behind by an earlier run, so the next update
    /// replaces it.
    pub fn with_existing(target: T, handle: T::Handle) -> Self {
        Self {
            target,
            current: Some(handle),
        }
    }

    /// Whether a chart is currently shown.
    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    /// Replaces the current chart with `chart`.
    ///
    /// The previous chart is released before rendering. If rendering fails
    /// the slot is left empty.
    pub fn show(&mut self, chart: &ChartData) -> Result<(), ChartError> {
        self.clear();
        let handle = self.target.render(chart)?;
        self.current = Some(handle);
        debug!(series = chart.datasets.len(), "Chart shown");
        Ok(())
    }

    /// Releases the current chart, if any.
    pub fn clear(&mut self) {
        if let Some(handle) = self.current.take() {
            self.target.release(handle);
            debug!("Chart released");
        }
    }

    /// Shows the evolution chart for `results`, or hides the slot when no
    /// result has evolution data. Returns whether a chart is shown.
    pub fn update(
        &mut self,
        results: &[ScenarioResult],
        today: NaiveDate,
    ) -> Result<bool, ChartError> {
        match build_chart(results, today) {
            Some(chart) => {
                self.show(&chart)?;
                Ok(true)
            }
            None => {
                self.clear();
                Ok(false)
            }
        }
    }

    /// Gives up ownership of the current chart without releasing it.
    pub fn detach(mut self) -> Option<T::Handle> {
        self.current.take()
    }

    pub fn target(&self) -> &T {
        &self.target
    }
}

impl<T: ChartTarget> Drop for ChartSlot<T> {
    fn drop(&mut self) {
        if self.current.is_some() {
            warn!("Chart slot dropped with a live chart, releasing it");
            self.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rendafixa_domain::MonthlyValue;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::cell::RefCell;
    use std::collections::BTreeSet;
    use std::rc::Rc;

    #[derive(Default)]
    struct Ledger {
        next: u32,
        live: BTreeSet<u32>,
        released: Vec<u32>,
    }

    #[derive(Clone, Default)]
    struct RecordingTarget {
        ledger: Rc<RefCell<Ledger>>,
        fail: bool,
    }

    impl RecordingTarget {
        fn live(&self) -> usize {
            self.ledger.borrow().live.len()
        }
    }

    impl ChartTarget for RecordingTarget {
        type Handle = u32;

        fn render(&mut self, _chart: &ChartData) -> Result<u32, ChartError> {
            if self.fail {
                return Err(ChartError::Io(std::io::Error::other("render failed")));
            }
            let mut ledger = self.ledger.borrow_mut();
            ledger.next += 1;
            let id = ledger.next;
            ledger.live.insert(id);
            Ok(id)
        }

        fn release(&mut self, handle: u32) {
            let mut ledger = self.ledger.borrow_mut();
            assert!(ledger.live.remove(&handle), "released twice: {handle}");
            ledger.released.push(handle);
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn with_evolution(name: &str, value: Decimal) -> ScenarioResult {
        ScenarioResult {
            name: name.to_string(),
            total_invested: dec!(1000),
            gross_value: value,
            net_value: value,
            costs: Decimal::ZERO,
            income_tax: Decimal::ZERO,
            net_gain: value - dec!(1000),
            gross_yield: Decimal::ZERO,
            net_yield: Decimal::ZERO,
            real_value: None,
            real_gain: None,
            monthly_evolution: Some(vec![MonthlyValue {
                month: 1,
                net_value: value,
            }]),
        }
    }

    #[test]
    fn test_consecutive_updates_keep_one_chart() {
        let target = RecordingTarget::default();
        let mut slot = ChartSlot::new(target.clone());

        for _ in 0..3 {
            assert!(slot.update(&[with_evolution("CDB", dec!(1100))], today()).unwrap());
            assert_eq!(target.live(), 1);
        }
        assert_eq!(target.ledger.borrow().released, [1, 2]);
    }

    #[test]
    fn test_update_without_evolution_hides_chart() {
        let target = RecordingTarget::default();
        let mut slot = ChartSlot::new(target.clone());
        slot.update(&[with_evolution("CDB", dec!(1100))], today()).unwrap();

        let mut bare = with_evolution("LCI", dec!(1050));
        bare.monthly_evolution = None;
        assert!(!slot.update(&[bare], today()).unwrap());
        assert!(!slot.is_visible());
        assert_eq!(target.live(), 0);
    }

    #[test]
    fn test_failed_render_leaves_slot_empty() {
        let target = RecordingTarget::default();
        let mut slot = ChartSlot::new(target.clone());
        slot.update(&[with_evolution("CDB", dec!(1100))], today()).unwrap();

        slot.target.fail = true;
        assert!(slot.update(&[with_evolution("CDB", dec!(1200))], today()).is_err());
        assert!(!slot.is_visible());
        assert_eq!(target.live(), 0);
    }

    #[test]
    fn test_drop_releases_live_chart() {
        let target = RecordingTarget::default();
        {
            let mut slot = ChartSlot::new(target.clone());
            slot.update(&[with_evolution("CDB", dec!(1100))], today()).unwrap();
            assert_eq!(target.live(), 1);
        }
        assert_eq!(target.live(), 0);
    }

    #[test]
    fn test_detach_keeps_chart() {
        let target = RecordingTarget::default();
        let mut slot = ChartSlot::new(target.clone());
        slot.update(&[with_evolution("CDB", dec!(1100))], today()).unwrap();

        assert_eq!(slot.detach(), Some(1));
        assert_eq!(target.live(), 1);
    }

    #[test]
    fn test_existing_chart_replaced() {
        let target = RecordingTarget::default();
        target.ledger.borrow_mut().live.insert(0);

        let mut slot = ChartSlot::with_existing(target.clone(), 0);
        assert!(slot.is_visible());
        slot.update(&[with_evolution("CDB", dec!(1100))], today()).unwrap();
        assert_eq!(target.ledger.borrow().released, [0]);
        assert_eq!(target.live(), 1);
    }
}
