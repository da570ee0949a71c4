use crate::color::ColorMap;
use crate::config::DashboardConfig;
use crate::data::filter::{FilterCriteria, FilteredView, apply_filter};
use crate::data::model::{Feature, IrisDataset, NumericRange, Species};
use crate::data::view::DashboardView;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// The loaded table. Never mutated after startup.
    pub dataset: IrisDataset,

    pub config: DashboardConfig,

    /// Current sidebar selections.
    pub criteria: FilterCriteria,

    /// Unrestricted criteria; also the slider bounds.
    pub defaults: FilterCriteria,

    /// Rows passing `criteria`.
    pub view: FilteredView,

    /// Charts and table derived from `view`.
    pub dashboard: DashboardView,

    pub color_map: ColorMap,
}

impl AppState {
    pub fn new(dataset: IrisDataset, config: DashboardConfig) -> Self {
        let defaults = FilterCriteria::unrestricted(&dataset);
        let view = apply_filter(&dataset, &defaults);
        let dashboard =
            DashboardView::assemble(&dataset, &view, &defaults.species, config.histogram_bins);

        Self {
            dataset,
            config,
            criteria: defaults.clone(),
            defaults,
            view,
            dashboard,
            color_map: ColorMap::default(),
        }
    }

    /// Replace the criteria and recompute everything derived from them.
    pub fn apply_criteria(&mut self, criteria: FilterCriteria) {
        self.view = apply_filter(&self.dataset, &criteria);
        self.dashboard = DashboardView::assemble(
            &self.dataset,
            &self.view,
            &criteria.species,
            self.config.histogram_bins,
        );
        log::debug!(
            "Filter {:?} sepal length {} petal length {} → {} of {} rows",
            criteria.species,
            criteria.sepal_length,
            criteria.petal_length,
            self.view.len(),
            self.dataset.len()
        );
        self.criteria = criteria;
    }

    /// Toggle a single label in the selection.
    pub fn toggle_species(&mut self, species: Species) {
        let mut next = self.criteria.clone();
        if !next.species.remove(&species) {
            next.species.insert(species);
        }
        self.apply_criteria(next);
    }

    /// Select every label.
    pub fn select_all(&mut self) {
        let mut next = self.criteria.clone();
        next.species = Species::ALL.into_iter().collect();
        self.apply_criteria(next);
    }

    /// Deselect every label.
    pub fn select_none(&mut self) {
        let mut next = self.criteria.clone();
        next.species.clear();
        self.apply_criteria(next);
    }

    /// Move the lower bound of a feature's range; the upper bound follows if
    /// it would end up below.
    pub fn set_range_low(&mut self, feature: Feature, low: f64) {
        self.update_range(feature, |range| range.with_low(low));
    }

    /// Move the upper bound of a feature's range; the lower bound follows if
    /// it would end up above.
    pub fn set_range_high(&mut self, feature: Feature, high: f64) {
        self.update_range(feature, |range| range.with_high(high));
    }

    /// Observed min/max of a range-filtered feature.
    pub fn range_bounds(&self, feature: Feature) -> Option<NumericRange> {
        self.defaults.range_for(feature)
    }

    /// Restore the unrestricted criteria.
    pub fn reset(&mut self) {
        self.apply_criteria(self.defaults.clone());
    }

    fn update_range(&mut self, feature: Feature, f: impl FnOnce(NumericRange) -> NumericRange) {
        let Some(bounds) = self.range_bounds(feature) else {
            return;
        };
        let mut next = self.criteria.clone();
        if let Some(range) = next.range_for_mut(feature) {
            let updated = f(*range);
            *range = NumericRange::new(
                updated.low.clamp(bounds.low, bounds.high),
                updated.high.clamp(bounds.low, bounds.high),
            );
        }
        self.apply_criteria(next);
    }
}
