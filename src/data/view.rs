use std::collections::BTreeSet;

use super::filter::FilteredView;
use super::model::{Feature, IrisDataset, IrisSample, Species};
use super::stats::{BinEdges, BoxSummary, box_summary};

// ---------------------------------------------------------------------------
// Derived artifacts
// ---------------------------------------------------------------------------

/// Points of one label in the scatter plot.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub species: Species,
    pub points: Vec<[f64; 2]>,
}

/// Per-label counts over the shared bins of a [`Distribution`].
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesHistogram {
    pub species: Species,
    pub counts: Vec<usize>,
    pub summary: Option<BoxSummary>,
}

/// Histogram of one feature, partitioned by label.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    pub feature: Feature,
    /// `None` when the filtered view is empty.
    pub bins: Option<BinEdges>,
    /// One entry per label present in the view, in label order.
    pub groups: Vec<SpeciesHistogram>,
}

impl Distribution {
    /// Total number of binned rows across every label.
    pub fn total(&self) -> usize {
        self.groups.iter().map(|g| g.counts.iter().sum::<usize>()).sum()
    }
}

/// One line of the raw-data table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableRow {
    /// Position of the row in the full dataset.
    pub index: usize,
    pub sample: IrisSample,
}

/// Everything the dashboard draws for one set of criteria.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub scatter: Vec<ScatterSeries>,
    pub sepal_width: Distribution,
    pub petal_width: Distribution,
    pub table: Vec<TableRow>,
}

impl DashboardView {
    pub const SCATTER_X: Feature = Feature::SepalLength;
    pub const SCATTER_Y: Feature = Feature::PetalLength;

    /// Project a filtered view into the four artifacts.
    pub fn assemble(
        dataset: &IrisDataset,
        view: &FilteredView,
        selected: &BTreeSet<Species>,
        bins: usize,
    ) -> Self {
        DashboardView {
            scatter: scatter_series(dataset, view, selected, Self::SCATTER_X, Self::SCATTER_Y),
            sepal_width: distribution(dataset, view, Feature::SepalWidth, bins),
            petal_width: distribution(dataset, view, Feature::PetalWidth, bins),
            table: table_rows(dataset, view),
        }
    }
}

// ---------------------------------------------------------------------------
// Projections
// ---------------------------------------------------------------------------

/// One series per selected label, empty series included so every selected
/// label keeps its legend entry.
pub fn scatter_series(
    dataset: &IrisDataset,
    view: &FilteredView,
    selected: &BTreeSet<Species>,
    x: Feature,
    y: Feature,
) -> Vec<ScatterSeries> {
    selected
        .iter()
        .map(|&species| ScatterSeries {
            species,
            points: view
                .samples(dataset)
                .filter(|(_, s)| s.species == species)
                .map(|(_, s)| [s.feature(x), s.feature(y)])
                .collect(),
        })
        .collect()
}

/// Bin `feature` over the view with bins shared by all labels.
pub fn distribution(
    dataset: &IrisDataset,
    view: &FilteredView,
    feature: Feature,
    bin_count: usize,
) -> Distribution {
    let all: Vec<f64> = view.samples(dataset).map(|(_, s)| s.feature(feature)).collect();
    let bins = BinEdges::spanning(&all, bin_count);

    let groups = match bins {
        Some(edges) => Species::ALL
            .into_iter()
            .filter_map(|species| {
                let values: Vec<f64> = view
                    .samples(dataset)
                    .filter(|(_, s)| s.species == species)
                    .map(|(_, s)| s.feature(feature))
                    .collect();
                if values.is_empty() {
                    return None;
                }
                Some(SpeciesHistogram {
                    species,
                    counts: edges.histogram(&values),
                    summary: box_summary(&values),
                })
            })
            .collect(),
        None => Vec::new(),
    };

    Distribution {
        feature,
        bins,
        groups,
    }
}

pub fn table_rows(dataset: &IrisDataset, view: &FilteredView) -> Vec<TableRow> {
    view.samples(dataset)
        .map(|(index, sample)| TableRow {
            index,
            sample: *sample,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{FilterCriteria, apply_filter};
    use crate::data::loader::load_embedded;
    use crate::data::model::NumericRange;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn full_view(ds: &IrisDataset) -> (FilterCriteria, FilteredView) {
        let criteria = FilterCriteria::unrestricted(ds);
        let view = apply_filter(ds, &criteria);
        (criteria, view)
    }

    #[test]
    fn scatter_has_one_series_per_selected_label() {
        let ds = load_embedded().unwrap();
        let (criteria, view) = full_view(&ds);
        let dash = DashboardView::assemble(&ds, &view, &criteria.species, 20);

        assert_eq!(dash.scatter.len(), 3);
        for series in &dash.scatter {
            assert_eq!(series.points.len(), 50);
        }
        assert_eq!(dash.scatter[0].points[0], [5.1, 1.4]);
    }

    #[test]
    fn selected_label_with_no_rows_keeps_an_empty_series() {
        let ds = load_embedded().unwrap();
        let mut criteria = FilterCriteria::unrestricted(&ds);
        criteria.petal_length = NumericRange::new(1.0, 2.0);
        let view = apply_filter(&ds, &criteria);

        let series = scatter_series(
            &ds,
            &view,
            &criteria.species,
            Feature::SepalLength,
            Feature::PetalLength,
        );
        assert_eq!(series.len(), 3);
        assert_eq!(series[0].points.len(), 50);
        assert!(series[1].points.is_empty());
        assert!(series[2].points.is_empty());
    }

    #[test]
    fn histograms_count_every_filtered_row_once() {
        let ds = load_embedded().unwrap();
        let (criteria, view) = full_view(&ds);
        let dash = DashboardView::assemble(&ds, &view, &criteria.species, 20);

        for dist in [&dash.sepal_width, &dash.petal_width] {
            let bins = dist.bins.expect("non-empty view has bins");
            assert_eq!(bins.count, 20);
            assert_eq!(dist.total(), 150);
            assert_eq!(dist.groups.len(), 3);
            for group in &dist.groups {
                assert_eq!(group.counts.len(), 20);
                assert_eq!(group.counts.iter().sum::<usize>(), 50);
            }
        }
        let bins = dash.sepal_width.bins.unwrap();
        assert!(approx(bins.start, 2.0));
        assert_eq!(bins.end, 4.4);
    }

    #[test]
    fn box_summaries_match_per_label_quartiles() {
        let ds = load_embedded().unwrap();
        let (_, view) = full_view(&ds);
        let dist = distribution(&ds, &view, Feature::SepalWidth, 20);

        let setosa = dist.groups[0].summary.unwrap();
        assert_eq!(dist.groups[0].species, Species::Setosa);
        assert!(approx(setosa.min, 2.3));
        assert!(approx(setosa.q1, 3.2));
        assert!(approx(setosa.median, 3.4));
        assert!(approx(setosa.q3, 3.675));
        assert!(approx(setosa.max, 4.4));

        let versicolor = dist.groups[1].summary.unwrap();
        assert!(approx(versicolor.q1, 2.525));
        assert!(approx(versicolor.median, 2.8));
    }

    #[test]
    fn histogram_totals_match_filtered_rows_for_length_windows() {
        let ds = load_embedded().unwrap();
        let grid = |lo: f64, hi: f64| {
            let steps = ((hi - lo) * 10.0).round() as usize;
            (0..=steps).map(move |i| lo + i as f64 * 0.1)
        };

        for low in grid(4.3, 7.9) {
            for high in grid(4.3, 7.9).filter(|&h| h >= low) {
                let mut criteria = FilterCriteria::unrestricted(&ds);
                criteria.sepal_length = NumericRange::new(low, high);
                let view = apply_filter(&ds, &criteria);
                let dash = DashboardView::assemble(&ds, &view, &criteria.species, 20);
                assert_eq!(dash.sepal_width.total(), view.len(), "sepal length [{low}, {high}]");
                assert_eq!(dash.petal_width.total(), view.len(), "sepal length [{low}, {high}]");
            }
        }

        for low in grid(1.0, 6.9) {
            for high in grid(1.0, 6.9).filter(|&h| h >= low) {
                let mut criteria = FilterCriteria::unrestricted(&ds);
                criteria.petal_length = NumericRange::new(low, high);
                let view = apply_filter(&ds, &criteria);
                let dash = DashboardView::assemble(&ds, &view, &criteria.species, 20);
                assert_eq!(dash.sepal_width.total(), view.len(), "petal length [{low}, {high}]");
                assert_eq!(dash.petal_width.total(), view.len(), "petal length [{low}, {high}]");
            }
        }
    }

    #[test]
    fn narrow_sepal_window_keeps_every_row_in_histograms() {
        let ds = load_embedded().unwrap();
        let mut criteria = FilterCriteria::unrestricted(&ds);
        criteria.sepal_length = NumericRange::new(4.3, 4.5);
        let view = apply_filter(&ds, &criteria);
        let dash = DashboardView::assemble(&ds, &view, &criteria.species, 20);

        assert_eq!(view.len(), 5);
        assert_eq!(dash.petal_width.total(), 5);
        assert_eq!(dash.sepal_width.total(), 5);
    }

    #[test]
    fn empty_view_degrades_to_empty_artifacts() {
        let ds = load_embedded().unwrap();
        let mut criteria = FilterCriteria::unrestricted(&ds);
        criteria.species.clear();
        let view = apply_filter(&ds, &criteria);
        let dash = DashboardView::assemble(&ds, &view, &criteria.species, 20);

        assert!(dash.scatter.is_empty());
        assert!(dash.sepal_width.bins.is_none());
        assert!(dash.sepal_width.groups.is_empty());
        assert_eq!(dash.petal_width.total(), 0);
        assert!(dash.table.is_empty());
    }

    #[test]
    fn table_keeps_source_indices() {
        let ds = load_embedded().unwrap();
        let mut criteria = FilterCriteria::unrestricted(&ds);
        criteria.species = [Species::Virginica].into_iter().collect();
        let view = apply_filter(&ds, &criteria);
        let rows = table_rows(&ds, &view);

        assert_eq!(rows.len(), 50);
        assert_eq!(rows[0].index, 100);
        assert_eq!(rows[0].sample, ds.samples[100]);
        assert!(rows.windows(2).all(|w| w[0].index < w[1].index));
    }
}
