use std::collections::BTreeSet;

use super::model::{Feature, IrisDataset, IrisSample, NumericRange, Species};

// ---------------------------------------------------------------------------
// Filter criteria: the user's current constraints
// ---------------------------------------------------------------------------

/// Features that carry a range constraint, in sidebar order.
pub const RANGE_FEATURES: [Feature; 2] = [Feature::SepalLength, Feature::PetalLength];

/// Immutable snapshot of the sidebar controls.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    /// Selected labels. Empty means nothing passes.
    pub species: BTreeSet<Species>,
    pub sepal_length: NumericRange,
    pub petal_length: NumericRange,
}

impl FilterCriteria {
    /// Every label selected, every range spanning the observed min/max.
    pub fn unrestricted(dataset: &IrisDataset) -> Self {
        let bounds = |feature| {
            dataset
                .feature_bounds(feature)
                .unwrap_or(NumericRange::new(0.0, 0.0))
        };
        FilterCriteria {
            species: Species::ALL.into_iter().collect(),
            sepal_length: bounds(Feature::SepalLength),
            petal_length: bounds(Feature::PetalLength),
        }
    }

    /// Range constraint for a feature, if that feature is filtered on.
    pub fn range_for(&self, feature: Feature) -> Option<NumericRange> {
        match feature {
            Feature::SepalLength => Some(self.sepal_length),
            Feature::PetalLength => Some(self.petal_length),
            _ => None,
        }
    }

    pub fn range_for_mut(&mut self, feature: Feature) -> Option<&mut NumericRange> {
        match feature {
            Feature::SepalLength => Some(&mut self.sepal_length),
            Feature::PetalLength => Some(&mut self.petal_length),
            _ => None,
        }
    }

    /// The conjunctive row predicate.
    pub fn matches(&self, sample: &IrisSample) -> bool {
        self.species.contains(&sample.species)
            && self.sepal_length.contains(sample.sepal_length)
            && self.petal_length.contains(sample.petal_length)
    }
}

// ---------------------------------------------------------------------------
// Filtered view
// ---------------------------------------------------------------------------

/// Source-order indices of the rows that passed the current criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredView {
    indices: Vec<usize>,
}

impl FilteredView {
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Iterate `(source index, row)` pairs.
    pub fn samples<'a>(
        &'a self,
        dataset: &'a IrisDataset,
    ) -> impl Iterator<Item = (usize, &'a IrisSample)> + 'a {
        self.indices
            .iter()
            .filter_map(move |&idx| dataset.samples.get(idx).map(|s| (idx, s)))
    }
}

/// Return the rows of `dataset` satisfying every criterion, in source order.
///
/// A row passes when:
/// * its label is in the selected set (an empty set rejects every row)
/// * sepal length lies in the closed sepal-length range
/// * petal length lies in the closed petal-length range
///
/// Ranges are not validated; an inverted range rejects every row.
pub fn apply_filter(dataset: &IrisDataset, criteria: &FilterCriteria) -> FilteredView {
    let indices = dataset
        .samples
        .iter()
        .enumerate()
        .filter(|(_, sample)| criteria.matches(sample))
        .map(|(i, _)| i)
        .collect();
    FilteredView { indices }
}
