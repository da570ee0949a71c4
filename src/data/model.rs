use std::fmt;

// ---------------------------------------------------------------------------
// Species – the categorical label of a row
// ---------------------------------------------------------------------------

/// Iris species, derived from the integer class code of the source table.
///
/// Ordered by class code so `BTreeSet<Species>` iterates in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Species {
    Setosa,
    Versicolor,
    Virginica,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::Setosa, Species::Versicolor, Species::Virginica];

    /// Static class-code lookup: 0 → setosa, 1 → versicolor, 2 → virginica.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Species::Setosa),
            1 => Some(Species::Versicolor),
            2 => Some(Species::Virginica),
            _ => None,
        }
    }

    pub fn code(self) -> i64 {
        match self {
            Species::Setosa => 0,
            Species::Versicolor => 1,
            Species::Virginica => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Species::Setosa => "setosa",
            Species::Versicolor => "versicolor",
            Species::Virginica => "virginica",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Feature – one of the four numeric columns
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feature {
    SepalLength,
    SepalWidth,
    PetalLength,
    PetalWidth,
}

impl Feature {
    pub const ALL: [Feature; 4] = [
        Feature::SepalLength,
        Feature::SepalWidth,
        Feature::PetalLength,
        Feature::PetalWidth,
    ];

    /// Column header as it appears in the source table.
    pub fn column_name(self) -> &'static str {
        match self {
            Feature::SepalLength => "sepal length (cm)",
            Feature::SepalWidth => "sepal width (cm)",
            Feature::PetalLength => "petal length (cm)",
            Feature::PetalWidth => "petal width (cm)",
        }
    }

    /// Human-readable title used on axes and headings.
    pub fn title(self) -> &'static str {
        match self {
            Feature::SepalLength => "Sepal Length",
            Feature::SepalWidth => "Sepal Width",
            Feature::PetalLength => "Petal Length",
            Feature::PetalWidth => "Petal Width",
        }
    }
}

// ---------------------------------------------------------------------------
// NumericRange – closed interval over a feature
// ---------------------------------------------------------------------------

/// Inclusive `[low, high]` interval.
///
/// Nothing here enforces `low <= high`; an inverted range simply contains
/// no value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericRange {
    pub low: f64,
    pub high: f64,
}

impl NumericRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Closed-interval membership. Any NaN operand yields `false`.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }

    /// Move the lower bound, dragging the upper bound along if it would
    /// otherwise fall below it.
    pub fn with_low(self, low: f64) -> Self {
        Self {
            low,
            high: self.high.max(low),
        }
    }

    /// Move the upper bound, dragging the lower bound along if needed.
    pub fn with_high(self, high: f64) -> Self {
        Self {
            low: self.low.min(high),
            high,
        }
    }
}

impl fmt::Display for NumericRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.1}, {:.1}]", self.low, self.high)
    }
}

// ---------------------------------------------------------------------------
// IrisSample – one row of the table
// ---------------------------------------------------------------------------

/// A single measured flower. Immutable once loaded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IrisSample {
    pub sepal_length: f64,
    pub sepal_width: f64,
    pub petal_length: f64,
    pub petal_width: f64,
    pub species: Species,
}

impl IrisSample {
    pub fn feature(&self, feature: Feature) -> f64 {
        match feature {
            Feature::SepalLength => self.sepal_length,
            Feature::SepalWidth => self.sepal_width,
            Feature::PetalLength => self.petal_length,
            Feature::PetalWidth => self.petal_width,
        }
    }
}

// ---------------------------------------------------------------------------
// IrisDataset – the complete loaded table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct IrisDataset {
    /// All rows in source order.
    pub samples: Vec<IrisSample>,
}

impl IrisDataset {
    pub fn from_samples(samples: Vec<IrisSample>) -> Self {
        IrisDataset { samples }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Observed min/max of a feature column, `None` for an empty table.
    pub fn feature_bounds(&self, feature: Feature) -> Option<NumericRange> {
        if self.is_empty() {
            return None;
        }
        let (low, high) = self
            .samples
            .iter()
            .map(|s| s.feature(feature))
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        Some(NumericRange::new(low, high))
    }

    /// Number of rows carrying the given label.
    pub fn count_species(&self, species: Species) -> usize {
        self.samples.iter().filter(|s| s.species == species).count()
    }
}
