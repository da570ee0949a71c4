use std::io::Read;

use serde::Deserialize;
use thiserror::Error;

use super::model::{IrisDataset, IrisSample, Species};

/// The Iris table, compiled into the binary.
const EMBEDDED_CSV: &str = include_str!("../../assets/iris.csv");

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("malformed dataset table: {0}")]
    Csv(#[from] csv::Error),

    /// `line` is the 1-based line of the table, header included.
    #[error("line {line}: unknown class code {code}")]
    UnknownClass { line: usize, code: i64 },

    #[error("dataset contains no rows")]
    Empty,
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the embedded Iris table.
pub fn load_embedded() -> Result<IrisDataset, DatasetError> {
    parse_csv(EMBEDDED_CSV.as_bytes())
}

/// Expected layout: a header row followed by one row per flower.
///
/// ```text
/// sepal length (cm),sepal width (cm),petal length (cm),petal width (cm),target
/// 5.1,3.5,1.4,0.2,0
/// ```
///
/// `target` is the integer class code, mapped through [`Species::from_code`].
pub fn parse_csv<R: Read>(source: R) -> Result<IrisDataset, DatasetError> {
    let mut reader = csv::Reader::from_reader(source);
    let mut samples = Vec::new();

    for (row, result) in reader.deserialize::<RawRecord>().enumerate() {
        let record = result?;
        let species = Species::from_code(record.target).ok_or(DatasetError::UnknownClass {
            line: row + 2,
            code: record.target,
        })?;

        samples.push(IrisSample {
            sepal_length: record.sepal_length,
            sepal_width: record.sepal_width,
            petal_length: record.petal_length,
            petal_width: record.petal_width,
            species,
        });
    }

    if samples.is_empty() {
        return Err(DatasetError::Empty);
    }
    Ok(IrisDataset::from_samples(samples))
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "sepal length (cm)")]
    sepal_length: f64,
    #[serde(rename = "sepal width (cm)")]
    sepal_width: f64,
    #[serde(rename = "petal length (cm)")]
    petal_length: f64,
    #[serde(rename = "petal width (cm)")]
    petal_width: f64,
    target: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Feature;

    const HEADER: &str =
        "sepal length (cm),sepal width (cm),petal length (cm),petal width (cm),target\n";

    #[test]
    fn embedded_table_has_150_rows_balanced_across_species() {
        let ds = load_embedded().expect("embedded table parses");
        assert_eq!(ds.len(), 150);
        for species in Species::ALL {
            assert_eq!(ds.count_species(species), 50, "{species}");
        }
    }

    #[test]
    fn embedded_table_observed_bounds() {
        let ds = load_embedded().unwrap();
        let sepal = ds.feature_bounds(Feature::SepalLength).unwrap();
        assert_eq!((sepal.low, sepal.high), (4.3, 7.9));
        let petal = ds.feature_bounds(Feature::PetalLength).unwrap();
        assert_eq!((petal.low, petal.high), (1.0, 6.9));
    }

    #[test]
    fn first_row_maps_class_code_to_label() {
        let ds = load_embedded().unwrap();
        let first = ds.samples[0];
        assert_eq!(first.sepal_length, 5.1);
        assert_eq!(first.petal_width, 0.2);
        assert_eq!(first.species, Species::Setosa);
        assert_eq!(ds.samples[149].species, Species::Virginica);
    }

    #[test]
    fn unknown_class_code_reports_file_line() {
        let text = format!("{HEADER}5.1,3.5,1.4,0.2,0\n6.0,3.0,4.0,1.0,7\n");
        match parse_csv(text.as_bytes()) {
            Err(err @ DatasetError::UnknownClass { .. }) => {
                assert_eq!(err.to_string(), "line 3: unknown class code 7");
                assert!(matches!(err, DatasetError::UnknownClass { line: 3, code: 7 }));
            }
            other => panic!("expected UnknownClass, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_cell_is_a_csv_error() {
        let text = format!("{HEADER}5.1,abc,1.4,0.2,0\n");
        assert!(matches!(parse_csv(text.as_bytes()), Err(DatasetError::Csv(_))));
    }

    #[test]
    fn header_only_table_is_empty_error() {
        assert!(matches!(
            parse_csv(HEADER.as_bytes()),
            Err(DatasetError::Empty)
        ));
    }
}
