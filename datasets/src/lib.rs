//! `arbor-datasets` reads training tables for ternary decision trees and bundles sample data for
//! tests and benchmarks.
//!
//! ## The table format
//!
//! A table is plain text with whitespace separated columns. The first non-blank line names the
//! attributes and ends with a header for the class column. The last header column is always the
//! class column, whatever it is called. Every further non-blank line holds one value in
//! `{0, 1, 2}` per attribute followed by the integer class label:
//!
//! ```text
//! outlook temperature humidity wind class
//! 0 0 0 0 0
//! 1 0 0 0 1
//! ```
//!
//! ## Current State
//!
//! Currently the following datasets are provided:
//!
//! * `["tennis"]` : the play-tennis weather table
//!
//! To use one of them add the crate with the corresponding feature enabled:
//! ```ignore
//! arbor-datasets = { version = "0.1.0", features = ["tennis"] }
//! ```

mod dataset;

pub use dataset::{from_path, read_table, ReadError, Result};

#[cfg(feature = "tennis")]
use arbor::TrainingStore;

#[cfg(feature = "tennis")]
/// Read in the play-tennis dataset
///
/// 14 days of weather with the decision whether tennis was played. Attributes are encoded as
/// * outlook: sunny `0`, overcast `1`, rain `2`
/// * temperature: hot `0`, mild `1`, cool `2`
/// * humidity: high `0`, normal `1`
/// * wind: weak `0`, strong `1`
///
/// and the label is `1` if tennis was played.
pub fn tennis() -> TrainingStore {
    let data = include_str!("../data/tennis.txt");

    read_table(data.as_bytes()).unwrap()
}

#[cfg(test)]
mod tests {
    #[cfg(feature = "tennis")]
    #[test]
    fn test_tennis() {
        let store = super::tennis();

        // check that we have the right amount of data
        assert_eq!(store.nsamples(), 14);
        assert_eq!(store.nfeatures(), 4);
        assert_eq!(store.n_labels(), 2);

        // check for feature names
        assert_eq!(
            store.feature_names(),
            vec!["outlook", "temperature", "humidity", "wind"]
        );

        // nine days with tennis, five without
        assert_eq!(store.label_counts(0..14).unwrap().to_vec(), vec![5, 9]);
    }
}
