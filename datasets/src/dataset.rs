use std::convert::TryFrom;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use arbor::TrainingStore;
use ndarray::{Array1, Array2};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReadError>;

/// Errors raised while reading a training table
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("could not read table: {0}")]
    Io(#[from] io::Error),
    #[error("table has no header line")]
    MissingHeader,
    #[error("line {line}: `{token}` is not an unsigned integer")]
    Parse { line: usize, token: String },
    #[error("line {line}: expected {expected} values, found {found}")]
    RowLength {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error(transparent)]
    Dataset(#[from] arbor::Error),
}

fn parse_token(token: &str, line: usize) -> Result<usize> {
    token.parse().map_err(|_| ReadError::Parse {
        line,
        token: token.to_string(),
    })
}

/// Read a whitespace separated training table
///
/// The first non-blank line names the attributes, followed by a header for the class column.
/// The last header column is always taken as the class column and dropped, whatever its name,
/// so a header with a single column describes a table without attributes. Every further
/// non-blank line holds one value per attribute and the class label. Blank lines are skipped
/// anywhere.
pub fn read_table<R: BufRead>(reader: R) -> Result<TrainingStore> {
    let mut feature_names: Vec<String> = Vec::new();
    let mut header = false;
    let mut records = Vec::new();
    let mut targets = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let tokens = line.split_whitespace().collect::<Vec<_>>();
        if tokens.is_empty() {
            continue;
        }

        // the last header column names the class
        if !header {
            feature_names = tokens[..tokens.len() - 1]
                .iter()
                .map(|name| name.to_string())
                .collect();
            header = true;
            continue;
        }

        let n_attributes = feature_names.len();
        if tokens.len() != n_attributes + 1 {
            return Err(ReadError::RowLength {
                line: idx + 1,
                expected: n_attributes + 1,
                found: tokens.len(),
            });
        }

        for token in &tokens[..n_attributes] {
            // values past `u8` are rejected by the store like any other value outside {0, 1, 2}
            let value = parse_token(token, idx + 1)?;
            records.push(u8::try_from(value).unwrap_or(u8::MAX));
        }
        targets.push(parse_token(tokens[n_attributes], idx + 1)?);
    }

    if !header {
        return Err(ReadError::MissingHeader);
    }

    let records = Array2::from_shape_vec((targets.len(), feature_names.len()), records)
        .map_err(arbor::Error::from)?;

    let store =
        TrainingStore::new(records, Array1::from(targets))?.with_feature_names(feature_names)?;

    Ok(store)
}

/// Read a training table from a file
pub fn from_path<P: AsRef<Path>>(path: P) -> Result<TrainingStore> {
    let file = File::open(path)?;

    read_table(BufReader::new(file))
}
