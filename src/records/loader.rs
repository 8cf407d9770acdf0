use anyhow::{Context, Result};
use log::{debug, warn};
use std::error::Error;
use std::fmt;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use super::{GrayRecord, PointRecord, PointSet, GRAY_ARITY, POINT_ARITY};

/// Failure while loading the spiral data set. Reported to the caller, which
/// decides whether to abort; nothing downstream runs on a failed load.
#[derive(Debug)]
pub enum LoadError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Read(std::io::Error),
    Empty,
    BadTokenCount {
        count: usize,
        arity: usize,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => {
                write!(f, "Invalid or empty input file {:?}: {}", path, source)
            }
            LoadError::Read(source) => write!(f, "Unable to read input: {}", source),
            LoadError::Empty => write!(f, "Input file is empty or improperly formatted"),
            LoadError::BadTokenCount { count, arity } => write!(
                f,
                "Input file is empty or improperly formatted: {} values is not a multiple of {}",
                count, arity
            ),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadError::Io { source, .. } | LoadError::Read(source) => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(source: std::io::Error) -> Self {
        LoadError::Read(source)
    }
}

/// Parses shape-coding records from whitespace-separated floats.
///
/// Reading streams six values at a time and stops at the first token that is
/// not a number; a trailing group shorter than six values is dropped. Every
/// value is multiplied by `scale` before it is stored.
pub fn parse_gray_records(text: &str, scale: f32) -> Vec<GrayRecord> {
    let mut values = Vec::new();
    for (position, token) in text.split_whitespace().enumerate() {
        match token.parse::<f32>() {
            Ok(value) => values.push(value * scale),
            Err(_) => {
                warn!(
                    "Stopped reading at token #{} ('{}'): not a number",
                    position, token
                );
                break;
            }
        }
    }

    let dropped = values.len() % GRAY_ARITY;
    if dropped > 0 {
        debug!("Dropping {} trailing value(s) that do not form a full record", dropped);
    }

    values
        .chunks_exact(GRAY_ARITY)
        .map(|chunk| {
            let mut attrs = [0.0; GRAY_ARITY];
            attrs.copy_from_slice(chunk);
            GrayRecord { attrs }
        })
        .collect()
}

pub fn load_gray_records(path: &Path, scale: f32) -> Result<Vec<GrayRecord>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Unable to open file {:?}", path))?;
    let records = parse_gray_records(&text, scale);
    debug!("Loaded {} shape-coding record(s) from {:?}", records.len(), path);
    Ok(records)
}

/// Parses spiral records. Integers are read up to the first token that is
/// not one; the count read must then be a non-zero multiple of five.
pub fn parse_point_records(text: &str) -> Result<PointSet, LoadError> {
    let mut values = Vec::new();
    for (position, token) in text.split_whitespace().enumerate() {
        match token.parse::<i32>() {
            Ok(value) => values.push(value),
            Err(_) => {
                warn!(
                    "Stopped reading at token #{} ('{}'): not an integer",
                    position, token
                );
                break;
            }
        }
    }

    if values.is_empty() {
        return Err(LoadError::Empty);
    }
    if values.len() % POINT_ARITY != 0 {
        return Err(LoadError::BadTokenCount {
            count: values.len(),
            arity: POINT_ARITY,
        });
    }

    let records = values
        .chunks_exact(POINT_ARITY)
        .map(|chunk| {
            let mut point = [0; POINT_ARITY];
            point.copy_from_slice(chunk);
            PointRecord { values: point }
        })
        .collect();
    Ok(PointSet::from_records(records))
}

/// Reads spiral records from any reader, e.g. a pipe on stdin.
pub fn read_point_records<R: Read>(mut reader: R) -> Result<PointSet, LoadError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_point_records(&text)
}

pub fn load_point_records(path: &Path) -> Result<PointSet, LoadError> {
    let file = fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let set = read_point_records(file).map_err(|err| match err {
        LoadError::Read(source) => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;
    debug!(
        "Loaded {} spiral record(s) from {:?}, value range [{}, {}]",
        set.len(),
        path,
        set.value_bounds.min,
        set.value_bounds.max
    );
    Ok(set)
}
