pub mod loader;

use serde::Serialize;

pub use loader::{
    load_gray_records, load_point_records, parse_gray_records, parse_point_records,
    read_point_records, LoadError,
};

/// Number of grayscale attributes carried by every shape-coding record.
pub const GRAY_ARITY: usize = 6;
/// Number of integer dimensions carried by every spiral record.
pub const POINT_ARITY: usize = 5;

/// One shape-coding record: six scaled grayscale-like attributes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GrayRecord {
    pub attrs: [f32; GRAY_ARITY],
}

/// One spiral record: five integer dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PointRecord {
    pub values: [i32; POINT_ARITY],
}

/// Shared min/max across every value of every loaded point record.
///
/// The attribute sub-views normalise against this single range rather than
/// one range per dimension, so brightness is comparable across sub-views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValueBounds {
    pub min: i32,
    pub max: i32,
}

impl ValueBounds {
    /// Sentinel bounds before any value has been observed (`min > max`).
    pub fn empty() -> Self {
        Self {
            min: i32::MAX,
            max: i32::MIN,
        }
    }

    pub fn include(&mut self, value: i32) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    /// Maps `value` into `[0, 1]`. A zero-width range maps everything to 0.
    pub fn intensity(&self, value: i32) -> f32 {
        let span = self.max as f64 - self.min as f64;
        if span <= 0.0 {
            return 0.0;
        }
        let norm = (value as f64 - self.min as f64) / span;
        (norm as f32).clamp(0.0, 1.0)
    }
}

impl Default for ValueBounds {
    fn default() -> Self {
        Self::empty()
    }
}

/// The loaded spiral data set: records in load order plus their shared bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    pub records: Vec<PointRecord>,
    pub value_bounds: ValueBounds,
}

impl PointSet {
    pub fn from_records(records: Vec<PointRecord>) -> Self {
        let mut value_bounds = ValueBounds::empty();
        for record in &records {
            for &value in &record.values {
                value_bounds.include(value);
            }
        }
        Self {
            records,
            value_bounds,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
