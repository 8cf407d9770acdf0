use serde::Serialize;

use crate::records::{GrayRecord, GRAY_ARITY};

/// Per-attribute min/max over the whole shape-coding data set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AttributeBounds {
    pub min: [f32; GRAY_ARITY],
    pub max: [f32; GRAY_ARITY],
}

impl AttributeBounds {
    /// Sentinel bounds for an empty data set (`min > max` on every attribute).
    pub fn empty() -> Self {
        Self {
            min: [f32::MAX; GRAY_ARITY],
            max: [f32::MIN; GRAY_ARITY],
        }
    }

    pub fn from_records(records: &[GrayRecord]) -> Self {
        let mut bounds = Self::empty();
        for record in records {
            for (attr, &value) in record.attrs.iter().enumerate() {
                if value < bounds.min[attr] {
                    bounds.min[attr] = value;
                }
                if value > bounds.max[attr] {
                    bounds.max[attr] = value;
                }
            }
        }
        bounds
    }

    pub fn is_empty(&self) -> bool {
        self.min.iter().zip(&self.max).any(|(lo, hi)| lo > hi)
    }
}

/// Maps attribute values to 8-bit grey levels against fixed bounds.
#[derive(Debug, Clone, Copy)]
pub struct FeatureNormalizer {
    bounds: AttributeBounds,
}

impl FeatureNormalizer {
    pub fn new(bounds: AttributeBounds) -> Self {
        Self { bounds }
    }

    pub fn from_records(records: &[GrayRecord]) -> Self {
        Self::new(AttributeBounds::from_records(records))
    }

    pub fn bounds(&self) -> &AttributeBounds {
        &self.bounds
    }

    /// Linear scale into `[0, 1]`, clamped, times 255, truncated.
    /// An attribute whose min equals its max always maps to 0.
    ///
    /// # Panics
    /// Panics if `attr >= GRAY_ARITY`.
    pub fn normalize(&self, attr: usize, value: f32) -> u8 {
        let min = self.bounds.min[attr];
        let span = self.bounds.max[attr] - min;
        if span == 0.0 {
            return 0;
        }
        let norm = ((value - min) / span).clamp(0.0, 1.0);
        (norm * 255.0) as u8
    }
}
