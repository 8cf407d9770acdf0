use serde::Serialize;

use super::query::Query;
use crate::records::PointRecord;

/// A record paired with its relevance score against the query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredRecord {
    pub score: f32,
    pub record: PointRecord,
}

/// Global min/max of the relevance score over the whole scored batch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBounds {
    pub min: f32,
    pub max: f32,
}

impl ScoreBounds {
    pub fn empty() -> Self {
        Self {
            min: f32::MAX,
            max: f32::MIN,
        }
    }

    pub fn include(&mut self, score: f32) {
        self.min = self.min.min(score);
        self.max = self.max.max(score);
    }

    /// Brightness for a score: the closest record is brightest.
    /// With a zero-width range every record is fully bright.
    pub fn intensity(&self, score: f32) -> f32 {
        let span = self.max - self.min;
        let norm = if span > 0.0 {
            (score - self.min) / span
        } else {
            0.0
        };
        (1.0 - norm).clamp(0.0, 1.0)
    }
}

impl Default for ScoreBounds {
    fn default() -> Self {
        Self::empty()
    }
}

/// `ln(1 + sum of squared differences)`; an exact match scores 0.
pub fn score(record: &PointRecord, query: &Query) -> f32 {
    let sum = record
        .values
        .iter()
        .zip(&query.values)
        .fold(0.0f32, |acc, (&a, &b)| {
            let diff = (a as i64 - b as i64) as f32;
            acc + diff * diff
        });
    (sum + 1.0).ln()
}

/// Scores every record once, keeping load order, and tracks the score range.
pub fn score_all(records: &[PointRecord], query: &Query) -> (Vec<ScoredRecord>, ScoreBounds) {
    let mut bounds = ScoreBounds::empty();
    let scored = records
        .iter()
        .map(|record| {
            let relevance = score(record, query);
            bounds.include(relevance);
            ScoredRecord {
                score: relevance,
                record: *record,
            }
        })
        .collect();
    (scored, bounds)
}
