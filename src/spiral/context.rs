use anyhow::Result;
use log::debug;

use super::layout::SpiralParams;
use super::query::Query;
use super::scorer::{score_all, ScoreBounds, ScoredRecord};
use super::sorter::sort_by_score;
use super::views::{layout_sub_views, SubViewFrame};
use crate::records::{PointSet, ValueBounds};
use crate::render::{Frame, Renderer};

/// Application state for the spiral view, built once at startup and only
/// read afterwards (apart from the window size, which follows resizes).
#[derive(Debug, Clone)]
pub struct SpiralContext {
    query: Query,
    sorted: Vec<ScoredRecord>,
    scores: ScoreBounds,
    values: ValueBounds,
    params: SpiralParams,
    window: (u32, u32),
}

impl SpiralContext {
    /// Scores every record against `query` and sorts by relevance.
    pub fn new(set: PointSet, query: Query, params: SpiralParams, window: (u32, u32)) -> Self {
        let (scored, scores) = score_all(&set.records, &query);
        let sorted = sort_by_score(scored);
        debug!(
            "Scored {} record(s), relevance range [{}, {}]",
            sorted.len(),
            scores.min,
            scores.max
        );
        Self {
            query,
            sorted,
            scores,
            values: set.value_bounds,
            params,
            window,
        }
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn sorted(&self) -> &[ScoredRecord] {
        &self.sorted
    }

    pub fn score_bounds(&self) -> &ScoreBounds {
        &self.scores
    }

    pub fn value_bounds(&self) -> &ValueBounds {
        &self.values
    }

    pub fn window(&self) -> (u32, u32) {
        self.window
    }

    /// Sub-view layout for the current window, computed from scratch.
    pub fn frames(&self) -> Vec<SubViewFrame> {
        layout_sub_views(
            &self.sorted,
            &self.scores,
            &self.values,
            self.window,
            &self.params,
        )
    }

    pub fn resize<R: Renderer + ?Sized>(&mut self, width: u32, height: u32, renderer: &mut R) {
        self.window = (width, height);
        renderer.on_resize(width, height);
    }

    pub fn redraw<R: Renderer + ?Sized>(&self, renderer: &mut R) -> Result<()> {
        let frames = self.frames();
        renderer.on_redraw(&Frame::Points(&frames))
    }
}
