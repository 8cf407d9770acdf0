use serde::Serialize;

use super::layout::{SpiralCursor, SpiralParams};
use super::scorer::{ScoreBounds, ScoredRecord};
use crate::records::{ValueBounds, POINT_ARITY};

/// Sub-views per window: relevance plus one per dimension.
pub const SUB_VIEW_COUNT: usize = POINT_ARITY + 1;
pub const SUB_VIEW_COLUMNS: u32 = 3;
pub const SUB_VIEW_ROWS: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SubViewKind {
    Relevance,
    Dimension(usize),
}

impl SubViewKind {
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(SubViewKind::Relevance),
            i if i < SUB_VIEW_COUNT => Some(SubViewKind::Dimension(i - 1)),
            _ => None,
        }
    }

    pub fn all() -> impl Iterator<Item = SubViewKind> {
        (0..SUB_VIEW_COUNT).filter_map(Self::from_index)
    }

    /// Grey level in `[0, 1]` this sub-view gives a record.
    pub fn intensity(
        &self,
        item: &ScoredRecord,
        scores: &ScoreBounds,
        values: &ValueBounds,
    ) -> f32 {
        match *self {
            SubViewKind::Relevance => scores.intensity(item.score),
            SubViewKind::Dimension(dim) => values.intensity(item.record.values[dim]),
        }
    }
}

/// A sub-window rectangle in window pixels, origin bottom-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Viewport {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Cell `index` of the 3x2 grid, filled left to right, bottom row first.
    pub fn for_sub_view(index: usize, window_width: u32, window_height: u32) -> Self {
        let width = window_width / SUB_VIEW_COLUMNS;
        let height = window_height / SUB_VIEW_ROWS;
        let index = index as u32;
        Self {
            x: (index % SUB_VIEW_COLUMNS) * width,
            y: (index / SUB_VIEW_COLUMNS) * height,
            width,
            height,
        }
    }
}

/// One drawn point, in viewport-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SubViewPoint {
    pub x: f32,
    pub y: f32,
    pub intensity: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubViewFrame {
    pub kind: SubViewKind,
    pub viewport: Viewport,
    pub points: Vec<SubViewPoint>,
}

/// Lays out all six sub-views for the current window size. Each sub-view
/// walks its own spiral over the same sorted sequence.
pub fn layout_sub_views(
    sorted: &[ScoredRecord],
    scores: &ScoreBounds,
    values: &ValueBounds,
    window: (u32, u32),
    params: &SpiralParams,
) -> Vec<SubViewFrame> {
    SubViewKind::all()
        .enumerate()
        .map(|(index, kind)| {
            let viewport = Viewport::for_sub_view(index, window.0, window.1);
            let cursor = SpiralCursor::new(viewport.width, viewport.height, params);
            let points = sorted
                .iter()
                .zip(cursor)
                .map(|(item, (x, y))| SubViewPoint {
                    x,
                    y,
                    intensity: kind.intensity(item, scores, values),
                })
                .collect();
            SubViewFrame {
                kind,
                viewport,
                points,
            }
        })
        .collect()
}
