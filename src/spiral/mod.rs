pub mod context;
pub mod layout;
pub mod query;
pub mod report;
pub mod scorer;
pub mod sorter;
pub mod views;

use serde::Serialize;
use std::path::PathBuf;

pub use context::SpiralContext;
pub use layout::{spiral_positions, SpiralCursor, SpiralParams};
pub use query::{Query, QueryError};
pub use scorer::{score, score_all, ScoreBounds, ScoredRecord};
pub use sorter::sort_by_score;
pub use views::{layout_sub_views, SubViewFrame, SubViewKind, Viewport};

pub const DEFAULT_INPUT: &str = "Points5D.txt";
pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;
pub const POINT_SIZE: u32 = 15;

/// Resolved settings for one spiral-view run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpiralConfig {
    pub input: PathBuf,
    pub window_width: u32,
    pub window_height: u32,
    pub point_size: u32,
    pub params: SpiralParams,
    pub snapshot: Option<PathBuf>,
    pub json: bool,
}

impl Default for SpiralConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            point_size: POINT_SIZE,
            params: SpiralParams::default(),
            snapshot: None,
            json: false,
        }
    }
}
