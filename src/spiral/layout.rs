use serde::Serialize;

/// Window size the baseline step is calibrated for.
pub const REFERENCE_WIDTH: u32 = 800;
pub const REFERENCE_HEIGHT: u32 = 600;
/// Step between consecutive spiral positions at the reference size.
pub const STEP_SIZE: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Right,
    Up,
    Left,
    Down,
}

impl Direction {
    pub fn turn(self) -> Self {
        match self {
            Direction::Right => Direction::Up,
            Direction::Up => Direction::Left,
            Direction::Left => Direction::Down,
            Direction::Down => Direction::Right,
        }
    }
}

/// Step calibration shared by every sub-view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpiralParams {
    pub step_size: f32,
    pub reference_width: u32,
    pub reference_height: u32,
}

impl Default for SpiralParams {
    fn default() -> Self {
        Self {
            step_size: STEP_SIZE,
            reference_width: REFERENCE_WIDTH,
            reference_height: REFERENCE_HEIGHT,
        }
    }
}

/// Walks a rectangular spiral outward from the centre of a `width x height`
/// area, yielding one position per step.
///
/// Legs run right, up, left, down with lengths 1, 1, 2, 2, 3, 3, ...; the
/// leg grows each time the direction turns to left or to right. After every
/// step the cursor is clamped into `[0, width] x [0, height]`, so positions
/// past the edge pile up on the boundary.
#[derive(Debug, Clone)]
pub struct SpiralCursor {
    x: f32,
    y: f32,
    x_step: f32,
    y_step: f32,
    width: f32,
    height: f32,
    direction: Direction,
    leg_length: u32,
    leg_progress: u32,
}

impl SpiralCursor {
    pub fn new(width: u32, height: u32, params: &SpiralParams) -> Self {
        let (w, h) = (width as f32, height as f32);
        Self {
            x: w / 2.0,
            y: h / 2.0,
            x_step: params.step_size * (w / params.reference_width as f32),
            y_step: params.step_size * (h / params.reference_height as f32),
            width: w,
            height: h,
            direction: Direction::Right,
            leg_length: 1,
            leg_progress: 0,
        }
    }

    pub fn current(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    fn advance(&mut self) {
        match self.direction {
            Direction::Right => self.x += self.x_step,
            Direction::Up => self.y += self.y_step,
            Direction::Left => self.x -= self.x_step,
            Direction::Down => self.y -= self.y_step,
        }

        self.leg_progress += 1;
        if self.leg_progress == self.leg_length {
            self.leg_progress = 0;
            self.direction = self.direction.turn();
            if matches!(self.direction, Direction::Right | Direction::Left) {
                self.leg_length += 1;
            }
        }

        self.x = self.x.clamp(0.0, self.width);
        self.y = self.y.clamp(0.0, self.height);
    }
}

impl Iterator for SpiralCursor {
    type Item = (f32, f32);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current();
        self.advance();
        Some(current)
    }
}

/// The first `count` spiral positions for a sub-view of the given size.
pub fn spiral_positions(count: usize, width: u32, height: u32, params: &SpiralParams) -> Vec<(f32, f32)> {
    SpiralCursor::new(width, height, params).take(count).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_params() -> SpiralParams {
        // One unit per step when the area equals the reference size.
        SpiralParams {
            step_size: 1.0,
            reference_width: 1000,
            reference_height: 1000,
        }
    }

    #[test]
    fn test_first_position_is_centre() {
        let positions = spiral_positions(1, 266, 300, &SpiralParams::default());
        assert_eq!(positions, vec![(133.0, 150.0)]);
    }

    #[test]
    fn test_rectangular_spiral_path() {
        let positions = spiral_positions(10, 1000, 1000, &unit_params());
        let relative: Vec<(i32, i32)> = positions
            .iter()
            .map(|&(x, y)| ((x - 500.0) as i32, (y - 500.0) as i32))
            .collect();
        assert_eq!(
            relative,
            vec![
                (0, 0),
                (1, 0),
                (1, 1),
                (0, 1),
                (-1, 1),
                (-1, 0),
                (-1, -1),
                (0, -1),
                (1, -1),
                (2, -1),
            ]
        );
    }

    #[test]
    fn test_cursor_yields_centre_then_steps() {
        let mut cursor = SpiralCursor::new(1000, 1000, &unit_params());
        assert_eq!(cursor.current(), (500.0, 500.0));
        assert_eq!(cursor.next(), Some((500.0, 500.0)));
        assert_eq!(cursor.current(), (501.0, 500.0));
        assert_eq!(cursor.next(), Some((501.0, 500.0)));
        assert_eq!(cursor.next(), Some((501.0, 501.0)));
        assert_eq!(cursor.direction(), Direction::Left);
    }

    #[test]
    fn test_leg_lengths_grow_every_two_turns() {
        let mut cursor = SpiralCursor::new(10_000, 10_000, &unit_params());
        let mut legs = Vec::new();
        let mut current = cursor.direction();
        let mut run = 0;
        for _ in 0..200 {
            cursor.next();
            run += 1;
            if cursor.direction() != current {
                legs.push(run);
                run = 0;
                current = cursor.direction();
            }
        }
        assert_eq!(&legs[..8], &[1, 1, 2, 2, 3, 3, 4, 4]);
    }

    #[test]
    fn test_step_scales_with_sub_view_size() {
        let params = SpiralParams::default();
        // A third of the reference width and half of its height.
        let positions = spiral_positions(3, 266, 300, &params);
        let x_step = 20.0 * (266.0 / 800.0);
        let y_step = 20.0 * (300.0 / 600.0);
        assert_eq!(positions[1], (133.0 + x_step, 150.0));
        assert_eq!(positions[2], (133.0 + x_step, 150.0 + y_step));
    }

    #[test]
    fn test_positions_are_clamped_not_dropped() {
        let params = SpiralParams {
            step_size: 10.0,
            reference_width: 10,
            reference_height: 10,
        };
        let positions = spiral_positions(500, 10, 10, &params);
        assert_eq!(positions.len(), 500);
        assert!(positions
            .iter()
            .all(|&(x, y)| (0.0..=10.0).contains(&x) && (0.0..=10.0).contains(&y)));
        assert!(positions.iter().any(|&(x, _)| x == 10.0));
    }

    #[test]
    fn test_recomputation_is_identical() {
        let params = SpiralParams::default();
        let first = spiral_positions(300, 400, 250, &params);
        let second = spiral_positions(300, 400, 250, &params);
        assert_eq!(first, second);
    }
}
