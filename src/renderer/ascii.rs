//! Text-mode frame rendering for terminals and logs

use glam::Vec2;

use crate::consts::PLATFORM_SIZE;
use crate::sim::GameState;

/// World-space window mapped onto the character grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct View {
    pub min: Vec2,
    pub max: Vec2,
    pub columns: usize,
    pub rows: usize,
}

impl Default for View {
    fn default() -> Self {
        Self {
            min: Vec2::new(-6.0, -6.0),
            max: Vec2::new(6.0, 4.0),
            columns: 60,
            rows: 25,
        }
    }
}

impl View {
    /// Grid cell for a world point, `None` when off screen
    pub fn cell(&self, p: Vec2) -> Option<(usize, usize)> {
        if self.columns == 0 || self.rows == 0 {
            return None;
        }
        let size = self.max - self.min;
        let u = (p.x - self.min.x) / size.x;
        let v = (self.max.y - p.y) / size.y;
        if !(0.0..1.0).contains(&u) || !(0.0..1.0).contains(&v) {
            return None;
        }
        Some((
            (u * self.columns as f32) as usize,
            (v * self.rows as f32) as usize,
        ))
    }
}

/// Render the world as rows of characters with a score line on top.
/// Stars `.`, asteroids `*`, platforms `=`, ball `O` (later wins).
pub fn render_frame(state: &GameState, view: &View) -> String {
    let mut grid = vec![vec![' '; view.columns]; view.rows];
    let mut plot = |p: Vec2, ch: char| {
        if let Some((col, row)) = view.cell(p) {
            grid[row][col] = ch;
        }
    };

    for star in state.stars() {
        plot(star.pos.truncate(), '.');
    }
    for obstacle in state.obstacles() {
        plot(obstacle.pos, '*');
    }
    let half = PLATFORM_SIZE[0] / 2.0;
    let step = (view.max.x - view.min.x) / view.columns.max(1) as f32;
    for platform in state.platforms() {
        let mut x = platform.pos.x - half;
        while x <= platform.pos.x + half {
            plot(Vec2::new(x, platform.pos.y), '=');
            x += step;
        }
    }
    plot(state.ball.xy(), 'O');

    let mut out = format!("Score: {}\n", state.score());
    out.push('+');
    out.push_str(&"-".repeat(view.columns));
    out.push_str("+\n");
    for row in grid {
        out.push('|');
        out.extend(row);
        out.push_str("|\n");
    }
    out.push('+');
    out.push_str(&"-".repeat(view.columns));
    out.push('+');
    out
}
