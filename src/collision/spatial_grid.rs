// Implements a simple uniform spatial grid for broadphase collision detection.

use crate::collision::AABB;
use crate::math::vec2::Vec2;

/// Represents a cell in the spatial grid.
#[derive(Debug, Default, Clone)]
struct GridCell {
    ball_indices: Vec<usize>,
}

/// A uniform grid over the world rectangle. Balls are inserted by AABB and
/// only balls sharing at least one cell become candidate pairs.
///
/// Anything outside the grid bounds is filed under the nearest edge cells,
/// so escaped balls are still paired with their neighbours.
#[derive(Debug, Clone)]
pub struct SpatialGrid {
    bounds: AABB,
    inv_cell_size: f64,
    num_cols: usize,
    num_rows: usize,
    cells: Vec<GridCell>, // row-major
}

impl SpatialGrid {
    /// # Panics
    /// If `cell_size` is not positive.
    pub fn new(bounds: AABB, cell_size: f64) -> Self {
        assert!(cell_size > 0.0, "Cell size must be positive");
        let inv_cell_size = 1.0 / cell_size;

        // At least one cell even for a degenerate world
        let num_cols = (bounds.width() * inv_cell_size).ceil().max(1.0) as usize;
        let num_rows = (bounds.height() * inv_cell_size).ceil().max(1.0) as usize;
        log::debug!(
            "spatial grid: bounds={:?}, cell_size={}, dims={}x{}",
            bounds,
            cell_size,
            num_cols,
            num_rows
        );

        SpatialGrid {
            bounds,
            inv_cell_size,
            num_cols,
            num_rows,
            cells: vec![GridCell::default(); num_cols * num_rows],
        }
    }

    pub fn bounds(&self) -> AABB {
        self.bounds
    }

    /// Converts world coordinates to unclamped (col, row).
    #[inline]
    fn get_cell_indices(&self, point: Vec2) -> (isize, isize) {
        let local = point - self.bounds.min;
        let col = (local.x * self.inv_cell_size).floor() as isize;
        let row = (local.y * self.inv_cell_size).floor() as isize;
        (col, row)
    }

    /// Cell range covered by an AABB, clamped into the grid.
    fn get_cell_range(&self, aabb: &AABB) -> (usize, usize, usize, usize) {
        let clamp_col = |c: isize| c.clamp(0, self.num_cols as isize - 1) as usize;
        let clamp_row = |r: isize| r.clamp(0, self.num_rows as isize - 1) as usize;
        let (min_col, min_row) = self.get_cell_indices(aabb.min);
        let (max_col, max_row) = self.get_cell_indices(aabb.max);
        (clamp_col(min_col), clamp_row(min_row), clamp_col(max_col), clamp_row(max_row))
    }

    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.ball_indices.clear();
        }
    }

    /// Files `ball_index` under every cell its AABB touches.
    pub fn insert(&mut self, ball_index: usize, aabb: &AABB) {
        let (min_col, min_row, max_col, max_row) = self.get_cell_range(aabb);
        for row in min_row..=max_row {
            for col in min_col..=max_col {
                self.cells[col + row * self.num_cols].ball_indices.push(ball_index);
            }
        }
    }

    /// Candidate pairs `(i, j)` with `i < j`, without duplicates, sorted
    /// lexicographically so the narrow phase sees them in the same order as
    /// a brute-force scan.
    pub fn query_potential_pairs(&self) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for cell in &self.cells {
            let indices = &cell.ball_indices;
            for (k, &first) in indices.iter().enumerate() {
                for &second in &indices[k + 1..] {
                    if first < second {
                        pairs.push((first, second));
                    } else if second < first {
                        pairs.push((second, first));
                    }
                }
            }
        }
        pairs.sort_unstable();
        pairs.dedup();
        pairs
    }
}
