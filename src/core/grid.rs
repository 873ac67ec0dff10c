//! Board storage

use super::{Coord, Tile};

/// The playing field: a fixed-size matrix of optional tiles.
///
/// Dimensions are set at construction and never change. Cells are stored in
/// a flat row-major vector; rows and columns are projected onto it by the
/// engine's lane mapping rather than copied out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Option<Tile>>,
}

impl Grid {
    /// Create an empty grid.
    ///
    /// # Panics
    /// Panics in debug mode if either dimension is zero.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        debug_assert!(width >= 1 && height >= 1, "grid dimensions must be >= 1");
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// The tile at `at`, if any.
    ///
    /// # Panics
    /// Panics if `at` is outside the grid; out-of-range access is a
    /// programming error, not a recoverable condition.
    #[inline]
    #[must_use]
    pub fn get(&self, at: Coord) -> Option<Tile> {
        self.cells[self.index(at)]
    }

    /// Put `tile` (or empty) at `at`.
    ///
    /// # Panics
    /// Panics if `at` is outside the grid.
    #[inline]
    pub fn set(&mut self, at: Coord, tile: Option<Tile>) {
        let index = self.index(at);
        self.cells[index] = tile;
    }

    /// All cell coordinates, row by row.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| Coord::new(x, y)))
    }

    /// Every occupied cell with its tile, row by row.
    pub fn tiles(&self) -> impl Iterator<Item = (Coord, Tile)> + '_ {
        self.coords().filter_map(|at| self.get(at).map(|tile| (at, tile)))
    }

    /// Coordinates of all currently unoccupied cells.
    #[must_use]
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.coords().filter(|&at| self.get(at).is_none()).collect()
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    fn index(&self, at: Coord) -> usize {
        debug_assert!(
            at.x < self.width && at.y < self.height,
            "coordinate {at} outside {}x{} grid",
            self.width,
            self.height
        );
        at.y * self.width + at.x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_empty() {
        let grid = Grid::new(4, 4);

        assert_eq!(grid.coords().count(), 16);
        assert_eq!(grid.empty_cells().len(), 16);
        assert_eq!(grid.tile_count(), 0);
    }

    #[test]
    fn set_then_get_roundtrip() {
        let mut grid = Grid::new(4, 4);
        let at = Coord::new(2, 3);

        grid.set(at, Some(Tile::new(5)));
        assert_eq!(grid.get(at), Some(Tile::new(5)));

        grid.set(at, None);
        assert_eq!(grid.get(at), None);
    }

    #[test]
    fn empty_cells_excludes_occupied() {
        let mut grid = Grid::new(2, 2);
        grid.set(Coord::new(0, 0), Some(Tile::new(1)));
        grid.set(Coord::new(1, 1), Some(Tile::new(2)));

        let empty = grid.empty_cells();
        assert_eq!(empty, vec![Coord::new(1, 0), Coord::new(0, 1)]);
        assert_eq!(grid.tile_count(), 2);
    }

    #[test]
    fn non_square_dimensions() {
        let grid = Grid::new(5, 3);

        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.coords().count(), 15);
    }
}
