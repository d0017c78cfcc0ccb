use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker printed for an unassigned cell.
pub const EMPTY_MARKER: char = '-';

/// A (row, column) coordinate on the grid, 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The origin cell (0, 0).
    pub fn origin() -> Self {
        Self { row: 0, col: 0 }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// An N×N grid of cells, each either empty or holding one symbol.
///
/// The grid also knows its sub-block edge length, `floor(sqrt(N))`. Blocks
/// are anchored at multiples of that length; when N is not a perfect square
/// the blocks on the far edges are truncated at the grid boundary rather
/// than re-anchored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    block_size: usize,
    cells: Vec<Option<char>>,
}

impl Grid {
    /// Create an empty grid with `size` rows and columns.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            block_size: size.isqrt(),
            cells: vec![None; size * size],
        }
    }

    /// Edge length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Edge length of a sub-block.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Get the symbol at `pos`, or `None` if the cell is empty.
    pub fn get(&self, pos: Position) -> Option<char> {
        self.cells[self.idx(pos)]
    }

    /// Write `value` at `pos`; `None` clears the cell.
    pub fn set(&mut self, pos: Position, value: Option<char>) {
        let idx = self.idx(pos);
        self.cells[idx] = value;
    }

    /// Check whether every cell holds a symbol.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Count of cells currently holding a symbol.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Iterate over all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }

    /// First empty cell in row-major order, or `None` if the grid is full.
    pub fn first_empty(&self) -> Option<Position> {
        self.first_empty_from(Position::origin())
    }

    /// First empty cell at or after `from` in row-major order.
    ///
    /// Cells before `from` are not inspected; callers use this to resume a
    /// scan past a prefix they already know to be filled.
    pub fn first_empty_from(&self, from: Position) -> Option<Position> {
        let start = self.idx(from);
        self.cells[start..]
            .iter()
            .position(Option::is_none)
            .map(|offset| self.pos_of(start + offset))
    }

    /// Check whether writing `symbol` at `pos` would break a uniqueness
    /// constraint: the symbol must not already occur in the cell's row,
    /// column, or sub-block. The cell's own current value is ignored.
    pub fn is_safe(&self, pos: Position, symbol: char) -> bool {
        // Row
        for col in 0..self.size {
            if col != pos.col && self.get(Position::new(pos.row, col)) == Some(symbol) {
                return false;
            }
        }

        // Column
        for row in 0..self.size {
            if row != pos.row && self.get(Position::new(row, pos.col)) == Some(symbol) {
                return false;
            }
        }

        // Sub-block, clamped at the grid edge for truncated blocks
        let start_row = self.block_size * (pos.row / self.block_size);
        let start_col = self.block_size * (pos.col / self.block_size);
        for row in start_row..(start_row + self.block_size).min(self.size) {
            for col in start_col..(start_col + self.block_size).min(self.size) {
                if (row, col) != (pos.row, pos.col)
                    && self.get(Position::new(row, col)) == Some(symbol)
                {
                    return false;
                }
            }
        }

        true
    }

    fn idx(&self, pos: Position) -> usize {
        debug_assert!(pos.row < self.size && pos.col < self.size);
        pos.row * self.size + pos.col
    }

    fn pos_of(&self, idx: usize) -> Position {
        Position::new(idx / self.size, idx % self.size)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let ch = self.get(Position::new(row, col)).unwrap_or(EMPTY_MARKER);
                write!(f, "{}", ch)?;
                if col + 1 < self.size {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(4);
        assert_eq!(grid.size(), 4);
        assert_eq!(grid.block_size(), 2);
        assert_eq!(grid.filled_count(), 0);
        assert!(!grid.is_complete());
        assert_eq!(grid.first_empty(), Some(Position::origin()));
    }

    #[test]
    fn test_block_size_floors() {
        assert_eq!(Grid::new(1).block_size(), 1);
        assert_eq!(Grid::new(2).block_size(), 1);
        assert_eq!(Grid::new(5).block_size(), 2);
        assert_eq!(Grid::new(9).block_size(), 3);
        assert_eq!(Grid::new(10).block_size(), 3);
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::new(3);
        let pos = Position::new(1, 2);
        grid.set(pos, Some('b'));
        assert_eq!(grid.get(pos), Some('b'));
        grid.set(pos, None);
        assert_eq!(grid.get(pos), None);
    }

    #[test]
    fn test_first_empty_row_major() {
        let mut grid = Grid::new(3);
        grid.set(Position::new(0, 0), Some('a'));
        grid.set(Position::new(0, 1), Some('b'));
        assert_eq!(grid.first_empty(), Some(Position::new(0, 2)));

        grid.set(Position::new(0, 2), Some('c'));
        assert_eq!(grid.first_empty(), Some(Position::new(1, 0)));
    }

    #[test]
    fn test_first_empty_from_skips_prefix() {
        let mut grid = Grid::new(3);
        // (1, 1) is empty but lies before the scan start
        grid.set(Position::new(1, 2), Some('a'));
        let from = Position::new(1, 2);
        assert_eq!(grid.first_empty_from(from), Some(Position::new(2, 0)));
    }

    #[test]
    fn test_first_empty_none_when_full() {
        let mut grid = Grid::new(2);
        for pos in grid.positions().collect::<Vec<_>>() {
            grid.set(pos, Some('x'));
        }
        assert!(grid.is_complete());
        assert_eq!(grid.first_empty(), None);
    }

    #[test]
    fn test_is_safe_row_conflict() {
        let mut grid = Grid::new(4);
        grid.set(Position::new(0, 0), Some('a'));
        assert!(!grid.is_safe(Position::new(0, 3), 'a'));
        assert!(grid.is_safe(Position::new(0, 3), 'b'));
    }

    #[test]
    fn test_is_safe_column_conflict() {
        let mut grid = Grid::new(4);
        grid.set(Position::new(0, 1), Some('c'));
        assert!(!grid.is_safe(Position::new(3, 1), 'c'));
        assert!(grid.is_safe(Position::new(3, 1), 'a'));
    }

    #[test]
    fn test_is_safe_block_conflict() {
        let mut grid = Grid::new(4);
        // (0,0) and (1,1) share the top-left 2×2 block
        grid.set(Position::new(0, 0), Some('d'));
        assert!(!grid.is_safe(Position::new(1, 1), 'd'));
        // (2,2) is in a different block; only row/col constraints could bite
        assert!(grid.is_safe(Position::new(2, 2), 'd'));
    }

    #[test]
    fn test_is_safe_ignores_own_value() {
        let mut grid = Grid::new(4);
        let pos = Position::new(2, 2);
        grid.set(pos, Some('a'));
        assert!(grid.is_safe(pos, 'a'));
    }

    #[test]
    fn test_is_safe_truncated_block() {
        // Size 5 has block size 2; row 4 and column 4 fall into truncated
        // blocks clamped at the grid edge.
        let mut grid = Grid::new(5);
        grid.set(Position::new(4, 0), Some('e'));
        // (4,1) shares the truncated 1×2 block anchored at (4,0)
        assert!(!grid.is_safe(Position::new(4, 1), 'e'));
        // (3,0) is anchored at (2,0): different block, but same column
        assert!(!grid.is_safe(Position::new(3, 0), 'e'));
        assert!(grid.is_safe(Position::new(3, 1), 'e'));
    }

    #[test]
    fn test_degenerate_blocks_size_two() {
        // Block size floor(sqrt(2)) = 1: every cell is its own block, so
        // only row and column constraints remain.
        let mut grid = Grid::new(2);
        grid.set(Position::new(0, 0), Some('a'));
        assert!(grid.is_safe(Position::new(1, 1), 'a'));
        assert!(!grid.is_safe(Position::new(0, 1), 'a'));
        assert!(!grid.is_safe(Position::new(1, 0), 'a'));
    }

    #[test]
    fn test_display_uses_empty_marker() {
        let mut grid = Grid::new(2);
        grid.set(Position::new(0, 0), Some('a'));
        assert_eq!(grid.to_string(), "a -\n- -\n");
    }
}
