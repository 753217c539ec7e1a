use std::fmt;

use crate::units::{ColumnsCount, RowsCount};

/// A maze cell addressed by row and column, both zero based from the top left.
#[derive(Eq, PartialEq, Ord, PartialOrd, Hash, Copy, Clone, Debug)]
pub struct Cell {
    pub row: usize,
    pub column: usize,
}

impl Cell {
    #[inline]
    pub fn new(row: usize, column: usize) -> Cell {
        Cell { row, column }
    }

    /// Row major index of the cell in a grid with `columns` columns.
    #[inline]
    pub fn row_major_index(&self, ColumnsCount(columns): ColumnsCount) -> usize {
        self.row * columns + self.column
    }

    #[inline]
    pub fn from_row_major_index(index: usize, ColumnsCount(columns): ColumnsCount) -> Cell {
        Cell::new(index / columns, index % columns)
    }

    /// The adjacent cell in `direction`, or `None` if it would fall outside a
    /// `rows` x `columns` grid.
    pub fn offset(&self,
                  direction: Direction,
                  RowsCount(rows): RowsCount,
                  ColumnsCount(columns): ColumnsCount)
                  -> Option<Cell> {
        let (row, column) = (self.row, self.column);
        let (next_row, next_column) = match direction {
            Direction::Up => (row.checked_sub(1)?, column),
            Direction::Left => (row, column.checked_sub(1)?),
            Direction::Down => (row + 1, column),
            Direction::Right => (row, column + 1),
        };

        if next_row < rows && next_column < columns {
            Some(Cell::new(next_row, next_column))
        } else {
            None
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

#[derive(Eq, PartialEq, Hash, Copy, Clone, Debug)]
pub enum Direction {
    Up,
    Left,
    Down,
    Right,
}

/// Candidate carve order before shuffling.
pub const DIRECTIONS: [Direction; 4] =
    [Direction::Up, Direction::Left, Direction::Down, Direction::Right];

impl Direction {
    #[inline]
    pub fn is_vertical(&self) -> bool {
        *self == Direction::Up || *self == Direction::Down
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use itertools::Itertools;

    const ROWS: RowsCount = RowsCount(3);
    const COLUMNS: ColumnsCount = ColumnsCount(4);

    #[test]
    fn offsets_inside_grid() {
        let c = Cell::new(1, 1);
        assert_eq!(c.offset(Direction::Up, ROWS, COLUMNS), Some(Cell::new(0, 1)));
        assert_eq!(c.offset(Direction::Down, ROWS, COLUMNS), Some(Cell::new(2, 1)));
        assert_eq!(c.offset(Direction::Left, ROWS, COLUMNS), Some(Cell::new(1, 0)));
        assert_eq!(c.offset(Direction::Right, ROWS, COLUMNS), Some(Cell::new(1, 2)));
    }

    #[test]
    fn offsets_off_the_edges() {
        let top_left = Cell::new(0, 0);
        assert_eq!(top_left.offset(Direction::Up, ROWS, COLUMNS), None);
        assert_eq!(top_left.offset(Direction::Left, ROWS, COLUMNS), None);

        let bottom_right = Cell::new(2, 3);
        assert_eq!(bottom_right.offset(Direction::Down, ROWS, COLUMNS), None);
        assert_eq!(bottom_right.offset(Direction::Right, ROWS, COLUMNS), None);
    }

    #[test]
    fn row_major_index_round_trip() {
        let cells = (0..3).cartesian_product(0..4).map(|(r, c)| Cell::new(r, c)).collect_vec();
        let indices = cells.iter().map(|c| c.row_major_index(COLUMNS)).collect_vec();
        assert_eq!(indices, (0..12).collect_vec());
        assert_eq!(Cell::from_row_major_index(7, COLUMNS), Cell::new(1, 3));
    }

    #[test]
    fn vertical_directions() {
        let vertical = DIRECTIONS.iter().filter(|d| d.is_vertical()).cloned().collect_vec();
        assert_eq!(vertical, vec![Direction::Up, Direction::Down]);
    }
}
