use smallvec::SmallVec;

use crate::cells::{Cell, Direction, DIRECTIONS};
use crate::errors::*;
use crate::matrix::BoolMatrix;
use crate::units::{ColumnsCount, RowsCount};

/// Validated maze size: at least one row and one column.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct MazeDimensions {
    rows: usize,
    columns: usize,
}

impl MazeDimensions {
    pub fn new(RowsCount(rows): RowsCount, ColumnsCount(columns): ColumnsCount) -> Result<MazeDimensions> {
        if rows == 0 || columns == 0 {
            bail!(ErrorKind::InvalidDimensions(rows, columns));
        }
        Ok(MazeDimensions { rows, columns })
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        RowsCount(self.rows)
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        ColumnsCount(self.columns)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.rows * self.columns
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.column < self.columns
    }

    pub fn iter(&self) -> impl Iterator<Item = Cell> {
        let columns = self.columns();
        (0..self.size()).map(move |i| Cell::from_row_major_index(i, columns))
    }
}

/// The topology of a maze: which cells were reached by the carve and which
/// walls between adjacent cells are open passages.
///
/// `vertical` is `rows x (columns - 1)`, entry (r, c) is the wall between
/// (r, c) and (r, c + 1). `horizontal` is `(rows - 1) x columns`, entry (r, c)
/// is the wall between (r, c) and (r + 1, c). Only the generators mutate a
/// maze; everything public reads it.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Maze {
    dimensions: MazeDimensions,
    visited: BoolMatrix,
    vertical: BoolMatrix,
    horizontal: BoolMatrix,
}

pub type CellSmallVec = SmallVec<[Cell; 4]>;

impl Maze {
    /// An uncarved maze: nothing visited, every wall closed.
    pub(crate) fn closed(dimensions: MazeDimensions) -> Maze {
        let RowsCount(rows) = dimensions.rows();
        let ColumnsCount(columns) = dimensions.columns();
        Maze {
            dimensions,
            visited: BoolMatrix::new(rows, columns),
            vertical: BoolMatrix::new(rows, columns - 1),
            horizontal: BoolMatrix::new(rows - 1, columns),
        }
    }

    #[inline]
    pub fn dimensions(&self) -> MazeDimensions {
        self.dimensions
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        self.dimensions.rows()
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        self.dimensions.columns()
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.dimensions.size()
    }

    #[inline]
    pub fn visited(&self) -> &BoolMatrix {
        &self.visited
    }

    #[inline]
    pub fn vertical_walls(&self) -> &BoolMatrix {
        &self.vertical
    }

    #[inline]
    pub fn horizontal_walls(&self) -> &BoolMatrix {
        &self.horizontal
    }

    #[inline]
    pub fn is_visited(&self, cell: Cell) -> bool {
        self.visited.get(cell.row, cell.column)
    }

    /// Top left cell, where the ball starts.
    #[inline]
    pub fn first_cell(&self) -> Cell {
        Cell::new(0, 0)
    }

    /// Bottom right cell, where the goal sits.
    pub fn last_cell(&self) -> Cell {
        let RowsCount(rows) = self.rows();
        let ColumnsCount(columns) = self.columns();
        Cell::new(rows - 1, columns - 1)
    }

    #[inline]
    pub fn neighbour(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        cell.offset(direction, self.rows(), self.columns())
    }

    /// Is there an open passage from `cell` towards `direction`?
    /// `false` at the maze boundary.
    pub fn is_open(&self, cell: Cell, direction: Direction) -> bool {
        if !self.dimensions.contains(cell) {
            return false;
        }
        let (matrix, row, column) = match self.wall_entry(cell, direction) {
            Some(entry) => entry,
            None => return false,
        };
        matrix.get(row, column)
    }

    /// Cells reachable from `cell` through one open passage.
    pub fn links(&self, cell: Cell) -> CellSmallVec {
        DIRECTIONS.iter()
            .filter(|&&dir| self.is_open(cell, dir))
            .filter_map(|&dir| self.neighbour(cell, dir))
            .collect()
    }

    /// Total number of open passages across both wall matrices.
    #[inline]
    pub fn passages_count(&self) -> usize {
        self.vertical.count_true() + self.horizontal.count_true()
    }

    /// Each open passage once, as a pair of adjacent cells, vertical walls first.
    pub fn iter_passages(&self) -> impl Iterator<Item = (Cell, Cell)> + '_ {
        let verticals = self.vertical
            .iter()
            .filter(|&(_, _, open)| open)
            .map(|(r, c, _)| (Cell::new(r, c), Cell::new(r, c + 1)));
        let horizontals = self.horizontal
            .iter()
            .filter(|&(_, _, open)| open)
            .map(|(r, c, _)| (Cell::new(r, c), Cell::new(r + 1, c)));
        verticals.chain(horizontals)
    }

    pub(crate) fn mark_visited(&mut self, cell: Cell) {
        self.visited.set(cell.row, cell.column, true);
    }

    /// Removes the wall between `cell` and its neighbour in `direction`.
    /// Left opens `vertical[r][c-1]`, right `vertical[r][c]`, up
    /// `horizontal[r-1][c]`, down `horizontal[r][c]`.
    ///
    /// Panics if there is no neighbour in that direction.
    pub(crate) fn open_passage(&mut self, cell: Cell, direction: Direction) {
        let (matrix, r, c) = match direction {
            Direction::Left | Direction::Right => {
                let c = if direction == Direction::Left {
                    cell.column.checked_sub(1)
                } else {
                    Some(cell.column)
                };
                (&mut self.vertical, Some(cell.row), c)
            }
            Direction::Up | Direction::Down => {
                let r = if direction == Direction::Up {
                    cell.row.checked_sub(1)
                } else {
                    Some(cell.row)
                };
                (&mut self.horizontal, r, Some(cell.column))
            }
        };
        match (r, c) {
            (Some(r), Some(c)) => matrix.set(r, c, true),
            _ => panic!("no wall {:?} of cell {}", direction, cell),
        }
    }

    /// The wall matrix and entry separating `cell` from its neighbour in
    /// `direction`, `None` on the maze boundary.
    fn wall_entry(&self, cell: Cell, direction: Direction) -> Option<(&BoolMatrix, usize, usize)> {
        let neighbour = self.neighbour(cell, direction)?;
        let upper_left = if neighbour < cell { neighbour } else { cell };
        if direction.is_vertical() {
            Some((&self.horizontal, upper_left.row, upper_left.column))
        } else {
            Some((&self.vertical, upper_left.row, upper_left.column))
        }
    }
}
