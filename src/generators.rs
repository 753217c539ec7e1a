use log::debug;
use rand::{self, rngs::StdRng, Rng, SeedableRng};
use smallvec::SmallVec;

use crate::cells::{Cell, Direction, DIRECTIONS};
use crate::maze::{Maze, MazeDimensions};
use crate::units::{ColumnsCount, RowsCount};

/// Carve a perfect maze with the recursive backtracker (randomized depth first
/// search), starting from a uniformly random cell.
///
/// From the current cell the four directions are shuffled and tried in turn.
/// A direction leading to an unvisited cell inside the grid has its wall
/// removed and the carve continues from that cell before the remaining
/// directions are tried. When every direction from a cell is exhausted we back
/// up to the cell we came from.
///
/// The backtracking uses an explicit stack of frames rather than recursion so
/// large grids cannot overflow the call stack. Each frame keeps its own
/// shuffled directions, which gives exactly the visiting order and random draw
/// sequence of the recursive formulation.
pub fn recursive_backtracker<R: Rng + ?Sized>(dimensions: MazeDimensions, rng: &mut R) -> Maze {
    let mut maze = Maze::closed(dimensions);

    let RowsCount(rows) = dimensions.rows();
    let ColumnsCount(columns) = dimensions.columns();
    let start = Cell::new(rng.gen_range(0..rows), rng.gen_range(0..columns));
    debug!("carving {}x{} maze from {}", rows, columns, start);

    let mut stack = vec![CarveFrame::enter(start, &mut maze, rng)];

    while let Some(frame) = stack.last_mut() {
        let cell = frame.cell;
        match frame.next_direction() {
            Some(direction) => {
                if let Some(next) = maze.neighbour(cell, direction) {
                    if !maze.is_visited(next) {
                        maze.open_passage(cell, direction);
                        stack.push(CarveFrame::enter(next, &mut maze, rng));
                    }
                }
            }
            None => {
                stack.pop();
            }
        }
    }

    maze
}

/// Recursive backtracker driven by the thread local random number generator.
pub fn random_maze(dimensions: MazeDimensions) -> Maze {
    recursive_backtracker(dimensions, &mut rand::thread_rng())
}

/// Recursive backtracker with a reproducible random sequence: the same seed
/// and dimensions always give the same maze.
pub fn seeded_maze(dimensions: MazeDimensions, seed: u64) -> Maze {
    recursive_backtracker(dimensions, &mut StdRng::seed_from_u64(seed))
}

/// In place Fisher-Yates shuffle.
///
/// Walks a counter down from `items.len()` to 1, each step swapping the element
/// at `counter - 1` with one picked uniformly from `[0, counter)`. Every
/// permutation is equally likely given an unbiased `rng`.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    let mut counter = items.len();
    while counter > 0 {
        let index = rng.gen_range(0..counter);
        counter -= 1;
        items.swap(counter, index);
    }
}

struct CarveFrame {
    cell: Cell,
    directions: SmallVec<[Direction; 4]>,
    next: usize,
}

impl CarveFrame {
    /// Visit `cell` and decide the order its directions will be tried in.
    fn enter<R: Rng + ?Sized>(cell: Cell, maze: &mut Maze, rng: &mut R) -> CarveFrame {
        maze.mark_visited(cell);
        let mut directions = SmallVec::from_slice(&DIRECTIONS);
        shuffle(&mut directions, rng);
        CarveFrame { cell, directions, next: 0 }
    }

    fn next_direction(&mut self) -> Option<Direction> {
        let direction = self.directions.get(self.next).cloned();
        self.next += 1;
        direction
    }
}
