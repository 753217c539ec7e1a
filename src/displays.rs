use std::fmt;

use crate::cells::{Cell, Direction};
use crate::maze::Maze;
use crate::pathing::Distances;
use crate::units::{ColumnsCount, RowsCount};
use crate::utils::{self, FnvHashMap};

/// Fills the three character body of each cell when drawing a maze as text.
pub trait MazeDisplay {
    fn render_cell_body(&self, cell: Cell) -> String;
}

impl MazeDisplay for Distances {
    fn render_cell_body(&self, cell: Cell) -> String {
        if let Some(d) = self.distance_from_start_to(cell) {
            // centre align, padding 3, lowercase hexadecimal
            format!("{:^3x}", d)
        } else {
            String::from("   ")
        }
    }
}

/// Marks where the ball starts with `S` and the goal with `G`.
#[derive(Debug)]
pub struct StartGoalDisplay {
    start: Cell,
    goal: Cell,
}

impl StartGoalDisplay {
    pub fn new(start: Cell, goal: Cell) -> StartGoalDisplay {
        StartGoalDisplay { start, goal }
    }

    pub fn for_maze(maze: &Maze) -> StartGoalDisplay {
        StartGoalDisplay::new(maze.first_cell(), maze.last_cell())
    }
}

impl MazeDisplay for StartGoalDisplay {
    fn render_cell_body(&self, cell: Cell) -> String {
        if cell == self.start {
            String::from(" S ")
        } else if cell == self.goal {
            String::from(" G ")
        } else {
            String::from("   ")
        }
    }
}

/// Dots along a path, with the path ends drawn as start and goal.
#[derive(Debug)]
pub struct PathDisplay {
    on_path: FnvHashMap<Cell, usize>,
    last: usize,
}

impl PathDisplay {
    pub fn new(path: &[Cell]) -> PathDisplay {
        let mut on_path = utils::fnv_hashmap(path.len());
        for (i, cell) in path.iter().enumerate() {
            on_path.insert(*cell, i);
        }
        PathDisplay { on_path, last: path.len().saturating_sub(1) }
    }
}

impl MazeDisplay for PathDisplay {
    fn render_cell_body(&self, cell: Cell) -> String {
        match self.on_path.get(&cell) {
            Some(0) => String::from(" S "),
            Some(i) if *i == self.last => String::from(" G "),
            Some(_) => String::from(" . "),
            None => String::from("   "),
        }
    }
}

/// Box drawing text rendering of a maze with optional cell contents.
pub struct MazeText<'a> {
    maze: &'a Maze,
    display: Option<&'a dyn MazeDisplay>,
}

impl<'a> MazeText<'a> {
    pub fn new(maze: &'a Maze, display: Option<&'a dyn MazeDisplay>) -> MazeText<'a> {
        MazeText { maze, display }
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        MazeText::new(self, None).fmt(f)
    }
}

impl<'a> fmt::Display for MazeText<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        const WALL_L: &str = "╴";
        const WALL_R: &str = "╶";
        const WALL_U: &str = "╵";
        const WALL_D: &str = "╷";
        const WALL_LR_3: &str = "───";
        const WALL_LR: &str = "─";
        const WALL_UD: &str = "│";
        const WALL_LD: &str = "┐";
        const WALL_RU: &str = "└";
        const WALL_LU: &str = "┘";
        const WALL_RD: &str = "┌";
        const WALL_LRU: &str = "┴";
        const WALL_LRD: &str = "┬";
        const WALL_LRUD: &str = "┼";
        const WALL_RUD: &str = "├";
        const WALL_LUD: &str = "┤";

        let maze = self.maze;
        let ColumnsCount(columns_count) = maze.columns();
        let RowsCount(rows_count) = maze.rows();

        // The top boundary is special cased, every other row draws its own
        // middle and its southern wall.
        let mut output = String::from(WALL_RD);
        for column in 0..columns_count {
            output.push_str(WALL_LR_3);
            let is_last_column = column == columns_count - 1;
            output.push_str(if is_last_column {
                WALL_LD
            } else if maze.is_open(Cell::new(0, column), Direction::Right) {
                WALL_LR
            } else {
                WALL_LRD
            });
        }
        output.push('\n');

        for row in 0..rows_count {
            let is_last_row = row == rows_count - 1;

            let mut middle = String::from(WALL_UD);
            let mut bottom = String::from(if is_last_row {
                WALL_RU
            } else if maze.is_open(Cell::new(row, 0), Direction::Down) {
                WALL_UD
            } else {
                WALL_RUD
            });

            for column in 0..columns_count {
                let cell = Cell::new(row, column);
                let is_last_column = column == columns_count - 1;
                let east_open = maze.is_open(cell, Direction::Right);
                let south_open = maze.is_open(cell, Direction::Down);

                match self.display {
                    Some(display) => middle.push_str(&display.render_cell_body(cell)),
                    None => middle.push_str("   "),
                }
                middle.push_str(if east_open { " " } else { WALL_UD });

                bottom.push_str(if south_open { "   " } else { WALL_LR_3 });

                let corner = match (is_last_row, is_last_column) {
                    (true, true) => WALL_LU,
                    (true, false) => if east_open { WALL_LR } else { WALL_LRU },
                    (false, true) => if south_open { WALL_UD } else { WALL_LUD },
                    (false, false) => {
                        let south_east = Cell::new(row + 1, column + 1);
                        let show_left = !south_open;
                        let show_up = !east_open;
                        let show_right = !maze.is_open(south_east, Direction::Up);
                        let show_down = !maze.is_open(south_east, Direction::Left);

                        match (show_left, show_right, show_up, show_down) {
                            (true, true, true, true) => WALL_LRUD,
                            (true, true, true, false) => WALL_LRU,
                            (true, true, false, true) => WALL_LRD,
                            (true, false, true, true) => WALL_LUD,
                            (false, true, true, true) => WALL_RUD,
                            (true, true, false, false) => WALL_LR,
                            (false, false, true, true) => WALL_UD,
                            (false, true, true, false) => WALL_RU,
                            (true, false, false, true) => WALL_LD,
                            (true, false, true, false) => WALL_LU,
                            (false, true, false, true) => WALL_RD,
                            (true, false, false, false) => WALL_L,
                            (false, true, false, false) => WALL_R,
                            (false, false, true, false) => WALL_U,
                            (false, false, false, true) => WALL_D,
                            (false, false, false, false) => " ",
                        }
                    }
                };
                bottom.push_str(corner);
            }

            output.push_str(&middle);
            output.push('\n');
            output.push_str(&bottom);
            output.push('\n');
        }

        write!(f, "{}", output)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::generators;
    use crate::maze::MazeDimensions;
    use crate::pathing;

    fn dims(rows: usize, columns: usize) -> MazeDimensions {
        MazeDimensions::new(RowsCount(rows), ColumnsCount(columns)).unwrap()
    }

    #[test]
    fn single_cell_is_a_box() {
        let maze = generators::seeded_maze(dims(1, 1), 0);
        assert_eq!(format!("{}", maze), "┌───┐\n│   │\n└───┘\n");
    }

    #[test]
    fn corridor_has_no_inner_walls() {
        let maze = generators::seeded_maze(dims(1, 3), 0);
        assert_eq!(format!("{}", maze),
                   "┌───────────┐\n│           │\n└───────────┘\n");
    }

    #[test]
    fn vertical_corridor() {
        let maze = generators::seeded_maze(dims(2, 1), 0);
        assert_eq!(format!("{}", maze), "┌───┐\n│   │\n│   │\n│   │\n└───┘\n");
    }

    #[test]
    fn every_line_has_the_same_width() {
        let maze = generators::seeded_maze(dims(9, 10), 42);
        let text = format!("{}", maze);
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 1 + 2 * 9);
        for line in lines {
            assert_eq!(line.chars().count(), 1 + 4 * 10);
        }
    }

    #[test]
    fn start_and_goal_marked() {
        let maze = generators::seeded_maze(dims(3, 3), 4);
        let marks = StartGoalDisplay::for_maze(&maze);
        let text = format!("{}", MazeText::new(&maze, Some(&marks)));
        assert_eq!(text.matches('S').count(), 1);
        assert_eq!(text.matches('G').count(), 1);
        let first_cell_line = text.lines().nth(1).unwrap();
        assert!(first_cell_line.starts_with("│ S "));
    }

    #[test]
    fn path_display_marks_every_step() {
        let maze = generators::seeded_maze(dims(4, 4), 17);
        let path = pathing::solution(&maze).unwrap();
        let display = PathDisplay::new(&path);
        let text = format!("{}", MazeText::new(&maze, Some(&display)));
        assert_eq!(text.matches('.').count(), path.len() - 2);
        assert_eq!(display.render_cell_body(maze.first_cell()), " S ");
        assert_eq!(display.render_cell_body(maze.last_cell()), " G ");
    }

    #[test]
    fn distances_render_in_hex() {
        let maze = generators::seeded_maze(dims(1, 12), 1);
        let distances = pathing::Distances::new(&maze, Cell::new(0, 0)).unwrap();
        assert_eq!(distances.render_cell_body(Cell::new(0, 11)), " b ");
    }
}
