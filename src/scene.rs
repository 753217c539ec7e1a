//! Mapping from maze topology to the bodies of the physics scene.
//!
//! Grid coordinates become world coordinates by scaling with the cell size;
//! nothing here touches the physics engine.

use std::fmt;

use crate::config::GameConfig;
use crate::maze::Maze;
use crate::units::{ColumnsCount, Height, RowsCount, Width};

#[derive(Eq, PartialEq, Hash, Copy, Clone, Debug)]
pub enum Label {
    Wall,
    Boundary,
    Goal,
    Ball,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match *self {
            Label::Wall => "wall",
            Label::Boundary => "boundary",
            Label::Goal => "goal",
            Label::Ball => "ball",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const RED: Colour = Colour { r: 0xff, g: 0, b: 0 };
    pub const GREEN: Colour = Colour { r: 0, g: 0x80, b: 0 };
    pub const YELLOW: Colour = Colour { r: 0xff, g: 0xff, b: 0 };
    pub const GREY: Colour = Colour { r: 0x80, g: 0x80, b: 0x80 };
}

#[derive(PartialEq, Copy, Clone, Debug)]
pub enum Shape {
    Rectangle { width: f32, height: f32 },
    Circle { radius: f32 },
}

/// Everything needed to create one physics body. `x`, `y` is the centre.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct BodySpec {
    pub label: Label,
    pub shape: Shape,
    pub x: f32,
    pub y: f32,
    pub colour: Colour,
    pub is_static: bool,
}

/// Bodies for a maze laid out over a `width` x `height` field.
#[derive(Debug, Clone)]
pub struct SceneLayout {
    pub unit_x: f32,
    pub unit_y: f32,
    pub boundaries: Vec<BodySpec>,
    pub walls: Vec<BodySpec>,
    pub goal: BodySpec,
    pub ball: BodySpec,
}

impl SceneLayout {
    pub fn new(maze: &Maze, config: &GameConfig) -> SceneLayout {
        let Width(width) = config.width;
        let Height(height) = config.height;
        let RowsCount(rows) = maze.rows();
        let ColumnsCount(columns) = maze.columns();
        let unit_x = width / columns as f32;
        let unit_y = height / rows as f32;
        let thickness = config.wall_thickness;

        let wall = |x, y, width, height| BodySpec {
            label: Label::Wall,
            shape: Shape::Rectangle { width, height },
            x,
            y,
            colour: Colour::RED,
            is_static: true,
        };

        // A closed horizontal wall sits on the bottom edge of its cell, a
        // closed vertical one on the right edge.
        let horizontals = maze.horizontal_walls()
            .iter()
            .filter(|&(_, _, open)| !open)
            .map(|(row, column, _)| {
                wall(column as f32 * unit_x + unit_x / 2.0,
                     row as f32 * unit_y + unit_y,
                     unit_x,
                     thickness)
            });
        let verticals = maze.vertical_walls()
            .iter()
            .filter(|&(_, _, open)| !open)
            .map(|(row, column, _)| {
                wall(column as f32 * unit_x + unit_x,
                     row as f32 * unit_y + unit_y / 2.0,
                     thickness,
                     unit_y)
            });
        let walls = horizontals.chain(verticals).collect::<Vec<_>>();

        let edge = config.boundary_thickness;
        let boundary = |x, y, width, height| BodySpec {
            label: Label::Boundary,
            shape: Shape::Rectangle { width, height },
            x,
            y,
            colour: Colour::GREY,
            is_static: true,
        };
        let boundaries = vec![
            boundary(width / 2.0, 0.0, width, edge),
            boundary(width / 2.0, height, width, edge),
            boundary(0.0, height / 2.0, edge, height),
            boundary(width, height / 2.0, edge, height),
        ];

        let goal_cell = maze.last_cell();
        let goal = BodySpec {
            label: Label::Goal,
            shape: Shape::Rectangle {
                width: unit_x * config.goal_scale,
                height: unit_y * config.goal_scale,
            },
            x: goal_cell.column as f32 * unit_x + unit_x / 2.0,
            y: goal_cell.row as f32 * unit_y + unit_y / 2.0,
            colour: Colour::GREEN,
            is_static: true,
        };

        let ball_cell = maze.first_cell();
        let ball = BodySpec {
            label: Label::Ball,
            shape: Shape::Circle { radius: unit_x.min(unit_y) / config.ball_radius_divisor },
            x: ball_cell.column as f32 * unit_x + unit_x / 2.0,
            y: ball_cell.row as f32 * unit_y + unit_y / 2.0,
            colour: Colour::YELLOW,
            is_static: false,
        };

        SceneLayout {
            unit_x,
            unit_y,
            boundaries,
            walls,
            goal,
            ball,
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::generators;
    use crate::maze::MazeDimensions;

    fn config(width: f32, height: f32) -> GameConfig {
        GameConfig {
            width: Width(width),
            height: Height(height),
            ..GameConfig::default()
        }
    }

    fn maze(rows: usize, columns: usize, seed: u64) -> Maze {
        let dims = MazeDimensions::new(RowsCount(rows), ColumnsCount(columns)).unwrap();
        generators::seeded_maze(dims, seed)
    }

    #[test]
    fn one_wall_per_closed_entry() {
        let m = maze(9, 10, 3);
        let layout = SceneLayout::new(&m, &config(1000.0, 900.0));
        let closed = m.vertical_walls().len() + m.horizontal_walls().len() - m.passages_count();
        assert_eq!(layout.walls.len(), closed);
        // a 9x10 spanning tree leaves 9*9 + 8*10 - 89 walls standing
        assert_eq!(layout.walls.len(), 72);
        assert!(layout.walls.iter().all(|w| w.label == Label::Wall && w.is_static));
    }

    #[test]
    fn single_cell_has_no_inner_walls() {
        let layout = SceneLayout::new(&maze(1, 1, 0), &config(100.0, 100.0));
        assert!(layout.walls.is_empty());
        assert_eq!(layout.boundaries.len(), 4);
    }

    #[test]
    fn walls_sit_on_cell_boundaries() {
        let m = maze(2, 2, 5);
        let layout = SceneLayout::new(&m, &config(200.0, 100.0));
        assert_eq!((layout.unit_x, layout.unit_y), (100.0, 50.0));

        // three of four walls open, so exactly one remains
        assert_eq!(layout.walls.len(), 1);
        let w = layout.walls[0];
        match w.shape {
            Shape::Rectangle { width, height } if width == 100.0 => {
                // horizontal wall between the two rows
                assert_eq!(height, 3.0);
                assert_eq!(w.y, 50.0);
                assert!(w.x == 50.0 || w.x == 150.0);
            }
            Shape::Rectangle { width, height } => {
                // vertical wall between the two columns
                assert_eq!((width, height), (3.0, 50.0));
                assert_eq!(w.x, 100.0);
                assert!(w.y == 25.0 || w.y == 75.0);
            }
            Shape::Circle { .. } => panic!("walls are rectangles"),
        }
    }

    #[test]
    fn goal_in_last_cell_ball_in_first() {
        let layout = SceneLayout::new(&maze(9, 10, 1), &config(1000.0, 900.0));

        assert_eq!((layout.goal.x, layout.goal.y), (950.0, 850.0));
        assert_eq!(layout.goal.shape, Shape::Rectangle { width: 80.0, height: 80.0 });
        assert!(layout.goal.is_static);
        assert_eq!(layout.goal.label, Label::Goal);

        assert_eq!((layout.ball.x, layout.ball.y), (50.0, 50.0));
        match layout.ball.shape {
            Shape::Circle { radius } => assert!((radius - 100.0 / 3.0).abs() < 1e-4),
            _ => panic!("ball is a circle"),
        }
        assert!(!layout.ball.is_static);
    }

    #[test]
    fn boundaries_frame_the_field() {
        let layout = SceneLayout::new(&maze(3, 3, 1), &config(300.0, 150.0));
        let centres = layout.boundaries.iter().map(|b| (b.x, b.y)).collect::<Vec<_>>();
        assert_eq!(centres, vec![(150.0, 0.0), (150.0, 150.0), (0.0, 75.0), (300.0, 75.0)]);
        assert!(layout.boundaries.iter().all(|b| b.label == Label::Boundary));
    }

    #[test]
    fn labels_as_text() {
        assert_eq!(Label::Ball.to_string(), "ball");
        assert_eq!(Label::Goal.as_str(), "goal");
        assert_eq!(Label::Wall.as_str(), "wall");
    }
}
