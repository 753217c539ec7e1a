//! **maze_ball** generates random perfect mazes and turns them into a physics
//! game: steer a ball from the top left cell to the goal in the bottom right
//! and the walls come tumbling down.

#[macro_use]
extern crate error_chain;

pub mod cells;
pub mod config;
pub mod displays;
pub mod errors;
pub mod game;
pub mod generators;
pub mod matrix;
pub mod maze;
pub mod pathing;
pub mod physics;
#[cfg(feature = "sdl")]
pub mod renderers;
pub mod scene;
pub mod units;
#[cfg(feature = "sdl")]
mod sdl;
mod utils;
