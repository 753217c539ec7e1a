use docopt::Docopt;
use log::info;
use serde_derive::Deserialize;
use maze_ball::{
    displays::{MazeText, PathDisplay, StartGoalDisplay},
    errors::*,
    generators,
    maze::{Maze, MazeDimensions},
    pathing,
    units::{ColumnsCount, RowsCount},
};

const USAGE: &str = "Maze Ball

Usage:
    maze_ball -h | --help
    maze_ball text [--rows=<n>] [--columns=<n>] [--seed=<n>] [--show-path]
    maze_ball play [--rows=<n>] [--columns=<n>] [--seed=<n>] [--width=<px>] [--height=<px>]

Options:
    -h --help          Show this screen.
    --rows=<n>         Number of cell rows in the maze [default: 9].
    --columns=<n>      Number of cell columns in the maze [default: 10].
    --seed=<n>         Seed the maze generator for a reproducible maze.
    --show-path        Draw the route from the start (S) to the goal (G).
    --width=<px>       Game window width in pixels [default: 1280].
    --height=<px>      Game window height in pixels [default: 720].
";

#[derive(Debug, Deserialize)]
struct MazeArgs {
    cmd_text: bool,
    cmd_play: bool,
    flag_rows: usize,
    flag_columns: usize,
    flag_seed: Option<u64>,
    flag_show_path: bool,
    flag_width: u32,
    flag_height: u32,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(ref e) = run() {
        eprintln!("error: {}", e);
        for cause in e.iter().skip(1) {
            eprintln!("caused by: {}", cause);
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {

    let args: MazeArgs = match Docopt::new(USAGE).and_then(|d| d.deserialize()) {
        Ok(args) => args,
        // --help is reported as a non fatal "error"
        Err(e) if !e.fatal() => e.exit(),
        Err(e) => return Err(e.into()),
    };

    let dimensions = MazeDimensions::new(RowsCount(args.flag_rows), ColumnsCount(args.flag_columns))?;
    let maze = match args.flag_seed {
        Some(seed) => generators::seeded_maze(dimensions, seed),
        None => generators::random_maze(dimensions),
    };
    info!("generated {}x{} maze with {} passages",
          args.flag_rows,
          args.flag_columns,
          maze.passages_count());

    if args.cmd_play {
        play(maze, &args)
    } else {
        print_maze(&maze, &args)
    }
}

fn print_maze(maze: &Maze, args: &MazeArgs) -> Result<()> {
    if args.flag_show_path {
        let path = pathing::solution(maze).ok_or("The maze has no route from start to goal")?;
        let display = PathDisplay::new(&path);
        println!("{}", MazeText::new(maze, Some(&display)));
    } else {
        let display = StartGoalDisplay::for_maze(maze);
        println!("{}", MazeText::new(maze, Some(&display)));
    }
    Ok(())
}

#[cfg(feature = "sdl")]
fn play(maze: Maze, args: &MazeArgs) -> Result<()> {
    maze_ball::renderers::play(maze, args.flag_width, args.flag_height)
}

#[cfg(not(feature = "sdl"))]
fn play(_maze: Maze, _args: &MazeArgs) -> Result<()> {
    Err(ErrorKind::FrontendUnavailable.into())
}
