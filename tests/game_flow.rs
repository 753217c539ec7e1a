use maze_ball::{
    config::GameConfig,
    displays::{MazeText, PathDisplay},
    game::{Arrow, GameEvent, Session, WinState},
    generators,
    maze::MazeDimensions,
    pathing,
    scene::Label,
    units::{ColumnsCount, RowsCount},
};

fn dims(rows: usize, columns: usize) -> MazeDimensions {
    MazeDimensions::new(RowsCount(rows), ColumnsCount(columns)).unwrap()
}

#[test]
fn ball_starting_on_the_goal_wins_after_one_step() {
    // In a one cell maze the ball and the goal share the cell and overlap.
    let maze = generators::seeded_maze(dims(1, 1), 0);
    let mut session = Session::new(maze, GameConfig::default());
    assert_eq!(session.state(), WinState::Playing);

    session.tick().unwrap();

    assert_eq!(session.state(), WinState::Won);
    assert!(session.is_win_indicator_visible());
    assert!(session.world().gravity().1 > 0.0);
}

fn heights(session: &Session, label: Label) -> Vec<f32> {
    session.world()
        .bodies_labelled(label)
        .into_iter()
        .map(|h| session.world().position(h).unwrap().1)
        .collect()
}

#[test]
fn walls_fall_after_winning() {
    let maze = generators::seeded_maze(dims(4, 4), 9);
    let mut session = Session::new(maze, GameConfig::for_viewport(405, 405));
    let walls_before = heights(&session, Label::Wall);
    let boundaries_before = heights(&session, Label::Boundary);
    let goal_before = session.world().position(session.goal()).unwrap();

    let (ball, goal) = (session.ball(), session.goal());
    session.dispatch(GameEvent::CollisionStarted(ball, goal)).unwrap();
    for _ in 0..30 {
        session.tick().unwrap();
    }

    for wall in session.world().bodies_labelled(Label::Wall) {
        assert!(!session.world().is_static(wall).unwrap());
    }
    // Walls standing on the floor, or on other walls that do, cannot drop,
    // so only the total is checked here.
    let walls_after = heights(&session, Label::Wall);
    assert_eq!(walls_after.len(), walls_before.len());
    let drop = walls_after.iter().sum::<f32>() - walls_before.iter().sum::<f32>();
    assert!(drop > 10.0, "walls dropped {} in total", drop);

    assert_eq!(heights(&session, Label::Boundary), boundaries_before);
    assert_eq!(session.world().position(goal).unwrap(), goal_before);
    assert_eq!(session.state(), WinState::Won);
}

#[test]
fn win_after_the_ball_has_come_to_rest_still_drops_walls() {
    let maze = generators::seeded_maze(dims(4, 4), 9);
    let mut session = Session::new(maze, GameConfig::for_viewport(405, 405));
    for _ in 0..300 {
        session.tick().unwrap();
    }
    let before = heights(&session, Label::Wall).iter().sum::<f32>();

    let (ball, goal) = (session.ball(), session.goal());
    session.dispatch(GameEvent::CollisionStarted(ball, goal)).unwrap();
    for _ in 0..30 {
        session.tick().unwrap();
    }

    let after = heights(&session, Label::Wall).iter().sum::<f32>();
    assert!(after - before > 10.0, "walls dropped {} in total", after - before);
}

#[test]
fn steering_moves_the_ball() {
    let maze = generators::seeded_maze(dims(9, 10), 5);
    let mut session = Session::new(maze, GameConfig::default());
    let ball = session.ball();
    let (x0, y0) = session.world().position(ball).unwrap();

    session.dispatch(GameEvent::KeyReleased(Arrow::Down)).unwrap();
    session.tick().unwrap();

    let (x1, y1) = session.world().position(ball).unwrap();
    assert!((x1 - x0).abs() < 1e-3);
    assert!(y1 > y0);
}

#[test]
fn generated_maze_prints_its_solution() {
    let maze = generators::seeded_maze(dims(9, 10), 77);
    assert!(pathing::is_spanning_tree(&maze));

    let path = pathing::solution(&maze).unwrap();
    let display = PathDisplay::new(&path);
    let text = format!("{}", MazeText::new(&maze, Some(&display)));
    assert_eq!(text.lines().count(), 19);
    assert!(text.contains('S'));
    assert!(text.contains('G'));
}
