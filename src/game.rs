use log::{debug, info};

use crate::config::GameConfig;
use crate::errors::*;
use crate::maze::Maze;
use crate::physics::{BodyHandle, World};
use crate::scene::{Label, SceneLayout};

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum WinState {
    Playing,
    /// Terminal, there is no way back to `Playing`.
    Won,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Arrow {
    Up,
    Down,
    Left,
    Right,
}

/// Velocity change for a released arrow key, in pixels per step.
///
/// Down is twice as strong as the other directions. That is how the game has
/// always played, so it is kept rather than evened out.
pub fn velocity_increment(arrow: Arrow) -> (f32, f32) {
    match arrow {
        Arrow::Right => (5.0, 0.0),
        Arrow::Left => (-5.0, 0.0),
        Arrow::Up => (0.0, -5.0),
        Arrow::Down => (0.0, 10.0),
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum GameEvent {
    KeyReleased(Arrow),
    CollisionStarted(BodyHandle, BodyHandle),
}

/// One game: owns the maze, the physics world built from it and the win state.
pub struct Session {
    config: GameConfig,
    maze: Maze,
    world: World,
    ball: BodyHandle,
    goal: BodyHandle,
    state: WinState,
    win_indicator_visible: bool,
}

impl Session {
    pub fn new(maze: Maze, config: GameConfig) -> Session {
        let layout = SceneLayout::new(&maze, &config);
        let mut world = World::new(config.step_seconds());

        for spec in layout.boundaries.iter().chain(layout.walls.iter()) {
            let _ = world.add_body(spec);
        }
        let goal = world.add_body(&layout.goal);
        let ball = world.add_body(&layout.ball);

        info!("scene built: {} bodies, {} walls in a {}x{} maze, cell {}x{}",
              world.body_count(),
              layout.walls.len(),
              maze.rows().0,
              maze.columns().0,
              layout.unit_x,
              layout.unit_y);

        Session {
            config,
            maze,
            world,
            ball,
            goal,
            state: WinState::Playing,
            win_indicator_visible: false,
        }
    }

    #[inline]
    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    #[inline]
    pub fn world(&self) -> &World {
        &self.world
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn ball(&self) -> BodyHandle {
        self.ball
    }

    #[inline]
    pub fn goal(&self) -> BodyHandle {
        self.goal
    }

    #[inline]
    pub fn state(&self) -> WinState {
        self.state
    }

    #[inline]
    pub fn is_win_indicator_visible(&self) -> bool {
        self.win_indicator_visible
    }

    pub fn dispatch(&mut self, event: GameEvent) -> Result<()> {
        match event {
            GameEvent::KeyReleased(arrow) => self.handle_key_release(arrow),
            GameEvent::CollisionStarted(a, b) => self.handle_collision(a, b),
        }
    }

    /// Nudge the ball's current velocity in the arrow's direction.
    pub fn handle_key_release(&mut self, arrow: Arrow) -> Result<()> {
        let (dx, dy) = velocity_increment(arrow);
        let scale = self.config.steps_per_second;
        let (x, y) = self.world.velocity(self.ball)?;
        self.world.set_velocity(self.ball, x + dx * scale, y + dy * scale)
    }

    /// The game is won the first time the ball and the goal touch. Any other
    /// pair, or a repeat once won, changes nothing.
    pub fn handle_collision(&mut self, a: BodyHandle, b: BodyHandle) -> Result<()> {
        let labels = (self.world.label(a), self.world.label(b));
        let is_ball_and_goal = match labels {
            (Some(Label::Ball), Some(Label::Goal)) | (Some(Label::Goal), Some(Label::Ball)) => true,
            _ => false,
        };

        if !is_ball_and_goal {
            debug!("ignoring collision {:?}", labels);
            return Ok(());
        }
        if self.state == WinState::Won {
            return Ok(());
        }
        self.win()
    }

    /// Step the simulation once and feed the collisions it reports back in.
    pub fn tick(&mut self) -> Result<()> {
        for (a, b) in self.world.step() {
            self.dispatch(GameEvent::CollisionStarted(a, b))?;
        }
        Ok(())
    }

    fn win(&mut self) -> Result<()> {
        self.state = WinState::Won;
        self.win_indicator_visible = true;
        self.world.set_gravity(0.0, self.config.win_gravity);

        let walls = self.world.bodies_labelled(Label::Wall);
        for wall in &walls {
            self.world.set_static(*wall, false)?;
        }
        info!("goal reached, releasing {} walls", walls.len());
        Ok(())
    }
}
