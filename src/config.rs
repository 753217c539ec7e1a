use crate::units::{Height, Width};

/// Tunables for the scene and the simulation.
///
/// Velocities and velocity increments are in the classic "pixels per step"
/// sense and get scaled by `steps_per_second` when handed to the physics world.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Playing field size, already shrunk by the viewport margin.
    pub width: Width,
    pub height: Height,
    pub wall_thickness: f32,
    pub boundary_thickness: f32,
    /// Goal side as a fraction of the cell size.
    pub goal_scale: f32,
    /// Ball radius is the smaller cell side divided by this.
    pub ball_radius_divisor: f32,
    /// Downward acceleration switched on when the game is won, pixels/s^2.
    pub win_gravity: f32,
    pub steps_per_second: f32,
}

/// Space left free around the playing field inside the window.
pub const VIEWPORT_MARGIN: f32 = 5.0;

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig::for_viewport(1280, 720)
    }
}

impl GameConfig {
    /// Field sized from a viewport queried once at startup.
    pub fn for_viewport(viewport_width: u32, viewport_height: u32) -> GameConfig {
        GameConfig {
            width: Width((viewport_width as f32 - VIEWPORT_MARGIN).max(1.0)),
            height: Height((viewport_height as f32 - VIEWPORT_MARGIN).max(1.0)),
            wall_thickness: 3.0,
            boundary_thickness: 1.0,
            goal_scale: 0.8,
            ball_radius_divisor: 3.0,
            win_gravity: 980.0,
            steps_per_second: 60.0,
        }
    }

    #[inline]
    pub fn step_seconds(&self) -> f32 {
        1.0 / self.steps_per_second
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn viewport_margin_removed() {
        let config = GameConfig::for_viewport(805, 605);
        assert_eq!(config.width, Width(800.0));
        assert_eq!(config.height, Height(600.0));
    }

    #[test]
    fn tiny_viewport_still_has_a_field() {
        let config = GameConfig::for_viewport(2, 0);
        assert_eq!(config.width, Width(1.0));
        assert_eq!(config.height, Height(1.0));
    }

    #[test]
    fn default_step() {
        let config = GameConfig::default();
        assert!((config.step_seconds() - 1.0 / 60.0).abs() < 1e-6);
    }
}
