use log::{info, warn};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};
use sdl2::render::WindowCanvas;
use std::time::{Duration, Instant};

use crate::config::GameConfig;
use crate::errors::*;
use crate::game::{Arrow, GameEvent, Session};
use crate::maze::Maze;
use crate::physics::BodyView;
use crate::scene::{Colour, Shape};
use crate::sdl;

/// Open a window of the given size, lay the maze out to fill it and run the
/// game until the window is closed or `q`/`Esc` is pressed.
pub fn play(maze: Maze, window_width: u32, window_height: u32) -> Result<()> {

    let sdl_setup = sdl::init()?;

    let window = sdl_setup.video_subsystem
        .window("Maze Ball", window_width, window_height)
        .position_centered()
        .build()
        .chain_err(|| "Failed to create the game window")?;
    let mut canvas = window.into_canvas()
        .present_vsync()
        .accelerated()
        .build()
        .chain_err(|| "Failed to create a renderer for the game window")?;

    // The playing field is sized once from what the window really got.
    let (viewport_width, viewport_height) = canvas.output_size()?;
    let mut session = Session::new(maze, GameConfig::for_viewport(viewport_width, viewport_height));
    let step = Duration::from_secs_f32(session.config().step_seconds());
    info!("playing a {}x{} maze at {} steps per second",
          session.maze().rows().0,
          session.maze().columns().0,
          session.config().steps_per_second);

    let mut events = sdl_setup.sdl_context.event_pump()?;
    let mut last_frame = Instant::now();
    let mut unsimulated = Duration::from_secs(0);
    let mut announced = false;

    'event: loop {
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. } => break 'event,
                Event::KeyDown { keycode: Some(Keycode::Q), .. } |
                Event::KeyDown { keycode: Some(Keycode::Escape), .. } => break 'event,
                Event::KeyUp { keycode: Some(keycode), .. } => {
                    if let Some(arrow) = arrow_for(keycode) {
                        session.dispatch(GameEvent::KeyReleased(arrow))?;
                    }
                }
                _ => continue,
            }
        }

        // Fixed physics steps whatever the frame rate.
        let now = Instant::now();
        unsimulated += now - last_frame;
        last_frame = now;
        while unsimulated >= step {
            session.tick()?;
            unsimulated -= step;
        }

        if session.is_win_indicator_visible() && !announced {
            if let Err(e) = canvas.window_mut().set_title("Maze Ball - You won!") {
                warn!("could not retitle the window: {}", e);
            }
            announced = true;
        }

        draw(&mut canvas, &session)?;
        canvas.present();
    }

    info!("game closed");
    Ok(())
}

fn arrow_for(keycode: Keycode) -> Option<Arrow> {
    match keycode {
        Keycode::Up => Some(Arrow::Up),
        Keycode::Down => Some(Arrow::Down),
        Keycode::Left => Some(Arrow::Left),
        Keycode::Right => Some(Arrow::Right),
        _ => None,
    }
}

fn sdl_colour(colour: Colour) -> Color {
    Color::RGB(colour.r, colour.g, colour.b)
}

fn draw(canvas: &mut WindowCanvas, session: &Session) -> Result<()> {
    canvas.set_draw_color(Color::RGB(0x20, 0x20, 0x20));
    canvas.clear();

    for body in session.world().iter_bodies() {
        canvas.set_draw_color(sdl_colour(body.colour));
        match body.shape {
            Shape::Circle { radius } => fill_circle(canvas, body.x, body.y, radius)?,
            Shape::Rectangle { .. } => fill_rectangle(canvas, &body)?,
        }
    }

    if session.is_win_indicator_visible() {
        let (w, h) = canvas.output_size()?;
        canvas.set_draw_color(sdl_colour(Colour::GREEN));
        canvas.fill_rect(Rect::new(0, (h / 2) as i32 - 40, w, 80))?;
        canvas.set_draw_color(sdl_colour(Colour::YELLOW));
        canvas.draw_rect(Rect::new(4, (h / 2) as i32 - 36, w.saturating_sub(8), 72))?;
    }
    Ok(())
}

// Scanline fill, one horizontal line per pixel row of the circle.
fn fill_circle(canvas: &mut WindowCanvas, cx: f32, cy: f32, radius: f32) -> Result<()> {
    let r = radius.round() as i32;
    for dy in -r..=r {
        let half_width = ((r * r - dy * dy) as f32).sqrt() as i32;
        let y = cy as i32 + dy;
        canvas.draw_line(Point::new(cx as i32 - half_width, y), Point::new(cx as i32 + half_width, y))?;
    }
    Ok(())
}

fn fill_rectangle(canvas: &mut WindowCanvas, body: &BodyView) -> Result<()> {
    let corners = match body.corners() {
        Some(corners) => corners,
        None => return Ok(()),
    };

    if body.angle.abs() < 1e-3 {
        let (left, top) = corners[0];
        let (right, bottom) = corners[2];
        let rect = Rect::new(left.round() as i32,
                             top.round() as i32,
                             (right - left).round().max(1.0) as u32,
                             (bottom - top).round().max(1.0) as u32);
        canvas.fill_rect(rect)?;
    } else {
        // falling walls spin, an outline is enough
        let mut points = corners.iter()
            .map(|&(x, y)| Point::new(x.round() as i32, y.round() as i32))
            .collect::<Vec<_>>();
        points.push(points[0]);
        canvas.draw_lines(points.as_slice())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn arrow_keys_map_to_arrows() {
        assert_eq!(arrow_for(Keycode::Up), Some(Arrow::Up));
        assert_eq!(arrow_for(Keycode::Down), Some(Arrow::Down));
        assert_eq!(arrow_for(Keycode::Left), Some(Arrow::Left));
        assert_eq!(arrow_for(Keycode::Right), Some(Arrow::Right));
    }

    #[test]
    fn other_keys_are_ignored() {
        for keycode in [Keycode::Q, Keycode::Escape, Keycode::Space, Keycode::W].iter() {
            assert_eq!(arrow_for(*keycode), None);
        }
    }

    #[test]
    fn colours_carry_over() {
        assert_eq!(sdl_colour(Colour::GREEN), Color::RGB(0, 0x80, 0));
    }
}
