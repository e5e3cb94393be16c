//! Scene drawing
//!
//! Turns game state into renderer calls. Layout follows a 640x480 playfield;
//! other tuning sizes scale the text anchors with the screen.

use super::{Renderer, colors};
use crate::consts::{GAME_OVER_DIM, PARTICLE_RADIUS};
use crate::platform::Frame;
use crate::sim::{GameState, ObjectKind};
use crate::tuning::Tuning;

/// Catcher bar along the bottom edge
fn draw_catcher<R: Renderer + ?Sized>(r: &mut R, state: &GameState, tuning: &Tuning) {
    r.fill_rect(
        state.catcher_x,
        tuning.catcher_top(),
        tuning.catcher_width,
        tuning.catcher_height,
        colors::CATCHER,
    );
}

/// A running frame: camera feed, catcher, objects, particles and HUD
pub fn draw_playfield<R: Renderer + ?Sized>(
    r: &mut R,
    frame: &Frame,
    state: &GameState,
    tuning: &Tuning,
    time_remaining: u64,
    show_particles: bool,
) {
    r.begin(frame);
    draw_catcher(r, state, tuning);

    for obj in &state.objects {
        let color = match obj.kind {
            ObjectKind::Catch => colors::CATCH_OBJECT,
            ObjectKind::Avoid => colors::AVOID_OBJECT,
        };
        r.fill_circle(obj.x + tuning.object_width / 2, obj.y, obj.radius, color);
    }

    if show_particles {
        for p in &state.particles {
            r.fill_circle(p.pos.x as i32, p.pos.y as i32, PARTICLE_RADIUS, colors::PARTICLE);
        }
    }

    r.text(10, 30, &format!("Score: {}", state.score), 1.0, colors::TEXT);
    r.text(10, 70, &format!("Time: {}", time_remaining), 1.0, colors::TEXT);
}

/// The end screen: dimmed feed with the final and best scores
pub fn draw_game_over<R: Renderer + ?Sized>(r: &mut R, frame: &Frame, state: &GameState, tuning: &Tuning) {
    let (w, h) = (tuning.screen_width, tuning.screen_height);

    r.begin(frame);
    draw_catcher(r, state, tuning);
    r.blend(colors::OVERLAY, GAME_OVER_DIM);

    r.text(w / 6, h / 3, "GAME OVER", 2.0, colors::GAME_OVER);
    r.text(w / 4, h / 2, &format!("Score: {}", state.score), 1.5, colors::TEXT);
    r.text(
        w / 4 - 40,
        h / 2 + 50,
        &format!("High Score: {}", state.high_score),
        1.5,
        colors::TEXT,
    );
    r.text(
        w / 8,
        h / 2 + 120,
        "Press R to Replay or Q to Quit",
        1.0,
        colors::TEXT,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;
    use crate::renderer::Rgb;
    use crate::sim::{FallingObject, Particle};
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use std::time::Duration;

    #[derive(Debug, PartialEq)]
    enum Call {
        Begin,
        Rect(i32, i32, i32, i32, Rgb),
        Circle(i32, i32, i32, Rgb),
        Text(String),
        Blend,
    }

    #[derive(Default)]
    struct Recorder(Vec<Call>);

    impl Renderer for Recorder {
        fn begin(&mut self, _frame: &Frame) {
            self.0.push(Call::Begin);
        }
        fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb) {
            self.0.push(Call::Rect(x, y, w, h, color));
        }
        fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Rgb) {
            self.0.push(Call::Circle(cx, cy, radius, color));
        }
        fn text(&mut self, _x: i32, _y: i32, text: &str, _scale: f32, _color: Rgb) {
            self.0.push(Call::Text(text.to_string()));
        }
        fn blend(&mut self, _color: Rgb, _alpha: f32) {
            self.0.push(Call::Blend);
        }
        fn present(&mut self) -> Result<(), GameError> {
            Ok(())
        }
        fn poll_key(&mut self) -> Result<Option<char>, GameError> {
            Ok(None)
        }
        fn wait_key(&mut self) -> Result<char, GameError> {
            Ok('q')
        }
    }

    fn state() -> GameState {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(0);
        let mut state = GameState::new(&tuning, &mut rng, Duration::ZERO, 9);
        state.catcher_x = 270;
        state.score = 3;
        state.objects = vec![FallingObject {
            id: 1,
            x: 100,
            y: 50,
            kind: ObjectKind::Avoid,
            radius: 12,
            speed: 5,
        }];
        state.particles = vec![Particle {
            pos: Vec2::new(20.5, 30.9),
            vel: Vec2::ZERO,
            lifetime: 4,
        }];
        state
    }

    #[test]
    fn test_playfield_calls() {
        let mut r = Recorder::default();
        let frame = Frame::filled(4, 4, 0, 0);
        draw_playfield(&mut r, &frame, &state(), &Tuning::default(), 17, true);

        assert_eq!(
            r.0,
            vec![
                Call::Begin,
                Call::Rect(270, 460, 100, 20, colors::CATCHER),
                Call::Circle(110, 50, 12, colors::AVOID_OBJECT),
                Call::Circle(20, 30, 3, colors::PARTICLE),
                Call::Text("Score: 3".into()),
                Call::Text("Time: 17".into()),
            ]
        );
    }

    #[test]
    fn test_particles_can_be_hidden() {
        let mut r = Recorder::default();
        let frame = Frame::filled(4, 4, 0, 0);
        draw_playfield(&mut r, &frame, &state(), &Tuning::default(), 17, false);
        assert!(!r.0.iter().any(|c| matches!(c, Call::Circle(_, _, 3, _))));
    }

    #[test]
    fn test_game_over_calls() {
        let mut r = Recorder::default();
        let frame = Frame::filled(4, 4, 0, 0);
        draw_game_over(&mut r, &frame, &state(), &Tuning::default());

        assert_eq!(r.0[0], Call::Begin);
        assert_eq!(r.0[2], Call::Blend);
        assert!(r.0.contains(&Call::Text("GAME OVER".into())));
        assert!(r.0.contains(&Call::Text("Score: 3".into())));
        assert!(r.0.contains(&Call::Text("High Score: 9".into())));
    }
}
