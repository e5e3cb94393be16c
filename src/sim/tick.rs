//! Per-frame simulation step
//!
//! Advances a running session by one tick: catcher tracking, falling objects,
//! collision resolution, population control and particles.

use std::time::Duration;

use glam::Vec2;
use rand::Rng;

use super::catcher::{self, FaceBox};
use super::collision;
use super::particles;
use super::state::{GameEvent, GameState, ObjectKind};
use crate::tuning::Tuning;

/// Inputs for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// First detected face this frame, if any
    pub face: Option<FaceBox>,
    /// Time since the session started
    pub elapsed: Duration,
}

/// Falling speed for a given session age
pub fn current_speed(elapsed: Duration, tuning: &Tuning) -> i32 {
    let ramp = elapsed.as_secs() / tuning.speed_ramp_secs;
    let speed = (tuning.initial_speed as u64).saturating_add(ramp);
    speed.min(tuning.max_speed as u64) as i32
}

/// Minimum number of live objects for a given session age
pub fn population_floor(elapsed: Duration, tuning: &Tuning) -> usize {
    let extra = elapsed.as_secs() / tuning.population_ramp_secs;
    tuning.base_population.saturating_add(extra as usize)
}

/// Advance the game state by one tick
pub fn tick<R: Rng + ?Sized>(
    state: &mut GameState,
    input: &TickInput,
    tuning: &Tuning,
    rng: &mut R,
) -> Vec<GameEvent> {
    let mut events = Vec::new();

    state.catcher_x = catcher::track(state.catcher_x, input.face, tuning);

    let speed = current_speed(input.elapsed, tuning);
    state.current_speed = speed;

    // Move, then sort objects into survivors and removals
    let mut survivors = Vec::with_capacity(state.objects.len());
    let mut removed = 0usize;
    for mut obj in std::mem::take(&mut state.objects) {
        obj.y += speed;

        if collision::hits_catcher(&obj, state.catcher_x, tuning) {
            match obj.kind {
                ObjectKind::Catch => {
                    state.score += 1;
                    state.catches += 1;
                    let origin = Vec2::new(obj.x as f32 + obj.radius as f32 / 2.0, obj.y as f32);
                    particles::burst(&mut state.particles, origin, tuning, rng);
                    log::debug!("Caught object {} at x={} (score {})", obj.id, obj.x, state.score);
                    events.push(GameEvent::Caught { x: obj.x, y: obj.y });
                }
                ObjectKind::Avoid => {
                    state.score -= 1;
                    state.avoids += 1;
                    log::debug!("Hit avoid object {} at x={} (score {})", obj.id, obj.x, state.score);
                    events.push(GameEvent::Avoided { x: obj.x, y: obj.y });
                }
            }
            removed += 1;
        } else if collision::below_screen(&obj, tuning) {
            events.push(GameEvent::Missed);
            removed += 1;
        } else {
            survivors.push(obj);
        }
    }
    state.objects = survivors;

    // Replace removals one for one
    for _ in 0..removed {
        state.spawn_object(speed, tuning, rng);
    }

    // Population grows with session age
    let floor = population_floor(input.elapsed, tuning);
    while state.objects.len() < floor {
        state.spawn_object(speed, tuning, rng);
    }

    particles::step(&mut state.particles);

    events
}
