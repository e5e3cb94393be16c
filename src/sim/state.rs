//! Game state and core simulation types

use std::time::Duration;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::spawn;
use crate::tuning::Tuning;

/// Falling object types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectKind {
    /// Worth a point when caught
    Catch,
    /// Costs a point when caught
    Avoid,
}

/// A falling object entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallingObject {
    pub id: u32,
    pub x: i32,
    /// Grows every tick; 0 is the top of the screen
    pub y: i32,
    pub kind: ObjectKind,
    pub radius: i32,
    /// Falling speed when this object was spawned
    pub speed: i32,
}

/// A particle for visual effects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Ticks left to live
    pub lifetime: u32,
}

/// Something that happened during a tick, for audio and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A catch object hit the catcher
    Caught { x: i32, y: i32 },
    /// An avoid object hit the catcher
    Avoided { x: i32, y: i32 },
    /// An object fell past the bottom edge
    Missed,
    /// Time ran out
    SessionEnded {
        score: i32,
        high_score: i32,
        new_high_score: bool,
    },
}

/// Complete state of one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Net score (catches minus avoids)
    pub score: i32,
    /// Best score seen by this process, carried across resets
    pub high_score: i32,
    /// Left edge of the catcher bar
    pub catcher_x: i32,
    /// Live falling objects
    pub objects: Vec<FallingObject>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    /// Clock timestamp the session started at
    pub started_at: Duration,
    /// Falling speed used by the most recent tick
    pub current_speed: i32,
    /// Catch objects collected this session
    pub catches: u32,
    /// Avoid objects collected this session
    pub avoids: u32,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a fresh session state with a single falling object
    pub fn new<R: Rng + ?Sized>(
        tuning: &Tuning,
        rng: &mut R,
        started_at: Duration,
        high_score: i32,
    ) -> Self {
        let mut state = Self {
            score: 0,
            high_score,
            catcher_x: tuning.screen_width / 2,
            objects: Vec::new(),
            particles: Vec::new(),
            started_at,
            current_speed: tuning.initial_speed,
            catches: 0,
            avoids: 0,
            next_id: 1,
        };

        state.spawn_object(tuning.initial_speed, tuning, rng);

        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Time since the session started
    pub fn elapsed(&self, now: Duration) -> Duration {
        now.saturating_sub(self.started_at)
    }

    /// Spawn one falling object at `speed`, placed away from the live ones
    pub fn spawn_object<R: Rng + ?Sized>(&mut self, speed: i32, tuning: &Tuning, rng: &mut R) {
        let placement = spawn::place(&self.objects, tuning, rng);
        let id = self.next_entity_id();
        self.objects.push(FallingObject {
            id,
            x: placement.x,
            y: 0,
            kind: placement.kind,
            radius: placement.radius,
            speed,
        });
    }
}
