//! Face Catcher - a face-tracked arcade game over a live camera feed
//!
//! Core modules:
//! - `sim`: Simulation (spawning, catcher, collisions, particles, session state)
//! - `platform`: Frame source, face locator and clock collaborators
//! - `renderer`: Drawing primitives, scene composition and terminal presentation
//! - `audio`: Audio cue emitter
//! - `game`: The per-frame loop wiring collaborators to the session
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod error;
pub mod game;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::{CaptureError, GameError};
pub use game::{GameLoop, LoopExit};
pub use highscores::HighScores;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Logical playfield size (camera frames are scaled to this)
    pub const SCREEN_WIDTH: i32 = 640;
    pub const SCREEN_HEIGHT: i32 = 480;

    /// Catcher bar, anchored to the bottom edge
    pub const CATCHER_WIDTH: i32 = 100;
    pub const CATCHER_HEIGHT: i32 = 20;

    /// Horizontal footprint of a falling object used for spawn bounds and drawing
    pub const OBJECT_WIDTH: i32 = 20;
    pub const OBJECT_MIN_RADIUS: i32 = 10;
    pub const OBJECT_MAX_RADIUS: i32 = 30;

    /// Falling speed in pixels per tick
    pub const INITIAL_SPEED: i32 = 5;
    pub const MAX_SPEED: i32 = 20;
    /// Speed goes up by one every this many seconds
    pub const SPEED_RAMP_SECS: u64 = 5;

    /// Session length
    pub const GAME_DURATION_SECS: u64 = 25;

    /// Spawn placement
    pub const MIN_SPAWN_DISTANCE: i32 = 50;
    pub const SAFE_ZONE: i32 = 30;
    pub const MAX_SPAWN_ATTEMPTS: u32 = 64;

    /// Population floor is BASE_POPULATION + elapsed / POPULATION_RAMP_SECS
    pub const BASE_POPULATION: usize = 5;
    pub const POPULATION_RAMP_SECS: u64 = 5;

    /// Particle bursts on catches
    pub const PARTICLE_BURST: usize = 10;
    pub const PARTICLE_LIFETIME: u32 = 20;
    pub const PARTICLE_MAX_SPEED: f32 = 3.0;
    pub const PARTICLE_RADIUS: i32 = 3;

    /// Audio cues (Hz, ms)
    pub const CATCH_CUE_HZ: u32 = 1000;
    pub const AVOID_CUE_HZ: u32 = 500;
    pub const CUE_DURATION_MS: u32 = 200;

    /// End screen darkening
    pub const GAME_OVER_DIM: f32 = 0.7;
}
